//! Expression core of a Lox tree-walking interpreter.
//!
//! Trees are built by an external parser (or by hand through the [`Expr`]
//! constructors) and consumed by two visitors: [`Interpreter`] evaluates them
//! to [`Object`]s and [`AstPrinter`] renders them in prefix form.

pub mod ast_printer;
pub mod environment;
pub mod error;
pub mod expr;
pub mod interpreter;
pub mod literal;
pub mod lox_callable;
pub mod native_functions;
pub mod object;
pub mod report;
pub mod token;
pub mod token_type;

pub use ast_printer::{ast_to_string, AstPrinter};
pub use environment::{Bindings, EnvironmentPointer};
pub use error::{CallError, NameError, RuntimeError};
pub use expr::{BinaryOp, Expr, ExprVisitor, LogicalOp, Operator, OperatorKind, UnaryOp};
pub use interpreter::Interpreter;
pub use literal::Literal;
pub use lox_callable::LoxCallable;
pub use object::Object;
pub use report::{ErrorReporter, StderrReporter};
pub use token::Token;
pub use token_type::TokenTy;
