use std::io::Write;

use crate::{
    environment::{Bindings, EnvironmentPointer},
    error::{CallError, Result, RuntimeError},
    expr::{BinaryOp, Expr, ExprVisitor, LogicalOp, Operator, UnaryOp},
    literal::Literal,
    native_functions::Clock,
    object::Object,
    report::{ErrorReporter, StderrReporter},
    token::Token,
};

/// Evaluates expression trees to runtime values.
pub struct Interpreter {
    bindings: Box<dyn Bindings>,
    output: Box<dyn Write>,
    reporter: Box<dyn ErrorReporter>,
    had_runtime_error: bool,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Globals with the native functions defined, results printed to stdout
    /// and errors to stderr.
    pub fn new() -> Self {
        let mut globals = EnvironmentPointer::default();
        globals.define("clock".to_owned(), Object::callable(Clock));
        Self {
            bindings: Box::new(globals),
            output: Box::new(std::io::stdout()),
            reporter: Box::new(StderrReporter),
            had_runtime_error: false,
        }
    }

    pub fn with_bindings(mut self, bindings: Box<dyn Bindings>) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn with_output(mut self, output: Box<dyn Write>) -> Self {
        self.output = output;
        self
    }

    pub fn with_reporter(mut self, reporter: Box<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn bindings(&self) -> &dyn Bindings {
        self.bindings.as_ref()
    }

    pub fn bindings_mut(&mut self) -> &mut dyn Bindings {
        self.bindings.as_mut()
    }

    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    pub fn reset_runtime_error(&mut self) {
        self.had_runtime_error = false;
    }

    /// Evaluates one top-level expression and prints its value.
    ///
    /// A runtime error is handed to the reporter instead; the interpreter
    /// stays usable for the next expression. Returns the printed text.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn interpret(&mut self, expr: &Expr) -> Option<String> {
        match self.evaluate(expr) {
            Ok(value) => {
                let text = Self::stringify(&value);
                if let Err(err) = writeln!(self.output, "{text}") {
                    tracing::warn!(%err, "failed to write result");
                }
                Some(text)
            }
            Err(err) => {
                self.runtime_error(err);
                None
            }
        }
    }

    pub fn evaluate(&mut self, expr: &Expr) -> Result<Object> {
        expr.accept(self)
    }

    pub fn stringify(value: &Object) -> String {
        value.to_string()
    }

    fn runtime_error(&mut self, error: RuntimeError) {
        tracing::debug!(line = error.token().line, %error, "runtime error");
        self.reporter.runtime_error(&error);
        self.had_runtime_error = true;
    }

    fn check_number_operand(operator: &Token, operand: &Object) -> Result<f64> {
        operand
            .as_number()
            .ok_or_else(|| RuntimeError::type_error(operator, "Operand must be a number."))
    }

    fn check_number_operands(
        operator: &Token,
        left: &Object,
        right: &Object,
    ) -> Result<(f64, f64)> {
        match (left.as_number(), right.as_number()) {
            (Some(left), Some(right)) => Ok((left, right)),
            _ => Err(RuntimeError::type_error(
                operator,
                "Operands must be numbers.",
            )),
        }
    }
}

impl ExprVisitor for Interpreter {
    type Output = Result<Object>;

    fn visit_literal(&mut self, value: &Literal) -> Result<Object> {
        Ok(Object::Literal(value.clone()))
    }

    fn visit_grouping(&mut self, inner: &Expr) -> Result<Object> {
        self.evaluate(inner)
    }

    fn visit_unary(&mut self, operator: &Operator<UnaryOp>, right: &Expr) -> Result<Object> {
        let right = self.evaluate(right)?;
        match operator.kind {
            UnaryOp::Negate => {
                let right = Self::check_number_operand(&operator.token, &right)?;
                Ok((-right).into())
            }
            UnaryOp::Not => Ok((!right.is_truthy()).into()),
        }
    }

    fn visit_binary(
        &mut self,
        left: &Expr,
        operator: &Operator<BinaryOp>,
        right: &Expr,
    ) -> Result<Object> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;
        let token = &operator.token;

        match operator.kind {
            BinaryOp::Plus => match (left, right) {
                (
                    Object::Literal(Literal::Number(left)),
                    Object::Literal(Literal::Number(right)),
                ) => Ok((left + right).into()),
                (
                    Object::Literal(Literal::String(left)),
                    Object::Literal(Literal::String(right)),
                ) => Ok([left, right].concat().into()),
                _ => Err(RuntimeError::type_error(
                    token,
                    "Operands must be two numbers or two strings.",
                )),
            },
            BinaryOp::Minus => {
                let (left, right) = Self::check_number_operands(token, &left, &right)?;
                Ok((left - right).into())
            }
            BinaryOp::Star => {
                let (left, right) = Self::check_number_operands(token, &left, &right)?;
                Ok((left * right).into())
            }
            BinaryOp::Slash => {
                let (left, right) = Self::check_number_operands(token, &left, &right)?;
                Ok((left / right).into())
            }
            BinaryOp::Greater => {
                let (left, right) = Self::check_number_operands(token, &left, &right)?;
                Ok((left > right).into())
            }
            BinaryOp::GreaterEqual => {
                let (left, right) = Self::check_number_operands(token, &left, &right)?;
                Ok((left >= right).into())
            }
            BinaryOp::Less => {
                let (left, right) = Self::check_number_operands(token, &left, &right)?;
                Ok((left < right).into())
            }
            BinaryOp::LessEqual => {
                let (left, right) = Self::check_number_operands(token, &left, &right)?;
                Ok((left <= right).into())
            }
            BinaryOp::EqualEqual => Ok((left == right).into()),
            BinaryOp::BangEqual => Ok((left != right).into()),
        }
    }

    fn visit_logical(
        &mut self,
        left: &Expr,
        operator: &Operator<LogicalOp>,
        right: &Expr,
    ) -> Result<Object> {
        let left = self.evaluate(left)?;
        let short_circuits = match operator.kind {
            LogicalOp::Or => left.is_truthy(),
            LogicalOp::And => !left.is_truthy(),
        };
        if short_circuits {
            return Ok(left);
        }
        self.evaluate(right)
    }

    fn visit_variable(&mut self, name: &Token) -> Result<Object> {
        Ok(self.bindings.get(name)?)
    }

    fn visit_assign(&mut self, name: &Token, value: &Expr) -> Result<Object> {
        let value = self.evaluate(value)?;
        Ok(self.bindings.assign(name, value)?)
    }

    fn visit_call(&mut self, callee: &Expr, paren: &Token, arguments: &[Expr]) -> Result<Object> {
        let callee = self.evaluate(callee)?;
        let args = arguments
            .iter()
            .map(|arg| self.evaluate(arg))
            .collect::<Result<Vec<_>>>()?;

        match callee {
            Object::Callable(function) => function.invoke(self, paren, args),
            _ => Err(CallError::NotCallable {
                paren: paren.clone(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{error::NameError, expr::OperatorKind, token_type::TokenTy};

    fn op<K: OperatorKind>(lexeme: &str) -> Operator<K> {
        Operator::parse(lexeme, 1).unwrap()
    }

    fn num(n: f64) -> Expr {
        Expr::literal(n)
    }

    fn var(name: &str) -> Token {
        Token::identifier(name, 1)
    }

    #[test]
    fn literals_evaluate_unchanged() {
        let mut intpr = Interpreter::new();
        for lit in [Literal::Nil, true.into(), 2.5.into(), "text".into()] {
            let value = intpr.evaluate(&Expr::Literal(lit.clone())).unwrap();
            assert_eq!(value, Object::Literal(lit));
        }
    }

    #[test]
    fn not_uses_truthiness() {
        let mut intpr = Interpreter::new();
        let not_nil = Expr::unary(op("!"), Expr::literal(()));
        let not_zero = Expr::unary(op("!"), num(0.0));
        let not_empty = Expr::unary(op("!"), Expr::literal(""));
        assert_eq!(intpr.evaluate(&not_nil).unwrap(), Object::from(true));
        assert_eq!(intpr.evaluate(&not_zero).unwrap(), Object::from(false));
        assert_eq!(intpr.evaluate(&not_empty).unwrap(), Object::from(false));
    }

    #[test]
    fn negate_requires_number() {
        let mut intpr = Interpreter::new();
        let ok = Expr::unary(op("-"), Expr::grouping(num(3.0)));
        assert_eq!(intpr.evaluate(&ok).unwrap(), Object::from(-3.0));

        let err = intpr
            .evaluate(&Expr::unary(op("-"), Expr::literal("3")))
            .unwrap_err();
        assert_eq!(err.to_string(), "Operand must be a number.");
        assert_eq!(err.token().ty, TokenTy::Minus);
    }

    #[test]
    fn arithmetic_and_comparison() {
        let mut intpr = Interpreter::new();
        let cases = [
            ("-", 7.0, 2.0, Object::from(5.0)),
            ("*", 7.0, 2.0, Object::from(14.0)),
            ("/", 7.0, 2.0, Object::from(3.5)),
            (">", 7.0, 2.0, Object::from(true)),
            (">=", 2.0, 2.0, Object::from(true)),
            ("<", 7.0, 2.0, Object::from(false)),
            ("<=", 2.0, 2.0, Object::from(true)),
        ];
        for (lexeme, left, right, expected) in cases {
            let expr = Expr::binary(num(left), op(lexeme), num(right));
            assert_eq!(intpr.evaluate(&expr).unwrap(), expected, "{lexeme}");
        }
    }

    #[test]
    fn division_follows_float_semantics() {
        let mut intpr = Interpreter::new();
        let expr = Expr::binary(num(1.0), op("/"), num(0.0));
        assert_eq!(intpr.evaluate(&expr).unwrap(), Object::from(f64::INFINITY));

        let nan = Expr::binary(num(0.0), op("/"), num(0.0));
        let value = intpr.evaluate(&nan).unwrap();
        assert!(value.as_number().unwrap().is_nan());
    }

    #[test]
    fn nan_is_not_equal_to_itself() {
        let mut intpr = Interpreter::new();
        let nan = || Expr::grouping(Expr::binary(num(0.0), op("/"), num(0.0)));
        let eq = Expr::binary(nan(), op("=="), nan());
        assert_eq!(intpr.evaluate(&eq).unwrap(), Object::from(false));
        let ne = Expr::binary(nan(), op("!="), nan());
        assert_eq!(intpr.evaluate(&ne).unwrap(), Object::from(true));
    }

    #[test]
    fn plus_does_not_coerce() {
        let mut intpr = Interpreter::new();
        let sum = Expr::binary(num(1.0), op("+"), num(2.0));
        assert_eq!(intpr.evaluate(&sum).unwrap(), Object::from(3.0));

        let concat = Expr::binary(Expr::literal("a"), op("+"), Expr::literal("b"));
        assert_eq!(intpr.evaluate(&concat).unwrap(), Object::from("ab"));

        let mixed = Expr::binary(num(1.0), op("+"), Expr::literal("a"));
        let err = intpr.evaluate(&mixed).unwrap_err();
        assert!(matches!(err, RuntimeError::Type { .. }));
        assert_eq!(err.to_string(), "Operands must be two numbers or two strings.");
    }

    #[test]
    fn comparison_type_error_names_operator() {
        let mut intpr = Interpreter::new();
        let expr = Expr::binary(Expr::literal("a"), op("<"), num(1.0));
        let err = intpr.evaluate(&expr).unwrap_err();
        assert_eq!(err.to_string(), "Operands must be numbers.");
        assert_eq!(err.token().lexeme, "<");
    }

    #[test]
    fn equality_never_fails() {
        let mut intpr = Interpreter::new();
        let cases = [
            (num(1.0), "==", Expr::literal("1"), false),
            (Expr::literal(()), "==", Expr::literal(()), true),
            (Expr::literal(()), "==", Expr::literal(false), false),
            (Expr::literal("x"), "==", Expr::literal("x"), true),
            (num(1.0), "!=", num(2.0), true),
            (Expr::literal(true), "!=", Expr::literal(true), false),
        ];
        for (left, lexeme, right, expected) in cases {
            let expr = Expr::binary(left, op(lexeme), right);
            assert_eq!(intpr.evaluate(&expr).unwrap(), Object::from(expected));
        }
    }

    #[test]
    fn operands_evaluate_left_to_right() {
        let mut intpr = Interpreter::new();
        intpr.bindings_mut().define("x".into(), 1.0.into());

        // (x = 2) - x
        let expr = Expr::binary(
            Expr::assign(var("x"), num(2.0)),
            op("-"),
            Expr::variable(var("x")),
        );
        assert_eq!(intpr.evaluate(&expr).unwrap(), Object::from(0.0));
    }

    #[test]
    fn logical_short_circuits() {
        let mut intpr = Interpreter::new();
        intpr.bindings_mut().define("x".into(), ().into());

        let or = Expr::logical(num(5.0), op("or"), Expr::assign(var("x"), num(1.0)));
        assert_eq!(intpr.evaluate(&or).unwrap(), Object::from(5.0));
        assert_eq!(intpr.bindings().get(&var("x")).unwrap(), Object::from(()));

        let and = Expr::logical(Expr::literal(()), op("and"), Expr::assign(var("x"), num(1.0)));
        assert_eq!(intpr.evaluate(&and).unwrap(), Object::from(()));
        assert_eq!(intpr.bindings().get(&var("x")).unwrap(), Object::from(()));
    }

    #[test]
    fn logical_returns_operand_values() {
        let mut intpr = Interpreter::new();
        let or = Expr::logical(Expr::literal(false), op("or"), Expr::literal("fallback"));
        assert_eq!(intpr.evaluate(&or).unwrap(), Object::from("fallback"));

        let and = Expr::logical(num(0.0), op("and"), Expr::literal("second"));
        assert_eq!(intpr.evaluate(&and).unwrap(), Object::from("second"));
    }

    #[test]
    fn variables_and_assignment() {
        let mut intpr = Interpreter::new();
        intpr.bindings_mut().define("a".into(), "before".into());

        let assign = Expr::assign(var("a"), Expr::literal("after"));
        assert_eq!(intpr.evaluate(&assign).unwrap(), Object::from("after"));
        assert_eq!(
            intpr.evaluate(&Expr::variable(var("a"))).unwrap(),
            Object::from("after")
        );

        let err = intpr.evaluate(&Expr::variable(var("nope"))).unwrap_err();
        assert!(matches!(err, RuntimeError::Name(NameError::Undefined { .. })));

        let err = intpr
            .evaluate(&Expr::assign(var("nope"), num(1.0)))
            .unwrap_err();
        assert_eq!(err.to_string(), "Undefined variable 'nope'.");
    }

    #[test]
    fn calling_non_callables() {
        let mut intpr = Interpreter::new();
        let paren = Token::new(TokenTy::RightParen, ")".into(), None, 2);
        let expr = Expr::call(Expr::literal("clock"), paren, vec![]);
        let err = intpr.evaluate(&expr).unwrap_err();
        assert!(matches!(err, RuntimeError::Call(CallError::NotCallable { .. })));
        assert_eq!(err.to_string(), "Can only call functions and classes.");
        assert_eq!(err.token().line, 2);
    }

    #[test]
    fn calling_clock() {
        let mut intpr = Interpreter::new();
        let paren = Token::new(TokenTy::RightParen, ")".into(), None, 1);
        let expr = Expr::call(Expr::variable(var("clock")), paren, vec![]);
        let value = intpr.evaluate(&expr).unwrap();
        assert!(value.as_number().is_some());
    }

    #[test]
    fn stringify_drops_trailing_zero() {
        assert_eq!(Interpreter::stringify(&4.0.into()), "4");
        assert_eq!(Interpreter::stringify(&4.5.into()), "4.5");
        assert_eq!(Interpreter::stringify(&().into()), "nil");
        assert_eq!(Interpreter::stringify(&"str".into()), "str");
        assert_eq!(Interpreter::stringify(&Object::callable(Clock)), "<native fn clock>");
    }
}
