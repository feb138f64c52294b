use crate::{
    expr::{BinaryOp, Expr, ExprVisitor, LogicalOp, Operator, UnaryOp},
    literal::Literal,
    token::Token,
};

/// Renders an expression in a fully parenthesized prefix form, e.g.
/// `(* (- 123) (group 45.67))`.
pub fn ast_to_string(expr: &Expr) -> String {
    AstPrinter.print(expr)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    fn parenthesize<'e>(&mut self, name: &str, exprs: impl IntoIterator<Item = &'e Expr>) -> String {
        let mut str = String::new();
        str.push('(');
        str.push_str(name);
        for expr in exprs {
            str.push(' ');
            str.push_str(&self.print(expr));
        }
        str.push(')');
        str
    }
}

impl ExprVisitor for AstPrinter {
    type Output = String;

    // TODO: quote and escape string literals so printed trees stay unambiguous.
    fn visit_literal(&mut self, value: &Literal) -> String {
        value.to_string()
    }

    fn visit_grouping(&mut self, inner: &Expr) -> String {
        self.parenthesize("group", [inner])
    }

    fn visit_unary(&mut self, operator: &Operator<UnaryOp>, right: &Expr) -> String {
        self.parenthesize(operator.lexeme(), [right])
    }

    fn visit_binary(&mut self, left: &Expr, operator: &Operator<BinaryOp>, right: &Expr) -> String {
        self.parenthesize(operator.lexeme(), [left, right])
    }

    fn visit_logical(&mut self, left: &Expr, operator: &Operator<LogicalOp>, right: &Expr) -> String {
        self.parenthesize(operator.lexeme(), [left, right])
    }

    fn visit_variable(&mut self, name: &Token) -> String {
        name.lexeme.clone()
    }

    fn visit_assign(&mut self, name: &Token, value: &Expr) -> String {
        self.parenthesize(&format!("assign {}", name.lexeme), [value])
    }

    fn visit_call(&mut self, callee: &Expr, _: &Token, arguments: &[Expr]) -> String {
        self.parenthesize("call", std::iter::once(callee).chain(arguments))
    }
}
