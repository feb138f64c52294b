use crate::{literal::Literal, token::Token, token_type::TokenTy};

/// An expression tree. Every node owns its children, so a tree can never
/// share a subexpression between two parents.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary {
        left: Box<Expr>,
        operator: Operator<BinaryOp>,
        right: Box<Expr>,
    },
    Call {
        callee: Box<Expr>,
        paren: Token,
        arguments: Vec<Expr>,
    },
    Grouping(Box<Expr>),
    Literal(Literal),
    Logical {
        left: Box<Expr>,
        operator: Operator<LogicalOp>,
        right: Box<Expr>,
    },
    Unary {
        operator: Operator<UnaryOp>,
        right: Box<Expr>,
    },
    Variable(Token),
    Assign {
        name: Token,
        value: Box<Expr>,
    },
}

/// One operation over expression trees, with a handler per node kind.
pub trait ExprVisitor {
    type Output;

    fn visit_literal(&mut self, value: &Literal) -> Self::Output;
    fn visit_grouping(&mut self, inner: &Expr) -> Self::Output;
    fn visit_unary(&mut self, operator: &Operator<UnaryOp>, right: &Expr) -> Self::Output;
    fn visit_binary(
        &mut self,
        left: &Expr,
        operator: &Operator<BinaryOp>,
        right: &Expr,
    ) -> Self::Output;
    fn visit_logical(
        &mut self,
        left: &Expr,
        operator: &Operator<LogicalOp>,
        right: &Expr,
    ) -> Self::Output;
    fn visit_variable(&mut self, name: &Token) -> Self::Output;
    fn visit_assign(&mut self, name: &Token, value: &Expr) -> Self::Output;
    fn visit_call(&mut self, callee: &Expr, paren: &Token, arguments: &[Expr]) -> Self::Output;
}

impl Expr {
    pub fn accept<V: ExprVisitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Binary {
                left,
                operator,
                right,
            } => visitor.visit_binary(left, operator, right),
            Expr::Call {
                callee,
                paren,
                arguments,
            } => visitor.visit_call(callee, paren, arguments),
            Expr::Grouping(inner) => visitor.visit_grouping(inner),
            Expr::Literal(value) => visitor.visit_literal(value),
            Expr::Logical {
                left,
                operator,
                right,
            } => visitor.visit_logical(left, operator, right),
            Expr::Unary { operator, right } => visitor.visit_unary(operator, right),
            Expr::Variable(name) => visitor.visit_variable(name),
            Expr::Assign { name, value } => visitor.visit_assign(name, value),
        }
    }

    pub fn literal(value: impl Into<Literal>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    pub fn unary(operator: Operator<UnaryOp>, right: Expr) -> Self {
        Expr::Unary {
            operator,
            right: Box::new(right),
        }
    }

    pub fn binary(left: Expr, operator: Operator<BinaryOp>, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn logical(left: Expr, operator: Operator<LogicalOp>, right: Expr) -> Self {
        Expr::Logical {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn variable(name: Token) -> Self {
        Expr::Variable(name)
    }

    pub fn assign(name: Token, value: Expr) -> Self {
        Expr::Assign {
            name,
            value: Box::new(value),
        }
    }

    pub fn call(callee: Expr, paren: Token, arguments: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            paren,
            arguments,
        }
    }
}

/// A closed set of operators sharing one syntactic position.
pub trait OperatorKind: Copy + Sized {
    fn lexeme(self) -> &'static str;
    fn token_ty(self) -> TokenTy;
    fn from_lexeme(lexeme: &str) -> Option<Self>;
    fn from_token_ty(ty: TokenTy) -> Option<Self>;
}

/// An operator together with the token it was read from. The token is what
/// runtime errors point at.
#[derive(Debug, Clone, PartialEq)]
pub struct Operator<K> {
    pub kind: K,
    pub token: Token,
}

impl<K: OperatorKind> Operator<K> {
    pub fn new(kind: K, line: usize) -> Self {
        Self {
            kind,
            token: Token::new(kind.token_ty(), kind.lexeme().to_owned(), None, line),
        }
    }

    pub fn parse(lexeme: &str, line: usize) -> Option<Self> {
        K::from_lexeme(lexeme).map(|kind| Self::new(kind, line))
    }

    /// Wraps a scanned token, or gives it back when it is not an operator of
    /// this kind.
    pub fn from_token(token: Token) -> Result<Self, Token> {
        match K::from_token_ty(token.ty) {
            Some(kind) => Ok(Self { kind, token }),
            None => Err(token),
        }
    }

    pub fn lexeme(&self) -> &str {
        &self.token.lexeme
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Negate,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    Minus,
    Plus,
    Slash,
    Star,
    EqualEqual,
    BangEqual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

static UNARY_OPERATORS: phf::Map<&'static str, UnaryOp> = phf::phf_map! {
    "-" => UnaryOp::Negate,
    "!" => UnaryOp::Not,
};

static BINARY_OPERATORS: phf::Map<&'static str, BinaryOp> = phf::phf_map! {
    ">" =>  BinaryOp::Greater,
    ">=" => BinaryOp::GreaterEqual,
    "<" =>  BinaryOp::Less,
    "<=" => BinaryOp::LessEqual,
    "-" =>  BinaryOp::Minus,
    "+" =>  BinaryOp::Plus,
    "/" =>  BinaryOp::Slash,
    "*" =>  BinaryOp::Star,
    "==" => BinaryOp::EqualEqual,
    "!=" => BinaryOp::BangEqual,
};

static LOGICAL_OPERATORS: phf::Map<&'static str, LogicalOp> = phf::phf_map! {
    "and" => LogicalOp::And,
    "or" =>  LogicalOp::Or,
};

impl OperatorKind for UnaryOp {
    fn lexeme(self) -> &'static str {
        match self {
            UnaryOp::Negate => "-",
            UnaryOp::Not => "!",
        }
    }

    fn token_ty(self) -> TokenTy {
        match self {
            UnaryOp::Negate => TokenTy::Minus,
            UnaryOp::Not => TokenTy::Bang,
        }
    }

    fn from_lexeme(lexeme: &str) -> Option<Self> {
        UNARY_OPERATORS.get(lexeme).copied()
    }

    fn from_token_ty(ty: TokenTy) -> Option<Self> {
        match ty {
            TokenTy::Minus => Some(UnaryOp::Negate),
            TokenTy::Bang => Some(UnaryOp::Not),
            _ => None,
        }
    }
}

impl OperatorKind for BinaryOp {
    fn lexeme(self) -> &'static str {
        match self {
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::Less => "<",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Minus => "-",
            BinaryOp::Plus => "+",
            BinaryOp::Slash => "/",
            BinaryOp::Star => "*",
            BinaryOp::EqualEqual => "==",
            BinaryOp::BangEqual => "!=",
        }
    }

    fn token_ty(self) -> TokenTy {
        match self {
            BinaryOp::Greater => TokenTy::Greater,
            BinaryOp::GreaterEqual => TokenTy::GreaterEqual,
            BinaryOp::Less => TokenTy::Less,
            BinaryOp::LessEqual => TokenTy::LessEqual,
            BinaryOp::Minus => TokenTy::Minus,
            BinaryOp::Plus => TokenTy::Plus,
            BinaryOp::Slash => TokenTy::Slash,
            BinaryOp::Star => TokenTy::Star,
            BinaryOp::EqualEqual => TokenTy::EqualEqual,
            BinaryOp::BangEqual => TokenTy::BangEqual,
        }
    }

    fn from_lexeme(lexeme: &str) -> Option<Self> {
        BINARY_OPERATORS.get(lexeme).copied()
    }

    fn from_token_ty(ty: TokenTy) -> Option<Self> {
        Some(match ty {
            TokenTy::Greater => BinaryOp::Greater,
            TokenTy::GreaterEqual => BinaryOp::GreaterEqual,
            TokenTy::Less => BinaryOp::Less,
            TokenTy::LessEqual => BinaryOp::LessEqual,
            TokenTy::Minus => BinaryOp::Minus,
            TokenTy::Plus => BinaryOp::Plus,
            TokenTy::Slash => BinaryOp::Slash,
            TokenTy::Star => BinaryOp::Star,
            TokenTy::EqualEqual => BinaryOp::EqualEqual,
            TokenTy::BangEqual => BinaryOp::BangEqual,
            _ => return None,
        })
    }
}

impl OperatorKind for LogicalOp {
    fn lexeme(self) -> &'static str {
        match self {
            LogicalOp::And => "and",
            LogicalOp::Or => "or",
        }
    }

    fn token_ty(self) -> TokenTy {
        match self {
            LogicalOp::And => TokenTy::And,
            LogicalOp::Or => TokenTy::Or,
        }
    }

    fn from_lexeme(lexeme: &str) -> Option<Self> {
        LOGICAL_OPERATORS.get(lexeme).copied()
    }

    fn from_token_ty(ty: TokenTy) -> Option<Self> {
        match ty {
            TokenTy::And => Some(LogicalOp::And),
            TokenTy::Or => Some(LogicalOp::Or),
            _ => None,
        }
    }
}
