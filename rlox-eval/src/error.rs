use std::borrow::Cow;

use thiserror::Error;

use crate::token::Token;

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Everything that can abort the evaluation of one expression.
#[derive(Debug, Clone, Error)]
pub enum RuntimeError {
    /// An operand had the wrong runtime type for its operator.
    #[error("{message}")]
    Type {
        token: Token,
        message: Cow<'static, str>,
    },
    #[error(transparent)]
    Name(#[from] NameError),
    #[error(transparent)]
    Call(#[from] CallError),
}

impl RuntimeError {
    pub fn type_error(token: &Token, message: impl Into<Cow<'static, str>>) -> Self {
        Self::Type {
            token: token.clone(),
            message: message.into(),
        }
    }

    /// The token the error is attributed to.
    pub fn token(&self) -> &Token {
        match self {
            RuntimeError::Type { token, .. } => token,
            RuntimeError::Name(err) => err.token(),
            RuntimeError::Call(err) => err.token(),
        }
    }
}

/// Raised by a [`Bindings`](crate::environment::Bindings) implementation.
#[derive(Debug, Clone, Error)]
pub enum NameError {
    #[error("Undefined variable '{}'.", .name.lexeme)]
    Undefined { name: Token },
}

impl NameError {
    pub fn token(&self) -> &Token {
        match self {
            NameError::Undefined { name } => name,
        }
    }
}

/// Raised while invoking a callee.
#[derive(Debug, Clone, Error)]
pub enum CallError {
    #[error("Can only call functions and classes.")]
    NotCallable { paren: Token },
    #[error("Expected {expected} arguments but got {got}.")]
    Arity {
        paren: Token,
        expected: usize,
        got: usize,
    },
    /// A native function failed on its own terms.
    #[error("{message}")]
    Native {
        paren: Token,
        message: Cow<'static, str>,
    },
}

impl CallError {
    pub fn token(&self) -> &Token {
        match self {
            CallError::NotCallable { paren }
            | CallError::Arity { paren, .. }
            | CallError::Native { paren, .. } => paren,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token_type::TokenTy;

    fn paren() -> Token {
        Token::new(TokenTy::RightParen, ")".into(), None, 3)
    }

    #[test]
    fn messages() {
        let undefined = RuntimeError::from(NameError::Undefined {
            name: Token::identifier("x", 1),
        });
        assert_eq!(undefined.to_string(), "Undefined variable 'x'.");
        assert_eq!(undefined.token().lexeme, "x");

        let arity = RuntimeError::from(CallError::Arity {
            paren: paren(),
            expected: 2,
            got: 0,
        });
        assert_eq!(arity.to_string(), "Expected 2 arguments but got 0.");
        assert_eq!(arity.token().line, 3);
    }

    #[test]
    fn type_error_keeps_operator() {
        let minus = Token::new(TokenTy::Minus, "-".into(), None, 9);
        let err = RuntimeError::type_error(&minus, "Operand must be a number.");
        assert_eq!(err.token(), &minus);
        assert_eq!(err.to_string(), "Operand must be a number.");
    }
}
