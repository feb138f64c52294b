use std::rc::Rc;

use crate::{literal::Literal, lox_callable::LoxCallable};

/// A runtime value.
#[derive(Debug, Clone)]
pub enum Object {
    Literal(Literal),
    Callable(Rc<dyn LoxCallable>),
}

impl Object {
    pub fn callable(callable: impl LoxCallable + 'static) -> Self {
        Self::Callable(Rc::new(callable))
    }

    /// `nil` and `false` are falsy, everything else (`0` and `""` included)
    /// is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Object::Literal(Literal::Nil) => false,
            Object::Literal(Literal::Boolean(b)) => *b,
            _ => true,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Object::Literal(Literal::Number(n)) => Some(*n),
            _ => None,
        }
    }
}

// Values of different types are never equal. Callables compare by identity.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Object::Literal(left), Object::Literal(right)) => left == right,
            (Object::Callable(left), Object::Callable(right)) => std::ptr::eq(
                Rc::as_ptr(left) as *const (),
                Rc::as_ptr(right) as *const (),
            ),
            _ => false,
        }
    }
}

impl std::fmt::Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Object::Literal(lit) => lit.fmt(f),
            Object::Callable(callable) => write!(f, "{callable:?}"),
        }
    }
}

impl<T: Into<Literal>> From<T> for Object {
    fn from(lit: T) -> Self {
        Self::Literal(lit.into())
    }
}
