use std::time::{SystemTime, UNIX_EPOCH};

use crate::{
    error::{CallError, Result},
    interpreter::Interpreter,
    lox_callable::LoxCallable,
    object::Object,
    token::Token,
};

/// `clock()`: seconds since the Unix epoch, as a number.
#[derive(Clone, PartialEq, Eq)]
pub struct Clock;

impl std::fmt::Debug for Clock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<native fn clock>")
    }
}

impl LoxCallable for Clock {
    fn name(&self) -> &str {
        "clock"
    }

    fn arity(&self) -> usize {
        0
    }

    fn call(&self, _: &mut Interpreter, paren: &Token, _: Vec<Object>) -> Result<Object> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|err| CallError::Native {
                paren: paren.clone(),
                message: format!("System clock is before the Unix epoch: {err}").into(),
            })?;
        Ok(elapsed.as_secs_f64().into())
    }
}
