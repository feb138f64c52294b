use crate::{
    error::{CallError, Result},
    interpreter::Interpreter,
    object::Object,
    token::Token,
};

/// Anything a call expression can invoke.
///
/// `Debug` doubles as the display form of the value, e.g. `<native fn clock>`.
pub trait LoxCallable: std::fmt::Debug {
    fn name(&self) -> &str;

    fn arity(&self) -> usize;

    /// Runs the callable on arguments whose count already matches
    /// [`arity`](LoxCallable::arity). `paren` locates the call for errors.
    fn call(&self, intpr: &mut Interpreter, paren: &Token, args: Vec<Object>) -> Result<Object>;

    fn invoke(&self, intpr: &mut Interpreter, paren: &Token, args: Vec<Object>) -> Result<Object> {
        if args.len() != self.arity() {
            return Err(CallError::Arity {
                paren: paren.clone(),
                expected: self.arity(),
                got: args.len(),
            }
            .into());
        }
        tracing::trace!(callee = self.name(), args = args.len(), "invoking callable");
        self.call(intpr, paren, args)
    }
}
