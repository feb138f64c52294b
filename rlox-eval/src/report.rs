use crate::error::RuntimeError;

/// Receives runtime errors that ended the evaluation of a top-level
/// expression.
pub trait ErrorReporter {
    fn runtime_error(&mut self, error: &RuntimeError);
}

/// Writes `<message>\n[line N]` to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrReporter;

impl StderrReporter {
    pub fn format(error: &RuntimeError) -> String {
        format!("{error}\n[line {}]", error.token().line)
    }
}

impl ErrorReporter for StderrReporter {
    fn runtime_error(&mut self, error: &RuntimeError) {
        eprintln!("{}", Self::format(error));
    }
}

impl<F: FnMut(&RuntimeError)> ErrorReporter for F {
    fn runtime_error(&mut self, error: &RuntimeError) {
        self(error)
    }
}
