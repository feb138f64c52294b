use std::borrow::Cow;

/// A constant as it appears in source: the payload of `Expr::Literal` and
/// of the scalar runtime values.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    String(Cow<'static, str>),
    Boolean(bool),
    Nil,
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<&'static str> for Literal {
    fn from(s: &'static str) -> Self {
        Self::String(Cow::Borrowed(s))
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<()> for Literal {
    fn from(_: ()) -> Self {
        Self::Nil
    }
}

// Numbers use the shortest round-trip form, so integral values print without
// a fractional part; infinities print as `Infinity`. Strings are written raw,
// without quotes or escapes.
impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Literal::Number(n) if n.is_infinite() => {
                f.write_str(if n.is_sign_negative() { "-Infinity" } else { "Infinity" })
            }
            Literal::Number(n) => n.fmt(f),
            Literal::String(s) => s.fmt(f),
            Literal::Boolean(b) => b.fmt(f),
            Literal::Nil => "nil".fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Literal;

    #[test]
    fn display() {
        assert_eq!(Literal::Nil.to_string(), "nil");
        assert_eq!(Literal::from(true).to_string(), "true");
        assert_eq!(Literal::from(4.0).to_string(), "4");
        assert_eq!(Literal::from(45.67).to_string(), "45.67");
        assert_eq!(Literal::from(-0.5).to_string(), "-0.5");
        assert_eq!(Literal::from("line\nbreak").to_string(), "line\nbreak");
    }

    #[test]
    fn display_non_finite() {
        assert_eq!(Literal::from(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Literal::from(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Literal::from(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn equality_does_not_coerce() {
        assert_eq!(Literal::from(1.0), Literal::from(1.0));
        assert_ne!(Literal::from(1.0), Literal::from("1"));
        assert_ne!(Literal::from(false), Literal::Nil);
        assert_eq!(Literal::from("ab"), Literal::from(String::from("ab")));
    }
}
