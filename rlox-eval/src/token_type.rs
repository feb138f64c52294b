/// Token kinds that can appear inside an expression tree.
///
/// Statement keywords and punctuation belong to the parser that builds the
/// tree and are not represented here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenTy {
	// delimiters
	LeftParen,
	RightParen,
	Comma,

	// arithmetic
	Minus,
	Plus,
	Slash,
	Star,

	// one or two character
	Bang,
	BangEqual,
	Equal,
	EqualEqual,
	Greater,
	GreaterEqual,
	Less,
	LessEqual,

	// literals
	Identifier,
	String,
	Number,

	// keywords
	And,
	False,
	Nil,
	Or,
	True,
}

static KEYWORDS: phf::Map<&'static str, TokenTy> = phf::phf_map! {
	"and" =>   TokenTy::And,
	"false" => TokenTy::False,
	"nil" =>   TokenTy::Nil,
	"or" =>    TokenTy::Or,
	"true" =>  TokenTy::True,
};

impl TokenTy {
	/// Classifies a word as either one of the expression keywords or a plain
	/// identifier.
	pub fn from_word(word: &str) -> TokenTy {
		KEYWORDS.get(word).copied().unwrap_or(TokenTy::Identifier)
	}
}

#[cfg(test)]
mod tests {
	use super::TokenTy;

	#[test]
	fn keywords_are_recognized() {
		assert_eq!(TokenTy::from_word("and"), TokenTy::And);
		assert_eq!(TokenTy::from_word("nil"), TokenTy::Nil);
		assert_eq!(TokenTy::from_word("android"), TokenTy::Identifier);
	}
}
