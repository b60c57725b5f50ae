use thiserror::Error;

/// Errors that can occur while parsing formula text.
///
/// Positions are byte offsets into the original text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character '{ch}' at {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number '{text}' at {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("unexpected '{found}' at {pos}")]
    UnexpectedToken { found: String, pos: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unknown identifier '{name}' at {pos}")]
    UnknownIdentifier { name: String, pos: usize },

    #[error("unknown function '{name}' at {pos}")]
    UnknownFunction { name: String, pos: usize },

    #[error("expression nested too deeply at {pos}")]
    TooDeep { pos: usize },

    #[error("function '{name}' expects {expected} argument(s), got {found}")]
    Arity {
        name: &'static str,
        expected: usize,
        found: usize,
    },
}
