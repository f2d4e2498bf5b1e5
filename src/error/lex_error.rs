#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// Found a character that cannot start any token.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
    },
    /// A numeric literal was followed directly by another decimal point, as in
    /// `5..3` or `1.2.3`.
    MalformedNumber {
        /// The literal consumed before the extra point, e.g. `5.`.
        literal:  String,
        /// Byte offset of the extra decimal point.
        position: usize,
    },
}

impl LexError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter { position, .. } | Self::MalformedNumber { position, .. } => {
                *position
            },
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => {
                write!(f, "Invalid character '{character}' at position {position}.")
            },
            Self::MalformedNumber { literal, position } => write!(f,
                                                                  "Malformed number at position {position}: unexpected '.' after '{literal}'."),
        }
    }
}

impl std::error::Error for LexError {}
