use thiserror::Error;

/// Errors that can abort an interpreter run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A dispatched character is not one of the 7 instruction glyphs.
    #[error("unknown symbol {symbol:?} at position {position}")]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Its index in the program.
        position: usize,
    },
    /// A bracket scan ran off the end of the program without finding a
    /// match.
    #[error("unmatched {symbol} at position {position}")]
    UnmatchedBracket {
        /// The jump glyph that triggered the scan.
        symbol: char,
        /// Its index in the program.
        position: usize,
    },
}
