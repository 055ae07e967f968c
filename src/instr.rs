use std::fmt;

/// Shift the data pointer to the right.
pub const NEXT: char = '👉';
/// Shift the data pointer to the left.
pub const PREV: char = '👈';
/// Add to the current memory cell.
pub const INCR: char = '👆';
/// Remove from the current memory cell.
pub const DECR: char = '👇';
/// Emit the current memory cell.
pub const PRINT: char = '👊';
/// Open a loop.
pub const BEGIN_LOOP: char = '🤜';
/// Close a loop.
pub const END_LOOP: char = '🤛';

/// Emoji BrainFuck instruction
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum Instr {
    /// Add to the current memory cell.
    Incr,
    /// Remove from the current memory cell.
    Decr,
    /// Shift the data pointer to the right.
    Next,
    /// Shift the data pointer to the left.
    Prev,
    /// Append the current memory cell to the output buffer as a character.
    Print,
    /// If the current memory cell is 0, jump past the matching loop close.
    BeginLoop,
    /// If the current memory cell is not 0, jump back to the matching loop
    /// open.
    EndLoop,
}

impl Instr {
    /// Decode one instruction glyph.
    ///
    /// Returns `None` for any character outside the 7-glyph alphabet.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            INCR => Some(Instr::Incr),
            DECR => Some(Instr::Decr),
            NEXT => Some(Instr::Next),
            PREV => Some(Instr::Prev),
            PRINT => Some(Instr::Print),
            BEGIN_LOOP => Some(Instr::BeginLoop),
            END_LOOP => Some(Instr::EndLoop),
            _ => None,
        }
    }

    /// The glyph this instruction is written as.
    pub fn symbol(self) -> char {
        match self {
            Instr::Incr => INCR,
            Instr::Decr => DECR,
            Instr::Next => NEXT,
            Instr::Prev => PREV,
            Instr::Print => PRINT,
            Instr::BeginLoop => BEGIN_LOOP,
            Instr::EndLoop => END_LOOP,
        }
    }
}

/// Display Instr similar to assembly.
impl fmt::Debug for Instr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Instr::Incr => write!(f, "INC"),
            Instr::Decr => write!(f, "DEC"),
            Instr::Next => write!(f, "NEXT"),
            Instr::Prev => write!(f, "PREV"),
            Instr::Print => write!(f, "PRINT"),
            Instr::BeginLoop => write!(f, "BEGIN"),
            Instr::EndLoop => write!(f, "END"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreign_characters_do_not_decode() {
        assert_eq!(Instr::from_symbol('+'), None);
        assert_eq!(Instr::from_symbol('x'), None);
        assert_eq!(Instr::from_symbol('🙂'), None);
    }

    #[test]
    fn glyphs_decode_to_their_instruction() {
        assert_eq!(Instr::from_symbol(NEXT), Some(Instr::Next));
        assert_eq!(Instr::from_symbol(BEGIN_LOOP), Some(Instr::BeginLoop));
        assert_eq!(Instr::Next.symbol(), NEXT);
    }

    #[test]
    fn debug_renders_mnemonics() {
        assert_eq!(format!("{:?}", Instr::Incr), "INC");
        assert_eq!(format!("{:?}", Instr::BeginLoop), "BEGIN");
    }
}
