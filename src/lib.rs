//! An interpreter for an emoji-symbol BrainFuck variant.
//!
//! Seven glyphs drive a byte-tape machine:
//! - 👉 / 👈 move the data pointer. The tape starts as a single zero cell
//!   and grows on demand to the right; moving left of cell 0 is a no-op.
//! - 👆 / 👇 adjust the current cell, wrapping within `[0, 255]`.
//! - 👊 appends the character whose code point is the current cell's value
//!   to the output.
//! - 🤜 / 🤛 bracket loops exactly like BrainFuck's `[` / `]`.
//!
//! The interpreter is direct: loop targets are found by scanning the
//! program buffer each time a loop boundary is crossed, never precompiled.
//! A run either returns the complete output or fails with a
//! [`RuntimeError`]: an unrecognized character aborts with
//! [`RuntimeError::UnknownSymbol`], and a scan that runs off the program
//! aborts with [`RuntimeError::UnmatchedBracket`].
//!
//! Quick start:
//!
//! ```
//! use emojifuck::Interpreter;
//!
//! // 8 * 9 = 72 = 'H', computed with a multiplication loop.
//! let source = "👆👆👆👆👆👆👆👆🤜👇👉👆👆👆👆👆👆👆👆👆👈🤛👉👊";
//! let mut vm = Interpreter::new(source);
//! assert_eq!(vm.run().unwrap(), "H");
//! ```

mod error;
mod instr;
mod interpreter;

pub use self::error::RuntimeError;
pub use self::instr::Instr;
pub use self::interpreter::Interpreter;
