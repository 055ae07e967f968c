use crate::error::RuntimeError;
use crate::instr::{BEGIN_LOOP, END_LOOP, Instr};

/// Emoji BrainFuck virtual machine
///
/// Symbols are decoded one at a time as the program counter reaches them, so
/// a foreign character only fails the run if it is actually dispatched. Loop
/// targets are found by scanning the program buffer on every crossing; there
/// is no parse phase and no jump table.
pub struct Interpreter {
    program: Vec<char>,
    memory: Vec<u8>,
    /// Program counter
    pc: usize,
    /// Data pointer
    dp: usize,
    /// Characters emitted by the print instruction
    output: String,
}

impl Interpreter {
    pub fn new(source: &str) -> Self {
        Self {
            program: source.chars().collect(),
            memory: vec![0],
            pc: 0,
            dp: 0,
            output: String::new(),
        }
    }

    /// Execute a single instruction on the VM.
    ///
    /// Returns Ok(true) to continue execution, Ok(false) when the program has
    /// terminated normally, or Err(_) on execution errors.
    pub fn step(&mut self) -> Result<bool, RuntimeError> {
        // Terminate if the program counter is outside of the program.
        let Some(&symbol) = self.program.get(self.pc) else {
            return Ok(false);
        };
        let position = self.pc;
        self.pc += 1;

        let instr =
            Instr::from_symbol(symbol).ok_or(RuntimeError::UnknownSymbol { symbol, position })?;
        let current = self.memory[self.dp];

        match instr {
            Instr::Incr => {
                self.memory[self.dp] = current.wrapping_add(1);
            }
            Instr::Decr => {
                self.memory[self.dp] = current.wrapping_sub(1);
            }
            Instr::Next => {
                // The tape grows one zero cell at a time, only when the data
                // pointer steps off its high end.
                if self.dp == self.memory.len() - 1 {
                    self.memory.push(0);
                }
                self.dp += 1;
            }
            Instr::Prev => {
                // Moving left of cell 0 is a no-op.
                if self.dp > 0 {
                    self.dp -= 1;
                }
            }
            Instr::Print => {
                self.output.push(char::from(current));
            }
            Instr::BeginLoop => {
                if current == 0 {
                    self.pc = self.seek_forward(position)?;
                }
            }
            Instr::EndLoop => {
                if current != 0 {
                    self.pc = self.seek_backward(position)?;
                }
            }
        }

        Ok(true)
    }

    /// Execute the program until it halts and return everything it printed.
    ///
    /// On error the run aborts; output produced before the error is
    /// discarded.
    pub fn run(&mut self) -> Result<String, RuntimeError> {
        while self.step()? {}
        Ok(std::mem::take(&mut self.output))
    }

    /// Output emitted so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Find the position just past the loop close matching the loop open at
    /// `position`.
    ///
    /// Nested loop opens raise the depth and loop closes lower it; the scan
    /// ends when the depth returns to zero.
    fn seek_forward(&self, position: usize) -> Result<usize, RuntimeError> {
        let mut depth = 1u32;

        for pos in (position + 1)..self.program.len() {
            match self.program[pos] {
                BEGIN_LOOP => depth += 1,
                END_LOOP => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(pos + 1);
                    }
                }
                _ => {}
            }
        }

        Err(RuntimeError::UnmatchedBracket {
            symbol: BEGIN_LOOP,
            position,
        })
    }

    /// Find the position of the loop open matching the loop close at
    /// `position`, scanning toward the start of the program.
    fn seek_backward(&self, position: usize) -> Result<usize, RuntimeError> {
        let mut depth = 1u32;

        for pos in (0..position).rev() {
            match self.program[pos] {
                END_LOOP => depth += 1,
                BEGIN_LOOP => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(pos);
                    }
                }
                _ => {}
            }
        }

        Err(RuntimeError::UnmatchedBracket {
            symbol: END_LOOP,
            position,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy over the five instructions that cannot jump.
    fn loop_free_instr() -> impl Strategy<Value = Instr> {
        prop::sample::select(vec![
            Instr::Incr,
            Instr::Decr,
            Instr::Next,
            Instr::Prev,
            Instr::Print,
        ])
    }

    fn render(instrs: &[Instr]) -> String {
        instrs.iter().map(|instr| instr.symbol()).collect()
    }

    proptest! {
        #[test]
        fn loop_free_output_length_matches_print_count(
            instrs in prop::collection::vec(loop_free_instr(), 0..512)
        ) {
            let prints = instrs
                .iter()
                .filter(|instr| matches!(instr, Instr::Print))
                .count();
            let mut vm = Interpreter::new(&render(&instrs));
            let output = vm.run().unwrap();
            prop_assert_eq!(output.chars().count(), prints);
        }

        #[test]
        fn cell_value_is_increment_count_mod_256(count in 0usize..1024) {
            let mut vm = Interpreter::new(&"👆".repeat(count));
            vm.run().unwrap();
            prop_assert_eq!(usize::from(vm.memory[0]), count % 256);
        }

        #[test]
        fn decrement_mirrors_increment_wraparound(count in 1usize..1024) {
            let mut vm = Interpreter::new(&"👇".repeat(count));
            vm.run().unwrap();
            prop_assert_eq!(usize::from(vm.memory[0]), (256 - count % 256) % 256);
        }

        #[test]
        fn tape_only_grows_and_cursor_stays_in_bounds(
            instrs in prop::collection::vec(loop_free_instr(), 0..512)
        ) {
            let mut vm = Interpreter::new(&render(&instrs));
            let mut last_len = vm.memory.len();

            while vm.step().unwrap() {
                prop_assert!(vm.dp < vm.memory.len());
                prop_assert!(vm.memory.len() >= last_len);
                last_len = vm.memory.len();
            }
        }

        #[test]
        fn arbitrary_programs_never_panic(
            symbols in prop::collection::vec(
                prop::sample::select(vec!['👉', '👈', '👆', '👇', '👊', '🤜', '🤛', 'x']),
                0..64,
            )
        ) {
            let source: String = symbols.into_iter().collect();
            let mut vm = Interpreter::new(&source);

            // Random bracket programs may legitimately loop forever, so cap
            // the step count instead of driving run() to completion.
            for _ in 0..4096 {
                match vm.step() {
                    Ok(true) => {}
                    Ok(false) | Err(_) => break,
                }
            }
        }
    }
}
