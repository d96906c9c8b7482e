use std::collections::HashMap;

use crate::ast::{Program, Statement};

/// The register machine: a sparse store of natural-number registers plus
/// the evaluator that executes a program against it.
///
/// ## Usage
///
/// A `Machine` is created empty, optionally pre-loaded through
/// [`write`](Self::write), and then driven by [`run`](Self::run). All state
/// lives for exactly one run; nothing persists across programs.
pub struct Machine {
    /// Sparse register store. Absence of an index is equivalent to a stored
    /// value of zero.
    registers: HashMap<u64, u64>,
}

#[allow(clippy::new_without_default)]
impl Machine {
    /// Creates a machine with every register at zero.
    #[must_use]
    pub fn new() -> Self {
        Self { registers: HashMap::new() }
    }

    /// Reads a register. Unset registers read as zero; this never fails.
    #[must_use]
    pub fn read(&self, index: u64) -> u64 {
        self.registers.get(&index).copied().unwrap_or(0)
    }

    /// Writes a register, inserting or overwriting. This never fails.
    pub fn write(&mut self, index: u64, value: u64) {
        self.registers.insert(index, value);
    }

    /// Executes a program's top-level statements in order and returns the
    /// final value of register 0.
    ///
    /// Statements run strictly sequentially; they depend on one another
    /// through the shared register state. A loop whose body never drives
    /// its test register to zero runs forever, which is a property of the
    /// language rather than an error: evaluation itself cannot fail.
    pub fn run(&mut self, program: &Program) -> u64 {
        for statement in &program.statements {
            self.exec(statement);
        }

        self.read(0)
    }

    /// Executes a single statement.
    ///
    /// Addition saturates at `u64::MAX` and subtraction at zero, so every
    /// register always holds a representable natural number.
    fn exec(&mut self, statement: &Statement) {
        match statement {
            Statement::Addition { target, source, constant } => {
                self.write(*target, self.read(*source).saturating_add(*constant));
            },

            Statement::Subtraction { target, source, constant } => {
                self.write(*target, self.read(*source).saturating_sub(*constant));
            },

            Statement::Loop { test, body } => {
                while self.read(*test) > 0 {
                    for statement in body {
                        self.exec(statement);
                    }
                }
            },
        }
    }
}
