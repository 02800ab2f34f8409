//! Program library.
//!
//! Holds one parsed [`Program`] per [`Operator`]. Programs are parsed (and
//! their loops validated) when the library is built, never at evaluation time.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::builtin_program;
use crate::common::{LibraryError, Operator};
use crate::machine::Program;

/// Where a library entry came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramOrigin {
    /// The program compiled into the crate.
    Builtin,
    /// A file read from a program directory.
    File(PathBuf),
    /// Supplied directly through [`ProgramLibrary::with_program`].
    Custom,
}

/// One parsed program per operator.
#[derive(Debug, Clone)]
pub struct ProgramLibrary {
    /// Indexed by [`Operator::index`].
    programs: Vec<Program>,
    origins: Vec<ProgramOrigin>,
}

impl ProgramLibrary {
    /// The five built-in programs.
    ///
    /// # Errors
    ///
    /// [`LibraryError::Builtin`] if an embedded program is malformed.
    pub fn builtin() -> Result<Self, LibraryError> {
        let programs = Operator::ALL
            .iter()
            .map(|&op| builtin_program(op))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            programs,
            origins: vec![ProgramOrigin::Builtin; Operator::ALL.len()],
        })
    }

    /// Loads `<dir>/<op.module_file()>` for every operator.
    ///
    /// A missing file falls back to the built-in program.
    ///
    /// # Errors
    ///
    /// * [`LibraryError::Io`] when a file exists but cannot be read.
    /// * [`LibraryError::Program`] when a file has malformed loops.
    pub fn from_dir(dir: &Path) -> Result<Self, LibraryError> {
        let mut programs = Vec::with_capacity(Operator::ALL.len());
        let mut origins = Vec::with_capacity(Operator::ALL.len());

        for op in Operator::ALL {
            let path = dir.join(op.module_file());
            match fs::read_to_string(&path) {
                Ok(text) => {
                    let program = Program::parse(&text).map_err(|source| LibraryError::Program {
                        path: path.clone(),
                        source,
                    })?;
                    debug!(
                        op = %op,
                        path = %path.display(),
                        instructions = program.len(),
                        "loaded program"
                    );
                    programs.push(program);
                    origins.push(ProgramOrigin::File(path));
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    warn!(
                        op = %op,
                        path = %path.display(),
                        "program file not found, using built-in {}",
                        op.name()
                    );
                    programs.push(builtin_program(op)?);
                    origins.push(ProgramOrigin::Builtin);
                }
                Err(source) => return Err(LibraryError::Io { path, source }),
            }
        }

        Ok(Self { programs, origins })
    }

    /// Replaces the program for `op`.
    #[must_use]
    pub fn with_program(mut self, op: Operator, program: Program) -> Self {
        self.programs[op.index()] = program;
        self.origins[op.index()] = ProgramOrigin::Custom;
        self
    }

    /// The program bound to `op`.
    #[inline]
    pub fn get(&self, op: Operator) -> &Program {
        &self.programs[op.index()]
    }

    /// Where the program bound to `op` came from.
    pub fn origin(&self, op: Operator) -> &ProgramOrigin {
        &self.origins[op.index()]
    }
}
