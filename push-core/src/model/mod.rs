use std::fmt;

use indexmap::IndexMap;

pub use command::{Command, CommandKind, FileOp};
pub use target::Target;

use crate::error::OutputFileError;

pub mod command;
pub mod target;

#[derive(Debug, Default)]
pub struct PushFile {
    /// Every target declaration in source order, redeclarations included.
    pub target_order: Vec<String>,
    /// Active command list per target; a redeclaration replaces the previous one.
    pub targets: IndexMap<String, Target>,
}

/// Non-fatal outcome of a successful run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub output_failures: Vec<OutputFileError>,
}

impl RunReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.output_failures.is_empty()
    }
}

impl fmt::Display for PushFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for name in &self.target_order {
            writeln!(f, "{name}")?;
            if let Some(target) = self.targets.get(name) {
                for command in &target.commands {
                    writeln!(f, "\t{command}")?;
                }
            }
        }
        Ok(())
    }
}
