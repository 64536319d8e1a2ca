use itertools::Itertools;
use log::info;

use crate::{
    error::PushError,
    model::{CommandKind, PushFile, RunReport, Target},
};

pub mod command_parser;
pub mod file_op;
pub mod grammar;
pub mod push_file_parser;

impl PushFile {
    /// Target names in declaration order, redeclarations included.
    pub fn target_names(&self) -> &[String] {
        &self.target_order
    }

    pub fn get_target(&self, name: &str) -> Option<&Target> {
        self.targets.get(name)
    }

    /// Run a target and, depth-first, every target it references.
    ///
    /// Input failures abort the whole run. Output failures are collected in
    /// the returned report.
    pub fn run_target(&self, name: &str) -> Result<RunReport, PushError> {
        let mut report = RunReport::default();
        self.run_target_in(name, &mut Vec::new(), &mut report)?;
        Ok(report)
    }

    fn run_target_in<'a>(
        &'a self,
        name: &str,
        chain: &mut Vec<&'a str>,
        report: &mut RunReport,
    ) -> Result<(), PushError> {
        let target = self
            .get_target(name)
            .ok_or_else(|| PushError::TargetNotFound {
                name: name.to_owned(),
            })?;

        if chain.contains(&target.name.as_str()) {
            return Err(PushError::CyclicReference {
                chain: format!("{} -> {name}", chain.iter().join(" -> ")),
            });
        }

        info!("Running target `{name}`");
        chain.push(&target.name);
        for command in &target.commands {
            match &command.kind {
                CommandKind::TargetRef(referenced) => {
                    self.run_target_in(referenced, chain, report)?;
                }
                CommandKind::FileOp(op) => {
                    let failures = file_op::push_files(command.line_number, op)?;
                    report.output_failures.extend(failures);
                }
            }
        }
        chain.pop();

        Ok(())
    }
}
