mod error;
pub mod model;
mod service;

use std::{fs, path::Path};

use anyhow::Context;

pub use error::{OutputFileError, PushError};
pub use model::PushFile;
pub use service::{file_op::push_files, grammar::is_valid_command};

/// Parse pushfile source text into its target table.
pub fn parse(source: &str) -> Result<PushFile, PushError> {
    source.parse()
}

pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<PushFile> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Could not read pushfile `{}`", path.display()))?;
    Ok(parse(&source)?)
}
