use std::{
    fs::{self, File},
    io::{self, Read, Write},
    path::Path,
};

use itertools::Itertools;
use log::{info, warn};

use crate::{
    error::{OutputFileError, PushError},
    model::FileOp,
    service::command_parser::OPTION_EXECUTABLE,
};

/// Concatenate the inputs of a file operation into each of its outputs.
///
/// Every input is read in full before any output is opened, so a missing or
/// unreadable input aborts the operation with existing outputs left intact.
/// Outputs that cannot be opened or written are skipped and returned so the
/// rest of the run can continue. Every handle is closed when it goes out of
/// scope, on success and error paths alike.
pub fn push_files(line: usize, op: &FileOp) -> Result<Vec<OutputFileError>, PushError> {
    info!(
        "Line {line}: {} => {}",
        op.inputs.iter().join(" + "),
        op.outputs.iter().join(" + ")
    );

    let mut contents = Vec::new();
    for path in &op.inputs {
        File::open(path)
            .and_then(|mut file| file.read_to_end(&mut contents))
            .map_err(|source| PushError::InputFile {
                line,
                path: path.to_owned(),
                source,
            })?;
        contents.push(b'\n');
    }

    let executable = op.has_option(OPTION_EXECUTABLE);
    let mut failures = Vec::new();
    for path in &op.outputs {
        let written = File::create(path)
            .and_then(|mut file| file.write_all(&contents))
            .and_then(|()| {
                if executable {
                    mark_executable(path)
                } else {
                    Ok(())
                }
            });
        if let Err(source) = written {
            failures.push(output_failure(line, path, source));
        }
    }

    Ok(failures)
}

fn output_failure(line: usize, path: &str, source: io::Error) -> OutputFileError {
    let failure = OutputFileError {
        line,
        path: path.to_owned(),
        source,
    };
    warn!("{failure}: {}", failure.source);
    failure
}

/// Add the owner-execute bit, keeping every other permission bit.
#[cfg(unix)]
fn mark_executable<P: AsRef<Path>>(path: P) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(&path)?.permissions();
    permissions.set_mode(permissions.mode() | 0o100);
    fs::set_permissions(path, permissions)
}

#[cfg(not(unix))]
fn mark_executable<P: AsRef<Path>>(path: P) -> io::Result<()> {
    warn!(
        "Cannot mark `{}` executable on this platform",
        path.as_ref().display()
    );
    Ok(())
}
