use std::str::FromStr;

use anyhow::{bail, ensure};
use logos::Logos;

use crate::{
    error::PushError,
    model::command::{Command, CommandKind, FileOp},
    service::grammar::is_valid_command,
};

/// The command prefix used to identify target references.
const TARGET_REF_PREFIX: char = ':';

/// The only option flag with a defined effect: mark outputs executable.
pub const OPTION_EXECUTABLE: char = 'x';

#[derive(Logos, Debug, PartialEq)]
enum CommandToken<'a> {
    #[token("+")]
    Join,
    #[token("=>")]
    Push,
    #[token("|")]
    Options,
    // Same character class as `grammar::PATH`.
    #[regex(r"[~\w\\/.-]+")]
    Path(&'a str),
}

#[derive(PartialEq, Clone, Copy, Debug)]
enum Section {
    Inputs,
    Outputs,
    Options,
}

impl FromStr for FileOp {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut op = FileOp {
            inputs: Vec::new(),
            outputs: Vec::new(),
            options: String::new(),
        };
        let mut section = Section::Inputs;
        let mut expect_path = true;

        let mut lexer = CommandToken::lexer(s);
        while let Some(token) = lexer.next() {
            let Ok(token) = token else {
                bail!("Unexpected `{}` in push equation", lexer.slice())
            };
            match token {
                CommandToken::Path(path) => {
                    ensure!(expect_path, "Expected separator before `{path}`");
                    match section {
                        Section::Inputs => op.inputs.push(path.to_owned()),
                        Section::Outputs => op.outputs.push(path.to_owned()),
                        Section::Options => op.options.push_str(path),
                    }
                    expect_path = false;
                }
                CommandToken::Join if section != Section::Options && !expect_path => {
                    expect_path = true;
                }
                CommandToken::Push if section == Section::Inputs && !expect_path => {
                    section = Section::Outputs;
                    expect_path = true;
                }
                CommandToken::Options if section == Section::Outputs && !expect_path => {
                    section = Section::Options;
                    expect_path = true;
                }
                token => bail!("Unexpected {token:?} in push equation"),
            }
        }

        ensure!(!expect_path, "Push equation ends with a separator");
        ensure!(!op.inputs.is_empty(), "Push equation has no inputs");
        ensure!(!op.outputs.is_empty(), "Push equation has no outputs");

        Ok(op)
    }
}

impl FromStr for CommandKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ensure!(!s.is_empty(), "Command should not be empty");

        let kind = if let Some(name) = s.strip_prefix(TARGET_REF_PREFIX) {
            ensure!(!name.is_empty(), "Expected target name after {TARGET_REF_PREFIX}");
            CommandKind::TargetRef(name.to_owned())
        } else {
            CommandKind::FileOp(s.parse()?)
        };

        Ok(kind)
    }
}

impl Command {
    /// Validate and parse one tab-indented pushfile line.
    ///
    /// Whitespace is never significant inside a command, so it is removed
    /// before the line is split into its fields.
    pub fn parse(line_number: usize, line: &str) -> Result<Self, PushError> {
        if !is_valid_command(line) {
            return Err(PushError::Syntax { line: line_number });
        }

        let source: String = line.chars().filter(|c| !c.is_whitespace()).collect();
        let kind = source
            .parse::<CommandKind>()
            .map_err(|err| PushError::Internal {
                line: line_number,
                message: err.to_string(),
            })?;

        Ok(Self {
            line_number,
            source,
            kind,
        })
    }
}
