use std::fmt;

#[derive(PartialEq, Debug)]
pub struct FileOp {
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
    pub options: String,
}

impl FileOp {
    /// Check whether the given single-character option flag is set.
    #[must_use]
    pub fn has_option(&self, flag: char) -> bool {
        self.options.contains(flag)
    }
}

#[derive(PartialEq, Debug)]
pub enum CommandKind {
    TargetRef(String),
    FileOp(FileOp),
}

#[derive(PartialEq, Debug)]
pub struct Command {
    /// 1-based line of the pushfile this command was read from.
    pub line_number: usize,
    /// The command text with every whitespace character removed.
    pub source: String,
    pub kind: CommandKind,
}

impl Command {
    /// Check whether the command carries the given single-character option flag.
    #[must_use]
    pub fn has_option(&self, flag: char) -> bool {
        match &self.kind {
            CommandKind::FileOp(op) => op.has_option(flag),
            CommandKind::TargetRef(_) => false,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.line_number, self.source)
    }
}
