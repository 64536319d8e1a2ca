use super::command::Command;

#[derive(Debug)]
pub struct Target {
    pub name: String,
    pub commands: Vec<Command>,
}

impl Target {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            commands: Vec::new(),
        }
    }
}
