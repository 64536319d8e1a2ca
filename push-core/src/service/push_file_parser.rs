use std::{str::FromStr, sync::LazyLock};

use log::debug;
use regex::Regex;

use crate::{
    error::PushError,
    model::{Command, PushFile, Target},
};

static IGNORED_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:#.*)?$").unwrap());
static TARGET_DECLARATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\s*$").unwrap());
static COMMAND_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\t+").unwrap());

impl FromStr for PushFile {
    type Err = PushError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut push_file = PushFile::default();
        let mut current_target: Option<String> = None;

        for (index, line) in s.lines().enumerate() {
            let line_number = index + 1;

            if IGNORED_LINE_REGEX.is_match(line) {
                continue;
            }

            if let Some(captures) = TARGET_DECLARATION_REGEX.captures(line) {
                let name = &captures[1];
                if push_file
                    .targets
                    .insert(name.to_owned(), Target::new(name))
                    .is_some()
                {
                    debug!("Line {line_number}: target `{name}` redeclared, previous commands dropped");
                } else {
                    debug!("Line {line_number}: target `{name}` declared");
                }
                push_file.target_order.push(name.to_owned());
                current_target = Some(name.to_owned());
            } else if COMMAND_LINE_REGEX.is_match(line) {
                let Some(target) = current_target
                    .as_deref()
                    .and_then(|name| push_file.targets.get_mut(name))
                else {
                    return Err(PushError::Syntax { line: line_number });
                };
                let command = Command::parse(line_number, line)?;
                debug!("Line {line_number}: `{}` added to `{}`", command.source, target.name);
                target.commands.push(command);
            } else {
                return Err(PushError::Syntax { line: line_number });
            }
        }

        Ok(push_file)
    }
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;

    use super::*;
    use crate::model::CommandKind;

    #[test]
    fn test_empty_source() {
        let push_file = "".parse::<PushFile>().unwrap();
        assert!(push_file.target_order.is_empty());
        assert!(push_file.targets.is_empty());
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let source = "# header\n\n   \nall\n\t# indented comment\n\t:build\n  # trailing\n";
        let push_file = source.parse::<PushFile>().unwrap();
        assert_eq!(push_file.target_order, vec!["all"]);
        assert_eq!(push_file.targets["all"].commands.len(), 1);
    }

    #[test]
    fn test_targets_keep_declaration_order() {
        let source = "all\n\t:build\nbuild \n\ta+b=>c\n\td=>e|x\n";
        let push_file = source.parse::<PushFile>().unwrap();
        assert_eq!(push_file.target_order, vec!["all", "build"]);

        let build = &push_file.targets["build"];
        assert_eq!(build.name, "build");
        assert_eq!(build.commands.len(), 2);
        assert_eq!(build.commands[0].line_number, 4);
        assert_eq!(build.commands[1].line_number, 5);
        assert_matches!(&push_file.targets["all"].commands[0].kind, CommandKind::TargetRef(name) if name == "build");
    }

    #[test]
    fn test_redeclaration_resets_commands() {
        let push_file = "t\n\tfoo=>bar\nt\n\tbaz=>qux\n".parse::<PushFile>().unwrap();
        assert_eq!(push_file.target_order, vec!["t", "t"]);
        let commands = &push_file.targets["t"].commands;
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].source, "baz=>qux");
    }

    #[test]
    fn test_command_before_any_target() {
        assert_matches!(
            "# comment\n\ta=>b\n".parse::<PushFile>(),
            Err(PushError::Syntax { line: 2 })
        );
    }

    #[test]
    fn test_unrecognized_line() {
        assert_matches!(
            "all\n\t:build\nnot a target\n".parse::<PushFile>(),
            Err(PushError::Syntax { line: 3 })
        );
        assert_matches!(
            "all\n  a=>b\n".parse::<PushFile>(),
            Err(PushError::Syntax { line: 2 })
        );
    }

    #[test]
    fn test_invalid_command_reports_its_line() {
        assert_matches!(
            "all\n\ta=>b\n\ta=>\n".parse::<PushFile>(),
            Err(PushError::Syntax { line: 3 })
        );
    }

    #[test]
    fn test_display_lists_targets_and_commands() {
        let push_file = "all\n\t:build\nbuild\n\ta + b => c | x\n"
            .parse::<PushFile>()
            .unwrap();
        assert_eq!(push_file.to_string(), "all\n\t2: :build\nbuild\n\t4: a+b=>c|x\n");
    }
}
