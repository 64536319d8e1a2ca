use std::sync::LazyLock;

use regex::Regex;

/// A file path inside a push equation. Mirrored by `CommandToken::Path`.
const PATH: &str = r"[~\w\\/.-]+";

static TARGET_REF_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\t:[\w.-]+$").unwrap());

static FILE_OP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let expression = format!(r"{PATH}(?:[ \t]*\+[ \t]*{PATH})*");
    let equation = format!(r"{expression}[ \t]*=>[ \t]*{expression}");
    Regex::new(&format!(
        r"^\t{equation}(?:[ \t]*\|[ \t]*[a-zA-Z0-9]+)?\w*$"
    ))
    .unwrap()
});

/// Check whether a tab-indented pushfile line is a legal command.
///
/// A command is either a target reference (`\t:name`) or a push equation
/// (`\tin1 + in2 => out1 + out2 | flags`).
pub fn is_valid_command(line: &str) -> bool {
    TARGET_REF_REGEX.is_match(line) || FILE_OP_REGEX.is_match(line)
}
