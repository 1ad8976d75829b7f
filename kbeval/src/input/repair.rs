use std::borrow::Cow;
use regex::Regex;

lazy_static! {
    static ref CODEBLOCK: Regex = Regex::new(r"(?s)```json(.*)```").unwrap();
    static ref LAST_COMMA: Regex = Regex::new(r",(\s*[\}\]])").unwrap();
}

/// Keep only the body of a ```json fenced block, if the text has one
pub fn remove_codeblock(content: &str) -> &str {
    match CODEBLOCK.captures(content).and_then(|c| c.get(1)) {
        None => content,
        Some(m) => m.as_str()
    }
}

/// Drop commas that directly precede a closing bracket or brace
pub fn remove_last_comma(content: &str) -> Cow<str> {
    LAST_COMMA.replace_all(content, "$1")
}

/// Best-effort cleanup of model output before parsing it as JSON
pub fn repair(content: &str) -> String {
    remove_last_comma(remove_codeblock(content.trim())).into_owned()
}
