use portfmt_core::{ConditionalKind, VariableModifier};

/// How a logical line's head was classified, in the try-order spec.md §4.2
/// describes: empty, conditional, target, variable, else free comment/command.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Head<'a> {
    Empty,
    Conditional { kind: ConditionalKind, rest: &'a str },
    /// Looked like a directive (`.something`) but matched no known keyword.
    UnknownConditional { directive: &'a str },
    Target { head: &'a str },
    Variable { name: &'a str, modifier: VariableModifier, rhs: &'a str },
    Comment { text: &'a str },
    Command { body: &'a str },
    Other,
}

/// Classify one already continuation-joined logical line.
#[must_use]
pub fn classify(text: &str) -> Head<'_> {
    if text.trim().is_empty() {
        return Head::Empty;
    }
    if let Some(body) = text.strip_prefix('\t') {
        return Head::Command { body };
    }
    if text.starts_with('.') {
        if let Some((kind, rest)) = match_conditional(text) {
            return Head::Conditional { kind, rest };
        }
        // Special targets (`.PHONY:`, `.SUFFIXES:`, `.PATH:`, ...) also start
        // with `.` but aren't in the directive keyword set.
        if let Some(colon) = find_target_colon(text) {
            return Head::Target { head: &text[..colon] };
        }
        let directive_end =
            text[1..].find(|c: char| c.is_whitespace()).map_or(text.len(), |i| i + 1);
        return Head::UnknownConditional { directive: &text[..directive_end] };
    }
    if let Some(rest) = text.strip_prefix("include") {
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return Head::Conditional { kind: ConditionalKind::IncludePosix, rest: rest.trim_start() };
        }
    }
    if let Some(colon) = find_target_colon(text) {
        return Head::Target { head: &text[..colon] };
    }
    if let Some((eq, modifier)) = find_variable_head(text) {
        let width = modifier.width();
        return Head::Variable { name: text[..eq].trim_end(), modifier, rhs: &text[eq + width..] };
    }
    if text.trim_start().starts_with('#') {
        return Head::Comment { text: text.trim_start() };
    }
    Head::Other
}

fn match_conditional(text: &str) -> Option<(ConditionalKind, &str)> {
    let mut candidates: Vec<ConditionalKind> = ConditionalKind::all().to_vec();
    candidates.sort_by_key(|k| std::cmp::Reverse(k.as_str().len()));
    for kind in candidates {
        if kind == ConditionalKind::IncludePosix {
            continue;
        }
        let prefix = kind.as_str();
        if let Some(rest) = text.strip_prefix(prefix) {
            if rest.is_empty() || rest.starts_with(char::is_whitespace) {
                return Some((kind, rest.trim_start()));
            }
        }
    }
    None
}

fn find_target_colon(text: &str) -> Option<usize> {
    if text.starts_with(char::is_whitespace) {
        return None;
    }
    let bytes = text.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        match *b {
            b':' => {
                if bytes.get(i + 1) == Some(&b'=') {
                    return None;
                }
                return Some(i);
            }
            b'+' | b'?' | b'!' => {
                if bytes.get(i + 1) == Some(&b'=') {
                    return None;
                }
            }
            b'=' => return None,
            _ => {}
        }
    }
    None
}

fn find_variable_head(text: &str) -> Option<(usize, VariableModifier)> {
    let bytes = text.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'=' {
            if i > 0 {
                match bytes[i - 1] {
                    b'+' => return Some((i - 1, VariableModifier::Append)),
                    b':' => return Some((i - 1, VariableModifier::Expand)),
                    b'?' => return Some((i - 1, VariableModifier::Optional)),
                    b'!' => return Some((i - 1, VariableModifier::Shell)),
                    _ => {}
                }
            }
            if text[..i].trim().is_empty() {
                return None;
            }
            return Some((i, VariableModifier::Assign));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{classify, Head};
    use portfmt_core::{ConditionalKind, VariableModifier};

    #[test]
    fn test_empty() {
        assert_eq!(classify("   "), Head::Empty);
    }

    #[test]
    fn test_variable_assign() {
        assert_eq!(
            classify("PORTNAME=\tfoo"),
            Head::Variable { name: "PORTNAME", modifier: VariableModifier::Assign, rhs: "\tfoo" }
        );
    }

    #[test]
    fn test_variable_append() {
        assert_eq!(
            classify("USES+=\tcmake"),
            Head::Variable { name: "USES", modifier: VariableModifier::Append, rhs: "\tcmake" }
        );
    }

    #[test]
    fn test_target() {
        assert_eq!(classify("post-install:"), Head::Target { head: "post-install" });
    }

    #[test]
    fn test_phony_target() {
        assert_eq!(classify(".PHONY: clean"), Head::Target { head: ".PHONY" });
    }

    #[test]
    fn test_conditional_if() {
        assert_eq!(
            classify(".if ${PORT_OPTIONS:MSSL}"),
            Head::Conditional { kind: ConditionalKind::If, rest: "${PORT_OPTIONS:MSSL}" }
        );
    }

    #[test]
    fn test_conditional_include_posix() {
        assert_eq!(
            classify("include \"foo.mk\""),
            Head::Conditional { kind: ConditionalKind::IncludePosix, rest: "\"foo.mk\"" }
        );
    }

    #[test]
    fn test_unknown_conditional() {
        assert_eq!(classify(".bogus foo"), Head::UnknownConditional { directive: ".bogus" });
    }

    #[test]
    fn test_command_line() {
        assert_eq!(classify("\tinstall -d ${PREFIX}"), Head::Command { body: "install -d ${PREFIX}" });
    }

    #[test]
    fn test_comment() {
        assert_eq!(classify("# a free comment"), Head::Comment { text: "# a free comment" });
    }
}
