use std::collections::HashSet;
use std::rc::Rc;

use portfmt_core::{Token, TokenKind, Variable, VariableModifier};

use crate::metadata::is_port_mk_marker;

const KEEPS_APPEND: &[&str] = &["CFLAGS", "CXXFLAGS", "LDFLAGS"];

/// Rewrite `VAR +=` to `VAR =` on the first occurrence of each variable in
/// the contiguous block before the first `.include <bsd.port*.mk>`, except
/// for `CFLAGS`/`CXXFLAGS`/`LDFLAGS`, which stay append (spec.md §4.4,
/// §9 design notes: later `+=` occurrences in the same pre-include block are
/// intentionally left untouched).
pub fn sanitize_append_modifier(tokens: &mut [Token]) {
    let cutoff = tokens.iter().position(|t| is_port_mk_marker(t.kind)).unwrap_or(tokens.len());
    let mut seen: HashSet<String> = HashSet::new();
    let mut i = 0;

    while i < cutoff {
        if tokens[i].kind != TokenKind::VariableStart {
            i += 1;
            continue;
        }
        let Some(var) = tokens[i].variable.clone() else {
            i += 1;
            continue;
        };
        let mut end = i + 1;
        while end < tokens.len() && tokens[end].kind == TokenKind::VariableToken {
            end += 1;
        }
        let first_occurrence = seen.insert(var.name.clone());

        if var.modifier == VariableModifier::Append
            && first_occurrence
            && !KEEPS_APPEND.contains(&var.name.as_str())
        {
            let rewritten = Rc::new(Variable::new(var.name.clone(), VariableModifier::Assign));
            for tok in &mut tokens[i..=end] {
                tok.variable = Some(Rc::clone(&rewritten));
                tok.edited = true;
            }
        }

        i = end + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::sanitize_append_modifier;
    use portfmt_core::VariableModifier;
    use portfmt_parser::tokenize;

    #[test]
    fn test_sanitize_before_include_s5() {
        let mut tokens =
            tokenize("CFLAGS+=-O2\nFOO+=bar\n.include <bsd.port.mk>\n").unwrap();
        sanitize_append_modifier(&mut tokens);
        let cflags = tokens[0].variable.as_ref().unwrap();
        assert_eq!(cflags.modifier, VariableModifier::Append);
        let foo = tokens[3].variable.as_ref().unwrap();
        assert_eq!(foo.name, "FOO");
        assert_eq!(foo.modifier, VariableModifier::Assign);
    }

    #[test]
    fn test_second_occurrence_stays_append() {
        let mut tokens = tokenize("FOO+=a\nFOO+=b\n.include <bsd.port.mk>\n").unwrap();
        sanitize_append_modifier(&mut tokens);
        let groups = crate::stream::collect_variable_groups(&tokens);
        assert_eq!(tokens[groups[0].start].variable.as_ref().unwrap().modifier, VariableModifier::Assign);
        assert_eq!(tokens[groups[1].start].variable.as_ref().unwrap().modifier, VariableModifier::Append);
    }

    #[test]
    fn test_after_include_untouched() {
        let mut tokens = tokenize(".include <bsd.port.mk>\nBAR+=x\n").unwrap();
        sanitize_append_modifier(&mut tokens);
        let groups = crate::stream::collect_variable_groups(&tokens);
        assert_eq!(tokens[groups[0].start].variable.as_ref().unwrap().modifier, VariableModifier::Append);
    }
}
