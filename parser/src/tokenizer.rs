use std::rc::Rc;

use portfmt_core::{Conditional, ConditionalKind, Error, Result, Target, Token, TokenKind, Variable};

use crate::{
    classify::{classify, Head},
    join::join_continuations,
    rhs::tokenize_rhs,
};

/// Tokenize a complete buffer into the flat token stream spec.md §3 describes.
///
/// # Errors
///
/// Returns [`Error::UnknownConditional`] for a `.`-prefixed line that doesn't
/// match any directive in the closed set, and [`Error::UnspecifiedTokenizer`]
/// for a line that matches none of empty/conditional/target/variable/comment.
pub fn tokenize(buf: &str) -> Result<Vec<Token>> {
    let logical_lines = join_continuations(buf);
    let mut tokens = Vec::new();
    let mut current_target: Option<Rc<Target>> = None;

    for line in logical_lines {
        let text = line.text.as_str();

        if let Some(target) = &current_target {
            if text.starts_with('\t') {
                let body = &text[1..];
                let target = Rc::clone(target);
                let rhs = tokenize_rhs(body);
                if !rhs.atoms.is_empty() {
                    tokens.push(Token::target_command_start(line.lines, Rc::clone(&target)));
                    for atom in rhs.atoms {
                        tokens.push(Token::target_command_token(line.lines, Rc::clone(&target), atom));
                    }
                    tokens.push(Token::target_command_end(line.lines, Rc::clone(&target)));
                }
                continue;
            }
            tokens.push(Token::target_end(line.lines, Rc::clone(target)));
            current_target = None;
        }

        match classify(text) {
            Head::Empty => {}

            Head::UnknownConditional { directive } => {
                return Err(Error::UnknownConditional {
                    directive: directive.to_string(),
                    line: line.lines.start,
                });
            }

            Head::Conditional { kind, rest } => {
                let trimmed = rest.trim();
                if kind == ConditionalKind::Include {
                    if let Some(marker) = special_include_marker(trimmed) {
                        tokens.push(Token::include_marker(marker, line.lines));
                        continue;
                    }
                }
                let conditional = Rc::new(Conditional::new(kind));
                tokens.push(Token::conditional_start(line.lines, Rc::clone(&conditional)));
                if !trimmed.is_empty() {
                    let rest = tokenize_rhs(trimmed);
                    for atom in rest.atoms {
                        tokens.push(Token::conditional_token(line.lines, Rc::clone(&conditional), atom));
                    }
                }
                tokens.push(Token::conditional_end(line.lines, conditional));
            }

            Head::Target { head } => {
                let names: Vec<String> = head.split_whitespace().map(ToString::to_string).collect();
                if names.is_empty() {
                    return Err(Error::UnspecifiedTokenizer { line: line.lines.start });
                }
                let mut deps_text = &text[head.len() + 1..];
                deps_text = deps_text.strip_prefix(':').unwrap_or(deps_text);
                let deps = tokenize_rhs(deps_text);
                let target = Rc::new(Target::new(names, deps.atoms));
                tokens.push(Token::target_start(line.lines, Rc::clone(&target)));
                if let Some(comment) = deps.demoted_comment {
                    tokens.push(Token::comment(line.lines, comment));
                }
                current_target = Some(target);
            }

            Head::Variable { name, modifier, rhs } => {
                let rhs = tokenize_rhs(rhs);
                if let Some(comment) = rhs.demoted_comment {
                    tokens.push(Token::comment(line.lines, comment));
                }
                let variable = Rc::new(Variable::new(name, modifier));
                tokens.push(Token::variable_start(line.lines, Rc::clone(&variable)));
                for atom in rhs.atoms {
                    tokens.push(Token::variable_token(line.lines, Rc::clone(&variable), atom));
                }
                tokens.push(Token::variable_end(line.lines, variable));
            }

            Head::Comment { text } => tokens.push(Token::comment(line.lines, text)),

            Head::Command { .. } | Head::Other => {
                return Err(Error::UnspecifiedTokenizer { line: line.lines.start });
            }
        }
    }

    if let Some(target) = current_target {
        let last_line = tokens.last().map_or(1, |t| t.lines.end);
        tokens.push(Token::target_end(portfmt_core::Range::single(last_line), target));
    }

    Ok(tokens)
}

fn special_include_marker(rest: &str) -> Option<TokenKind> {
    Some(match rest {
        "<bsd.port.mk>" => TokenKind::PortMk,
        "<bsd.port.options.mk>" => TokenKind::PortOptionsMk,
        "<bsd.port.pre.mk>" => TokenKind::PortPreMk,
        "<bsd.port.post.mk>" => TokenKind::PortPostMk,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::tokenize;
    use portfmt_core::TokenKind;

    #[test]
    fn test_simple_variable() {
        let tokens = tokenize("PORTNAME=\tfoo\n").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::VariableStart, TokenKind::VariableToken, TokenKind::VariableEnd]
        );
        assert_eq!(tokens[1].data.as_deref(), Some("foo"));
    }

    #[test]
    fn test_multi_atom_variable() {
        let tokens = tokenize("USES=\tcmake ninja\n").unwrap();
        let data: Vec<_> = tokens.iter().filter_map(|t| t.data.as_deref()).collect();
        assert_eq!(data, vec!["cmake", "ninja"]);
    }

    #[test]
    fn test_target_with_command() {
        let tokens = tokenize("post-install:\n\tinstall -d ${PREFIX}\n").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::TargetStart,
                TokenKind::TargetCommandStart,
                TokenKind::TargetCommandToken,
                TokenKind::TargetCommandToken,
                TokenKind::TargetCommandToken,
                TokenKind::TargetCommandEnd,
                TokenKind::TargetEnd,
            ]
        );
    }

    #[test]
    fn test_target_closes_on_non_tab_line() {
        let tokens = tokenize("all:\n\techo hi\nPORTNAME=foo\n").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::TargetStart,
                TokenKind::TargetCommandStart,
                TokenKind::TargetCommandToken,
                TokenKind::TargetCommandToken,
                TokenKind::TargetCommandEnd,
                TokenKind::TargetEnd,
                TokenKind::VariableStart,
                TokenKind::VariableToken,
                TokenKind::VariableEnd,
            ]
        );
    }

    #[test]
    fn test_conditional() {
        let tokens = tokenize(".if ${PORT_OPTIONS:MSSL}\nPORTNAME=foo\n.endif\n").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::ConditionalStart,
                TokenKind::ConditionalToken,
                TokenKind::ConditionalEnd,
                TokenKind::VariableStart,
                TokenKind::VariableToken,
                TokenKind::VariableEnd,
                TokenKind::ConditionalStart,
                TokenKind::ConditionalEnd,
            ]
        );
    }

    #[test]
    fn test_conditional_multi_atom_rest() {
        let tokens = tokenize(".if ${FOO} == bar\n.endif\n").unwrap();
        let data: Vec<_> =
            tokens.iter().filter(|t| t.kind == TokenKind::ConditionalToken).filter_map(|t| t.data.as_deref()).collect();
        assert_eq!(data, vec!["${FOO}", "==", "bar"]);
    }

    #[test]
    fn test_bsd_port_mk_marker() {
        let tokens = tokenize(".include <bsd.port.mk>\n").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::PortMk);
    }

    #[test]
    fn test_unknown_conditional_errors() {
        let err = tokenize(".bogus\n").unwrap_err();
        assert!(matches!(err, portfmt_core::Error::UnknownConditional { .. }));
    }

    #[test]
    fn test_free_comment() {
        let tokens = tokenize("# a header comment\nPORTNAME=foo\n").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].data.as_deref(), Some("# a header comment"));
    }

    #[test]
    fn test_demoted_inline_comment_precedes_variable() {
        let tokens = tokenize("USES=\tcmake # needs cmake\n").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Comment,
                TokenKind::VariableStart,
                TokenKind::VariableToken,
                TokenKind::VariableEnd,
            ]
        );
        assert_eq!(tokens[0].data.as_deref(), Some("# needs cmake"));
    }

    #[test]
    fn test_preserved_comment_kept_inline() {
        let tokens = tokenize("EXTRA_PATCHES=\t#none\n").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::VariableStart, TokenKind::VariableToken, TokenKind::VariableEnd]
        );
        assert_eq!(tokens[1].data.as_deref(), Some("#none"));
    }

    #[test]
    fn test_continuation_joins_into_one_group() {
        let tokens = tokenize("USES=\tcmake \\\n\tninja\n").unwrap();
        let data: Vec<_> = tokens.iter().filter_map(|t| t.data.as_deref()).collect();
        assert_eq!(data, vec!["cmake", "ninja"]);
    }
}
