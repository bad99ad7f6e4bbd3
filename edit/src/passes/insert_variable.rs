use std::cmp::Ordering;
use std::rc::Rc;

use portfmt_core::{Range, Token, TokenKind, Variable, VariableModifier};
use portfmt_rules::{compare_order, variable_order_block, RulesContext};

/// Insert a new variable assignment in sorted position (spec.md §4.4).
///
/// Finds the last existing `VARIABLE_END` whose name sorts strictly before
/// `name`; inserts immediately after it, bracketed by empty comment tokens
/// where the surrounding block differs from the new variable's block. With
/// no strictly-lesser variable, inserts before the first conditional/target,
/// or at the end of the stream.
pub fn insert_variable(
    tokens: &mut Vec<Token>,
    name: &str,
    modifier: VariableModifier,
    values: Vec<String>,
    ctx: &dyn RulesContext,
) {
    let varblock = variable_order_block(name, ctx);
    let line = Range::single(0);

    let mut insert_after: Option<usize> = None;
    for (i, tok) in tokens.iter().enumerate() {
        if tok.kind == TokenKind::VariableEnd {
            if let Some(var) = &tok.variable {
                if compare_order(&var.name, name, ctx) == Ordering::Less {
                    insert_after = Some(i);
                }
            }
        }
    }

    let variable = Rc::new(Variable::new(name, modifier));
    let mut new_tokens = vec![Token::variable_start(line, Rc::clone(&variable))];
    for v in values {
        new_tokens.push(Token::variable_token(line, Rc::clone(&variable), v));
    }
    new_tokens.push(Token::variable_end(line, variable));

    let mut insert_idx = match insert_after {
        None => tokens.iter().position(|t| t.is_target() || t.is_conditional()).unwrap_or(tokens.len()),
        Some(after) => {
            let preceding_block = tokens[after].variable.as_ref().map(|v| variable_order_block(&v.name, ctx));
            let at = after + 1;
            if preceding_block == Some(varblock) {
                at
            } else {
                tokens.insert(at, Token::comment(line, String::new()));
                at + 1
            }
        }
    };

    let trailing_differs = match tokens.get(insert_idx) {
        Some(t) if t.kind == TokenKind::ConditionalStart => true,
        Some(t) if t.kind == TokenKind::TargetStart => true,
        _ => false,
    };

    let new_len = new_tokens.len();
    for (k, tok) in new_tokens.into_iter().enumerate() {
        tokens.insert(insert_idx + k, tok);
    }
    insert_idx += new_len;

    if trailing_differs {
        tokens.insert(insert_idx, Token::comment(line, String::new()));
    }
}

#[cfg(test)]
mod tests {
    use super::insert_variable;
    use crate::stream::collect_variable_groups;
    use portfmt_core::VariableModifier;
    use portfmt_parser::tokenize;
    use portfmt_rules::FuzzyContext;

    #[test]
    fn test_insert_between_s2() {
        let mut tokens =
            tokenize("PORTNAME=foo\nDISTVERSION=1.0\nMAINTAINER=a@b\n").unwrap();
        insert_variable(&mut tokens, "CATEGORIES", VariableModifier::Assign, vec!["x".into()], &FuzzyContext);
        let groups = collect_variable_groups(&tokens);
        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["PORTNAME", "DISTVERSION", "CATEGORIES", "MAINTAINER"]);
    }

    #[test]
    fn test_insert_into_empty_stream() {
        let mut tokens = Vec::new();
        insert_variable(&mut tokens, "PORTNAME", VariableModifier::Assign, vec!["foo".into()], &FuzzyContext);
        let groups = collect_variable_groups(&tokens);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "PORTNAME");
    }

    #[test]
    fn test_insert_before_first_conditional_when_nothing_lesser() {
        let mut tokens = tokenize(".if defined(X)\n.endif\n").unwrap();
        insert_variable(&mut tokens, "PORTNAME", VariableModifier::Assign, vec!["foo".into()], &FuzzyContext);
        assert_eq!(tokens[0].kind, portfmt_core::TokenKind::VariableStart);
    }
}
