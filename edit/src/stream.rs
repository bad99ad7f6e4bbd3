use portfmt_core::{Token, TokenKind};

/// The token-index bounds of one `VARIABLE_START`…`VARIABLE_END` group.
#[derive(Clone, Debug)]
pub struct VariableGroup {
    /// Index of the `VARIABLE_START` token.
    pub start: usize,
    /// Index of the `VARIABLE_END` token.
    pub end: usize,
    /// Index range of the `VARIABLE_TOKEN`s between start and end.
    pub token_start: usize,
    pub token_end: usize,
    pub name: String,
}

/// Scan `tokens` for every top-level variable group, in stream order.
#[must_use]
pub fn collect_variable_groups(tokens: &[Token]) -> Vec<VariableGroup> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        if tokens[i].kind == TokenKind::VariableStart {
            let name = tokens[i].variable.as_ref().map_or_else(String::new, |v| v.name.clone());
            let token_start = i + 1;
            let mut j = token_start;
            while j < tokens.len() && tokens[j].kind == TokenKind::VariableToken {
                j += 1;
            }
            out.push(VariableGroup { start: i, end: j, token_start, token_end: j, name });
            i = j + 1;
            continue;
        }
        i += 1;
    }
    out
}

/// Re-scan `tokens` for the (first) group matching `name`.
#[must_use]
pub fn find_variable_group(tokens: &[Token], name: &str) -> Option<VariableGroup> {
    collect_variable_groups(tokens).into_iter().find(|g| g.name == name)
}

/// Physically remove the `VARIABLE_START`/tokens/`VARIABLE_END` run for `name`,
/// if present.
pub fn delete_variable(tokens: &mut Vec<Token>, name: &str) {
    if let Some(group) = find_variable_group(tokens, name) {
        tokens.drain(group.start..=group.end);
    }
}

/// Drop every token marked `garbage` (spec.md §5: run after each edit pass).
pub fn compact(tokens: &mut Vec<Token>) { tokens.retain(|t| !t.garbage); }

/// A maximal run of variable groups and comments uninterrupted by a target or
/// conditional token (spec.md §4.4 "paragraph").
#[must_use]
pub fn paragraphs(tokens: &[Token]) -> Vec<Vec<VariableGroup>> {
    let mut out = Vec::new();
    let mut current = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        match tokens[i].kind {
            TokenKind::VariableStart => {
                let name = tokens[i].variable.as_ref().map_or_else(String::new, |v| v.name.clone());
                let token_start = i + 1;
                let mut j = token_start;
                while j < tokens.len() && tokens[j].kind == TokenKind::VariableToken {
                    j += 1;
                }
                current.push(VariableGroup { start: i, end: j, token_start, token_end: j, name });
                i = j + 1;
                continue;
            }
            TokenKind::Comment => {}
            _ => {
                if !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                }
            }
        }
        i += 1;
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{collect_variable_groups, compact, delete_variable, paragraphs};
    use portfmt_core::{Token, Variable, VariableModifier};
    use std::rc::Rc;

    fn sample() -> Vec<Token> {
        use portfmt_core::Range;
        let line = Range::single(1);
        let a = Rc::new(Variable::new("PORTNAME", VariableModifier::Assign));
        let b = Rc::new(Variable::new("USES", VariableModifier::Append));
        vec![
            Token::variable_start(line, Rc::clone(&a)),
            Token::variable_token(line, Rc::clone(&a), "foo"),
            Token::variable_end(line, a),
            Token::variable_start(line, Rc::clone(&b)),
            Token::variable_token(line, Rc::clone(&b), "cmake"),
            Token::variable_token(line, Rc::clone(&b), "ninja"),
            Token::variable_end(line, b),
        ]
    }

    #[test]
    fn test_collect_variable_groups() {
        let tokens = sample();
        let groups = collect_variable_groups(&tokens);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "PORTNAME");
        assert_eq!(groups[1].token_end - groups[1].token_start, 2);
    }

    #[test]
    fn test_delete_variable() {
        let mut tokens = sample();
        delete_variable(&mut tokens, "PORTNAME");
        assert_eq!(tokens.len(), 4);
        assert_eq!(collect_variable_groups(&tokens)[0].name, "USES");
    }

    #[test]
    fn test_compact() {
        let mut tokens = sample();
        tokens[1].mark_garbage();
        compact(&mut tokens);
        assert_eq!(tokens.len(), 6);
    }

    #[test]
    fn test_paragraphs_single_run() {
        let tokens = sample();
        let paras = paragraphs(&tokens);
        assert_eq!(paras.len(), 1);
        assert_eq!(paras[0].len(), 2);
    }
}
