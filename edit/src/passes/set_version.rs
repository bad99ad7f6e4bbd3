use once_cell::sync::Lazy;
use regex::Regex;

use portfmt_core::{Error, Range, Result, Token, TokenKind, VariableModifier};
use portfmt_rules::RulesContext;

use crate::stream::{delete_variable, find_variable_group};

use super::merge::{merge, MergeOptions};

static GIT_DESCRIBE_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"-[0-9]+-g[0-9a-f]+$").unwrap());
static VERSION_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^0-9]+").unwrap());

/// Resolve `PORTVERSION` (falling back to `DISTVERSION`), split a git-describe
/// suffix and non-digit prefix off `new_version`, and fold the result back
/// into `tokens`: drop a numeric `PORTREVISION` if the version changed, and
/// add/keep/delete `DISTVERSIONPREFIX`/`DISTVERSIONSUFFIX`/`DISTVERSION`
/// (spec.md §4.4, scenario S6).
pub fn set_version(tokens: &mut Vec<Token>, new_version: &str, ctx: &dyn RulesContext) -> Result<()> {
    let suffix = GIT_DESCRIBE_SUFFIX.find(new_version).map(|m| m.as_str().to_string());
    let base = suffix.as_ref().map_or(new_version, |s| &new_version[..new_version.len() - s.len()]);
    let prefix = VERSION_PREFIX.find(base).map(|m| m.as_str().to_string());
    let version = prefix.as_ref().map_or(base, |p| &base[p.len()..]);

    if version.is_empty() {
        return Err(Error::ExpectedInt { line: 0 });
    }

    let current = find_variable_group(tokens, "PORTVERSION")
        .or_else(|| find_variable_group(tokens, "DISTVERSION"))
        .and_then(|g| tokens[g.token_start..g.token_end].iter().find_map(|t| t.data.clone()));

    let changed = current.as_deref() != Some(version);

    if changed {
        if let Some(revision_group) = find_variable_group(tokens, "PORTREVISION") {
            let is_numeric = tokens[revision_group.token_start..revision_group.token_end]
                .iter()
                .any(|t| t.data.as_deref().is_some_and(|d| d.chars().all(|c| c.is_ascii_digit())));
            if is_numeric {
                delete_variable(tokens, "PORTREVISION");
            }
        }
    }

    delete_variable(tokens, "PORTVERSION");

    let mut overlay = Vec::new();
    push_or_delete(&mut overlay, "DISTVERSIONPREFIX", prefix);
    push_assign(&mut overlay, "DISTVERSION", version);
    push_or_delete(&mut overlay, "DISTVERSIONSUFFIX", suffix);

    for name in ["DISTVERSIONPREFIX", "DISTVERSION", "DISTVERSIONSUFFIX"] {
        if overlay.iter().any(|t| t.kind == TokenKind::VariableStart && t.variable.as_ref().unwrap().name == name) {
            continue;
        }
        delete_variable(tokens, name);
    }

    merge(tokens, &overlay, ctx, &MergeOptions::default());
    Ok(())
}

fn push_assign(overlay: &mut Vec<Token>, name: &str, value: &str) {
    use std::rc::Rc;
    let variable = Rc::new(portfmt_core::Variable::new(name, VariableModifier::Assign));
    let line = Range::single(0);
    overlay.push(Token::variable_start(line, Rc::clone(&variable)));
    overlay.push(Token::variable_token(line, Rc::clone(&variable), value.to_string()));
    overlay.push(Token::variable_end(line, variable));
}

fn push_or_delete(overlay: &mut Vec<Token>, name: &str, value: Option<String>) {
    if let Some(value) = value {
        push_assign(overlay, name, &value);
    }
}

#[cfg(test)]
mod tests {
    use super::set_version;
    use crate::stream::collect_variable_groups;
    use portfmt_parser::tokenize;
    use portfmt_rules::FuzzyContext;

    #[test]
    fn test_set_version_git_describe_s6() {
        let mut tokens = tokenize("PORTVERSION=\t1.0\nPORTREVISION=\t3\n").unwrap();
        set_version(&mut tokens, "1.2-4-gabcdef1", &FuzzyContext).unwrap();

        let groups = collect_variable_groups(&tokens);
        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert!(!names.contains(&"PORTVERSION"));
        assert!(!names.contains(&"PORTREVISION"));
        assert!(names.contains(&"DISTVERSION"));
        assert!(names.contains(&"DISTVERSIONSUFFIX"));

        let distversion = groups.iter().find(|g| g.name == "DISTVERSION").unwrap();
        let value = tokens[distversion.token_start].data.as_deref().unwrap();
        assert_eq!(value, "1.2");

        let suffix = groups.iter().find(|g| g.name == "DISTVERSIONSUFFIX").unwrap();
        let value = tokens[suffix.token_start].data.as_deref().unwrap();
        assert_eq!(value, "-4-gabcdef1");
    }

    #[test]
    fn test_set_version_unchanged_keeps_portrevision() {
        let mut tokens = tokenize("PORTVERSION=\t1.0\nPORTREVISION=\t3\n").unwrap();
        set_version(&mut tokens, "1.0", &FuzzyContext).unwrap();
        let groups = collect_variable_groups(&tokens);
        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert!(names.contains(&"PORTREVISION"));
    }

    #[test]
    fn test_set_version_with_prefix() {
        let mut tokens = tokenize("DISTVERSION=\t1.0\n").unwrap();
        set_version(&mut tokens, "v2.0", &FuzzyContext).unwrap();
        let groups = collect_variable_groups(&tokens);
        let prefix = groups.iter().find(|g| g.name == "DISTVERSIONPREFIX").unwrap();
        assert_eq!(tokens[prefix.token_start].data.as_deref(), Some("v"));
        let distversion = groups.iter().find(|g| g.name == "DISTVERSION").unwrap();
        assert_eq!(tokens[distversion.token_start].data.as_deref(), Some("2.0"));
    }
}
