use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use portfmt_core::{Token, TokenKind};
use portfmt_rules::{compare_order, variable_order_block, RulesContext};

use crate::stream::collect_variable_groups;

/// One finding enqueued by a read-only output/lint pass (spec.md §4.4:
/// "rendered via the enqueue-output sink rather than by mutating the
/// stream"). Lint passes never fail on a policy violation; they only ever
/// produce these.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    pub message: String,
}

impl Diagnostic {
    fn new(message: impl Into<String>) -> Self { Self { message: message.into() } }
}

/// All values assigned to `var` across the stream, in stream order.
#[must_use]
pub fn output_variable_value(tokens: &[Token], var: &str) -> Vec<String> {
    collect_variable_groups(tokens)
        .into_iter()
        .filter(|g| g.name == var)
        .flat_map(|g| tokens[g.token_start..g.token_end].iter().filter_map(|t| t.data.clone()))
        .collect()
}

/// Variables that resolve to `BlockType::Unknown` (spec.md §7: "not errors
/// during formatting; they land in the `UNKNOWN` block").
#[must_use]
pub fn output_unknown_variables(tokens: &[Token], ctx: &dyn RulesContext) -> Vec<String> {
    let mut seen = HashSet::new();
    collect_variable_groups(tokens)
        .into_iter()
        .filter(|g| variable_order_block(&g.name, ctx) == portfmt_rules::BlockType::Unknown)
        .filter(|g| seen.insert(g.name.clone()))
        .map(|g| g.name)
        .collect()
}

/// Target names in the stream that are not in the well-known target table and
/// not reachable by following dependencies from a known target, special
/// source, or `post_plist_targets`.
#[must_use]
pub fn output_unknown_targets(
    tokens: &[Token],
    special_sources: &HashSet<String>,
    post_plist_targets: &HashSet<String>,
) -> Vec<String> {
    let mut names = Vec::new();
    let mut seen = HashSet::new();
    let mut dependencies: HashMap<String, Vec<String>> = HashMap::new();
    for tok in tokens {
        if tok.kind == TokenKind::TargetStart {
            if let Some(target) = &tok.target {
                for name in &target.names {
                    if seen.insert(name.clone()) {
                        names.push(name.clone());
                    }
                }
                for name in &target.names {
                    dependencies.entry(name.clone()).or_default().extend(target.dependencies.iter().cloned());
                }
            }
        }
    }

    let mut reachable: HashSet<String> =
        names.iter().filter(|n| portfmt_rules::target_index(n).is_some()).cloned().collect();
    let mut changed = true;
    while changed {
        changed = false;
        for (name, deps) in &dependencies {
            if reachable.contains(name) {
                for dep in deps {
                    if reachable.insert(dep.clone()) {
                        changed = true;
                    }
                }
            }
        }
    }

    names
        .into_iter()
        .filter(|n| {
            portfmt_rules::target_index(n).is_none()
                && !reachable.contains(n)
                && !special_sources.contains(n)
                && !post_plist_targets.contains(n)
        })
        .collect()
}

/// Scenario-3 property check (spec.md §8 property 3): every adjacent pair of
/// `VARIABLE_START` tokens outside conditionals is correctly ordered.
#[must_use]
pub fn lint_order(tokens: &[Token], ctx: &dyn RulesContext) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let groups: Vec<_> = collect_variable_groups(tokens);
    for pair in groups.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if compare_order(&a.name, &b.name, ctx) == Ordering::Greater {
            diagnostics.push(Diagnostic::new(format!("{} appears before {} out of order", a.name, b.name)));
        }
    }
    diagnostics
}

/// Variables assigned more than once with identical value sets, a common
/// copy-paste mistake in overlay ports.
#[must_use]
pub fn lint_clones(tokens: &[Token]) -> Vec<Diagnostic> {
    let mut by_name: HashMap<&str, Vec<Vec<&str>>> = HashMap::new();
    let groups = collect_variable_groups(tokens);
    for group in &groups {
        let atoms: Vec<&str> =
            tokens[group.token_start..group.token_end].iter().filter_map(|t| t.data.as_deref()).collect();
        by_name.entry(group.name.as_str()).or_default().push(atoms);
    }

    let mut diagnostics = Vec::new();
    for (name, occurrences) in by_name {
        if occurrences.len() < 2 {
            continue;
        }
        for i in 1..occurrences.len() {
            if occurrences[i] == occurrences[0] {
                diagnostics.push(Diagnostic::new(format!("{name} is assigned identically more than once")));
            }
        }
    }
    diagnostics
}

/// `PORTREVISION` commented out rather than removed (spec.md §4.4).
#[must_use]
pub fn lint_commented_portrevision(tokens: &[Token]) -> Vec<Diagnostic> {
    tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Comment)
        .filter(|t| t.data.as_deref().is_some_and(|d| d.trim_start_matches('#').trim_start().starts_with("PORTREVISION")))
        .map(|_| Diagnostic::new("PORTREVISION is commented out instead of removed"))
        .collect()
}

/// `.include <bsd.port.mk>` missing from the stream entirely.
#[must_use]
pub fn lint_bsd_port(tokens: &[Token]) -> Vec<Diagnostic> {
    if tokens.iter().any(|t| t.kind == TokenKind::PortMk) {
        Vec::new()
    } else {
        vec![Diagnostic::new("missing .include <bsd.port.mk>")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfmt_parser::tokenize;
    use portfmt_rules::FuzzyContext;
    use std::collections::HashSet;

    #[test]
    fn test_output_variable_value() {
        let tokens = tokenize("USES=\tcmake pkgconfig\n").unwrap();
        assert_eq!(output_variable_value(&tokens, "USES"), vec!["cmake", "pkgconfig"]);
    }

    #[test]
    fn test_output_unknown_variables() {
        let tokens = tokenize("PORTNAME=foo\nMY_WEIRD_VAR=1\n").unwrap();
        let unknown = output_unknown_variables(&tokens, &FuzzyContext);
        assert_eq!(unknown, vec!["MY_WEIRD_VAR"]);
    }

    #[test]
    fn test_output_unknown_targets() {
        let tokens = tokenize("mystery-target:\n\techo hi\n").unwrap();
        let unknown = output_unknown_targets(&tokens, &HashSet::new(), &HashSet::new());
        assert_eq!(unknown, vec!["mystery-target"]);
    }

    #[test]
    fn test_lint_order_detects_violation() {
        let tokens = tokenize("MAINTAINER=a@b\nPORTNAME=foo\n").unwrap();
        let diagnostics = lint_order(&tokens, &FuzzyContext);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_lint_clones_detects_duplicate() {
        let tokens = tokenize("USES=\tcmake\nUSES=\tcmake\n").unwrap();
        assert_eq!(lint_clones(&tokens).len(), 1);
    }

    #[test]
    fn test_lint_bsd_port_missing() {
        let tokens = tokenize("PORTNAME=foo\n").unwrap();
        assert_eq!(lint_bsd_port(&tokens).len(), 1);
    }

    #[test]
    fn test_lint_bsd_port_present() {
        let tokens = tokenize("PORTNAME=foo\n.include <bsd.port.mk>\n").unwrap();
        assert!(lint_bsd_port(&tokens).is_empty());
    }
}
