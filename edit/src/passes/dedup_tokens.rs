use std::collections::HashSet;

use portfmt_core::Token;
use portfmt_rules::{skip_dedup, RulesContext};

use crate::stream::collect_variable_groups;

/// Keep the first occurrence of each RHS atom per variable, marking the rest
/// garbage; `USES` additionally collapses `name:args` forms so only the first
/// `name:…` for a given name survives (spec.md §4.4).
///
/// Garbage-marked tokens are left in place; call [`crate::stream::compact`]
/// to physically drop them.
pub fn dedup_tokens(tokens: &mut [Token], ctx: &dyn RulesContext) {
    for group in collect_variable_groups(tokens) {
        if skip_dedup(&group.name, ctx) {
            continue;
        }
        let base_name = group.name.split_once('.').map_or(group.name.as_str(), |(b, _)| b);
        let is_uses = base_name == "USES";
        let mut seen: HashSet<String> = HashSet::new();

        for idx in group.token_start..group.token_end {
            let Some(data) = tokens[idx].data.clone() else { continue };
            if data.trim_start().starts_with('#') {
                continue;
            }
            let key = if is_uses {
                data.split_once(':').map_or_else(|| data.clone(), |(name, _)| name.to_string())
            } else {
                data.clone()
            };
            if seen.contains(&key) {
                tokens[idx].mark_garbage();
            } else {
                seen.insert(key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::dedup_tokens;
    use crate::stream::compact;
    use portfmt_parser::tokenize;
    use portfmt_rules::FuzzyContext;

    #[test]
    fn test_dedup_uses_collapses_args_s4() {
        let mut tokens = tokenize("USES=\tcompiler:c++11-lang compiler:c++14-lang\n").unwrap();
        dedup_tokens(&mut tokens, &FuzzyContext);
        compact(&mut tokens);
        let data: Vec<_> = tokens.iter().filter_map(|t| t.data.as_deref()).collect();
        assert_eq!(data, vec!["compiler:c++11-lang"]);
    }

    #[test]
    fn test_dedup_flavors_keeps_first_exact() {
        let mut tokens = tokenize("FLAVORS=\tfoo foo bar\n").unwrap();
        dedup_tokens(&mut tokens, &FuzzyContext);
        compact(&mut tokens);
        let data: Vec<_> = tokens.iter().filter_map(|t| t.data.as_deref()).collect();
        assert_eq!(data, vec!["foo", "bar"]);
    }

    #[test]
    fn test_skip_dedup_variable_untouched() {
        let mut tokens = tokenize("RUN_DEPENDS=\tfoo>0:x/foo foo>0:x/foo\n").unwrap();
        dedup_tokens(&mut tokens, &FuzzyContext);
        compact(&mut tokens);
        let data: Vec<_> = tokens.iter().filter_map(|t| t.data.as_deref()).collect();
        assert_eq!(data, vec!["foo>0:x/foo", "foo>0:x/foo"]);
    }
}
