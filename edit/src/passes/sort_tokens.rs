use portfmt_core::Token;
use portfmt_rules::{compare_tokens, leave_unformatted, should_sort, RulesContext};

use crate::stream::collect_variable_groups;

/// For each variable, if `should_sort` and not `leave_unformatted`, stable-sort
/// the `VARIABLE_TOKEN` atoms by `compare_tokens` (spec.md §4.4).
pub fn sort_tokens(tokens: &mut [Token], ctx: &dyn RulesContext) {
    for group in collect_variable_groups(tokens) {
        if !should_sort(&group.name, ctx) || leave_unformatted(&group.name, ctx) {
            continue;
        }
        tokens[group.token_start..group.token_end].sort_by(|a, b| {
            compare_tokens(&group.name, a.data.as_deref().unwrap_or(""), b.data.as_deref().unwrap_or(""), ctx)
        });
    }
}

#[cfg(test)]
mod tests {
    use super::sort_tokens;
    use portfmt_parser::tokenize;
    use portfmt_rules::FuzzyContext;

    #[test]
    fn test_sort_simple_s1() {
        let mut tokens = tokenize("USES=  gmake cmake\n").unwrap();
        sort_tokens(&mut tokens, &FuzzyContext);
        let data: Vec<_> = tokens.iter().filter_map(|t| t.data.as_deref()).collect();
        assert_eq!(data, vec!["cmake", "gmake"]);
    }

    #[test]
    fn test_unsorted_variable_keeps_order() {
        let mut tokens = tokenize("COMMENT=\tz a\n").unwrap();
        sort_tokens(&mut tokens, &FuzzyContext);
        let data: Vec<_> = tokens.iter().filter_map(|t| t.data.as_deref()).collect();
        assert_eq!(data, vec!["z", "a"]);
    }
}
