use std::collections::HashMap;

use portfmt_core::Token;
use portfmt_rules::RulesContext;

use crate::passes::{dedup_tokens, sanitize_append_modifier, sort_tokens};

/// Signature shared by the edit passes that take no config beyond the rules
/// context: `sort`, `dedup`, `sanitize`. `insert-variable`, `merge`, and
/// `set-version` need additional typed arguments (a name/value, an overlay
/// stream, a target version) and are dispatched directly by the CLI rather
/// than through this map (spec.md §9: "the function is a plain value").
pub type SimplePass = fn(&mut [Token], &dyn RulesContext);

/// A name→function dispatch table so edit passes are addressable by string
/// name from outside the core (spec.md §2 C9, §9 design notes).
pub struct PassRegistry {
    passes: HashMap<&'static str, SimplePass>,
}

impl PassRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut passes: HashMap<&'static str, SimplePass> = HashMap::new();
        passes.insert("sort", sort_tokens);
        passes.insert("dedup", dedup_tokens);
        passes.insert("sanitize-append-modifier", |tokens, _ctx| sanitize_append_modifier(tokens));
        Self { passes }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<SimplePass> { self.passes.get(name).copied() }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ { self.passes.keys().copied() }
}

impl Default for PassRegistry {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::PassRegistry;
    use portfmt_parser::tokenize;
    use portfmt_rules::FuzzyContext;

    #[test]
    fn test_dispatch_sort_by_name() {
        let registry = PassRegistry::new();
        let pass = registry.get("sort").expect("sort pass registered");
        let mut tokens = tokenize("USES=  gmake cmake\n").unwrap();
        pass(&mut tokens, &FuzzyContext);
        let data: Vec<_> = tokens.iter().filter_map(|t| t.data.as_deref()).collect();
        assert_eq!(data, vec!["cmake", "gmake"]);
    }

    #[test]
    fn test_unknown_pass_name_absent() {
        let registry = PassRegistry::new();
        assert!(registry.get("not-a-real-pass").is_none());
    }
}
