use std::collections::HashSet;

use portfmt_core::{Token, TokenKind};
use portfmt_rules::{matches_options_group, RulesContext};

use crate::stream::collect_variable_groups;

/// Lazily (re)computed metadata about a token stream, derived by a single
/// forward scan (spec.md §4.6). Implements [`RulesContext`] so the rules
/// engine can resolve fuzzy helper-family variables without depending on the
/// edit pipeline.
#[derive(Clone, Debug, Default)]
pub struct MetadataCache {
    uses: HashSet<String>,
    options: HashSet<String>,
    option_groups: HashSet<String>,
    flavors: HashSet<String>,
    shebang_langs: HashSet<String>,
    cabal_executables: HashSet<String>,
    licenses: HashSet<String>,
    /// Caller-provided; spec.md §4.4 notes `output-unknown-targets` takes
    /// this set from the caller rather than deriving it from the stream.
    post_plist_targets: HashSet<String>,
    subpackages: HashSet<String>,
    masterdir: bool,
    version: u64,
    always_sort: bool,
    allow_fuzzy_matching: bool,
}

impl MetadataCache {
    #[must_use]
    pub fn scan(tokens: &[Token], version: u64, always_sort: bool, allow_fuzzy_matching: bool) -> Self {
        let mut cache = Self { version, always_sort, allow_fuzzy_matching, ..Self::default() };

        for group in collect_variable_groups(tokens) {
            let atoms: Vec<&str> =
                tokens[group.token_start..group.token_end].iter().filter_map(|t| t.data.as_deref()).collect();

            if let Some(group_name) = matches_options_group(&group.name) {
                cache.option_groups.insert(group_name.to_string());
                cache.options.extend(atoms.iter().map(|a| (*a).to_string()));
                continue;
            }

            match group.name.as_str() {
                "USES" => cache.uses.extend(
                    atoms.iter().map(|a| a.split_once(':').map_or(*a, |(n, _)| n).to_string()),
                ),
                "OPTIONS_DEFINE" | "OPTIONS_DEFAULT" => {
                    cache.options.extend(atoms.iter().map(|a| (*a).to_string()));
                }
                "FLAVORS" => cache.flavors.extend(atoms.iter().map(|a| (*a).to_string())),
                "SHEBANG_LANGS" => cache.shebang_langs.extend(atoms.iter().map(|a| (*a).to_string())),
                "CABAL_EXECUTABLES" => {
                    cache.cabal_executables.extend(atoms.iter().map(|a| (*a).to_string()));
                }
                "LICENSE" => cache.licenses.extend(atoms.iter().map(|a| (*a).to_string())),
                "SUBPACKAGES" => cache.subpackages.extend(atoms.iter().map(|a| (*a).to_string())),
                "MASTERDIR" => cache.masterdir = true,
                _ => {}
            }
        }

        cache
    }

    /// Recompute from scratch if the recorded `version` is stale.
    pub fn refresh_if_stale(
        &mut self,
        tokens: &[Token],
        current_version: u64,
        always_sort: bool,
        allow_fuzzy_matching: bool,
    ) {
        if self.version != current_version {
            *self = Self::scan(tokens, current_version, always_sort, allow_fuzzy_matching);
        }
    }

    #[must_use]
    pub const fn version(&self) -> u64 { self.version }

    pub fn set_post_plist_targets(&mut self, targets: HashSet<String>) {
        self.post_plist_targets = targets;
    }

    #[must_use]
    pub fn is_post_plist_target(&self, name: &str) -> bool { self.post_plist_targets.contains(name) }

    #[must_use]
    pub const fn has_masterdir(&self) -> bool { self.masterdir }

    #[must_use]
    pub fn subpackages(&self) -> &HashSet<String> { &self.subpackages }
}

impl RulesContext for MetadataCache {
    fn allow_fuzzy_matching(&self) -> bool { self.allow_fuzzy_matching }
    fn is_declared_option(&self, name: &str) -> bool { self.options.contains(name) }
    fn is_declared_option_group(&self, name: &str) -> bool { self.option_groups.contains(name) }
    fn is_declared_flavor(&self, name: &str) -> bool { self.flavors.contains(name) }
    fn is_declared_shebang_lang(&self, name: &str) -> bool { self.shebang_langs.contains(name) }
    fn is_declared_cabal_executable(&self, name: &str) -> bool { self.cabal_executables.contains(name) }
    fn is_declared_license(&self, name: &str) -> bool { self.licenses.contains(name) }
    fn has_uses(&self, name: &str) -> bool { self.uses.contains(name) }
    fn always_sort(&self) -> bool { self.always_sort }
}

/// Does `kind` mark an `.include <bsd.port*.mk>` boundary (spec.md §3)?
#[must_use]
pub const fn is_port_mk_marker(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::PortMk | TokenKind::PortOptionsMk | TokenKind::PortPreMk | TokenKind::PortPostMk
    )
}

#[cfg(test)]
mod tests {
    use super::MetadataCache;
    use portfmt_parser::tokenize;
    use portfmt_rules::RulesContext;

    #[test]
    fn test_scan_uses() {
        let tokens = tokenize("USES=\tcmake:noninja pkgconfig\n").unwrap();
        let cache = MetadataCache::scan(&tokens, 0, false, false);
        assert!(cache.has_uses("cmake"));
        assert!(cache.has_uses("pkgconfig"));
    }

    #[test]
    fn test_scan_options() {
        let tokens = tokenize("OPTIONS_DEFINE=\tSSL DOCS\nOPTIONS_GROUP_BACKEND=\tSQLITE MYSQL\n").unwrap();
        let cache = MetadataCache::scan(&tokens, 0, false, false);
        assert!(cache.is_declared_option("SSL"));
        assert!(cache.is_declared_option("SQLITE"));
        assert!(cache.is_declared_option_group("BACKEND"));
    }

    #[test]
    fn test_refresh_if_stale() {
        let tokens = tokenize("USES=\tcmake\n").unwrap();
        let mut cache = MetadataCache::scan(&tokens, 1, false, false);
        cache.refresh_if_stale(&tokens, 1, false, false);
        assert_eq!(cache.version(), 1);
        cache.refresh_if_stale(&tokens, 2, false, false);
        assert_eq!(cache.version(), 2);
    }
}
