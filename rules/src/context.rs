/// What the rules engine needs to know about the rest of the token stream to
/// resolve non-fuzzy recognizers and comparators (spec.md §4.3, §4.6).
///
/// Implemented by the metadata cache in `portfmt-edit`; kept as a trait here
/// so `portfmt-rules` stays free of the edit pipeline's dependencies.
pub trait RulesContext {
    /// Whether `allow_fuzzy_matching` relaxes the "must be declared" side
    /// conditions on helper-family recognizers.
    fn allow_fuzzy_matching(&self) -> bool;

    fn is_declared_option(&self, name: &str) -> bool;
    fn is_declared_option_group(&self, name: &str) -> bool;
    fn is_declared_flavor(&self, name: &str) -> bool;
    fn is_declared_shebang_lang(&self, name: &str) -> bool;
    fn is_declared_cabal_executable(&self, name: &str) -> bool;
    fn is_declared_license(&self, name: &str) -> bool;
    fn has_uses(&self, name: &str) -> bool;
    /// Forces `should_sort` on for every sortable variable (`-u`).
    fn always_sort(&self) -> bool;
}

/// A context with every declared-name check open (fuzzy) and nothing forced;
/// useful for unit tests and for recognizers invoked before a stream exists.
#[derive(Clone, Copy, Debug, Default)]
pub struct FuzzyContext;

impl RulesContext for FuzzyContext {
    fn allow_fuzzy_matching(&self) -> bool { true }
    fn is_declared_option(&self, _name: &str) -> bool { true }
    fn is_declared_option_group(&self, _name: &str) -> bool { true }
    fn is_declared_flavor(&self, _name: &str) -> bool { true }
    fn is_declared_shebang_lang(&self, _name: &str) -> bool { true }
    fn is_declared_cabal_executable(&self, _name: &str) -> bool { true }
    fn is_declared_license(&self, _name: &str) -> bool { true }
    fn has_uses(&self, _name: &str) -> bool { true }
    fn always_sort(&self) -> bool { false }
}
