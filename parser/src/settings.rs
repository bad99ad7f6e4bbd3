/// Options that influence tokenization and downstream passes (spec.md §4.2, §5).
///
/// Most fields gate behavior in `portfmt-edit`/`portfmt-render`; the parser
/// itself only consults `wrapcol`-independent fields, but the struct is
/// threaded through as a single record the way the rest of the pipeline
/// expects it.
#[derive(Clone, Debug)]
pub struct ParserSettings {
    pub diff_context: usize,
    pub dump_tokens: bool,
    pub always_sort: bool,
    pub allow_fuzzy_matching: bool,
    pub merge_comments_unchanged: bool,
    pub merge_shell_is_delete: bool,
    pub merge_optional_like_assign: bool,
    pub output_inplace: bool,
    pub output_raw_lines: bool,
    pub output_diff: bool,
    pub output_no_color: bool,
    pub wrapcol: usize,
    pub target_command_wrapcol: usize,
    pub debug: bool,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            diff_context: 3,
            dump_tokens: false,
            always_sort: false,
            allow_fuzzy_matching: false,
            merge_comments_unchanged: false,
            merge_shell_is_delete: false,
            merge_optional_like_assign: false,
            output_inplace: false,
            output_raw_lines: false,
            output_diff: false,
            output_no_color: false,
            wrapcol: 80,
            target_command_wrapcol: 74,
            debug: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ParserSettings;

    #[test]
    fn test_default_wrapcol() {
        let settings = ParserSettings::default();
        assert_eq!(settings.wrapcol, 80);
        assert!(!settings.always_sort);
    }
}
