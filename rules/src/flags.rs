use bitflags::bitflags;

bitflags! {
    /// Per-variable formatting policy (spec.md §3 `VariableRule.flags`).
    #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
    pub struct VariableFlags: u16 {
        const DEFAULT               = 0;
        const CASE_SENSITIVE_SORT   = 1 << 0;
        const IGNORE_WRAPCOL        = 1 << 1;
        const LEAVE_UNFORMATTED     = 1 << 2;
        const NOT_COMPARABLE        = 1 << 3;
        const PRINT_AS_NEWLINES     = 1 << 4;
        const SKIP_GOALCOL          = 1 << 5;
        const SORTED                = 1 << 6;
        const SUBPKG_HELPER         = 1 << 7;
        const DEDUP                 = 1 << 8;
    }
}

impl Default for VariableFlags {
    fn default() -> Self { Self::DEFAULT }
}
