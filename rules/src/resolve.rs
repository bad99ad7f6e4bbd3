use portfmt_core::VariableModifier;

use crate::{
    block::BlockType,
    context::RulesContext,
    flags::VariableFlags,
    generated::lookup_generated,
    order_table::{lookup_exact, VariableRule},
    recognizers::{is_cabal_datadir_vars, is_flavors_helper, is_options_helper, is_shebang_lang},
};

/// Resolve the formatting/ordering policy for `name` (spec.md §4.3).
///
/// Exact matches in the order/special tables win; otherwise the
/// arch/version/SSL-generated table is tried; otherwise the helper-family
/// recognizers are tried in the order spec.md documents; anything left falls
/// into `BlockType::Unknown` with default flags.
#[must_use]
pub fn resolve(name: &str, ctx: &dyn RulesContext) -> VariableRule {
    if let Some((_, rule)) = lookup_exact(name) {
        return *rule;
    }
    if let Some(rule) = lookup_generated(name) {
        return *rule;
    }
    if let Some(helper) = is_options_helper(name, ctx) {
        let mut flags = VariableFlags::DEFAULT;
        if helper.subpkg.is_some() {
            flags |= VariableFlags::SUBPKG_HELPER;
        }
        return VariableRule { block: BlockType::Opthelper, flags, uses: &[] };
    }
    if is_flavors_helper(name, ctx).is_some() {
        return VariableRule { block: BlockType::FlavorsHelper, flags: VariableFlags::DEFAULT, uses: &[] };
    }
    if is_shebang_lang(name, ctx).is_some() {
        return VariableRule {
            block: BlockType::Shebangfix,
            flags: VariableFlags::DEFAULT,
            uses: &["shebangfix"],
        };
    }
    if is_cabal_datadir_vars(name, ctx).is_some() {
        return VariableRule { block: BlockType::Cabal, flags: VariableFlags::SORTED, uses: &["cabal"] };
    }

    VariableRule { block: BlockType::Unknown, flags: VariableFlags::DEFAULT, uses: &[] }
}

#[must_use]
pub fn variable_order_block(name: &str, ctx: &dyn RulesContext) -> BlockType { resolve(name, ctx).block }

#[must_use]
pub fn ignore_wrap_col(name: &str, ctx: &dyn RulesContext) -> bool {
    resolve(name, ctx).flags.contains(VariableFlags::IGNORE_WRAPCOL)
}

#[must_use]
pub fn case_sensitive_sort(name: &str, ctx: &dyn RulesContext) -> bool {
    resolve(name, ctx).flags.contains(VariableFlags::CASE_SENSITIVE_SORT)
}

#[must_use]
pub fn leave_unformatted(name: &str, ctx: &dyn RulesContext) -> bool {
    resolve(name, ctx).flags.contains(VariableFlags::LEAVE_UNFORMATTED)
}

#[must_use]
pub fn should_sort(name: &str, ctx: &dyn RulesContext) -> bool {
    if ctx.always_sort() && !leave_unformatted(name, ctx) {
        return true;
    }
    resolve(name, ctx).flags.contains(VariableFlags::SORTED)
}

#[must_use]
pub fn print_as_newlines(name: &str, ctx: &dyn RulesContext) -> bool {
    resolve(name, ctx).flags.contains(VariableFlags::PRINT_AS_NEWLINES)
}

#[must_use]
pub fn skip_dedup(name: &str, ctx: &dyn RulesContext) -> bool {
    !resolve(name, ctx).flags.contains(VariableFlags::DEDUP)
}

#[must_use]
pub fn skip_goalcol(name: &str, ctx: &dyn RulesContext) -> bool {
    resolve(name, ctx).flags.contains(VariableFlags::SKIP_GOALCOL)
}

/// `#`, `# empty`, `#none`, `# none` are kept as ordinary tokens rather than
/// demoted to an out-of-band inline comment (spec.md §4.2).
#[must_use]
pub fn preserve_eol_comment(comment: &str) -> bool {
    matches!(comment.trim(), "#" | "# empty" | "#none" | "# none")
}

/// `len = len(name) + 1 + (modifier == ASSIGN ? 1 : 2); if (len+1) mod 8 == 0
/// then len += 1; result is ceil(len / 8) * 8` (spec.md §4.3).
#[must_use]
pub fn indent_goalcol(name: &str, modifier: VariableModifier) -> usize {
    let mut len = name.len() + 1 + modifier.width();
    if (len + 1) % 8 == 0 {
        len += 1;
    }
    ((len + 7) / 8) * 8
}

#[cfg(test)]
mod tests {
    use super::{case_sensitive_sort, indent_goalcol, resolve, should_sort};
    use crate::{block::BlockType, context::FuzzyContext};
    use portfmt_core::VariableModifier;

    #[test]
    fn test_resolve_known_block() {
        assert_eq!(resolve("PORTNAME", &FuzzyContext).block, BlockType::Portname);
        assert_eq!(resolve("USES", &FuzzyContext).block, BlockType::Uses);
    }

    #[test]
    fn test_resolve_opthelper() {
        assert_eq!(resolve("SSL_DESC", &FuzzyContext).block, BlockType::Opthelper);
    }

    #[test]
    fn test_resolve_unknown() {
        assert_eq!(resolve("SOME_RANDOM_VAR", &FuzzyContext).block, BlockType::Unknown);
    }

    #[test]
    fn test_case_sensitive_sort() {
        assert!(case_sensitive_sort("CFLAGS", &FuzzyContext));
        assert!(!case_sensitive_sort("USES", &FuzzyContext));
    }

    #[test]
    fn test_should_sort_uses() { assert!(should_sort("USES", &FuzzyContext)); }

    #[test]
    fn test_indent_goalcol_s2() {
        // PORTNAME= -> len("PORTNAME")=8, +1+1(assign)=10, (10+1)%8=3 no bump, ceil(10/8)*8=16
        assert_eq!(indent_goalcol("PORTNAME", VariableModifier::Assign), 16);
        assert_eq!(indent_goalcol("DISTVERSION", VariableModifier::Assign), 16);
        assert_eq!(indent_goalcol("MAINTAINER", VariableModifier::Assign), 16);
    }
}
