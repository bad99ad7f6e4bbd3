use std::cmp::Ordering;

use portfmt_core::{matches, substitute, Regex};

use crate::{
    block::BlockType,
    context::RulesContext,
    order_table::ORDER,
    recognizers::{
        is_flavors_helper, is_options_helper, matches_license_name, FLAVORS_HELPER_SUFFIXES,
        OPTHELPER_SUFFIXES,
    },
    resolve::resolve,
    target_table::{split_target_name, target_index},
};

fn base_and_subpkg(name: &str) -> (&str, Option<&str>) {
    name.split_once('.').map_or((name, None), |(base, sub)| (base, Some(sub)))
}

fn exact_table_index(name: &str) -> Option<usize> { ORDER.iter().position(|(n, _)| *n == name) }

fn license_generic_index(kind: &str) -> Option<usize> {
    exact_table_index(&format!("LICENSE_{kind}"))
}

/// `compare_order(a, b, parser) -> -1|0|1` (spec.md §4.3).
#[must_use]
pub fn compare_order(a: &str, b: &str, ctx: &dyn RulesContext) -> Ordering {
    let (base_a, sub_a) = base_and_subpkg(a);
    let (base_b, sub_b) = base_and_subpkg(b);

    let block_a = resolve(base_a, ctx).block;
    let block_b = resolve(base_b, ctx).block;

    match block_a.cmp(&block_b) {
        Ordering::Equal => {}
        other => return other,
    }

    if !block_a.has_internal_order() {
        return Ordering::Equal;
    }

    let by_specialization = match block_a {
        BlockType::Opthelper => compare_opthelper(base_a, base_b, ctx),
        BlockType::FlavorsHelper => compare_flavors_helper(base_a, base_b, ctx),
        BlockType::License => compare_license(base_a, base_b, ctx),
        _ => {
            let ia = exact_table_index(base_a).unwrap_or(usize::MAX);
            let ib = exact_table_index(base_b).unwrap_or(usize::MAX);
            ia.cmp(&ib)
        }
    };

    by_specialization.then_with(|| sub_a.is_some().cmp(&sub_b.is_some())).then_with(|| sub_a.cmp(&sub_b))
}

fn compare_opthelper(a: &str, b: &str, ctx: &dyn RulesContext) -> Ordering {
    let ha = is_options_helper(a, ctx);
    let hb = is_options_helper(b, ctx);
    match (ha, hb) {
        (Some(ha), Some(hb)) => ha.prefix.cmp(&hb.prefix).then_with(|| {
            let ia = OPTHELPER_SUFFIXES.iter().position(|s| *s == ha.suffix).unwrap_or(usize::MAX);
            let ib = OPTHELPER_SUFFIXES.iter().position(|s| *s == hb.suffix).unwrap_or(usize::MAX);
            ia.cmp(&ib)
        }),
        _ => a.cmp(b),
    }
}

fn compare_flavors_helper(a: &str, b: &str, ctx: &dyn RulesContext) -> Ordering {
    let ha = is_flavors_helper(a, ctx);
    let hb = is_flavors_helper(b, ctx);
    match (ha, hb) {
        (Some(ha), Some(hb)) => ha.prefix.cmp(&hb.prefix).then_with(|| {
            let ia = FLAVORS_HELPER_SUFFIXES.iter().position(|s| *s == ha.suffix).unwrap_or(usize::MAX);
            let ib = FLAVORS_HELPER_SUFFIXES.iter().position(|s| *s == hb.suffix).unwrap_or(usize::MAX);
            ia.cmp(&ib)
        }),
        _ => a.cmp(b),
    }
}

fn compare_license(a: &str, b: &str, ctx: &dyn RulesContext) -> Ordering {
    fn kind_index(name: &str, ctx: &dyn RulesContext) -> usize {
        if exact_table_index(name).is_some() {
            return exact_table_index(name).unwrap();
        }
        for kind in ["FILE", "NAME", "TEXT"] {
            if matches_license_name(name, ctx) && name.contains(&format!("LICENSE_{kind}")) {
                return license_generic_index(kind).unwrap_or(usize::MAX);
            }
        }
        exact_table_index("LICENSE").unwrap_or(usize::MAX)
    }
    kind_index(a, ctx).cmp(&kind_index(b, ctx)).then_with(|| a.cmp(b))
}

/// Fixed relative order of FreeBSD license permission tags.
pub static LICENSE_PERMS_ORDER: &[&str] = &[
    "dist-mirror",
    "no-dist-mirror",
    "dist-sell",
    "no-dist-sell",
    "pkg-mirror",
    "no-pkg-mirror",
    "pkg-sell",
    "no-pkg-sell",
    "auto-accept",
    "no-auto-accept",
];

pub static GNOME_COMPONENTS_ORDER: &[&str] =
    &["glib20", "gtk20", "gtk30", "cairo", "pango", "atk", "gdkpixbuf2", "libxml2", "intltool", "introspection"];

pub static KDE_COMPONENTS_ORDER: &[&str] =
    &["ecm", "frameworks", "plasma", "kf5-kcoreaddons", "kf5-kconfig", "kf5-ki18n", "kf5-kio"];

pub static PYQT_COMPONENTS_ORDER: &[&str] =
    &["core", "gui", "widgets", "network", "sql", "svg", "webkit", "printsupport"];

pub static QT_COMPONENTS_ORDER: &[&str] =
    &["core", "gui", "widgets", "network", "sql", "concurrent", "printsupport", "opengl"];

fn fixed_vocabulary_index(vocab: &[&str], token: &str) -> Option<usize> {
    vocab.iter().position(|v| *v == token)
}

fn strip_plist_keyword(token: &str) -> String { substitute(Regex::PlistKeyword, "", token) }

/// `compare_tokens(a, b, parser)` (spec.md §4.3): comments sort last;
/// specialized comparators run in declaration order; otherwise a
/// case-(in)sensitive string compare per the variable's flag.
#[must_use]
pub fn compare_tokens(variable: &str, a: &str, b: &str, ctx: &dyn RulesContext) -> Ordering {
    let a_comment = a.trim_start().starts_with('#');
    let b_comment = b.trim_start().starts_with('#');
    if a_comment != b_comment {
        return a_comment.cmp(&b_comment);
    }
    if a_comment && b_comment {
        return Ordering::Equal;
    }

    let base_variable = variable.split_once('.').map_or(variable, |(base, _)| base);
    let specialized = match base_variable {
        "LICENSE_PERMS" => {
            let parts_a: Vec<&str> = a.split(':').collect();
            let parts_b: Vec<&str> = b.split(':').collect();
            let tag_a = parts_a.last().copied().unwrap_or(a);
            let tag_b = parts_b.last().copied().unwrap_or(b);
            fixed_vocabulary_index(LICENSE_PERMS_ORDER, tag_a)
                .unwrap_or(usize::MAX)
                .cmp(&fixed_vocabulary_index(LICENSE_PERMS_ORDER, tag_b).unwrap_or(usize::MAX))
        }
        "PLIST_FILES" | "PLIST_DIRS" => {
            let sa = strip_plist_keyword(a);
            let sb = strip_plist_keyword(b);
            sa.cmp(&sb)
        }
        "USE_GNOME" => fixed_vocabulary_index(GNOME_COMPONENTS_ORDER, a)
            .unwrap_or(usize::MAX)
            .cmp(&fixed_vocabulary_index(GNOME_COMPONENTS_ORDER, b).unwrap_or(usize::MAX)),
        "USE_KDE" => fixed_vocabulary_index(KDE_COMPONENTS_ORDER, a)
            .unwrap_or(usize::MAX)
            .cmp(&fixed_vocabulary_index(KDE_COMPONENTS_ORDER, b).unwrap_or(usize::MAX)),
        "USE_PYQT" => fixed_vocabulary_index(PYQT_COMPONENTS_ORDER, a)
            .unwrap_or(usize::MAX)
            .cmp(&fixed_vocabulary_index(PYQT_COMPONENTS_ORDER, b).unwrap_or(usize::MAX)),
        "USE_QT" => fixed_vocabulary_index(QT_COMPONENTS_ORDER, a)
            .unwrap_or(usize::MAX)
            .cmp(&fixed_vocabulary_index(QT_COMPONENTS_ORDER, b).unwrap_or(usize::MAX)),
        _ => Ordering::Equal,
    };

    if specialized != Ordering::Equal || matches!(base_variable, "LICENSE_PERMS" | "PLIST_FILES" | "PLIST_DIRS" | "USE_GNOME" | "USE_KDE" | "USE_PYQT" | "USE_QT")
    {
        return specialized;
    }

    if crate::resolve::case_sensitive_sort(variable, ctx) {
        a.cmp(b)
    } else {
        a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase())
    }
}

/// `compare_target_order(a, b, parser)` (spec.md §4.3).
#[must_use]
pub fn compare_target_order(a: &str, b: &str) -> Ordering {
    let pa = split_target_name(a);
    let pb = split_target_name(b);

    let ia = target_index(pa.root).unwrap_or(usize::MAX);
    let ib = target_index(pb.root).unwrap_or(usize::MAX);

    ia.cmp(&ib)
        .then_with(|| pa.opt.cmp(&pb.opt))
        .then_with(|| pb.on.cmp(&pa.on))
}

#[must_use]
pub fn matches_pattern(re: Regex, s: &str) -> bool { matches(re, s) }

#[cfg(test)]
mod tests {
    use super::{compare_order, compare_target_order, compare_tokens};
    use crate::context::FuzzyContext;
    use std::cmp::Ordering;

    #[test]
    fn test_compare_order_blocks() {
        assert_eq!(compare_order("PORTNAME", "MAINTAINER", &FuzzyContext), Ordering::Less);
        assert_eq!(compare_order("MAINTAINER", "PORTNAME", &FuzzyContext), Ordering::Greater);
    }

    #[test]
    fn test_compare_order_within_block() {
        assert_eq!(compare_order("PORTNAME", "DISTVERSION", &FuzzyContext), Ordering::Less);
    }

    #[test]
    fn test_compare_order_subpkg_after_base() {
        assert_eq!(compare_order("COMMENT", "COMMENT.pkg", &FuzzyContext), Ordering::Less);
    }

    #[test]
    fn test_compare_tokens_case_insensitive() {
        assert_eq!(compare_tokens("USES", "gmake", "CMake", &FuzzyContext), Ordering::Greater);
    }

    #[test]
    fn test_compare_tokens_case_sensitive() {
        assert_eq!(compare_tokens("CFLAGS", "-O2", "-Wall", &FuzzyContext), Ordering::Less);
    }

    #[test]
    fn test_compare_tokens_comment_last() {
        assert_eq!(compare_tokens("USES", "# note", "cmake", &FuzzyContext), Ordering::Greater);
    }

    #[test]
    fn test_compare_target_order() {
        assert_eq!(compare_target_order("fetch", "build"), Ordering::Less);
    }
}
