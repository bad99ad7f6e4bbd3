use crate::context::RulesContext;

/// Option-helper suffixes recognized after a `PREFIX_` (spec.md §4.3 `is_options_helper`).
pub static OPTHELPER_SUFFIXES: &[&str] = &[
    "DESC",
    "CONFIGURE_ENABLE",
    "CONFIGURE_WITH",
    "CONFIGURE_ON",
    "CONFIGURE_OFF",
    "CMAKE_BOOL",
    "CMAKE_ON",
    "CMAKE_OFF",
    "MESON_ENABLED",
    "MESON_DISABLED",
    "MESON_TRUE",
    "MESON_FALSE",
    "USE",
    "VARS",
    "CFLAGS",
    "CPPFLAGS",
    "LDFLAGS",
    "LIB_DEPENDS",
    "RUN_DEPENDS",
    "BUILD_DEPENDS",
    "EXTRA_PATCHES",
    "IMPLIES",
    "PREVENTS",
    "PREVENTS_MSG",
    "MAKE_ENV",
    "VARS_OFF",
];

/// Flavor-helper suffixes recognized after a `prefix_` (spec.md §4.3 `is_flavors_helper`).
pub static FLAVORS_HELPER_SUFFIXES: &[&str] = &["PKGNAMEPREFIX", "PKGNAMESUFFIX", "DESC"];

/// Decomposition of a recognized options-helper variable name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OptionsHelper {
    pub prefix: String,
    pub suffix: &'static str,
    pub subpkg: Option<String>,
}

/// `PREFIX_HELPER[.SUBPKG]` where `HELPER` is `DESC` or an opthelper suffix.
#[must_use]
pub fn is_options_helper(var: &str, ctx: &dyn RulesContext) -> Option<OptionsHelper> {
    let (head, subpkg) = match var.split_once('.') {
        Some((h, s)) => (h, Some(s.to_string())),
        None => (var, None),
    };

    if !head.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-' || c == '_') {
        return None;
    }

    let mut best: Option<(&str, &str)> = None;
    for suffix in OPTHELPER_SUFFIXES {
        if let Some(prefix) = head.strip_suffix(&format!("_{suffix}")) {
            if !prefix.is_empty() && best.map_or(true, |(p, _)| prefix.len() < p.len()) {
                best = Some((prefix, suffix));
            }
        }
    }

    let (prefix, suffix) = best?;

    if !ctx.allow_fuzzy_matching() && !ctx.is_declared_option(prefix) && !ctx.is_declared_option_group(prefix)
    {
        return None;
    }

    Some(OptionsHelper { prefix: prefix.to_string(), suffix, subpkg })
}

/// Decomposition of a recognized flavors-helper variable name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FlavorsHelper {
    pub prefix: String,
    pub suffix: &'static str,
}

/// `prefix_HELPER` where `HELPER` is a flavors-helper suffix.
#[must_use]
pub fn is_flavors_helper(var: &str, ctx: &dyn RulesContext) -> Option<FlavorsHelper> {
    let mut best: Option<(&str, &str)> = None;
    for suffix in FLAVORS_HELPER_SUFFIXES {
        if let Some(prefix) = var.strip_suffix(&format!("_{suffix}")) {
            if !prefix.is_empty() && best.map_or(true, |(p, _)| prefix.len() < p.len()) {
                best = Some((prefix, suffix));
            }
        }
    }
    let (prefix, suffix) = best?;

    if !prefix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_') {
        return None;
    }

    if !ctx.allow_fuzzy_matching() && !ctx.is_declared_flavor(prefix) {
        return None;
    }

    Some(FlavorsHelper { prefix: prefix.to_string(), suffix })
}

/// `LANG_CMD` or `LANG_OLD_CMD`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShebangLang {
    pub lang: String,
    pub old: bool,
}

#[must_use]
pub fn is_shebang_lang(var: &str, ctx: &dyn RulesContext) -> Option<ShebangLang> {
    let (lang, old) = if let Some(lang) = var.strip_suffix("_OLD_CMD") {
        (lang, true)
    } else if let Some(lang) = var.strip_suffix("_CMD") {
        (lang, false)
    } else {
        return None;
    };
    if lang.is_empty() {
        return None;
    }

    if !ctx.allow_fuzzy_matching() && !(ctx.has_uses("shebangfix") && ctx.is_declared_shebang_lang(lang)) {
        return None;
    }

    Some(ShebangLang { lang: lang.to_string(), old })
}

/// `EXE_DATADIR_VARS`.
#[must_use]
pub fn is_cabal_datadir_vars(var: &str, ctx: &dyn RulesContext) -> Option<String> {
    let exe = var.strip_suffix("_DATADIR_VARS")?;
    if exe.is_empty() {
        return None;
    }
    if !ctx.allow_fuzzy_matching() && !(ctx.has_uses("cabal") && ctx.is_declared_cabal_executable(exe)) {
        return None;
    }
    Some(exe.to_string())
}

/// `_?OPTIONS_(GROUP|MULTI|RADIO|SINGLE)_…` — returns the group prefix.
#[must_use]
pub fn matches_options_group(var: &str) -> Option<&str> {
    let stripped = var.strip_prefix('_').unwrap_or(var);
    for kind in ["GROUP", "MULTI", "RADIO", "SINGLE"] {
        if let Some(rest) = stripped.strip_prefix(&format!("OPTIONS_{kind}_")) {
            if !rest.is_empty() {
                return Some(rest);
            }
        }
    }
    None
}

/// `LICENSE_(FILE|NAME|TEXT)` and their `_<LICENSE>`-suffixed forms.
#[must_use]
pub fn matches_license_name(var: &str, ctx: &dyn RulesContext) -> bool {
    let stripped = var.strip_prefix('_').unwrap_or(var);
    for kind in ["FILE", "NAME", "TEXT"] {
        let head = format!("LICENSE_{kind}");
        if stripped == head {
            return true;
        }
        if let Some(license) = stripped.strip_prefix(&format!("{head}_")) {
            let lexes = !license.is_empty()
                && license.chars().all(|c| c.is_ascii_alphanumeric() || "-._+".contains(c));
            if lexes && (ctx.allow_fuzzy_matching() || ctx.is_declared_license(license)) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::{is_flavors_helper, is_options_helper, is_shebang_lang, matches_license_name, matches_options_group};
    use crate::context::FuzzyContext;

    #[test]
    fn test_options_helper_desc() {
        let h = is_options_helper("SSL_DESC", &FuzzyContext).unwrap();
        assert_eq!(h.prefix, "SSL");
        assert_eq!(h.suffix, "DESC");
    }

    #[test]
    fn test_options_helper_subpkg() {
        let h = is_options_helper("SSL_USE.pkg", &FuzzyContext).unwrap();
        assert_eq!(h.subpkg.as_deref(), Some("pkg"));
    }

    #[test]
    fn test_flavors_helper() {
        let h = is_flavors_helper("py39_DESC", &FuzzyContext).unwrap();
        assert_eq!(h.prefix, "py39");
    }

    #[test]
    fn test_shebang_lang() {
        let h = is_shebang_lang("PYTHON_CMD", &FuzzyContext).unwrap();
        assert_eq!(h.lang, "PYTHON");
        assert!(!h.old);
        let h = is_shebang_lang("PERL_OLD_CMD", &FuzzyContext).unwrap();
        assert!(h.old);
    }

    #[test]
    fn test_options_group() {
        assert_eq!(matches_options_group("OPTIONS_GROUP_SSL"), Some("SSL"));
        assert_eq!(matches_options_group("_OPTIONS_SINGLE_BACKEND"), Some("BACKEND"));
        assert_eq!(matches_options_group("PORTNAME"), None);
    }

    #[test]
    fn test_license_name() {
        assert!(matches_license_name("LICENSE_FILE", &FuzzyContext));
        assert!(matches_license_name("LICENSE_FILE_GPLv2", &FuzzyContext));
        assert!(!matches_license_name("LICENSE_PERMS", &FuzzyContext));
    }
}
