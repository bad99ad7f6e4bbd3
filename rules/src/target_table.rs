/// The target-order table (spec.md §4.3 (c)): well-known Makefile targets in
/// their canonical emission order, flagging which accept an
/// `opt-on:`/`opt-off:` opthelper variant.
pub static TARGETS: &[(&str, bool)] = &[
    ("fetch", false),
    ("fetch-list", false),
    ("checksum", false),
    ("makesum", false),
    ("extract", true),
    ("patch", true),
    ("configure", true),
    ("build", true),
    ("install", true),
    ("reinstall", false),
    ("describe", false),
    ("pretty-print-run-depends-list", false),
    ("pretty-print-build-depends-list", false),
    ("package", false),
    ("deinstall", false),
    ("regression-test", false),
    ("test", true),
    ("check-plist", false),
    ("clean", false),
    ("post-install", true),
    ("pre-install", true),
    ("post-build", true),
    ("pre-build", true),
    ("post-configure", true),
    ("pre-configure", true),
    ("post-patch", true),
    ("pre-patch", true),
    ("post-extract", true),
    ("pre-extract", true),
    ("post-fetch", false),
    ("pre-fetch", false),
];

/// `root`, optional `opt-on`/`opt-off` state, and table index for a target
/// name (spec.md §4.3 `compare_target_order`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TargetNameParts<'a> {
    pub root: &'a str,
    pub opt: Option<&'a str>,
    pub on: bool,
}

#[must_use]
pub fn split_target_name(name: &str) -> TargetNameParts<'_> {
    if let Some((opt, rest)) = name.split_once(':') {
        if let Some(root) = rest.strip_prefix("opt-on-") {
            return TargetNameParts { root, opt: Some(opt), on: true };
        }
        if let Some(root) = rest.strip_prefix("opt-off-") {
            return TargetNameParts { root, opt: Some(opt), on: false };
        }
    }
    TargetNameParts { root: name, opt: None, on: true }
}

#[must_use]
pub fn target_index(root: &str) -> Option<usize> { TARGETS.iter().position(|(n, _)| *n == root) }

#[cfg(test)]
mod tests {
    use super::split_target_name;

    #[test]
    fn test_split_plain() {
        let parts = split_target_name("build");
        assert_eq!(parts.root, "build");
        assert_eq!(parts.opt, None);
    }

    #[test]
    fn test_split_opthelper() {
        let parts = split_target_name("ssl:opt-on-build");
        assert_eq!(parts.root, "build");
        assert_eq!(parts.opt, Some("ssl"));
        assert!(parts.on);
    }
}
