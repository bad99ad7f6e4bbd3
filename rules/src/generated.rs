use once_cell::sync::Lazy;

use crate::{block::BlockType, flags::VariableFlags, order_table::VariableRule};

/// CPU architectures recognized in arch-qualified variable names (spec.md §4.3).
pub static ARCHES: &[&str] = &[
    "aarch64",
    "amd64",
    "armv6",
    "armv7",
    "i386",
    "mips",
    "mips64",
    "powerpc",
    "powerpc64",
    "powerpcspe",
    "sparc64",
];

/// `FreeBSD` major-version qualifiers recognized in version-qualified names.
pub static FREEBSD_VERSIONS: &[&str] = &["FreeBSD_11", "FreeBSD_12", "FreeBSD_13", "FreeBSD"];

/// SSL provider qualifiers recognized in `*_SSL_<provider>` names.
pub static SSL_PROVIDERS: &[&str] =
    &["base", "libressl", "libressl-devel", "openssl", "openssl111"];

/// The programmatically generated arch/OS-version/SSL-provider-qualified
/// variable names, each with `BROKEN`'s formatting policy. Computed once from
/// the fixed lists above, never enumerated by hand.
pub fn generated() -> &'static [(String, VariableRule)] {
    static TABLE: Lazy<Vec<(String, VariableRule)>> = Lazy::new(|| {
        let unformatted = VariableRule {
            block: BlockType::Broken,
            flags: VariableFlags::LEAVE_UNFORMATTED,
            uses: &[],
        };
        let mut out = Vec::new();

        for arch in ARCHES {
            out.push((format!("BROKEN_{arch}"), unformatted));
            out.push((format!("IGNORE_{arch}"), unformatted));
        }

        for ver in FREEBSD_VERSIONS {
            out.push((format!("BROKEN_{ver}"), unformatted));
            out.push((format!("IGNORE_{ver}"), unformatted));

            for arch in ARCHES {
                out.push((format!("BROKEN_{ver}_{arch}"), unformatted));
                out.push((format!("IGNORE_{ver}_{arch}"), unformatted));
            }
        }

        for provider in SSL_PROVIDERS {
            out.push((format!("BROKEN_SSL_{provider}"), unformatted));
            out.push((format!("IGNORE_SSL_{provider}"), unformatted));
        }

        out
    });
    &TABLE
}

/// Look up a generated (arch/version/SSL-qualified) variable name.
#[must_use]
pub fn lookup_generated(name: &str) -> Option<&'static VariableRule> {
    generated().iter().find(|(n, _)| n == name).map(|(_, r)| r)
}

#[cfg(test)]
mod tests {
    use super::lookup_generated;

    #[test]
    fn test_arch_qualified() {
        assert!(lookup_generated("BROKEN_aarch64").is_some());
        assert!(lookup_generated("IGNORE_FreeBSD_12_sparc64").is_some());
        assert!(lookup_generated("BROKEN_SSL_openssl111").is_some());
        assert!(lookup_generated("BROKEN_bogus_arch").is_none());
    }

    #[test]
    fn test_count_matches_fixed_lists() {
        // 2 per arch + 2 per version + 2*archlen per version + 2 per provider
        let expected = 2 * 11 + 2 * 4 + 2 * 4 * 11 + 2 * 5;
        assert_eq!(super::generated().len(), expected);
    }
}
