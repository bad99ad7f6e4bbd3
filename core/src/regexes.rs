use once_cell::sync::Lazy;
use regex::Regex as Re;

/// The closed set of named patterns the tokenizer and rules engine consult.
///
/// Patterns are compiled once, lazily, on first use; a malformed pattern is a
/// programmer error in this crate and aborts with a diagnostic rather than
/// being surfaced as a recoverable [`crate::Error`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Regex {
    EmptyLine,
    ConditionalHead,
    TargetHead,
    VariableHead,
    LicenseName,
    PlistKeyword,
    OptionsHelper,
    FlavorsHelper,
    ShebangLang,
    CabalDatadirVars,
    OptionsGroup,
    InlineComment,
    GitDescribeSuffix,
}

impl Regex {
    const fn pattern(self) -> &'static str {
        match self {
            Self::EmptyLine => r"^[[:space:]]*$",
            Self::ConditionalHead => {
                r"^\.\s*(if|ifdef|ifndef|ifmake|ifnmake|else|elif|elifdef|elifndef|elifmake|endif|for|endfor|include|sinclude|error|warning|info|export|export-env|export-literal|unexport|unexport-env|undef)\b|^include\b"
            }
            Self::TargetHead => r"^([^\s:=][^:=]*):(?:[^=]|$)",
            Self::VariableHead => r"^([-A-Za-z0-9_.${}]+)\s*(\+=|:=|\?=|!=|=)",
            Self::LicenseName => r"^_?LICENSE_(FILE|NAME|TEXT)(_([-._+A-Za-z0-9]+))?$",
            Self::PlistKeyword => r#"^"@[a-z]+\s+"#,
            Self::OptionsHelper => r"^([-_A-Z0-9]+)_(DESC|[A-Z_]+)(\.([A-Za-z0-9_]+))?$",
            Self::FlavorsHelper => r"^([-_a-z0-9]+)_([A-Za-z_]+)$",
            Self::ShebangLang => r"^([A-Za-z0-9_]+)_(CMD|OLD_CMD)$",
            Self::CabalDatadirVars => r"^([-_A-Za-z0-9]+)_DATADIR_VARS$",
            Self::OptionsGroup => r"^_?OPTIONS_(GROUP|MULTI|RADIO|SINGLE)_(.+)$",
            Self::InlineComment => r"^(.*\S)\s+#\s*(.*)$",
            Self::GitDescribeSuffix => r"^(.*?)-([0-9]+)-g([0-9a-f]+)$",
        }
    }

    fn compiled(self) -> &'static Re {
        static TABLE: Lazy<Vec<Re>> = Lazy::new(|| {
            ALL.iter()
                .map(|kind| {
                    Re::new(kind.pattern()).unwrap_or_else(|err| {
                        panic!("portfmt-core: failed to compile built-in regex {kind:?}: {err}")
                    })
                })
                .collect()
        });
        &TABLE[self as usize]
    }
}

const ALL: [Regex; 13] = [
    Regex::EmptyLine,
    Regex::ConditionalHead,
    Regex::TargetHead,
    Regex::VariableHead,
    Regex::LicenseName,
    Regex::PlistKeyword,
    Regex::OptionsHelper,
    Regex::FlavorsHelper,
    Regex::ShebangLang,
    Regex::CabalDatadirVars,
    Regex::OptionsGroup,
    Regex::InlineComment,
    Regex::GitDescribeSuffix,
];

/// Does `s` match the named pattern?
#[must_use]
pub fn matches(re: Regex, s: &str) -> bool { re.compiled().is_match(s) }

/// Replace the first match of the named pattern in `s` with `replacement`,
/// returning `s` unchanged (cloned) if there is no match.
#[must_use]
pub fn substitute(re: Regex, replacement: &str, s: &str) -> String {
    re.compiled().replacen(s, 1, replacement).into_owned()
}

#[cfg(test)]
mod tests {
    use super::{matches, substitute, Regex};

    #[test]
    fn test_all_patterns_compile() {
        for kind in super::ALL {
            let _ = kind.compiled();
        }
    }

    #[test]
    fn test_empty_line() {
        assert!(matches(Regex::EmptyLine, ""));
        assert!(matches(Regex::EmptyLine, "   \t"));
        assert!(!matches(Regex::EmptyLine, "PORTNAME=foo"));
    }

    #[test]
    fn test_variable_head() {
        assert!(matches(Regex::VariableHead, "PORTNAME=foo"));
        assert!(matches(Regex::VariableHead, "USES+=    cmake"));
        assert!(!matches(Regex::VariableHead, "\tinstall -d ${PREFIX}"));
    }

    #[test]
    fn test_substitute_no_match_returns_original() {
        assert_eq!(substitute(Regex::GitDescribeSuffix, "x", "1.0"), "1.0");
    }

    #[test]
    fn test_substitute_git_describe() {
        let out = substitute(Regex::GitDescribeSuffix, "$1", "1.2-4-gabcdef1");
        assert_eq!(out, "1.2");
    }
}
