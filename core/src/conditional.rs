use std::fmt;

/// The closed set of recognized `bmake` conditional/directive keywords.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ConditionalKind {
    If,
    Ifdef,
    Ifndef,
    Ifmake,
    Ifnmake,
    Else,
    Elif,
    Elifdef,
    Elifndef,
    Elifmake,
    Endif,
    For,
    Endfor,
    Include,
    IncludePosix,
    Sinclude,
    Error,
    Warning,
    Info,
    Export,
    ExportEnv,
    ExportLiteral,
    Unexport,
    UnexportEnv,
    Undef,
}

impl ConditionalKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::If => ".if",
            Self::Ifdef => ".ifdef",
            Self::Ifndef => ".ifndef",
            Self::Ifmake => ".ifmake",
            Self::Ifnmake => ".ifnmake",
            Self::Else => ".else",
            Self::Elif => ".elif",
            Self::Elifdef => ".elifdef",
            Self::Elifndef => ".elifndef",
            Self::Elifmake => ".elifmake",
            Self::Endif => ".endif",
            Self::For => ".for",
            Self::Endfor => ".endfor",
            Self::Include => ".include",
            Self::IncludePosix => "include",
            Self::Sinclude => ".sinclude",
            Self::Error => ".error",
            Self::Warning => ".warning",
            Self::Info => ".info",
            Self::Export => ".export",
            Self::ExportEnv => ".export-env",
            Self::ExportLiteral => ".export-literal",
            Self::Unexport => ".unexport",
            Self::UnexportEnv => ".unexport-env",
            Self::Undef => ".undef",
        }
    }

    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        Some(match s {
            ".if" => Self::If,
            ".ifdef" => Self::Ifdef,
            ".ifndef" => Self::Ifndef,
            ".ifmake" => Self::Ifmake,
            ".ifnmake" => Self::Ifnmake,
            ".else" => Self::Else,
            ".elif" => Self::Elif,
            ".elifdef" => Self::Elifdef,
            ".elifndef" => Self::Elifndef,
            ".elifmake" => Self::Elifmake,
            ".endif" => Self::Endif,
            ".for" => Self::For,
            ".endfor" => Self::Endfor,
            ".include" => Self::Include,
            "include" => Self::IncludePosix,
            ".sinclude" => Self::Sinclude,
            ".error" => Self::Error,
            ".warning" => Self::Warning,
            ".info" => Self::Info,
            ".export" => Self::Export,
            ".export-env" => Self::ExportEnv,
            ".export-literal" => Self::ExportLiteral,
            ".unexport" => Self::Unexport,
            ".unexport-env" => Self::UnexportEnv,
            ".undef" => Self::Undef,
            _ => return None,
        })
    }

    /// Whether this directive opens a block that must eventually balance with
    /// a matching closer (`.endif`/`.endfor`).
    #[must_use]
    pub const fn opens_block(self) -> bool {
        matches!(self, Self::If | Self::Ifdef | Self::Ifndef | Self::Ifmake | Self::Ifnmake | Self::For)
    }

    #[must_use]
    pub const fn closes_block(self) -> bool { matches!(self, Self::Endif | Self::Endfor) }

    /// Every recognized directive keyword, for the tokenizer's
    /// longest-prefix-match classification.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::If,
            Self::Ifdef,
            Self::Ifndef,
            Self::Ifmake,
            Self::Ifnmake,
            Self::Else,
            Self::Elif,
            Self::Elifdef,
            Self::Elifndef,
            Self::Elifmake,
            Self::Endif,
            Self::For,
            Self::Endfor,
            Self::Include,
            Self::IncludePosix,
            Self::Sinclude,
            Self::Error,
            Self::Warning,
            Self::Info,
            Self::Export,
            Self::ExportEnv,
            Self::ExportLiteral,
            Self::Unexport,
            Self::UnexportEnv,
            Self::Undef,
        ]
    }
}

impl fmt::Display for ConditionalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}

/// Identity of a conditional directive occupying one logical line.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Conditional {
    pub kind: ConditionalKind,
}

impl Conditional {
    #[must_use]
    pub const fn new(kind: ConditionalKind) -> Self { Self { kind } }
}

#[cfg(test)]
mod tests {
    use super::ConditionalKind;

    #[test]
    fn test_roundtrip() {
        for kind in [
            ConditionalKind::If,
            ConditionalKind::Elifndef,
            ConditionalKind::Endfor,
            ConditionalKind::IncludePosix,
            ConditionalKind::ExportLiteral,
        ] {
            assert_eq!(ConditionalKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_unknown() { assert_eq!(ConditionalKind::from_str(".bogus"), None); }
}
