use portfmt_rules::preserve_eol_comment;

/// The result of splitting a right-hand side (or conditional test, or target
/// command body) into whitespace-separated atoms.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RhsResult {
    pub atoms: Vec<String>,
    /// An inline `#`-comment that was *not* one of the preserved literal
    /// forms (`#`, `# empty`, `#none`, `# none`), demoted out of the token
    /// sequence per spec.md §4.2.
    pub demoted_comment: Option<String>,
}

/// Split `s` into atoms, honoring quoted strings (`"`, `'`, `` ` ``) and
/// balanced `${...}` groups as single atoms, and demoting a trailing
/// `#`-comment that isn't one of the preserved literal forms.
#[must_use]
pub fn tokenize_rhs(s: &str) -> RhsResult {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    let mut i = 0;
    let mut atoms = Vec::new();
    let mut demoted_comment = None;

    while i < n {
        while i < n && chars[i].is_whitespace() {
            i += 1;
        }
        if i >= n {
            break;
        }
        if chars[i] == '#' {
            let comment_text: String = chars[i..].iter().collect::<String>().trim_end().to_string();
            if preserve_eol_comment(&comment_text) {
                atoms.push(comment_text);
            } else {
                demoted_comment = Some(comment_text);
            }
            break;
        }

        let start = i;
        let mut brace_depth = 0i32;
        let mut quote: Option<char> = None;
        loop {
            if i >= n {
                break;
            }
            let c = chars[i];
            if let Some(q) = quote {
                if c == '\\' && i + 1 < n {
                    i += 2;
                    continue;
                }
                if c == q {
                    quote = None;
                }
                i += 1;
                continue;
            }
            match c {
                '"' | '\'' | '`' => {
                    quote = Some(c);
                    i += 1;
                }
                '$' if i + 1 < n && chars[i + 1] == '{' => {
                    brace_depth += 1;
                    i += 2;
                }
                '}' if brace_depth > 0 => {
                    brace_depth -= 1;
                    i += 1;
                }
                c if c.is_whitespace() && brace_depth == 0 => break,
                '#' if brace_depth == 0 => break,
                _ => i += 1,
            }
        }
        if i == start {
            i += 1;
            continue;
        }
        atoms.push(chars[start..i].iter().collect());
    }

    RhsResult { atoms, demoted_comment }
}

#[cfg(test)]
mod tests {
    use super::tokenize_rhs;

    #[test]
    fn test_plain_atoms() {
        let r = tokenize_rhs("cmake ninja:build");
        assert_eq!(r.atoms, vec!["cmake", "ninja:build"]);
        assert!(r.demoted_comment.is_none());
    }

    #[test]
    fn test_braced_group_stays_whole() {
        let r = tokenize_rhs("${PREFIX}/bin ${LOCALBASE}/lib");
        assert_eq!(r.atoms, vec!["${PREFIX}/bin", "${LOCALBASE}/lib"]);
    }

    #[test]
    fn test_nested_braces() {
        let r = tokenize_rhs("${VAR:S/${FOO}/bar/}");
        assert_eq!(r.atoms, vec!["${VAR:S/${FOO}/bar/}"]);
    }

    #[test]
    fn test_quoted_atom_with_space() {
        let r = tokenize_rhs(r#""hello world" next"#);
        assert_eq!(r.atoms, vec![r#""hello world""#, "next"]);
    }

    #[test]
    fn test_demoted_comment() {
        let r = tokenize_rhs("cmake ninja # build with ninja");
        assert_eq!(r.atoms, vec!["cmake", "ninja"]);
        assert_eq!(r.demoted_comment.as_deref(), Some("# build with ninja"));
    }

    #[test]
    fn test_preserved_comment_kept_as_atom() {
        let r = tokenize_rhs("#none");
        assert_eq!(r.atoms, vec!["#none"]);
        assert!(r.demoted_comment.is_none());
    }

    #[test]
    fn test_empty_rhs() {
        let r = tokenize_rhs("   ");
        assert!(r.atoms.is_empty());
    }
}
