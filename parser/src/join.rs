use portfmt_core::Range;

/// One logical line: the physical lines it was assembled from, and their
/// backslash-continuations joined into a single string (the trailing
/// backslash and newline of each continued line become a single space).
#[derive(Clone, Debug)]
pub struct LogicalLine {
    pub lines: Range,
    pub text: String,
}

/// Join backslash-continued physical lines into logical lines.
///
/// A line ending in a single `\` continues onto the next physical line
/// regardless of what kind of line it is; classification only ever sees the
/// already-joined text, so the per-physical-line "continued" state the
/// tokenizer would otherwise have to track collapses into this one pass.
#[must_use]
pub fn join_continuations(input: &str) -> Vec<LogicalLine> {
    let raw: Vec<&str> = input.lines().collect();
    let mut out = Vec::new();
    let mut i = 0;

    while i < raw.len() {
        let start = i + 1;
        let mut text = String::new();
        loop {
            let line = raw[i];
            if let Some(stripped) = line.strip_suffix('\\') {
                text.push_str(stripped);
                text.push(' ');
                i += 1;
                if i >= raw.len() {
                    break;
                }
            } else {
                text.push_str(line);
                i += 1;
                break;
            }
        }
        out.push(LogicalLine { lines: Range::new(start, i.max(start)), text });
    }

    out
}

#[cfg(test)]
mod tests {
    use super::join_continuations;

    #[test]
    fn test_no_continuation() {
        let lines = join_continuations("PORTNAME=\tfoo\nDISTVERSION=\t1.0\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "PORTNAME=\tfoo");
        assert_eq!(lines[1].text, "DISTVERSION=\t1.0");
    }

    #[test]
    fn test_continuation_joins() {
        let lines = join_continuations("USES=\tcmake \\\n\tninja\nPKGNAMEPREFIX=\tfoo\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "USES=\tcmake  \tninja");
        assert_eq!(lines[0].lines.start, 1);
        assert_eq!(lines[0].lines.end, 2);
    }

    #[test]
    fn test_trailing_continuation_without_following_line() {
        let lines = join_continuations("FOO=bar\\");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "FOO=bar ");
    }
}
