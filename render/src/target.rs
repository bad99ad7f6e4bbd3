/// Commands whose every word gets its own continuation line when wrapped
/// (spec.md §4.5 `target_command_wrap_after_each_token`).
const WRAP_AFTER_EACH_TOKEN: &[&str] = &["${INSTALL_DATA}", "${INSTALL_PROGRAM}", "${INSTALL_MAN}", "${SED}", "${REINPLACE_CMD}"];

/// Does `atoms[i]` end a natural command break (spec.md §4.5
/// `target_command_should_wrap`: `&&`, `||`, `then`, a trailing unquoted `;`,
/// or `|`)?
fn is_natural_break(atom: &str) -> bool {
    matches!(atom, "&&" | "||" | "then" | "|") || atom.ends_with(';')
}

/// Render one target command line's atoms, tab-indented, wrapping at
/// `wrapcol` on a natural break, or after every token for known commands.
#[must_use]
pub fn render_command(atoms: &[&str], wrapcol: usize) -> String {
    if atoms.is_empty() {
        return String::new();
    }

    let wrap_each = atoms.first().is_some_and(|a| WRAP_AFTER_EACH_TOKEN.contains(a));

    let mut out = String::from('\t');
    let mut col = 8;
    let mut at_line_start = true;
    for (i, atom) in atoms.iter().enumerate() {
        if i > 0 && !at_line_start {
            out.push(' ');
            col += 1;
        }
        at_line_start = false;
        out.push_str(atom);
        col += atom.len();

        let last = i + 1 == atoms.len();
        let should_break = !last && (wrap_each || (col > wrapcol && is_natural_break(atom)));
        if should_break {
            out.push_str(" \\\n\t\t");
            col = 16;
            at_line_start = true;
        }
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::render_command;

    #[test]
    fn test_render_simple_command() {
        assert_eq!(render_command(&["install", "-d", "${PREFIX}"], 74), "\tinstall -d ${PREFIX}\n");
    }

    #[test]
    fn test_render_wrap_after_each_for_known_command() {
        let out = render_command(&["${INSTALL_DATA}", "a", "b"], 74);
        assert_eq!(out, "\t${INSTALL_DATA} \\\n\t\ta \\\n\t\tb\n");
    }
}
