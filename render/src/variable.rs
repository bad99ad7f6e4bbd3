use portfmt_core::Variable;
use portfmt_rules::{ignore_wrap_col, print_as_newlines, RulesContext};

use crate::goalcol::{pad_to_goalcol, variable_goalcol};

/// Render one `VARIABLE_START`/`VARIABLE_TOKEN*`/`VARIABLE_END` group
/// (spec.md §4.5). `paragraph_goalcol` is the shared column this variable's
/// paragraph aligns to.
#[must_use]
pub fn render_variable(
    variable: &Variable,
    atoms: &[&str],
    paragraph_goalcol: usize,
    wrapcol: usize,
    ctx: &dyn RulesContext,
) -> String {
    let head = format!("{}{}", variable.name, variable.modifier);
    let goalcol = variable_goalcol(&variable.name, variable.modifier, paragraph_goalcol, ctx);

    if atoms.len() <= 1 {
        return render_bare(&head, atoms.first().copied(), goalcol);
    }

    if print_as_newlines(&variable.name, ctx) {
        return render_newlines(&head, atoms, goalcol);
    }

    render_packed(&head, atoms, goalcol, wrapcol, ignore_wrap_col(&variable.name, ctx))
}

fn render_bare(head: &str, atom: Option<&str>, goalcol: usize) -> String {
    let mut out = String::from(head);
    match atom {
        None => out.push('\n'),
        Some(a) => {
            let len = out.len();
            pad_to_goalcol(&mut out, len, goalcol);
            out.push_str(a);
            out.push('\n');
        }
    }
    out
}

fn render_newlines(head: &str, atoms: &[&str], goalcol: usize) -> String {
    let mut indent = String::new();
    pad_to_goalcol(&mut indent, 0, goalcol);

    let mut out = String::from(head);
    pad_to_goalcol(&mut out, head.len(), goalcol);

    for (i, atom) in atoms.iter().enumerate() {
        if i > 0 {
            out.push_str(&indent);
        }
        out.push_str(atom);
        if i + 1 < atoms.len() {
            out.push_str(" \\\n");
        } else {
            out.push('\n');
        }
    }
    out
}

fn render_packed(head: &str, atoms: &[&str], goalcol: usize, wrapcol: usize, ignore_wrap: bool) -> String {
    let mut out = String::from(head);
    let len = out.len();
    pad_to_goalcol(&mut out, len, goalcol);

    let limit = wrapcol.saturating_sub(goalcol).max(1);
    let mut line_len = 0usize;

    for (i, atom) in atoms.iter().enumerate() {
        let sep_len = usize::from(i > 0);
        if !ignore_wrap && i > 0 && line_len + sep_len + atom.len() > limit {
            out.push_str(" \\\n");
            pad_to_goalcol(&mut out, 0, goalcol);
            line_len = 0;
        } else if i > 0 {
            out.push(' ');
            line_len += 1;
        }
        out.push_str(atom);
        line_len += atom.len();
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::render_variable;
    use portfmt_core::{Variable, VariableModifier};
    use portfmt_rules::FuzzyContext;

    #[test]
    fn test_render_single_atom_s2() {
        let v = Variable::new("PORTNAME", VariableModifier::Assign);
        let out = render_variable(&v, &["foo"], 16, 80, &FuzzyContext);
        assert_eq!(out, "PORTNAME=\tfoo\n");
    }

    #[test]
    fn test_render_empty_bare() {
        let v = Variable::new("COMMENT", VariableModifier::Assign);
        let out = render_variable(&v, &[], 16, 80, &FuzzyContext);
        assert_eq!(out, "COMMENT=\n");
    }

    #[test]
    fn test_render_packed_multi_atom() {
        let v = Variable::new("USES", VariableModifier::Assign);
        let out = render_variable(&v, &["cmake", "gmake"], 8, 80, &FuzzyContext);
        assert_eq!(out, "USES=\tcmake gmake\n");
    }
}
