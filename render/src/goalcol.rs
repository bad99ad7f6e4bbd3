use portfmt_core::{Token, VariableModifier};
use portfmt_edit::stream::VariableGroup;
use portfmt_rules::{indent_goalcol, skip_goalcol, RulesContext};

/// The shared goal column for a paragraph (spec.md §4.5): the maximum
/// `indent_goalcol` across the paragraph's variables that don't
/// `skip_goalcol`. A variable that does `skip_goalcol` uses its own value
/// instead, so it never stretches the rest of the paragraph out of line.
#[must_use]
pub fn paragraph_goalcol(tokens: &[Token], paragraph: &[VariableGroup], ctx: &dyn RulesContext) -> usize {
    paragraph
        .iter()
        .filter(|g| !skip_goalcol(&g.name, ctx))
        .filter_map(|g| tokens[g.start].variable.as_ref())
        .map(|v| indent_goalcol(&v.name, v.modifier))
        .max()
        .unwrap_or(8)
        .max(16)
}

/// This variable's effective goal column within its paragraph.
#[must_use]
pub fn variable_goalcol(name: &str, modifier: VariableModifier, paragraph_goalcol: usize, ctx: &dyn RulesContext) -> usize {
    if skip_goalcol(name, ctx) {
        indent_goalcol(name, modifier)
    } else {
        paragraph_goalcol
    }
}

/// Append tabs to `out` until its rendered column reaches `goalcol`, assuming
/// 8-column tab stops and that `out` currently ends at `start_col`.
pub fn pad_to_goalcol(out: &mut String, start_col: usize, goalcol: usize) {
    let mut col = start_col;
    loop {
        out.push('\t');
        col = (col / 8 + 1) * 8;
        if col >= goalcol {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{pad_to_goalcol, paragraph_goalcol};
    use portfmt_edit::stream::paragraphs;
    use portfmt_parser::tokenize;
    use portfmt_rules::FuzzyContext;

    #[test]
    fn test_paragraph_goalcol_floors_to_16() {
        let tokens = tokenize("X=foo\n").unwrap();
        let paras = paragraphs(&tokens);
        let goalcol = paragraph_goalcol(&tokens, &paras[0], &FuzzyContext);
        assert_eq!(goalcol, 16);
    }

    #[test]
    fn test_pad_to_goalcol_one_tab() {
        let mut out = String::from("PORTNAME=");
        let len = out.len();
        pad_to_goalcol(&mut out, len, 16);
        assert_eq!(out, "PORTNAME=\t");
    }

    #[test]
    fn test_pad_to_goalcol_multiple_tabs() {
        let mut out = String::from("X=");
        let len = out.len();
        pad_to_goalcol(&mut out, len, 16);
        assert_eq!(out, "X=\t\t");
    }
}
