use std::collections::HashMap;

use portfmt_core::{Token, TokenKind};
use portfmt_edit::stream::paragraphs;
use portfmt_parser::ParserSettings;
use portfmt_rules::RulesContext;

use crate::goalcol::paragraph_goalcol;
use crate::target::render_command;
use crate::variable::render_variable;

/// Serialize `tokens` back to formatted text (spec.md §4.5). Emits tokens in
/// order; comments and conditional tokens render verbatim, variables align to
/// their paragraph's goal column, and target command lines wrap per
/// `settings.target_command_wrapcol`.
#[must_use]
pub fn render(tokens: &[Token], settings: &ParserSettings, ctx: &dyn RulesContext) -> String {
    let goalcols: HashMap<usize, usize> = paragraphs(tokens)
        .iter()
        .flat_map(|para| {
            let goalcol = paragraph_goalcol(tokens, para, ctx);
            para.iter().map(move |g| (g.start, goalcol))
        })
        .collect();

    let mut out = String::new();
    let mut i = 0;
    while i < tokens.len() {
        match tokens[i].kind {
            TokenKind::Comment => {
                if let Some(data) = &tokens[i].data {
                    out.push_str(data);
                    out.push('\n');
                }
                i += 1;
            }

            TokenKind::VariableStart => {
                let variable = tokens[i].variable.clone().expect("VariableStart carries a variable");
                let mut j = i + 1;
                let mut atoms = Vec::new();
                while tokens[j].kind == TokenKind::VariableToken {
                    if let Some(data) = &tokens[j].data {
                        atoms.push(data.as_str());
                    }
                    j += 1;
                }
                let goalcol = goalcols.get(&i).copied().unwrap_or(8);
                out.push_str(&render_variable(&variable, &atoms, goalcol, settings.wrapcol, ctx));
                i = j + 1;
            }

            TokenKind::ConditionalStart => {
                let conditional = tokens[i].conditional.clone().expect("ConditionalStart carries a conditional");
                let mut j = i + 1;
                let mut atoms = Vec::new();
                while tokens[j].kind == TokenKind::ConditionalToken {
                    if let Some(data) = &tokens[j].data {
                        atoms.push(data.as_str());
                    }
                    j += 1;
                }
                out.push_str(conditional.kind.as_str());
                if !atoms.is_empty() {
                    out.push(' ');
                    out.push_str(&atoms.join(" "));
                }
                out.push('\n');
                i = j + 1;
            }

            TokenKind::PortMk => {
                out.push_str(".include <bsd.port.mk>\n");
                i += 1;
            }
            TokenKind::PortOptionsMk => {
                out.push_str(".include <bsd.port.options.mk>\n");
                i += 1;
            }
            TokenKind::PortPreMk => {
                out.push_str(".include <bsd.port.pre.mk>\n");
                i += 1;
            }
            TokenKind::PortPostMk => {
                out.push_str(".include <bsd.port.post.mk>\n");
                i += 1;
            }

            TokenKind::TargetStart => {
                let target = tokens[i].target.clone().expect("TargetStart carries a target");
                out.push_str(&target.names.join(" "));
                out.push(':');
                for dep in &target.dependencies {
                    out.push(' ');
                    out.push_str(dep);
                }
                out.push('\n');
                i += 1;
            }

            TokenKind::TargetCommandStart => {
                let mut j = i + 1;
                let mut atoms = Vec::new();
                while tokens[j].kind == TokenKind::TargetCommandToken {
                    if let Some(data) = &tokens[j].data {
                        atoms.push(data.as_str());
                    }
                    j += 1;
                }
                out.push_str(&render_command(&atoms, settings.target_command_wrapcol));
                i = j + 1;
            }

            TokenKind::VariableEnd
            | TokenKind::ConditionalEnd
            | TokenKind::TargetEnd
            | TokenKind::TargetCommandEnd
            | TokenKind::VariableToken
            | TokenKind::ConditionalToken
            | TokenKind::TargetCommandToken => {
                i += 1;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::render;
    use portfmt_parser::{tokenize, ParserSettings};
    use portfmt_rules::FuzzyContext;

    #[test]
    fn test_render_sort_simple_s1() {
        let mut tokens = tokenize("USES=  gmake cmake\n").unwrap();
        portfmt_edit::passes::sort_tokens(&mut tokens, &FuzzyContext);
        let out = render(&tokens, &ParserSettings::default(), &FuzzyContext);
        assert_eq!(out, "USES=\t\tcmake gmake\n");
    }

    #[test]
    fn test_render_goalcol_paragraph_s2() {
        let tokens = tokenize("PORTNAME=foo\nDISTVERSION=1.0\nMAINTAINER=a@b\n").unwrap();
        let out = render(&tokens, &ParserSettings::default(), &FuzzyContext);
        assert_eq!(out, "PORTNAME=\tfoo\nDISTVERSION=\t1.0\nMAINTAINER=\ta@b\n");
    }

    #[test]
    fn test_render_conditional_and_target() {
        let tokens = tokenize(".if defined(X)\nall:\n\techo hi\n.endif\n").unwrap();
        let out = render(&tokens, &ParserSettings::default(), &FuzzyContext);
        assert_eq!(out, ".if defined(X)\nall:\n\techo hi\n.endif\n");
    }

    #[test]
    fn test_render_print_as_newlines_s3() {
        let tokens = tokenize("GH_TUPLE=\tuser1:repo1:tag1:group1 user2:repo2:tag2:group2\n").unwrap();
        let out = render(&tokens, &ParserSettings::default(), &FuzzyContext);
        assert_eq!(out, "GH_TUPLE=\tuser1:repo1:tag1:group1 \\\n\t\tuser2:repo2:tag2:group2\n");
    }

    #[test]
    fn test_render_set_version_s6() {
        let mut tokens = tokenize("DISTVERSION=\t1.0\nPORTREVISION=\t3\n").unwrap();
        portfmt_edit::passes::set_version(&mut tokens, "2.0", &FuzzyContext).unwrap();
        let out = render(&tokens, &ParserSettings::default(), &FuzzyContext);
        assert_eq!(out, "DISTVERSION=\t2.0\n");
    }

    #[test]
    fn test_render_idempotent() {
        let tokens = tokenize("PORTNAME=foo\nUSES=\tcmake\n.include <bsd.port.mk>\n").unwrap();
        let once = render(&tokens, &ParserSettings::default(), &FuzzyContext);
        let retokenized = tokenize(&once).unwrap();
        let twice = render(&retokenized, &ParserSettings::default(), &FuzzyContext);
        assert_eq!(once, twice);
    }
}
