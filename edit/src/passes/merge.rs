use portfmt_core::{Token, TokenKind, VariableModifier};
use portfmt_rules::{should_sort, RulesContext};

use super::{insert_variable::insert_variable, sort_tokens::sort_tokens};
use crate::stream::{collect_variable_groups, delete_variable, find_variable_group, VariableGroup};

/// Options gating `merge`'s treatment of `MODIFIER_OPTIONAL`/`MODIFIER_SHELL`
/// overlay variables (spec.md §4.4, §9 open question: unified into a single
/// predicate here rather than checked twice as in the source design).
#[derive(Clone, Copy, Debug, Default)]
pub struct MergeOptions {
    pub shell_is_delete: bool,
    pub optional_like_assign: bool,
    pub merge_comments: bool,
}

/// Fold each `ASSIGN`/`APPEND` (and, per `opts`, `OPTIONAL`/`SHELL`) variable
/// of `overlay` into `primary` (spec.md §4.4).
pub fn merge(primary: &mut Vec<Token>, overlay: &[Token], ctx: &dyn RulesContext, opts: &MergeOptions) {
    let groups = collect_variable_groups(overlay);
    let comments = leading_comments(overlay, &groups);

    for (group, comments) in groups.into_iter().zip(comments) {
        let Some(modifier) = overlay[group.start].variable.as_ref().map(|v| v.modifier) else { continue };
        let values: Vec<String> =
            overlay[group.token_start..group.token_end].iter().filter_map(|t| t.data.clone()).collect();

        let deleted = match modifier {
            VariableModifier::Assign | VariableModifier::Expand => {
                merge_assign(primary, &group.name, modifier, values, ctx);
                false
            }
            VariableModifier::Append => {
                merge_append(primary, &group.name, values, ctx);
                false
            }
            VariableModifier::Optional => {
                if opts.optional_like_assign {
                    merge_assign(primary, &group.name, modifier, values, ctx);
                }
                false
            }
            VariableModifier::Shell => {
                if opts.shell_is_delete {
                    delete_variable(primary, &group.name);
                    true
                } else {
                    merge_assign(primary, &group.name, modifier, values, ctx);
                    false
                }
            }
        };

        if opts.merge_comments && !deleted {
            attach_comments(primary, &group.name, &comments);
        }
    }
}

/// For each overlay group, the text of `COMMENT` tokens found between the
/// previous group's end and this group's start (spec.md §4.4: "inline
/// comments between overlay variables attach to the next merged variable").
fn leading_comments(overlay: &[Token], groups: &[VariableGroup]) -> Vec<Vec<String>> {
    let mut out = Vec::with_capacity(groups.len());
    let mut prev_end = 0;
    for group in groups {
        let run = overlay[prev_end..group.start]
            .iter()
            .filter(|t| t.kind == TokenKind::Comment)
            .filter_map(|t| t.data.clone())
            .collect();
        out.push(run);
        prev_end = group.end + 1;
    }
    out
}

/// Insert `comments` as `COMMENT` tokens immediately before `name`'s
/// `VARIABLE_START` in `primary`, in their original order.
fn attach_comments(primary: &mut Vec<Token>, name: &str, comments: &[String]) {
    if comments.is_empty() {
        return;
    }
    if let Some(group) = find_variable_group(primary, name) {
        let line = primary[group.start].lines;
        for (k, comment) in comments.iter().enumerate() {
            primary.insert(group.start + k, Token::comment(line, comment.clone()));
        }
    }
}

fn merge_assign(
    primary: &mut Vec<Token>,
    name: &str,
    modifier: VariableModifier,
    values: Vec<String>,
    ctx: &dyn RulesContext,
) {
    if let Some(existing) = find_variable_group(primary, name) {
        let line = primary[existing.start].lines;
        let variable = primary[existing.start].variable.clone().unwrap();
        let new_tokens: Vec<Token> =
            values.into_iter().map(|v| Token::variable_token(line, std::rc::Rc::clone(&variable), v)).collect();
        primary.splice(existing.token_start..existing.token_end, new_tokens);
    } else {
        insert_variable(primary, name, modifier, values, ctx);
    }
}

fn merge_append(primary: &mut Vec<Token>, name: &str, values: Vec<String>, ctx: &dyn RulesContext) {
    if let Some(existing) = find_variable_group(primary, name) {
        let line = primary[existing.start].lines;
        let variable = primary[existing.start].variable.clone().unwrap();
        let insert_at = existing.token_end;
        let new_tokens: Vec<Token> =
            values.into_iter().map(|v| Token::variable_token(line, std::rc::Rc::clone(&variable), v)).collect();
        for (k, tok) in new_tokens.into_iter().enumerate() {
            primary.insert(insert_at + k, tok);
        }
        if should_sort(name, ctx) {
            sort_tokens(primary, ctx);
        }
    } else {
        insert_variable(primary, name, VariableModifier::Append, values, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::{merge, MergeOptions};
    use crate::stream::collect_variable_groups;
    use portfmt_parser::tokenize;
    use portfmt_rules::FuzzyContext;

    #[test]
    fn test_merge_assign_replaces_value() {
        let mut primary = tokenize("PORTNAME=foo\n").unwrap();
        let overlay = tokenize("PORTNAME=bar\n").unwrap();
        merge(&mut primary, &overlay, &FuzzyContext, &MergeOptions::default());
        let data: Vec<_> = primary.iter().filter_map(|t| t.data.as_deref()).collect();
        assert_eq!(data, vec!["bar"]);
    }

    #[test]
    fn test_merge_append_adds_values() {
        let mut primary = tokenize("USES=\tcmake\n").unwrap();
        let overlay = tokenize("USES+=\tninja\n").unwrap();
        merge(&mut primary, &overlay, &FuzzyContext, &MergeOptions::default());
        let data: Vec<_> = primary.iter().filter_map(|t| t.data.as_deref()).collect();
        assert_eq!(data, vec!["cmake", "ninja"]);
    }

    #[test]
    fn test_merge_inserts_absent_variable() {
        let mut primary = tokenize("PORTNAME=foo\n").unwrap();
        let overlay = tokenize("DISTVERSION=1.0\n").unwrap();
        merge(&mut primary, &overlay, &FuzzyContext, &MergeOptions::default());
        let groups = collect_variable_groups(&primary);
        let names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["PORTNAME", "DISTVERSION"]);
    }

    #[test]
    fn test_merge_shell_is_delete() {
        let mut primary = tokenize("PORTNAME=foo\nOBSOLETE=yes\n").unwrap();
        let overlay = tokenize("OBSOLETE!=echo\n").unwrap();
        merge(
            &mut primary,
            &overlay,
            &FuzzyContext,
            &MergeOptions { shell_is_delete: true, ..MergeOptions::default() },
        );
        let groups = collect_variable_groups(&primary);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "PORTNAME");
    }

    #[test]
    fn test_merge_associativity_on_disjoint_keys() {
        let a = tokenize("PORTNAME=foo\n").unwrap();
        let b = tokenize("DISTVERSION=1.0\n").unwrap();
        let c = tokenize("MAINTAINER=x@y\n").unwrap();

        let mut left = a.clone();
        merge(&mut left, &b, &FuzzyContext, &MergeOptions::default());
        merge(&mut left, &c, &FuzzyContext, &MergeOptions::default());

        let mut bc = b;
        merge(&mut bc, &c, &FuzzyContext, &MergeOptions::default());
        let mut right = a;
        merge(&mut right, &bc, &FuzzyContext, &MergeOptions::default());

        let left_names: Vec<_> = collect_variable_groups(&left).iter().map(|g| g.name.clone()).collect();
        let right_names: Vec<_> = collect_variable_groups(&right).iter().map(|g| g.name.clone()).collect();
        assert_eq!(left_names, right_names);
    }

    #[test]
    fn test_merge_comments_attach_to_next_variable() {
        let mut primary = tokenize("PORTNAME=foo\n").unwrap();
        let overlay = tokenize("# bump version\nDISTVERSION=1.0\n").unwrap();
        merge(&mut primary, &overlay, &FuzzyContext, &MergeOptions { merge_comments: true, ..MergeOptions::default() });

        use portfmt_core::TokenKind;
        let comment_before_distversion = primary.windows(2).any(|w| {
            w[0].kind == TokenKind::Comment
                && w[0].data.as_deref() == Some("# bump version")
                && w[1].kind == TokenKind::VariableStart
                && w[1].variable.as_ref().is_some_and(|v| v.name == "DISTVERSION")
        });
        assert!(comment_before_distversion);
    }

    #[test]
    fn test_merge_comments_off_by_default() {
        let mut primary = tokenize("PORTNAME=foo\n").unwrap();
        let overlay = tokenize("# bump version\nDISTVERSION=1.0\n").unwrap();
        merge(&mut primary, &overlay, &FuzzyContext, &MergeOptions::default());

        use portfmt_core::TokenKind;
        assert!(!primary.iter().any(|t| t.kind == TokenKind::Comment));
    }
}
