use std::rc::Rc;

use crate::{Conditional, Range, Target, Variable};

/// The tagged kind of one atom in the token stream (spec.md §3).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    VariableStart,
    VariableToken,
    VariableEnd,
    TargetStart,
    TargetCommandStart,
    TargetCommandToken,
    TargetCommandEnd,
    TargetEnd,
    ConditionalStart,
    ConditionalToken,
    ConditionalEnd,
    Comment,
    PortMk,
    PortOptionsMk,
    PortPreMk,
    PortPostMk,
}

/// One atom of the token stream.
///
/// `VARIABLE_START`/`VARIABLE_END` pairs wrap zero or more `VARIABLE_TOKEN`s
/// sharing one `variable` identity; `TARGET_START`/`TARGET_END` likewise wrap
/// `TARGET_COMMAND_START`…`TARGET_COMMAND_END` groups; `CONDITIONAL_START`/`CONDITIONAL_END`
/// bracket a single `CONDITIONAL_TOKEN`.
#[derive(Clone, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub lines: Range,
    pub data: Option<String>,
    pub variable: Option<Rc<Variable>>,
    pub conditional: Option<Rc<Conditional>>,
    pub target: Option<Rc<Target>>,
    pub edited: bool,
    pub garbage: bool,
}

impl Token {
    fn bare(kind: TokenKind, lines: Range) -> Self {
        Self {
            kind,
            lines,
            data: None,
            variable: None,
            conditional: None,
            target: None,
            edited: false,
            garbage: false,
        }
    }

    #[must_use]
    pub fn variable_start(lines: Range, variable: Rc<Variable>) -> Self {
        Self { variable: Some(variable), ..Self::bare(TokenKind::VariableStart, lines) }
    }

    #[must_use]
    pub fn variable_token(lines: Range, variable: Rc<Variable>, data: impl Into<String>) -> Self {
        Self {
            variable: Some(variable),
            data: Some(data.into()),
            ..Self::bare(TokenKind::VariableToken, lines)
        }
    }

    #[must_use]
    pub fn variable_end(lines: Range, variable: Rc<Variable>) -> Self {
        Self { variable: Some(variable), ..Self::bare(TokenKind::VariableEnd, lines) }
    }

    #[must_use]
    pub fn target_start(lines: Range, target: Rc<Target>) -> Self {
        Self { target: Some(target), ..Self::bare(TokenKind::TargetStart, lines) }
    }

    #[must_use]
    pub fn target_command_start(lines: Range, target: Rc<Target>) -> Self {
        Self { target: Some(target), ..Self::bare(TokenKind::TargetCommandStart, lines) }
    }

    #[must_use]
    pub fn target_command_token(
        lines: Range,
        target: Rc<Target>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            target: Some(target),
            data: Some(data.into()),
            ..Self::bare(TokenKind::TargetCommandToken, lines)
        }
    }

    #[must_use]
    pub fn target_command_end(lines: Range, target: Rc<Target>) -> Self {
        Self { target: Some(target), ..Self::bare(TokenKind::TargetCommandEnd, lines) }
    }

    #[must_use]
    pub fn target_end(lines: Range, target: Rc<Target>) -> Self {
        Self { target: Some(target), ..Self::bare(TokenKind::TargetEnd, lines) }
    }

    #[must_use]
    pub fn conditional_start(lines: Range, conditional: Rc<Conditional>) -> Self {
        Self { conditional: Some(conditional), ..Self::bare(TokenKind::ConditionalStart, lines) }
    }

    #[must_use]
    pub fn conditional_token(
        lines: Range,
        conditional: Rc<Conditional>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            conditional: Some(conditional),
            data: Some(data.into()),
            ..Self::bare(TokenKind::ConditionalToken, lines)
        }
    }

    #[must_use]
    pub fn conditional_end(lines: Range, conditional: Rc<Conditional>) -> Self {
        Self { conditional: Some(conditional), ..Self::bare(TokenKind::ConditionalEnd, lines) }
    }

    #[must_use]
    pub fn comment(lines: Range, data: impl Into<String>) -> Self {
        Self { data: Some(data.into()), ..Self::bare(TokenKind::Comment, lines) }
    }

    #[must_use]
    pub fn include_marker(kind: TokenKind, lines: Range) -> Self {
        debug_assert!(matches!(
            kind,
            TokenKind::PortMk | TokenKind::PortOptionsMk | TokenKind::PortPreMk | TokenKind::PortPostMk
        ));
        Self::bare(kind, lines)
    }

    #[must_use]
    pub fn with_edited(mut self, edited: bool) -> Self {
        self.edited = edited;
        self
    }

    #[must_use]
    pub const fn is_variable(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::VariableStart | TokenKind::VariableToken | TokenKind::VariableEnd
        )
    }

    #[must_use]
    pub const fn is_target(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::TargetStart
                | TokenKind::TargetCommandStart
                | TokenKind::TargetCommandToken
                | TokenKind::TargetCommandEnd
                | TokenKind::TargetEnd
        )
    }

    #[must_use]
    pub const fn is_conditional(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::ConditionalStart | TokenKind::ConditionalToken | TokenKind::ConditionalEnd
        )
    }

    /// Mark this token for physical removal at the next garbage-compaction boundary.
    pub fn mark_garbage(&mut self) { self.garbage = true; }
}

#[cfg(test)]
mod tests {
    use super::{Token, TokenKind};
    use crate::{Range, Variable, VariableModifier};
    use std::rc::Rc;

    #[test]
    fn test_variable_group_shares_identity() {
        let var = Rc::new(Variable::new("USES", VariableModifier::Append));
        let start = Token::variable_start(Range::single(1), Rc::clone(&var));
        let tok = Token::variable_token(Range::single(1), Rc::clone(&var), "cmake");
        let end = Token::variable_end(Range::single(1), Rc::clone(&var));

        assert!(Rc::ptr_eq(start.variable.as_ref().unwrap(), tok.variable.as_ref().unwrap()));
        assert!(Rc::ptr_eq(tok.variable.as_ref().unwrap(), end.variable.as_ref().unwrap()));
        assert_eq!(start.kind, TokenKind::VariableStart);
        assert_eq!(end.kind, TokenKind::VariableEnd);
    }

    #[test]
    fn test_mark_garbage() {
        let var = Rc::new(Variable::new("FOO", VariableModifier::Assign));
        let mut tok = Token::variable_token(Range::single(1), var, "bar");
        assert!(!tok.garbage);
        tok.mark_garbage();
        assert!(tok.garbage);
    }
}
