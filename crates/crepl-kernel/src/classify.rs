//! Fragment classification.
//!
//! A fragment is sorted into one of three roles by a cheap textual heuristic,
//! never by parsing:
//!
//! | Role | Rule |
//! |------|------|
//! | Declaration | starts with a type keyword and a space, contains `{` or `;` |
//! | Expression | contains `+ - * / %`, no `;`, no `(` |
//! | Statement | anything else |
//!
//! Rules are tried top to bottom and the first match wins. The expression rule
//! rejects anything with a `(`, so `add(5, 3)` or `(1 + 2) * 3` run as
//! statements rather than printing a value.

use std::fmt;

/// Type keywords that open a top-level declaration.
pub const TYPE_KEYWORDS: [&str; 8] = [
    "int", "float", "double", "char", "void", "long", "short", "unsigned",
];

/// Operators that mark a bare arithmetic expression.
pub const ARITHMETIC_OPERATORS: [char; 5] = ['+', '-', '*', '/', '%'];

/// The syntactic role of a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// A global type, variable, or function definition.
    Declaration,
    /// A bare arithmetic expression whose value is printed.
    Expression,
    /// Code executed inside `main`.
    Statement,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Classification::Declaration => "declaration",
            Classification::Expression => "expression",
            Classification::Statement => "statement",
        };
        f.write_str(name)
    }
}

/// Classify a fragment. Total: every input gets exactly one role.
pub fn classify(fragment: &str) -> Classification {
    if is_declaration(fragment) {
        Classification::Declaration
    } else if is_expression(fragment) {
        Classification::Expression
    } else {
        Classification::Statement
    }
}

/// True if the fragment opens with a type keyword and is terminated or has a body.
pub fn is_declaration(fragment: &str) -> bool {
    let trimmed = fragment.trim();
    let typed = TYPE_KEYWORDS.iter().any(|kw| {
        trimmed
            .strip_prefix(kw)
            .is_some_and(|rest| rest.starts_with(' '))
    });
    typed && (trimmed.contains('{') || trimmed.contains(';'))
}

/// True if the fragment looks like arithmetic with no terminator and no call.
pub fn is_expression(fragment: &str) -> bool {
    fragment.contains(ARITHMETIC_OPERATORS)
        && !fragment.contains(';')
        && !fragment.contains('(')
}
