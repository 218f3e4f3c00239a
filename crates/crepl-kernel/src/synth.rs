//! Source synthesis: turn a classified fragment into a whole C program.

use crate::classify::Classification;
use crate::session::Session;

/// `printf` format used to print the value of an expression.
pub const EXPRESSION_FORMAT: &str = r#"Result: %g\n"#;

/// A complete, self-contained C translation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit(String);

impl CompilationUnit {
    /// The source text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Build the unit for a fragment.
///
/// Returns `None` for declarations: they go into the session, not the compiler.
pub fn synthesize(
    preamble: &str,
    globals: &str,
    classification: Classification,
    fragment: &str,
) -> Option<CompilationUnit> {
    let body = match classification {
        Classification::Declaration => return None,
        Classification::Expression => {
            format!("printf(\"{EXPRESSION_FORMAT}\", (double)({fragment}));")
        }
        Classification::Statement => fragment.to_string(),
    };

    let mut src = String::with_capacity(preamble.len() + globals.len() + body.len() + 48);
    src.push_str(preamble);
    src.push_str(globals);
    src.push_str("int main() {\n    ");
    src.push_str(&body);
    src.push_str("\n    return 0;\n}\n");
    Some(CompilationUnit(src))
}

/// Build the unit for a fragment against a session's preamble and globals.
pub fn synthesize_for(
    session: &Session,
    classification: Classification,
    fragment: &str,
) -> Option<CompilationUnit> {
    synthesize(
        &session.render_preamble(),
        &session.snapshot_globals(),
        classification,
        fragment,
    )
}
