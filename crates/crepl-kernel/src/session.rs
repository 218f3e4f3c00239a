//! Session state: the preamble, accumulated globals, and history.
//!
//! The session is the only state that survives between submissions. Globals
//! are append-only until [`Session::reset`]; history is append-only for the
//! life of the session.

/// Headers included at the top of every compilation unit.
pub const DEFAULT_HEADERS: [&str; 4] = ["stdio.h", "stdlib.h", "string.h", "math.h"];

/// Accumulated state of one interactive session.
#[derive(Debug, Clone)]
pub struct Session {
    /// `#include` directives, fixed at construction.
    preamble: Vec<String>,
    /// Accepted declarations, each ending in a newline, in submission order.
    globals: Vec<String>,
    /// Every submitted fragment, accepted or not.
    history: Vec<String>,
}

impl Session {
    /// Create a session including the default headers.
    pub fn new() -> Self {
        Self::with_headers(DEFAULT_HEADERS)
    }

    /// Create a session including the given headers, in order.
    pub fn with_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let preamble = headers
            .into_iter()
            .map(|h| format!("#include <{}>", h.as_ref()))
            .collect();
        Self {
            preamble,
            globals: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Append a declaration to the globals.
    pub fn record_declaration(&mut self, fragment: &str) {
        let mut decl = String::with_capacity(fragment.len() + 1);
        decl.push_str(fragment);
        decl.push('\n');
        self.globals.push(decl);
    }

    /// Drop all globals. History and preamble are kept.
    pub fn reset(&mut self) {
        self.globals.clear();
    }

    /// The globals concatenated in insertion order.
    pub fn snapshot_globals(&self) -> String {
        self.globals.concat()
    }

    /// Append a fragment to the history.
    pub fn record_history(&mut self, fragment: &str) {
        self.history.push(fragment.to_string());
    }

    /// All submitted fragments, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Accepted declarations, oldest first.
    pub fn globals(&self) -> &[String] {
        &self.globals
    }

    /// The `#include` directives.
    pub fn preamble(&self) -> &[String] {
        &self.preamble
    }

    /// The preamble as source text: one directive per line, then a blank line.
    pub fn render_preamble(&self) -> String {
        let mut out = String::new();
        for directive in &self.preamble {
            out.push_str(directive);
            out.push('\n');
        }
        out.push('\n');
        out
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
