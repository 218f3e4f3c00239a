//! REPL commands, checked before any input reaches the kernel.

/// A built-in command word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `exit` or `quit`
    Exit,
    /// `help`
    Help,
    /// `clear`: drop all global code
    Clear,
    /// `show`: print the global code
    Show,
    /// `history`: list submitted fragments
    History,
}

impl Command {
    /// Match trimmed input exactly. Anything else is a fragment.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "exit" | "quit" => Some(Command::Exit),
            "help" => Some(Command::Help),
            "clear" => Some(Command::Clear),
            "show" => Some(Command::Show),
            "history" => Some(Command::History),
            _ => None,
        }
    }
}
