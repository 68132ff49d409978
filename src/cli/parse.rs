//! Line parsing for the command dispatcher.

/// Commands understood by the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    Delete,
    Exit,
    Unknown,
}

impl Command {
    /// Map a command word to a [`Command`]. The word is trimmed and lowercased first.
    pub fn from_word(word: &str) -> Self {
        match word.trim().to_lowercase().as_str() {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "delete" => Command::Delete,
            "close" | "exit" => Command::Exit,
            _ => Command::Unknown,
        }
    }
}

/// A parsed input line: the lowercased command word and its positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: String,
    pub args: Vec<String>,
}

impl ParsedInput {
    pub fn kind(&self) -> Command {
        Command::from_word(&self.command)
    }
}

/// Split a line on whitespace into a command and its arguments.
///
/// Returns `None` when the line holds no tokens at all. Arguments keep
/// their original casing.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.trim().to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some(ParsedInput { command, args })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_and_args() {
        let parsed = parse_input("ADD John 1234567890").unwrap();
        assert_eq!(parsed.command, "add");
        assert_eq!(parsed.args, vec!["John", "1234567890"]);
        assert_eq!(parsed.kind(), Command::Add);
    }

    #[test]
    fn test_parse_collapses_whitespace() {
        let parsed = parse_input("  phone \t john  ").unwrap();
        assert_eq!(parsed.command, "phone");
        assert_eq!(parsed.args, vec!["john"]);
    }

    #[test]
    fn test_parse_blank_line() {
        assert!(parse_input("").is_none());
        assert!(parse_input("   \t ").is_none());
    }

    #[test]
    fn test_command_words() {
        assert_eq!(Command::from_word("hello"), Command::Hello);
        assert_eq!(Command::from_word("Change"), Command::Change);
        assert_eq!(Command::from_word("all"), Command::All);
        assert_eq!(Command::from_word("delete"), Command::Delete);
        assert_eq!(Command::from_word("close"), Command::Exit);
        assert_eq!(Command::from_word("EXIT"), Command::Exit);
        assert_eq!(Command::from_word("remove"), Command::Unknown);
    }
}
