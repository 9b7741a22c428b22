use pagesearch_core::{InvalidPageSize, Msg, PageSize};

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    PerPage(PageSize),
    Next,
    Prev,
    Clear,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command {0:?}")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error(transparent)]
    PageSize(#[from] InvalidPageSize),
}

/// Parses a line; blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "search" | "s" => Command::Search(rest.to_string()),
        "per-page" | "pp" => {
            if rest.is_empty() {
                return Err(CommandError::MissingArgument("per-page"));
            }
            Command::PerPage(rest.parse()?)
        }
        "next" | "n" => Command::Next,
        "prev" | "p" => Command::Prev,
        "clear" | "c" => Command::Clear,
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };
    Ok(Some(command))
}

impl Command {
    /// Core messages for commands that drive the search; `Help` and `Quit`
    /// are handled by the front end and yield none.
    pub fn into_msgs(self) -> Vec<Msg> {
        match self {
            Command::Search(text) => vec![Msg::QueryChanged(text), Msg::SearchSubmitted],
            Command::PerPage(size) => vec![Msg::PageSizeSelected(size)],
            Command::Next => vec![Msg::NextClicked],
            Command::Prev => vec![Msg::PrevClicked],
            Command::Clear => vec![Msg::ClearClicked],
            Command::Help | Command::Quit => Vec::new(),
        }
    }
}
