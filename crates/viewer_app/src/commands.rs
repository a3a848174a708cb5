use viewer_api::SettingsAction;

/// One line of terminal input, parsed. Browsing commands turn into
/// form edits or hash navigation; settings commands go straight to the
/// settings collaborator and never touch the session state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    NextPage,
    PrevPage,
    /// Jump to a 1-based page, as typed.
    Page(String),
    /// Set or clear (empty) the user filter.
    User(String),
    /// Set or clear (empty) the keyword filter.
    Keyword(String),
    ToggleMediaOnly,
    /// Set or clear (empty) the page size.
    Count(String),
    /// Navigate to a raw hash fragment.
    Open(String),
    Status,
    Settings(SettingsAction),
}

/// Parses one input line; `None` for blank or unrecognized input.
pub fn parse(line: &str) -> Option<Command> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    match verb {
        "q" | "quit" => Some(Command::Quit),
        "h" | "help" | "?" => Some(Command::Help),
        "n" | "next" => Some(Command::NextPage),
        "p" | "prev" => Some(Command::PrevPage),
        "page" => Some(Command::Page(rest.to_string())),
        "u" | "user" => Some(Command::User(rest.to_string())),
        "k" | "keyword" => Some(Command::Keyword(rest.to_string())),
        "m" | "media" => Some(Command::ToggleMediaOnly),
        "count" => Some(Command::Count(rest.to_string())),
        "open" => Some(Command::Open(rest.to_string())),
        "status" => Some(Command::Status),
        "scan" => Some(Command::Settings(SettingsAction::Scan)),
        "thumbnails" => Some(Command::Settings(SettingsAction::GenerateThumbnails)),
        "clean" => Some(Command::Settings(SettingsAction::Clean)),
        "datadir" if !rest.is_empty() => Some(Command::Settings(SettingsAction::SetDataDir(
            rest.to_string(),
        ))),
        _ => None,
    }
}

pub const HELP: &str = "\
commands:
  n / p            next / previous page
  page N           jump to page N
  u NAME           filter by user (empty clears)
  k WORD           filter by keyword (empty clears)
  m                toggle media-only
  count N          set page size
  open FRAGMENT    navigate to a hash route, e.g. open feeds?user_name=alice
  status           show scanner status
  scan | thumbnails | clean | datadir PATH
  q                quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_browsing_commands() {
        assert_eq!(parse("n"), Some(Command::NextPage));
        assert_eq!(parse("  page 4 "), Some(Command::Page("4".to_string())));
        assert_eq!(parse("u alice"), Some(Command::User("alice".to_string())));
        assert_eq!(parse("u"), Some(Command::User(String::new())));
        assert_eq!(parse("k two words"), Some(Command::Keyword("two words".to_string())));
    }

    #[test]
    fn parses_settings_commands() {
        assert_eq!(parse("scan"), Some(Command::Settings(SettingsAction::Scan)));
        assert_eq!(
            parse("datadir /data/archives"),
            Some(Command::Settings(SettingsAction::SetDataDir(
                "/data/archives".to_string()
            )))
        );
        assert_eq!(parse("datadir"), None);
    }

    #[test]
    fn blank_and_garbage_lines_parse_to_none() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
        assert_eq!(parse("frobnicate"), None);
    }
}
