//! REPL command parsing

use quotebox_domain::QuoteId;
use std::path::PathBuf;

/// A parsed REPL input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Random,
    List,
    Categories,
    Filter(String),
    Add { text: String, category: String },
    Edit {
        id: QuoteId,
        text: String,
        category: String,
    },
    Remove(QuoteId),
    Export(Option<PathBuf>),
    Import(PathBuf),
    Help,
    Quit,
}

impl ReplCommand {
    /// Parse one input line.
    ///
    /// An empty line draws a new random quote. Errors are user-facing usage
    /// messages.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Self::Random);
        }
        let Some(rest) = line.strip_prefix('/') else {
            return Err("Commands start with '/'. Type /help for a list.".to_string());
        };

        let (name, args) = match rest.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (rest, ""),
        };

        match name {
            "random" | "r" | "next" => Ok(Self::Random),
            "list" | "ls" => Ok(Self::List),
            "categories" | "cats" => Ok(Self::Categories),
            "filter" | "f" => {
                if args.is_empty() {
                    Err("Usage: /filter <category|all>".to_string())
                } else {
                    Ok(Self::Filter(args.to_string()))
                }
            }
            "add" | "a" => {
                let (text, category) =
                    split_quote(args).ok_or("Usage: /add <text> | <category>")?;
                Ok(Self::Add { text, category })
            }
            "edit" | "e" => {
                let usage = "Usage: /edit <id> <text> | <category>";
                let (id, rest) = args.split_once(char::is_whitespace).ok_or(usage)?;
                let id = id.parse::<QuoteId>().map_err(|_| usage.to_string())?;
                let (text, category) = split_quote(rest).ok_or(usage)?;
                Ok(Self::Edit { id, text, category })
            }
            "remove" | "rm" => args
                .parse::<QuoteId>()
                .map(Self::Remove)
                .map_err(|_| "Usage: /remove <id>".to_string()),
            "export" => Ok(Self::Export(
                (!args.is_empty()).then(|| PathBuf::from(args)),
            )),
            "import" => {
                if args.is_empty() {
                    Err("Usage: /import <path>".to_string())
                } else {
                    Ok(Self::Import(PathBuf::from(args)))
                }
            }
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(format!("Unknown command '/{}'. Type /help for a list.", other)),
        }
    }
}

/// Split `text | category` on the last `|`.
///
/// Empty fields are kept so that validation, and its message, stays with
/// the widget.
fn split_quote(args: &str) -> Option<(String, String)> {
    let (text, category) = args.rsplit_once('|')?;
    Some((text.trim().to_string(), category.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_is_random() {
        assert_eq!(ReplCommand::parse("   "), Ok(ReplCommand::Random));
        assert_eq!(ReplCommand::parse("/r"), Ok(ReplCommand::Random));
    }

    #[test]
    fn test_add_splits_on_last_pipe() {
        assert_eq!(
            ReplCommand::parse("/add To be | or not | Shakespeare"),
            Ok(ReplCommand::Add {
                text: "To be | or not".to_string(),
                category: "Shakespeare".to_string()
            })
        );
    }

    #[test]
    fn test_add_without_category_is_usage_error() {
        assert!(ReplCommand::parse("/add just text").is_err());
    }

    #[test]
    fn test_add_keeps_empty_fields_for_validation() {
        assert_eq!(
            ReplCommand::parse("/add  | Cats"),
            Ok(ReplCommand::Add {
                text: String::new(),
                category: "Cats".to_string()
            })
        );
    }

    #[test]
    fn test_edit_parses_id_and_fields() {
        assert_eq!(
            ReplCommand::parse("/edit #4 New text | Life"),
            Ok(ReplCommand::Edit {
                id: QuoteId::new(4),
                text: "New text".to_string(),
                category: "Life".to_string()
            })
        );
        assert!(ReplCommand::parse("/edit x New | Life").is_err());
    }

    #[test]
    fn test_remove_and_filter() {
        assert_eq!(
            ReplCommand::parse("/rm 2"),
            Ok(ReplCommand::Remove(QuoteId::new(2)))
        );
        assert_eq!(
            ReplCommand::parse("/filter Deep Thoughts"),
            Ok(ReplCommand::Filter("Deep Thoughts".to_string()))
        );
        assert!(ReplCommand::parse("/filter").is_err());
    }

    #[test]
    fn test_export_optional_path() {
        assert_eq!(ReplCommand::parse("/export"), Ok(ReplCommand::Export(None)));
        assert_eq!(
            ReplCommand::parse("/export out.json"),
            Ok(ReplCommand::Export(Some(PathBuf::from("out.json"))))
        );
    }

    #[test]
    fn test_unknown_and_bare_text() {
        assert!(ReplCommand::parse("/dance").unwrap_err().contains("/dance"));
        assert!(ReplCommand::parse("hello").is_err());
    }
}
