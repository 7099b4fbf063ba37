//! CLI command definitions

use clap::{Parser, Subcommand};
use quotebox_domain::QuoteId;
use std::path::PathBuf;

/// CLI arguments for quotebox
#[derive(Parser, Debug)]
#[command(name = "quotebox")]
#[command(author, version, about = "Keep a deck of quotes and draw one at random")]
#[command(long_about = r#"
quotebox keeps a list of quotes with categories, shows a random one,
filters by category, and imports/exports the list as JSON.

Quotes and the selected filter are saved after every change. The last
shown quote is remembered for the current session.

Configuration files are loaded from (in priority order):
1. QUOTEBOX_* environment variables (e.g. QUOTEBOX_WIDGET__RANDOM_SEED=7)
2. --config <path>     Explicit config file
3. ./quotebox.toml     Project-level config
4. ~/.config/quotebox/config.toml   Global config

Example:
  quotebox
  quotebox add "Be the change you wish to see in the world." Change
  quotebox random --category Change
  quotebox export backup.json
  quotebox repl
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print machine-readable JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Keep everything in memory; nothing is read from or written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and effective values, then exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// The subcommand to run (`random` when none was given)
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Random { category: None })
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show a random quote
    Random {
        /// Select this category filter first (remembered for next time)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List quotes with their ids
    List {
        /// Only list this category (does not change the saved filter)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// List categories in order of first appearance
    Categories,
    /// Add a quote
    Add { text: String, category: String },
    /// Edit a quote by id
    Edit {
        id: QuoteId,
        text: String,
        category: String,
    },
    /// Remove a quote by id
    Remove { id: QuoteId },
    /// Show or change the saved category filter ("all" clears it)
    Filter { value: Option<String> },
    /// Write all quotes to a JSON document ("-" for stdout)
    Export {
        #[arg(default_value = quotebox_domain::EXPORT_FILE_NAME)]
        path: PathBuf,
    },
    /// Merge quotes from a JSON document
    Import { path: PathBuf },
    /// Start the interactive shell
    Repl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_random() {
        let cli = Cli::try_parse_from(["quotebox"]).unwrap();
        assert_eq!(cli.command(), Command::Random { category: None });
    }

    #[test]
    fn test_add_takes_text_and_category() {
        let cli = Cli::try_parse_from(["quotebox", "add", "Test quote", "Cats"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Add {
                text: "Test quote".to_string(),
                category: "Cats".to_string()
            }
        );
    }

    #[test]
    fn test_remove_parses_id() {
        let cli = Cli::try_parse_from(["quotebox", "remove", "3"]).unwrap();
        assert_eq!(cli.command(), Command::Remove { id: QuoteId::new(3) });
        assert!(Cli::try_parse_from(["quotebox", "remove", "three"]).is_err());
    }

    #[test]
    fn test_export_default_path() {
        let cli = Cli::try_parse_from(["quotebox", "export"]).unwrap();
        assert_eq!(
            cli.command(),
            Command::Export {
                path: PathBuf::from("quotes.json")
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["quotebox", "list", "--json", "-vv", "--ephemeral"]).unwrap();
        assert!(cli.json);
        assert!(cli.ephemeral);
        assert_eq!(cli.verbose, 2);
    }
}
