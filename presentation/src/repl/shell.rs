//! REPL (Read-Eval-Print Loop) for the quote widget

use super::command::ReplCommand;
use crate::ConsoleFormatter;
use crate::documents::{export_to, import_from};
use quotebox_application::{Notice, QuotePresenter, QuoteWidget};
use quotebox_domain::{CategoryFilter, EXPORT_FILE_NAME};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

const HELP: &str = "\
/random, /r, <enter>           - Show another quote
/list, /ls                     - List quotes in the current filter
/categories, /cats             - List categories
/filter <category|all>         - Change the category filter
/add <text> | <category>       - Add a quote
/edit <id> <text> | <category> - Edit a quote
/remove <id>, /rm <id>         - Remove a quote
/export [path]                 - Export quotes (default quotes.json)
/import <path>                 - Merge quotes from a JSON file
/help, /h, /?                  - Show this help
/quit, /exit, /q               - Exit";

/// Interactive quote shell
pub struct WidgetRepl {
    widget: QuoteWidget,
    presenter: Arc<dyn QuotePresenter>,
    history_path: Option<PathBuf>,
}

impl WidgetRepl {
    /// Create a new WidgetRepl around a started widget
    pub fn new(widget: QuoteWidget, presenter: Arc<dyn QuotePresenter>) -> Self {
        Self {
            widget,
            presenter,
            history_path: None,
        }
    }

    /// Persist line history at `path`
    pub fn with_history(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    /// Run the interactive REPL
    pub async fn run(mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline("quotes> ") {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = rl.add_history_entry(line.as_str());
                    }
                    match ReplCommand::parse(&line) {
                        Ok(ReplCommand::Quit) => {
                            println!("Bye!");
                            break;
                        }
                        Ok(command) => self.execute(command).await,
                        Err(usage) => self.presenter.on_notify(&Notice::info(usage)),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│               quotebox shell                │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "{} quotes, filter: {}",
            self.widget.quotes().len(),
            self.widget.current_filter()
        );
        println!("Press Enter for another quote, /help for commands.");
        println!();
    }

    async fn execute(&mut self, command: ReplCommand) {
        debug!("REPL command: {:?}", command);
        match command {
            ReplCommand::Random => {
                self.widget.user_requests_random();
            }
            ReplCommand::List => {
                print!(
                    "{}",
                    ConsoleFormatter::format_list(self.widget.quotes(), self.widget.current_filter())
                );
            }
            ReplCommand::Categories => {
                print!(
                    "{}",
                    ConsoleFormatter::format_categories(
                        &self.widget.categories(),
                        self.widget.current_filter()
                    )
                );
            }
            ReplCommand::Filter(value) => {
                let filter = self.widget.user_selects_filter(&value);
                if filter != CategoryFilter::parse(&value) {
                    self.presenter.on_notify(&Notice::info(format!(
                        "Unknown category '{}', showing all",
                        value.trim()
                    )));
                }
            }
            ReplCommand::Add { text, category } => {
                let _ = self.widget.user_submits_new_quote(&text, &category);
            }
            ReplCommand::Edit { id, text, category } => {
                let _ = self.widget.user_edits_quote(id, &text, &category);
            }
            ReplCommand::Remove(id) => {
                self.widget.user_removes_quote(id);
            }
            ReplCommand::Export(path) => {
                let path = path.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
                self.export(&path).await;
            }
            ReplCommand::Import(path) => {
                self.import(&path).await;
            }
            ReplCommand::Help => {
                println!();
                println!("Commands:");
                println!("{}", ConsoleFormatter::indent(HELP, "  "));
                println!();
            }
            ReplCommand::Quit => {}
        }
    }

    async fn export(&self, path: &Path) {
        if let Err(e) = export_to(&self.widget, self.presenter.as_ref(), path).await {
            self.presenter.on_notify(&Notice::error(format!(
                "Could not write {}: {}",
                path.display(),
                e
            )));
        }
    }

    async fn import(&mut self, path: &Path) {
        if let Err(e) = import_from(&mut self.widget, path).await {
            self.presenter.on_notify(&Notice::error(format!(
                "Could not read {}: {}",
                path.display(),
                e
            )));
        }
    }
}
