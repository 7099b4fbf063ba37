//! Console output for quotes, lists and notices

use crate::config::OutputConfig;
use colored::Colorize;
use quotebox_application::{Notice, NoticeLevel, QuotePresenter};
use quotebox_domain::{CategoryFilter, StoredQuote};
use serde_json::json;

/// Formats widget data for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a single displayed quote
    pub fn format_quote(text: &str, category: &str) -> String {
        format!(
            "\n  {}\n    {} {}\n",
            format!("\"{}\"", text).bold(),
            "-".dimmed(),
            category.cyan()
        )
    }

    pub fn format_quote_json(text: &str, category: &str) -> String {
        json!({ "text": text, "category": category }).to_string()
    }

    /// Format the quotes passing `filter`, one per line with their ids
    pub fn format_list(quotes: &[StoredQuote], filter: &CategoryFilter) -> String {
        let shown: Vec<_> = quotes.iter().filter(|q| filter.matches(&q.quote)).collect();
        if shown.is_empty() {
            return format!("{}\n", "No quotes.".dimmed());
        }

        let width = shown
            .iter()
            .map(|q| q.id.to_string().len())
            .max()
            .unwrap_or(1);
        let mut output = String::new();
        for stored in &shown {
            output.push_str(&format!(
                "{} {} {}\n",
                format!("#{:>width$}", stored.id, width = width).yellow(),
                stored.quote.text(),
                format!("[{}]", stored.quote.category()).cyan()
            ));
        }
        output.push_str(&format!(
            "{}\n",
            format!("{} of {} quotes ({})", shown.len(), quotes.len(), filter).dimmed()
        ));
        output
    }

    pub fn format_list_json(quotes: &[StoredQuote], filter: &CategoryFilter) -> String {
        let shown: Vec<_> = quotes.iter().filter(|q| filter.matches(&q.quote)).collect();
        serde_json::to_string_pretty(&shown).unwrap_or_else(|_| "[]".to_string())
    }

    /// Format the category list, marking the active filter
    pub fn format_categories(categories: &[String], current: &CategoryFilter) -> String {
        let mut output = String::new();
        let marker = |active: bool| if active { "*".green().bold() } else { " ".normal() };

        output.push_str(&format!("{} {}\n", marker(current.is_all()), "all".dimmed()));
        for category in categories {
            output.push_str(&format!(
                "{} {}\n",
                marker(current.as_str() == category && !current.is_all()),
                category
            ));
        }
        output
    }

    pub fn format_categories_json(categories: &[String], current: &CategoryFilter) -> String {
        json!({ "categories": categories, "filter": current.as_str() }).to_string()
    }

    pub fn format_notice(notice: &Notice) -> String {
        match notice.level {
            NoticeLevel::Success => format!("{} {}", "ok".green().bold(), notice.message),
            NoticeLevel::Info => format!("{} {}", "--".blue().bold(), notice.message),
            NoticeLevel::Error => format!("{} {}", "error:".red().bold(), notice.message),
        }
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// [`QuotePresenter`] that prints to the terminal.
///
/// Quotes go to stdout; notices go to stderr so `--json` output stays
/// parseable.
pub struct ConsolePresenter {
    config: OutputConfig,
    show_category_updates: bool,
}

impl ConsolePresenter {
    pub fn new(config: OutputConfig) -> Self {
        Self {
            config,
            show_category_updates: false,
        }
    }

    /// Print the category list whenever it changes (interactive use)
    pub fn with_category_updates(mut self, show: bool) -> Self {
        self.show_category_updates = show;
        self
    }
}

impl QuotePresenter for ConsolePresenter {
    fn on_display_quote(&self, text: &str, category: &str) {
        if self.config.json {
            println!("{}", ConsoleFormatter::format_quote_json(text, category));
        } else {
            println!("{}", ConsoleFormatter::format_quote(text, category));
        }
    }

    fn on_notify(&self, notice: &Notice) {
        eprintln!("{}", ConsoleFormatter::format_notice(notice));
    }

    fn on_categories_changed(&self, categories: &[String]) {
        if self.show_category_updates && !self.config.json {
            println!(
                "{} {}",
                "Categories:".dimmed(),
                categories.join(", ").dimmed()
            );
        }
    }
}
