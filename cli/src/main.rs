//! CLI entrypoint for quotebox
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use quotebox_application::{
    KeyValueStorage, Notice, QuotePersistence, QuotePresenter, QuoteWidget,
};
use quotebox_domain::CategoryFilter;
use quotebox_infrastructure::{
    ConfigLoader, FileConfig, JsonFileStorage, MemoryStorage, StdRandomSource,
};
use quotebox_presentation::{
    Cli, Command, ConsoleFormatter, ConsolePresenter, OutputConfig, WidgetRepl, export_to,
    import_from,
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref().filter(|_| !cli.no_config));
        let config = load_config(&cli)?;
        println!();
        println!("{}", config.to_toml()?);
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;
    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("config: {}", issue);
        }
        bail!("Invalid configuration ({} issues)", issues.len());
    }

    let output = OutputConfig {
        color: config.output.color && !cli.no_color,
        json: cli.json,
    };
    output.apply();

    let command = cli.command();
    let interactive = command == Command::Repl;

    // === Dependency Injection ===
    let (durable, session): (Arc<dyn KeyValueStorage>, Arc<dyn KeyValueStorage>) =
        if cli.ephemeral {
            debug!("Ephemeral mode, storage stays in memory");
            (Arc::new(MemoryStorage::new()), Arc::new(MemoryStorage::new()))
        } else {
            let durable = JsonFileStorage::open(config.storage.durable_file());
            let session = JsonFileStorage::open(config.storage.resolve_session_file());
            info!(
                "Using storage {} (session {})",
                durable.path().display(),
                session.path().display()
            );
            (Arc::new(durable), Arc::new(session))
        };

    let random = Arc::new(StdRandomSource::from_seed_option(config.widget.random_seed));
    let presenter = Arc::new(ConsolePresenter::new(output.clone()).with_category_updates(interactive));
    let mut widget_config = config.widget.to_widget_config();
    widget_config.display_on_start = interactive;

    let mut widget = QuoteWidget::new(
        QuotePersistence::new(durable, session),
        random,
        presenter.clone(),
        widget_config,
    );
    widget.start();

    let succeeded = match command {
        Command::Random { category } => {
            match category {
                Some(value) => select_filter(&mut widget, presenter.as_ref(), &value),
                None => {
                    widget.user_requests_random();
                }
            }
            true
        }
        Command::List { category } => {
            let filter = category
                .as_deref()
                .map(CategoryFilter::parse)
                .unwrap_or_else(|| widget.current_filter().clone());
            if output.json {
                println!("{}", ConsoleFormatter::format_list_json(widget.quotes(), &filter));
            } else {
                println!("{}", ConsoleFormatter::format_list(widget.quotes(), &filter));
            }
            true
        }
        Command::Categories => {
            let categories = widget.categories();
            let current = widget.current_filter();
            if output.json {
                println!("{}", ConsoleFormatter::format_categories_json(&categories, current));
            } else {
                println!("{}", ConsoleFormatter::format_categories(&categories, current));
            }
            true
        }
        Command::Add { text, category } => widget.user_submits_new_quote(&text, &category).is_ok(),
        Command::Edit { id, text, category } => {
            matches!(widget.user_edits_quote(id, &text, &category), Ok(true))
        }
        Command::Remove { id } => widget.user_removes_quote(id).is_some(),
        Command::Filter { value: Some(value) } => {
            select_filter(&mut widget, presenter.as_ref(), &value);
            true
        }
        Command::Filter { value: None } => {
            println!("{}", widget.current_filter());
            true
        }
        Command::Export { path } => {
            export_to(&widget, presenter.as_ref(), &path)
                .await
                .map_err(|e| anyhow!("Failed to export to {}: {}", path.display(), e))?;
            true
        }
        Command::Import { path } => import_from(&mut widget, &path)
            .await
            .map_err(|e| anyhow!("Failed to read {}: {}", path.display(), e))?
            .is_some(),
        Command::Repl => {
            let history = (!cli.ephemeral).then(|| config.storage.history_file());
            WidgetRepl::new(widget, presenter)
                .with_history(history)
                .run()
                .await?;
            true
        }
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow!("Failed to load config: {}", e))
}

fn select_filter(widget: &mut QuoteWidget, presenter: &dyn QuotePresenter, value: &str) {
    let requested = CategoryFilter::parse(value);
    if widget.user_selects_filter(value) != requested {
        presenter.on_notify(&Notice::info(format!(
            "Unknown category '{}', showing all",
            value.trim()
        )));
    }
}
