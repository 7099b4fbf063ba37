//! Interactive shell over the quote widget

mod command;
mod shell;

pub use command::ReplCommand;
pub use shell::WidgetRepl;
