//! Reading and writing interchange documents on disk.
//!
//! File I/O runs on tokio; the bytes are then handed to the synchronous
//! widget, which never touches the file system itself.

use quotebox_application::{Notice, QuotePresenter, QuoteWidget};
use quotebox_domain::ImportOutcome;
use std::io;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Path that means "standard output" for exports.
pub const STDOUT_PATH: &str = "-";

fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == STDOUT_PATH
}

pub async fn read_document(path: &Path) -> io::Result<Vec<u8>> {
    let bytes = tokio::fs::read(path).await?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

pub async fn write_document(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if is_stdout(path) {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(bytes).await?;
        stdout.write_all(b"\n").await?;
        return stdout.flush().await;
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, bytes).await?;
    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

/// Export every quote to `path` and report it.
pub async fn export_to(
    widget: &QuoteWidget,
    presenter: &dyn QuotePresenter,
    path: &Path,
) -> io::Result<()> {
    let bytes = widget.user_requests_export();
    write_document(path, &bytes).await?;
    if !is_stdout(path) {
        presenter.on_notify(&Notice::success(format!(
            "Exported {} quotes to {}",
            widget.quotes().len(),
            path.display()
        )));
    }
    Ok(())
}

/// Import the document at `path` into the widget.
///
/// Returns `Ok(None)` when the document was malformed; the widget has
/// already reported that to the user.
pub async fn import_from(widget: &mut QuoteWidget, path: &Path) -> io::Result<Option<ImportOutcome>> {
    let bytes = read_document(path).await?;
    Ok(widget.user_submits_import_document(&bytes).ok())
}
