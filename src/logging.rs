use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn log_dir() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|p| p.join("utmlink"))
}

/// Route tracing output to a file; the TUI owns stdout and stderr while it
/// runs, so nothing may log there.
pub fn init() -> io::Result<()> {
    let Some(dir) = log_dir() else {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            "could not determine state directory",
        ));
    };

    fs::create_dir_all(&dir)?;
    let path = dir.join("utmlink.log");
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(io::Error::other)?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
