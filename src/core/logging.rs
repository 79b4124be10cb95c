//! Log file setup.
//!
//! The terminal is owned by the full-screen UI, so log records go to a file
//! instead of stderr. Filtering follows `RUST_LOG` (default `info`).

use env_logger::{Builder, Env, Target};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Default log location: `~/.flappy/flappy.log`.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".flappy").join("flappy.log"))
}

/// Install the global logger writing to `path`, appending.
///
/// Returns an error if the file cannot be opened; callers treat that as
/// "run without logs".
pub fn init(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))
}
