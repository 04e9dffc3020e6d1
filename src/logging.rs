//! Debug logging to a file.
//!
//! The terminal owns stdout and stderr while the UI is up, so log records are
//! only written when a log file is requested.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::error::TypeaheadError;

/// Install the global logger writing to `path`. Does nothing without a path.
pub fn init(path: Option<&Path>) -> Result<(), TypeaheadError> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::from_env(Env::default().default_filter_or("debug"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .map_err(|e| TypeaheadError::Logger(e.to_string()))
}
