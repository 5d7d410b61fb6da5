//! File logging
//!
//! Log lines are appended to a file so they never interleave with the
//! interactive prompts on the terminal.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::error::Result;

/// Environment variable holding an env_logger filter, e.g. `debug`
pub const LOG_ENV: &str = "SWEEPER_LOG";

/// Open (or create) the log file for appending
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Install the global logger writing to `path`.
///
/// `debug` lowers the default level; an explicit `SWEEPER_LOG` filter wins.
pub fn init(path: &Path, debug: bool) -> Result<()> {
    let file = open_log_file(path)?;
    let default_level = if debug { "debug" } else { "info" };

    Builder::from_env(Env::default().filter_or(LOG_ENV, default_level))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| crate::error::Error::Other(format!("Logger already set: {}", e)))?;

    Ok(())
}
