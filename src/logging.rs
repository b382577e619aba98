//! Log setup. The terminal belongs to the game, so logs only ever go to a
//! file, and only when asked for.

use directories::ProjectDirs;
use env_logger::{Builder, Env, Target};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

const LOG_FILE_NAME: &str = "flappy.log";

/// Where logs should go: the `--log` path, else the data dir if `RUST_LOG`
/// is set, else nowhere.
pub fn log_destination(explicit: Option<&Path>, rust_log_set: bool) -> io::Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        return Ok(Some(path.to_path_buf()));
    }
    if !rust_log_set {
        return Ok(None);
    }
    let project_dirs = ProjectDirs::from("", "", "flappy").ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine data directory",
        )
    })?;
    let data_dir = project_dirs.data_dir();
    fs::create_dir_all(data_dir)?;
    Ok(Some(data_dir.join(LOG_FILE_NAME)))
}

/// Install the global logger. Returns the log file path, if logging is on.
pub fn init(explicit: Option<&Path>) -> io::Result<Option<PathBuf>> {
    let rust_log_set = std::env::var_os("RUST_LOG").is_some();
    let Some(path) = log_destination(explicit, rust_log_set)? else {
        return Ok(None);
    };

    let file = File::create(&path)?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))?;

    log::info!("{}", crate::build_info::version_line());
    Ok(Some(path))
}
