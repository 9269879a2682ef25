//! Log output setup.
//!
//! The terminal is owned by the UI, so logs go to a file and only when
//! `RUST_LOG` is set.

use std::fs::File;

use directories::ProjectDirs;

const LOG_FILE: &str = "morphgrid.log";

/// Install a file-backed logger if `RUST_LOG` is set.
pub fn init() -> color_eyre::Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let Some(dirs) = ProjectDirs::from("", "", "morphgrid") else {
        return Ok(());
    };

    let dir = dirs.data_local_dir();
    std::fs::create_dir_all(dir)?;
    let file = File::create(dir.join(LOG_FILE))?;

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    log::info!("logging to {}", dir.join(LOG_FILE).display());
    Ok(())
}
