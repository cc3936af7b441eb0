use anyhow::Result;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "userdb.toml";

const ENV_NAME_SNAPSHOT_FILE: &str = "USERDB_SNAPSHOT_FILE";

#[derive(Debug)]
pub struct Config {
    pub db: Db,
}

#[derive(Debug)]
pub struct Db {
    /// JSON file with all users, `None` for a volatile database.
    pub snapshot_file: Option<PathBuf>,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::from(raw_config);
        if let Ok(snapshot_file) = env::var(ENV_NAME_SNAPSHOT_FILE) {
            cfg.db.snapshot_file = non_empty_path(snapshot_file.into());
        }
        Ok(cfg)
    }
}

fn non_empty_path(path: PathBuf) -> Option<PathBuf> {
    Some(path).filter(|p| !p.as_os_str().is_empty())
}

impl From<raw::Config> for Config {
    fn from(from: raw::Config) -> Self {
        let raw::Config { db } = from;
        // Missing keys are filled from the defaults
        let snapshot_file = db
            .and_then(|db| db.snapshot_file)
            .or_else(|| raw::Db::default().snapshot_file)
            .and_then(non_empty_path);
        if snapshot_file.is_none() {
            log::warn!("No snapshot file configured => all users are lost on exit");
        }
        Self {
            db: Db { snapshot_file },
        }
    }
}
