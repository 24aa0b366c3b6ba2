use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DB_FILE_NAME: &str = "tasks.db";

/// Environment variable overriding the database location. Honored from
/// the process environment and from a `.env` file.
pub const DB_PATH_ENV: &str = "DATABASE_PATH";

/// A connection to the application database.
///
/// Each `Db` owns one connection that lives for a single command; it is
/// released when the value drops, on every exit path.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        Self::open(Self::resolve_path()?)
    }

    pub fn open(db_file_path: PathBuf) -> Result<Db> {
        if let Some(dir) = db_file_path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        msg_debug!(format!("Opening database at {}", db_file_path.display()));
        let conn = Connection::open(db_file_path)?;

        Ok(Db { conn })
    }

    /// `DATABASE_PATH` overrides the saved configuration, which overrides
    /// the platform default location.
    fn resolve_path() -> Result<PathBuf> {
        if let Ok(path) = env::var(DB_PATH_ENV) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        if let Some(path) = Config::read()?.db_path {
            return Ok(path);
        }
        DataStorage::new().get_path(DB_FILE_NAME)
    }
}
