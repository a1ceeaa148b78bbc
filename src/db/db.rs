use super::error::StoreError;
use super::migrations;
use crate::libs::data_storage::DataStorage;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "taskpad.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database, creating it if absent, and applies any pending
    /// migrations. Every caller gets its own connection; no handle is shared
    /// across operations.
    pub fn new() -> Result<Db, StoreError> {
        let mut conn = Self::open()?;
        migrations::init_with_migrations(&mut conn).map_err(|e| StoreError::Init(e.into()))?;

        Ok(Db { conn })
    }

    /// Opens a raw connection without touching the schema. Used by the
    /// migration inspection commands and tests.
    pub fn new_without_migrations() -> Result<Connection, StoreError> {
        Self::open()
    }

    fn open() -> Result<Connection, StoreError> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME).map_err(|e| StoreError::Init(e.into()))?;
        Connection::open(db_file_path).map_err(|e| StoreError::Init(Box::new(e)))
    }
}
