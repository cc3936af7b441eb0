//! In-memory implementation of the user store.
//!
//! All records are kept in a single table behind a reader/writer
//! lock. The table is optionally backed by a JSON snapshot file
//! that is rewritten whenever a transaction commits.

use anyhow::{anyhow, Result as Fallible};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::{
    cell::RefCell,
    path::{Path, PathBuf},
    sync::Arc,
};
use userdb_core::{
    entities::*,
    repositories::{self as repo, UserRepo},
    usecases as uc,
};

mod models;
mod repo_impl;
mod snapshot;

type Table = Vec<User>;

type SharedTable = Arc<RwLock<Table>>;

pub struct DbReadOnly<'a> {
    users: RwLockReadGuard<'a, Table>,
}

impl<'a> DbReadOnly<'a> {
    fn new(table: &'a SharedTable) -> Self {
        Self {
            users: table.read(),
        }
    }
}

pub struct DbReadWrite<'a> {
    users: RefCell<RwLockWriteGuard<'a, Table>>,
    snapshot_file: Option<&'a Path>,
}

impl<'a> DbReadWrite<'a> {
    fn new(table: &'a SharedTable, snapshot_file: Option<&'a Path>) -> Self {
        Self {
            users: RefCell::new(table.write()),
            snapshot_file,
        }
    }

    /// Runs `f` and commits all modifications only if it succeeds.
    ///
    /// On failure the table is restored to its previous state.
    /// If a snapshot file is configured it is rewritten on commit.
    pub fn transaction<T, F, E>(&self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&Self) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        let backup = self.users.borrow().clone();
        let res = f(self).map_err(Into::into).and_then(|res| {
            self.commit()
                .map_err(|err| uc::Error::Repo(repo::Error::Other(err)))?;
            Ok(res)
        });
        if res.is_err() {
            **self.users.borrow_mut() = backup;
        }
        res
    }

    fn commit(&self) -> Fallible<()> {
        let Some(file_path) = self.snapshot_file else {
            return Ok(());
        };
        snapshot::persist(file_path, &self.users.borrow()).map_err(|err| {
            log::error!(
                "Failed to persist snapshot into {}: {err}",
                file_path.display()
            );
            err
        })
    }
}

#[derive(Clone)]
pub struct Connections {
    // Only a single connection with write access will be
    // handed out at a time. Multiple read connections can
    // be accessed concurrently.
    table: SharedTable,
    snapshot_file: Option<Arc<PathBuf>>,
}

impl Connections {
    /// A volatile database that is lost on exit.
    pub fn init_in_memory() -> Self {
        Self::new(vec![], None)
    }

    /// Loads the users from a snapshot file.
    ///
    /// A missing file results in an empty database. The file
    /// will be created when the first transaction commits.
    pub fn init_with_snapshot(file_path: impl Into<PathBuf>) -> Fallible<Self> {
        let file_path = file_path.into();
        if file_path.is_dir() {
            return Err(anyhow!(
                "Snapshot file {} is a directory",
                file_path.display()
            ));
        }
        let users = snapshot::load(&file_path)?;
        Ok(Self::new(users, Some(file_path)))
    }

    fn new(users: Table, snapshot_file: Option<PathBuf>) -> Self {
        Self {
            table: Arc::new(RwLock::new(users)),
            snapshot_file: snapshot_file.map(Arc::new),
        }
    }

    pub fn shared(&self) -> DbReadOnly<'_> {
        DbReadOnly::new(&self.table)
    }

    pub fn exclusive(&self) -> DbReadWrite<'_> {
        DbReadWrite::new(&self.table, self.snapshot_file.as_deref().map(PathBuf::as_path))
    }
}
