use std::{
    collections::HashSet,
    ffi::OsString,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{bail, Result as Fallible};
use userdb_core::entities::User;

use crate::models::UserEntity;

pub fn load(file_path: &Path) -> Fallible<Vec<User>> {
    let json = match fs::read(file_path) {
        Ok(json) => json,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            log::info!(
                "Snapshot file {} not found => start with an empty database",
                file_path.display()
            );
            return Ok(vec![]);
        }
        Err(err) => return Err(err.into()),
    };
    let entities: Vec<UserEntity> = serde_json::from_slice(&json)?;
    let mut ids = HashSet::new();
    let mut emails = HashSet::new();
    for e in &entities {
        if !ids.insert(e.id.as_str()) {
            bail!("Duplicate user id '{}' in {}", e.id, file_path.display());
        }
        if !emails.insert(e.email.as_str()) {
            bail!("Duplicate email '{}' in {}", e.email, file_path.display());
        }
    }
    log::info!(
        "Loaded {} user(s) from {}",
        entities.len(),
        file_path.display()
    );
    Ok(entities.into_iter().map(User::from).collect())
}

pub fn persist(file_path: &Path, users: &[User]) -> Fallible<()> {
    let entities: Vec<_> = users.iter().map(UserEntity::from).collect();
    let json = serde_json::to_vec_pretty(&entities)?;
    // Replace the previous snapshot atomically
    let tmp_file_path = tmp_file_path(file_path);
    fs::write(&tmp_file_path, json)?;
    fs::rename(&tmp_file_path, file_path)?;
    log::info!(
        "Persisted {} user(s) into {}",
        entities.len(),
        file_path.display()
    );
    Ok(())
}

// Appends a suffix instead of replacing the extension, which
// would collide with snapshot files that end in ".tmp".
fn tmp_file_path(file_path: &Path) -> PathBuf {
    let mut file_name = file_path
        .file_name()
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| OsString::from("snapshot"));
    file_name.push(".tmp");
    file_path.with_file_name(file_name)
}
