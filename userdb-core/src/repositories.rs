// Low-level storage access traits.
// The store owns all user records and is responsible
// for enforcing unique e-mail addresses.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait UserRepo {
    /// Fails with [`Error::AlreadyExists`] if either the id
    /// or the e-mail address is already taken.
    fn create_user(&self, user: &User) -> Result<()>;
    /// Replaces the record with the same id.
    ///
    /// Fails with [`Error::NotFound`] for unknown ids and with
    /// [`Error::AlreadyExists`] if the e-mail address belongs
    /// to another record.
    fn update_user(&self, user: &User) -> Result<()>;

    fn all_users(&self) -> Result<Vec<User>>;
    fn count_users(&self) -> Result<usize>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user(&self, id: &str) -> Result<Option<User>>;
    fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Checks a plaintext password against the stored hash.
    fn check_password(&self, user: &User, password: &str) -> bool {
        user.password.verify(password)
    }
}
