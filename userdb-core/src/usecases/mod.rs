mod create_new_user;
mod error;
mod update_user;

#[cfg(test)]
pub mod tests;

pub use self::{create_new_user::*, error::Error, update_user::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::*,
        repositories::{Error as RepoError, *},
    };
}
use self::prelude::*;

// The store rejects duplicate e-mail addresses even if
// the preceding lookup did not find a conflicting user.
fn email_conflict_on_duplicate(err: RepoError) -> Error {
    match err {
        RepoError::AlreadyExists => Error::EmailConflict,
        err => Error::Repo(err),
    }
}

pub fn get_user<R>(repo: &R, id: &str) -> Result<User>
where
    R: UserRepo,
{
    repo.try_get_user(id)?.ok_or(Error::UserDoesNotExist)
}

pub fn all_users<R>(repo: &R) -> Result<Vec<User>>
where
    R: UserRepo,
{
    Ok(repo.all_users()?)
}
