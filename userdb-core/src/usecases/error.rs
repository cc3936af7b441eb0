use crate::{repositories, util::validate::UserInvalidation};
use thiserror::Error;
use userdb_entities::password;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Validation failed")]
    Validation,
    #[error("A user with this email already exists")]
    EmailConflict,
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("Failed to hash the password")]
    PasswordHash,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<UserInvalidation> for Error {
    fn from(_: UserInvalidation) -> Self {
        Self::Validation
    }
}

impl From<password::ParseError> for Error {
    fn from(err: password::ParseError) -> Self {
        match err {
            password::ParseError::TooShort => Self::Validation,
            password::ParseError::Hash(err) => {
                log::error!("Failed to hash password: {err}");
                Self::PasswordHash
            }
        }
    }
}
