use crate::{
    entities::Password,
    usecases::{NewUser, UpdateUser},
};
use thiserror::Error;

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

fn is_filled(s: Option<&str>) -> bool {
    s.is_some_and(|s| !s.is_empty())
}

/// The first rule that a user request violates.
///
/// Only meant for diagnostics, callers of the use cases
/// never get to see which field was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserInvalidation {
    #[error("Missing name")]
    Name,
    #[error("Invalid email")]
    EmailAddress,
    #[error("The old password is too short")]
    OldPassword,
    #[error("The password is too short")]
    Password,
    #[error("A new password is required when the old password is given")]
    PasswordRequired,
    #[error("The password confirmation does not match")]
    PasswordConfirmation,
}

impl Validate for NewUser {
    type Error = UserInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        let NewUser {
            name,
            email,
            password,
        } = self;
        if name.is_empty() {
            return Err(Self::Error::Name);
        }
        if !is_valid_email(email) {
            return Err(Self::Error::EmailAddress);
        }
        if !Password::has_min_len(password) {
            return Err(Self::Error::Password);
        }
        Ok(())
    }
}

// All rules are evaluated against the whole request.
// The conditional ones depend on other fields, their
// order is irrelevant for the outcome.
impl Validate for UpdateUser {
    type Error = UserInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        let UpdateUser {
            name: _,
            email,
            old_password,
            password,
            confirm_password,
        } = self;
        if let Some(email) = email {
            if !is_valid_email(email) {
                return Err(Self::Error::EmailAddress);
            }
        }
        if let Some(old_password) = old_password {
            if !Password::has_min_len(old_password) {
                return Err(Self::Error::OldPassword);
            }
        }
        if let Some(password) = password {
            if !Password::has_min_len(password) {
                return Err(Self::Error::Password);
            }
        }
        if is_filled(old_password.as_deref()) && password.is_none() {
            return Err(Self::Error::PasswordRequired);
        }
        if is_filled(password.as_deref()) && confirm_password != password {
            return Err(Self::Error::PasswordConfirmation);
        }
        Ok(())
    }
}
