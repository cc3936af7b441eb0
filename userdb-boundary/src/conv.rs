use super::*;
use userdb_core::{entities as e, usecases as uc};

impl From<e::User> for User {
    fn from(from: e::User) -> Self {
        let e::User {
            id,
            name,
            email,
            password: _password,
        } = from;
        Self {
            id: id.into(),
            name,
            email: email.into_string(),
        }
    }
}

impl From<NewUser> for uc::NewUser {
    fn from(from: NewUser) -> Self {
        let NewUser {
            name,
            email,
            password,
        } = from;
        Self {
            name,
            email,
            password,
        }
    }
}

impl From<UpdateUser> for uc::UpdateUser {
    fn from(from: UpdateUser) -> Self {
        let UpdateUser {
            name,
            email,
            old_password,
            password,
            confirm_password,
        } = from;
        Self {
            name,
            email,
            old_password,
            password,
            confirm_password,
        }
    }
}

impl From<uc::Error> for Error {
    fn from(from: uc::Error) -> Self {
        Self {
            error: from.to_string(),
        }
    }
}
