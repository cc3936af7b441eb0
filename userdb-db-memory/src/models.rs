use serde::{Deserialize, Serialize};
use userdb_core::entities::*;

/// A user record as stored in a snapshot file.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserEntity {
    pub id: String,
    pub name: String,
    pub email: String,
    /// bcrypt hash
    pub password: String,
}

impl From<&User> for UserEntity {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.to_string(),
            name: u.name.clone(),
            email: u.email.to_string(),
            password: u.password.as_ref().to_owned(),
        }
    }
}

impl From<UserEntity> for User {
    fn from(e: UserEntity) -> Self {
        let UserEntity {
            id,
            name,
            email,
            password,
        } = e;
        Self {
            id: id.into(),
            name,
            email: EmailAddress::new_unchecked(email),
            password: Password::from_hash_unchecked(password),
        }
    }
}
