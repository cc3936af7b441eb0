//! # userdb-core
//!
//! Use cases and collaborator traits for managing user accounts.

pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use userdb_entities::{email::*, id::*, password::*, user::*};
}
