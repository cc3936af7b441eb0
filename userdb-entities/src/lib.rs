#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # userdb-entities
//!
//! Reusable, agnostic domain entities for UserDB.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod email;
pub mod id;
pub mod password;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
