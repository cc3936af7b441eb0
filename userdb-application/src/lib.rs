#[macro_use]
extern crate log;

mod create_user;
mod update_user;

pub mod prelude {
    pub use super::{create_user::*, update_user::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use userdb_core::{entities::*, usecases};


pub(crate) mod memory {
    pub use userdb_db_memory::Connections;
}

/// All users in the order they were created.
pub fn all_users(connections: &memory::Connections) -> Result<Vec<User>> {
    Ok(usecases::all_users(&connections.shared())?)
}
