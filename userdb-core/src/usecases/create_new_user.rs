use super::{email_conflict_on_duplicate, prelude::*};
use crate::util::validate::Validate;

#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub fn create_new_user<R: UserRepo>(repo: &R, u: NewUser) -> Result<User> {
    u.validate().map_err(|err| {
        log::debug!("Invalid new user: {err}");
        err
    })?;
    if repo.try_get_user_by_email(&u.email)?.is_some() {
        return Err(Error::EmailConflict);
    }
    let NewUser {
        name,
        email,
        password,
    } = u;
    let new_user = User {
        id: Id::new(),
        name,
        email: EmailAddress::new_unchecked(email),
        password: password.parse::<Password>()?,
    };
    log::info!("Creating new user: email = {}", new_user.email);
    repo.create_user(&new_user)
        .map_err(email_conflict_on_duplicate)?;
    Ok(new_user)
}
