use super::prelude::*;
use std::cell::{Cell, RefCell};

pub use userdb_entities::builders::Builder;

type RepoResult<T> = std::result::Result<T, RepoError>;

#[derive(Default)]
pub struct MockDb {
    pub users: RefCell<Vec<User>>,
    /// Simulates a concurrent writer that inserted a user
    /// after the lookup by email.
    pub hide_emails_from_lookup: Cell<bool>,
    mutations: Cell<usize>,
    lookups: Cell<usize>,
    password_checks: Cell<usize>,
}

impl MockDb {
    pub fn mutations(&self) -> usize {
        self.mutations.get()
    }

    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }

    pub fn password_checks(&self) -> usize {
        self.password_checks.get()
    }

    fn email_taken_by_other(&self, user: &User) -> bool {
        self.users
            .borrow()
            .iter()
            .any(|u| u.email == user.email && u.id != user.id)
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        if self.users.borrow().iter().any(|u| u.id == user.id) || self.email_taken_by_other(user)
        {
            return Err(RepoError::AlreadyExists);
        }
        self.mutations.set(self.mutations.get() + 1);
        self.users.borrow_mut().push(user.clone());
        Ok(())
    }

    fn update_user(&self, user: &User) -> RepoResult<()> {
        if self.email_taken_by_other(user) {
            return Err(RepoError::AlreadyExists);
        }
        let mut users = self.users.borrow_mut();
        let existing = users
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(RepoError::NotFound)?;
        *existing = user.clone();
        self.mutations.set(self.mutations.get() + 1);
        Ok(())
    }

    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }

    fn count_users(&self) -> RepoResult<usize> {
        Ok(self.users.borrow().len())
    }

    fn get_user(&self, id: &str) -> RepoResult<User> {
        self.try_get_user(id)?.ok_or(RepoError::NotFound)
    }

    fn try_get_user(&self, id: &str) -> RepoResult<Option<User>> {
        self.lookups.set(self.lookups.get() + 1);
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.id.as_str() == id)
            .cloned())
    }

    fn try_get_user_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        self.lookups.set(self.lookups.get() + 1);
        if self.hide_emails_from_lookup.get() {
            return Ok(None);
        }
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }

    fn check_password(&self, user: &User, password: &str) -> bool {
        self.password_checks.set(self.password_checks.get() + 1);
        user.password.verify(password)
    }
}
