use super::*;

type Result<T> = std::result::Result<T, repo::Error>;

fn read_only() -> repo::Error {
    repo::Error::Other(anyhow!("Read-only database connection"))
}

impl<'a> UserRepo for DbReadOnly<'a> {
    fn create_user(&self, _user: &User) -> Result<()> {
        Err(read_only())
    }
    fn update_user(&self, _user: &User) -> Result<()> {
        Err(read_only())
    }

    fn all_users(&self) -> Result<Vec<User>> {
        Ok(self.users.clone())
    }
    fn count_users(&self) -> Result<usize> {
        Ok(self.users.len())
    }

    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&self.users, id)
    }
    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        Ok(try_get_user(&self.users, id))
    }
    fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(try_get_user_by_email(&self.users, email))
    }
}

impl<'a> UserRepo for DbReadWrite<'a> {
    fn create_user(&self, user: &User) -> Result<()> {
        create_user(&mut self.users.borrow_mut(), user)
    }
    fn update_user(&self, user: &User) -> Result<()> {
        update_user(&mut self.users.borrow_mut(), user)
    }

    fn all_users(&self) -> Result<Vec<User>> {
        Ok(self.users.borrow().clone())
    }
    fn count_users(&self) -> Result<usize> {
        Ok(self.users.borrow().len())
    }

    fn get_user(&self, id: &str) -> Result<User> {
        get_user(&self.users.borrow(), id)
    }
    fn try_get_user(&self, id: &str) -> Result<Option<User>> {
        Ok(try_get_user(&self.users.borrow(), id))
    }
    fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(try_get_user_by_email(&self.users.borrow(), email))
    }
}

fn is_email_taken_by_other(users: &[User], user: &User) -> bool {
    users
        .iter()
        .any(|u| u.email == user.email && u.id != user.id)
}

fn create_user(users: &mut Table, user: &User) -> Result<()> {
    if users.iter().any(|u| u.id == user.id) || is_email_taken_by_other(users, user) {
        return Err(repo::Error::AlreadyExists);
    }
    users.push(user.clone());
    Ok(())
}

fn update_user(users: &mut Table, user: &User) -> Result<()> {
    if is_email_taken_by_other(users, user) {
        return Err(repo::Error::AlreadyExists);
    }
    let existing = users
        .iter_mut()
        .find(|u| u.id == user.id)
        .ok_or(repo::Error::NotFound)?;
    *existing = user.clone();
    Ok(())
}

fn get_user(users: &[User], id: &str) -> Result<User> {
    try_get_user(users, id).ok_or(repo::Error::NotFound)
}

fn try_get_user(users: &[User], id: &str) -> Option<User> {
    users.iter().find(|u| u.id.as_str() == id).cloned()
}

fn try_get_user_by_email(users: &[User], email: &str) -> Option<User> {
    users.iter().find(|u| u.email.as_str() == email).cloned()
}
