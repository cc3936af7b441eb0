use super::{email_conflict_on_duplicate, prelude::*};
use crate::util::validate::Validate;

/// The fields a user wants to change.
///
/// Fields that are `None` stay unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub old_password: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

/// Updates the account of the authenticated user `user_id`.
///
/// The checks are performed in a fixed order and the first
/// failing check is reported:
///
/// 1. [`Error::Validation`] if the request is malformed
/// 2. [`Error::EmailConflict`] if the requested address belongs to another user
/// 3. [`Error::IncorrectPassword`] if the old password does not match
///
/// The store is only modified if all checks pass.
pub fn update_user<R: UserRepo>(repo: &R, user_id: &str, u: UpdateUser) -> Result<User> {
    u.validate().map_err(|err| {
        log::debug!("Invalid update of user {user_id}: {err}");
        err
    })?;

    let mut user = repo
        .try_get_user(user_id)?
        .ok_or(Error::UserDoesNotExist)?;
    let user_by_email = match &u.email {
        Some(email) => repo.try_get_user_by_email(email)?,
        None => None,
    };

    if let Some(email) = &u.email {
        if email != user.email.as_str() && user_by_email.is_some() {
            log::debug!("User {user_id} requested the email of another user");
            return Err(Error::EmailConflict);
        }
    }

    let UpdateUser {
        name,
        email,
        old_password,
        password,
        confirm_password: _,
    } = u;

    let mut new_password = None;
    if let Some(old_password) = old_password.filter(|p| !p.is_empty()) {
        if !repo.check_password(&user, &old_password) {
            return Err(Error::IncorrectPassword);
        }
        new_password = password;
    }

    if let Some(name) = name {
        user.name = name;
    }
    if let Some(email) = email {
        user.email = EmailAddress::new_unchecked(email);
    }
    if let Some(password) = new_password {
        user.password = password.parse::<Password>()?;
    }

    log::info!("Updating user {}", user.id);
    repo.update_user(&user)
        .map_err(email_conflict_on_duplicate)?;
    Ok(user)
}

#[cfg(test)]
mod tests {

    use super::{
        super::{tests::{Builder, MockDb}, *},
        *,
    };

    fn alice() -> User {
        User::build()
            .id("alice")
            .name("Alice")
            .email("a@x.com")
            .password("correct1")
            .finish()
    }

    fn bob() -> User {
        User::build()
            .id("bob")
            .name("Bob")
            .email("b@x.com")
            .password("bobs secret")
            .finish()
    }

    fn db_with_users() -> MockDb {
        let db = MockDb::default();
        db.users.borrow_mut().push(alice());
        db.users.borrow_mut().push(bob());
        db
    }

    #[test]
    fn change_name_only() {
        let db = db_with_users();
        let u = UpdateUser {
            name: Some("Alice".into()),
            ..Default::default()
        };
        let user = update_user(&db, "alice", u).unwrap();
        assert_eq!("alice", user.id.as_str());
        assert_eq!("Alice", user.name);
        assert_eq!("a@x.com", user.email.as_str());
        assert_eq!(1, db.mutations());
        assert_eq!(0, db.password_checks());
    }

    #[test]
    fn rename_user() {
        let db = db_with_users();
        let u = UpdateUser {
            name: Some("Alicia".into()),
            ..Default::default()
        };
        update_user(&db, "alice", u).unwrap();
        let stored = db.get_user("alice").unwrap();
        assert_eq!("Alicia", stored.name);
        assert!(stored.password.verify("correct1"));
    }

    #[test]
    fn reject_email_of_another_user() {
        let db = db_with_users();
        let u = UpdateUser {
            email: Some("b@x.com".into()),
            ..Default::default()
        };
        assert!(matches!(
            update_user(&db, "alice", u),
            Err(Error::EmailConflict)
        ));
        assert_eq!(0, db.mutations());
        assert_eq!("a@x.com", db.get_user("alice").unwrap().email.as_str());
    }

    #[test]
    fn keep_current_email() {
        let db = db_with_users();
        let u = UpdateUser {
            email: Some("a@x.com".into()),
            ..Default::default()
        };
        let user = update_user(&db, "alice", u.clone()).unwrap();
        assert_eq!("a@x.com", user.email.as_str());
        // repeating the request yields the same result
        let user = update_user(&db, "alice", u).unwrap();
        assert_eq!("a@x.com", user.email.as_str());
    }

    #[test]
    fn change_email() {
        let db = db_with_users();
        let u = UpdateUser {
            email: Some("alice@x.com".into()),
            ..Default::default()
        };
        let user = update_user(&db, "alice", u).unwrap();
        assert_eq!("alice@x.com", user.email.as_str());
        assert!(db.try_get_user_by_email("a@x.com").unwrap().is_none());
        assert_eq!(
            "alice",
            db.try_get_user_by_email("alice@x.com")
                .unwrap()
                .unwrap()
                .id
                .as_str()
        );
    }

    #[test]
    fn reject_short_old_password_before_any_lookup() {
        let db = db_with_users();
        let u = UpdateUser {
            old_password: Some("short".into()),
            ..Default::default()
        };
        assert!(matches!(
            update_user(&db, "alice", u),
            Err(Error::Validation)
        ));
        assert_eq!(0, db.lookups());
        assert_eq!(0, db.mutations());
    }

    #[test]
    fn reject_invalid_request_for_unknown_user() {
        let db = MockDb::default();
        let u = UpdateUser {
            email: Some("invalid".into()),
            ..Default::default()
        };
        assert!(matches!(
            update_user(&db, "nobody", u),
            Err(Error::Validation)
        ));
    }

    #[test]
    fn reject_incorrect_old_password() {
        let db = db_with_users();
        let u = UpdateUser {
            old_password: Some("wrong pass".into()),
            password: Some("newpass".into()),
            confirm_password: Some("newpass".into()),
            ..Default::default()
        };
        assert!(matches!(
            update_user(&db, "alice", u),
            Err(Error::IncorrectPassword)
        ));
        assert_eq!(0, db.mutations());
        assert!(db.get_user("alice").unwrap().password.verify("correct1"));
    }

    #[test]
    fn change_password() {
        let db = db_with_users();
        let u = UpdateUser {
            old_password: Some("correct1".into()),
            password: Some("newpass".into()),
            confirm_password: Some("newpass".into()),
            ..Default::default()
        };
        let user = update_user(&db, "alice", u).unwrap();
        assert!(user.password.verify("newpass"));
        let stored = db.get_user("alice").unwrap();
        assert!(stored.password.verify("newpass"));
        assert!(!stored.password.verify("correct1"));
        assert_eq!(1, db.password_checks());
    }

    #[test]
    fn ignore_new_password_without_old_password() {
        let db = db_with_users();
        let u = UpdateUser {
            name: Some("Alicia".into()),
            password: Some("newpass".into()),
            confirm_password: Some("newpass".into()),
            ..Default::default()
        };
        update_user(&db, "alice", u).unwrap();
        let stored = db.get_user("alice").unwrap();
        assert_eq!("Alicia", stored.name);
        assert!(stored.password.verify("correct1"));
    }

    #[test]
    fn email_conflict_takes_precedence_over_incorrect_password() {
        let db = db_with_users();
        let u = UpdateUser {
            email: Some("b@x.com".into()),
            old_password: Some("wrong pass".into()),
            password: Some("newpass".into()),
            confirm_password: Some("newpass".into()),
            ..Default::default()
        };
        assert!(matches!(
            update_user(&db, "alice", u),
            Err(Error::EmailConflict)
        ));
        assert_eq!(0, db.password_checks());
    }

    #[test]
    fn unknown_user() {
        let db = db_with_users();
        let u = UpdateUser {
            name: Some("Nobody".into()),
            ..Default::default()
        };
        assert!(matches!(
            update_user(&db, "nobody", u),
            Err(Error::UserDoesNotExist)
        ));
        assert_eq!(0, db.mutations());
    }

    #[test]
    fn store_side_duplicate_is_an_email_conflict() {
        let db = db_with_users();
        // The lookup by email misses the conflicting record.
        db.hide_emails_from_lookup.set(true);
        let u = UpdateUser {
            email: Some("b@x.com".into()),
            ..Default::default()
        };
        assert!(matches!(
            update_user(&db, "alice", u),
            Err(Error::EmailConflict)
        ));
        assert_eq!("a@x.com", db.get_user("alice").unwrap().email.as_str());
    }
}
