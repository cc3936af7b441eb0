use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm_password: Option<String>,
}

/// The public part of a user account.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Error {
    /// error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_update_with_camel_case_fields() {
        let json = r#"{"oldPassword":"correct1","password":"newpass","confirmPassword":"newpass"}"#;
        let u: UpdateUser = serde_json::from_str(json).unwrap();
        assert!(u.name.is_none());
        assert!(u.email.is_none());
        assert_eq!(Some("correct1"), u.old_password.as_deref());
        assert_eq!(Some("newpass"), u.password.as_deref());
        assert_eq!(Some("newpass"), u.confirm_password.as_deref());
    }

    #[test]
    fn serialize_update_without_absent_fields() {
        let u = UpdateUser {
            name: Some("Alice".into()),
            ..Default::default()
        };
        assert_eq!(r#"{"name":"Alice"}"#, serde_json::to_string(&u).unwrap());
    }

    #[test]
    fn serialize_user() {
        let u = User {
            id: "123".into(),
            name: "Bob".into(),
            email: "bob@x.com".into(),
        };
        assert_eq!(
            r#"{"id":"123","name":"Bob","email":"bob@x.com"}"#,
            serde_json::to_string(&u).unwrap()
        );
    }
}
