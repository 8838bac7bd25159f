use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
}

/// The authenticated session. Token and user are always set and cleared
/// together; there is no valid state with only one of them present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl Session {
    pub fn authenticated(token: String, user: User) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_is_anonymous() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert!(session.token.is_none());
        assert!(session.user.is_none());
    }

    #[test]
    fn authenticated_session_has_both_fields() {
        let session = Session::authenticated(
            "token-123".to_string(),
            User {
                name: "지우".to_string(),
            },
        );
        assert!(session.is_authenticated());
        assert_eq!(session.user.unwrap().name, "지우");
    }
}
