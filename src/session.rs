use serde::{Deserialize, Serialize};

const TOKEN_KEY: &str = "token";
const USERNAME_KEY: &str = "username";

/// Auth token + username pair identifying the logged-in user.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Session {
    pub token: String,
    pub username: String,
}

impl Session {
    /// Value for the `Authorization` header: `Token <token>` when a session
    /// is present, empty string otherwise.
    pub fn auth_header(session: Option<&Session>) -> String {
        match session {
            Some(s) => format!("Token {}", s.token),
            None => String::new(),
        }
    }
}

pub fn load_session() -> Option<Session> {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let (Ok(Some(token)), Ok(Some(username))) =
                (storage.get_item(TOKEN_KEY), storage.get_item(USERNAME_KEY))
            {
                if !token.is_empty() {
                    return Some(Session { token, username });
                }
            }
        }
    }
    None
}

pub fn save_session(session: &Session) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(TOKEN_KEY, &session.token);
            let _ = storage.set_item(USERNAME_KEY, &session.username);
        }
    }
}

pub fn clear_session() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USERNAME_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_header_with_session() {
        let session = Session {
            token: "abc123".to_string(),
            username: "alice".to_string(),
        };
        assert_eq!(Session::auth_header(Some(&session)), "Token abc123");
    }

    #[test]
    fn auth_header_without_session() {
        assert_eq!(Session::auth_header(None), "");
    }
}
