//! Mock authentication.
//!
//! There is no account store and nothing is verified: any submitted
//! credentials produce a session. Only the "is logged in" flag matters to the
//! rest of the storefront.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub display_name: String,
}

/// Always succeeds. A blank email yields a guest session.
pub fn sign_in(request: &LoginRequest) -> Session {
    let email = request.email.trim().to_string();
    let display_name = match email.split('@').next() {
        Some(local) if !local.is_empty() => local.to_string(),
        _ => "Guest".to_string(),
    };
    log::info!("auth: mock sign-in as '{}'", display_name);
    Session {
        email,
        display_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_credentials_succeed() {
        let session = sign_in(&LoginRequest {
            email: "rina@example.com".to_string(),
            password: "wrong".to_string(),
        });
        assert_eq!(session.display_name, "rina");

        let guest = sign_in(&LoginRequest::default());
        assert_eq!(guest.display_name, "Guest");
        assert_eq!(guest.email, "");
    }
}
