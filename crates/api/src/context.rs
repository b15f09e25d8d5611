/// Session context for a request.
///
/// Inserted by the session middleware; present on every protected route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    token: String,
    username: String,
}

impl SessionContext {
    pub fn new(token: String, username: String) -> Self {
        Self { token, username }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}
