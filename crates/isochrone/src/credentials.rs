//! Credential type for the reachability service.
//!
//! The token is injected by the host; there is deliberately no compiled-in
//! default. `Debug` redacts the value so it cannot leak through logs.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[derive(Clone)]
pub struct AccessToken(Arc<str>);

impl AccessToken {
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for AccessToken {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for AccessToken {}

impl Hash for AccessToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(..)")
    }
}

impl From<String> for AccessToken {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for AccessToken {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_equality() {
        let a = AccessToken::new("pk.abc");
        let b = AccessToken::new("pk.abc");
        let c = a.clone();

        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_ne!(a, AccessToken::new("pk.other"));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let token = AccessToken::new("pk.very-secret-value");
        let printed = format!("{:?}", token);

        assert!(!printed.contains("secret"));
        assert_eq!(printed, "AccessToken(..)");
    }
}
