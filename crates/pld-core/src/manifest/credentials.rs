//! Basic-auth credentials and `$NAME` environment indirection.

use crate::error::ManifestError;
use std::collections::HashMap;
use std::fmt;

/// Name → credentials mapping from the root manifest.
pub type CredentialMap = HashMap<String, Credentials>;

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Environment lookup used to resolve `$NAME` indirections.
pub trait EnvLookup {
    fn lookup(&self, name: &str) -> Option<String>;
}

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl EnvLookup for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Replaces a `$NAME` value with the environment variable `NAME`; other values pass through.
pub(crate) fn resolve_value(
    credential: &str,
    value: String,
    env: &dyn EnvLookup,
) -> Result<String, ManifestError> {
    match value.strip_prefix('$') {
        Some(name) => env.lookup(name).ok_or_else(|| ManifestError::MissingEnv {
            credential: credential.to_string(),
            name: name.to_string(),
        }),
        None => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_value_passes_through() {
        let env = HashMap::new();
        assert_eq!(resolve_value("prod", "alice".into(), &env).unwrap(), "alice");
    }

    #[test]
    fn dollar_value_reads_env() {
        let env = HashMap::from([("REPO_TOKEN".to_string(), "s3cret".to_string())]);
        assert_eq!(
            resolve_value("prod", "$REPO_TOKEN".into(), &env).unwrap(),
            "s3cret"
        );
    }

    #[test]
    fn missing_env_is_error() {
        let env = HashMap::new();
        let err = resolve_value("prod", "$NOPE".into(), &env).unwrap_err();
        assert!(matches!(err, ManifestError::MissingEnv { ref name, .. } if name == "NOPE"));
    }

    #[test]
    fn debug_hides_password() {
        let c = Credentials {
            username: "u".into(),
            password: "hunter2".into(),
        };
        assert!(!format!("{:?}", c).contains("hunter2"));
    }
}
