//! Bearer token handling
//!
//! The token is issued elsewhere; this client only reads it. Lookup order:
//! an explicit value (the `--token` flag), then the configured environment
//! variable, then the token file.

use std::fmt;
use std::path::{Path, PathBuf};

use lexguard_core::prelude::*;

/// Read-only credentials injected into the HTTP client
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    token: Option<String>,
}

impl Credentials {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.trim().is_empty()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

// Never print the token itself
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Default token file: `<data_local_dir>/lexguard/token`
pub fn default_token_file() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("lexguard").join("token"))
}

/// Resolve the bearer token, returning anonymous credentials when none is found.
pub fn resolve_token(
    explicit: Option<&str>,
    env_var: &str,
    token_file: Option<&Path>,
) -> Credentials {
    if let Some(token) = explicit.map(str::trim).filter(|t| !t.is_empty()) {
        debug!("Using bearer token from command line");
        return Credentials::new(Some(token.to_string()));
    }

    if !env_var.is_empty() {
        if let Ok(token) = std::env::var(env_var) {
            if !token.trim().is_empty() {
                debug!("Using bearer token from ${}", env_var);
                return Credentials::new(Some(token.trim().to_string()));
            }
        }
    }

    if let Some(path) = token_file {
        match std::fs::read_to_string(path) {
            Ok(contents) if !contents.trim().is_empty() => {
                debug!("Using bearer token from {}", path.display());
                return Credentials::new(Some(contents.trim().to_string()));
            }
            Ok(_) => debug!("Token file {} is empty", path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to read token file {}: {}", path.display(), e),
        }
    }

    debug!("No bearer token configured, requests are sent without Authorization");
    Credentials::anonymous()
}
