//! Wire DTOs for the client/server boundary.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Signed-in staff member as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact address, if the backend exposes it.
    #[serde(default)]
    pub email: Option<String>,
    /// Role within the admin backend (e.g. `"recruiter"`, `"admin"`).
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "staff".to_owned()
}
