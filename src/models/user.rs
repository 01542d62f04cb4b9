//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Opaque id assigned at creation
    pub id: String,
    /// Display name; not required to be unique
    pub username: String,
}
