//! Wire DTOs for the authentication endpoints.
//!
//! DESIGN
//! ======
//! These types mirror the subscription API's JSON payloads so serde decoding
//! stays lossless. Role is modeled as a closed enum with an `Unknown`
//! catch-all so a new server-side role degrades to "not an admin" instead of
//! failing the whole decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role assigned to an account by the subscription service.
///
/// Only [`Role::Admin`] grants access to the admin area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// A tutor account on the learning platform.
    Teacher,
    /// A learner account.
    Student,
    /// Any role this client does not know about.
    #[serde(other)]
    Unknown,
}

/// An account as returned by the profile and login endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique account identifier (UUID string).
    pub id: String,
    /// Sign-in email address.
    pub email: String,
    /// Display name shown in the admin header.
    pub name: String,
    /// Account role; gates access to the admin area.
    pub role: Role,
}

impl Profile {
    /// Whether this account may hold an admin session.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Successful login payload: the account plus its bearer token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The authenticated account.
    pub user: Profile,
    /// Opaque bearer token for subsequent requests.
    pub token: String,
}

/// Error payload the API attaches to non-OK responses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure description, when the server provides one.
    #[serde(default)]
    pub message: Option<String>,
}

/// A failed API request.
///
/// `message` carries the server-provided description only; transport-level
/// failures (network down, undecodable body) leave it empty so UI fallbacks
/// stay generic rather than leaking internals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status of the response, when one was received.
    pub status: Option<u16>,
    /// Server-provided message, when one was decodable.
    pub message: Option<String>,
}

impl ApiError {
    /// A request that never produced a usable response.
    pub fn transport() -> Self {
        Self {
            status: None,
            message: None,
        }
    }

    /// A non-OK response, with whatever message the body carried.
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        Self {
            status: Some(status),
            message,
        }
    }

    /// The server's message, or `fallback` when none was provided.
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| fallback.to_owned())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.message, self.status) {
            (Some(message), Some(status)) => write!(f, "{message} (status {status})"),
            (Some(message), None) => write!(f, "{message}"),
            (None, Some(status)) => write!(f, "request failed with status {status}"),
            (None, None) => write!(f, "request failed"),
        }
    }
}
