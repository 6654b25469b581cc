//! Centralized authorization policy for HTTP handlers.
//!
//! Every booking and review mutation is owner-scoped: the verified email
//! from the bearer token must equal the resource's owning email. The
//! comparison is exact and case-sensitive. On a deny the caller gets a
//! `Forbidden` and no store write is issued.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;

/// Require that the authenticated caller owns the resource.
pub fn require_owner(auth: &AuthUser, owner_email: &str) -> Result<()> {
    if auth.email == owner_email {
        Ok(())
    } else {
        Err(AppError::Forbidden("You are not authorized".to_string()))
    }
}
