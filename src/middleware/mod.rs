//! Request middleware and extractors.
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. [`auth::AuthUser`] validates the JWT and extracts claims
//! 3. Handlers scope every query by the authenticated user's id, so a
//!    record owned by someone else is indistinguishable from a missing one

pub mod auth;
