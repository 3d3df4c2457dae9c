//! Wire contracts for the BookAccess lending API.
//!
//! All types here are value objects received from or sent to the remote
//! HTTP API; the client never holds authoritative copies.

pub mod auth;
pub mod catalog;
pub mod envelope;
pub mod feedback;
pub mod loans;
