//! In-memory store layer.
//!
//! The registry holds all collections in memory for the lifetime of the
//! process; there is no persistence across restarts.

pub mod domain;
pub mod session;

pub use domain::{DomainStore, NewProject};
pub use session::SessionStore;
