//! Core business logic module
//!
//! This module contains the in-memory account store:
//! - `store` - Ordered account collection with index-based account numbers

pub mod store;

pub use store::AccountStore;
