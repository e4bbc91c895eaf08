//! Object storage implementations.
//!
//! - [`LocalStorage`] - buckets as directories under a configured root

pub mod local_storage;

pub use local_storage::LocalStorage;
