//! Concrete adapters for the domain traits: PostgreSQL repositories in
//! [`persistence`] and the on-disk upload store in [`storage`].

pub mod persistence;
pub mod storage;
