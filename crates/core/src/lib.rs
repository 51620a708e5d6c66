//! Domain logic for the trivia service.
//!
//! Nothing in this crate touches the network or the database, so the rules
//! for paging, searching and quiz selection can be unit-tested in isolation
//! and shared by the repository and HTTP layers.

pub mod category;
pub mod error;
pub mod pagination;
pub mod quiz;
pub mod search;
pub mod types;
