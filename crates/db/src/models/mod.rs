//! Row structs and request DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - The `Deserialize` payloads the HTTP layer accepts for that entity

pub mod category;
pub mod question;
