//! Category references as they arrive from clients.
//!
//! Questions store their category as text, and clients send category ids
//! either as JSON numbers or as the string keys of the categories map. Both
//! forms are accepted and compared in their string form.

use serde::Deserialize;

use crate::types::DbId;

/// Category id that stands for "every category" in quiz requests.
pub const ALL_CATEGORIES_ID: DbId = 0;

/// A category id sent as either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CategoryKey {
    Id(DbId),
    Text(String),
}

impl CategoryKey {
    /// The value as stored in `questions.category`.
    pub fn as_stored(&self) -> String {
        match self {
            CategoryKey::Id(id) => id.to_string(),
            CategoryKey::Text(text) => text.trim().to_string(),
        }
    }

    /// Whether this key selects the whole question pool.
    pub fn is_all(&self) -> bool {
        match self {
            CategoryKey::Id(id) => *id == ALL_CATEGORIES_ID,
            CategoryKey::Text(text) => {
                text.trim().parse::<DbId>().ok() == Some(ALL_CATEGORIES_ID)
            }
        }
    }
}

impl Default for CategoryKey {
    fn default() -> Self {
        CategoryKey::Id(ALL_CATEGORIES_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_string_keys_store_identically() {
        assert_eq!(CategoryKey::Id(2).as_stored(), "2");
        assert_eq!(CategoryKey::Text("2".into()).as_stored(), "2");
        assert_eq!(CategoryKey::Text(" 3 ".into()).as_stored(), "3");
    }

    #[test]
    fn zero_means_all_in_both_forms() {
        assert!(CategoryKey::Id(0).is_all());
        assert!(CategoryKey::Text("0".into()).is_all());
        assert!(!CategoryKey::Id(4).is_all());
        assert!(!CategoryKey::Text("Science".into()).is_all());
    }

    #[test]
    fn default_is_all() {
        assert!(CategoryKey::default().is_all());
    }
}
