//! Entry categories
//!
//! The ledger tracks a fixed set of 8 tax-related categories. The set and
//! its order are part of the data format: every month record carries a slot
//! row for each of these, keyed by the display label.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the 8 fixed entry categories, in display order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    #[serde(rename = "DDV IN")]
    DdvIn,
    #[serde(rename = "DDV OPD")]
    DdvOpd,
    #[serde(rename = "BFD IN")]
    BfdIn,
    #[serde(rename = "BFD OPD")]
    BfdOpd,
    #[serde(rename = "NGH")]
    Ngh,
    #[serde(rename = "TMCP")]
    Tmcp,
    #[serde(rename = "OTHERS")]
    Others,
    #[serde(rename = "PROJECTS")]
    Projects,
}

impl Category {
    /// All 8 categories in display order
    pub const ALL: [Category; 8] = [
        Category::DdvIn,
        Category::DdvOpd,
        Category::BfdIn,
        Category::BfdOpd,
        Category::Ngh,
        Category::Tmcp,
        Category::Others,
        Category::Projects,
    ];

    /// The category's display label, as used in the JSON format
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::DdvIn => "DDV IN",
            Category::DdvOpd => "DDV OPD",
            Category::BfdIn => "BFD IN",
            Category::BfdOpd => "BFD OPD",
            Category::Ngh => "NGH",
            Category::Tmcp => "TMCP",
            Category::Others => "OTHERS",
            Category::Projects => "PROJECTS",
        }
    }

    /// Look up a category by label, case-insensitive
    ///
    /// Hyphens and underscores are accepted in place of spaces so the label
    /// can be typed without quoting ("ddv-in" for "DDV IN").
    pub fn from_label(label: &str) -> Option<Category> {
        let normalized = label.trim().replace(['-', '_'], " ").to_uppercase();
        Category::ALL
            .iter()
            .find(|c| c.as_str() == normalized)
            .copied()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_display_order() {
        let labels: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "DDV IN", "DDV OPD", "BFD IN", "BFD OPD", "NGH", "TMCP", "OTHERS", "PROJECTS"
            ]
        );
    }

    #[test]
    fn test_from_label() {
        assert_eq!(Category::from_label("DDV IN"), Some(Category::DdvIn));
        assert_eq!(Category::from_label("ddv-in"), Some(Category::DdvIn));
        assert_eq!(Category::from_label("projects"), Some(Category::Projects));
        assert_eq!(Category::from_label("bfd_opd"), Some(Category::BfdOpd));
        assert_eq!(Category::from_label("RENT"), None);
    }

    #[test]
    fn test_serialization_uses_labels() {
        let json = serde_json::to_string(&Category::DdvOpd).unwrap();
        assert_eq!(json, "\"DDV OPD\"");

        let deserialized: Category = serde_json::from_str("\"TMCP\"").unwrap();
        assert_eq!(deserialized, Category::Tmcp);
    }

    #[test]
    fn test_btreemap_key_order_matches_display_order() {
        let map: std::collections::BTreeMap<Category, u8> =
            Category::ALL.iter().rev().map(|c| (*c, 0)).collect();
        let keys: Vec<Category> = map.keys().copied().collect();
        assert_eq!(keys, Category::ALL.to_vec());
    }
}
