//! The fixed category set
//!
//! Categories are enforced at the input boundary (create/update) only;
//! stored posts keep the category as a plain string, so imported data may
//! carry values outside this set.

use std::fmt;

/// The eight categories a post can be filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Technology,
    Lifestyle,
    Travel,
    Food,
    Health,
    Business,
    Education,
    Entertainment,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 8] = [
        Category::Technology,
        Category::Lifestyle,
        Category::Travel,
        Category::Food,
        Category::Health,
        Category::Business,
        Category::Education,
        Category::Entertainment,
    ];

    /// Returns the canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Lifestyle => "Lifestyle",
            Category::Travel => "Travel",
            Category::Food => "Food",
            Category::Health => "Health",
            Category::Business => "Business",
            Category::Education => "Education",
            Category::Entertainment => "Entertainment",
        }
    }

    /// Case-insensitive lookup of a canonical category
    pub fn parse(name: &str) -> Option<Category> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(name))
    }

    /// True when `name` is a member of the set (canonical spelling)
    pub fn is_valid(name: &str) -> bool {
        Category::ALL.iter().any(|c| c.as_str() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
