use serde::{Deserialize, Serialize};

use super::error::AdminError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub id: String,
    pub name: String,
}

/// Category list edited from the admin dashboard. Lives only as long as the
/// page that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBook {
    entries: Vec<CategoryEntry>,
}

impl Default for CategoryBook {
    fn default() -> Self {
        Self {
            entries: vec![
                CategoryEntry {
                    id: "game".to_string(),
                    name: "Game Top-up".to_string(),
                },
                CategoryEntry {
                    id: "apps".to_string(),
                    name: "Premium Apps".to_string(),
                },
            ],
        }
    }
}

impl CategoryBook {
    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    /// Add a category named `name`; the id is derived with [`slugify`].
    pub fn add(&mut self, name: &str) -> Result<&CategoryEntry, AdminError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AdminError::EmptyCategoryName);
        }
        let id = slugify(name);
        if self.entries.iter().any(|e| e.id == id) {
            return Err(AdminError::DuplicateCategory(id));
        }
        self.entries.push(CategoryEntry {
            id,
            name: name.to_string(),
        });
        Ok(&self.entries[self.entries.len() - 1])
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }
}

/// Lowercase, whitespace runs collapsed to a single `-`.
pub fn slugify(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Voucher Game"), "voucher-game");
        assert_eq!(slugify("  Gift   Cards\tPlus "), "gift-cards-plus");
        assert_eq!(slugify("PLN"), "pln");
    }

    #[test]
    fn test_add_and_remove() {
        let mut book = CategoryBook::default();
        let added = book.add("Voucher Game").unwrap().clone();
        assert_eq!(added.id, "voucher-game");
        assert_eq!(book.entries().len(), 3);

        assert!(book.remove("game"));
        assert!(!book.remove("game"));
        assert_eq!(book.entries().len(), 2);
    }

    #[test]
    fn test_add_rejects_blank_and_duplicate() {
        let mut book = CategoryBook::default();
        assert_eq!(book.add("   "), Err(AdminError::EmptyCategoryName));
        assert_eq!(
            book.add("Game"),
            Err(AdminError::DuplicateCategory("game".to_string()))
        );
        assert_eq!(book.entries().len(), 2);
    }
}
