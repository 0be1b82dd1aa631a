use serde::{Deserialize, Serialize};

/// One inventory record: a named drink and its category label.
///
/// `name` is the key used for deletion but is not unique. `category` may be
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Drink {
    name: String,
    category: String,
}

impl Drink {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }

    pub fn is_in_category(&self, category: &str) -> bool {
        self.category == category
    }
}
