use serde::{Deserialize, Serialize};

/// Text unit of one catalog item: its name and description.
/// `id` is the catalog's own item id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document<K> {
    pub id: K,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl<K> Document<K> {
    pub fn new(id: K, name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description,
        }
    }

    /// `name + " " + description`, a missing description being empty
    pub fn text(&self) -> String {
        let description = self.description.as_deref().unwrap_or("");
        let mut text = String::with_capacity(self.name.len() + 1 + description.len());
        text.push_str(&self.name);
        text.push(' ');
        text.push_str(description);
        text
    }
}
