use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Item {
    pub(crate) id: i32,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) price: f64,
}

impl Item {
    pub(crate) fn new(id: i32, name: &str, description: &str, price: f64) -> Self {
        Self { id, name: name.to_string(), description: description.to_string(), price }
    }

    /// Returns the same record keyed under `id`.
    pub(crate) fn with_id(self, id: i32) -> Self {
        Self { id, ..self }
    }
}
