use serde::{Deserialize, Serialize};

/// Catalog genre; `slug` is the unique key used for filtering
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: String,
    pub name: String,
    pub slug: String,
}
