use serde::{Deserialize, Serialize};

/// An image of a chapter, `index` is its position in the reader
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Page {
    pub index: usize,
    pub url: String,
}
