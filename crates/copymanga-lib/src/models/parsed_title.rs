use serde::{Deserialize, Serialize};

/// Numbers recovered from a raw chapter title.
///
/// `chapter` already includes `part` when a part marker was found, so
/// "第10話(下)" gives `chapter == 10.5` and `part == Some(0.5)`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ParsedTitle {
    pub volume: Option<f64>,
    pub chapter: f64,
    pub part: Option<f64>,
    pub title: String,
}

impl ParsedTitle {
    /// Title with nothing recognized in it
    pub fn unparsed(title: &str) -> Self {
        Self {
            volume: None,
            chapter: 0.0,
            part: None,
            title: title.to_string(),
        }
    }
}
