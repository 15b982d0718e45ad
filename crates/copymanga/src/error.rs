use thiserror::Error;

/// Failures of the chapter catalog pipeline.
///
/// Everything but `InvalidUuidFormat` ends the whole request;
/// `SchemaFailure` is turned into an empty chapter list by the pipeline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("decryption key not found in page")]
    KeyNotFound,
    #[error("content key not found in page")]
    ContentKeyNotFound,
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    #[error("failed to decrypt payload: {0}")]
    DecryptionFailure(String),
    #[error("failed to parse decrypted json: {0}")]
    JsonParseFailure(String),
    #[error("chapter list has no groups")]
    SchemaFailure,
    #[error("invalid uuid format: {0}")]
    InvalidUuidFormat(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::JsonParseFailure(e.to_string())
    }
}
