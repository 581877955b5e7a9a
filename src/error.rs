#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{0}")]
    IoError(String),

    #[error("{0}")]
    ParseError(String),

    #[error("Could not find marker \"{marker}\" in {document}.")]
    MarkerNotFound { document: String, marker: String },
}
