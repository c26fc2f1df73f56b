use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Invalid JSON in data file:")]
    ParseError {
        #[from]
        source: serde_json::Error,
    },
    #[error("No flag art for country code {0}")]
    MissingFlagError(String),
}
