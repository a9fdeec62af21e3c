use alto_auction::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid compiler version \"{0}\"")]
    InvalidCompilerVersion(String),
    #[error("network \"{network}\" has invalid url \"{url}\"")]
    InvalidUrl { network: String, url: String },
    #[error("network \"{0}\" has chain id 0")]
    InvalidChainId(String),
    #[error("network \"{network}\" has an invalid credential at index {index}: {reason}")]
    InvalidCredential {
        network: String,
        index: usize,
        reason: String,
    },
    #[error("invalid address \"{address}\": {reason}")]
    InvalidAddress { address: String, reason: String },
    #[error("unknown network \"{0}\"")]
    UnknownNetwork(String),
}

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("invalid draft: {0}")]
    Validation(#[from] ValidationError),
    #[error("network \"{0}\" has no credentials to sign with")]
    NoCredentials(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}
