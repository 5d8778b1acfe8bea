use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("network error: {0}")]
    Network(String),

    #[error("remote store rejected the request: {0}")]
    Remote(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}
