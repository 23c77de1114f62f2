use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    #[error(transparent)]
    Dns(#[from] dns::Error),
}
