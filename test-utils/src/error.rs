use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    /// The mock server could not bind to a local port.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
