use thiserror::Error;

/// Infrastructure errors that can occur during application startup.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Configuration error: environment variable {var} is invalid")]
    ConfigInvalid { var: &'static str },

    #[error("Data directory {path} is not usable")]
    DataDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TCP bind failed")]
    TcpBind(#[source] std::io::Error),

    #[error("Server error")]
    Server(#[source] std::io::Error),
}
