use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetError {
    #[error("DOT parse error: {0}")]
    Parse(String),

    #[error("the network is not connected")]
    Disconnected,

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type NetResult<T> = Result<T, NetError>;
