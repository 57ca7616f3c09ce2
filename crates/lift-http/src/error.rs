use thiserror::Error;

/// Errors from the HTTP façade.  Only binding is fatal; per-connection I/O
/// failures are logged and swallowed by the accept loop.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

pub type HttpResult<T> = Result<T, HttpError>;
