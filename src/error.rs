use std::io;
use thiserror::Error;

pub type DnsResult<T> = std::result::Result<T, DnsError>;

#[derive(Debug, Error)]
pub enum DnsError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("Label \"{0}\" is longer than 63 bytes.")]
    LabelTooLong(String),
    #[error("Invalid domain name \"{0}\".")]
    InvalidName(String),
    #[error("The requested domain name is too large to be processed by a single query ({0} bytes), please try again with a shorter name.")]
    MessageTooLarge(usize),
    #[error("Socket timed out.")]
    SocketTimeout,
    #[error("Maximum number of retries {0} exceeded")]
    MaxRetriesExceeded(u32),
    #[error("Received response ID ({response}) does not match the Request ID ({request}).")]
    IdMismatch { request: u16, response: u16 },
    #[error("Received response is a query, not a response.")]
    NotAResponse,
    #[error("Server does not support recursive queries.")]
    RecursionNotSupported,
    #[error("Invalid format, the name server was unable to interpret the query.")]
    FormatError,
    #[error("Server failure, the name server was unable to process this query due to a problem with the name server.")]
    ServerFailure,
    #[error("Name error, the domain name referenced in the query does not exist.")]
    NameError,
    #[error("Not implemented, the name server does not support the requested kind of query.")]
    NotImplemented,
    #[error("Refused, the name server refuses to perform the requested operation for policy reasons.")]
    Refused,
    #[error("Unsupported record class {0}, only IN (1) is supported.")]
    UnsupportedClass(u16),
    #[error("Unsupported resource record type {0}.")]
    UnsupportedRecordType(u16),
    #[error("Response is truncated at byte {0}.")]
    Truncated(usize),
    #[error("Malformed domain name label at byte {0}.")]
    MalformedName(usize),
    #[error("Compression pointer loop detected at byte {0}.")]
    CompressionLoop(usize),
    #[error("Socket error: {0}")]
    Io(#[from] io::Error),
}

impl DnsError {
    pub fn is_recoverable(&self) -> bool {
        matches!(self, DnsError::SocketTimeout)
    }
}
