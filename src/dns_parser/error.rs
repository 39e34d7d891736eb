use thiserror::Error;

/// Error decoding or encoding a DNS packet
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("packet has incomplete data")]
    Truncated,
    #[error("output buffer is full")]
    BufferFull,
    #[error("domain name is malformed")]
    MalformedName,
    #[error("domain name is longer than 255 bytes")]
    NameTooLong,
    #[error("label in domain name is longer than 63 bytes")]
    LabelTooLong,
    #[error("request carries answer or authority records")]
    UnexpectedRecords,
    #[error("record type {0} is not supported")]
    UnsupportedRRType(u16),
}
