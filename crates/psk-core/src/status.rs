use thiserror::Error;

/// Errors produced while decoding or validating a PSK asset.
///
/// Byte offsets count from the start of the stream handed to the decoder.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PskError {
    #[error("unexpected end of stream at byte {offset}")]
    UnexpectedEof { offset: u64 },
    #[error("corrupt chunk '{tag}' at byte {offset}: {reason}")]
    CorruptChunk {
        tag: String,
        offset: u64,
        reason: String,
    },
    #[error("chunk '{tag}' at byte {offset} declares element size {element_size}, which this decoder cannot parse")]
    UnsupportedEncoding {
        tag: String,
        offset: u64,
        element_size: u32,
    },
    #[error("{entity} {index}: {field} {value} is out of range, only {limit} available")]
    ReferentialIntegrity {
        entity: &'static str,
        index: usize,
        field: &'static str,
        value: u32,
        limit: usize,
    },
    #[error("invalid UTF-8 in fixed-length string at byte {offset}")]
    InvalidString { offset: u64 },
    #[error("I/O error: {0}")]
    Io(String),
}

impl PskError {
    /// Attributes a truncation error to the chunk being decoded.
    ///
    /// A bare `UnexpectedEof` raised mid-payload becomes a `CorruptChunk`
    /// naming the offending tag; every other error already carries enough
    /// context and passes through unchanged.
    pub fn in_chunk(self, tag: &str, reason: &str) -> PskError {
        match self {
            PskError::UnexpectedEof { offset } => PskError::CorruptChunk {
                tag: tag.to_string(),
                offset,
                reason: reason.to_string(),
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, PskError>;
