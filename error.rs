use thiserror::Error;

/// Custom error types for VeilPack operations
#[derive(Debug, Error)]
pub enum VeilPackError {
    /// File storage and I/O errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Compression encoder failures (initialization or coding)
    #[error("Compression error: {0}")]
    Compression(String),

    /// Decompression failures (corrupt or truncated stream)
    #[error("Decompression error: {0}")]
    Decompression(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),
}

impl VeilPackError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn compression(msg: impl Into<String>) -> Self {
        Self::Compression(msg.into())
    }

    pub fn decompression(msg: impl Into<String>) -> Self {
        Self::Decompression(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<std::io::Error> for VeilPackError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(err.to_string())
    }
}
