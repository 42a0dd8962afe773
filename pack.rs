//! High-level pack and unpack pipeline.
//!
//! This module provides [`Packer`], the primary interface for turning a raw
//! binary into an opaque blob and back.
//!
//! The blob format is bare: `keystream_encrypt(xz_compress(input))` with no
//! container header, magic, stored length, or filename. Reversal requires
//! the passphrase.

use crate::cipher::{transform, Direction};
use crate::compress::{compress, decompress};
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;
use tracing::{debug, error, info};

/// Byte counts for a completed pack or unpack run.
#[derive(Debug, Clone, Copy)]
pub struct PackSummary {
    pub input_bytes: u64,
    pub output_bytes: u64,
}

pub struct Packer {
    passphrase: String,
}

impl Packer {
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
        }
    }

    /// Compresses then encrypts a buffer into an opaque blob.
    pub fn pack(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut blob = compress(data)?;
        transform(&mut blob, &self.passphrase, Direction::Encrypt);
        Ok(blob)
    }

    /// Decrypts then decompresses a blob back into the original bytes.
    pub fn unpack(&self, blob: &[u8]) -> Result<Vec<u8>> {
        let mut data = blob.to_vec();
        transform(&mut data, &self.passphrase, Direction::Decrypt);
        let restored = decompress(&data)?;
        Ok(restored)
    }

    /// Packs a file on disk. Reads the whole input, runs the buffer
    /// pipeline, writes the whole output. Nothing is written unless the
    /// read and both transform stages succeed; a failed write removes the
    /// partial output file.
    pub async fn pack_file(&self, input: &Path, output: &Path) -> Result<PackSummary> {
        debug!(input = %input.display(), output = %output.display(), "packing file");

        let data = fs::read(input)
            .await
            .with_context(|| format!("reading {:?}", input))?;

        let blob = match self.pack(&data) {
            Ok(blob) => blob,
            Err(e) => {
                error!(input = %input.display(), error = %e, "pack pipeline failed");
                return Err(e);
            }
        };

        self.write_whole(output, &blob).await?;

        info!(
            input = %input.display(),
            output = %output.display(),
            input_bytes = data.len(),
            output_bytes = blob.len(),
            "file packed successfully"
        );
        Ok(PackSummary {
            input_bytes: data.len() as u64,
            output_bytes: blob.len() as u64,
        })
    }

    /// Unpacks a blob file on disk back into the original binary.
    pub async fn unpack_file(&self, input: &Path, output: &Path) -> Result<PackSummary> {
        debug!(input = %input.display(), output = %output.display(), "unpacking file");

        let blob = fs::read(input)
            .await
            .with_context(|| format!("reading {:?}", input))?;

        let data = match self.unpack(&blob) {
            Ok(data) => data,
            Err(e) => {
                error!(input = %input.display(), error = %e, "unpack pipeline failed");
                return Err(e);
            }
        };

        self.write_whole(output, &data).await?;

        info!(
            input = %input.display(),
            output = %output.display(),
            input_bytes = blob.len(),
            output_bytes = data.len(),
            "file unpacked successfully"
        );
        Ok(PackSummary {
            input_bytes: blob.len() as u64,
            output_bytes: data.len() as u64,
        })
    }

    /// Writes the full buffer, removing the output file if the write fails
    /// so no truncated blob is left behind.
    async fn write_whole(&self, output: &Path, bytes: &[u8]) -> Result<()> {
        if let Err(e) = fs::write(output, bytes).await {
            error!(output = %output.display(), error = %e, "write failed, removing partial output");
            let _ = fs::remove_file(output).await; // best effort
            return Err(e).with_context(|| format!("writing {:?}", output));
        }
        Ok(())
    }
}
