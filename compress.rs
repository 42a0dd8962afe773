//! XZ compression and decompression of in-memory buffers.
//!
//! The compressed stream format is fixed: XZ container, LZMA2 preset 5,
//! CRC64 integrity check. These constants define the blob format and must
//! not change, or existing packed artifacts stop decoding.
//!
//! Output is written into a growable `Vec`, so incompressible inputs that
//! momentarily exceed the input size cannot truncate the stream.

use crate::error::VeilPackError;
use std::io::Write;
use xz2::stream::{Check, Stream};
use xz2::write::{XzDecoder, XzEncoder};

/// LZMA2 preset (0-9). Format constant.
const PRESET: u32 = 5;

/// Decoder memory limit: whole-buffer processing, no cap needed.
const DECODER_MEMLIMIT: u64 = u64::MAX;

/// Compresses `input` into a complete XZ stream.
///
/// Empty input still yields a valid header-only stream.
pub fn compress(input: &[u8]) -> Result<Vec<u8>, VeilPackError> {
    let stream = Stream::new_easy_encoder(PRESET, Check::Crc64)
        .map_err(|e| VeilPackError::compression(format!("initializing encoder: {}", e)))?;

    let out = Vec::with_capacity(input.len() / 2 + 128);
    let mut encoder = XzEncoder::new_stream(out, stream);
    encoder
        .write_all(input)
        .map_err(|e| VeilPackError::compression(format!("encoding stream: {}", e)))?;
    encoder
        .finish()
        .map_err(|e| VeilPackError::compression(format!("finalizing stream: {}", e)))
}

/// Decompresses a complete XZ stream back into the original bytes.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, VeilPackError> {
    let stream = Stream::new_stream_decoder(DECODER_MEMLIMIT, 0)
        .map_err(|e| VeilPackError::decompression(format!("initializing decoder: {}", e)))?;

    let mut decoder = XzDecoder::new_stream(Vec::new(), stream);
    decoder
        .write_all(input)
        .map_err(|e| VeilPackError::decompression(format!("decoding stream: {}", e)))?;
    decoder
        .finish()
        .map_err(|e| VeilPackError::decompression(format!("finalizing stream: {}", e)))
}
