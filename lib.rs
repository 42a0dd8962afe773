//! # VeilPack - Binary Compression and Obfuscation Library
//!
//! VeilPack turns an arbitrary binary file (typically an executable image)
//! into an opaque blob: the input is compressed with XZ (LZMA2, preset 5,
//! CRC64 check) and the compressed bytes are obfuscated with a keyed
//! bit-rotation/XOR keystream cipher. Both directions are implemented, so a
//! packed blob can be restored bit for bit.
//!
//! ## Features
//!
//! - **XZ compression**: LZMA2 streaming codec with CRC64 stream integrity
//! - **Keystream cipher**: passphrase-keyed per-byte rotate/XOR bijection
//! - **Symmetric pipeline**: pack and unpack are exact inverses
//! - **Bare blob format**: no container header, magic, or stored metadata
//!
//! ## Quick Start
//!
//! ```no_run
//! use veilpack::pack::Packer;
//!
//! fn main() -> anyhow::Result<()> {
//!     let packer = Packer::new("System.Reflection");
//!
//!     let blob = packer.pack(b"\x7fELF...rest of the binary")?;
//!     let restored = packer.unpack(&blob)?;
//!     Ok(())
//! }
//! ```
//!
//! The cipher is a custom reversible transform, not an approved encryption
//! algorithm; it obfuscates, it does not protect against a determined
//! attacker.

pub mod cipher;
pub mod compress;
pub mod config;
pub mod error;
pub mod pack;

// Re-export common types for convenience
pub use error::VeilPackError;
