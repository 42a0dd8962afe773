//! Keystream cipher: keyed bit-rotation + XOR byte transform.
//!
//! This module implements the obfuscation layer applied after compression.
//! A passphrase is folded into two 32-bit keys, and each byte is transformed
//! by a fixed sequence of 8-bit rotates and position-dependent XOR masks.
//!
//! ## Properties
//!
//! - The transform at index `i` depends only on `(i, key1, key2)`, never on
//!   neighboring bytes or running state, so every byte is an independent
//!   bijection and encrypt/decrypt are exact inverses.
//! - Length-preserving and infallible: pure arithmetic over the buffer.
//!
//! The key seeds, fold multipliers, rotate amounts, and shift offsets are
//! format constants; data produced with one implementation must decode with
//! any other, so they cannot change.

/// Initial value of `key1` before the passphrase fold.
const KEY1_SEED: u32 = 0x1EFF_2FE1;

/// Initial value of `key2` before the passphrase fold.
const KEY2_SEED: u32 = 0x1E00_A2E3;

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// The two 32-bit keys derived from a passphrase.
///
/// Derivation is a left-to-right fold over the passphrase bytes; order
/// matters. The keys are fixed after derivation and read per byte index via
/// position-dependent shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySchedule {
    key1: u32,
    key2: u32,
}

impl KeySchedule {
    /// Derives the key pair from a passphrase.
    pub fn derive(passphrase: &str) -> Self {
        let mut key1 = KEY1_SEED;
        let mut key2 = KEY2_SEED;
        for &c in passphrase.as_bytes() {
            key1 = key1.wrapping_mul(33) ^ u32::from(c);
            key2 = key2.wrapping_mul(31).wrapping_add(u32::from(c));
        }
        Self { key1, key2 }
    }

    /// XOR mask from `key1` for byte index `i`.
    fn mask1(&self, i: usize) -> u8 {
        (self.key1 >> (i % 32)) as u8
    }

    /// XOR mask from `key2` for byte index `i` (offset by 5 positions).
    fn mask2(&self, i: usize) -> u8 {
        (self.key2 >> ((i + 5) % 32)) as u8
    }

    /// Encrypts a single byte at index `i`.
    ///
    /// Order is fixed: rotl 3, XOR `mask1`, rotr 2, XOR `mask2`.
    pub fn encrypt_byte(&self, byte: u8, i: usize) -> u8 {
        let byte = byte.rotate_left(3) ^ self.mask1(i);
        byte.rotate_right(2) ^ self.mask2(i)
    }

    /// Decrypts a single byte at index `i`.
    ///
    /// Exact inverse of [`encrypt_byte`](Self::encrypt_byte): each step is
    /// undone in reverse order.
    pub fn decrypt_byte(&self, byte: u8, i: usize) -> u8 {
        let byte = (byte ^ self.mask2(i)).rotate_left(2);
        (byte ^ self.mask1(i)).rotate_right(3)
    }
}

/// Transforms `data` in place under the given passphrase and direction.
pub fn transform(data: &mut [u8], passphrase: &str, direction: Direction) {
    let keys = KeySchedule::derive(passphrase);
    match direction {
        Direction::Encrypt => {
            for (i, byte) in data.iter_mut().enumerate() {
                *byte = keys.encrypt_byte(*byte, i);
            }
        }
        Direction::Decrypt => {
            for (i, byte) in data.iter_mut().enumerate() {
                *byte = keys.decrypt_byte(*byte, i);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_passphrase_yields_seeds() {
        let keys = KeySchedule::derive("");
        assert_eq!(keys.key1, KEY1_SEED);
        assert_eq!(keys.key2, KEY2_SEED);
    }

    #[test]
    fn test_derivation_deterministic() {
        let a = KeySchedule::derive("System.Reflection");
        let b = KeySchedule::derive("System.Reflection");
        assert_eq!(a, b);
    }

    #[test]
    fn test_derivation_diverges_between_passphrases() {
        let a = KeySchedule::derive("A");
        let b = KeySchedule::derive("B");
        assert_ne!(a, b);
    }

    #[test]
    fn test_derivation_is_order_sensitive() {
        let ab = KeySchedule::derive("ab");
        let ba = KeySchedule::derive("ba");
        assert_ne!(ab, ba);
    }

    #[test]
    fn test_known_answer_zero_byte() {
        // Empty passphrase, byte 0x00 at index 0:
        //   rotl3(0x00) = 0x00
        //   ^ (key1 >> 0) as u8 = 0xE1       -> 0xE1
        //   rotr2(0xE1)                      -> 0x78
        //   ^ (key2 >> 5) as u8 = 0x17       -> 0x6F
        let keys = KeySchedule::derive("");
        assert_eq!(keys.encrypt_byte(0x00, 0), 0x6F);
        assert_eq!(keys.decrypt_byte(0x6F, 0), 0x00);
    }

    #[test]
    fn test_byte_round_trip_all_values() {
        let keys = KeySchedule::derive("System.Reflection");
        for i in 0..64 {
            for value in 0..=255u8 {
                let enc = keys.encrypt_byte(value, i);
                assert_eq!(keys.decrypt_byte(enc, i), value);
            }
        }
    }

    #[test]
    fn test_buffer_round_trip() {
        let original: Vec<u8> = (0..=255).cycle().take(4096).collect();
        let mut data = original.clone();

        transform(&mut data, "System.Reflection", Direction::Encrypt);
        assert_ne!(data, original);

        transform(&mut data, "System.Reflection", Direction::Decrypt);
        assert_eq!(data, original);
    }

    #[test]
    fn test_empty_buffer_is_noop() {
        let mut data: Vec<u8> = Vec::new();
        transform(&mut data, "System.Reflection", Direction::Encrypt);
        assert!(data.is_empty());
    }

    #[test]
    fn test_wrong_passphrase_does_not_round_trip() {
        let original = b"not so secret payload".to_vec();
        let mut data = original.clone();

        transform(&mut data, "right-key", Direction::Encrypt);
        transform(&mut data, "wrong-key", Direction::Decrypt);
        assert_ne!(data, original);
    }

    #[test]
    fn test_per_byte_independence() {
        // Changing bytes at other indices must not affect a target byte's
        // ciphertext.
        let passphrase = "System.Reflection";
        let target = 17;

        let mut a = vec![0xAAu8; 40];
        let mut b = vec![0x55u8; 40];
        a[target] = 0x7F;
        b[target] = 0x7F;

        transform(&mut a, passphrase, Direction::Encrypt);
        transform(&mut b, passphrase, Direction::Encrypt);
        assert_eq!(a[target], b[target]);
    }

    #[test]
    fn test_shift_offsets_wrap_past_32() {
        // Indices 27..37 exercise the (i + 5) % 32 wraparound; the round
        // trip must hold across the boundary.
        let keys = KeySchedule::derive("wrap");
        for i in 27..37 {
            let enc = keys.encrypt_byte(0xC3, i);
            assert_eq!(keys.decrypt_byte(enc, i), 0xC3);
        }
    }
}
