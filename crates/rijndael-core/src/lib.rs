//! AES-128 (Rijndael) single-block encryption and decryption.
//!
//! This crate mirrors the FIPS-197 specification for a 128-bit key and
//! provides:
//! - The S-box, inverse S-box and round-constant tables.
//! - The four round transformations and their inverses.
//! - Key schedule expansion into eleven round keys.
//! - Single-block encryption and decryption, either from a key or from an
//!   already expanded schedule, plus length-checked slice variants.
//!
//! Modes of operation, padding and multi-block processing are left to the
//! caller. The implementation aims for clarity and testability rather than
//! constant-time guarantees; it should not be treated as side-channel
//! hardened.
//!
//! ```
//! use rijndael_core::{aes_decrypt_block, aes_encrypt_block, Aes128Key};
//!
//! let key = Aes128Key::from([0u8; 16]);
//! let ciphertext = aes_encrypt_block(&[0u8; 16], &key);
//! assert_eq!(&ciphertext[..4], &[0x66, 0xe9, 0x4b, 0xd4]);
//! assert_eq!(aes_decrypt_block(&ciphertext, &key), [0u8; 16]);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
mod key;
mod round;
mod tables;

pub use crate::block::{block_from_slice, xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{
    aes_decrypt_block, aes_encrypt_block, decrypt_block, encrypt_block, expand_key,
    try_decrypt_block, try_encrypt_block,
};
pub use crate::error::{Error, Result};
pub use crate::key::{Aes128Key, KeySchedule, KEY_SCHEDULE_SIZE, KEY_SIZE, ROUNDS};
pub use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes, xtime,
};
pub use crate::tables::{inv_sbox, sbox, INV_SBOX, R_CON, SBOX};
