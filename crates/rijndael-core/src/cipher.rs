//! AES-128 key schedule and block encryption/decryption.

use crate::block::{block_from_slice, Block, BLOCK_SIZE};
use crate::error::Result;
use crate::key::{Aes128Key, KeySchedule, KEY_SCHEDULE_SIZE, KEY_SIZE, ROUNDS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::tables::{sbox, R_CON};

/// Expands a 128-bit key into 11 round keys.
///
/// The schedule is generated one 4-byte word at a time. Every fourth word
/// (the first word of each round key) passes through RotWord, SubWord and the
/// round constant before being XORed with the word sixteen bytes back.
pub fn expand_key(key: &Aes128Key) -> KeySchedule {
    let mut bytes = [0u8; KEY_SCHEDULE_SIZE];
    bytes[..KEY_SIZE].copy_from_slice(&key.0);

    let mut generated = KEY_SIZE;
    let mut rcon_iter = 1;
    while generated < KEY_SCHEDULE_SIZE {
        let mut temp = [0u8; 4];
        temp.copy_from_slice(&bytes[generated - 4..generated]);

        if (generated / 4) % 4 == 0 {
            temp.rotate_left(1);
            for byte in temp.iter_mut() {
                *byte = sbox(*byte);
            }
            temp[0] ^= R_CON[rcon_iter];
            rcon_iter += 1;
        }

        for t in temp {
            bytes[generated] = bytes[generated - KEY_SIZE] ^ t;
            generated += 1;
        }
    }
    debug_assert_eq!(rcon_iter, ROUNDS + 1);

    let mut round_keys = [[0u8; BLOCK_SIZE]; ROUNDS + 1];
    for (round_key, chunk) in round_keys.iter_mut().zip(bytes.chunks_exact(BLOCK_SIZE)) {
        round_key.copy_from_slice(chunk);
    }
    log::trace!("expanded AES-128 key into {} round keys", round_keys.len());
    KeySchedule(round_keys)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &KeySchedule) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.round_key(0));

    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.round_key(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.round_key(ROUNDS));

    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &KeySchedule) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.round_key(ROUNDS));
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);

    for round in (1..ROUNDS).rev() {
        add_round_key(&mut state, round_keys.round_key(round));
        inv_mix_columns(&mut state);
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
    }

    add_round_key(&mut state, round_keys.round_key(0));

    state
}

/// Encrypts one block under `key`.
///
/// The key schedule is expanded for this call only and wiped when the call
/// returns.
pub fn aes_encrypt_block(plaintext: &Block, key: &Aes128Key) -> Block {
    let round_keys = expand_key(key);
    encrypt_block(plaintext, &round_keys)
}

/// Decrypts one block under `key`. Inverse of [`aes_encrypt_block`].
pub fn aes_decrypt_block(ciphertext: &Block, key: &Aes128Key) -> Block {
    let round_keys = expand_key(key);
    decrypt_block(ciphertext, &round_keys)
}

/// Slice form of [`aes_encrypt_block`].
///
/// Fails with [`Error::InvalidLength`](crate::Error::InvalidLength) unless
/// both `plaintext` and `key` are exactly 16 bytes.
pub fn try_encrypt_block(plaintext: &[u8], key: &[u8]) -> Result<Block> {
    let block = block_from_slice(plaintext)?;
    let key = Aes128Key::try_from(key)?;
    Ok(aes_encrypt_block(&block, &key))
}

/// Slice form of [`aes_decrypt_block`], with the same length checks as
/// [`try_encrypt_block`].
pub fn try_decrypt_block(ciphertext: &[u8], key: &[u8]) -> Result<Block> {
    let block = block_from_slice(ciphertext)?;
    let key = Aes128Key::try_from(key)?;
    Ok(aes_decrypt_block(&block, &key))
}
