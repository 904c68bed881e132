//! AES round transformations.
//!
//! Every function mutates a [`Block`] in place. The block is read as four
//! columns of four bytes (`state[4 * col + row]`).

use crate::block::{xor_in_place, Block};
use crate::tables::{inv_sbox, sbox};

/// Multiplies `byte` by `x` (i.e. by 2) in GF(2^8), reducing by
/// `x^8 + x^4 + x^3 + x + 1`.
#[inline]
pub fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ 0x1b
    } else {
        shifted
    }
}

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` rotates left by `r` columns.
#[inline]
pub fn shift_rows(state: &mut Block) {
    rotate_rows(state, |col, row| (col + row) % 4);
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r`.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    rotate_rows(state, |col, row| (col + 4 - row) % 4);
}

/// Rewrites rows 1..=3, pulling column `col` of row `row` from column
/// `source(col, row)`.
fn rotate_rows(state: &mut Block, source: impl Fn(usize, usize) -> usize) {
    for row in 1..4 {
        let mut tmp = [0u8; 4];
        for (col, slot) in tmp.iter_mut().enumerate() {
            *slot = state[source(col, row) * 4 + row];
        }
        for (col, byte) in tmp.into_iter().enumerate() {
            state[col * 4 + row] = byte;
        }
    }
}

fn mix_single_column(col: &mut [u8]) {
    let t = col[0] ^ col[1] ^ col[2] ^ col[3];
    let first = col[0];
    col[0] ^= t ^ xtime(col[0] ^ col[1]);
    col[1] ^= t ^ xtime(col[1] ^ col[2]);
    col[2] ^= t ^ xtime(col[2] ^ col[3]);
    col[3] ^= t ^ xtime(col[3] ^ first);
}

// InvMixColumns factors as MixColumns after multiplying each column by
// {04}x^2 + {05}; this is the second factor.
fn unmix_single_column(col: &mut [u8]) {
    let u = xtime(xtime(col[0] ^ col[2]));
    let v = xtime(xtime(col[1] ^ col[3]));
    col[0] ^= u;
    col[1] ^= v;
    col[2] ^= u;
    col[3] ^= v;
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for column in state.chunks_exact_mut(4) {
        mix_single_column(column);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for column in state.chunks_exact_mut(4) {
        unmix_single_column(column);
    }
    mix_columns(state);
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
