//! Property-based tests for the block cipher and its building blocks.

use proptest::prelude::*;
use rijndael_core::{
    add_round_key, aes_decrypt_block, aes_encrypt_block, expand_key, inv_mix_columns,
    inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows, sub_bytes, try_decrypt_block,
    try_encrypt_block, Aes128Key, Error, KEY_SCHEDULE_SIZE,
};

proptest! {
    #[test]
    fn decrypt_inverts_encrypt(key in any::<[u8; 16]>(), block in any::<[u8; 16]>()) {
        let key = Aes128Key::from(key);
        let ct = aes_encrypt_block(&block, &key);
        prop_assert_eq!(aes_decrypt_block(&ct, &key), block);
    }

    #[test]
    fn encrypt_inverts_decrypt(key in any::<[u8; 16]>(), block in any::<[u8; 16]>()) {
        let key = Aes128Key::from(key);
        let pt = aes_decrypt_block(&block, &key);
        prop_assert_eq!(aes_encrypt_block(&pt, &key), block);
    }

    #[test]
    fn round_transformations_have_inverses(block in any::<[u8; 16]>()) {
        let mut state = block;
        sub_bytes(&mut state);
        inv_sub_bytes(&mut state);
        prop_assert_eq!(state, block);

        shift_rows(&mut state);
        inv_shift_rows(&mut state);
        prop_assert_eq!(state, block);

        mix_columns(&mut state);
        inv_mix_columns(&mut state);
        prop_assert_eq!(state, block);
    }

    #[test]
    fn add_round_key_twice_is_identity(block in any::<[u8; 16]>(), round_key in any::<[u8; 16]>()) {
        let mut state = block;
        add_round_key(&mut state, &round_key);
        add_round_key(&mut state, &round_key);
        prop_assert_eq!(state, block);
    }

    #[test]
    fn key_schedule_is_deterministic(key in any::<[u8; 16]>()) {
        let first = expand_key(&Aes128Key::from(key)).to_bytes();
        let second = expand_key(&Aes128Key::from(key)).to_bytes();
        prop_assert_eq!(first.len(), KEY_SCHEDULE_SIZE);
        prop_assert_eq!(first, second);
        prop_assert_eq!(&first[..16], &key[..]);
    }

    #[test]
    fn wrong_block_length_is_rejected(
        block in prop::collection::vec(any::<u8>(), 0..64),
        key in any::<[u8; 16]>(),
    ) {
        prop_assume!(block.len() != 16);
        let expected = Err(Error::InvalidLength { context: "block", expected: 16, actual: block.len() });
        prop_assert_eq!(try_encrypt_block(&block, &key), expected);
        prop_assert_eq!(try_decrypt_block(&block, &key), expected);
    }

    #[test]
    fn wrong_key_length_is_rejected(
        block in any::<[u8; 16]>(),
        key in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        prop_assume!(key.len() != 16);
        let expected = Err(Error::InvalidLength { context: "key", expected: 16, actual: key.len() });
        prop_assert_eq!(try_encrypt_block(&block, &key), expected);
        prop_assert_eq!(try_decrypt_block(&block, &key), expected);
    }
}
