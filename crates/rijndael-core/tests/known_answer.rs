//! Known-answer tests against published AES-128 vectors.

use rijndael_core::{
    aes_decrypt_block, aes_encrypt_block, decrypt_block, encrypt_block, expand_key,
    try_decrypt_block, try_encrypt_block, Aes128Key, Block,
};

struct Vector {
    name: &'static str,
    key: &'static str,
    plaintext: &'static str,
    ciphertext: &'static str,
}

const VECTORS: &[Vector] = &[
    Vector {
        name: "FIPS-197 appendix C.1",
        key: "000102030405060708090a0b0c0d0e0f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "69c4e0d86a7b0430d8cdb78070b4c55a",
    },
    Vector {
        name: "FIPS-197 appendix B",
        key: "2b7e151628aed2a6abf7158809cf4f3c",
        plaintext: "3243f6a8885a308d313198a2e0370734",
        ciphertext: "3925841d02dc09fbdc118597196a0b32",
    },
    Vector {
        name: "all-zero key and block",
        key: "00000000000000000000000000000000",
        plaintext: "00000000000000000000000000000000",
        ciphertext: "66e94bd4ef8a2c3b884cfa59ca342b2e",
    },
    Vector {
        name: "SP 800-38A F.1.1 block 1",
        key: "2b7e151628aed2a6abf7158809cf4f3c",
        plaintext: "6bc1bee22e409f96e93d7e117393172a",
        ciphertext: "3ad77bb40d7a3660a89ecaf32466ef97",
    },
    Vector {
        name: "SP 800-38A F.1.1 block 2",
        key: "2b7e151628aed2a6abf7158809cf4f3c",
        plaintext: "ae2d8a571e03ac9c9eb76fac45af8e51",
        ciphertext: "f5d3d58503b9699de785895a96fdbaaf",
    },
];

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn block(hex_str: &str) -> Block {
    let bytes = hex::decode(hex_str).unwrap();
    bytes.try_into().unwrap()
}

#[test]
fn encrypt_matches_published_vectors() {
    init_logging();
    for v in VECTORS {
        let key = Aes128Key::from(block(v.key));
        let ct = aes_encrypt_block(&block(v.plaintext), &key);
        assert_eq!(hex::encode(ct), v.ciphertext, "{}", v.name);
    }
}

#[test]
fn decrypt_matches_published_vectors() {
    init_logging();
    for v in VECTORS {
        let key = Aes128Key::from(block(v.key));
        let pt = aes_decrypt_block(&block(v.ciphertext), &key);
        assert_eq!(hex::encode(pt), v.plaintext, "{}", v.name);
    }
}

#[test]
fn pre_expanded_schedule_agrees_with_per_call_expansion() {
    init_logging();
    for v in VECTORS {
        let key = Aes128Key::from(block(v.key));
        let schedule = expand_key(&key);
        let pt = block(v.plaintext);
        let ct = encrypt_block(&pt, &schedule);
        assert_eq!(ct, aes_encrypt_block(&pt, &key), "{}", v.name);
        assert_eq!(decrypt_block(&ct, &schedule), pt, "{}", v.name);
    }
}

#[test]
fn slice_entry_points_accept_hex_decoded_input() {
    init_logging();
    for v in VECTORS {
        let key = hex::decode(v.key).unwrap();
        let pt = hex::decode(v.plaintext).unwrap();
        let ct = try_encrypt_block(&pt, &key).unwrap();
        assert_eq!(hex::encode(ct), v.ciphertext, "{}", v.name);
        assert_eq!(try_decrypt_block(&ct, &key).unwrap().to_vec(), pt, "{}", v.name);
    }
}

#[test]
fn zero_key_schedule_last_round_key() {
    let schedule = expand_key(&Aes128Key::from([0u8; 16]));
    assert_eq!(
        hex::encode(schedule.round_key(10)),
        "b4ef5bcb3e92e21123e951cf6f8f188e"
    );
}
