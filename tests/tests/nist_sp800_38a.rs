//! NIST SP 800-38A Appendix F and FIPS 197 known-answer tests
//!
//! Every example is run through the mode primitives directly and through the
//! configured engine with padding disabled, so both layers are pinned to the
//! published ciphertexts.

use rijndael_algorithms::{Aes, BlockCipher, Cbc, Ctr, Ecb, KeySchedule, Nonce};
use rijndael_symmetric::{AesCipher, CipherConfig, ModeKind, PaddingScheme};
use rijndael_tests::vectors::*;
use rijndael_tests::{unhex, unhex_block};

fn raw_config(vector: &ModeVector, mode: ModeKind) -> CipherConfig {
    CipherConfig::new(vector.key_size)
        .with_mode(mode)
        .with_padding(PaddingScheme::None)
}

#[test]
fn test_fips197_appendix_c() {
    for (key, pt, ct) in FIPS197_APPENDIX_C {
        let cipher = Aes::new(&unhex(key)).unwrap();
        let mut block = unhex_block(pt);

        cipher.encrypt_block(&mut block).unwrap();
        assert_eq!(hex::encode(block), ct, "{}", cipher.name());

        cipher.decrypt_block(&mut block).unwrap();
        assert_eq!(hex::encode(block), pt, "{}", cipher.name());
    }
}

#[test]
fn test_fips197_last_round_keys() {
    for (key, last) in FIPS197_LAST_ROUND_KEYS {
        let schedule = KeySchedule::expand(&unhex(key)).unwrap();
        let final_round = schedule.rounds() - 1;
        assert_eq!(hex::encode(schedule.round_key(final_round).unwrap()), last);
        assert_eq!(schedule.round_key(0).unwrap(), &unhex(key)[..16]);
    }
}

#[test]
fn test_ecb_vectors() {
    let plaintext = sp800_38a_plaintext();

    for vector in &ECB_VECTORS {
        let ecb = Ecb::new(Aes::new(&vector.key_bytes()).unwrap());
        let expected = vector.ciphertext_bytes();

        assert_eq!(ecb.encrypt(&plaintext).unwrap(), expected, "{}", vector.section);
        assert_eq!(ecb.decrypt(&expected).unwrap(), plaintext, "{}", vector.section);

        let mut engine = AesCipher::new(raw_config(vector, ModeKind::Ecb), &vector.key_bytes(), None).unwrap();
        assert_eq!(engine.encrypt(&plaintext).unwrap(), expected, "{}", vector.section);
        assert_eq!(engine.decrypt(&expected).unwrap(), plaintext, "{}", vector.section);
    }
}

#[test]
fn test_cbc_vectors() {
    let plaintext = sp800_38a_plaintext();
    let iv = unhex(SP800_38A_CBC_IV);

    for vector in &CBC_VECTORS {
        let cbc = Cbc::new(
            Aes::new(&vector.key_bytes()).unwrap(),
            &Nonce::from_slice(&iv).unwrap(),
        )
        .unwrap();
        let expected = vector.ciphertext_bytes();

        assert_eq!(cbc.encrypt(&plaintext).unwrap(), expected, "{}", vector.section);
        assert_eq!(cbc.decrypt(&expected).unwrap(), plaintext, "{}", vector.section);

        let mut engine =
            AesCipher::new(raw_config(vector, ModeKind::Cbc), &vector.key_bytes(), Some(&iv)).unwrap();
        assert_eq!(engine.encrypt(&plaintext).unwrap(), expected, "{}", vector.section);
        assert_eq!(engine.decrypt(&expected).unwrap(), plaintext, "{}", vector.section);
    }
}

#[test]
fn test_ctr_vectors() {
    let plaintext = sp800_38a_plaintext();
    let counter0 = unhex(SP800_38A_CTR_COUNTER);

    for vector in &CTR_VECTORS {
        let expected = vector.ciphertext_bytes();
        let mut ctr = Ctr::new(
            Aes::new(&vector.key_bytes()).unwrap(),
            &Nonce::from_slice(&counter0).unwrap(),
        )
        .unwrap();

        assert_eq!(ctr.encrypt(&plaintext).unwrap(), expected, "{}", vector.section);
        ctr.reset();
        assert_eq!(ctr.decrypt(&expected).unwrap(), plaintext, "{}", vector.section);

        let mut engine =
            AesCipher::new(raw_config(vector, ModeKind::Ctr), &vector.key_bytes(), Some(&counter0)).unwrap();
        assert_eq!(engine.encrypt(&plaintext).unwrap(), expected, "{}", vector.section);
        assert_eq!(engine.decrypt(&expected).unwrap(), plaintext, "{}", vector.section);
    }
}

#[test]
fn test_ctr_seek_reaches_each_vector_block() {
    let plaintext = sp800_38a_plaintext();
    let counter0 = unhex(SP800_38A_CTR_COUNTER);

    for vector in &CTR_VECTORS {
        let expected = vector.ciphertext_bytes();
        let mut ctr = Ctr::new(
            Aes::new(&vector.key_bytes()).unwrap(),
            &Nonce::from_slice(&counter0).unwrap(),
        )
        .unwrap();

        for index in (0..4usize).rev() {
            ctr.seek(index as u128);
            let mut block = plaintext[index * 16..(index + 1) * 16].to_vec();
            ctr.apply_keystream(&mut block).unwrap();
            assert_eq!(block, &expected[index * 16..(index + 1) * 16], "{} block {}", vector.section, index);
        }
    }
}

#[test]
fn test_truncated_ctr_message() {
    // CTR output for a prefix is the prefix of the full output
    let plaintext = sp800_38a_plaintext();
    let counter0 = unhex(SP800_38A_CTR_COUNTER);
    let vector = &CTR_VECTORS[0];
    let expected = vector.ciphertext_bytes();

    let mut engine = AesCipher::new(raw_config(vector, ModeKind::Ctr), &vector.key_bytes(), Some(&counter0)).unwrap();
    for len in [0usize, 1, 15, 17, 33, 63] {
        assert_eq!(engine.encrypt(&plaintext[..len]).unwrap(), &expected[..len]);
    }
}
