//! Padding schemes used through the engine and the mode primitives

use rijndael_algorithms::{AnsiX923, Padding, PaddingScheme, Pkcs5, Pkcs7};
use rijndael_symmetric::{AesCipher, CipherConfig, Error, KeySize, ModeKind};
use rijndael_tests::seeded_bytes;

const KEY: [u8; 32] = [0x5a; 32];
const IV: [u8; 16] = [0xa5; 16];

fn engine(mode: ModeKind, padding: PaddingScheme) -> AesCipher {
    let config = CipherConfig::new(KeySize::Aes256)
        .with_mode(mode)
        .with_padding(padding);
    let iv = mode.requires_iv().then_some(&IV[..]);
    AesCipher::new(config, &KEY, iv).unwrap()
}

#[test]
fn test_padded_length_for_every_message_length() {
    for padding in [PaddingScheme::Pkcs7, PaddingScheme::AnsiX923] {
        for mode in [ModeKind::Ecb, ModeKind::Cbc] {
            let mut cipher = engine(mode, padding);
            for len in 0..=48usize {
                let ct = cipher.encrypt(&seeded_bytes(len as u64, len)).unwrap();
                assert_eq!(ct.len(), (len / 16 + 1) * 16, "{} {} len {}", mode, padding, len);
            }
        }
    }
}

#[test]
fn test_ctr_with_padding_still_round_trips() {
    let mut cipher = engine(ModeKind::Ctr, PaddingScheme::Pkcs7);
    let message = seeded_bytes(7, 21);

    let ct = cipher.encrypt(&message).unwrap();
    assert_eq!(ct.len(), 32);
    assert_eq!(cipher.decrypt(&ct).unwrap(), message);
}

#[test]
fn test_every_last_byte_corruption_fails_identically() {
    let message = seeded_bytes(11, 20);

    for padding in [PaddingScheme::Pkcs7, PaddingScheme::AnsiX923] {
        let mut cipher = engine(ModeKind::Cbc, padding);
        let ct = cipher.encrypt(&message).unwrap();
        let mut failures = Vec::new();

        // Flipping bits of the second-to-last block changes the final
        // plaintext block's bytes one for one under CBC.
        for delta in 1..=255u8 {
            let mut tampered = ct.clone();
            tampered[ct.len() - 17] ^= delta;
            match cipher.decrypt(&tampered) {
                Ok(pt) => assert_ne!(pt, message),
                Err(err) => failures.push(err),
            }
        }

        assert!(!failures.is_empty());
        for err in &failures {
            assert_eq!(err, &Error::DecryptionFailed { context: "decryption" });
        }
    }
}

#[test]
fn test_scheme_dispatch_matches_concrete_types() {
    let data = seeded_bytes(3, 13);

    assert_eq!(PaddingScheme::Pkcs7.pad(16, &data).unwrap(), Pkcs7::AES.pad(&data).unwrap());
    assert_eq!(PaddingScheme::AnsiX923.pad(16, &data).unwrap(), AnsiX923::AES.pad(&data).unwrap());
    assert_eq!(PaddingScheme::Pkcs5.pad(8, &data).unwrap(), Pkcs5::new().pad(&data).unwrap());
    assert_eq!(PaddingScheme::None.pad(16, &data).unwrap(), data);
}

#[test]
fn test_pkcs5_is_rejected_for_aes() {
    assert!(PaddingScheme::Pkcs5.check_block_size(16).is_err());
    assert!(PaddingScheme::Pkcs5.check_block_size(8).is_ok());

    let config = CipherConfig::new(KeySize::Aes128).with_padding(PaddingScheme::Pkcs5);
    assert!(matches!(
        AesCipher::new(config, &KEY[..16], Some(&IV)),
        Err(Error::InvalidParameter { .. })
    ));
}

#[test]
fn test_pkcs5_pads_to_eight_bytes() {
    let padded = Pkcs5::new().pad(b"hello").unwrap();
    assert_eq!(padded, b"hello\x03\x03\x03");
    assert_eq!(Pkcs5::new().unpad(&padded).unwrap(), b"hello");
}

#[test]
fn test_unpadded_mode_requires_alignment() {
    let mut cipher = engine(ModeKind::Cbc, PaddingScheme::None);
    assert!(matches!(
        cipher.encrypt(&[0u8; 17]),
        Err(Error::InvalidLength { .. })
    ));
    assert_eq!(cipher.encrypt(&[]).unwrap(), Vec::<u8>::new());
}
