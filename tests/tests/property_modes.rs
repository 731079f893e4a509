use proptest::prelude::*;
use rijndael_algorithms::{Aes, Cbc, Ctr, Ecb, KeySize, Nonce, PaddingScheme};
use rijndael_symmetric::{AesCipher, CipherConfig, ModeKind};

fn any_key_size() -> impl Strategy<Value = KeySize> {
    prop_oneof![Just(KeySize::Aes128), Just(KeySize::Aes192), Just(KeySize::Aes256)]
}

fn any_mode() -> impl Strategy<Value = ModeKind> {
    prop_oneof![Just(ModeKind::Ecb), Just(ModeKind::Cbc), Just(ModeKind::Ctr)]
}

fn any_padding() -> impl Strategy<Value = PaddingScheme> {
    prop_oneof![Just(PaddingScheme::Pkcs7), Just(PaddingScheme::AnsiX923)]
}

/// Generate block-aligned data (multiples of 16 bytes)
fn block_aligned_data() -> impl Strategy<Value = Vec<u8>> {
    (0usize..=16).prop_flat_map(|blocks| prop::collection::vec(any::<u8>(), blocks * 16))
}

proptest! {
    #[test]
    fn engine_round_trip(
        size in any_key_size(),
        mode in any_mode(),
        padding in any_padding(),
        key in any::<[u8; 32]>(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 0..300),
    ) {
        let config = CipherConfig::new(size).with_mode(mode).with_padding(padding);
        let iv = mode.requires_iv().then_some(&iv[..]);
        let mut cipher = AesCipher::new(config, &key[..size.key_len()], iv).unwrap();

        let ct = cipher.encrypt(&data).unwrap();
        prop_assert_eq!(ct.len() % 16, 0);
        prop_assert!(ct.len() > data.len());
        prop_assert_eq!(cipher.decrypt(&ct).unwrap(), data);
    }

    #[test]
    fn ctr_is_length_preserving(
        key in any::<[u8; 16]>(),
        counter in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 0..300),
    ) {
        let config = CipherConfig::new(KeySize::Aes128)
            .with_mode(ModeKind::Ctr)
            .with_padding(PaddingScheme::None);
        let mut cipher = AesCipher::new(config, &key, Some(&counter)).unwrap();

        let ct = cipher.encrypt(&data).unwrap();
        prop_assert_eq!(ct.len(), data.len());
        prop_assert_eq!(cipher.decrypt(&ct).unwrap(), data);
    }

    #[test]
    fn ctr_split_matches_whole(
        key in any::<[u8; 16]>(),
        counter in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 0..200),
        split in any::<prop::sample::Index>(),
    ) {
        let nonce = Nonce::new(counter);
        let mut whole = Ctr::new(Aes::new(&key).unwrap(), &nonce).unwrap();
        let expected = whole.encrypt(&data).unwrap();

        let at = split.index(data.len() + 1);
        let mut pieces = Ctr::new(Aes::new(&key).unwrap(), &nonce).unwrap();
        let mut buf = data.clone();
        let (head, tail) = buf.split_at_mut(at);
        pieces.apply_keystream(head).unwrap();
        pieces.apply_keystream(tail).unwrap();
        prop_assert_eq!(buf, expected);
    }

    #[test]
    fn ecb_cbc_in_place_round_trip(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        data in block_aligned_data(),
    ) {
        let ecb = Ecb::new(Aes::new(&key).unwrap());
        let mut buf = data.clone();
        ecb.encrypt_in_place(&mut buf).unwrap();
        ecb.decrypt_in_place(&mut buf).unwrap();
        prop_assert_eq!(&buf, &data);

        let cbc = Cbc::new(Aes::new(&key).unwrap(), &Nonce::new(iv)).unwrap();
        cbc.encrypt_in_place(&mut buf).unwrap();
        cbc.decrypt_in_place(&mut buf).unwrap();
        prop_assert_eq!(&buf, &data);
    }

    #[test]
    fn cbc_ciphertext_bit_flip_never_returns_plaintext(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 1..100),
        bit in 0usize..8,
        pos in any::<prop::sample::Index>(),
    ) {
        let config = CipherConfig::new(KeySize::Aes128).with_mode(ModeKind::Cbc);
        let mut cipher = AesCipher::new(config, &key, Some(&iv)).unwrap();
        let mut ct = cipher.encrypt(&data).unwrap();

        let idx = pos.index(ct.len());
        ct[idx] ^= 1 << bit;
        match cipher.decrypt(&ct) {
            Ok(pt) => prop_assert_ne!(pt, data),
            Err(err) => prop_assert!(err.is_decryption_failure()),
        }
    }

    #[test]
    fn padding_round_trip(
        block_size in 1usize..=255,
        data in prop::collection::vec(any::<u8>(), 0..600),
        scheme in any_padding(),
    ) {
        let padded = scheme.pad(block_size, &data).unwrap();
        prop_assert_eq!(padded.len() % block_size, 0);
        prop_assert!(padded.len() > data.len() && padded.len() <= data.len() + block_size);
        prop_assert_eq!(scheme.unpad_len(block_size, &padded).unwrap(), data.len());
    }
}
