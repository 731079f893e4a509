// This example sticks to the in-place APIs, which need neither std nor an
// allocator, even though it's compiled with std available for the demo output
#![cfg_attr(not(feature = "std"), no_std)]

use rijndael_algorithms::{
    AnsiX923, Aes, BlockCipher, Cbc, Ctr, Ecb, Error, Nonce, Padding, Pkcs7,
};

const MESSAGE: &[u8] = b"Rijndael in no_std!";

// Pad into a fixed buffer, encrypt with CBC, decrypt and strip the padding
fn cbc_example() -> Result<usize, Error> {
    let cipher = Aes::new(&[0x11; 16])?;
    let cbc = Cbc::new(cipher, &Nonce::new([0x22; 16]))?;

    let mut buf = [0u8; 32];
    buf[..MESSAGE.len()].copy_from_slice(MESSAGE);
    let padding = Pkcs7::AES;
    let written = padding.fill(&mut buf[MESSAGE.len()..])?;
    let total = MESSAGE.len() + written;

    cbc.encrypt_in_place(&mut buf[..total])?;
    cbc.decrypt_in_place(&mut buf[..total])?;

    let len = padding.unpad_len(&buf[..total])?;
    assert_eq!(&buf[..len], MESSAGE);
    Ok(total)
}

// CTR needs no padding and handles any length
fn ctr_example() -> Result<(), Error> {
    let counter0 = Nonce::new([0xf0; 16]);
    let mut ctr = Ctr::new(Aes::new(&[0x33; 32])?, &counter0)?;

    let mut buf = [0u8; 19];
    buf.copy_from_slice(MESSAGE);
    ctr.apply_keystream(&mut buf)?;

    ctr.reset();
    ctr.apply_keystream(&mut buf)?;
    assert_eq!(&buf[..], MESSAGE);
    Ok(())
}

// ECB over a single X9.23-padded block
fn ecb_example() -> Result<[u8; 16], Error> {
    let ecb = Ecb::new(Aes::new(&[0x44; 24])?);

    let mut block = [0u8; 16];
    block[..5].copy_from_slice(b"hello");
    AnsiX923::AES.fill(&mut block[5..])?;
    ecb.encrypt_in_place(&mut block)?;
    Ok(block)
}

fn main() {
    match cbc_example() {
        Ok(len) => println!("CBC round trip over {} padded bytes", len),
        Err(e) => println!("CBC example failed: {}", e),
    }

    match ctr_example() {
        Ok(()) => println!("CTR round trip succeeded"),
        Err(e) => println!("CTR example failed: {}", e),
    }

    match ecb_example() {
        Ok(block) => println!("ECB block: {:02x?}", block),
        Err(e) => println!("ECB example failed: {}", e),
    }

    let cipher = Aes::new(&[0u8; 16]).map(|c| c.name());
    println!("Cipher: {:?}", cipher);
}
