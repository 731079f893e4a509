use rijndael_algorithms::{KeySize, ModeKind, Nonce, PaddingScheme};

fn main() {
    // IVs and counter blocks are sized at the type level
    let iv = Nonce::<16>::new([0x42; 16]);
    println!("IV: {:?}", iv);

    // Key sizes carry their schedule parameters
    for size in KeySize::ALL {
        println!(
            "{}: {}-byte key, {} round keys, {}-byte schedule",
            size,
            size.key_len(),
            size.round_keys(),
            size.schedule_len()
        );
    }

    // Mode properties are known without building a cipher
    for mode in [ModeKind::Ecb, ModeKind::Cbc, ModeKind::Ctr] {
        println!(
            "{}: padding {}, IV {}, parallel encrypt {}",
            mode,
            mode.requires_padding(),
            mode.requires_iv(),
            mode.encrypt_parallelizable()
        );
    }

    // PKCS#5 is only defined for 8-byte blocks
    println!("PKCS#5 with AES: {:?}", PaddingScheme::Pkcs5.check_block_size(16).err());
}
