//! NIST SP 800-38A and FIPS 197 known-answer vectors

use rijndael_algorithms::KeySize;

/// The four plaintext blocks shared by every SP 800-38A example
pub const SP800_38A_PLAINTEXT: [&str; 4] = [
    "6bc1bee22e409f96e93d7e117393172a",
    "ae2d8a571e03ac9c9eb76fac45af8e51",
    "30c81c46a35ce411e5fbc1191a0a52ef",
    "f69f2445df4f9b17ad2b417be66c3710",
];

/// IV used by the CBC examples (F.2)
pub const SP800_38A_CBC_IV: &str = "000102030405060708090a0b0c0d0e0f";

/// Initial counter block used by the CTR examples (F.5)
pub const SP800_38A_CTR_COUNTER: &str = "f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff";

/// One SP 800-38A example: a key and the four ciphertext blocks it produces
#[derive(Debug, Clone, Copy)]
pub struct ModeVector {
    /// Section of SP 800-38A Appendix F
    pub section: &'static str,
    /// Key size under test
    pub key_size: KeySize,
    /// Cipher key, hex
    pub key: &'static str,
    /// Expected ciphertext blocks, hex
    pub ciphertext: [&'static str; 4],
}

/// Cipher keys for AES-128, AES-192 and AES-256
pub const SP800_38A_KEYS: [(KeySize, &str); 3] = [
    (KeySize::Aes128, "2b7e151628aed2a6abf7158809cf4f3c"),
    (KeySize::Aes192, "8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b"),
    (KeySize::Aes256, "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4"),
];

/// F.1 ECB examples
pub const ECB_VECTORS: [ModeVector; 3] = [
    ModeVector {
        section: "F.1.1 ECB-AES128",
        key_size: KeySize::Aes128,
        key: SP800_38A_KEYS[0].1,
        ciphertext: [
            "3ad77bb40d7a3660a89ecaf32466ef97",
            "f5d3d58503b9699de785895a96fdbaaf",
            "43b1cd7f598ece23881b00e3ed030688",
            "7b0c785e27e8ad3f8223207104725dd4",
        ],
    },
    ModeVector {
        section: "F.1.3 ECB-AES192",
        key_size: KeySize::Aes192,
        key: SP800_38A_KEYS[1].1,
        ciphertext: [
            "bd334f1d6e45f25ff712a214571fa5cc",
            "974104846d0ad3ad7734ecb3ecee4eef",
            "ef7afd2270e2e60adce0ba2face6444e",
            "9a4b41ba738d6c72fb16691603c18e0e",
        ],
    },
    ModeVector {
        section: "F.1.5 ECB-AES256",
        key_size: KeySize::Aes256,
        key: SP800_38A_KEYS[2].1,
        ciphertext: [
            "f3eed1bdb5d2a03c064b5a7e3db181f8",
            "591ccb10d410ed26dc5ba74a31362870",
            "b6ed21b99ca6f4f9f153e7b1beafed1d",
            "23304b7a39f9f3ff067d8d8f9e24ecc7",
        ],
    },
];

/// F.2 CBC examples
pub const CBC_VECTORS: [ModeVector; 3] = [
    ModeVector {
        section: "F.2.1 CBC-AES128",
        key_size: KeySize::Aes128,
        key: SP800_38A_KEYS[0].1,
        ciphertext: [
            "7649abac8119b246cee98e9b12e9197d",
            "5086cb9b507219ee95db113a917678b2",
            "73bed6b8e3c1743b7116e69e22229516",
            "3ff1caa1681fac09120eca307586e1a7",
        ],
    },
    ModeVector {
        section: "F.2.3 CBC-AES192",
        key_size: KeySize::Aes192,
        key: SP800_38A_KEYS[1].1,
        ciphertext: [
            "4f021db243bc633d7178183a9fa071e8",
            "b4d9ada9ad7dedf4e5e738763f69145a",
            "571b242012fb7ae07fa9baac3df102e0",
            "08b0e27988598881d920a9e64f5615cd",
        ],
    },
    ModeVector {
        section: "F.2.5 CBC-AES256",
        key_size: KeySize::Aes256,
        key: SP800_38A_KEYS[2].1,
        ciphertext: [
            "f58c4c04d6e5f1ba779eabfb5f7bfbd6",
            "9cfc4e967edb808d679f777bc6702c7d",
            "39f23369a9d9bacfa530e26304231461",
            "b2eb05e2c39be9fcda6c19078c6a9d1b",
        ],
    },
];

/// F.5 CTR examples
pub const CTR_VECTORS: [ModeVector; 3] = [
    ModeVector {
        section: "F.5.1 CTR-AES128",
        key_size: KeySize::Aes128,
        key: SP800_38A_KEYS[0].1,
        ciphertext: [
            "874d6191b620e3261bef6864990db6ce",
            "9806f66b7970fdff8617187bb9fffdff",
            "5ae4df3edbd5d35e5b4f09020db03eab",
            "1e031dda2fbe03d1792170a0f3009cee",
        ],
    },
    ModeVector {
        section: "F.5.3 CTR-AES192",
        key_size: KeySize::Aes192,
        key: SP800_38A_KEYS[1].1,
        ciphertext: [
            "1abc932417521ca24f2b0459fe7e6e0b",
            "090339ec0aa6faefd5ccc2c6f4ce8e94",
            "1e36b26bd1ebc670d1bd1d665620abf7",
            "4f78a7f6d29809585a97daec58c6b050",
        ],
    },
    ModeVector {
        section: "F.5.5 CTR-AES256",
        key_size: KeySize::Aes256,
        key: SP800_38A_KEYS[2].1,
        ciphertext: [
            "601ec313775789a5b7a7f504bbf3d228",
            "f443e3ca4d62b59aca84e990cacaf5c5",
            "2b0930daa23de94ce87017ba2d84988d",
            "dfc9c58db67aada613c2dd08457941a6",
        ],
    },
];

/// FIPS 197 Appendix C: (key, plaintext, ciphertext)
pub const FIPS197_APPENDIX_C: [(&str, &str, &str); 3] = [
    (
        "000102030405060708090a0b0c0d0e0f",
        "00112233445566778899aabbccddeeff",
        "69c4e0d86a7b0430d8cdb78070b4c55a",
    ),
    (
        "000102030405060708090a0b0c0d0e0f1011121314151617",
        "00112233445566778899aabbccddeeff",
        "dda97ca4864cdfe06eaf70a0ec0d7191",
    ),
    (
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        "00112233445566778899aabbccddeeff",
        "8ea2b7ca516745bfeafc49904b496089",
    ),
];

/// FIPS 197 Appendix A: (key, last round key)
pub const FIPS197_LAST_ROUND_KEYS: [(&str, &str); 3] = [
    ("2b7e151628aed2a6abf7158809cf4f3c", "d014f9a8c9ee2589e13f0cc8b6630ca6"),
    ("8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b", "e98ba06f448c773c8ecc720401002202"),
    (
        "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        "fe4890d1e6188d0b046df344706c631e",
    ),
];

/// The four SP 800-38A plaintext blocks as one buffer
pub fn sp800_38a_plaintext() -> Vec<u8> {
    crate::unhex(&SP800_38A_PLAINTEXT.concat())
}

impl ModeVector {
    /// Expected ciphertext as one buffer
    pub fn ciphertext_bytes(&self) -> Vec<u8> {
        crate::unhex(&self.ciphertext.concat())
    }

    /// Key bytes
    pub fn key_bytes(&self) -> Vec<u8> {
        crate::unhex(self.key)
    }
}
