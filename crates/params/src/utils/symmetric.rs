//! Constants for the AES block cipher, its modes and padding schemes

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes, identical for every key size
pub const AES_BLOCK_SIZE: usize = 16;

/// AES word size in bytes
pub const AES_WORD_SIZE: usize = 4;

/// Number of round keys in an AES-128 schedule
pub const AES128_ROUND_KEYS: usize = 11;

/// Number of round keys in an AES-192 schedule
pub const AES192_ROUND_KEYS: usize = 13;

/// Number of round keys in an AES-256 schedule
pub const AES256_ROUND_KEYS: usize = 15;

/// Largest expanded key in bytes (AES-256: 15 round keys × 16 bytes)
pub const AES_MAX_SCHEDULE_SIZE: usize = AES256_ROUND_KEYS * AES_BLOCK_SIZE;

/// CBC initialization vector size in bytes
pub const AES_CBC_IV_SIZE: usize = AES_BLOCK_SIZE;

/// CTR initial counter block size in bytes
pub const AES_CTR_COUNTER_SIZE: usize = AES_BLOCK_SIZE;

/// The only block size PKCS#5 is defined for (the DES block)
pub const PKCS5_BLOCK_SIZE: usize = 8;

/// Largest block size a single-byte length marker can describe
pub const MAX_PADDING_BLOCK_SIZE: usize = 255;
