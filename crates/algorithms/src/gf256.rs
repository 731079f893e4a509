//! Arithmetic in GF(2^8) with the AES reduction polynomial x⁸ + x⁴ + x³ + x + 1
//!
//! Addition in this field is XOR and needs no helper. Multiplication is built
//! from [`xtime`] (multiply by x) and shift-and-add over the bits of the
//! multiplier, so both functions are total over all 256 inputs and need no
//! lookup tables.

/// Low byte of the reduction polynomial (x⁴ + x³ + x + 1)
pub const REDUCTION: u8 = 0x1B;

/// Multiply by {02} in GF(2⁸)
///
/// Shift left one bit; if the high bit was set before the shift, reduce by
/// XORing in [`REDUCTION`].
#[inline(always)]
pub const fn xtime(x: u8) -> u8 {
    let carry = x >> 7;
    (x << 1) ^ (carry * REDUCTION)
}

/// Multiply two bytes in GF(2⁸)
///
/// For every set bit `i` of `y`, XOR-accumulates `x·xⁱ`, computing the
/// successive powers with [`xtime`].
#[inline(always)]
pub const fn gmul(x: u8, y: u8) -> u8 {
    let mut acc = 0u8;
    let mut a = x;
    let mut b = y;
    while b != 0 {
        if b & 1 != 0 {
            acc ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    acc
}
