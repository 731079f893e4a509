//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq, ConstantTimeLess};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// This function runs in constant time regardless of the slice contents
/// (the lengths are not secret).
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Constant-time `a < b` over bytes
pub fn ct_lt(a: u8, b: u8) -> Choice {
    a.ct_lt(&b)
}

/// Checks, without early exit, that every byte of `data` selected by `active`
/// equals `expected`
///
/// `active` is called once per byte with the byte's index and decides whether
/// that byte takes part in the comparison. Bytes that do not take part are still
/// read, so the running time depends only on `data.len()`.
pub fn ct_all_equal<F>(data: &[u8], expected: u8, mut active: F) -> Choice
where
    F: FnMut(usize) -> Choice,
{
    let mut ok = Choice::from(1u8);
    for (i, byte) in data.iter().enumerate() {
        let in_window = active(i);
        let matches = byte.ct_eq(&expected);
        // outside the window every byte counts as a match
        ok &= matches | !in_window;
    }
    ok
}

/// XOR `src` into `dst` byte by byte
///
/// # Panics
///
/// Panics if the slices differ in length; callers always pass whole blocks.
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    assert_eq!(dst.len(), src.len());
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}
