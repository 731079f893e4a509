//! Memory ordering helpers used around secret-dependent work

/// Memory barrier utilities
///
/// The block transform and CTR keystream generation bracket their work with
/// compiler fences so the optimizer cannot hoist secret-dependent loads out of
/// the zeroized working buffers.
pub mod barrier {
    use core::sync::atomic::{compiler_fence, Ordering};

    /// Insert a compiler fence to prevent reordering
    #[inline(always)]
    pub fn compiler_fence_seq_cst() {
        compiler_fence(Ordering::SeqCst);
    }
}

