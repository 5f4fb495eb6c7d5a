//! Null-terminated byte-string primitives.
//!
//! Responsibilities:
//! - Measure (`strlen`) and order (`strcmp`, `strncmp`) terminated sequences
//! - Bounded copy with the classic zero-padding contract (`strncpy`)
//! - Bounded copy with guaranteed termination (`strlcpy`)
//! - Substring search (`strstr`)
//!
//! The terminator changes the stop condition of every scan, so these are
//! specified on their own rather than layered on [`crate::mem`]. Comparison
//! order is unsigned, matching `memcmp`. A sequence without a terminator
//! inside valid memory is undefined behavior for every function here; the
//! bounded slice forms in [`crate::slice`] turn that into a checkable case.

/// Returns the number of bytes before the first zero byte at `s`.
///
/// # Safety
///
/// `s` must point to a zero-terminated sequence; all bytes up to and
/// including the terminator must be readable.
pub unsafe extern "C" fn strlen(s: *const u8) -> usize {
    let mut n = 0;
    unsafe {
        while *s.add(n) != 0 {
            n += 1;
        }
    }
    n
}

/// Compares two zero-terminated sequences as unsigned bytes. The
/// terminator participates, so a proper prefix orders before its
/// extension. Sign convention as [`crate::mem::memcmp`].
///
/// # Safety
///
/// Both pointers must reference zero-terminated, readable sequences.
pub unsafe extern "C" fn strcmp(a: *const u8, b: *const u8) -> i32 {
    let mut i = 0;
    unsafe {
        loop {
            let x = *a.add(i);
            let y = *b.add(i);
            if x != y {
                return x as i32 - y as i32;
            }
            if x == 0 {
                return 0;
            }
            i += 1;
        }
    }
}

/// Like [`strcmp`], but examines at most `n` bytes of each sequence.
/// Agreement through `n` bytes is equality; content past `n` is never read.
///
/// # Safety
///
/// Both pointers must be readable up to their terminator or `n` bytes,
/// whichever comes first.
pub unsafe extern "C" fn strncmp(a: *const u8, b: *const u8, n: usize) -> i32 {
    let mut i = 0;
    unsafe {
        while i < n {
            let x = *a.add(i);
            let y = *b.add(i);
            if x != y {
                return x as i32 - y as i32;
            }
            if x == 0 {
                return 0;
            }
            i += 1;
        }
    }
    0
}

/// Copies up to `n` bytes from `src` into `dst`, zero-filling the
/// remainder of `dst` when `src` is shorter than `n`. Returns `dst`.
///
/// The classic contract, preserved exactly: when `strlen(src) >= n` the
/// destination is NOT terminated by this call. Callers that need a
/// terminated result regardless of truncation should use [`strlcpy`].
///
/// # Safety
///
/// `dst` must be valid for writes of `n` bytes; `src` must be a readable
/// zero-terminated sequence (never read past its terminator here).
pub unsafe extern "C" fn strncpy(dst: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    let mut i = 0;
    unsafe {
        while i < n {
            let c = *src.add(i);
            *dst.add(i) = c;
            i += 1;
            if c == 0 {
                break;
            }
        }
        while i < n {
            *dst.add(i) = 0;
            i += 1;
        }
    }
    dst
}

/// Copies `src` into `dst` of capacity `n`, always terminating `dst` when
/// `n > 0`, copying at most `n - 1` content bytes. Returns `strlen(src)`,
/// so truncation is detectable as a return value of `n` or more.
///
/// # Safety
///
/// `dst` must be valid for writes of `n` bytes; `src` must be a readable
/// zero-terminated sequence.
pub unsafe extern "C" fn strlcpy(dst: *mut u8, src: *const u8, n: usize) -> usize {
    unsafe {
        let len = strlen(src);
        if n > 0 {
            let copy = if len < n - 1 { len } else { n - 1 };
            let mut i = 0;
            while i < copy {
                *dst.add(i) = *src.add(i);
                i += 1;
            }
            *dst.add(copy) = 0;
        }
        len
    }
}

/// Returns a pointer to the first occurrence of `needle` within
/// `haystack`, or null when absent. An empty needle matches immediately
/// at `haystack`. Naive scan-and-compare; the strings this layer sees are
/// short enough that nothing cleverer pays for itself.
///
/// # Safety
///
/// Both pointers must reference zero-terminated, readable sequences.
pub unsafe extern "C" fn strstr(haystack: *const u8, needle: *const u8) -> *const u8 {
    unsafe {
        if *needle == 0 {
            return haystack;
        }
        let mut h = haystack;
        while *h != 0 {
            let mut i = 0;
            loop {
                let nc = *needle.add(i);
                if nc == 0 {
                    return h;
                }
                // Once the haystack's terminator is hit this mismatches,
                // so the scan never reads past it.
                if *h.add(i) != nc {
                    break;
                }
                i += 1;
            }
            h = h.add(1);
        }
    }
    core::ptr::null()
}
