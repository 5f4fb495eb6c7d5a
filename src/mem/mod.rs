//! Raw byte-region primitives: `memset`, `memcpy`, `memmove`, `memcmp`.
//!
//! These operate on caller-supplied pointer/length pairs and perform no
//! validation; every function here is a total function over valid inputs
//! and undefined behavior outside them. All raw pointer arithmetic in the
//! crate lives in this module and [`crate::str`].

use core::mem::size_of;

const WORD_SIZE: usize = size_of::<usize>();

/// Writes the low 8 bits of `value` into each of the first `count` bytes
/// at `dst`. Returns `dst`. A `count` of zero touches nothing.
///
/// # Safety
///
/// `dst` must be valid for writes of `count` bytes.
pub unsafe extern "C" fn memset(dst: *mut u8, value: i32, count: usize) -> *mut u8 {
    let mut i = 0;
    unsafe {
        while i < count {
            *dst.add(i) = value as u8;
            i += 1;
        }
    }
    dst
}

/// Copies `count` bytes from `src` to `dst`. Returns `dst`.
///
/// When both pointers share the same word misalignment and the count is
/// worth it, the bulk of the copy runs word-at-a-time with byte loops for
/// the unaligned head and tail. Otherwise it is a plain byte loop.
///
/// # Safety
///
/// `src` must be valid for reads and `dst` for writes of `count` bytes,
/// and the two regions must not overlap. For overlapping regions use
/// [`memmove`].
pub unsafe extern "C" fn memcpy(dst: *mut u8, src: *const u8, count: usize) -> *mut u8 {
    let mut i = 0;
    unsafe {
        if count >= 2 * WORD_SIZE && (dst as usize) % WORD_SIZE == (src as usize) % WORD_SIZE {
            // Byte head up to the word boundary; src lands on it too since
            // the misalignments match.
            while (dst.add(i) as usize) % WORD_SIZE != 0 {
                *dst.add(i) = *src.add(i);
                i += 1;
            }
            while i + WORD_SIZE <= count {
                *(dst.add(i) as *mut usize) = *(src.add(i) as *const usize);
                i += WORD_SIZE;
            }
        }
        while i < count {
            *dst.add(i) = *src.add(i);
            i += 1;
        }
    }
    dst
}

/// Copies `count` bytes from `src` to `dst`, correct even when the regions
/// overlap. Returns `dst`.
///
/// If `dst` is below `src` the copy runs forward; if above, backward, so
/// that no source byte is clobbered before it has been read. Equal
/// pointers are a no-op.
///
/// # Safety
///
/// `src` must be valid for reads and `dst` for writes of `count` bytes.
pub unsafe extern "C" fn memmove(dst: *mut u8, src: *const u8, count: usize) -> *mut u8 {
    unsafe {
        if (dst as usize) < src as usize {
            let mut i = 0;
            while i < count {
                *dst.add(i) = *src.add(i);
                i += 1;
            }
        } else if (dst as usize) > src as usize {
            let mut i = count;
            while i > 0 {
                i -= 1;
                *dst.add(i) = *src.add(i);
            }
        }
    }
    dst
}

/// Compares the first `count` bytes of `a` and `b` as unsigned bytes.
/// Returns a negative value, zero, or a positive value; only the sign is
/// part of the contract.
///
/// # Safety
///
/// `a` and `b` must be valid for reads of `count` bytes.
pub unsafe extern "C" fn memcmp(a: *const u8, b: *const u8, count: usize) -> i32 {
    let mut i = 0;
    unsafe {
        while i < count {
            let x = *a.add(i);
            let y = *b.add(i);
            if x != y {
                return x as i32 - y as i32;
            }
            i += 1;
        }
    }
    0
}
