//! C symbol exports for freestanding linking.
//!
//! Enabled by the `symbols` cargo feature. Each definition forwards to the
//! raw tier under the symbol name a hosted-library-free binary expects the
//! linker to resolve. Kept out of default builds so a hosted `cargo test`
//! never shadows the platform libc's own definitions.

use crate::{mem, str};

#[unsafe(no_mangle)]
pub unsafe extern "C" fn memset(dst: *mut u8, value: i32, count: usize) -> *mut u8 {
    unsafe { mem::memset(dst, value, count) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn memcpy(dst: *mut u8, src: *const u8, count: usize) -> *mut u8 {
    unsafe { mem::memcpy(dst, src, count) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn memmove(dst: *mut u8, src: *const u8, count: usize) -> *mut u8 {
    unsafe { mem::memmove(dst, src, count) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn memcmp(a: *const u8, b: *const u8, count: usize) -> i32 {
    unsafe { mem::memcmp(a, b, count) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn strlen(s: *const u8) -> usize {
    unsafe { str::strlen(s) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn strcmp(a: *const u8, b: *const u8) -> i32 {
    unsafe { str::strcmp(a, b) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn strncmp(a: *const u8, b: *const u8, n: usize) -> i32 {
    unsafe { str::strncmp(a, b, n) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn strncpy(dst: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    unsafe { str::strncpy(dst, src, n) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn strlcpy(dst: *mut u8, src: *const u8, n: usize) -> usize {
    unsafe { str::strlcpy(dst, src, n) }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn strstr(haystack: *const u8, needle: *const u8) -> *const u8 {
    unsafe { str::strstr(haystack, needle) }
}
