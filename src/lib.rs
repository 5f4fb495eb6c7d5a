//! Freestanding memory and string primitives.
//!
//! Drop-in replacements for the handful of libc routines a bare-metal
//! binary (bootloader, kernel, embedded runtime) needs once the hosted
//! standard library is gone: `memset`, `memcpy`, `memmove`, `memcmp` over
//! raw byte regions, and `strlen`, `strcmp`, `strncmp`, `strncpy`,
//! `strstr` over null-terminated byte strings.
//!
//! The crate is split into three tiers:
//! - [`mem`] and [`str`]: the raw primitives, `unsafe extern "C"` over
//!   pointers, with the traditional contracts (precondition violations are
//!   undefined behavior, not reported errors).
//! - [`slice`]: safe bounded counterparts over `&[u8]`/`&mut [u8]` for
//!   callers that can hand over a slice instead of a bare pointer.
//! - `export` (behind the `symbols` feature): `#[no_mangle]` definitions
//!   of the C symbol names, for linking into a freestanding image.
//!
//! Nothing here allocates, blocks, or keeps state across calls.

#![no_std]
#![no_builtins]

#[cfg(test)]
extern crate std;

pub mod mem;
pub mod slice;
pub mod str;

#[cfg(feature = "symbols")]
pub mod export;

pub use crate::mem::{memcmp, memcpy, memmove, memset};
pub use crate::str::{strcmp, strlcpy, strlen, strncmp, strncpy, strstr};
