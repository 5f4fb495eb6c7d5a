//! Safe, bounded counterparts to the raw primitives.
//!
//! Callers that hold a slice rather than a bare pointer get the same
//! operations with the bounds carried by the type: no precondition is left
//! to the caller beyond what the borrow checker already enforces. Lengths
//! are clamped rather than panicking, and the unbounded-scan hazards of the
//! terminated-string forms become `Option` results here.

use core::cmp::Ordering;
use core::ops::Range;

use crate::mem;

/// Writes `value` into every byte of `region`.
pub fn fill(region: &mut [u8], value: u8) {
    unsafe {
        mem::memset(region.as_mut_ptr(), value as i32, region.len());
    }
}

/// Copies `src` into `dst` over their common prefix length. Returns the
/// number of bytes copied. The borrow rules guarantee the regions are
/// disjoint, so this is the non-overlapping fast path.
pub fn copy(dst: &mut [u8], src: &[u8]) -> usize {
    let count = dst.len().min(src.len());
    unsafe {
        mem::memcpy(dst.as_mut_ptr(), src.as_ptr(), count);
    }
    count
}

/// Moves `buf[src]` to start at `dst` within the same buffer, correct for
/// any overlap. Out-of-range indices are clamped to the buffer; returns
/// the number of bytes actually moved.
pub fn copy_within(buf: &mut [u8], src: Range<usize>, dst: usize) -> usize {
    let start = src.start.min(buf.len());
    let end = src.end.min(buf.len()).max(start);
    let dst = dst.min(buf.len());
    let count = (end - start).min(buf.len() - dst);
    unsafe {
        mem::memmove(buf.as_mut_ptr().add(dst), buf.as_ptr().add(start), count);
    }
    count
}

/// Orders two regions: unsigned byte comparison over the common prefix,
/// then by length. This is C string ordering lifted onto slices, so
/// `compare(b"ab", b"abc")` is `Less`.
pub fn compare(a: &[u8], b: &[u8]) -> Ordering {
    let n = a.len().min(b.len());
    let r = unsafe { mem::memcmp(a.as_ptr(), b.as_ptr(), n) };
    if r < 0 {
        Ordering::Less
    } else if r > 0 {
        Ordering::Greater
    } else {
        a.len().cmp(&b.len())
    }
}

/// Bounded `strlen`: the number of bytes before the first zero byte in
/// `region`, or `None` when the region contains no terminator.
pub fn terminated_len(region: &[u8]) -> Option<usize> {
    region.iter().position(|&b| b == 0)
}

/// Bounded substring search: the offset of the first occurrence of
/// `needle` in `haystack`, or `None`. An empty needle matches at offset 0.
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fill_covers_region() {
        let mut buf = [0u8; 6];
        fill(&mut buf, 0x5A);
        assert_eq!(buf, [0x5A; 6]);
        fill(&mut [], 1);
    }

    #[test]
    fn copy_clamps_to_shorter_side() {
        let mut dst = [0u8; 3];
        assert_eq!(copy(&mut dst, b"hello"), 3);
        assert_eq!(&dst, b"hel");

        let mut dst = [9u8; 5];
        assert_eq!(copy(&mut dst, b"hi"), 2);
        assert_eq!(&dst, b"hi\x09\x09\x09");
    }

    #[test]
    fn copy_within_overlapping_forward_and_back() {
        let mut buf = *b"abcdef";
        assert_eq!(copy_within(&mut buf, 0..4, 2), 4);
        assert_eq!(&buf, b"ababcd");

        let mut buf = *b"abcdef";
        assert_eq!(copy_within(&mut buf, 2..6, 0), 4);
        assert_eq!(&buf, b"cdefef");
    }

    #[test]
    fn copy_within_clamps_ranges() {
        let mut buf = *b"abcd";
        // Range runs past the buffer; only the in-bounds part moves.
        assert_eq!(copy_within(&mut buf, 2..10, 0), 2);
        assert_eq!(&buf, b"cdcd");
        // Destination past the end moves nothing.
        assert_eq!(copy_within(&mut buf, 0..2, 4), 0);
        // Inverted range moves nothing.
        assert_eq!(copy_within(&mut buf, 3..1, 0), 0);
    }

    #[test]
    fn compare_orders_like_c_strings() {
        assert_eq!(compare(b"abc", b"abc"), Ordering::Equal);
        assert_eq!(compare(b"abc", b"abd"), Ordering::Less);
        assert_eq!(compare(b"ab", b"abc"), Ordering::Less);
        assert_eq!(compare(&[0x80], &[0x7F]), Ordering::Greater);
        assert_eq!(compare(b"", b""), Ordering::Equal);
    }

    #[test]
    fn terminated_len_bounds_the_scan() {
        assert_eq!(terminated_len(b"abc\0def"), Some(3));
        assert_eq!(terminated_len(b"\0"), Some(0));
        assert_eq!(terminated_len(b"abc"), None);
        assert_eq!(terminated_len(b""), None);
    }

    #[test]
    fn find_offsets() {
        assert_eq!(find(b"hello world", b"wor"), Some(6));
        assert_eq!(find(b"hello", b"xyz"), None);
        assert_eq!(find(b"hello", b""), Some(0));
        assert_eq!(find(b"ab", b"abc"), None);
    }

    proptest! {
        #[test]
        fn compare_matches_slice_ord(
            a in proptest::collection::vec(any::<u8>(), 0..48),
            b in proptest::collection::vec(any::<u8>(), 0..48),
        ) {
            prop_assert_eq!(compare(&a, &b), a.cmp(&b));
        }

        #[test]
        fn copy_within_matches_std(
            buf in proptest::collection::vec(any::<u8>(), 1..64),
            start in 0usize..64,
            len in 0usize..64,
            dst in 0usize..64,
        ) {
            let start = start % buf.len();
            let len = len.min(buf.len() - start);
            let dst = dst % (buf.len() - len + 1);

            let mut expected = buf.clone();
            expected.copy_within(start..start + len, dst);

            let mut got = buf;
            copy_within(&mut got, start..start + len, dst);
            prop_assert_eq!(got, expected);
        }
    }
}
