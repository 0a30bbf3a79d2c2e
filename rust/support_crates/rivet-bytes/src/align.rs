/// Aligns `n` up to the next multiple of `alignment`, or `None` on overflow.
///
/// If the input is already aligned, it is returned unchanged.
///
/// ```
/// use rivet_bytes::align::checked_align_up;
///
/// assert_eq!(checked_align_up(17, 8), Some(24));
/// assert_eq!(checked_align_up(usize::MAX, 8), None);
/// ```
#[inline]
pub fn checked_align_up(n: usize, alignment: usize) -> Option<usize> {
    debug_assert!(alignment.is_power_of_two());
    n.checked_add(alignment - 1).map(|n| n & !(alignment - 1))
}

/// Checks if a number is aligned to the specified alignment boundary.
///
/// ```
/// use rivet_bytes::align::is_aligned;
///
/// assert!(is_aligned(0, 8));
/// assert!(!is_aligned(1, 8));
/// assert!(is_aligned(16, 8));
/// ```
#[inline]
pub fn is_aligned(n: usize, alignment: usize) -> bool {
    debug_assert_ne!(alignment, 0);
    debug_assert!(alignment.is_power_of_two());
    (n & (alignment - 1)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_up_matches_c_struct_padding() {
        // unsigned char[15] followed by a 4-byte aligned member
        assert_eq!(checked_align_up(15, 4), Some(16));
        assert_eq!(checked_align_up(16 + 24, 4), Some(40));
    }

    #[test]
    fn test_checked_align_up_bounds() {
        fastrand::seed(0x7269_7665);
        for _ in 0..1000 {
            let n = fastrand::usize(0..1 << 20);
            let alignment = 1usize << fastrand::u32(0..12);
            let up = checked_align_up(n, alignment).unwrap();
            assert!(is_aligned(up, alignment));
            assert!(n <= up && up - n < alignment);
        }
        assert_eq!(checked_align_up(usize::MAX - 2, 4), None);
    }
}
