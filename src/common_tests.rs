use super::*;
use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;

#[test]
fn test_bit_reverse_8() {
    let mut v: Vec<usize> = (0..8).collect();
    bit_reverse_in_place(&mut v);

    // 0 (000) -> 0, 1 (001) -> 4 (100), 2 (010) -> 2, 3 (011) -> 6 (110), ...
    let expected = vec![0, 4, 2, 6, 1, 5, 3, 7];
    assert_eq!(v, expected);
}

#[test]
fn test_bit_reverse_matches_index_reversal() {
    for log_n in 0..12 {
        let n = 1usize << log_n;
        let mut v: Vec<usize> = (0..n).collect();
        bit_reverse_in_place(&mut v);

        for (i, &x) in v.iter().enumerate() {
            let rev = if log_n == 0 {
                0
            } else {
                i.reverse_bits() >> (usize::BITS - log_n)
            };
            assert_eq!(x, rev, "n = {}, index {}", n, i);
        }
    }
}

#[test]
fn test_bit_reverse_involution() {
    for log_n in 0..14 {
        let n = 1usize << log_n;
        let original: Vec<u64> = (0..n as u64).map(|x| x.wrapping_mul(0x9E37_79B9_7F4A_7C15)).collect();
        let mut v = original.clone();
        bit_reverse_in_place(&mut v);
        bit_reverse_in_place(&mut v);
        assert_eq!(v, original);
    }
}

#[test]
fn test_bit_reverse_non_copy_elements() {
    let mut v: Vec<alloc::string::String> = (0..4).map(|i| i.to_string()).collect();
    bit_reverse_in_place(&mut v);
    assert_eq!(v, ["0", "2", "1", "3"]);
}

#[test]
fn test_error_display() {
    assert_eq!(FftError::NotPowerOfTwo.to_string(), "Size must be a power of 2");
    assert_eq!(
        FftError::BelowMinDegree.to_string(),
        "Size must be at least MIN_DEGREE (16)"
    );
    assert_eq!(
        FftError::SizeMismatch.to_string(),
        "Data buffer size does not match FFT size"
    );
}
