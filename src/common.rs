// src/common.rs

/// Smallest transform size a `FourierTransformer` accepts.
///
/// The vectorized kernel handles the first and last two butterfly stages
/// separately, which needs at least four stages.
pub const MIN_DEGREE: usize = 1 << 4;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FftError {
    SizeMismatch,
    NotPowerOfTwo,
    BelowMinDegree,
}

use core::fmt;

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::SizeMismatch => write!(f, "Data buffer size does not match FFT size"),
            FftError::NotPowerOfTwo => write!(f, "Size must be a power of 2"),
            FftError::BelowMinDegree => {
                write!(f, "Size must be at least MIN_DEGREE ({})", MIN_DEGREE)
            }
        }
    }
}

pub trait FftProcess<T> {
    fn process(&mut self, buffer: &mut [T], inverse: bool) -> Result<(), FftError>;
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Reorders `v` into bit-reversed order in place.
///
/// The element at index `i` moves to index `bitrev(i, log2(len))`. Applying it
/// twice restores the original order. `v.len()` must be a power of two.
pub fn bit_reverse_in_place<T>(v: &mut [T]) {
    let n = v.len();
    let mut j = 0;
    for i in 1..n {
        let mut bit = n >> 1;
        while j >= bit {
            j -= bit;
            bit >>= 1;
        }
        j += bit;
        if i < j {
            v.swap(i, j);
        }
    }
}

#[cfg(test)]
#[path = "common_tests.rs"]
mod tests;
