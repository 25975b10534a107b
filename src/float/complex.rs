use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use num_complex::Complex64;

use super::core::{TwiddleTables, fft_in_place, ifft_in_place};
use super::simd::{fft_packed, ifft_packed, pack, unpack, use_simd};
use crate::common::{FftError, FftProcess, MIN_DEGREE};

/// Computes FFT/IFFT over C[X]/(X^N - 1) for a power-of-two N.
///
/// - The forward transform takes natural order and returns bit-reversed
///   order, so the inverse transform expects bit-reversed input. This is
///   all a convolution needs; use [`bit_reverse_in_place`] otherwise.
/// - The inverse transform is NOT normalized: its output is N times the
///   textbook inverse DFT.
///
/// Cloning shares the twiddle tables and allocates a fresh scratch buffer,
/// so each thread can own a cheap copy.
///
/// [`bit_reverse_in_place`]: crate::common::bit_reverse_in_place
pub struct FourierTransformer {
    degree: usize,
    tables: Arc<TwiddleTables>,
    /// Packed real/imaginary scratch for the vectorized path, 2N doubles.
    buffer: Vec<f64>,
}

impl FourierTransformer {
    /// Creates a transformer for size `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not a power of two or is smaller than [`MIN_DEGREE`].
    pub fn new(n: usize) -> Self {
        match Self::try_new(n) {
            Ok(fft) => fft,
            Err(e) => panic!("invalid FFT size {}: {}", n, e),
        }
    }

    /// Same as [`new`](Self::new), reporting a bad size as an error.
    pub fn try_new(n: usize) -> Result<Self, FftError> {
        if !n.is_power_of_two() {
            return Err(FftError::NotPowerOfTwo);
        }
        if n < MIN_DEGREE {
            return Err(FftError::BelowMinDegree);
        }

        Ok(Self {
            degree: n,
            tables: Arc::new(TwiddleTables::new(n)),
            buffer: vec![0.0; 2 * n],
        })
    }

    /// Returns the transform size N.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the Fourier transform of `v` in bit-reversed order.
    pub fn forward(&mut self, v: &[Complex64]) -> Vec<Complex64> {
        self.check_len(v.len());
        let mut out = vec![Complex64::new(0.0, 0.0); self.degree];
        self.forward_assign(v, &mut out);
        out
    }

    /// Writes the Fourier transform of `v` to `out` in bit-reversed order.
    pub fn forward_assign(&mut self, v: &[Complex64], out: &mut [Complex64]) {
        self.check_len(v.len());
        self.check_len(out.len());

        if use_simd(self.degree) {
            pack(v, &mut self.buffer);
            fft_packed(&mut self.buffer, &self.tables.tw);
            unpack(&self.buffer, out);
            return;
        }

        out.copy_from_slice(v);
        fft_in_place(out, &self.tables.tw);
    }

    /// Replaces `v` (natural order) by its Fourier transform (bit-reversed order).
    pub fn forward_in_place(&mut self, v: &mut [Complex64]) {
        self.check_len(v.len());

        if use_simd(self.degree) {
            pack(v, &mut self.buffer);
            fft_packed(&mut self.buffer, &self.tables.tw);
            unpack(&self.buffer, v);
            return;
        }

        fft_in_place(v, &self.tables.tw);
    }

    /// Returns the unnormalized inverse transform of `v`.
    /// `v` is read in bit-reversed order; the result is in natural order.
    pub fn inverse(&mut self, v: &[Complex64]) -> Vec<Complex64> {
        self.check_len(v.len());
        let mut out = vec![Complex64::new(0.0, 0.0); self.degree];
        self.inverse_assign(v, &mut out);
        out
    }

    /// Writes the unnormalized inverse transform of `v` (bit-reversed order)
    /// to `out` (natural order).
    pub fn inverse_assign(&mut self, v: &[Complex64], out: &mut [Complex64]) {
        self.check_len(v.len());
        self.check_len(out.len());

        if use_simd(self.degree) {
            pack(v, &mut self.buffer);
            ifft_packed(&mut self.buffer, &self.tables.tw_inv);
            unpack(&self.buffer, out);
            return;
        }

        out.copy_from_slice(v);
        ifft_in_place(out, &self.tables.tw_inv);
    }

    /// Replaces `v` (bit-reversed order) by its unnormalized inverse transform
    /// (natural order).
    pub fn inverse_in_place(&mut self, v: &mut [Complex64]) {
        self.check_len(v.len());

        if use_simd(self.degree) {
            pack(v, &mut self.buffer);
            ifft_packed(&mut self.buffer, &self.tables.tw_inv);
            unpack(&self.buffer, v);
            return;
        }

        ifft_in_place(v, &self.tables.tw_inv);
    }

    #[inline]
    fn check_len(&self, len: usize) {
        assert_eq!(
            len, self.degree,
            "invalid length of input vector: expected {}, got {}",
            self.degree, len
        );
    }
}

impl Clone for FourierTransformer {
    fn clone(&self) -> Self {
        Self {
            degree: self.degree,
            tables: Arc::clone(&self.tables),
            buffer: vec![0.0; 2 * self.degree],
        }
    }
}

impl FftProcess<Complex64> for FourierTransformer {
    fn process(&mut self, buffer: &mut [Complex64], inverse: bool) -> Result<(), FftError> {
        if buffer.len() != self.degree {
            return Err(FftError::SizeMismatch);
        }

        if inverse {
            self.inverse_in_place(buffer);
        } else {
            self.forward_in_place(buffer);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
