// src/float/core.rs

use alloc::vec::Vec;
use core::f64::consts::PI;
use num_complex::Complex64;

use crate::common::bit_reverse_in_place;

/// Twiddle factors for one transform size, laid out stage by stage in the
/// order the butterfly loops read them. Both tables hold `n - 1` entries.
#[derive(Debug)]
pub(crate) struct TwiddleTables {
    /// Stage `m` (m = 1, 2, ..., n/2) starts at offset `m - 1`.
    pub(crate) tw: Vec<Complex64>,
    /// Stage `m` (m = n, n/2, ..., 2) starts at offset `n - m`.
    pub(crate) tw_inv: Vec<Complex64>,
}

impl TwiddleTables {
    pub(crate) fn new(n: usize) -> Self {
        let (tw, tw_inv) = precompute_twiddles(n);
        Self { tw, tw_inv }
    }
}

/// Computes the forward and inverse twiddle tables for an FFT of size N.
pub(crate) fn precompute_twiddles(n: usize) -> (Vec<Complex64>, Vec<Complex64>) {
    let half = n / 2;
    let mut tw_ref = Vec::with_capacity(half);
    let mut tw_inv_ref = Vec::with_capacity(half);
    for j in 0..half {
        let angle = -2.0 * PI * (j as f64) / (n as f64);
        let (sin, cos) = sin_cos(angle);
        tw_ref.push(Complex64::new(cos, sin));
        tw_inv_ref.push(Complex64::new(cos, -sin));
    }
    bit_reverse_in_place(&mut tw_ref);
    bit_reverse_in_place(&mut tw_inv_ref);

    let mut tw = Vec::with_capacity(n - 1);
    let mut m = 1;
    while m < n {
        tw.extend_from_slice(&tw_ref[..m]);
        m <<= 1;
    }

    let mut tw_inv = Vec::with_capacity(n - 1);
    let mut m = n;
    while m > 1 {
        tw_inv.extend_from_slice(&tw_inv_ref[..m >> 1]);
        m >>= 1;
    }

    (tw, tw_inv)
}

fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return angle.sin_cos();

    #[cfg(not(feature = "std"))]
    return (libm::sin(angle), libm::cos(angle));
}

/// Forward FFT in place. Natural order in, bit-reversed order out.
pub(crate) fn fft_in_place(coeffs: &mut [Complex64], tw: &[Complex64]) {
    let n = coeffs.len();

    let mut t = n;
    let mut m = 1;
    while m < n {
        t >>= 1;
        let stage = &tw[m - 1..2 * m - 1];
        for (i, &w) in stage.iter().enumerate() {
            let j1 = (i * t) << 1;
            let (lo, hi) = coeffs[j1..j1 + 2 * t].split_at_mut(t);
            for (a, b) in lo.iter_mut().zip(hi.iter_mut()) {
                let u = *a;
                let v = *b * w;
                *a = u + v;
                *b = u - v;
            }
        }
        m <<= 1;
    }
}

/// Inverse FFT in place. Bit-reversed order in, natural order out.
/// The result is scaled by N.
pub(crate) fn ifft_in_place(coeffs: &mut [Complex64], tw_inv: &[Complex64]) {
    let n = coeffs.len();

    let mut t = 1;
    let mut m = n;
    let mut offset = 0;
    while m > 1 {
        let h = m >> 1;
        let mut j1 = 0;
        for &w in &tw_inv[offset..offset + h] {
            let (lo, hi) = coeffs[j1..j1 + 2 * t].split_at_mut(t);
            for (a, b) in lo.iter_mut().zip(hi.iter_mut()) {
                let u = *a;
                let v = *b;
                *a = u + v;
                *b = (u - v) * w;
            }
            j1 += t << 1;
        }
        offset += h;
        t <<= 1;
        m >>= 1;
    }
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
