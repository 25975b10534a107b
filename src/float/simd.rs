// src/float/simd.rs

use num_complex::Complex64;

use crate::common::MIN_DEGREE;

#[cfg(all(target_arch = "x86_64", feature = "std"))]
static AVX2_FMA: std::sync::OnceLock<bool> = std::sync::OnceLock::new();

/// Reports whether the host can run the vectorized transforms.
///
/// With `std` the CPU is probed once and the answer cached for the process.
/// Without it only the compile-time target features are consulted.
pub fn simd_available() -> bool {
    #[cfg(all(target_arch = "x86_64", feature = "std"))]
    return *AVX2_FMA.get_or_init(|| {
        std::arch::is_x86_feature_detected!("avx2") && std::arch::is_x86_feature_detected!("fma")
    });

    #[cfg(all(target_arch = "x86_64", not(feature = "std")))]
    return cfg!(all(target_feature = "avx2", target_feature = "fma"));

    #[cfg(not(target_arch = "x86_64"))]
    return false;
}

/// Whether a transform of size `n` takes the vectorized path.
#[inline]
pub(crate) fn use_simd(n: usize) -> bool {
    n >= MIN_DEGREE && simd_available()
}

/// Packs `v` into blocks of 4 real parts followed by the 4 imaginary parts.
/// `out` must hold `2 * v.len()` doubles and `v.len()` must be a multiple of 4.
pub(crate) fn pack(v: &[Complex64], out: &mut [f64]) {
    debug_assert_eq!(out.len(), 2 * v.len());
    for (src, dst) in v.chunks_exact(4).zip(out.chunks_exact_mut(8)) {
        let (re, im) = dst.split_at_mut(4);
        for k in 0..4 {
            re[k] = src[k].re;
            im[k] = src[k].im;
        }
    }
}

/// Inverse of [`pack`].
pub(crate) fn unpack(v: &[f64], out: &mut [Complex64]) {
    debug_assert_eq!(v.len(), 2 * out.len());
    for (src, dst) in v.chunks_exact(8).zip(out.chunks_exact_mut(4)) {
        for k in 0..4 {
            dst[k] = Complex64::new(src[k], src[k + 4]);
        }
    }
}

/// Forward FFT on a buffer filled by [`pack`].
/// Callers must have checked [`use_simd`].
#[cfg(target_arch = "x86_64")]
pub(crate) fn fft_packed(scratch: &mut [f64], tw: &[Complex64]) {
    // SAFETY: `use_simd` confirmed AVX2 and FMA.
    unsafe { super::avx2::fft_in_place_avx2_fma(scratch, tw) };
}

/// Inverse FFT on a buffer filled by [`pack`].
/// Callers must have checked [`use_simd`].
#[cfg(target_arch = "x86_64")]
pub(crate) fn ifft_packed(scratch: &mut [f64], tw_inv: &[Complex64]) {
    // SAFETY: `use_simd` confirmed AVX2 and FMA.
    unsafe { super::avx2::ifft_in_place_avx2_fma(scratch, tw_inv) };
}

#[cfg(not(target_arch = "x86_64"))]
pub(crate) fn fft_packed(_: &mut [f64], _: &[Complex64]) {
    unreachable!("vectorized FFT requested on a target without AVX2");
}

#[cfg(not(target_arch = "x86_64"))]
pub(crate) fn ifft_packed(_: &mut [f64], _: &[Complex64]) {
    unreachable!("vectorized FFT requested on a target without AVX2");
}

#[cfg(test)]
#[path = "simd_tests.rs"]
mod tests;
