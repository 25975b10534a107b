// src/float/avx2.rs

//! AVX2/FMA butterflies over the packed layout (see `simd::pack`).
//!
//! Each block of 8 doubles holds 4 real parts followed by the 4 matching
//! imaginary parts, so element `j` of a block-aligned run starts at `2 * j`.
//! The first and last two stages of both transforms are fused and handled
//! separately; the last (forward) or first (inverse) two stages work inside a
//! single block, which is why the size must be at least `MIN_DEGREE`.

use core::arch::x86_64::{
    __m256d, _mm256_add_pd, _mm256_blend_pd, _mm256_fmadd_pd, _mm256_fmsub_pd, _mm256_loadu_pd,
    _mm256_mul_pd, _mm256_permute2f128_pd, _mm256_set_pd, _mm256_set1_pd, _mm256_storeu_pd,
    _mm256_sub_pd, _mm256_unpackhi_pd, _mm256_unpacklo_pd,
};

use num_complex::Complex64;

use crate::common::MIN_DEGREE;

#[derive(Clone, Copy)]
struct Lanes {
    re: __m256d,
    im: __m256d,
}

#[inline]
#[target_feature(enable = "avx2,fma")]
unsafe fn load(p: *const f64) -> Lanes {
    unsafe {
        Lanes {
            re: _mm256_loadu_pd(p),
            im: _mm256_loadu_pd(p.add(4)),
        }
    }
}

#[inline]
#[target_feature(enable = "avx2,fma")]
unsafe fn store(p: *mut f64, x: Lanes) {
    unsafe {
        _mm256_storeu_pd(p, x.re);
        _mm256_storeu_pd(p.add(4), x.im);
    }
}

#[inline]
#[target_feature(enable = "avx2,fma")]
unsafe fn splat(w: Complex64) -> Lanes {
    Lanes {
        re: _mm256_set1_pd(w.re),
        im: _mm256_set1_pd(w.im),
    }
}

/// Lanes 0, 1 take `a`, lanes 2, 3 take `b`.
#[inline]
#[target_feature(enable = "avx2,fma")]
unsafe fn pair(a: Complex64, b: Complex64) -> Lanes {
    Lanes {
        re: _mm256_set_pd(b.re, b.re, a.re, a.re),
        im: _mm256_set_pd(b.im, b.im, a.im, a.im),
    }
}

#[inline]
#[target_feature(enable = "avx2,fma")]
unsafe fn add(a: Lanes, b: Lanes) -> Lanes {
    Lanes {
        re: _mm256_add_pd(a.re, b.re),
        im: _mm256_add_pd(a.im, b.im),
    }
}

#[inline]
#[target_feature(enable = "avx2,fma")]
unsafe fn sub(a: Lanes, b: Lanes) -> Lanes {
    Lanes {
        re: _mm256_sub_pd(a.re, b.re),
        im: _mm256_sub_pd(a.im, b.im),
    }
}

#[inline]
#[target_feature(enable = "avx2,fma")]
unsafe fn mul(a: Lanes, w: Lanes) -> Lanes {
    let tr = _mm256_mul_pd(a.im, w.im);
    let ti = _mm256_mul_pd(a.im, w.re);
    Lanes {
        re: _mm256_fmsub_pd(a.re, w.re, tr),
        im: _mm256_fmadd_pd(a.re, w.im, ti),
    }
}

/// `[x0, x1, x0, x1]` and `[x2, x3, x2, x3]`.
#[inline]
#[target_feature(enable = "avx2,fma")]
unsafe fn split_halves(x: Lanes) -> (Lanes, Lanes) {
    (
        Lanes {
            re: _mm256_permute2f128_pd::<0x00>(x.re, x.re),
            im: _mm256_permute2f128_pd::<0x00>(x.im, x.im),
        },
        Lanes {
            re: _mm256_permute2f128_pd::<0x11>(x.re, x.re),
            im: _mm256_permute2f128_pd::<0x11>(x.im, x.im),
        },
    )
}

/// `[x0, x0, x2, x2]` and `[x1, x1, x3, x3]`.
#[inline]
#[target_feature(enable = "avx2,fma")]
unsafe fn split_pairs(x: Lanes) -> (Lanes, Lanes) {
    (
        Lanes {
            re: _mm256_unpacklo_pd(x.re, x.re),
            im: _mm256_unpacklo_pd(x.im, x.im),
        },
        Lanes {
            re: _mm256_unpackhi_pd(x.re, x.re),
            im: _mm256_unpackhi_pd(x.im, x.im),
        },
    )
}

/// Lanes set in `MASK` come from `b`.
#[inline]
#[target_feature(enable = "avx2,fma")]
unsafe fn blend<const MASK: i32>(a: Lanes, b: Lanes) -> Lanes {
    Lanes {
        re: _mm256_blend_pd::<MASK>(a.re, b.re),
        im: _mm256_blend_pd::<MASK>(a.im, b.im),
    }
}

/// Forward FFT on a packed buffer of `2 * n` doubles.
///
/// # Safety
///
/// The CPU must support AVX2 and FMA.
#[target_feature(enable = "avx2,fma")]
pub(crate) unsafe fn fft_in_place_avx2_fma(data: &mut [f64], tw: &[Complex64]) {
    let n = data.len() >> 1;
    assert!(n >= MIN_DEGREE && n.is_power_of_two());
    assert_eq!(tw.len(), n - 1);

    let ptr = data.as_mut_ptr();
    let q = n >> 2;

    unsafe {
        // Stages m = 1 and m = 2.
        let w0 = splat(tw[0]);
        let w1 = splat(tw[1]);
        let w2 = splat(tw[2]);
        for j in (0..q).step_by(4) {
            let p0 = ptr.add(2 * j);
            let p1 = ptr.add(2 * (j + q));
            let p2 = ptr.add(2 * (j + 2 * q));
            let p3 = ptr.add(2 * (j + 3 * q));

            let a0 = load(p0);
            let a1 = load(p1);
            let v2 = mul(load(p2), w0);
            let v3 = mul(load(p3), w0);

            let b0 = add(a0, v2);
            let b2 = sub(a0, v2);
            let v1 = mul(add(a1, v3), w1);
            let v3 = mul(sub(a1, v3), w2);

            store(p0, add(b0, v1));
            store(p1, sub(b0, v1));
            store(p2, add(b2, v3));
            store(p3, sub(b2, v3));
        }

        let mut m = 4;
        let mut t = n >> 3;
        while t >= 4 {
            for (i, &w) in tw[m - 1..2 * m - 1].iter().enumerate() {
                let w = splat(w);
                let j1 = (i * t) << 1;
                for j in (j1..j1 + t).step_by(4) {
                    let pu = ptr.add(2 * j);
                    let pv = ptr.add(2 * (j + t));
                    let u = load(pu);
                    let v = mul(load(pv), w);
                    store(pu, add(u, v));
                    store(pv, sub(u, v));
                }
            }
            m <<= 1;
            t >>= 1;
        }

        // Stages m = n/4 (t = 2) and m = n/2 (t = 1), one block at a time.
        let tw_half = &tw[q - 1..2 * q - 1];
        let tw_last = &tw[2 * q - 1..];
        for b in 0..q {
            let p = ptr.add(8 * b);
            let x = load(p);

            let (lo, hi) = split_halves(x);
            let v = mul(hi, splat(tw_half[b]));
            let x = blend::<0b1100>(add(lo, v), sub(lo, v));

            let (lo, hi) = split_pairs(x);
            let v = mul(hi, pair(tw_last[2 * b], tw_last[2 * b + 1]));
            store(p, blend::<0b1010>(add(lo, v), sub(lo, v)));
        }
    }
}

/// Inverse FFT on a packed buffer of `2 * n` doubles. Unnormalized.
///
/// # Safety
///
/// The CPU must support AVX2 and FMA.
#[target_feature(enable = "avx2,fma")]
pub(crate) unsafe fn ifft_in_place_avx2_fma(data: &mut [f64], tw_inv: &[Complex64]) {
    let n = data.len() >> 1;
    assert!(n >= MIN_DEGREE && n.is_power_of_two());
    assert_eq!(tw_inv.len(), n - 1);

    let ptr = data.as_mut_ptr();
    let q = n >> 2;

    unsafe {
        // Stages m = n (t = 1) and m = n/2 (t = 2), one block at a time.
        let tw_first = &tw_inv[..2 * q];
        let tw_half = &tw_inv[2 * q..3 * q];
        for b in 0..q {
            let p = ptr.add(8 * b);
            let x = load(p);

            let (lo, hi) = split_pairs(x);
            let d = mul(sub(lo, hi), pair(tw_first[2 * b], tw_first[2 * b + 1]));
            let x = blend::<0b1010>(add(lo, hi), d);

            let (lo, hi) = split_halves(x);
            let d = mul(sub(lo, hi), splat(tw_half[b]));
            store(p, blend::<0b1100>(add(lo, hi), d));
        }

        let mut m = q;
        let mut t = 4;
        while m > 4 {
            let offset = n - m;
            for (i, &w) in tw_inv[offset..offset + (m >> 1)].iter().enumerate() {
                let w = splat(w);
                let j1 = (i * t) << 1;
                for j in (j1..j1 + t).step_by(4) {
                    let pu = ptr.add(2 * j);
                    let pv = ptr.add(2 * (j + t));
                    let u = load(pu);
                    let v = load(pv);
                    store(pu, add(u, v));
                    store(pv, mul(sub(u, v), w));
                }
            }
            m >>= 1;
            t <<= 1;
        }

        // Stages m = 4 and m = 2.
        let w0 = splat(tw_inv[n - 4]);
        let w1 = splat(tw_inv[n - 3]);
        let w2 = splat(tw_inv[n - 2]);
        for j in (0..q).step_by(4) {
            let p0 = ptr.add(2 * j);
            let p1 = ptr.add(2 * (j + q));
            let p2 = ptr.add(2 * (j + 2 * q));
            let p3 = ptr.add(2 * (j + 3 * q));

            let a0 = load(p0);
            let a1 = load(p1);
            let a2 = load(p2);
            let a3 = load(p3);

            let b0 = add(a0, a1);
            let b1 = mul(sub(a0, a1), w0);
            let b2 = add(a2, a3);
            let b3 = mul(sub(a2, a3), w1);

            store(p0, add(b0, b2));
            store(p1, add(b1, b3));
            store(p2, mul(sub(b0, b2), w2));
            store(p3, mul(sub(b1, b3), w2));
        }
    }
}
