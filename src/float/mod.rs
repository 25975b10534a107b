pub mod complex;
mod core;
mod simd;
#[cfg(target_arch = "x86_64")]
mod avx2;

pub use crate::common::{ FftError, FftProcess };
pub use complex::FourierTransformer;
pub use simd::simd_available;
