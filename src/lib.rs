#![no_std]

// Tables and scratch buffers are heap allocated.
extern crate alloc;

// The runtime CPU probe needs std; tests always get it.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod common;
pub mod float;

pub use common::{FftError, FftProcess, MIN_DEGREE, bit_reverse_in_place};
pub use float::{FourierTransformer, simd_available};
pub use num_complex::Complex64;
