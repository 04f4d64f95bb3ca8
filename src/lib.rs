//! # quadlane
//!
//! Portable fixed-width SIMD vector types for image and vision workloads.
//!
//! Two 128-bit value types carry the whole API:
//!
//! - [`I32x4`]: four `i32` lanes with arithmetic, bitwise, shift,
//!   comparison, min/max, horizontal sum, and blend operations.
//! - [`F32x4`]: four `f32` lanes adding division, reciprocal, square root,
//!   floor/ceil, and dot product, plus truncating conversion to [`I32x4`].
//!
//! Comparisons produce a [`Mask4`], one all-ones/all-zeros truth value per
//! lane, consumed by the `select` blend on either vector type:
//!
//! ```
//! use quadlane::F32x4;
//!
//! let a = F32x4::new(1.0, 5.0, 2.0, 8.0);
//! let b = F32x4::new(4.0, 3.0, 6.0, 7.0);
//! let low = F32x4::select(a.simd_lt(b), a, b);
//! assert_eq!(low.to_array(), a.min(b).to_array());
//! ```
//!
//! All operations are pure: they consume one or two vectors and produce a
//! new value, with no heap allocation and no shared state. Intrinsic calls
//! live behind a single backend boundary ([`backend`]) selected per target
//! architecture, so x86 (SSE2), AArch64 (NEON), and portable-scalar builds
//! expose identical behavior.

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

pub mod backend;
mod float;
mod int;
mod mask;

pub use float::F32x4;
pub use int::I32x4;
pub use mask::Mask4;
