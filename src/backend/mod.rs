//! Architecture-specific SIMD register implementations.
//!
//! Each backend module defines three register newtypes with an identical
//! inherent-method surface:
//!
//! - `I32Reg`: 4 lanes of `i32`
//! - `F32Reg`: 4 lanes of `f32`
//! - `MaskReg`: 4 lanes of all-ones / all-zeros comparison results
//!
//! The front-end types ([`crate::I32x4`], [`crate::F32x4`], [`crate::Mask4`])
//! wrap these and never touch intrinsics directly, so swapping the backend
//! never touches call sites. Exactly one backend is selected per target
//! architecture at compile time.
//!
//! Backends implement only the `eq`, `lt`, and `le` comparisons. The
//! remaining comparisons are derived at the front layer (`ne` as the
//! complement of `eq`, `gt`/`ge` as argument-reversed `lt`/`le`) so the
//! derivation relationships hold identically on every platform.

#[cfg(target_arch = "x86_64")]
pub mod x86;
#[cfg(target_arch = "x86_64")]
pub use x86::{F32Reg, I32Reg, MaskReg};

#[cfg(target_arch = "aarch64")]
pub mod arm;
#[cfg(target_arch = "aarch64")]
pub use arm::{F32Reg, I32Reg, MaskReg};

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub mod scalar;
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub use scalar::{F32Reg, I32Reg, MaskReg};
