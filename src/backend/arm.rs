//! ARM NEON backend (AArch64).
//!
//! NEON intrinsics are strongly typed, so the three register newtypes wrap
//! `int32x4_t`, `float32x4_t`, and `uint32x4_t` directly. Unlike x86 there
//! are no aligned/unaligned load variants; `vld1q`/`vst1q` accept any
//! address, so the aligned entry points are behaviorally identical.

use core::arch::aarch64::*;

/// 4-lane i32 register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct I32Reg(int32x4_t);

/// 4-lane f32 register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct F32Reg(float32x4_t);

/// 4-lane comparison mask register.
///
/// NEON comparisons produce `uint32x4_t` with each lane all-1s or all-0s.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct MaskReg(uint32x4_t);

impl Default for I32Reg {
    fn default() -> Self {
        unsafe { Self(vdupq_n_s32(0)) }
    }
}

impl Default for F32Reg {
    fn default() -> Self {
        unsafe { Self(vdupq_n_f32(0.0)) }
    }
}

impl Default for MaskReg {
    fn default() -> Self {
        unsafe { Self(vdupq_n_u32(0)) }
    }
}

// ============================================================================
// I32Reg
// ============================================================================

impl I32Reg {
    #[inline(always)]
    pub fn splat(val: i32) -> Self {
        unsafe { Self(vdupq_n_s32(val)) }
    }

    #[inline(always)]
    pub fn new(v0: i32, v1: i32, v2: i32, v3: i32) -> Self {
        let arr = [v0, v1, v2, v3];
        unsafe { Self(vld1q_s32(arr.as_ptr())) }
    }

    /// # Safety
    /// `ptr` must be valid for reading 4 contiguous `i32` values.
    #[inline(always)]
    pub unsafe fn load(ptr: *const i32) -> Self {
        unsafe { Self(vld1q_s32(ptr)) }
    }

    /// # Safety
    /// Same as [`I32Reg::load`]; alignment is a performance hint only on
    /// this architecture.
    #[inline(always)]
    pub unsafe fn load_aligned(ptr: *const i32) -> Self {
        unsafe { Self(vld1q_s32(ptr)) }
    }

    /// # Safety
    /// `ptr` must be valid for writing 4 contiguous `i32` values.
    #[inline(always)]
    pub unsafe fn store(self, ptr: *mut i32) {
        unsafe { vst1q_s32(ptr, self.0) }
    }

    /// # Safety
    /// Same as [`I32Reg::store`].
    #[inline(always)]
    pub unsafe fn store_aligned(self, ptr: *mut i32) {
        unsafe { vst1q_s32(ptr, self.0) }
    }

    #[inline(always)]
    pub fn to_array(self) -> [i32; 4] {
        let mut arr = [0i32; 4];
        unsafe { self.store(arr.as_mut_ptr()) };
        arr
    }

    #[inline(always)]
    pub fn add(self, rhs: Self) -> Self {
        unsafe { Self(vaddq_s32(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn sub(self, rhs: Self) -> Self {
        unsafe { Self(vsubq_s32(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn mul(self, rhs: Self) -> Self {
        unsafe { Self(vmulq_s32(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn bitand(self, rhs: Self) -> Self {
        unsafe { Self(vandq_s32(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn bitor(self, rhs: Self) -> Self {
        unsafe { Self(vorrq_s32(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn bitxor(self, rhs: Self) -> Self {
        unsafe { Self(veorq_s32(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn not(self) -> Self {
        unsafe { Self(vmvnq_s32(self.0)) }
    }

    /// Logical left shift by a uniform count (0..=31).
    #[inline(always)]
    pub fn shl(self, count: i32) -> Self {
        unsafe { Self(vshlq_s32(self.0, vdupq_n_s32(count))) }
    }

    /// Arithmetic (sign-preserving) right shift by a uniform count (0..=31).
    ///
    /// `vshlq_s32` with a negative count performs an arithmetic right shift
    /// on signed operands.
    #[inline(always)]
    pub fn shr(self, count: i32) -> Self {
        unsafe { Self(vshlq_s32(self.0, vdupq_n_s32(-count))) }
    }

    #[inline(always)]
    pub fn cmp_eq(self, rhs: Self) -> MaskReg {
        unsafe { MaskReg(vceqq_s32(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn cmp_lt(self, rhs: Self) -> MaskReg {
        unsafe { MaskReg(vcltq_s32(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn cmp_le(self, rhs: Self) -> MaskReg {
        unsafe { MaskReg(vcleq_s32(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn min(self, rhs: Self) -> Self {
        unsafe { Self(vminq_s32(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn max(self, rhs: Self) -> Self {
        unsafe { Self(vmaxq_s32(self.0, rhs.0)) }
    }

    /// Pairwise horizontal sum of all 4 lanes.
    #[inline(always)]
    pub fn sum(self) -> i32 {
        unsafe {
            let pairs = vadd_s32(vget_high_s32(self.0), vget_low_s32(self.0));
            vget_lane_s32::<0>(vpadd_s32(pairs, pairs))
        }
    }

    #[inline(always)]
    pub fn select(mask: MaskReg, a: Self, b: Self) -> Self {
        unsafe { Self(vbslq_s32(mask.0, a.0, b.0)) }
    }

    #[inline(always)]
    pub fn to_f32(self) -> F32Reg {
        unsafe { F32Reg(vcvtq_f32_s32(self.0)) }
    }
}

// ============================================================================
// F32Reg
// ============================================================================

impl F32Reg {
    #[inline(always)]
    pub fn splat(val: f32) -> Self {
        unsafe { Self(vdupq_n_f32(val)) }
    }

    #[inline(always)]
    pub fn new(v0: f32, v1: f32, v2: f32, v3: f32) -> Self {
        let arr = [v0, v1, v2, v3];
        unsafe { Self(vld1q_f32(arr.as_ptr())) }
    }

    /// # Safety
    /// `ptr` must be valid for reading 4 contiguous `f32` values.
    #[inline(always)]
    pub unsafe fn load(ptr: *const f32) -> Self {
        unsafe { Self(vld1q_f32(ptr)) }
    }

    /// # Safety
    /// Same as [`F32Reg::load`].
    #[inline(always)]
    pub unsafe fn load_aligned(ptr: *const f32) -> Self {
        unsafe { Self(vld1q_f32(ptr)) }
    }

    /// # Safety
    /// `ptr` must be valid for writing 4 contiguous `f32` values.
    #[inline(always)]
    pub unsafe fn store(self, ptr: *mut f32) {
        unsafe { vst1q_f32(ptr, self.0) }
    }

    /// # Safety
    /// Same as [`F32Reg::store`].
    #[inline(always)]
    pub unsafe fn store_aligned(self, ptr: *mut f32) {
        unsafe { vst1q_f32(ptr, self.0) }
    }

    #[inline(always)]
    pub fn to_array(self) -> [f32; 4] {
        let mut arr = [0.0f32; 4];
        unsafe { self.store(arr.as_mut_ptr()) };
        arr
    }

    #[inline(always)]
    pub fn add(self, rhs: Self) -> Self {
        unsafe { Self(vaddq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn sub(self, rhs: Self) -> Self {
        unsafe { Self(vsubq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn mul(self, rhs: Self) -> Self {
        unsafe { Self(vmulq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn div(self, rhs: Self) -> Self {
        unsafe { Self(vdivq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn neg(self) -> Self {
        unsafe { Self(vnegq_f32(self.0)) }
    }

    #[inline(always)]
    pub fn cmp_eq(self, rhs: Self) -> MaskReg {
        unsafe { MaskReg(vceqq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn cmp_lt(self, rhs: Self) -> MaskReg {
        unsafe { MaskReg(vcltq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn cmp_le(self, rhs: Self) -> MaskReg {
        unsafe { MaskReg(vcleq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn min(self, rhs: Self) -> Self {
        unsafe { Self(vminq_f32(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn max(self, rhs: Self) -> Self {
        unsafe { Self(vmaxq_f32(self.0, rhs.0)) }
    }

    /// Approximate reciprocal, refined to working precision.
    #[inline(always)]
    pub fn recip(self) -> Self {
        // vrecpe gives ~8 bits. Two Newton-Raphson steps via vrecps,
        // which computes (2 - x*e).
        unsafe {
            let mut e = vrecpeq_f32(self.0);
            e = vmulq_f32(vrecpsq_f32(self.0, e), e);
            e = vmulq_f32(vrecpsq_f32(self.0, e), e);
            Self(e)
        }
    }

    /// Approximate reciprocal square root, refined to working precision.
    #[inline(always)]
    pub fn rsqrt(self) -> Self {
        // vrsqrte gives ~8 bits. One Newton-Raphson step via vrsqrts,
        // which computes (3 - x*e²) / 2.
        unsafe {
            let e = vrsqrteq_f32(self.0);
            let e2 = vmulq_f32(e, e);
            Self(vmulq_f32(e, vrsqrtsq_f32(self.0, e2)))
        }
    }

    /// Square root via `x * rsqrt(x)` with a zero-lane correction.
    #[inline(always)]
    pub fn sqrt(self) -> Self {
        unsafe {
            let r = vmulq_f32(self.0, self.rsqrt().0);
            // rsqrt(0) is Inf, so 0 * Inf would leave NaN. Select the
            // original input wherever a lane is exactly zero.
            let zero = vceqq_f32(self.0, vdupq_n_f32(0.0));
            Self(vbslq_f32(zero, self.0, r))
        }
    }

    #[inline(always)]
    pub fn floor(self) -> Self {
        unsafe { Self(vrndmq_f32(self.0)) }
    }

    #[inline(always)]
    pub fn ceil(self) -> Self {
        unsafe { Self(vrndpq_f32(self.0)) }
    }

    /// Pairwise horizontal sum of all 4 lanes.
    #[inline(always)]
    pub fn sum(self) -> f32 {
        unsafe {
            let pairs = vadd_f32(vget_high_f32(self.0), vget_low_f32(self.0));
            vget_lane_f32::<0>(vpadd_f32(pairs, pairs))
        }
    }

    #[inline(always)]
    pub fn select(mask: MaskReg, a: Self, b: Self) -> Self {
        unsafe { Self(vbslq_f32(mask.0, a.0, b.0)) }
    }

    /// Converts each lane to `i32`, truncating toward zero.
    #[inline(always)]
    pub fn to_i32(self) -> I32Reg {
        unsafe { I32Reg(vcvtq_s32_f32(self.0)) }
    }
}

// ============================================================================
// MaskReg
// ============================================================================

impl MaskReg {
    #[inline(always)]
    pub fn splat(val: bool) -> Self {
        unsafe { Self(vdupq_n_u32(if val { !0 } else { 0 })) }
    }

    #[inline(always)]
    pub fn bitand(self, rhs: Self) -> Self {
        unsafe { Self(vandq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn bitor(self, rhs: Self) -> Self {
        unsafe { Self(vorrq_u32(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn not(self) -> Self {
        unsafe { Self(vmvnq_u32(self.0)) }
    }

    #[inline(always)]
    pub fn any(self) -> bool {
        unsafe { vmaxvq_u32(self.0) != 0 }
    }

    #[inline(always)]
    pub fn all(self) -> bool {
        unsafe { vminvq_u32(self.0) != 0 }
    }

    #[inline(always)]
    pub fn to_int(self) -> I32Reg {
        unsafe { I32Reg(vreinterpretq_s32_u32(self.0)) }
    }

    #[inline(always)]
    pub fn from_int(reg: I32Reg) -> Self {
        unsafe { Self(vreinterpretq_u32_s32(reg.0)) }
    }
}
