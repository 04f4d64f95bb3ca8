//! x86_64 SSE2 backend.
//!
//! Targets baseline SSE2 so the crate runs on any x86_64 CPU. Operations
//! SSE2 lacks (`mullo_epi32`, `min_epi32`/`max_epi32`, vector floor/ceil)
//! are emulated with shuffle and compare sequences.

use core::arch::x86_64::*;

/// 4-lane i32 register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct I32Reg(__m128i);

/// 4-lane f32 register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct F32Reg(__m128);

/// 4-lane comparison mask register.
///
/// Each lane is either all-1s (0xFFFFFFFF) or all-0s. SSE2 has no separate
/// mask register file, so masks live in ordinary integer registers.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct MaskReg(__m128i);

impl Default for I32Reg {
    fn default() -> Self {
        unsafe { Self(_mm_setzero_si128()) }
    }
}

impl Default for F32Reg {
    fn default() -> Self {
        unsafe { Self(_mm_setzero_ps()) }
    }
}

impl Default for MaskReg {
    fn default() -> Self {
        unsafe { Self(_mm_setzero_si128()) }
    }
}

// ============================================================================
// I32Reg
// ============================================================================

impl I32Reg {
    #[inline(always)]
    pub fn splat(val: i32) -> Self {
        unsafe { Self(_mm_set1_epi32(val)) }
    }

    #[inline(always)]
    pub fn new(v0: i32, v1: i32, v2: i32, v3: i32) -> Self {
        // _mm_set_epi32 takes arguments high lane first.
        unsafe { Self(_mm_set_epi32(v3, v2, v1, v0)) }
    }

    /// # Safety
    /// `ptr` must be valid for reading 4 contiguous `i32` values.
    #[inline(always)]
    pub unsafe fn load(ptr: *const i32) -> Self {
        unsafe { Self(_mm_loadu_si128(ptr as *const __m128i)) }
    }

    /// # Safety
    /// `ptr` must be valid for reading 4 contiguous `i32` values and
    /// 16-byte aligned.
    #[inline(always)]
    pub unsafe fn load_aligned(ptr: *const i32) -> Self {
        unsafe { Self(_mm_load_si128(ptr as *const __m128i)) }
    }

    /// # Safety
    /// `ptr` must be valid for writing 4 contiguous `i32` values.
    #[inline(always)]
    pub unsafe fn store(self, ptr: *mut i32) {
        unsafe { _mm_storeu_si128(ptr as *mut __m128i, self.0) }
    }

    /// # Safety
    /// `ptr` must be valid for writing 4 contiguous `i32` values and
    /// 16-byte aligned.
    #[inline(always)]
    pub unsafe fn store_aligned(self, ptr: *mut i32) {
        unsafe { _mm_store_si128(ptr as *mut __m128i, self.0) }
    }

    #[inline(always)]
    pub fn to_array(self) -> [i32; 4] {
        let mut arr = [0i32; 4];
        unsafe { self.store(arr.as_mut_ptr()) };
        arr
    }

    #[inline(always)]
    pub fn add(self, rhs: Self) -> Self {
        unsafe { Self(_mm_add_epi32(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn sub(self, rhs: Self) -> Self {
        unsafe { Self(_mm_sub_epi32(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn mul(self, rhs: Self) -> Self {
        // SSE2 has no mullo_epi32. Multiply even and odd lanes as 64-bit
        // products, then interleave the low 32 bits of each. The low halves
        // match signed wrapping multiplication.
        unsafe {
            let prod02 = _mm_mul_epu32(self.0, rhs.0);
            let prod13 = _mm_mul_epu32(
                _mm_srli_si128::<4>(self.0),
                _mm_srli_si128::<4>(rhs.0),
            );
            let lo02 = _mm_shuffle_epi32::<0b00_00_10_00>(prod02);
            let lo13 = _mm_shuffle_epi32::<0b00_00_10_00>(prod13);
            Self(_mm_unpacklo_epi32(lo02, lo13))
        }
    }

    #[inline(always)]
    pub fn bitand(self, rhs: Self) -> Self {
        unsafe { Self(_mm_and_si128(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn bitor(self, rhs: Self) -> Self {
        unsafe { Self(_mm_or_si128(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn bitxor(self, rhs: Self) -> Self {
        unsafe { Self(_mm_xor_si128(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn not(self) -> Self {
        unsafe { Self(_mm_xor_si128(self.0, _mm_set1_epi32(-1))) }
    }

    /// Logical left shift by a uniform count (0..=31).
    #[inline(always)]
    pub fn shl(self, count: i32) -> Self {
        unsafe { Self(_mm_sll_epi32(self.0, _mm_cvtsi32_si128(count))) }
    }

    /// Arithmetic (sign-preserving) right shift by a uniform count (0..=31).
    #[inline(always)]
    pub fn shr(self, count: i32) -> Self {
        unsafe { Self(_mm_sra_epi32(self.0, _mm_cvtsi32_si128(count))) }
    }

    #[inline(always)]
    pub fn cmp_eq(self, rhs: Self) -> MaskReg {
        unsafe { MaskReg(_mm_cmpeq_epi32(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn cmp_lt(self, rhs: Self) -> MaskReg {
        unsafe { MaskReg(_mm_cmplt_epi32(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn cmp_le(self, rhs: Self) -> MaskReg {
        // a <= b  ==  !(a > b)
        unsafe {
            let gt = _mm_cmpgt_epi32(self.0, rhs.0);
            MaskReg(_mm_xor_si128(gt, _mm_set1_epi32(-1)))
        }
    }

    #[inline(always)]
    pub fn min(self, rhs: Self) -> Self {
        // min_epi32 is SSE4.1; blend through a compare mask instead.
        unsafe {
            let lt = _mm_cmplt_epi32(self.0, rhs.0);
            Self(_mm_or_si128(
                _mm_and_si128(lt, self.0),
                _mm_andnot_si128(lt, rhs.0),
            ))
        }
    }

    #[inline(always)]
    pub fn max(self, rhs: Self) -> Self {
        unsafe {
            let gt = _mm_cmpgt_epi32(self.0, rhs.0);
            Self(_mm_or_si128(
                _mm_and_si128(gt, self.0),
                _mm_andnot_si128(gt, rhs.0),
            ))
        }
    }

    /// Pairwise horizontal sum of all 4 lanes.
    #[inline(always)]
    pub fn sum(self) -> i32 {
        unsafe {
            // (l0+l2, l1+l3, _, _) then lane0 + lane1.
            let swapped = _mm_shuffle_epi32::<0b01_00_11_10>(self.0);
            let pairs = _mm_add_epi32(self.0, swapped);
            let lane1 = _mm_shuffle_epi32::<0b00_00_00_01>(pairs);
            _mm_cvtsi128_si32(_mm_add_epi32(pairs, lane1))
        }
    }

    #[inline(always)]
    pub fn select(mask: MaskReg, a: Self, b: Self) -> Self {
        unsafe {
            Self(_mm_or_si128(
                _mm_and_si128(mask.0, a.0),
                _mm_andnot_si128(mask.0, b.0),
            ))
        }
    }

    #[inline(always)]
    pub fn to_f32(self) -> F32Reg {
        unsafe { F32Reg(_mm_cvtepi32_ps(self.0)) }
    }
}

// ============================================================================
// F32Reg
// ============================================================================

impl F32Reg {
    #[inline(always)]
    pub fn splat(val: f32) -> Self {
        unsafe { Self(_mm_set1_ps(val)) }
    }

    #[inline(always)]
    pub fn new(v0: f32, v1: f32, v2: f32, v3: f32) -> Self {
        unsafe { Self(_mm_set_ps(v3, v2, v1, v0)) }
    }

    /// # Safety
    /// `ptr` must be valid for reading 4 contiguous `f32` values.
    #[inline(always)]
    pub unsafe fn load(ptr: *const f32) -> Self {
        unsafe { Self(_mm_loadu_ps(ptr)) }
    }

    /// # Safety
    /// `ptr` must be valid for reading 4 contiguous `f32` values and
    /// 16-byte aligned.
    #[inline(always)]
    pub unsafe fn load_aligned(ptr: *const f32) -> Self {
        unsafe { Self(_mm_load_ps(ptr)) }
    }

    /// # Safety
    /// `ptr` must be valid for writing 4 contiguous `f32` values.
    #[inline(always)]
    pub unsafe fn store(self, ptr: *mut f32) {
        unsafe { _mm_storeu_ps(ptr, self.0) }
    }

    /// # Safety
    /// `ptr` must be valid for writing 4 contiguous `f32` values and
    /// 16-byte aligned.
    #[inline(always)]
    pub unsafe fn store_aligned(self, ptr: *mut f32) {
        unsafe { _mm_store_ps(ptr, self.0) }
    }

    #[inline(always)]
    pub fn to_array(self) -> [f32; 4] {
        let mut arr = [0.0f32; 4];
        unsafe { self.store(arr.as_mut_ptr()) };
        arr
    }

    #[inline(always)]
    pub fn add(self, rhs: Self) -> Self {
        unsafe { Self(_mm_add_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn sub(self, rhs: Self) -> Self {
        unsafe { Self(_mm_sub_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn mul(self, rhs: Self) -> Self {
        unsafe { Self(_mm_mul_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn div(self, rhs: Self) -> Self {
        unsafe { Self(_mm_div_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn neg(self) -> Self {
        // Flip the sign bit via XOR with -0.0 in each lane.
        unsafe {
            let sign = _mm_castsi128_ps(_mm_set1_epi32(i32::MIN));
            Self(_mm_xor_ps(self.0, sign))
        }
    }

    #[inline(always)]
    pub fn cmp_eq(self, rhs: Self) -> MaskReg {
        unsafe { MaskReg(_mm_castps_si128(_mm_cmpeq_ps(self.0, rhs.0))) }
    }

    #[inline(always)]
    pub fn cmp_lt(self, rhs: Self) -> MaskReg {
        unsafe { MaskReg(_mm_castps_si128(_mm_cmplt_ps(self.0, rhs.0))) }
    }

    #[inline(always)]
    pub fn cmp_le(self, rhs: Self) -> MaskReg {
        unsafe { MaskReg(_mm_castps_si128(_mm_cmple_ps(self.0, rhs.0))) }
    }

    #[inline(always)]
    pub fn min(self, rhs: Self) -> Self {
        unsafe { Self(_mm_min_ps(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn max(self, rhs: Self) -> Self {
        unsafe { Self(_mm_max_ps(self.0, rhs.0)) }
    }

    /// Approximate reciprocal, refined to working precision.
    #[inline(always)]
    pub fn recip(self) -> Self {
        // rcpps gives ~12 bits. Two Newton-Raphson steps
        // (e = e * (2 - x*e)) bring it to single-precision-reasonable.
        unsafe {
            let two = _mm_set1_ps(2.0);
            let mut e = _mm_rcp_ps(self.0);
            e = _mm_mul_ps(e, _mm_sub_ps(two, _mm_mul_ps(self.0, e)));
            e = _mm_mul_ps(e, _mm_sub_ps(two, _mm_mul_ps(self.0, e)));
            Self(e)
        }
    }

    /// Approximate reciprocal square root, refined to working precision.
    #[inline(always)]
    pub fn rsqrt(self) -> Self {
        // rsqrtps gives ~12 bits. One Newton-Raphson step:
        // e = e * (3 - x*e*e) / 2.
        unsafe {
            let three = _mm_set1_ps(3.0);
            let half = _mm_set1_ps(0.5);
            let e = _mm_rsqrt_ps(self.0);
            let e2 = _mm_mul_ps(e, e);
            let refined = _mm_mul_ps(
                _mm_mul_ps(e, _mm_sub_ps(three, _mm_mul_ps(self.0, e2))),
                half,
            );
            Self(refined)
        }
    }

    /// Square root via `x * rsqrt(x)` with a zero-lane correction.
    #[inline(always)]
    pub fn sqrt(self) -> Self {
        unsafe {
            let r = _mm_mul_ps(self.0, self.rsqrt().0);
            // rsqrt(0) is Inf, so 0 * Inf would leave NaN. Select the
            // original input wherever a lane is exactly zero.
            let zero = _mm_cmpeq_ps(self.0, _mm_setzero_ps());
            Self(_mm_or_ps(
                _mm_and_ps(zero, self.0),
                _mm_andnot_ps(zero, r),
            ))
        }
    }

    #[inline(always)]
    pub fn floor(self) -> Self {
        // SSE2 floor emulation: truncate toward zero, then subtract 1
        // wherever truncation rounded the wrong way (negative non-integers).
        // cvttps turns lanes outside i32 range (and NaN) into the i32
        // sentinel, so only lanes with |x| < 2^23 take the emulated path;
        // larger magnitudes are already integral, and the magnitude compare
        // is false for NaN, so both pass through unchanged.
        unsafe {
            let trunc = _mm_cvtepi32_ps(_mm_cvttps_epi32(self.0));
            let below = _mm_cmplt_ps(self.0, trunc);
            let one = _mm_set1_ps(1.0);
            let emulated = _mm_sub_ps(trunc, _mm_and_ps(below, one));
            let abs = _mm_andnot_ps(_mm_set1_ps(-0.0), self.0);
            let small = _mm_cmplt_ps(abs, _mm_set1_ps(8388608.0));
            Self(_mm_or_ps(
                _mm_and_ps(small, emulated),
                _mm_andnot_ps(small, self.0),
            ))
        }
    }

    #[inline(always)]
    pub fn ceil(self) -> Self {
        // Same structure as `floor`, including the |x| < 2^23 guard.
        unsafe {
            let trunc = _mm_cvtepi32_ps(_mm_cvttps_epi32(self.0));
            let above = _mm_cmpgt_ps(self.0, trunc);
            let one = _mm_set1_ps(1.0);
            let emulated = _mm_add_ps(trunc, _mm_and_ps(above, one));
            let abs = _mm_andnot_ps(_mm_set1_ps(-0.0), self.0);
            let small = _mm_cmplt_ps(abs, _mm_set1_ps(8388608.0));
            Self(_mm_or_ps(
                _mm_and_ps(small, emulated),
                _mm_andnot_ps(small, self.0),
            ))
        }
    }

    /// Pairwise horizontal sum of all 4 lanes.
    #[inline(always)]
    pub fn sum(self) -> f32 {
        unsafe {
            let hi = _mm_movehl_ps(self.0, self.0);
            let pairs = _mm_add_ps(self.0, hi);
            let lane1 = _mm_shuffle_ps::<0b00_00_00_01>(pairs, pairs);
            _mm_cvtss_f32(_mm_add_ss(pairs, lane1))
        }
    }

    #[inline(always)]
    pub fn select(mask: MaskReg, a: Self, b: Self) -> Self {
        unsafe {
            let m = _mm_castsi128_ps(mask.0);
            Self(_mm_or_ps(_mm_and_ps(m, a.0), _mm_andnot_ps(m, b.0)))
        }
    }

    /// Converts each lane to `i32`, truncating toward zero.
    #[inline(always)]
    pub fn to_i32(self) -> I32Reg {
        unsafe { I32Reg(_mm_cvttps_epi32(self.0)) }
    }
}

// ============================================================================
// MaskReg
// ============================================================================

impl MaskReg {
    #[inline(always)]
    pub fn splat(val: bool) -> Self {
        unsafe { Self(_mm_set1_epi32(if val { -1 } else { 0 })) }
    }

    #[inline(always)]
    pub fn bitand(self, rhs: Self) -> Self {
        unsafe { Self(_mm_and_si128(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn bitor(self, rhs: Self) -> Self {
        unsafe { Self(_mm_or_si128(self.0, rhs.0)) }
    }

    #[inline(always)]
    pub fn not(self) -> Self {
        unsafe { Self(_mm_xor_si128(self.0, _mm_set1_epi32(-1))) }
    }

    #[inline(always)]
    pub fn any(self) -> bool {
        unsafe { _mm_movemask_ps(_mm_castsi128_ps(self.0)) != 0 }
    }

    #[inline(always)]
    pub fn all(self) -> bool {
        unsafe { _mm_movemask_ps(_mm_castsi128_ps(self.0)) == 0xF }
    }

    #[inline(always)]
    pub fn to_int(self) -> I32Reg {
        I32Reg(self.0)
    }

    #[inline(always)]
    pub fn from_int(reg: I32Reg) -> Self {
        Self(reg.0)
    }
}
