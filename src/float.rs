//! 4-lane 32-bit float vector.

use crate::backend;
use crate::int::I32x4;
use crate::mask::Mask4;
use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// A vector of four `f32` lanes.
///
/// The floating-point counterpart of [`I32x4`], with the same layout and
/// transfer contract. Comparisons return a [`Mask4`]; conversion to the
/// integer vector truncates toward zero.
///
/// `recip`, `rsqrt`, and `sqrt` are approximate on the hardware backends:
/// a coarse estimate instruction refined with Newton-Raphson steps to
/// single-precision working accuracy. Callers comparing their results should
/// use a tolerance, not bit equality. The one exception is `sqrt` of an
/// exactly-zero lane, which is exactly `0.0` by construction.
#[derive(Copy, Clone, Default)]
#[repr(transparent)]
pub struct F32x4(pub(crate) backend::F32Reg);

impl F32x4 {
    /// Number of lanes.
    pub const LANES: usize = 4;

    /// Broadcasts `val` to all 4 lanes.
    #[inline(always)]
    #[must_use]
    pub fn splat(val: f32) -> Self {
        Self(backend::F32Reg::splat(val))
    }

    /// Builds a vector from explicit lane values, lane 0 first.
    #[inline(always)]
    #[must_use]
    pub fn new(v0: f32, v1: f32, v2: f32, v3: f32) -> Self {
        Self(backend::F32Reg::new(v0, v1, v2, v3))
    }

    /// Builds a vector from an array, `arr[0]` in lane 0.
    #[inline(always)]
    #[must_use]
    pub fn from_array(arr: [f32; 4]) -> Self {
        Self(backend::F32Reg::new(arr[0], arr[1], arr[2], arr[3]))
    }

    /// Reads the lanes out as an array, lane 0 first.
    #[inline(always)]
    pub fn to_array(self) -> [f32; 4] {
        self.0.to_array()
    }

    /// Loads 4 lanes from the front of a slice.
    ///
    /// # Panics
    /// Panics if `slice.len() < 4`.
    #[inline(always)]
    #[must_use]
    pub fn from_slice(slice: &[f32]) -> Self {
        assert!(slice.len() >= Self::LANES);
        unsafe { Self(backend::F32Reg::load(slice.as_ptr())) }
    }

    /// Writes the 4 lanes to the front of a slice.
    ///
    /// # Panics
    /// Panics if `slice.len() < 4`.
    #[inline(always)]
    pub fn write_to_slice(self, slice: &mut [f32]) {
        assert!(slice.len() >= Self::LANES);
        unsafe { self.0.store(slice.as_mut_ptr()) }
    }

    /// Loads 4 contiguous lanes from `ptr`, any alignment.
    ///
    /// # Safety
    /// `ptr` must be valid for reading 4 `f32` values.
    #[inline(always)]
    #[must_use]
    pub unsafe fn load(ptr: *const f32) -> Self {
        unsafe { Self(backend::F32Reg::load(ptr)) }
    }

    /// Loads 4 contiguous lanes from a 16-byte-aligned `ptr`.
    ///
    /// Alignment is a performance hint; the result is identical to
    /// [`F32x4::load`].
    ///
    /// # Safety
    /// `ptr` must be valid for reading 4 `f32` values and 16-byte aligned.
    #[inline(always)]
    #[must_use]
    pub unsafe fn load_aligned(ptr: *const f32) -> Self {
        unsafe { Self(backend::F32Reg::load_aligned(ptr)) }
    }

    /// Stores the 4 lanes to `ptr`, any alignment.
    ///
    /// # Safety
    /// `ptr` must be valid for writing 4 `f32` values.
    #[inline(always)]
    pub unsafe fn store(self, ptr: *mut f32) {
        unsafe { self.0.store(ptr) }
    }

    /// Stores the 4 lanes to a 16-byte-aligned `ptr`.
    ///
    /// # Safety
    /// `ptr` must be valid for writing 4 `f32` values and 16-byte aligned.
    #[inline(always)]
    pub unsafe fn store_aligned(self, ptr: *mut f32) {
        unsafe { self.0.store_aligned(ptr) }
    }

    /// Reads lane `idx`.
    ///
    /// # Panics
    /// Panics if `idx >= 4`.
    #[inline(always)]
    pub fn extract(self, idx: usize) -> f32 {
        self.to_array()[idx]
    }

    /// Wraps a raw backend register.
    #[inline(always)]
    #[must_use]
    pub fn from_raw(reg: backend::F32Reg) -> Self {
        Self(reg)
    }

    /// Unwraps the backend register.
    #[inline(always)]
    pub fn into_raw(self) -> backend::F32Reg {
        self.0
    }

    /// Lanewise equality (IEEE-754 semantics: NaN lanes compare unequal,
    /// `-0.0 == 0.0`).
    #[inline(always)]
    #[must_use]
    pub fn simd_eq(self, rhs: Self) -> Mask4 {
        Mask4(self.0.cmp_eq(rhs.0))
    }

    /// Lanewise inequality, the complement of [`F32x4::simd_eq`].
    #[inline(always)]
    #[must_use]
    pub fn simd_ne(self, rhs: Self) -> Mask4 {
        !self.simd_eq(rhs)
    }

    /// Lanewise `self < rhs`.
    #[inline(always)]
    #[must_use]
    pub fn simd_lt(self, rhs: Self) -> Mask4 {
        Mask4(self.0.cmp_lt(rhs.0))
    }

    /// Lanewise `self <= rhs`.
    #[inline(always)]
    #[must_use]
    pub fn simd_le(self, rhs: Self) -> Mask4 {
        Mask4(self.0.cmp_le(rhs.0))
    }

    /// Lanewise `self > rhs`, defined as `rhs < self`.
    #[inline(always)]
    #[must_use]
    pub fn simd_gt(self, rhs: Self) -> Mask4 {
        rhs.simd_lt(self)
    }

    /// Lanewise `self >= rhs`, defined as `rhs <= self`.
    #[inline(always)]
    #[must_use]
    pub fn simd_ge(self, rhs: Self) -> Mask4 {
        rhs.simd_le(self)
    }

    /// Lanewise minimum.
    #[inline(always)]
    #[must_use]
    pub fn min(self, rhs: Self) -> Self {
        Self(self.0.min(rhs.0))
    }

    /// Lanewise maximum.
    #[inline(always)]
    #[must_use]
    pub fn max(self, rhs: Self) -> Self {
        Self(self.0.max(rhs.0))
    }

    /// Approximate lanewise reciprocal `1/x`.
    ///
    /// Hardware estimate plus two Newton-Raphson refinement steps on the
    /// SIMD backends; exact division on the scalar backend.
    #[inline(always)]
    #[must_use]
    pub fn recip(self) -> Self {
        Self(self.0.recip())
    }

    /// Approximate lanewise reciprocal square root `1/sqrt(x)`.
    #[inline(always)]
    #[must_use]
    pub fn rsqrt(self) -> Self {
        Self(self.0.rsqrt())
    }

    /// Lanewise square root.
    ///
    /// Computed as `x * rsqrt(x)` on the SIMD backends, with exactly-zero
    /// input lanes passed through unchanged so `sqrt(0.0)` is exactly `0.0`.
    /// Negative lanes produce NaN.
    #[inline(always)]
    #[must_use]
    pub fn sqrt(self) -> Self {
        Self(self.0.sqrt())
    }

    /// Lanewise round toward negative infinity.
    #[inline(always)]
    #[must_use]
    pub fn floor(self) -> Self {
        Self(self.0.floor())
    }

    /// Lanewise round toward positive infinity.
    #[inline(always)]
    #[must_use]
    pub fn ceil(self) -> Self {
        Self(self.0.ceil())
    }

    /// Sums all 4 lanes (pairwise reduction; the rounding of the result may
    /// differ from a left-to-right scalar sum in the last bit).
    #[inline(always)]
    pub fn sum(self) -> f32 {
        self.0.sum()
    }

    /// Dot product: `sum(self * rhs)`.
    #[inline(always)]
    pub fn dot(self, rhs: Self) -> f32 {
        (self * rhs).sum()
    }

    /// Lanewise blend: picks `a` where `mask` is set, `b` elsewhere.
    #[inline(always)]
    #[must_use]
    pub fn select(mask: Mask4, a: Self, b: Self) -> Self {
        Self(backend::F32Reg::select(mask.0, a.0, b.0))
    }

    /// Converts each lane to `i32`, truncating toward zero.
    ///
    /// `2.9` becomes `2` and `-2.9` becomes `-2`; downstream fixed-point
    /// code depends on truncation rather than round-to-nearest.
    #[inline(always)]
    #[must_use]
    pub fn to_int(self) -> I32x4 {
        I32x4(self.0.to_i32())
    }
}

/// Lanewise `i32` to `f32` conversion.
impl From<I32x4> for F32x4 {
    #[inline(always)]
    fn from(v: I32x4) -> Self {
        v.to_f32()
    }
}

impl Add for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.add(rhs.0))
    }
}

impl AddAssign for F32x4 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.sub(rhs.0))
    }
}

impl SubAssign for F32x4 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0.mul(rhs.0))
    }
}

impl MulAssign for F32x4 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self(self.0.div(rhs.0))
    }
}

impl DivAssign for F32x4 {
    #[inline(always)]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Neg for F32x4 {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self(self.0.neg())
    }
}

impl From<[f32; 4]> for F32x4 {
    #[inline(always)]
    fn from(arr: [f32; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl Display for F32x4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let arr = self.to_array();
        write!(f, "({}, {}, {}, {})", arr[0], arr[1], arr[2], arr[3])
    }
}

impl Debug for F32x4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "F32x4({:?})", self.to_array())
    }
}
