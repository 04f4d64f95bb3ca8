//! 4-lane signed 32-bit integer vector.

use crate::backend;
use crate::mask::Mask4;
use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Mul,
    MulAssign, Not, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

/// A vector of four `i32` lanes.
///
/// A pure value type: 128 bits on the stack, `Copy`, no heap, no identity
/// beyond its contents. Arithmetic wraps the way hardware SIMD lanes wrap.
/// Comparisons return a [`Mask4`] rather than a `bool`, one truth value per
/// lane, consumed by [`I32x4::select`].
#[derive(Copy, Clone, Default)]
#[repr(transparent)]
pub struct I32x4(pub(crate) backend::I32Reg);

impl I32x4 {
    /// Number of lanes.
    pub const LANES: usize = 4;

    /// Broadcasts `val` to all 4 lanes.
    #[inline(always)]
    #[must_use]
    pub fn splat(val: i32) -> Self {
        Self(backend::I32Reg::splat(val))
    }

    /// Builds a vector from explicit lane values, lane 0 first.
    #[inline(always)]
    #[must_use]
    pub fn new(v0: i32, v1: i32, v2: i32, v3: i32) -> Self {
        Self(backend::I32Reg::new(v0, v1, v2, v3))
    }

    /// Builds a vector from an array, `arr[0]` in lane 0.
    #[inline(always)]
    #[must_use]
    pub fn from_array(arr: [i32; 4]) -> Self {
        Self(backend::I32Reg::new(arr[0], arr[1], arr[2], arr[3]))
    }

    /// Reads the lanes out as an array, lane 0 first.
    #[inline(always)]
    pub fn to_array(self) -> [i32; 4] {
        self.0.to_array()
    }

    /// Loads 4 lanes from the front of a slice.
    ///
    /// # Panics
    /// Panics if `slice.len() < 4`.
    #[inline(always)]
    #[must_use]
    pub fn from_slice(slice: &[i32]) -> Self {
        assert!(slice.len() >= Self::LANES);
        unsafe { Self(backend::I32Reg::load(slice.as_ptr())) }
    }

    /// Writes the 4 lanes to the front of a slice.
    ///
    /// # Panics
    /// Panics if `slice.len() < 4`.
    #[inline(always)]
    pub fn write_to_slice(self, slice: &mut [i32]) {
        assert!(slice.len() >= Self::LANES);
        unsafe { self.0.store(slice.as_mut_ptr()) }
    }

    /// Loads 4 contiguous lanes from `ptr`, any alignment.
    ///
    /// # Safety
    /// `ptr` must be valid for reading 4 `i32` values.
    #[inline(always)]
    #[must_use]
    pub unsafe fn load(ptr: *const i32) -> Self {
        unsafe { Self(backend::I32Reg::load(ptr)) }
    }

    /// Loads 4 contiguous lanes from a 16-byte-aligned `ptr`.
    ///
    /// Alignment is a performance hint; the result is identical to
    /// [`I32x4::load`].
    ///
    /// # Safety
    /// `ptr` must be valid for reading 4 `i32` values and 16-byte aligned.
    #[inline(always)]
    #[must_use]
    pub unsafe fn load_aligned(ptr: *const i32) -> Self {
        unsafe { Self(backend::I32Reg::load_aligned(ptr)) }
    }

    /// Stores the 4 lanes to `ptr`, any alignment.
    ///
    /// # Safety
    /// `ptr` must be valid for writing 4 `i32` values.
    #[inline(always)]
    pub unsafe fn store(self, ptr: *mut i32) {
        unsafe { self.0.store(ptr) }
    }

    /// Stores the 4 lanes to a 16-byte-aligned `ptr`.
    ///
    /// # Safety
    /// `ptr` must be valid for writing 4 `i32` values and 16-byte aligned.
    #[inline(always)]
    pub unsafe fn store_aligned(self, ptr: *mut i32) {
        unsafe { self.0.store_aligned(ptr) }
    }

    /// Reads lane `idx`.
    ///
    /// # Panics
    /// Panics if `idx >= 4`.
    #[inline(always)]
    pub fn extract(self, idx: usize) -> i32 {
        self.to_array()[idx]
    }

    /// Wraps a raw backend register.
    #[inline(always)]
    #[must_use]
    pub fn from_raw(reg: backend::I32Reg) -> Self {
        Self(reg)
    }

    /// Unwraps the backend register.
    #[inline(always)]
    pub fn into_raw(self) -> backend::I32Reg {
        self.0
    }

    /// Lanewise equality. Each lane of the result is all-ones where the
    /// lanes compare equal.
    #[inline(always)]
    #[must_use]
    pub fn simd_eq(self, rhs: Self) -> Mask4 {
        Mask4(self.0.cmp_eq(rhs.0))
    }

    /// Lanewise inequality, the complement of [`I32x4::simd_eq`].
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

    /// Sums all 4 lanes (pairwise, with wrapping adds).
    #[inline(always)]
    pub fn sum(self) -> i32 {
        self.0.sum()
    }

    /// Lanewise blend: picks `a` where `mask` is set, `b` elsewhere.
    #[inline(always)]
    #[must_use]
    pub fn select(mask: Mask4, a: Self, b: Self) -> Self {
        Self(backend::I32Reg::select(mask.0, a.0, b.0))
    }

    /// Converts each lane to `f32`.
    #[inline(always)]
    #[must_use]
    pub fn to_f32(self) -> crate::F32x4 {
        crate::F32x4(self.0.to_f32())
    }
}

impl Add for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.add(rhs.0))
    }
}

impl AddAssign for I32x4 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.sub(rhs.0))
    }
}

impl SubAssign for I32x4 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self(self.0.mul(rhs.0))
    }
}

impl MulAssign for I32x4 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl BitAnd for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0.bitand(rhs.0))
    }
}

impl BitAndAssign for I32x4 {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl BitOr for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0.bitor(rhs.0))
    }
}

impl BitOrAssign for I32x4 {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl BitXor for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0.bitxor(rhs.0))
    }
}

impl BitXorAssign for I32x4 {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

impl Not for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        Self(self.0.not())
    }
}

/// Logical left shift of every lane by a uniform count (0..=31).
impl Shl<i32> for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn shl(self, count: i32) -> Self {
        Self(self.0.shl(count))
    }
}

impl ShlAssign<i32> for I32x4 {
    #[inline(always)]
    fn shl_assign(&mut self, count: i32) {
        *self = *self << count;
    }
}

/// Arithmetic right shift of every lane by a uniform count (0..=31).
///
/// Sign-preserving: negative lanes stay negative, `-8 >> 1 == -4`.
impl Shr<i32> for I32x4 {
    type Output = Self;
    #[inline(always)]
    fn shr(self, count: i32) -> Self {
        Self(self.0.shr(count))
    }
}

impl ShrAssign<i32> for I32x4 {
    #[inline(always)]
    fn shr_assign(&mut self, count: i32) {
        *self = *self >> count;
    }
}

impl From<[i32; 4]> for I32x4 {
    #[inline(always)]
    fn from(arr: [i32; 4]) -> Self {
        Self::from_array(arr)
    }
}

impl Display for I32x4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let arr = self.to_array();
        write!(f, "({}, {}, {}, {})", arr[0], arr[1], arr[2], arr[3])
    }
}

impl Debug for I32x4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "I32x4({:?})", self.to_array())
    }
}
