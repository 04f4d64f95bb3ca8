//! Portable scalar backend.
//!
//! Lane-by-lane reference implementation for targets without SSE2 or NEON.
//! Integer arithmetic uses `wrapping_*` to match hardware SIMD semantics;
//! float math that has no direct operator goes through `libm`.

/// 4-lane i32 register.
#[derive(Copy, Clone, Default)]
#[repr(transparent)]
pub struct I32Reg([i32; 4]);

/// 4-lane f32 register.
#[derive(Copy, Clone, Default)]
#[repr(transparent)]
pub struct F32Reg([f32; 4]);

/// 4-lane comparison mask register, each lane `!0` or `0`.
#[derive(Copy, Clone, Default)]
#[repr(transparent)]
pub struct MaskReg([u32; 4]);

#[inline(always)]
fn map2_i32(a: [i32; 4], b: [i32; 4], f: impl Fn(i32, i32) -> i32) -> [i32; 4] {
    [f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2]), f(a[3], b[3])]
}

#[inline(always)]
fn map2_f32(a: [f32; 4], b: [f32; 4], f: impl Fn(f32, f32) -> f32) -> [f32; 4] {
    [f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2]), f(a[3], b[3])]
}

#[inline(always)]
fn cmp2_f32(a: [f32; 4], b: [f32; 4], f: impl Fn(f32, f32) -> bool) -> MaskReg {
    MaskReg([
        if f(a[0], b[0]) { !0 } else { 0 },
        if f(a[1], b[1]) { !0 } else { 0 },
        if f(a[2], b[2]) { !0 } else { 0 },
        if f(a[3], b[3]) { !0 } else { 0 },
    ])
}

#[inline(always)]
fn cmp2_i32(a: [i32; 4], b: [i32; 4], f: impl Fn(i32, i32) -> bool) -> MaskReg {
    MaskReg([
        if f(a[0], b[0]) { !0 } else { 0 },
        if f(a[1], b[1]) { !0 } else { 0 },
        if f(a[2], b[2]) { !0 } else { 0 },
        if f(a[3], b[3]) { !0 } else { 0 },
    ])
}

// ============================================================================
// I32Reg
// ============================================================================

impl I32Reg {
    #[inline(always)]
    pub fn splat(val: i32) -> Self {
        Self([val; 4])
    }

    #[inline(always)]
    pub fn new(v0: i32, v1: i32, v2: i32, v3: i32) -> Self {
        Self([v0, v1, v2, v3])
    }

    /// # Safety
    /// `ptr` must be valid for reading 4 contiguous `i32` values.
    #[inline(always)]
    pub unsafe fn load(ptr: *const i32) -> Self {
        unsafe { Self(core::ptr::read_unaligned(ptr as *const [i32; 4])) }
    }

    /// # Safety
    /// Same as [`I32Reg::load`]; alignment is a performance hint only on
    /// this backend.
    #[inline(always)]
    pub unsafe fn load_aligned(ptr: *const i32) -> Self {
        unsafe { Self::load(ptr) }
    }

    /// # Safety
    /// `ptr` must be valid for writing 4 contiguous `i32` values.
    #[inline(always)]
    pub unsafe fn store(self, ptr: *mut i32) {
        unsafe { core::ptr::write_unaligned(ptr as *mut [i32; 4], self.0) }
    }

    /// # Safety
    /// Same as [`I32Reg::store`].
    #[inline(always)]
    pub unsafe fn store_aligned(self, ptr: *mut i32) {
        unsafe { self.store(ptr) }
    }

    #[inline(always)]
    pub fn to_array(self) -> [i32; 4] {
        self.0
    }

    #[inline(always)]
    pub fn add(self, rhs: Self) -> Self {
        Self(map2_i32(self.0, rhs.0, i32::wrapping_add))
    }

    #[inline(always)]
    pub fn sub(self, rhs: Self) -> Self {
        Self(map2_i32(self.0, rhs.0, i32::wrapping_sub))
    }

    #[inline(always)]
    pub fn mul(self, rhs: Self) -> Self {
        Self(map2_i32(self.0, rhs.0, i32::wrapping_mul))
    }

    #[inline(always)]
    pub fn bitand(self, rhs: Self) -> Self {
        Self(map2_i32(self.0, rhs.0, |a, b| a & b))
    }

    #[inline(always)]
    pub fn bitor(self, rhs: Self) -> Self {
        Self(map2_i32(self.0, rhs.0, |a, b| a | b))
    }

    #[inline(always)]
    pub fn bitxor(self, rhs: Self) -> Self {
        Self(map2_i32(self.0, rhs.0, |a, b| a ^ b))
    }

    #[inline(always)]
    pub fn not(self) -> Self {
        Self([!self.0[0], !self.0[1], !self.0[2], !self.0[3]])
    }

    /// Logical left shift by a uniform count (0..=31).
    #[inline(always)]
    pub fn shl(self, count: i32) -> Self {
        let arr = self.0;
        Self([
            arr[0] << count,
            arr[1] << count,
            arr[2] << count,
            arr[3] << count,
        ])
    }

    /// Arithmetic (sign-preserving) right shift by a uniform count (0..=31).
    #[inline(always)]
    pub fn shr(self, count: i32) -> Self {
        // `>>` on i32 is arithmetic in Rust.
        let arr = self.0;
        Self([
            arr[0] >> count,
            arr[1] >> count,
            arr[2] >> count,
            arr[3] >> count,
        ])
    }

    #[inline(always)]
    pub fn cmp_eq(self, rhs: Self) -> MaskReg {
        cmp2_i32(self.0, rhs.0, |a, b| a == b)
    }

    #[inline(always)]
    pub fn cmp_lt(self, rhs: Self) -> MaskReg {
        cmp2_i32(self.0, rhs.0, |a, b| a < b)
    }

    #[inline(always)]
    pub fn cmp_le(self, rhs: Self) -> MaskReg {
        cmp2_i32(self.0, rhs.0, |a, b| a <= b)
    }

    #[inline(always)]
    pub fn min(self, rhs: Self) -> Self {
        Self(map2_i32(self.0, rhs.0, i32::min))
    }

    #[inline(always)]
    pub fn max(self, rhs: Self) -> Self {
        Self(map2_i32(self.0, rhs.0, i32::max))
    }

    /// Pairwise horizontal sum of all 4 lanes.
    #[inline(always)]
    pub fn sum(self) -> i32 {
        let arr = self.0;
        arr[0]
            .wrapping_add(arr[2])
            .wrapping_add(arr[1].wrapping_add(arr[3]))
    }

    #[inline(always)]
    pub fn select(mask: MaskReg, a: Self, b: Self) -> Self {
        let m = mask.0;
        let pick = |i: usize| (a.0[i] & m[i] as i32) | (b.0[i] & !(m[i] as i32));
        Self([pick(0), pick(1), pick(2), pick(3)])
    }

    #[inline(always)]
    pub fn to_f32(self) -> F32Reg {
        let arr = self.0;
        F32Reg([arr[0] as f32, arr[1] as f32, arr[2] as f32, arr[3] as f32])
    }
}

// ============================================================================
// F32Reg
// ============================================================================

impl F32Reg {
    #[inline(always)]
    pub fn splat(val: f32) -> Self {
        Self([val; 4])
    }

    #[inline(always)]
    pub fn new(v0: f32, v1: f32, v2: f32, v3: f32) -> Self {
        Self([v0, v1, v2, v3])
    }

    /// # Safety
    /// `ptr` must be valid for reading 4 contiguous `f32` values.
    #[inline(always)]
    pub unsafe fn load(ptr: *const f32) -> Self {
        unsafe { Self(core::ptr::read_unaligned(ptr as *const [f32; 4])) }
    }

    /// # Safety
    /// Same as [`F32Reg::load`].
    #[inline(always)]
    pub unsafe fn load_aligned(ptr: *const f32) -> Self {
        unsafe { Self::load(ptr) }
    }

    /// # Safety
    /// `ptr` must be valid for writing 4 contiguous `f32` values.
    #[inline(always)]
    pub unsafe fn store(self, ptr: *mut f32) {
        unsafe { core::ptr::write_unaligned(ptr as *mut [f32; 4], self.0) }
    }

    /// # Safety
    /// Same as [`F32Reg::store`].
    #[inline(always)]
    pub unsafe fn store_aligned(self, ptr: *mut f32) {
        unsafe { self.store(ptr) }
    }

    #[inline(always)]
    pub fn to_array(self) -> [f32; 4] {
        self.0
    }

    #[inline(always)]
    pub fn add(self, rhs: Self) -> Self {
        Self(map2_f32(self.0, rhs.0, |a, b| a + b))
    }

    #[inline(always)]
    pub fn sub(self, rhs: Self) -> Self {
        Self(map2_f32(self.0, rhs.0, |a, b| a - b))
    }

    #[inline(always)]
    pub fn mul(self, rhs: Self) -> Self {
        Self(map2_f32(self.0, rhs.0, |a, b| a * b))
    }

    #[inline(always)]
    pub fn div(self, rhs: Self) -> Self {
        Self(map2_f32(self.0, rhs.0, |a, b| a / b))
    }

    #[inline(always)]
    pub fn neg(self) -> Self {
        Self([-self.0[0], -self.0[1], -self.0[2], -self.0[3]])
    }

    #[inline(always)]
    pub fn cmp_eq(self, rhs: Self) -> MaskReg {
        cmp2_f32(self.0, rhs.0, |a, b| a == b)
    }

    #[inline(always)]
    pub fn cmp_lt(self, rhs: Self) -> MaskReg {
        cmp2_f32(self.0, rhs.0, |a, b| a < b)
    }

    #[inline(always)]
    pub fn cmp_le(self, rhs: Self) -> MaskReg {
        cmp2_f32(self.0, rhs.0, |a, b| a <= b)
    }

    #[inline(always)]
    pub fn min(self, rhs: Self) -> Self {
        Self(map2_f32(self.0, rhs.0, f32::min))
    }

    #[inline(always)]
    pub fn max(self, rhs: Self) -> Self {
        Self(map2_f32(self.0, rhs.0, f32::max))
    }

    /// Exact scalar reciprocal; the hardware backends approximate and refine.
    #[inline(always)]
    pub fn recip(self) -> Self {
        let arr = self.0;
        Self([1.0 / arr[0], 1.0 / arr[1], 1.0 / arr[2], 1.0 / arr[3]])
    }

    #[inline(always)]
    pub fn rsqrt(self) -> Self {
        let arr = self.0;
        Self([
            1.0 / libm::sqrtf(arr[0]),
            1.0 / libm::sqrtf(arr[1]),
            1.0 / libm::sqrtf(arr[2]),
            1.0 / libm::sqrtf(arr[3]),
        ])
    }

    #[inline(always)]
    pub fn sqrt(self) -> Self {
        let arr = self.0;
        Self([
            libm::sqrtf(arr[0]),
            libm::sqrtf(arr[1]),
            libm::sqrtf(arr[2]),
            libm::sqrtf(arr[3]),
        ])
    }

    #[inline(always)]
    pub fn floor(self) -> Self {
        let arr = self.0;
        Self([
            libm::floorf(arr[0]),
            libm::floorf(arr[1]),
            libm::floorf(arr[2]),
            libm::floorf(arr[3]),
        ])
    }

    #[inline(always)]
    pub fn ceil(self) -> Self {
        let arr = self.0;
        Self([
            libm::ceilf(arr[0]),
            libm::ceilf(arr[1]),
            libm::ceilf(arr[2]),
            libm::ceilf(arr[3]),
        ])
    }

    /// Pairwise horizontal sum of all 4 lanes.
    #[inline(always)]
    pub fn sum(self) -> f32 {
        let arr = self.0;
        (arr[0] + arr[2]) + (arr[1] + arr[3])
    }

    #[inline(always)]
    pub fn select(mask: MaskReg, a: Self, b: Self) -> Self {
        let m = mask.0;
        let pick = |i: usize| {
            f32::from_bits((a.0[i].to_bits() & m[i]) | (b.0[i].to_bits() & !m[i]))
        };
        Self([pick(0), pick(1), pick(2), pick(3)])
    }

    /// Converts each lane to `i32`, truncating toward zero.
    #[inline(always)]
    pub fn to_i32(self) -> I32Reg {
        let arr = self.0;
        I32Reg([arr[0] as i32, arr[1] as i32, arr[2] as i32, arr[3] as i32])
    }
}

// ============================================================================
// MaskReg
// ============================================================================

impl MaskReg {
    #[inline(always)]
    pub fn splat(val: bool) -> Self {
        Self([if val { !0 } else { 0 }; 4])
    }

    #[inline(always)]
    pub fn bitand(self, rhs: Self) -> Self {
        Self([
            self.0[0] & rhs.0[0],
            self.0[1] & rhs.0[1],
            self.0[2] & rhs.0[2],
            self.0[3] & rhs.0[3],
        ])
    }

    #[inline(always)]
    pub fn bitor(self, rhs: Self) -> Self {
        Self([
            self.0[0] | rhs.0[0],
            self.0[1] | rhs.0[1],
            self.0[2] | rhs.0[2],
            self.0[3] | rhs.0[3],
        ])
    }

    #[inline(always)]
    pub fn not(self) -> Self {
        Self([!self.0[0], !self.0[1], !self.0[2], !self.0[3]])
    }

    #[inline(always)]
    pub fn any(self) -> bool {
        self.0.iter().any(|&l| l != 0)
    }

    #[inline(always)]
    pub fn all(self) -> bool {
        self.0.iter().all(|&l| l != 0)
    }

    #[inline(always)]
    pub fn to_int(self) -> I32Reg {
        let m = self.0;
        I32Reg([m[0] as i32, m[1] as i32, m[2] as i32, m[3] as i32])
    }

    #[inline(always)]
    pub fn from_int(reg: I32Reg) -> Self {
        let arr = reg.0;
        Self([arr[0] as u32, arr[1] as u32, arr[2] as u32, arr[3] as u32])
    }
}
