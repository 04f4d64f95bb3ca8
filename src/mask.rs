//! Lane mask produced by vector comparisons.

use crate::backend;
use core::fmt::{self, Debug, Formatter};
use core::ops::{BitAnd, BitOr, Not};

/// A 4-lane boolean mask.
///
/// Every comparison on [`crate::I32x4`] and [`crate::F32x4`] yields a
/// `Mask4`, and the blend operations consume one. Each lane is either
/// all-bits-one (true) or all-bits-zero (false); that bit pattern is what
/// lets `select` blend with plain bitwise operations on every backend.
///
/// The mask is a distinct type rather than a bare integer vector so that an
/// arithmetic vector cannot be fed to `select` by accident. The underlying
/// bit pattern is still reachable through [`Mask4::to_int`] for code that
/// wants to combine masks with integer bitwise math.
#[derive(Copy, Clone, Default)]
#[repr(transparent)]
pub struct Mask4(pub(crate) backend::MaskReg);

impl Mask4 {
    /// Number of lanes.
    pub const LANES: usize = 4;

    /// Broadcasts one boolean to all 4 lanes.
    #[inline(always)]
    #[must_use]
    pub fn splat(val: bool) -> Self {
        Self(backend::MaskReg::splat(val))
    }

    /// Returns `true` if any lane is set.
    #[inline(always)]
    pub fn any(self) -> bool {
        self.0.any()
    }

    /// Returns `true` if every lane is set.
    #[inline(always)]
    pub fn all(self) -> bool {
        self.0.all()
    }

    /// Reads the lanes out as booleans.
    #[inline(always)]
    pub fn to_array(self) -> [bool; 4] {
        let arr = self.0.to_int().to_array();
        [arr[0] != 0, arr[1] != 0, arr[2] != 0, arr[3] != 0]
    }

    /// Reinterprets the mask bits as an integer vector
    /// (all-ones lanes read as `-1`, clear lanes as `0`).
    #[inline(always)]
    #[must_use]
    pub fn to_int(self) -> crate::I32x4 {
        crate::I32x4(self.0.to_int())
    }

    /// Reinterprets an integer vector as a mask.
    ///
    /// Every lane of `v` must already be all-ones or all-zeros; a mixed bit
    /// pattern makes downstream blends produce garbled lanes.
    #[inline(always)]
    #[must_use]
    pub fn from_int(v: crate::I32x4) -> Self {
        Self(backend::MaskReg::from_int(v.0))
    }
}

impl BitAnd for Mask4 {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0.bitand(rhs.0))
    }
}

impl BitOr for Mask4 {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0.bitor(rhs.0))
    }
}

impl Not for Mask4 {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        Self(self.0.not())
    }
}

impl Debug for Mask4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let arr = self.to_array();
        let bits = (arr[0] as u8)
            | ((arr[1] as u8) << 1)
            | ((arr[2] as u8) << 2)
            | ((arr[3] as u8) << 3);
        write!(f, "Mask4({:04b})", bits)
    }
}
