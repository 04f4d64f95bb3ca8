use quadlane::{I32x4, Mask4};

#[test]
fn test_construction_roundtrip() {
    let v = I32x4::new(1, -2, 3, i32::MAX);
    assert_eq!(v.to_array(), [1, -2, 3, i32::MAX]);
    assert_eq!(v.extract(0), 1);
    assert_eq!(v.extract(1), -2);
    assert_eq!(v.extract(2), 3);
    assert_eq!(v.extract(3), i32::MAX);

    let s = I32x4::splat(7);
    assert_eq!(s.to_array(), [7; 4]);

    assert_eq!(I32x4::from_array([4, 5, 6, 7]).to_array(), [4, 5, 6, 7]);
    assert_eq!(I32x4::default().to_array(), [0; 4]);
    assert_eq!(I32x4::LANES, 4);
}

#[test]
fn test_slice_load_store() {
    let data = [10, 20, 30, 40, 50];
    let v = I32x4::from_slice(&data);
    assert_eq!(v.to_array(), [10, 20, 30, 40]);

    let mut out = [0i32; 4];
    v.write_to_slice(&mut out);
    assert_eq!(out, [10, 20, 30, 40]);
}

#[test]
fn test_raw_load_store_unaligned() {
    // Deliberately offset by one element so the pointer is only 4-byte
    // aligned; the unaligned entry points must still be correct.
    let data = [0, 1, 2, 3, 4];
    let v = unsafe { I32x4::load(data.as_ptr().add(1)) };
    assert_eq!(v.to_array(), [1, 2, 3, 4]);

    let mut out = [0i32; 5];
    unsafe { v.store(out.as_mut_ptr().add(1)) };
    assert_eq!(out, [0, 1, 2, 3, 4]);
}

#[test]
fn test_aligned_load_store() {
    #[repr(align(16))]
    struct Aligned([i32; 4]);

    let data = Aligned([9, 8, 7, 6]);
    let v = unsafe { I32x4::load_aligned(data.0.as_ptr()) };
    assert_eq!(v.to_array(), [9, 8, 7, 6]);

    let mut out = Aligned([0; 4]);
    unsafe { v.store_aligned(out.0.as_mut_ptr()) };
    assert_eq!(out.0, [9, 8, 7, 6]);
}

#[test]
fn test_arithmetic() {
    let a = I32x4::new(1, 2, 3, 4);
    let b = I32x4::new(10, 20, 30, 40);

    assert_eq!((a + b).to_array(), [11, 22, 33, 44]);
    assert_eq!((b - a).to_array(), [9, 18, 27, 36]);
    assert_eq!((a * b).to_array(), [10, 40, 90, 160]);

    let mut c = a;
    c += b;
    assert_eq!(c.to_array(), [11, 22, 33, 44]);
    c -= b;
    assert_eq!(c.to_array(), [1, 2, 3, 4]);
    c *= b;
    assert_eq!(c.to_array(), [10, 40, 90, 160]);
}

#[test]
fn test_arithmetic_wraps() {
    let big = I32x4::splat(i32::MAX);
    let one = I32x4::splat(1);
    assert_eq!((big + one).to_array(), [i32::MIN; 4]);

    let low = I32x4::splat(i32::MIN);
    assert_eq!((low - one).to_array(), [i32::MAX; 4]);

    // 65536 * 65536 wraps to 0 in 32 bits.
    let k = I32x4::splat(65536);
    assert_eq!((k * k).to_array(), [0; 4]);
}

#[test]
fn test_mul_mixed_signs() {
    let a = I32x4::new(-3, 7, -100, 0);
    let b = I32x4::new(5, -11, -100, 12345);
    assert_eq!((a * b).to_array(), [-15, -77, 10000, 0]);
}

#[test]
fn test_bitwise() {
    let a = I32x4::splat(0x0F0F_0F0F);
    let b = I32x4::splat(0x00FF_00FF);

    assert_eq!((a & b).to_array(), [0x000F_000F; 4]);
    assert_eq!((a | b).to_array(), [0x0FFF_0FFF; 4]);
    assert_eq!((a ^ b).to_array(), [0x0FF0_0FF0; 4]);
    assert_eq!((!a).to_array(), [!0x0F0F_0F0Fi32; 4]);

    let mut c = a;
    c &= b;
    assert_eq!(c.to_array(), [0x000F_000F; 4]);
    c |= a;
    assert_eq!(c.to_array(), [0x0F0F_0F0F; 4]);
    c ^= a;
    assert_eq!(c.to_array(), [0; 4]);
}

#[test]
fn test_shifts() {
    let v = I32x4::new(1, 2, 3, 4);
    assert_eq!((v << 4).to_array(), [16, 32, 48, 64]);

    let mut w = v;
    w <<= 1;
    assert_eq!(w.to_array(), [2, 4, 6, 8]);
    w >>= 1;
    assert_eq!(w.to_array(), [1, 2, 3, 4]);
}

#[test]
fn test_right_shift_is_arithmetic() {
    let v = I32x4::new(-8, 0, 16, i32::MIN);
    let shifted = v >> 1;
    assert_eq!(shifted.to_array(), [-4, 0, 8, i32::MIN / 2]);

    // Shifting a negative value all the way down saturates at -1, not 0.
    assert_eq!((I32x4::splat(-1) >> 31).to_array(), [-1; 4]);
}

#[test]
fn test_comparison_masks() {
    let a = I32x4::new(1, 5, 3, -4);
    let b = I32x4::new(2, 5, 1, -4);

    assert_eq!(a.simd_eq(b).to_array(), [false, true, false, true]);
    assert_eq!(a.simd_ne(b).to_array(), [true, false, true, false]);
    assert_eq!(a.simd_lt(b).to_array(), [true, false, false, false]);
    assert_eq!(a.simd_le(b).to_array(), [true, true, false, true]);
    assert_eq!(a.simd_gt(b).to_array(), [false, false, true, false]);
    assert_eq!(a.simd_ge(b).to_array(), [false, true, true, true]);
}

#[test]
fn test_comparison_derivations() {
    // v == v is all-true, v != v all-false.
    let v = I32x4::new(0, -1, i32::MAX, 42);
    assert!(v.simd_eq(v).all());
    assert!(!v.simd_ne(v).any());

    // Exactly one of (a < b) and (a >= b) holds per lane.
    let a = I32x4::new(1, 7, -3, 0);
    let b = I32x4::new(2, 7, -9, 0);
    let lt = a.simd_lt(b).to_array();
    let ge = a.simd_ge(b).to_array();
    for lane in 0..4 {
        assert_ne!(lt[lane], ge[lane], "lane {lane}");
    }
}

#[test]
fn test_mask_lanes_are_all_ones() {
    let a = I32x4::new(1, 5, 3, -4);
    let b = I32x4::new(2, 5, 1, -4);
    let bits = a.simd_eq(b).to_int().to_array();
    assert_eq!(bits, [0, -1, 0, -1]);
}

#[test]
fn test_min_max() {
    let a = I32x4::new(1, 10, -5, 20);
    let b = I32x4::new(10, 1, 20, -5);
    assert_eq!(a.min(b).to_array(), [1, 1, -5, -5]);
    assert_eq!(a.max(b).to_array(), [10, 10, 20, 20]);
}

#[test]
fn test_select_of_lt_equals_min() {
    let a = I32x4::new(3, -7, 0, i32::MAX);
    let b = I32x4::new(-3, 7, 0, i32::MIN);
    let picked = I32x4::select(a.simd_lt(b), a, b);
    assert_eq!(picked.to_array(), a.min(b).to_array());
}

#[test]
fn test_select_mixed_mask() {
    let mask = Mask4::from_int(I32x4::new(-1, 0, -1, 0));
    let a = I32x4::splat(1);
    let b = I32x4::splat(2);
    assert_eq!(I32x4::select(mask, a, b).to_array(), [1, 2, 1, 2]);
}

#[test]
fn test_sum() {
    assert_eq!(I32x4::new(1, 2, 3, 4).sum(), 10);
    assert_eq!(I32x4::new(-1, 1, -2, 2).sum(), 0);
    assert_eq!(I32x4::splat(i32::MAX).sum(), i32::MAX.wrapping_mul(4));
}

#[test]
fn test_display() {
    let v = I32x4::new(1, -2, 3, -4);
    assert_eq!(format!("{v}"), "(1, -2, 3, -4)");
}

#[test]
#[should_panic]
fn test_extract_out_of_range_panics() {
    let _ = I32x4::splat(0).extract(4);
}
