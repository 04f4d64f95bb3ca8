use quadlane::{F32x4, I32x4, Mask4};

#[test]
fn test_splat() {
    assert!(Mask4::splat(true).all());
    assert!(Mask4::splat(true).any());
    assert!(!Mask4::splat(false).any());
    assert!(!Mask4::splat(false).all());
    assert_eq!(Mask4::LANES, 4);
}

#[test]
fn test_any_all_mixed() {
    let m = I32x4::new(1, 0, 0, 0).simd_eq(I32x4::splat(1));
    assert!(m.any());
    assert!(!m.all());
    assert_eq!(m.to_array(), [true, false, false, false]);
}

#[test]
fn test_bit_combinators() {
    let a = I32x4::new(1, 2, 3, 4);
    let lt = a.simd_lt(I32x4::splat(3)); // [t, t, f, f]
    let gt = a.simd_gt(I32x4::splat(1)); // [f, t, t, t]

    assert_eq!((lt & gt).to_array(), [false, true, false, false]);
    assert_eq!((lt | gt).to_array(), [true, true, true, true]);
    assert_eq!((!lt).to_array(), [false, false, true, true]);
}

#[test]
fn test_int_roundtrip() {
    // Mask lanes reinterpret as -1 / 0 and survive the round trip.
    let m = F32x4::new(1.0, 2.0, 3.0, 4.0).simd_le(F32x4::splat(2.0));
    let ints = m.to_int();
    assert_eq!(ints.to_array(), [-1, -1, 0, 0]);

    let back = Mask4::from_int(ints);
    assert_eq!(back.to_array(), m.to_array());
}

#[test]
fn test_mask_bits_blend_both_types() {
    // The same mask blends integer and float vectors identically.
    let mask = Mask4::from_int(I32x4::new(-1, 0, 0, -1));

    let i = I32x4::select(mask, I32x4::splat(1), I32x4::splat(9));
    assert_eq!(i.to_array(), [1, 9, 9, 1]);

    let f = F32x4::select(mask, F32x4::splat(1.0), F32x4::splat(9.0));
    assert_eq!(f.to_array(), [1.0, 9.0, 9.0, 1.0]);
}

#[test]
fn test_debug_format() {
    let m = Mask4::from_int(I32x4::new(-1, 0, -1, 0));
    assert_eq!(format!("{m:?}"), "Mask4(0101)");
}
