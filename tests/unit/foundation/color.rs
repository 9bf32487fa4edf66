use super::*;

#[test]
fn pack_unpack_channels() {
    let c = pack_argb(0x11, 0x22, 0x33, 0x44);
    assert_eq!(c, 0x1122_3344);
    assert_eq!(unpack_argb(c), [0x11, 0x22, 0x33, 0x44]);
    assert_eq!(alpha(c), 0x11);
    assert!(is_opaque(opaque_rgb(1, 2, 3)));
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = opaque_rgb(0, 0, 255);
    let src = opaque_rgb(255, 0, 0);
    assert_eq!(over(dst, src), src);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = pack_argb(40, 10, 20, 30);
    let src = pack_argb(0, 255, 255, 255);
    assert_eq!(over(dst, src), dst);
}

#[test]
fn over_dst_transparent_returns_src() {
    let src = pack_argb(200, 100, 110, 120);
    assert_eq!(over(TRANSPARENT, src), src);
}

#[test]
fn over_half_alpha_on_opaque_blends_evenly() {
    let dst = opaque_rgb(0, 0, 0);
    let src = pack_argb(128, 255, 255, 255);
    let [a, r, g, b] = unpack_argb(over(dst, src));
    assert_eq!(a, 255);
    assert_eq!(r, 128);
    assert_eq!(g, 128);
    assert_eq!(b, 128);
}

#[test]
fn rgba8_conversion_reorders_channels() {
    let c = pack_argb(4, 1, 2, 3);
    assert_eq!(to_rgba8(c), [1, 2, 3, 4]);
    assert_eq!(from_rgba8([1, 2, 3, 4]), c);
}

#[test]
fn with_opacity_scales_alpha_only() {
    let c = opaque_rgb(10, 20, 30);
    assert_eq!(with_opacity(c, 0.0), pack_argb(0, 10, 20, 30));
    assert_eq!(with_opacity(c, 1.0), c);
}
