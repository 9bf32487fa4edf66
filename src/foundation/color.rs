use crate::foundation::math::{div_round, mul_div255_u32};

/// Packed straight-alpha ARGB color, `0xAARRGGBB`.
pub type Argb32 = u32;

/// Fully transparent black.
pub const TRANSPARENT: Argb32 = 0;

/// Pack straight-alpha channels into an [`Argb32`].
pub fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> Argb32 {
    (u32::from(a) << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// Opaque color from RGB channels.
pub fn opaque_rgb(r: u8, g: u8, b: u8) -> Argb32 {
    pack_argb(255, r, g, b)
}

/// Split a packed color into `[a, r, g, b]`.
pub fn unpack_argb(c: Argb32) -> [u8; 4] {
    [(c >> 24) as u8, (c >> 16) as u8, (c >> 8) as u8, c as u8]
}

pub fn alpha(c: Argb32) -> u8 {
    (c >> 24) as u8
}

pub fn is_opaque(c: Argb32) -> bool {
    alpha(c) == 255
}

/// Straight-alpha source-over: `src` drawn on top of `dst`.
///
/// An opaque `src` replaces `dst` exactly and a fully transparent `src` leaves it untouched.
pub fn over(dst: Argb32, src: Argb32) -> Argb32 {
    let [sa, sr, sg, sb] = unpack_argb(src);
    if sa == 255 {
        return src;
    }
    if sa == 0 {
        return dst;
    }
    let [da, dr, dg, db] = unpack_argb(dst);

    let sa = u32::from(sa);
    let inv = 255 - sa;
    let dw = u32::from(da) * inv;
    // Alpha scaled by 255 so the color weights stay integral.
    let a_num = sa * 255 + dw;

    let mix = |s: u8, d: u8| -> u8 {
        let num = u32::from(s) * sa * 255 + u32::from(d) * dw;
        div_round(num, a_num).min(255) as u8
    };

    pack_argb(
        div_round(a_num, 255).min(255) as u8,
        mix(sr, dr),
        mix(sg, dg),
        mix(sb, db),
    )
}

/// Convert a straight ARGB color to straight RGBA8 bytes.
pub fn to_rgba8(c: Argb32) -> [u8; 4] {
    let [a, r, g, b] = unpack_argb(c);
    [r, g, b, a]
}

pub fn from_rgba8(px: [u8; 4]) -> Argb32 {
    pack_argb(px[3], px[0], px[1], px[2])
}

/// Scale the alpha channel by `opacity` in `[0, 1]`.
pub fn with_opacity(c: Argb32, opacity: f32) -> Argb32 {
    let op = ((opacity.clamp(0.0, 1.0) * 255.0).round() as u32).min(255);
    let [a, r, g, b] = unpack_argb(c);
    pack_argb(mul_div255_u32(u32::from(a), op) as u8, r, g, b)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
