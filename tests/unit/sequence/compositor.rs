use super::*;
use crate::foundation::color::{TRANSPARENT, opaque_rgb, pack_argb, unpack_argb};

#[test]
fn opaque_frames_leave_only_the_last_visible() {
    let frames = vec![
        PixelBuffer::filled(6, 4, opaque_rgb(255, 0, 0)).unwrap(),
        PixelBuffer::filled(6, 4, opaque_rgb(0, 255, 0)).unwrap(),
        PixelBuffer::filled(6, 4, opaque_rgb(0, 0, 255)).unwrap(),
    ];
    let out = composite_frames(&frames).unwrap();
    assert_eq!(out, frames[2]);
}

#[test]
fn empty_sequence_is_rejected() {
    let err = composite_frames(&[]).unwrap_err();
    assert!(matches!(err, SynthError::EmptyFrameSequence));
    assert!(matches!(
        composite_frames_strict(&[]),
        Err(SynthError::EmptyFrameSequence)
    ));
}

#[test]
fn transparent_pixels_reveal_earlier_frames() {
    let red = opaque_rgb(255, 0, 0);
    let blue = opaque_rgb(0, 0, 255);
    let back = PixelBuffer::filled(2, 1, red).unwrap();
    let mut front = PixelBuffer::new(2, 1).unwrap();
    front.set(1, 0, blue);

    let out = composite_frames(&[back, front]).unwrap();
    assert_eq!(out.pixels(), &[red, blue]);
}

#[test]
fn translucent_frame_blends_over_opaque_background() {
    let back = PixelBuffer::filled(1, 1, opaque_rgb(0, 0, 0)).unwrap();
    let front = PixelBuffer::filled(1, 1, pack_argb(128, 255, 255, 255)).unwrap();
    let out = composite_frames(&[back, front]).unwrap();
    assert_eq!(unpack_argb(out.pixels()[0]), [255, 128, 128, 128]);
}

#[test]
fn single_frame_comes_back_unchanged() {
    let only = PixelBuffer::filled(3, 3, pack_argb(90, 1, 2, 3)).unwrap();
    assert_eq!(composite_frames(std::slice::from_ref(&only)).unwrap(), only);
}

#[test]
fn mismatched_sizes_are_clipped_to_first_frame() {
    let red = opaque_rgb(255, 0, 0);
    let green = opaque_rgb(0, 255, 0);
    let base = PixelBuffer::filled(3, 2, red).unwrap();
    let small = PixelBuffer::filled(1, 1, green).unwrap();
    let large = PixelBuffer::filled(5, 5, TRANSPARENT).unwrap();

    let out = composite_frames(&[base, small, large]).unwrap();
    assert_eq!((out.width(), out.height()), (3, 2));
    assert_eq!(out.get(0, 0), Some(green));
    assert_eq!(out.get(2, 1), Some(red));
}

#[test]
fn strict_mode_rejects_mismatched_sizes() {
    let a = PixelBuffer::new(3, 2).unwrap();
    let b = PixelBuffer::new(2, 3).unwrap();
    let err = composite_frames_strict(&[a, b]).unwrap_err();
    assert!(matches!(err, SynthError::DimensionMismatch(_)));
}

#[test]
fn over_in_place_honours_opacity() {
    let mut dst = PixelBuffer::filled(1, 1, opaque_rgb(0, 0, 0)).unwrap();
    let src = PixelBuffer::filled(1, 1, opaque_rgb(255, 255, 255)).unwrap();
    over_in_place(&mut dst, &src, 0.0);
    assert_eq!(dst.pixels()[0], opaque_rgb(0, 0, 0));
    over_in_place(&mut dst, &src, 1.0);
    assert_eq!(dst.pixels()[0], opaque_rgb(255, 255, 255));
}
