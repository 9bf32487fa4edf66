use super::*;
use crate::foundation::color::{opaque_rgb, pack_argb};

#[test]
fn new_buffer_is_transparent_with_exact_size() {
    let buf = PixelBuffer::new(4, 3).unwrap();
    assert_eq!(buf.width(), 4);
    assert_eq!(buf.height(), 3);
    assert_eq!(buf.len(), 12);
    assert!(buf.pixels().iter().all(|&p| p == TRANSPARENT));
}

#[test]
fn zero_dimensions_are_rejected() {
    assert!(matches!(
        PixelBuffer::new(0, 10),
        Err(SynthError::InvalidDimension(_))
    ));
    assert!(matches!(
        PixelBuffer::new(10, 0),
        Err(SynthError::InvalidDimension(_))
    ));
}

#[test]
fn from_pixels_checks_length() {
    let err = PixelBuffer::from_pixels(2, 2, vec![0; 3]).unwrap_err();
    assert!(matches!(err, SynthError::DimensionMismatch(_)));
    assert!(PixelBuffer::from_pixels(2, 2, vec![0; 4]).is_ok());
}

#[test]
fn get_set_are_row_major_and_bounds_checked() {
    let mut buf = PixelBuffer::new(3, 2).unwrap();
    let red = opaque_rgb(255, 0, 0);
    assert!(buf.set(2, 1, red));
    assert_eq!(buf.index_of(2, 1), Some(5));
    assert_eq!(buf.pixels()[5], red);
    assert_eq!(buf.get(2, 1), Some(red));
    assert!(!buf.set(3, 0, red));
    assert_eq!(buf.get(0, 2), None);
    assert_eq!(buf.row(1).unwrap()[2], red);
    assert!(buf.row(2).is_none());
}

#[test]
fn rgba_image_interop_keeps_channels() {
    let c = pack_argb(128, 10, 20, 30);
    let buf = PixelBuffer::filled(2, 2, c).unwrap();
    let img = buf.to_rgba_image();
    assert_eq!(img.dimensions(), (2, 2));
    assert_eq!(img.get_pixel(1, 1).0, [10, 20, 30, 128]);
    assert_eq!(PixelBuffer::from_rgba_image(&img).unwrap(), buf);
}
