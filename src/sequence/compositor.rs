use crate::{
    foundation::{
        color::{over, with_opacity},
        error::{SynthError, SynthResult},
    },
    synth::buffer::PixelBuffer,
};

/// Flatten `frames` back to front into one buffer.
///
/// The result has the first frame's size and starts fully transparent; each frame is drawn at
/// the origin with straight-alpha source-over and clipped to the overlap.
#[tracing::instrument(skip_all, fields(frames = frames.len()))]
pub fn composite_frames(frames: &[PixelBuffer]) -> SynthResult<PixelBuffer> {
    let first = frames.first().ok_or(SynthError::EmptyFrameSequence)?;
    let mut out = PixelBuffer::new(first.width(), first.height())?;
    for frame in frames {
        over_in_place(&mut out, frame, 1.0);
    }
    Ok(out)
}

/// Like [`composite_frames`] but every frame must match the first frame's size.
pub fn composite_frames_strict(frames: &[PixelBuffer]) -> SynthResult<PixelBuffer> {
    let first = frames.first().ok_or(SynthError::EmptyFrameSequence)?;
    if let Some((idx, bad)) = frames
        .iter()
        .enumerate()
        .find(|(_, f)| !f.same_size(first))
    {
        return Err(SynthError::dimension_mismatch(format!(
            "frame {idx} is {}x{}, expected {}x{}",
            bad.width(),
            bad.height(),
            first.width(),
            first.height()
        )));
    }
    composite_frames(frames)
}

/// Draw `src` over `dst` at the origin, scaled by `opacity`, clipped to the shared area.
pub fn over_in_place(dst: &mut PixelBuffer, src: &PixelBuffer, opacity: f32) {
    if opacity <= 0.0 {
        return;
    }
    let w = dst.width().min(src.width()) as usize;
    let h = dst.height().min(src.height()) as usize;
    let dst_w = dst.width() as usize;
    let src_w = src.width() as usize;

    let src_px = src.pixels();
    let dst_px = dst.pixels_mut();
    for y in 0..h {
        let d_row = &mut dst_px[y * dst_w..y * dst_w + w];
        let s_row = &src_px[y * src_w..y * src_w + w];
        for (d, &s) in d_row.iter_mut().zip(s_row) {
            let s = if opacity >= 1.0 {
                s
            } else {
                with_opacity(s, opacity)
            };
            *d = over(*d, s);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/compositor.rs"]
mod tests;
