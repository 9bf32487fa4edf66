use crate::{
    foundation::error::SynthResult,
    synth::{
        buffer::{PixelBuffer, pixel_count},
        renderer::Renderer,
        synthesizer::paint_frame,
    },
};

/// Drives a renderer through discrete ticks, capturing one frame per tick.
///
/// The sequencer owns its renderer for as long as it runs. Each frame is painted before the
/// following `advance`, so frame `i` shows the state after `i` advances. Sequences are not
/// restartable: a second run continues from wherever the renderer was left.
#[derive(Debug)]
pub struct FrameSequencer<R> {
    renderer: R,
}

impl<R: Renderer> FrameSequencer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Render `count` frames eagerly.
    #[tracing::instrument(skip(self))]
    pub fn sequence(
        &mut self,
        width: u32,
        height: u32,
        count: usize,
    ) -> SynthResult<Vec<PixelBuffer>> {
        pixel_count(width, height)?;
        let frames = self
            .frames(width, height, count)
            .collect::<SynthResult<Vec<_>>>()?;
        tracing::debug!(frames = frames.len(), "frame sequence rendered");
        Ok(frames)
    }

    /// Lazily render up to `count` frames.
    ///
    /// The renderer advances only when a frame is pulled. Iteration stops after the first error.
    pub fn frames(&mut self, width: u32, height: u32, count: usize) -> Frames<'_, R> {
        Frames {
            renderer: &mut self.renderer,
            width,
            height,
            remaining: count,
        }
    }
}

/// Iterator returned by [`FrameSequencer::frames`].
#[derive(Debug)]
pub struct Frames<'a, R> {
    renderer: &'a mut R,
    width: u32,
    height: u32,
    remaining: usize,
}

impl<R: Renderer> Iterator for Frames<'_, R> {
    type Item = SynthResult<PixelBuffer>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        match paint_frame(self.width, self.height, &mut *self.renderer) {
            Ok(frame) => {
                self.remaining -= 1;
                self.renderer.advance();
                Some(Ok(frame))
            }
            Err(e) => {
                self.remaining = 0;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

/// Render `count` frames from a borrowed renderer.
pub fn create_image_sequence<R>(
    width: u32,
    height: u32,
    renderer: &mut R,
    count: usize,
) -> SynthResult<Vec<PixelBuffer>>
where
    R: Renderer + ?Sized,
{
    FrameSequencer::new(renderer).sequence(width, height, count)
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/sequencer.rs"]
mod tests;
