use crate::{foundation::error::SynthResult, synth::buffer::PixelBuffer};

/// Stateful drawing capability driven one tick at a time.
///
/// Renderers are not assumed to be thread-safe: they are only ever called from the thread that
/// owns them, and never concurrently.
pub trait Renderer {
    /// Paint the current state into `target`.
    fn paint(&mut self, target: &mut PixelBuffer) -> SynthResult<()>;

    /// Move the state forward by one tick.
    fn advance(&mut self);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn paint(&mut self, target: &mut PixelBuffer) -> SynthResult<()> {
        (**self).paint(target)
    }

    fn advance(&mut self) {
        (**self).advance()
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn paint(&mut self, target: &mut PixelBuffer) -> SynthResult<()> {
        (**self).paint(target)
    }

    fn advance(&mut self) {
        (**self).advance()
    }
}
