use crate::{
    coords::mapper::CoordinateMapper,
    fill::{config::FillThreading, filler::PartitionedFiller},
    foundation::{color::Argb32, error::SynthResult},
    synth::{buffer::PixelBuffer, renderer::Renderer},
};

/// Builds pixel buffers from color functions or renderers.
///
/// Color-function paths run through a [`PartitionedFiller`], so the functions must be pure and
/// callable from any thread. The renderer path never fans out.
#[derive(Debug)]
pub struct ImageSynthesizer {
    filler: PartitionedFiller,
}

impl Default for ImageSynthesizer {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ImageSynthesizer {
    /// Thread-per-partition synthesizer; `workers < 1` runs single-threaded.
    pub fn new(workers: i32) -> Self {
        Self::with_filler(PartitionedFiller::new(workers))
    }

    pub fn from_threading(threading: &FillThreading) -> SynthResult<Self> {
        Ok(Self::with_filler(PartitionedFiller::from_threading(threading)?))
    }

    pub fn with_filler(filler: PartitionedFiller) -> Self {
        Self { filler }
    }

    pub fn filler(&self) -> &PartitionedFiller {
        &self.filler
    }

    /// Color every pixel from its linear row-major index.
    pub fn from_index<F>(&self, width: u32, height: u32, color_at: F) -> SynthResult<PixelBuffer>
    where
        F: Fn(usize) -> Argb32 + Sync,
    {
        self.try_from_index(width, height, |i| Ok(color_at(i)))
    }

    pub fn try_from_index<F>(
        &self,
        width: u32,
        height: u32,
        color_at: F,
    ) -> SynthResult<PixelBuffer>
    where
        F: Fn(usize) -> SynthResult<Argb32> + Sync,
    {
        let mut buf = PixelBuffer::new(width, height)?;
        self.filler.try_fill(buf.pixels_mut(), color_at)?;
        Ok(buf)
    }

    /// Color every pixel from its `(row, column)`.
    pub fn from_cell<F>(&self, width: u32, height: u32, color_at: F) -> SynthResult<PixelBuffer>
    where
        F: Fn(u32, u32) -> Argb32 + Sync,
    {
        let w = width as usize;
        self.from_index(width, height, |i| color_at((i / w) as u32, (i % w) as u32))
    }

    /// Color every pixel from the logical coordinate under it.
    ///
    /// The buffer takes the mapper's size; pixel `(row, column)` is colored with
    /// `color_at(coordinate_x(column), coordinate_y(row))`.
    pub fn from_logical<M, F>(&self, mapper: &M, color_at: F) -> SynthResult<PixelBuffer>
    where
        M: CoordinateMapper + Sync + ?Sized,
        F: Fn(f64, f64) -> Argb32 + Sync,
    {
        let width = mapper.width();
        let w = width as usize;
        self.from_index(width, mapper.height(), |i| {
            let column = (i % w) as i32;
            let row = (i / w) as i32;
            color_at(mapper.coordinate_x(column), mapper.coordinate_y(row))
        })
    }

    /// Let `renderer` paint its current state once, on the calling thread.
    pub fn from_renderer<R>(
        &self,
        width: u32,
        height: u32,
        renderer: &mut R,
    ) -> SynthResult<PixelBuffer>
    where
        R: Renderer + ?Sized,
    {
        paint_frame(width, height, renderer)
    }

    /// Replace every pixel of `buf` with `f(pixel)`.
    pub fn map_pixels<F>(&self, buf: &mut PixelBuffer, f: F) -> SynthResult<()>
    where
        F: Fn(Argb32) -> Argb32 + Sync,
    {
        self.filler.map_in_place(buf.pixels_mut(), f)
    }
}

/// Index-driven synthesis with `workers` threads (`< 1` = single-threaded).
pub fn create_image<F>(
    width: u32,
    height: u32,
    color_at: F,
    workers: i32,
) -> SynthResult<PixelBuffer>
where
    F: Fn(usize) -> Argb32 + Sync,
{
    ImageSynthesizer::new(workers).from_index(width, height, color_at)
}

pub fn create_image_cells<F>(
    width: u32,
    height: u32,
    color_at: F,
    workers: i32,
) -> SynthResult<PixelBuffer>
where
    F: Fn(u32, u32) -> Argb32 + Sync,
{
    ImageSynthesizer::new(workers).from_cell(width, height, color_at)
}

pub fn create_image_logical<M, F>(
    mapper: &M,
    color_at: F,
    workers: i32,
) -> SynthResult<PixelBuffer>
where
    M: CoordinateMapper + Sync + ?Sized,
    F: Fn(f64, f64) -> Argb32 + Sync,
{
    ImageSynthesizer::new(workers).from_logical(mapper, color_at)
}

pub fn create_image_single_thread<F>(
    width: u32,
    height: u32,
    color_at: F,
) -> SynthResult<PixelBuffer>
where
    F: Fn(usize) -> Argb32 + Sync,
{
    create_image(width, height, color_at, 0)
}

/// Renderer-driven synthesis: one synchronous `paint` into a fresh transparent buffer.
pub fn paint_frame<R>(width: u32, height: u32, renderer: &mut R) -> SynthResult<PixelBuffer>
where
    R: Renderer + ?Sized,
{
    let mut buf = PixelBuffer::new(width, height)?;
    renderer.paint(&mut buf)?;
    Ok(buf)
}

/// Apply `f` to every pixel of `buf` in place with `workers` threads.
pub fn map_pixels<F>(buf: &mut PixelBuffer, f: F, workers: i32) -> SynthResult<()>
where
    F: Fn(Argb32) -> Argb32 + Sync,
{
    ImageSynthesizer::new(workers).map_pixels(buf, f)
}

#[cfg(test)]
#[path = "../../tests/unit/synth/synthesizer.rs"]
mod tests;
