//! Parallel pixel-buffer synthesis, frame sequencing and coordinate mapping.
//!
//! # Pipeline overview
//!
//! 1. **Map**: a [`CoordinateMapper`] (usually a [`CoordinateFrame`]) converts between a
//!    continuous logical plane and integer screen pixels, with logical `y` pointing up.
//! 2. **Synthesize**: an [`ImageSynthesizer`] colors a [`PixelBuffer`] from a pure color
//!    function of the pixel index, its `(row, column)` or its logical coordinate.
//! 3. **Fill**: the [`PartitionedFiller`] splits the buffer into contiguous partitions and writes
//!    each one on its own worker, joining all of them before returning.
//! 4. **Sequence**: a [`FrameSequencer`] paints a stateful [`Renderer`] once per tick, and
//!    [`composite_frames`] flattens the resulting frames back to front.
//!
//! Design constraints:
//!
//! - **No unsafe**: partitions are handed out as disjoint `&mut` slices.
//! - **Deterministic**: for a pure color function the output is identical for every worker count.
//! - **No IO**: finished buffers convert to [`image::RgbaImage`] for whatever encodes them.
//! - **Straight ARGB**: pixels are packed `0xAARRGGBB` without premultiplication.
#![forbid(unsafe_code)]

mod coords;
mod fill;
mod foundation;
mod sequence;
mod synth;

pub use coords::camera::{Camera, OrthographicCamera};
pub use coords::frame::CoordinateFrame;
pub use coords::mapper::CoordinateMapper;
pub use coords::point::{LogicalPoint, Point, Point3, Rect, ScreenPoint, ScreenRect, Vec2};
pub use fill::config::{FillStrategy, FillThreading, MAX_WORKERS};
pub use fill::filler::{PartitionedFiller, fill_partitioned};
pub use fill::partition::{Partition, plan_partitions};
pub use foundation::color::{
    Argb32, TRANSPARENT, alpha, from_rgba8, is_opaque, opaque_rgb, over, pack_argb, to_rgba8,
    unpack_argb, with_opacity,
};
pub use foundation::error::{SynthError, SynthResult};
pub use foundation::math::check_bounds;
pub use sequence::compositor::{composite_frames, composite_frames_strict, over_in_place};
pub use sequence::sequencer::{FrameSequencer, Frames, create_image_sequence};
pub use synth::buffer::{PixelBuffer, pixel_count};
pub use synth::renderer::Renderer;
pub use synth::synthesizer::{
    ImageSynthesizer, create_image, create_image_cells, create_image_logical,
    create_image_single_thread, map_pixels, paint_frame,
};
