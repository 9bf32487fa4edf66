use std::sync::Arc;

use crate::{
    coords::{
        camera::{Camera, OrthographicCamera},
        mapper::CoordinateMapper,
        point::{Point, Rect, Vec2},
    },
    foundation::error::{SynthError, SynthResult},
};

/// A logical rectangle projected onto a `width x height` pixel screen.
///
/// The rectangle's `x0`/`x1` map to the left/right screen edges and `y1`/`y0` to the top/bottom
/// edges. Every setter validates its input and leaves the frame untouched on error.
#[derive(Clone, Debug)]
pub struct CoordinateFrame {
    logical: Rect,
    width: u32,
    height: u32,
    camera: Arc<dyn Camera>,
}

impl CoordinateFrame {
    pub fn new(logical: Rect, width: u32, height: u32) -> SynthResult<Self> {
        let logical = validate_view(logical, width, height)?;
        Ok(Self {
            logical,
            width,
            height,
            camera: Arc::new(OrthographicCamera),
        })
    }

    /// Frame centered on `center` with `pixels_per_unit` pixels per logical unit on both axes.
    pub fn centered(
        center: Point,
        pixels_per_unit: f64,
        width: u32,
        height: u32,
    ) -> SynthResult<Self> {
        if !(pixels_per_unit.is_finite() && pixels_per_unit > 0.0) {
            return Err(SynthError::validation(format!(
                "pixels_per_unit must be finite and > 0, got {pixels_per_unit}"
            )));
        }
        let half = Vec2::new(
            f64::from(width) / pixels_per_unit / 2.0,
            f64::from(height) / pixels_per_unit / 2.0,
        );
        Self::new(Rect::from_points(center - half, center + half), width, height)
    }

    pub fn with_camera(mut self, camera: Arc<dyn Camera>) -> Self {
        self.camera = camera;
        self
    }

    pub fn set_camera(&mut self, camera: Arc<dyn Camera>) {
        self.camera = camera;
    }

    pub fn logical_rect(&self) -> Rect {
        self.logical
    }

    pub fn set_logical_rect(&mut self, logical: Rect) -> SynthResult<()> {
        self.logical = validate_view(logical, self.width, self.height)?;
        Ok(())
    }

    /// Change the screen size, keeping the logical rectangle.
    pub fn resize(&mut self, width: u32, height: u32) -> SynthResult<()> {
        validate_view(self.logical, width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Shift the view by a logical offset.
    pub fn pan(&mut self, delta: Vec2) -> SynthResult<()> {
        self.set_logical_rect(self.logical + delta)
    }

    /// Zoom in by `factor` (> 1 shrinks the visible area) keeping `anchor` fixed on screen.
    pub fn zoom_about(&mut self, anchor: Point, factor: f64) -> SynthResult<()> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(SynthError::validation(format!(
                "zoom factor must be finite and > 0, got {factor}"
            )));
        }
        let shrink = |v: f64, a: f64| a + (v - a) / factor;
        self.set_logical_rect(Rect::new(
            shrink(self.logical.x0, anchor.x),
            shrink(self.logical.y0, anchor.y),
            shrink(self.logical.x1, anchor.x),
            shrink(self.logical.y1, anchor.y),
        ))
    }

    fn units_per_px_x(&self) -> f64 {
        self.logical.width() / f64::from(self.width)
    }

    fn units_per_px_y(&self) -> f64 {
        self.logical.height() / f64::from(self.height)
    }
}

impl CoordinateMapper for CoordinateFrame {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn screen_x(&self, x: f64) -> i32 {
        ((x - self.logical.x0) / self.units_per_px_x()).round() as i32
    }

    fn screen_y(&self, y: f64) -> i32 {
        ((self.logical.y1 - y) / self.units_per_px_y()).round() as i32
    }

    fn coordinate_x(&self, column: i32) -> f64 {
        self.logical.x0 + f64::from(column) * self.units_per_px_x()
    }

    fn coordinate_y(&self, row: i32) -> f64 {
        self.logical.y1 - f64::from(row) * self.units_per_px_y()
    }

    fn camera(&self) -> &dyn Camera {
        self.camera.as_ref()
    }
}

/// Check a rect/screen pairing; both per-pixel step sizes and their inverses must be finite
/// and non-zero so every conversion round-trips.
fn validate_view(r: Rect, width: u32, height: u32) -> SynthResult<Rect> {
    let r = validate_rect(r)?;
    validate_screen(width, height)?;
    let usable = |extent: f64, px: u32| {
        let step = extent / f64::from(px);
        step.is_finite() && step > 0.0 && (1.0 / step).is_finite()
    };
    if !usable(r.width(), width) || !usable(r.height(), height) {
        return Err(SynthError::invalid_dimension(format!(
            "logical rectangle {r:?} cannot be mapped onto a {width}x{height} screen"
        )));
    }
    Ok(r)
}

fn validate_rect(r: Rect) -> SynthResult<Rect> {
    let r = r.abs();
    let corners = [r.x0, r.y0, r.x1, r.y1].iter().all(|v| v.is_finite());
    let extents = r.width().is_finite() && r.height().is_finite();
    if !corners || !extents || r.width() <= 0.0 || r.height() <= 0.0 {
        return Err(SynthError::invalid_dimension(format!(
            "logical rectangle must be finite with positive area, got {r:?}"
        )));
    }
    Ok(r)
}

fn validate_screen(width: u32, height: u32) -> SynthResult<()> {
    if width == 0 || height == 0 {
        return Err(SynthError::invalid_dimension(format!(
            "screen must be at least 1x1, got {width}x{height}"
        )));
    }
    if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
        return Err(SynthError::invalid_dimension(format!(
            "screen {width}x{height} exceeds the pixel coordinate range"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/coords/frame.rs"]
mod tests;
