use crate::{
    coords::{
        camera::Camera,
        point::{LogicalPoint, Point, Point3, Rect, ScreenPoint, ScreenRect},
    },
    foundation::error::SynthResult,
};

/// Bidirectional mapping between logical coordinates and screen pixels.
///
/// Implementors supply the screen size, the four primitive conversions and a camera; everything
/// else is derived from those on every call and never cached, so it always reflects the current
/// view. Screen rows grow downward while logical `y` grows upward, which is why the `y` length
/// conversions negate the raw difference.
pub trait CoordinateMapper {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn screen_x(&self, x: f64) -> i32;
    fn screen_y(&self, y: f64) -> i32;
    fn coordinate_x(&self, column: i32) -> f64;
    fn coordinate_y(&self, row: i32) -> f64;

    fn camera(&self) -> &dyn Camera;

    fn screen_x_len(&self, len: f64) -> i32 {
        self.screen_x(len) - self.screen_x(0.0)
    }

    fn screen_y_len(&self, len: f64) -> i32 {
        -(self.screen_y(len) - self.screen_y(0.0))
    }

    fn coordinate_x_len(&self, len: i32) -> f64 {
        self.coordinate_x(len) - self.coordinate_x(0)
    }

    fn coordinate_y_len(&self, len: i32) -> f64 {
        -(self.coordinate_y(len) - self.coordinate_y(0))
    }

    /// `1 / coordinate_x_len(1)`.
    fn scale_x(&self) -> f64 {
        1.0 / self.coordinate_x_len(1)
    }

    /// `1 / coordinate_y_len(1)`.
    fn scale_y(&self) -> f64 {
        1.0 / self.coordinate_y_len(1)
    }

    fn screen_planar(&self, p: Point) -> ScreenPoint {
        ScreenPoint::new(self.screen_x(p.x), self.screen_y(p.y))
    }

    fn screen_spatial(&self, p: Point3) -> ScreenPoint {
        self.screen_planar(self.camera().project(p))
    }

    fn screen(&self, p: LogicalPoint) -> ScreenPoint {
        match p {
            LogicalPoint::Planar(p) => self.screen_planar(p),
            LogicalPoint::Spatial(p) => self.screen_spatial(p),
        }
    }

    /// Project raw components, rejecting anything but 2-D or 3-D points.
    fn try_screen(&self, components: &[f64]) -> SynthResult<ScreenPoint> {
        Ok(self.screen(LogicalPoint::try_from(components)?))
    }

    /// Logical position of the pixel at `(column, row)`.
    fn logical_at(&self, column: i32, row: i32) -> Point {
        Point::new(self.coordinate_x(column), self.coordinate_y(row))
    }

    /// Screen footprint of a logical rectangle, top-left first.
    fn screen_rect(&self, r: Rect) -> ScreenRect {
        let a = self.screen_planar(Point::new(r.x0, r.y0));
        let b = self.screen_planar(Point::new(r.x1, r.y1));
        ScreenRect {
            min: ScreenPoint::new(a.x.min(b.x), a.y.min(b.y)),
            max: ScreenPoint::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Logical rectangle currently covered by the screen.
    fn visible_rect(&self) -> Rect {
        let w = i32::try_from(self.width()).unwrap_or(i32::MAX);
        let h = i32::try_from(self.height()).unwrap_or(i32::MAX);
        Rect::from_points(self.logical_at(0, 0), self.logical_at(w, h))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/coords/mapper.rs"]
mod tests;
