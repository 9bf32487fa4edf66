use crate::foundation::error::{SynthError, SynthResult};

pub use kurbo::{Point, Rect, Vec2};

/// Logical 3-D point; projected to the plane by a [`Camera`](crate::Camera).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// The closed set of logical point shapes the mapper projects.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicalPoint {
    Planar(Point),
    Spatial(Point3),
}

impl From<Point> for LogicalPoint {
    fn from(p: Point) -> Self {
        Self::Planar(p)
    }
}

impl From<Point3> for LogicalPoint {
    fn from(p: Point3) -> Self {
        Self::Spatial(p)
    }
}

impl TryFrom<&[f64]> for LogicalPoint {
    type Error = SynthError;

    /// Accepts exactly two (`x, y`) or three (`x, y, z`) components.
    fn try_from(components: &[f64]) -> SynthResult<Self> {
        match *components {
            [x, y] => Ok(Self::Planar(Point::new(x, y))),
            [x, y, z] => Ok(Self::Spatial(Point3::new(x, y, z))),
            _ => Err(SynthError::unsupported_point(format!(
                "only 2-D and 3-D points are projected, got {} components",
                components.len()
            ))),
        }
    }
}

/// Integer pixel position; may lie outside the visible screen.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Pixel rectangle with `min` at the top-left corner.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ScreenRect {
    pub min: ScreenPoint,
    pub max: ScreenPoint,
}

impl ScreenRect {
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }
}
