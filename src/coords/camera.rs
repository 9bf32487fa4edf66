use crate::coords::point::{Point, Point3};

/// View used to flatten 3-D logical points onto the logical plane.
///
/// The coordinate mapper consults a camera but does not own its state.
pub trait Camera: std::fmt::Debug + Send + Sync {
    fn project(&self, p: Point3) -> Point;
}

/// Parallel projection along the z axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrthographicCamera;

impl Camera for OrthographicCamera {
    fn project(&self, p: Point3) -> Point {
        Point::new(p.x, p.y)
    }
}
