pub(crate) mod camera;
pub(crate) mod frame;
pub(crate) mod mapper;
pub(crate) mod point;
