mod camera;
pub use camera::{Camera, PerspectiveCamera};
