//! Frame loop, input handling and backends.
mod eye;
mod log_renderer;
mod mouse_camera;
pub mod runtime_3d;
mod target_time;

pub use eye::{EyeDriver, EyeMode, EyePath};
pub use log_renderer::LogRenderer;
pub use mouse_camera::MouseCamera;
pub use runtime_3d::{headless_backend, run_headless, windowed_backend, App, FrameInput, Renderer};
pub use target_time::TargetTime;
