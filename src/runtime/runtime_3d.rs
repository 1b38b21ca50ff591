//! The runtime for the portals demo.
//!
//! Provides an Arcball camera in windowed mode and a fixed-timestep headless
//! loop. Rendering itself is delegated to a [`Renderer`].

use super::mouse_camera::MouseCamera;
use super::target_time::TargetTime;
use crate::{Camera, FramePacket, PerspectiveCamera, Settings};
use anyhow::Result;
use log::{error, info};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::{Duration, Instant};
use winit::{
    dpi::PhysicalSize,
    event::{Event, StartCause, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

/// Per-frame input handed to an [`App`]
pub struct FrameInput<'a> {
    /// Time since launch
    pub elapsed: Duration,
    /// The orbit camera of the main view
    pub camera: &'a PerspectiveCamera,
    /// Window size in physical pixels
    pub window_size: (u32, u32),
}

/// An app that can be run on the runtime
pub trait App: Sized {
    const NAME: &'static str;
    /// Arguments passed into the structure on creation
    type Args;
    /// Create a new instance of the app
    fn new(args: Self::Args) -> Result<Self>;
    /// Handle a winit window event
    fn event(&mut self, event: &WindowEvent) -> Result<()>;
    /// Update the app's state and describe the next frame
    fn next_frame(&mut self, input: &FrameInput) -> Result<FramePacket>;
}

/// Draws frames. Implemented by whatever owns the GPU.
pub trait Renderer {
    /// Render one frame: the scene and overlay through `camera`, then every
    /// portal view into its off-screen target, its quad, and its thumbnail.
    fn next_frame(&mut self, packet: &FramePacket, camera: &dyn Camera, window_size: (u32, u32)) -> Result<()>;
}

/// Launch an `App` using `winit` as a surface and input mechanism for windowed mode.
///
/// `args` go to [`App::new`] untouched, while `settings` size the window,
/// pace the loop and place the orbit camera. An app's arguments need not
/// carry any of those, so the two are passed separately even when, as for
/// [`crate::PortalsApp`], they are the same value.
pub fn windowed_backend<A, R>(args: A::Args, settings: Settings, mut renderer: R) -> Result<()>
where
    A: App + 'static,
    R: Renderer + 'static,
{
    let event_loop = EventLoop::new();
    let (width, height) = settings.window_size;
    let window = WindowBuilder::new()
        .with_title(A::NAME)
        .with_inner_size(PhysicalSize::new(width, height))
        .build(&event_loop)?;

    let mut app = A::new(args)?;
    info!("Launched {} in windowed mode", A::NAME);

    let mut mouse_camera = MouseCamera::new(settings.camera(), 0.001, 0.004);
    let mut target_time = TargetTime::new(settings.target_fps);
    let start = Instant::now();
    event_loop.run(move |event, _, control_flow| match event {
        Event::NewEvents(StartCause::Init) => {
            *control_flow = ControlFlow::Poll;
        }
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
            _ => {
                mouse_camera.handle_events(&event);
                if let Err(e) = app.event(&event) {
                    error!("Event handling failed: {:?}", e);
                    *control_flow = ControlFlow::Exit;
                }
            }
        },
        Event::MainEventsCleared => {
            target_time.start_frame();
            let PhysicalSize { width, height } = window.inner_size();
            let input = FrameInput {
                elapsed: start.elapsed(),
                camera: &mouse_camera.inner,
                window_size: (width, height),
            };
            if let Err(e) = render_frame(&mut app, &mut renderer, &input) {
                error!("Frame failed: {:?}", e);
                *control_flow = ControlFlow::Exit;
            }
            target_time.end_frame();
        }
        Event::LoopDestroyed => info!("Exiting"),
        _ => (),
    })
}

/// Run an `App` without a window, stopping after `frames` frames or on Ctrl-C.
/// As with [`windowed_backend`], `args` are the app's and `settings` the runtime's.
/// Returns the number of frames rendered.
pub fn headless_backend<A: App, R: Renderer>(
    args: A::Args,
    settings: &Settings,
    renderer: &mut R,
    frames: Option<u64>,
) -> Result<u64> {
    // Handle interrupts gracefully
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::Relaxed);
    })?;

    let mut app = A::new(args)?;
    info!("Launched {} in headless mode", A::NAME);
    let rendered = run_headless(&mut app, renderer, settings, frames, &running)?;
    info!("Rendered {} frames", rendered);
    Ok(rendered)
}

/// The headless loop. Time advances by exactly one target frame per frame,
/// so runs are reproducible.
pub fn run_headless<A: App, R: Renderer>(
    app: &mut A,
    renderer: &mut R,
    settings: &Settings,
    frames: Option<u64>,
    running: &AtomicBool,
) -> Result<u64> {
    let camera = settings.camera();
    let mut frame = 0;
    while running.load(Ordering::Relaxed) && frames.map_or(true, |total| frame < total) {
        let input = FrameInput {
            elapsed: frame_elapsed(frame, settings.target_fps),
            camera: &camera,
            window_size: settings.window_size,
        };
        render_frame(app, renderer, &input)?;
        frame += 1;
    }
    if !running.load(Ordering::Relaxed) {
        info!("Interrupted after {} frames", frame);
    }
    Ok(frame)
}

/// Start time of headless frame `frame` at `target_fps` frames per second
fn frame_elapsed(frame: u64, target_fps: u64) -> Duration {
    Duration::from_secs_f64(frame as f64 / target_fps.max(1) as f64)
}

fn render_frame<A: App, R: Renderer>(app: &mut A, renderer: &mut R, input: &FrameInput) -> Result<()> {
    let packet = app.next_frame(input)?;
    renderer.next_frame(&packet, input.camera, input.window_size)
}
