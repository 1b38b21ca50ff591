use anyhow::Result;
use approx::assert_relative_eq;
use nalgebra::{Point3, Vector2, Vector3};
use portals::runtime::{run_headless, App, EyeMode, FrameInput, LogRenderer, Renderer};
use portals::scene::{demo_portals, PortalStyle, ScenePortal};
use portals::{Camera, FramePacket, Portal, PortalsApp, Rect, Settings};
use std::sync::atomic::AtomicBool;
use std::time::Duration;

#[derive(Default)]
struct RecordingRenderer {
    packets: Vec<FramePacket>,
}

impl Renderer for RecordingRenderer {
    fn next_frame(&mut self, packet: &FramePacket, _camera: &dyn Camera, _window_size: (u32, u32)) -> Result<()> {
        self.packets.push(packet.clone());
        Ok(())
    }
}

fn frame(app: &mut PortalsApp, settings: &Settings, elapsed: Duration) -> FramePacket {
    let camera = settings.camera();
    let input = FrameInput {
        elapsed,
        camera: &camera,
        window_size: settings.window_size,
    };
    app.next_frame(&input).unwrap()
}

#[test]
fn animated_eye_sees_through_all_walls() {
    let settings = Settings::default();
    let mut app = PortalsApp::new(settings).unwrap();
    let packet = frame(&mut app, &settings, Duration::from_secs(3));

    assert_eq!(app.eye_mode(), EyeMode::Animated);
    assert_relative_eq!(packet.eye, settings.eye_path.eye_at(Duration::from_secs(3)));
    assert_eq!(packet.objects.len(), 4);
    assert!(packet.skipped_portals.is_empty());

    // Four outline segments and five frustum segments per portal
    let (vertices, indices) = &packet.overlay;
    assert_eq!(indices.len(), 2 * 3 * (4 + 5));
    assert_eq!(vertices.len(), 3 * (4 + 6));

    let walls = demo_portals().unwrap();
    let (near, far) = settings.clipping;
    assert_eq!(packet.portal_views.len(), 3);
    for (view, wall) in packet.portal_views.iter().zip(walls.iter()) {
        let expected = wall.portal.projection_matrix(&packet.eye, near, far).unwrap();
        assert_relative_eq!(view.projection, expected);
        assert_relative_eq!(view.distance, wall.portal.distance(&packet.eye));
        assert_eq!(view.border_color, wall.style.outline);
    }

    let thumbnails: Vec<Rect> = packet.portal_views.iter().map(|view| view.thumbnail).collect();
    assert_eq!(thumbnails[0], Rect::new(416.0, 644.0, 672.0, 900.0));
    assert_eq!(thumbnails[2], Rect::new(928.0, 644.0, 1184.0, 900.0));
}

#[test]
fn user_camera_outside_the_box_skips_the_wall_it_is_behind() {
    let settings = Settings::default();
    let mut app = PortalsApp::new(settings).unwrap();
    app.set_eye_mode(EyeMode::UserControlled);
    let packet = frame(&mut app, &settings, Duration::from_secs(1));

    assert_relative_eq!(packet.eye, settings.camera_eye, epsilon = 1e-4);
    // The camera sits at x = -8, behind the left wall
    assert_eq!(packet.skipped_portals, vec![0]);
    let rendered: Vec<usize> = packet.portal_views.iter().map(|view| view.portal).collect();
    assert_eq!(rendered, vec![1, 2]);
    // Outlines and frusta are still drawn for every portal
    assert_eq!(packet.overlay.1.len(), 2 * 3 * (4 + 5));
}

#[test]
fn portal_facing_away_is_skipped() {
    let style = PortalStyle {
        outline: [1.0, 1.0, 0.0],
        frustum: [1.0, 1.0, 0.7],
    };
    let facing = Portal::from_center_normal(
        Point3::new(0.0, 0.0, -6.0),
        Vector3::z(),
        Vector2::new(2.0, 2.0),
    )
    .unwrap();
    let away = Portal::from_center_normal(
        Point3::new(0.0, 0.0, -6.0),
        -Vector3::z(),
        Vector2::new(2.0, 2.0),
    )
    .unwrap();
    let settings = Settings::default();
    let mut app = PortalsApp::with_scene(
        settings,
        vec![
            ScenePortal { portal: away, style },
            ScenePortal { portal: facing, style },
        ],
        Vec::new(),
    );

    let packet = frame(&mut app, &settings, Duration::from_secs(0));
    assert_eq!(packet.skipped_portals, vec![0]);
    assert_eq!(packet.portal_views.len(), 1);
    assert_eq!(packet.portal_views[0].portal, 1);
    assert!(packet.portal_views[0].projection.iter().all(|v| v.is_finite()));
}

#[test]
fn headless_loop_advances_a_fixed_timestep() {
    let settings = Settings::default();
    let mut app = PortalsApp::new(settings).unwrap();
    let mut renderer = RecordingRenderer::default();
    let running = AtomicBool::new(true);

    let frames = run_headless(&mut app, &mut renderer, &settings, Some(61), &running).unwrap();
    assert_eq!(frames, 61);
    assert_eq!(renderer.packets.len(), 61);
    let last = renderer.packets.last().unwrap();
    assert_relative_eq!(last.eye, settings.eye_path.eye_at(Duration::from_secs(1)), epsilon = 1e-3);
}

#[test]
fn headless_loop_counts_views() {
    let settings = Settings::default();
    let mut app = PortalsApp::new(settings).unwrap();
    let mut renderer = LogRenderer::default();

    let frames = run_headless(&mut app, &mut renderer, &settings, Some(120), &AtomicBool::new(true)).unwrap();
    assert_eq!(frames, 120);
    assert_eq!(renderer.frames(), 120);
    assert_eq!(renderer.portal_views(), 360);
    assert_eq!(renderer.skipped_portal_views(), 0);
}

#[test]
fn stopped_loop_renders_nothing() {
    let settings = Settings::default();
    let mut app = PortalsApp::new(settings).unwrap();
    let mut renderer = LogRenderer::default();
    let frames = run_headless(&mut app, &mut renderer, &settings, None, &AtomicBool::new(false)).unwrap();
    assert_eq!(frames, 0);
    assert_eq!(renderer.frames(), 0);
}
