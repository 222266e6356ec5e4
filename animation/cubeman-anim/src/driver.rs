//! Frame loop: clock advance, pose evaluation and draw submission
//!
//! The driver owns the only state that survives between frames
//! ([`AnimationState`]) and talks to the outside world through two traits:
//! [`FrameClock`] for wall time and [`Renderer`] for GPU work.

use std::time::Instant;

use cubeman_mesh::{Mesh, PrimitiveKind, SphereParams, generate_cube, generate_sphere};
use glam::Mat4;
use log::{debug, info, trace};

use crate::camera::{CameraMode, STARTUP_CAMERA};
use crate::error::Result;
use crate::rig::{PART_COUNT, Rig};
use crate::state::AnimationState;

/// Escape key as delivered by the windowing layer
pub const KEY_ESCAPE: char = '\u{1b}';

/// Monotonic wall-clock source
pub trait FrameClock {
    /// Milliseconds elapsed since an arbitrary fixed origin
    fn now_ms(&mut self) -> u64;
}

/// Wall clock backed by [`Instant`]
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn now_ms(&mut self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Hand-stepped clock for headless runs and tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManualClock {
    now_ms: u64,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self { now_ms: start_ms }
    }

    pub fn advance(&mut self, delta_ms: u64) {
        self.now_ms = self.now_ms.saturating_add(delta_ms);
    }

    /// Jump to an absolute time; moving backwards is allowed
    pub fn set(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
    }
}

impl FrameClock for ManualClock {
    fn now_ms(&mut self) -> u64 {
        self.now_ms
    }
}

/// Graphics back end the driver submits work to
///
/// Calls are assumed to succeed; device loss is the back end's problem.
pub trait Renderer {
    /// Upload a primitive's static geometry once at startup
    fn upload_mesh(&mut self, kind: PrimitiveKind, mesh: &Mesh);

    fn set_projection(&mut self, projection: Mat4);

    fn set_view(&mut self, view: Mat4);

    /// Draw an uploaded primitive under a world transform
    fn draw_primitive(&mut self, kind: PrimitiveKind, world: Mat4);
}

/// One recorded draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub kind: PrimitiveKind,
    pub world: Mat4,
}

/// Renderer that records every call instead of drawing
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    /// Uploaded primitives with their vertex counts
    pub uploads: Vec<(PrimitiveKind, usize)>,
    pub projection: Option<Mat4>,
    pub view: Option<Mat4>,
    pub draws: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget recorded draws, keeping uploads and matrices
    pub fn clear_draws(&mut self) {
        self.draws.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn upload_mesh(&mut self, kind: PrimitiveKind, mesh: &Mesh) {
        self.uploads.push((kind, mesh.vertex_count()));
    }

    fn set_projection(&mut self, projection: Mat4) {
        self.projection = Some(projection);
    }

    fn set_view(&mut self, view: Mat4) {
        self.view = Some(view);
    }

    fn draw_primitive(&mut self, kind: PrimitiveKind, world: Mat4) {
        self.draws.push(DrawCall { kind, world });
    }
}

/// Window size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height, or 1.0 for a zero-height viewport
    pub fn aspect_ratio(&self) -> f32 {
        if self.height > 0 {
            self.width as f32 / self.height as f32
        } else {
            1.0
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(512, 512)
    }
}

/// Perspective projection parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Perspective {
    /// Vertical field of view in degrees
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
}

impl Perspective {
    /// Right-handed, OpenGL depth range projection for a viewport
    pub fn matrix(&self, viewport: Viewport) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fov_y_deg.to_radians(),
            viewport.aspect_ratio(),
            self.near,
            self.far,
        )
    }
}

impl Default for Perspective {
    fn default() -> Self {
        Self {
            fov_y_deg: 65.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Startup settings for a [`FrameDriver`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriverSettings {
    pub camera_mode: CameraMode,
    pub speed: f32,
    pub viewport: Viewport,
    pub perspective: Perspective,
    pub sphere: SphereParams,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            camera_mode: CameraMode::Side,
            speed: 1.0,
            viewport: Viewport::default(),
            perspective: Perspective::default(),
            sphere: SphereParams::default(),
        }
    }
}

/// What the windowing layer should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Key not bound
    Ignored,
    /// State changed, schedule a redraw
    Redraw,
    /// Close the window
    Quit,
}

/// Drives the cubeman one display refresh at a time
#[derive(Debug)]
pub struct FrameDriver<C: FrameClock> {
    rig: Rig,
    state: AnimationState,
    clock: C,
    prev_ms: u64,
    viewport: Viewport,
    perspective: Perspective,
    sphere: SphereParams,
}

impl<C: FrameClock> FrameDriver<C> {
    pub fn new(rig: Rig, settings: DriverSettings, mut clock: C) -> Result<Self> {
        let mut state = AnimationState::new(settings.camera_mode);
        state.set_speed(settings.speed)?;
        let prev_ms = clock.now_ms();

        Ok(Self {
            rig,
            state,
            clock,
            prev_ms,
            viewport: settings.viewport,
            perspective: settings.perspective,
            sphere: settings.sphere,
        })
    }

    pub fn rig(&self) -> &Rig {
        &self.rig
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AnimationState {
        &mut self.state
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Generate and upload both primitives, then set the initial matrices
    pub fn init<R: Renderer>(&mut self, renderer: &mut R) {
        let cube = generate_cube();
        let sphere = generate_sphere(self.sphere);
        renderer.upload_mesh(PrimitiveKind::Cube, &cube);
        renderer.upload_mesh(PrimitiveKind::Sphere, &sphere);
        debug!(
            "Uploaded cube ({} vertices) and sphere ({} vertices)",
            cube.vertex_count(),
            sphere.vertex_count()
        );

        renderer.set_projection(self.perspective.matrix(self.viewport));
        renderer.set_view(STARTUP_CAMERA.view_matrix());

        self.prev_ms = self.clock.now_ms();
        info!(
            "Driver ready: {}x{} viewport, {} camera, {:.2}s cycle",
            self.viewport.width,
            self.viewport.height,
            self.state.camera_mode,
            self.rig.clip().cycle_seconds()
        );
    }

    /// Advance the animation clock from wall time
    ///
    /// Returns `false` without touching the clock when no time has passed
    /// (or the wall clock stepped backwards).
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now_ms();
        if now <= self.prev_ms {
            return false;
        }
        let delta_ms = now - self.prev_ms;
        self.prev_ms = now;
        self.state.advance_ms(delta_ms);
        trace!(
            "Tick: +{delta_ms}ms -> t={:.3}s",
            self.state.clock.seconds()
        );
        true
    }

    /// Draw the current frame: one view update and one draw per part
    ///
    /// Returns the number of draw calls issued.
    pub fn render<R: Renderer>(&self, renderer: &mut R) -> usize {
        let time = self.state.clock.seconds();

        renderer.set_view(self.state.camera_mode.config().view_matrix());
        let parts = self.rig.evaluate_pose(time);
        for part in &parts {
            trace!("Draw {} ({})", part.part, part.kind);
            renderer.draw_primitive(part.kind, part.transform);
        }
        PART_COUNT
    }

    /// Tick and, when time moved, render
    pub fn frame<R: Renderer>(&mut self, renderer: &mut R) -> bool {
        if self.tick() {
            self.render(renderer);
            true
        } else {
            false
        }
    }

    /// Track a window resize and reissue the projection
    pub fn resize<R: Renderer>(&mut self, width: u32, height: u32, renderer: &mut R) {
        self.viewport = Viewport::new(width, height);
        debug!(
            "Resize to {width}x{height} (aspect {:.3})",
            self.viewport.aspect_ratio()
        );
        renderer.set_projection(self.perspective.matrix(self.viewport));
    }

    /// Keyboard bindings: 1-3 pick a camera, p pauses, q or Esc quits
    pub fn handle_key(&mut self, key: char) -> KeyAction {
        match key {
            '1' | '2' | '3' => {
                let mode = CameraMode::from_index(key.to_digit(10).unwrap_or(3));
                self.state.set_camera(mode);
                KeyAction::Redraw
            }
            'p' | 'P' => {
                self.state.toggle_pause();
                KeyAction::Redraw
            }
            'q' | 'Q' | KEY_ESCAPE => KeyAction::Quit,
            _ => KeyAction::Ignored,
        }
    }
}
