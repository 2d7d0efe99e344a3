/// Display-driven render loop state machine
use crate::animation::FrameUniforms;
use crate::backend::GraphicsBackend;
use crate::scene::Scene;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Initialized, no frame drawn yet.
    Idle,
    /// Looping on every display refresh. There is no state after this one.
    Running { frames: u64 },
}

/// Owns the scene and draws one frame per tick.
///
/// The loop does not schedule itself. The host calls [`RenderLoop::tick`]
/// from its display refresh callback.
pub struct RenderLoop<B: GraphicsBackend> {
    scene: Scene<B>,
    state: LoopState,
}

impl<B: GraphicsBackend> RenderLoop<B> {
    pub fn new(scene: Scene<B>) -> Self {
        Self {
            scene,
            state: LoopState::Idle,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn scene(&self) -> &Scene<B> {
        &self.scene
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running { .. })
    }

    /// Move from idle to running. Calling it again has no effect.
    pub fn start(&mut self) {
        match self.state {
            LoopState::Idle => {
                log::info!("render loop running ({} variant)", self.scene.variant());
                self.state = LoopState::Running { frames: 0 };
            }
            LoopState::Running { frames } => {
                log::debug!("render loop already running after {frames} frames");
            }
        }
    }

    /// Draw one frame. Returns `None` while the loop is still idle.
    pub fn tick(&mut self) -> Option<FrameUniforms> {
        let LoopState::Running { frames } = &mut self.state else {
            return None;
        };
        *frames += 1;
        let frame = self.scene.draw_frame();
        log::trace!("frame {} theta={:.4}", frames, frame.theta);
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::recording::{Call, RecordingBackend};
    use crate::config::SceneConfig;
    use crate::geometry::Mesh;
    use crate::variant::Variant;
    use nalgebra::{Matrix4, Point3};
    use std::f64::consts::TAU;

    fn running_loop(variant: Variant, uniforms: &[&'static str]) -> RenderLoop<RecordingBackend> {
        let scene = Scene::initialize(
            RecordingBackend::with_uniforms(uniforms),
            &Mesh::pyramid(),
            variant,
            &SceneConfig::default(),
            (512, 512),
        )
        .unwrap();
        let mut render_loop = RenderLoop::new(scene);
        render_loop.start();
        render_loop
    }

    #[test]
    fn test_idle_until_started() {
        let scene = Scene::initialize(
            RecordingBackend::default(),
            &Mesh::pyramid(),
            Variant::Indexed,
            &SceneConfig::default(),
            (512, 512),
        )
        .unwrap();
        let mut render_loop = RenderLoop::new(scene);

        assert_eq!(render_loop.state(), LoopState::Idle);
        assert_eq!(render_loop.tick(), None);
        assert!(!render_loop
            .scene()
            .backend()
            .calls
            .iter()
            .any(|c| matches!(c, Call::Draw(_) | Call::Clear)));

        render_loop.start();
        render_loop.start();
        assert_eq!(render_loop.state(), LoopState::Running { frames: 0 });
    }

    #[test]
    fn test_ticks_count_frames_and_draw() {
        let mut render_loop = running_loop(Variant::Animated, &["theta"]);
        for _ in 0..3 {
            assert!(render_loop.tick().is_some());
        }
        assert_eq!(render_loop.state(), LoopState::Running { frames: 3 });

        let draws = render_loop
            .scene()
            .backend()
            .calls
            .iter()
            .filter(|c| **c == Call::Draw(12))
            .count();
        assert_eq!(draws, 3);
    }

    #[test]
    fn test_angle_after_n_ticks() {
        let mut render_loop = running_loop(Variant::Animated, &["theta"]);
        let mut theta = 0.0;
        for _ in 0..700 {
            theta = render_loop.tick().unwrap().theta;
        }
        assert!((theta - 7.0).abs() < 1e-3);
    }

    #[test]
    fn test_camera_variant_wraps() {
        let mut render_loop = running_loop(
            Variant::Camera,
            &["theta", "viewMatrix", "projectionMatrix"],
        );
        let mut previous = 0.0;
        let mut wrapped = false;
        for _ in 0..1000 {
            let pushed = render_loop.tick().unwrap().theta;
            let theta = render_loop.scene().driver().rotation().theta();
            assert_eq!(pushed, theta as f32);
            assert!((0.0..TAU).contains(&theta));
            if theta < previous {
                wrapped = true;
                assert!((theta - (previous + 0.01 - TAU)).abs() < 1e-9);
            } else {
                assert!((theta - previous - 0.01).abs() < 1e-9);
            }
            previous = theta;
        }
        assert!(wrapped);
    }

    #[test]
    fn test_first_frame_camera_matrices() {
        let mut render_loop = running_loop(
            Variant::Camera,
            &["theta", "viewMatrix", "projectionMatrix"],
        );
        let frame = render_loop.tick().unwrap();

        let projection = Matrix4::from_column_slice(&frame.projection.unwrap());
        assert_eq!(projection[(3, 2)], -1.0);
        assert_eq!(frame.projection.unwrap()[11], -1.0);

        let view = Matrix4::from_column_slice(&frame.view.unwrap());
        let eye = Point3::new(0.0, 1.0, 4.0);
        assert!(view.transform_point(&eye).coords.norm() < 1e-5);

        let target = view.transform_point(&Point3::origin());
        assert!(target.x.abs() < 1e-5 && target.y.abs() < 1e-5);
        assert!(target.z < 0.0);
        assert!((target.z + 17.0_f32.sqrt()).abs() < 1e-5);
    }
}
