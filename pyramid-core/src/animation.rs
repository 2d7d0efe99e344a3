/// Per-frame uniform updates
use crate::backend::GraphicsBackend;
use crate::camera::Camera;
use crate::geometry::flatten_matrix;
use crate::rotation::RotationState;

/// Uniform locations resolved once by the scene initializer
#[derive(Debug, Clone)]
pub struct UniformLocations<L> {
    pub theta: Option<L>,
    pub view: Option<L>,
    pub projection: Option<L>,
}

impl<L> Default for UniformLocations<L> {
    fn default() -> Self {
        Self {
            theta: None,
            view: None,
            projection: None,
        }
    }
}

/// Values pushed to the GPU during one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameUniforms {
    pub theta: f32,
    pub view: Option<[f32; 16]>,
    pub projection: Option<[f32; 16]>,
}

/// Advances the rotation and, with a camera, rebuilds view and projection.
///
/// The camera matrices are recomputed every frame even though their inputs
/// never change after initialization.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    rotation: RotationState,
    camera: Option<Camera>,
}

impl AnimationDriver {
    pub fn new(rotation: RotationState, camera: Option<Camera>) -> Self {
        Self { rotation, camera }
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    pub fn update<B: GraphicsBackend>(
        &mut self,
        backend: &mut B,
        uniforms: &UniformLocations<B::UniformLocation>,
    ) -> FrameUniforms {
        let theta = self.rotation.advance() as f32;
        if let Some(location) = &uniforms.theta {
            backend.set_uniform_f32(location, theta);
        }

        let mut frame = FrameUniforms {
            theta,
            view: None,
            projection: None,
        };

        if let Some(camera) = &self.camera {
            let view = flatten_matrix(&camera.view_matrix());
            let projection = flatten_matrix(&camera.projection_matrix());

            if let Some(location) = &uniforms.view {
                backend.set_uniform_mat4(location, &view);
            }
            if let Some(location) = &uniforms.projection {
                backend.set_uniform_mat4(location, &projection);
            }

            frame.view = Some(view);
            frame.projection = Some(projection);
        }

        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::recording::{Call, RecordingBackend};
    use crate::config::CameraConfig;
    use crate::rotation::WrapMode;

    fn locations(names: &[&str]) -> UniformLocations<String> {
        let has = |n: &str| names.contains(&n).then(|| n.to_string());
        UniformLocations {
            theta: has("theta"),
            view: has("viewMatrix"),
            projection: has("projectionMatrix"),
        }
    }

    #[test]
    fn test_pushes_theta_only_without_camera() {
        let mut backend = RecordingBackend::default();
        let mut driver = AnimationDriver::new(RotationState::new(0.01, WrapMode::Unbounded), None);

        let frame = driver.update(&mut backend, &locations(&["theta"]));

        assert!((frame.theta - 0.01).abs() < 1e-7);
        assert_eq!(frame.view, None);
        assert_eq!(backend.calls, vec![Call::UniformF32("theta".into(), frame.theta)]);
    }

    #[test]
    fn test_missing_location_is_skipped() {
        let mut backend = RecordingBackend::default();
        let mut driver = AnimationDriver::new(RotationState::default(), None);

        driver.update(&mut backend, &UniformLocations::default());
        driver.update(&mut backend, &UniformLocations::default());

        assert!(backend.calls.is_empty());
        assert!((driver.rotation().theta() - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_camera_matrices_pushed_every_frame() {
        let mut backend = RecordingBackend::default();
        let camera = Camera::new(&CameraConfig::default(), 512, 512).unwrap();
        let mut driver = AnimationDriver::new(
            RotationState::new(0.01, WrapMode::SingleSubtraction),
            Some(camera.clone()),
        );
        let uniforms = locations(&["theta", "viewMatrix", "projectionMatrix"]);

        let first = driver.update(&mut backend, &uniforms);
        let second = driver.update(&mut backend, &uniforms);

        assert_eq!(backend.calls.len(), 6);
        assert_eq!(first.view, second.view);
        assert_eq!(first.projection, Some(flatten_matrix(&camera.projection_matrix())));
        assert_eq!(
            backend.calls[1],
            Call::UniformMat4("viewMatrix".into(), flatten_matrix(&camera.view_matrix()))
        );
    }
}
