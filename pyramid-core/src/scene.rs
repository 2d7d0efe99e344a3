/// One-time scene setup: buffer upload, attribute binding, uniform lookup
use crate::animation::{AnimationDriver, FrameUniforms, UniformLocations};
use crate::backend::{names, GraphicsBackend};
use crate::camera::Camera;
use crate::config::SceneConfig;
use crate::error::SceneError;
use crate::geometry::{flatten, Mesh, COMPONENTS};
use crate::rotation::RotationState;
use crate::variant::Variant;

/// GPU buffers created by the initializer. Never written again.
#[derive(Debug)]
pub struct SceneBuffers<T> {
    pub indices: T,
    pub colors: T,
    pub positions: T,
}

/// Everything the render loop needs, owned in one place
pub struct Scene<B: GraphicsBackend> {
    backend: B,
    _buffers: SceneBuffers<B::Buffer>,
    uniforms: UniformLocations<B::UniformLocation>,
    driver: AnimationDriver,
    index_count: usize,
    variant: Variant,
}

impl<B: GraphicsBackend> Scene<B> {
    /// Upload the mesh and resolve shader inputs.
    ///
    /// `backend` must already have the linked shader program current.
    pub fn initialize(
        mut backend: B,
        mesh: &Mesh,
        variant: Variant,
        config: &SceneConfig,
        (width, height): (u32, u32),
    ) -> Result<Self, SceneError> {
        mesh.validate()?;

        backend.set_viewport(width, height);
        backend.set_clear_color(config.clear_color);
        backend.enable_depth_test();

        let indices = backend.upload_indices(&mesh.index_data())?;
        let colors =
            backend.upload_attribute(names::COLOR_ATTRIBUTE, &flatten(&mesh.colors()), COMPONENTS)?;
        let positions = backend.upload_attribute(
            names::POSITION_ATTRIBUTE,
            &flatten(&mesh.positions()),
            COMPONENTS,
        )?;
        log::debug!(
            "uploaded {} vertices and {} indices",
            mesh.vertices().len(),
            mesh.index_count()
        );

        let mut uniforms = UniformLocations {
            theta: backend.uniform_location(names::THETA_UNIFORM),
            ..UniformLocations::default()
        };
        let camera = if variant.uses_camera() {
            uniforms.view = backend.uniform_location(names::VIEW_UNIFORM);
            uniforms.projection = backend.uniform_location(names::PROJECTION_UNIFORM);
            let camera = Camera::new(&config.camera, width, height)?;
            log::debug!("camera aspect fixed at {:.3}", camera.aspect());
            Some(camera)
        } else {
            None
        };

        let rotation = RotationState::new(config.angle_increment, variant.wrap_mode());

        Ok(Self {
            backend,
            _buffers: SceneBuffers {
                indices,
                colors,
                positions,
            },
            uniforms,
            driver: AnimationDriver::new(rotation, camera),
            index_count: mesh.index_count(),
            variant,
        })
    }

    /// Clear, update uniforms and issue the single indexed draw call
    pub fn draw_frame(&mut self) -> FrameUniforms {
        self.backend.clear();
        let frame = self.driver.update(&mut self.backend, &self.uniforms);
        self.backend.draw_indexed_triangles(self.index_count);
        frame
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn index_count(&self) -> usize {
        self.index_count
    }

    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    #[cfg(test)]
    pub(crate) fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
