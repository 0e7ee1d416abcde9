use crate::paint::Color;

/// A drawable target.
///
/// Implemented by `device::Onscreen`; the associated types let tests drive
/// the scheduler without a GPU.
pub trait Framebuffer {
    type Pipeline;
    type Primitive;

    /// Clears the color buffer.
    fn clear4f(&mut self, color: Color);

    fn draw_primitive(&mut self, pipeline: &Self::Pipeline, primitive: &Self::Primitive);

    /// Presents what was drawn since the last swap.
    fn swap_buffers(&mut self);
}

/// The surface, geometry and render state drawn every frame.
///
/// Pipeline and primitive are fixed at construction; only the framebuffer
/// is reachable mutably.
pub struct RenderSession<F: Framebuffer> {
    framebuffer: F,
    pipeline: F::Pipeline,
    primitive: F::Primitive,
}

impl<F: Framebuffer> RenderSession<F> {
    pub fn new(framebuffer: F, pipeline: F::Pipeline, primitive: F::Primitive) -> Self {
        Self {
            framebuffer,
            pipeline,
            primitive,
        }
    }

    pub fn framebuffer(&self) -> &F {
        &self.framebuffer
    }

    pub fn framebuffer_mut(&mut self) -> &mut F {
        &mut self.framebuffer
    }

    pub fn primitive(&self) -> &F::Primitive {
        &self.primitive
    }

    /// Clears to `clear`, draws the primitive and presents.
    pub fn paint(&mut self, clear: Color) {
        self.framebuffer.clear4f(clear);
        self.framebuffer.draw_primitive(&self.pipeline, &self.primitive);
        self.framebuffer.swap_buffers();
    }
}
