use crate::device::Context;
use crate::primitive::{VertexP2C4, VerticesMode};

/// Default render state.
///
/// wgpu bakes topology into the pipeline object, so one variant is built per
/// `VerticesMode` up front. All variants share the shader and layout and
/// target a single surface format.
pub struct Pipeline {
    format: wgpu::TextureFormat,
    variants: Vec<wgpu::RenderPipeline>,
}

impl Pipeline {
    /// Builds the default pipeline for surfaces of `format`.
    pub fn new(ctx: &Context, format: wgpu::TextureFormat) -> Self {
        let device = ctx.device();

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("tricycle default shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/default.wgsl").into()),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("tricycle default pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let variants = VerticesMode::ALL
            .iter()
            .map(|mode| build_variant(device, &shader, &layout, format, *mode))
            .collect();

        log::debug!("default pipeline built for {format:?}");

        Self { format, variants }
    }

    /// Surface format the pipeline renders to.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    pub(crate) fn for_mode(&self, mode: VerticesMode) -> &wgpu::RenderPipeline {
        &self.variants[mode.index()]
    }
}

fn build_variant(
    device: &wgpu::Device,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    format: wgpu::TextureFormat,
    mode: VerticesMode,
) -> wgpu::RenderPipeline {
    let label = format!("tricycle default pipeline ({mode:?})");

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label.as_str()),
        layout: Some(layout),

        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[VertexP2C4::layout()],
        },

        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology: mode.topology(),
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },

        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}
