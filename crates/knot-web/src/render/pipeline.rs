use super::helpers::DEPTH_FORMAT;
use super::meshes::Vertex;

pub(crate) static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");

pub(crate) struct SceneResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    /// Same shader over a line list, for wireframe overlays.
    pub(crate) lines: wgpu::RenderPipeline,
    pub(crate) bgl: wgpu::BindGroupLayout,
}

pub(crate) fn create_scene_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> SceneResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_bgl"),
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = build_pipeline(
        device,
        &shader,
        &pl,
        color_format,
        "scene_pipeline",
        wgpu::PrimitiveTopology::TriangleList,
        wgpu::CompareFunction::Less,
    );
    // Edges sit exactly on the faces, so they must pass on equal depth
    let lines = build_pipeline(
        device,
        &shader,
        &pl,
        color_format,
        "wire_pipeline",
        wgpu::PrimitiveTopology::LineList,
        wgpu::CompareFunction::LessEqual,
    );

    SceneResources {
        pipeline,
        lines,
        bgl,
    }
}

fn build_pipeline(
    device: &wgpu::Device,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    color_format: wgpu::TextureFormat,
    label: &str,
    topology: wgpu::PrimitiveTopology,
    depth_compare: wgpu::CompareFunction,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::layout()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}
