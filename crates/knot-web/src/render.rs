use glam::{Mat4, Quat, Vec3};
use knot_core::mesh::{gradient_quad, icosahedron, torus_knot};
use knot_core::{
    ObjectKind, PickShape, Rgb, SceneDriver, KNOT_HEX, KNOT_P, KNOT_Q, KNOT_RADIAL_SEGMENTS,
    KNOT_RADIUS, KNOT_TUBE, KNOT_TUBULAR_SEGMENTS, SHADOW_SEGMENTS, WIREFRAME_HEX,
};
use web_sys as web;

mod helpers;
mod meshes;
mod pipeline;

use meshes::GpuMesh;
use pipeline::{create_scene_resources, SceneResources};

// Phong material defaults
const SPHERE_SPECULAR_HEX: u32 = 0x111111;
const SPHERE_SHININESS: f32 = 30.0;
const KNOT_SPECULAR_HEX: u32 = 0x222222;
const KNOT_SHININESS: f32 = 90.0;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct DrawUniforms {
    view_proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    base_color: [f32; 4],
    emissive: [f32; 4],
    specular: [f32; 4],
    light_dir: [f32; 4],
    light_color: [f32; 4],
    eye: [f32; 4],
}

#[derive(Clone, Copy)]
struct Material {
    base: Rgb,
    lit: bool,
    specular: Rgb,
    shininess: f32,
}

impl Material {
    fn for_kind(kind: &ObjectKind, base: Rgb) -> Self {
        match kind {
            ObjectKind::Sphere { .. } => Self {
                base,
                lit: true,
                specular: Rgb::from_hex(SPHERE_SPECULAR_HEX),
                shininess: SPHERE_SHININESS,
            },
            ObjectKind::Shadow => Self {
                base,
                lit: false,
                specular: Rgb::BLACK,
                shininess: 1.0,
            },
        }
    }

    fn wireframe() -> Self {
        Self {
            base: Rgb::from_hex(WIREFRAME_HEX),
            lit: false,
            specular: Rgb::BLACK,
            shininess: 1.0,
        }
    }

    fn knot() -> Self {
        Self {
            base: Rgb::from_hex(KNOT_HEX),
            lit: true,
            specular: Rgb::from_hex(KNOT_SPECULAR_HEX),
            shininess: KNOT_SHININESS,
        }
    }
}

/// Uniform buffer and its bind group for one draw call.
struct UniformSlot {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl UniformSlot {
    fn new(device: &wgpu::Device, bgl: &wgpu::BindGroupLayout, label: &str) -> Self {
        let uniform_buffer = helpers::create_uniform_buffer(
            device,
            label,
            std::mem::size_of::<DrawUniforms>() as u64,
        );
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        Self {
            uniform_buffer,
            bind_group,
        }
    }

    fn write(&self, queue: &wgpu::Queue, u: &DrawUniforms) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(u));
    }
}

/// One mesh, its surface uniforms and, when it has edges, its wireframe uniforms.
struct DrawItem {
    mesh: GpuMesh,
    surface: UniformSlot,
    wire: Option<UniformSlot>,
}

impl DrawItem {
    fn new(device: &wgpu::Device, bgl: &wgpu::BindGroupLayout, label: &str, mesh: GpuMesh) -> Self {
        let wire = mesh
            .edges
            .as_ref()
            .map(|_| UniformSlot::new(device, bgl, &format!("{label}_wire")));
        Self {
            surface: UniformSlot::new(device, bgl, label),
            wire,
            mesh,
        }
    }
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    scene_res: SceneResources,
    _depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,
    // Parallel to `SceneDriver::objects()`
    objects: Vec<DrawItem>,
    knot: DrawItem,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, scene: &SceneDriver) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let (_depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);
        let scene_res = create_scene_resources(&device, format);

        let objects = scene
            .objects()
            .iter()
            .zip(scene.kinds())
            .enumerate()
            .map(|(i, (obj, kind))| {
                let extent = match obj.shape {
                    PickShape::Sphere { radius } => radius,
                    PickShape::Quad { half_extent } => half_extent,
                };
                let label = format!("object_{}", i);
                let gpu_mesh = match *kind {
                    ObjectKind::Sphere {
                        detail,
                        ramp,
                        wireframe,
                    } => {
                        let mesh = icosahedron(extent, detail, ramp);
                        let gpu_mesh = GpuMesh::upload(&device, &label, &mesh);
                        if wireframe {
                            gpu_mesh.with_edges(&device, &label, &mesh)
                        } else {
                            gpu_mesh
                        }
                    }
                    ObjectKind::Shadow => GpuMesh::upload(
                        &device,
                        &label,
                        &gradient_quad(extent * 2.0, SHADOW_SEGMENTS),
                    ),
                };
                DrawItem::new(&device, &scene_res.bgl, &label, gpu_mesh)
            })
            .collect::<Vec<_>>();

        let knot_mesh = torus_knot(
            KNOT_RADIUS,
            KNOT_TUBE,
            KNOT_TUBULAR_SEGMENTS,
            KNOT_RADIAL_SEGMENTS,
            KNOT_P,
            KNOT_Q,
        );
        let knot = DrawItem::new(
            &device,
            &scene_res.bgl,
            "knot",
            GpuMesh::upload(&device, "knot", &knot_mesh),
        );
        log::info!(
            "[gpu] {}x{} {:?}, {} objects uploaded",
            width,
            height,
            format,
            objects.len()
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene_res,
            _depth_tex,
            depth_view,
            objects,
            knot,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Reconfigure the surface and depth target at the current size, e.g. after `SurfaceError::Lost`.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        let (tex, view) = helpers::create_depth_texture(&self.device, self.width, self.height);
        self._depth_tex = tex;
        self.depth_view = view;
    }

    pub fn render(&mut self, scene: &SceneDriver) -> Result<(), wgpu::SurfaceError> {
        let camera = scene.camera();
        let view_proj = camera.view_projection();
        let light = scene.light();
        let frame_uniforms = |model: Mat4, material: Material, emissive: Rgb| DrawUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            base_color: [
                material.base.r,
                material.base.g,
                material.base.b,
                if material.lit { 1.0 } else { 0.0 },
            ],
            emissive: [emissive.r, emissive.g, emissive.b, 0.0],
            specular: [
                material.specular.r,
                material.specular.g,
                material.specular.b,
                material.shininess,
            ],
            light_dir: light.direction().extend(0.0).to_array(),
            light_color: [light.color.r, light.color.g, light.color.b, 1.0],
            eye: camera.eye.extend(1.0).to_array(),
        };

        for (i, ((item, obj), kind)) in self
            .objects
            .iter()
            .zip(scene.objects())
            .zip(scene.kinds())
            .enumerate()
        {
            let model = scene
                .model_matrix(i)
                .unwrap_or_else(|| Mat4::from_translation(obj.position));
            let u = frame_uniforms(
                model,
                Material::for_kind(kind, obj.base_color),
                obj.emissive.unwrap_or(Rgb::BLACK),
            );
            item.surface.write(&self.queue, &u);
            if let Some(wire) = &item.wire {
                wire.write(
                    &self.queue,
                    &frame_uniforms(model, Material::wireframe(), Rgb::BLACK),
                );
            }
        }

        let follower = scene.follower();
        let knot_pos = follower.position();
        let knot_model = Mat4::from_rotation_translation(
            Quat::from_rotation_y(follower.rotation_y()),
            Vec3::new(knot_pos.x, knot_pos.y, 0.0),
        );
        self.knot.surface.write(
            &self.queue,
            &frame_uniforms(knot_model, Material::knot(), Rgb::BLACK),
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let bg = scene.background();
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: bg.r as f64,
                            g: bg.g as f64,
                            b: bg.b as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.scene_res.pipeline);

            let knot = follower.visible().then_some(&self.knot);
            for item in self.objects.iter().chain(knot) {
                rpass.set_bind_group(0, &item.surface.bind_group, &[]);
                rpass.set_vertex_buffer(0, item.mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(item.mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..item.mesh.index_count, 0, 0..1);
            }

            // Wireframes after all surfaces so they win the equal-depth test
            rpass.set_pipeline(&self.scene_res.lines);
            for item in &self.objects {
                let (Some(wire), Some(edges)) = (&item.wire, &item.mesh.edges) else {
                    continue;
                };
                rpass.set_bind_group(0, &wire.bind_group, &[]);
                rpass.set_vertex_buffer(0, item.mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(edges.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..edges.index_count, 0, 0..1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
