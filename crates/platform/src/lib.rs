//! Window shell: winit event loop + egui painted through wgpu.
//!
//! The shell owns the window, the GPU surface, and the frame cadence; the
//! application only implements [`ShellApp`] and builds egui UI each frame.

use std::sync::Arc;
use std::{thread, time::Duration};

use egui::{Context as EguiContext, viewport::ViewportId};
use egui_wgpu::{Renderer as EguiWgpuRenderer, ScreenDescriptor, wgpu};
use egui_winit::State as EguiWinitState;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop, EventLoopProxy},
    window::{Window, WindowId},
};

/// The application face of the shell: called once per frame with the egui
/// context to build the UI.
pub trait ShellApp {
    fn ui(&mut self, ctx: &EguiContext);
}

enum UserEvent {
    Tick,
}

/// Run the shell until the window closes.
pub fn run(app: Box<dyn ShellApp>) {
    let event_loop = EventLoop::<UserEvent>::with_user_event()
        .build()
        .expect("failed to create event loop");

    let proxy = event_loop.create_proxy();
    let mut shell = Shell {
        app,
        window: None,
        proxy: Some(proxy),
        ticker_started: false,
        egui: None,
        gpu: None,
    };
    event_loop.run_app(&mut shell).expect("event loop crashed");
}

/// Everything owned once the GPU surface is live.
struct Gpu {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: EguiWgpuRenderer,
}

struct Shell {
    app: Box<dyn ShellApp>,
    window: Option<Arc<Window>>,
    proxy: Option<EventLoopProxy<UserEvent>>,
    ticker_started: bool,
    egui: Option<(EguiContext, EguiWinitState)>,
    gpu: Option<Gpu>,
}

impl Shell {
    fn init_gpu(&mut self, window: &Arc<Window>) -> Gpu {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = unsafe { instance.create_surface(Arc::clone(window)) }.expect("surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            force_fallback_adapter: false,
            compatible_surface: Some(&surface),
        }))
        .expect("no suitable adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            memory_hints: wgpu::MemoryHints::Performance,
            trace: wgpu::Trace::default(),
        }))
        .expect("device");

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(caps.formats[0]);

        let size = window.inner_size();
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 0,
        };
        surface.configure(&device, &config);

        let renderer = EguiWgpuRenderer::new(&device, format, None, 1, true);

        Gpu {
            surface,
            device,
            queue,
            config,
            renderer,
        }
    }

    fn redraw(&mut self) {
        let (Some(window), Some((ctx, state)), Some(gpu)) =
            (self.window.as_ref(), self.egui.as_mut(), self.gpu.as_mut())
        else {
            return;
        };

        let frame = match gpu.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost) => {
                // Reconfigure (common after display changes).
                gpu.surface.configure(&gpu.device, &gpu.config);
                return;
            }
            Err(wgpu::SurfaceError::Outdated) => return, // minimized / moved
            Err(e) => {
                eprintln!("surface error: {e:?}");
                return;
            }
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let raw_input = state.take_egui_input(window);
        ctx.begin_pass(raw_input);
        self.app.ui(ctx);
        let full_output = ctx.end_pass();
        state.handle_platform_output(window, full_output.platform_output);

        let clipped = ctx.tessellate(full_output.shapes, ctx.pixels_per_point());

        for (id, delta) in &full_output.textures_delta.set {
            gpu.renderer
                .update_texture(&gpu.device, &gpu.queue, *id, delta);
        }

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let screen = ScreenDescriptor {
            size_in_pixels: [gpu.config.width, gpu.config.height],
            pixels_per_point: ctx.pixels_per_point(),
        };

        gpu.renderer
            .update_buffers(&gpu.device, &gpu.queue, &mut encoder, &clipped, &screen);

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            gpu.renderer
                .render(&mut rpass.forget_lifetime(), &clipped, &screen);
        }

        for id in full_output.textures_delta.free {
            gpu.renderer.free_texture(&id);
        }

        gpu.queue.submit(Some(encoder.finish()));
        frame.present();
    }
}

impl ApplicationHandler<UserEvent> for Shell {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let raw_window = event_loop
                .create_window(Window::default_attributes().with_title("Spinbox"))
                .expect("create window");
            self.window = Some(Arc::new(raw_window));
        }
        let window = Arc::clone(self.window.as_ref().expect("window just created"));

        if !self.ticker_started {
            self.ticker_started = true;
            if let Some(proxy) = self.proxy.clone() {
                thread::spawn(move || {
                    let frame = Duration::from_millis(16); // ~60Hz
                    loop {
                        if proxy.send_event(UserEvent::Tick).is_err() {
                            break;
                        }
                        thread::sleep(frame);
                    }
                });
            }
        }

        if self.egui.is_none() {
            let ctx = EguiContext::default();
            let state = EguiWinitState::new(
                ctx.clone(),
                ViewportId::ROOT,
                &window,
                Some(window.scale_factor() as f32),
                None,
                None,
            );
            self.egui = Some((ctx, state));
        }

        let gpu = self.init_gpu(&window);
        log::debug!(target: "spin.platform", "gpu surface ready ({}x{})", gpu.config.width, gpu.config.height);
        self.gpu = Some(gpu);
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: UserEvent) {
        match event {
            UserEvent::Tick => {
                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let (Some(window), Some((_, state))) = (self.window.as_ref(), self.egui.as_mut()) {
            let _response = state.on_window_event(window, &event);
        }
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.config.width = new_size.width.max(1);
                    gpu.config.height = new_size.height.max(1);
                    gpu.surface.configure(&gpu.device, &gpu.config);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }
}
