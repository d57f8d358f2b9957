//! Spindrift entry point
//!
//! Window setup, input sampling, and the frame loop. Gameplay lives in
//! `spindrift::sim`, visuals in `spindrift::renderer`; this file only wires
//! them to the platform.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use rand::Rng;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

use spindrift::renderer::{RenderState, scene};
use spindrift::sim::{FrameInput, GamePhase, GameState, tick};

struct App {
    window: Arc<Window>,
    render_state: RenderState,
    state: GameState,
    pressed_keys: HashSet<KeyCode>,
    /// Monotonic clock anchor; all timestamps are seconds since this
    start: Instant,
    /// Last clock sample taken while Playing; the scene and the game-over
    /// screen freeze on it
    sim_time: f64,
}

impl App {
    async fn new(window: Arc<Window>) -> Self {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state =
            RenderState::new(surface, &adapter, size.width.max(1), size.height.max(1)).await;

        let seed = rand::rng().random();
        log::info!("Session seed: {seed}");

        Self {
            window,
            render_state,
            state: GameState::new(seed),
            pressed_keys: HashSet::new(),
            start: Instant::now(),
            sim_time: 0.0,
        }
    }

    fn input(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state,
                        physical_key,
                        ..
                    },
                ..
            } => {
                if let PhysicalKey::Code(code) = physical_key {
                    match state {
                        ElementState::Pressed => {
                            self.pressed_keys.insert(*code);
                        }
                        ElementState::Released => {
                            self.pressed_keys.remove(code);
                        }
                    }
                }
                true
            }
            _ => false,
        }
    }

    fn frame(&mut self) -> Result<(), wgpu::SurfaceError> {
        // Simulation time only advances while the run is live
        if self.state.phase == GamePhase::Playing {
            self.sim_time = self.start.elapsed().as_secs_f64();
        }

        let input = FrameInput {
            jump: self.pressed_keys.contains(&KeyCode::Space),
            retry: self.pressed_keys.contains(&KeyCode::KeyR),
        };
        tick(&mut self.state, input, self.sim_time);

        let vertices = scene::build(&self.state, self.sim_time);
        self.render_state.render(&vertices)
    }
}

fn main() {
    env_logger::init();

    let event_loop = EventLoop::new().unwrap();
    let window_attributes = Window::default_attributes()
        .with_title("Spindrift")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));
    let window = event_loop.create_window(window_attributes).unwrap();
    let window = Arc::new(window);

    let mut app = pollster::block_on(App::new(window.clone()));

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == app.window.id() => {
                if !app.input(event) {
                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(physical_size) => {
                            app.render_state
                                .resize(physical_size.width, physical_size.height);
                        }
                        WindowEvent::RedrawRequested => match app.frame() {
                            Ok(_) => {}
                            Err(wgpu::SurfaceError::Lost) => {
                                let (w, h) = app.render_state.size;
                                app.render_state.resize(w, h);
                            }
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                log::error!("Out of memory!");
                                elwt.exit();
                            }
                            Err(e) => log::warn!("Render error: {e:?}"),
                        },
                        _ => {}
                    }
                }
            }
            Event::AboutToWait => app.window.request_redraw(),
            _ => {}
        })
        .unwrap();
}
