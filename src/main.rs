//! Skiff - a ship, a reticle, and a black window
//!
//! Runs the frame loop: gather input, step the simulation, draw, wait.
//! The simulation steps once per frame delay; extra redraws only repaint.

use std::time::Instant;
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use skiff::cli::Cli;
use skiff::config::AppConfig;
use skiff::error::AppError;
use skiff::input::{InputAction, InputMapper};
use skiff::logging::init_logging;
use skiff::systems::{FramePacer, RenderError, RenderSystem, SimulationSystem, WindowSystem};
use skiff_input::{GamepadReader, ShipController};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    simulation: SimulationSystem,
    controller: ShipController,
    gamepad: GamepadReader,
    pacer: FramePacer,
    /// First fatal error, reported as the exit code
    error: Option<AppError>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let simulation = SimulationSystem::new(config.game.clone())
            .with_trace(config.debug.trace_state);
        let pacer = FramePacer::new(config.frame.delay(), Instant::now());

        Self {
            config,
            window: None,
            render: None,
            simulation,
            controller: ShipController::default(),
            gamepad: GamepadReader::new(),
            pacer,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: AppError) {
        log::error!("{}", error);
        if self.error.is_none() {
            self.error = Some(error);
        }
        event_loop.exit();
    }

    /// Gather input and advance the simulation by one frame
    ///
    /// Returns false when the user asked to quit.
    fn step(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let pad = self.gamepad.poll();
        let input = self.controller.collect(&pad);
        if input.quit {
            log::info!("Quit requested after {} frames", self.simulation.frame_count());
            event_loop.exit();
            return false;
        }

        self.simulation.update(&input);
        true
    }

    /// Draw the current state
    fn draw(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(render) = &mut self.render {
            match render.render_frame(self.simulation.state(), self.simulation.ticks()) {
                Ok(()) => {}
                Err(RenderError::SurfaceLost) => log::debug!("Surface reconfigured"),
                Err(RenderError::OutOfMemory) => {
                    self.fail(event_loop, AppError::OutOfMemory);
                    return;
                }
                Err(e) => log::warn!("{}", e),
            }
        }

        if self.config.debug.show_state_in_title {
            if let Some(window) = &self.window {
                window.update_title(self.simulation.state());
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                self.fail(event_loop, e.into());
                return;
            }
        };

        let render = match RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            self.config.window.vsync,
        ) {
            Ok(render) => render,
            Err(e) => {
                self.fail(event_loop, e.into());
                return;
            }
        };

        let (width, height) = window.size();
        self.controller = ShipController::new(width, height);
        if self.gamepad.is_connected() {
            log::info!("Gamepad connected");
        }

        self.window = Some(window);
        self.render = Some(render);
        self.pacer.reset(Instant::now());
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Window closed");
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(render) = &mut self.render {
                    render.resize(size.width, size.height);
                }
                if size.width > 0 && size.height > 0 {
                    self.controller.process_resize(size.width, size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    match InputMapper::map_keyboard(key, event.state) {
                        Some(InputAction::Exit) => self.controller.request_quit(),
                        Some(InputAction::ToggleFullscreen) => {
                            if let Some(window) = &self.window {
                                window.toggle_fullscreen();
                            }
                        }
                        None => {
                            self.controller.process_keyboard(key, event.state);
                        }
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.controller.process_cursor_moved(position.x, position.y);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.controller.process_mouse_button(button, state);
            }

            WindowEvent::RedrawRequested => {
                // Platform redraws between frames only repaint
                if self.pacer.take_step() && !self.step(event_loop) {
                    return;
                }
                self.draw(event_loop);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.pacer.poll(Instant::now()) {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.deadline()));
    }
}

fn main() {
    let cli = Cli::parse();

    let loaded = AppConfig::load_from(&cli.config);
    let mut config = loaded.as_ref().cloned().unwrap_or_default();
    cli.apply(&mut config);

    init_logging(&config.debug.log_level);
    if let Err(e) = loaded {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Skiff");
    log::debug!("Config: {:?}", config);

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            let error = AppError::EventLoop(e.to_string());
            log::error!("{}", error);
            std::process::exit(error.exit_code());
        }
    };

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        app.error.get_or_insert(AppError::EventLoop(e.to_string()));
    }

    if let Some(error) = app.error {
        std::process::exit(error.exit_code());
    }
    log::info!("Goodbye");
}
