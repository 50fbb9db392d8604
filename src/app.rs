use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use log::{error, info};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

use crate::{
    config::DemoConfig,
    demo::DemoScene,
    error::{AppError, RenderError},
    gfx::RenderEngine,
    input::PointerTranslator,
};

/// Shared flag that ends a running [`PilotApp`] at its next idle point
#[derive(Debug, Clone, Default)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Frame counting and stop conditions of the render loop
#[derive(Debug)]
pub struct RenderLoop {
    stop: StopToken,
    frames: u64,
    max_frames: Option<u64>,
}

impl RenderLoop {
    pub fn new(max_frames: Option<u64>) -> Self {
        Self {
            stop: StopToken::new(),
            frames: 0,
            max_frames,
        }
    }

    /// A handle that stops this loop when triggered
    pub fn stop_token(&self) -> StopToken {
        self.stop.clone()
    }

    pub fn frame_rendered(&mut self) {
        self.frames += 1;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// True once stopped explicitly or the frame limit is reached
    pub fn should_stop(&self) -> bool {
        self.stop.is_stopped() || self.max_frames.is_some_and(|max| self.frames >= max)
    }
}

/// The windowed demo: owns the event loop and everything it drives
pub struct PilotApp {
    event_loop: EventLoop<()>,
    app_state: AppState,
}

struct AppState {
    config: DemoConfig,
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    demo: DemoScene,
    pointer: PointerTranslator,
    render_loop: RenderLoop,
    failure: Option<AppError>,
}

impl PilotApp {
    /// Builds the scene for `config.mode`. The window and GPU come up once the
    /// event loop is running.
    pub fn new(config: DemoConfig) -> Result<Self, AppError> {
        let event_loop = EventLoop::new()?;
        let demo = DemoScene::build(&config)?;
        let render_loop = RenderLoop::new(config.max_frames);

        Ok(Self {
            event_loop,
            app_state: AppState {
                config,
                window: None,
                render_engine: None,
                demo,
                pointer: PointerTranslator::default(),
                render_loop,
                failure: None,
            },
        })
    }

    pub fn stop_token(&self) -> StopToken {
        self.app_state.render_loop.stop_token()
    }

    pub fn demo(&self) -> &DemoScene {
        &self.app_state.demo
    }

    pub fn demo_mut(&mut self) -> &mut DemoScene {
        &mut self.app_state.demo
    }

    /// Runs until the window closes, Escape is pressed, the stop token fires
    /// or the frame limit is reached.
    pub fn run(mut self) -> Result<(), AppError> {
        self.event_loop.set_control_flow(ControlFlow::Poll);
        self.event_loop.run_app(&mut self.app_state)?;

        info!(
            "Render loop finished after {} frames",
            self.app_state.render_loop.frames()
        );
        match self.app_state.failure.take() {
            Some(failure) => Err(failure),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn fail(&mut self, event_loop: &ActiveEventLoop, failure: AppError) {
        error!("{}", failure);
        self.failure = Some(failure);
        event_loop.exit();
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<Arc<Window>, AppError> {
        let (width, height) = self.config.window_size;
        let attributes = WindowAttributes::default()
            .with_title(self.config.window_title.as_str())
            .with_inner_size(LogicalSize::new(width, height));
        Ok(Arc::new(event_loop.create_window(attributes)?))
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match self.create_window(event_loop) {
            Ok(window) => window,
            Err(e) => return self.fail(event_loop, e),
        };
        let PhysicalSize { width, height } = window.inner_size();

        let renderer = pollster::block_on(RenderEngine::new(
            window.clone(),
            width,
            height,
            self.config.antialias,
        ));
        let renderer = match renderer {
            Ok(renderer) => renderer,
            Err(e) => return self.fail(event_loop, e.into()),
        };

        self.demo.resize(width, height);
        renderer.prepare_scene(&mut self.demo.scene);

        self.window = Some(window);
        self.render_engine = Some(renderer);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let Some(render_engine) = self.render_engine.as_mut() else {
            return;
        };

        if let Some(pointer) = self.pointer.translate(&event) {
            self.demo.handle_pointer(&pointer);
            return;
        }

        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            }
            | WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.demo.resize(width, height);
                render_engine.resize(width, height);
            }
            WindowEvent::RedrawRequested => {
                self.demo.scene.update();
                render_engine.update(&mut self.demo.scene);

                match render_engine.render_frame(&self.demo.scene) {
                    Ok(()) => self.render_loop.frame_rendered(),
                    Err(e @ RenderError::OutOfMemory) => self.fail(event_loop, e.into()),
                    Err(e) => error!("Frame failed: {}", e),
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.render_loop.should_stop() {
            event_loop.exit();
            return;
        }

        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }
}
