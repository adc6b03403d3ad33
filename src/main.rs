//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlInputElement, KeyboardEvent, MouseEvent};

    use canvas_pong::renderer::{CanvasSurface, CommandList, RenderState, draw_frame};
    use canvas_pong::sim::{FrameDriver, InputEvent, InputState, Key, Mode, World, drain_events, step};
    use canvas_pong::{RenderBackend, Settings};

    /// Where frames are drawn
    enum Backend {
        Canvas(CanvasSurface),
        Gpu {
            state: RenderState,
            frame: CommandList,
        },
    }

    /// Game instance holding all state
    struct Game {
        world: World,
        input: InputState,
        /// Events received since the last frame, in arrival order
        pending: Vec<InputEvent>,
        driver: FrameDriver,
        backend: Backend,
        last_time: f64,
    }

    impl Game {
        /// Apply queued input, then run this frame's simulation steps
        fn update(&mut self, dt: f32) {
            drain_events(&mut self.world, &mut self.input, &mut self.pending);

            for _ in 0..self.driver.steps_for(dt) {
                let report = step(&mut self.world, &self.input);
                if let Some(side) = report.scored {
                    log::info!(
                        "{:?} scores ({} - {})",
                        side,
                        self.world.score.left,
                        self.world.score.right
                    );
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            match &mut self.backend {
                Backend::Canvas(surface) => draw_frame(&self.world, surface),
                Backend::Gpu { state, frame } => {
                    draw_frame(&self.world, frame);
                    match state.render(frame) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => {
                            state.resize(state.size.0, state.size.1);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("Out of memory!");
                        }
                        Err(e) => log::warn!("Render error: {:?}", e),
                    }
                }
            }
        }
    }

    fn js_err(context: &str, e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&format!("{}: {}", context, e))
    }

    fn load_settings(canvas: &HtmlCanvasElement) -> Result<Settings, JsValue> {
        match canvas.get_attribute("data-settings") {
            Some(json) => Settings::from_json(&json).map_err(|e| js_err("Invalid data-settings", e)),
            None => Ok(Settings::default()),
        }
    }

    async fn init_gpu(canvas: &HtmlCanvasElement, settings: &Settings) -> Result<RenderState, JsValue> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| js_err("Failed to create surface", e))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| js_err("Failed to get adapter", e))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(
            surface,
            &adapter,
            canvas.width(),
            canvas.height(),
            (settings.width, settings.height),
        )
        .await
        .map_err(|e| js_err("Failed to create device", e))
    }

    fn init_canvas(canvas: &HtmlCanvasElement, settings: &Settings) -> Result<CanvasSurface, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        Ok(CanvasSurface::new(ctx, settings.width, settings.height))
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).map_err(|e| js_err("Logger", e))?;

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let settings = load_settings(&canvas)?;
        let geometry = settings.geometry().map_err(|e| js_err("Invalid settings", e))?;
        canvas.set_width(settings.width as u32);
        canvas.set_height(settings.height as u32);

        let backend = match settings.renderer {
            RenderBackend::WebGpu => Backend::Gpu {
                state: init_gpu(&canvas, &settings).await?,
                frame: CommandList::new(),
            },
            RenderBackend::Canvas2d => Backend::Canvas(init_canvas(&canvas, &settings)?),
        };
        log::info!("Renderer: {}", settings.renderer.as_str());

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        let world = World::new(geometry, settings.mode, seed).map_err(|e| js_err("Invalid settings", e))?;
        let game = Rc::new(RefCell::new(Game {
            world,
            input: InputState::default(),
            pending: Vec::new(),
            driver: FrameDriver::new(settings.pacing),
            backend,
            last_time: 0.0,
        }));

        log::info!("Game initialized with seed: {}, mode: {}", seed, settings.mode);

        setup_input_handlers(&canvas, game.clone())?;
        setup_mode_toggle(&document, settings.mode, game.clone())?;

        request_animation_frame(game);

        log::info!("Canvas Pong running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        // Mouse moves left paddle
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let y = event.client_y() as f32 - rect.top() as f32;
                game.borrow_mut().pending.push(InputEvent::PointerMove { y });
            });
            canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Arrow keys for the right paddle (player 2)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_code(&event.code()) {
                    let mut game = game.borrow_mut();
                    // Leave page scrolling alone unless the arrows steer a paddle
                    if game.world.mode.uses_arrow_keys() {
                        event.prevent_default();
                    }
                    game.pending.push(InputEvent::KeyDown(key));
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_code(&event.code()) {
                    game.borrow_mut().pending.push(InputEvent::KeyUp(key));
                }
            });
            window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    /// Wire the `input[name="mode"]` radio buttons
    fn setup_mode_toggle(
        document: &web_sys::Document,
        initial: Mode,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        let radios = document.query_selector_all("input[name=\"mode\"]")?;
        for i in 0..radios.length() {
            let Some(node) = radios.item(i) else {
                continue;
            };
            let radio: HtmlInputElement = node.dyn_into()?;
            radio.set_checked(radio.value() == initial.as_str());

            let game = game.clone();
            let radio_clone = radio.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                match radio_clone.value().parse::<Mode>() {
                    Ok(mode) => game.borrow_mut().pending.push(InputEvent::ModeChange(mode)),
                    Err(e) => log::warn!("Ignoring mode toggle: {}", e),
                }
            });
            radio.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            g.last_time = time;

            g.update(dt);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Canvas Pong failed to start: {:?}", e);
        web_sys::console::error_1(&e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    //! Native headless match: the left paddle tracks the ball through pointer
    //! events, the right paddle plays per the configured mode.

    use serde::Serialize;

    use canvas_pong::Settings;
    use canvas_pong::renderer::{CommandList, draw_frame};
    use canvas_pong::sim::{InputEvent, InputState, Mode, Score, World, drain_events, step};

    const DEFAULT_FRAMES: u64 = 3600;

    #[derive(Debug, Serialize)]
    pub struct MatchSummary {
        pub seed: u64,
        pub mode: Mode,
        pub frames: u64,
        pub paddle_hits: u32,
        pub score: Score,
    }

    pub fn run(args: &[String]) -> Result<MatchSummary, Box<dyn std::error::Error>> {
        let settings = match args.first() {
            Some(path) => Settings::from_json(&std::fs::read_to_string(path)?)?,
            None => Settings::default(),
        };
        let frames = match args.get(1) {
            Some(n) => n.parse()?,
            None => DEFAULT_FRAMES,
        };

        let seed = settings.seed.unwrap_or_else(rand::random);
        let mut world = World::new(settings.geometry()?, settings.mode, seed)?;
        let mut input = InputState::default();
        let mut pending = Vec::new();
        let mut surface = CommandList::new();
        let mut paddle_hits = 0;

        log::info!("Headless match: seed {}, mode {}, {} frames", seed, settings.mode, frames);

        for _ in 0..frames {
            let target = world.ball.center(&world.geometry).y;
            pending.push(InputEvent::PointerMove { y: target });
            drain_events(&mut world, &mut input, &mut pending);

            let report = step(&mut world, &input);
            paddle_hits += report.left_hit.is_some() as u32 + report.right_hit.is_some() as u32;

            draw_frame(&world, &mut surface);
        }

        log::debug!("Last frame: {} draw commands", surface.len());

        Ok(MatchSummary {
            seed,
            mode: world.mode,
            frames,
            paddle_hits,
            score: world.score,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode runs a headless match - run with `trunk serve` for the web version");

    let args: Vec<String> = std::env::args().skip(1).collect();
    match headless::run(&args) {
        Ok(summary) => match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(e) => log::error!("Failed to serialize summary: {}", e),
        },
        Err(e) => {
            log::error!("Headless match failed: {}", e);
            std::process::exit(1);
        }
    }
}
