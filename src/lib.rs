use speedy2d::dimen::UVec2;
use speedy2d::font::Font;
use speedy2d::window::{
    VirtualKeyCode, WindowCreationOptions, WindowHandler, WindowHelper, WindowPosition,
    WindowSize, WindowStartupInfo,
};
use speedy2d::{Graphics2D, Window};

pub mod bitmap;
pub mod config;
pub mod error;
pub mod graph;
pub mod jitter;
pub mod pacer;
pub mod render;
pub mod scene;

pub use config::Settings;
pub use error::{Error, Result};

use graph::PointGraph;
use jitter::Jitter;
use pacer::{FramePacer, SystemClock};
use render::Speedy2dCanvas;
use scene::Scene;

pub const TITLE: &str = "gravity";

pub struct App {
    scene: Scene<SystemClock>,
    font: Font,
    font_size: f32,
    // first-frame pause, cleared by any key
    waiting: bool,
}

impl App {
    pub fn new(scene: Scene<SystemClock>, font: Font, settings: &Settings) -> App {
        App {
            scene,
            font,
            font_size: settings.font_size,
            waiting: settings.wait_for_key,
        }
    }
}

impl WindowHandler for App {
    fn on_start(&mut self, _helper: &mut WindowHelper, info: WindowStartupInfo) {
        let size = info.viewport_size_pixels();
        tracing::info!(width = size.x, height = size.y, "window started");
        if self.waiting {
            tracing::info!("press any key to start");
        }
    }

    fn on_draw(&mut self, helper: &mut WindowHelper, graphics: &mut Graphics2D) {
        let mut canvas = Speedy2dCanvas::new(graphics, &self.font, self.font_size);

        // stay on the first frame until a key arrives
        if self.waiting {
            self.scene.draw(&mut canvas);
            return;
        }

        // the frame is presented when this returns; the previous one was
        // presented before the jitter step and sleep inside `frame`
        self.scene.frame(&mut canvas);
        helper.request_redraw();
    }

    fn on_key_down(
        &mut self,
        helper: &mut WindowHelper,
        _virtual_key_code: Option<VirtualKeyCode>,
        _scancode: u32,
    ) {
        if self.waiting {
            self.waiting = false;
            helper.request_redraw();
        }
    }
}

/// Centered, fixed-size window. Vsync is off so the frame pacer alone sets the cadence.
fn window_options(width: u32, height: u32) -> WindowCreationOptions {
    WindowCreationOptions::new_windowed(
        WindowSize::PhysicalPixels(UVec2::new(width, height)),
        Some(WindowPosition::Center),
    )
    .with_vsync(false)
}

fn load_font(settings: &Settings) -> Result<Font> {
    let bytes = std::fs::read(&settings.font).map_err(|source| Error::AssetMissing {
        path: settings.font.clone(),
        source,
    })?;
    let font = Font::new(&bytes).map_err(|e| {
        Error::ResourceInit(format!("font '{}': {:?}", settings.font.display(), e))
    })?;
    tracing::info!(path = %settings.font.display(), "font loaded");
    Ok(font)
}

/// Build the scene from the configured bitmap, open the window and run until it closes.
pub fn run(settings: Settings) -> Result<()> {
    let graph = {
        let image = bitmap::open(&settings.image)?;
        PointGraph::build(&image, settings.graph_options())
    };
    let (width, height) = graph.window_size();
    let font = load_font(&settings)?;

    let scene = Scene::new(
        graph,
        Jitter::new(settings.seed),
        FramePacer::new(settings.pacer_settings(), SystemClock::new()),
    );

    let window: Window = Window::new_with_options(TITLE, window_options(width, height))
        .map_err(|e| Error::ResourceInit(format!("window: {:?}", e)))?;
    tracing::info!(width, height, "window created");

    let app = App::new(scene, font, &settings);

    // run the event loop (this blocks until the window is closed)
    window.run_loop(app)
}
