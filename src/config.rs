use std::path::PathBuf;

use clap::Parser;

use crate::graph::GraphOptions;
use crate::jitter::DEFAULT_SEED;
use crate::pacer::PacerSettings;

/// Ink-bleed particle animation of a black-and-white bitmap.
///
/// With no arguments it reads `rikai.bmp` and `ipag-mona.ttf` from the
/// working directory and runs at 60 fps.
#[derive(Parser, Debug, Clone)]
#[command(name = "inkbleed")]
pub struct Settings {
    /// Bitmap to read; only pure black pixels become points
    #[arg(long, default_value = "rikai.bmp")]
    pub image: PathBuf,

    /// TrueType font for the sleep-time readout
    #[arg(long, default_value = "ipag-mona.ttf")]
    pub font: PathBuf,

    #[arg(long, default_value_t = 15.0)]
    pub font_size: f32,

    /// Extra window size around the image, split across both sides
    #[arg(long, default_value_t = 200)]
    pub margin: u32,

    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    pub target_fps: u32,

    /// Pacer measurements per second
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub fix_time_ratio: u32,

    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u32,

    /// Show the first frame and wait for a key before animating
    #[arg(long)]
    pub wait_for_key: bool,

    /// Draw bare points without links
    #[arg(long)]
    pub mist: bool,
}

impl Settings {
    pub fn graph_options(&self) -> GraphOptions {
        GraphOptions {
            margin: self.margin,
            link: !self.mist,
        }
    }

    pub fn pacer_settings(&self) -> PacerSettings {
        PacerSettings {
            target_fps: self.target_fps,
            fix_time_ratio: self.fix_time_ratio,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::parse_from(["inkbleed"])
    }
}
