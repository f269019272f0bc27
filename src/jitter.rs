use rand_mt::Mt;

use crate::graph::PointGraph;

pub const DEFAULT_SEED: u32 = 0x2324_2526;
const INTENSITY_STEP: f64 = 0.5;
const NOISE_SCALE: f64 = 0.2;
const UNIT_BITS: u32 = 30;

/// Random positional noise whose amplitude grows every step without bound.
pub struct Jitter {
    intensity: f64,
    rng: Mt,
}

impl Jitter {
    /// Mersenne Twister (MT19937, 32-bit) seeded with `seed`.
    pub fn new(seed: u32) -> Jitter {
        Jitter {
            intensity: 0.0,
            rng: Mt::new(seed),
        }
    }

    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Uniform in `[0, 1)` with 30 bits of resolution.
    fn unit(&mut self) -> f64 {
        let span = 1u32 << UNIT_BITS;
        f64::from(self.rng.next_u32() % span) / f64::from(span)
    }

    /// Uniform in `[-1, 1)`.
    fn signed(&mut self) -> f64 {
        (self.unit() - 0.5) / 0.5
    }

    /// Advance one tick: raise intensity, then push every point by an x draw
    /// followed by a y draw, in graph order.
    pub fn step(&mut self, graph: &mut PointGraph) {
        self.intensity += INTENSITY_STEP;
        let amplitude = self.intensity * NOISE_SCALE;
        for coord in graph.coords_mut() {
            coord.x += self.signed() * amplitude;
            coord.y += self.signed() * amplitude;
        }
        tracing::trace!(intensity = self.intensity, "jitter step");
    }
}

impl Default for Jitter {
    fn default() -> Self {
        Jitter::new(DEFAULT_SEED)
    }
}
