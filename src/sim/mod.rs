// sim/ - Floater simulation
//
// Owns the entity list and everything that mutates it: count and speed
// changes, click respawns and the per-frame update.

mod floater;

pub use floater::{Floater, Floaters};

use crate::config::SimConfig;
use crate::render::Encoder;

const DEFAULT_SEED: u32 = 0xDEADBEEF;

/// Floater simulation world
pub struct World {
    // Canvas dimensions
    w: u32,
    h: u32,

    // Current slider values
    count: u32,
    speed: u32,

    floaters: Floaters,

    // Output
    encoder: Encoder,

    cfg: SimConfig,

    // RNG state
    rng: u32,
}

impl World {
    pub fn new(w: u32, h: u32, cfg: SimConfig) -> Self {
        let seed = cfg.seed.unwrap_or(DEFAULT_SEED);
        Self::with_seed(w, h, cfg, seed)
    }

    pub fn with_seed(w: u32, h: u32, cfg: SimConfig, seed: u32) -> Self {
        let count = cfg.default_count;
        let speed = cfg.default_speed;
        Self {
            w,
            h,
            count,
            speed,
            floaters: Floaters::new(),
            encoder: Encoder::new(),
            cfg,
            // xorshift never leaves zero
            rng: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    /// Initial call sequence of the stock page: count, then speed.
    pub fn init(&mut self) {
        self.set_count(self.cfg.default_count);
        self.set_speed(self.cfg.default_speed);
    }

    /// Canvas resized. Entities keep their positions.
    pub fn resize(&mut self, w: u32, h: u32) {
        self.w = w;
        self.h = h;
    }

    pub fn set_count(&mut self, count: u32) {
        self.count = count;
        let (w, h, speed) = (self.w as f32, self.h as f32, self.speed as f32);
        self.floaters.rebuild(count as usize, w, h, speed, &self.cfg, &mut self.rng);
    }

    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed;
        self.floaters.randomize_velocity(speed as f32, &self.cfg, &mut self.rng);
    }

    /// Pointer click: hide and later relocate everything close to it.
    /// Returns how many entities were armed.
    pub fn respawn_near(&mut self, x: f32, y: f32) -> usize {
        self.floaters.arm_near(x, y, &self.cfg)
    }

    pub fn tick(&mut self) {
        self.encoder.clear();
        let (w, h) = (self.w as f32, self.h as f32);
        self.floaters.update(w, h, &self.cfg, &mut self.rng, &mut self.encoder);
    }

    // Random number generator (xorshift32), uniform in [0, 1)
    #[inline(always)]
    pub fn rand(rng: &mut u32) -> f32 {
        *rng ^= *rng << 13;
        *rng ^= *rng >> 17;
        *rng ^= *rng << 5;
        (*rng >> 8) as f32 * (1.0 / 16777216.0)
    }

    pub fn floaters(&self) -> &Floaters { &self.floaters }
    pub fn encoder(&self) -> &Encoder { &self.encoder }
    pub fn count(&self) -> u32 { self.count }
    pub fn speed(&self) -> u32 { self.speed }
    pub fn width(&self) -> u32 { self.w }
    pub fn height(&self) -> u32 { self.h }
}
