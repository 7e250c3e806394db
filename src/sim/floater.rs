// floater.rs - Drifting shapes
//
// Structure-of-Arrays layout, one slot per entity. The list is rebuilt
// wholesale on a count change; slots have no identity beyond their index.

use super::World;
use crate::config::SimConfig;
use crate::render::Encoder;

/// Copy of a single slot, for inspection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Floater {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub respawn_timer: u32,
}

#[derive(Default)]
pub struct Floaters {
    // Position
    pub x: Vec<f32>,
    pub y: Vec<f32>,

    // Velocity
    pub vx: Vec<f32>,
    pub vy: Vec<f32>,

    // Frames left hidden, 0 = active
    pub timer: Vec<u32>,
}

impl Floaters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<Floater> {
        if i >= self.len() { return None; }
        Some(Floater {
            x: self.x[i],
            y: self.y[i],
            vx: self.vx[i],
            vy: self.vy[i],
            respawn_timer: self.timer[i],
        })
    }

    /// Drop every entity and spawn `count` fresh ones
    pub fn rebuild(&mut self, count: usize, w: f32, h: f32, speed: f32, cfg: &SimConfig, rng: &mut u32) {
        self.x.clear();
        self.y.clear();
        self.vx.clear();
        self.vy.clear();
        self.timer.clear();

        self.x.reserve(count);
        self.y.reserve(count);
        self.vx.reserve(count);
        self.vy.reserve(count);
        self.timer.reserve(count);

        for _ in 0..count {
            // Same draw order as a single factory call: x, y, vx, vy
            self.x.push(World::rand(rng) * w);
            self.y.push(World::rand(rng) * h);
            self.vx.push(velocity(speed, cfg, rng));
            self.vy.push(velocity(speed, cfg, rng));
            self.timer.push(0);
        }
    }

    /// New random heading for every entity, positions untouched
    pub fn randomize_velocity(&mut self, speed: f32, cfg: &SimConfig, rng: &mut u32) {
        for i in 0..self.len() {
            self.vx[i] = velocity(speed, cfg, rng);
            self.vy[i] = velocity(speed, cfg, rng);
        }
    }

    /// Arm the respawn timer of everything within `cfg.respawn_radius` of (px, py)
    pub fn arm_near(&mut self, px: f32, py: f32, cfg: &SimConfig) -> usize {
        let mut armed = 0;
        for i in 0..self.len() {
            let dx = px - self.x[i];
            let dy = py - self.y[i];
            if (dx * dx + dy * dy).sqrt() < cfg.respawn_radius {
                self.timer[i] = cfg.respawn_frames;
                armed += 1;
            }
        }
        armed
    }

    /// Advance one frame. Active entities are pushed to `out`.
    pub fn update(&mut self, w: f32, h: f32, cfg: &SimConfig, rng: &mut u32, out: &mut Encoder) {
        let m = cfg.wrap_margin;

        for i in 0..self.len() {
            if self.timer[i] > 0 {
                self.timer[i] -= 1;
                if self.timer[i] == 0 {
                    self.x[i] = World::rand(rng) * w;
                    self.y[i] = World::rand(rng) * h;
                }
                continue;
            }

            let mut x = self.x[i] + self.vx[i];
            let mut y = self.y[i] + self.vy[i];

            if x < -m { x = w + m; }
            if x > w + m { x = -m; }
            if y < -m { y = h + m; }
            if y > h + m { y = -m; }

            self.x[i] = x;
            self.y[i] = y;
            out.push(x, y);
        }
    }
}

#[inline]
fn velocity(speed: f32, cfg: &SimConfig, rng: &mut u32) -> f32 {
    (World::rand(rng) - 0.5) * speed * cfg.velocity_scale
}
