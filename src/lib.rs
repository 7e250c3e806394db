use wasm_bindgen::prelude::*;

// ============================================================================
// FLOATERS - Drifting shapes with wraparound and click-to-respawn
// ============================================================================

pub mod config;
pub mod controls;
pub mod error;
pub mod render;
pub mod sim;
pub mod sprite;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::{FloaterApp, launch, run, run_with_config};

use config::SimConfig;
use sim::World;

/// Simulation handle for hosts that draw the output buffer themselves.
#[wasm_bindgen]
pub struct FloaterWorld {
    world: World,
}

#[wasm_bindgen]
impl FloaterWorld {
    #[wasm_bindgen(constructor)]
    pub fn new(w: u32, h: u32) -> Self {
        Self::with_seed(w, h, 0xDEADBEEF)
    }

    /// Starts with the stock count and speed already applied.
    pub fn with_seed(w: u32, h: u32, seed: u32) -> Self {
        let mut world = World::with_seed(w, h, SimConfig::default(), seed);
        world.init();
        Self { world }
    }

    pub fn set_count(&mut self, count: u32) {
        self.world.set_count(count);
    }

    pub fn set_speed(&mut self, speed: u32) {
        self.world.set_speed(speed);
    }

    /// Pointer click at canvas coordinates; returns how many were hit.
    pub fn click(&mut self, x: f32, y: f32) -> usize {
        self.world.respawn_near(x, y)
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        self.world.resize(w, h);
    }

    pub fn tick(&mut self) {
        self.world.tick();
    }

    /// Respawn timer of entity `i`, 0 when active or out of range.
    pub fn respawn_timer(&self, i: usize) -> u32 {
        self.world.floaters().get(i).map_or(0, |f| f.respawn_timer)
    }

    // Accessors for WASM
    pub fn output_ptr(&self) -> *const f32 { self.world.encoder().ptr() }
    pub fn output_len(&self) -> usize { self.world.encoder().floats().len() }
    pub fn count(&self) -> u32 { self.world.count() }
    pub fn entities(&self) -> usize { self.world.floaters().len() }
    pub fn speed(&self) -> u32 { self.world.speed() }
    pub fn width(&self) -> u32 { self.world.width() }
    pub fn height(&self) -> u32 { self.world.height() }
}

impl FloaterWorld {
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Last frame's draw list as (x, y) centres.
    pub fn output(&self) -> &[f32] {
        self.world.encoder().floats()
    }
}
