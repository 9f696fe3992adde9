//! Browser binding
//!
//! Exposes the simulation to a JS front-end. Drawing, pointer handling and
//! color mapping stay on the JS side; data crosses as flat `f32` buffers.

use glam::Vec2;
use wasm_bindgen::prelude::*;

use crate::config::SimConfig;
use crate::sim::{BodyHandle, Simulation};

#[wasm_bindgen(start)]
pub fn init_logging() {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    let (Ok(_) | Err(_)) = console_log::init_with_level(log::Level::Info);
}

#[wasm_bindgen]
pub struct WebSimulation {
    inner: Simulation,
}

#[wasm_bindgen]
impl WebSimulation {
    /// Build from a JSON config; malformed or empty input uses defaults
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> WebSimulation {
        let config = match config_json.as_deref().map(SimConfig::from_json) {
            Some(Ok(config)) => config,
            Some(Err(err)) => {
                log::warn!("Malformed config: {err}, using defaults");
                SimConfig::default()
            }
            None => SimConfig::default(),
        };
        Self {
            inner: Simulation::new(config),
        }
    }

    #[wasm_bindgen(js_name = spawnBody)]
    pub fn spawn_body(&mut self, x: f32, y: f32, vx: f32, vy: f32, mass: f32) -> u32 {
        let BodyHandle(id) = self
            .inner
            .spawn_body(Vec2::new(x, y), Vec2::new(vx, vy), mass);
        id
    }

    #[wasm_bindgen(js_name = resetAll)]
    pub fn reset_all(&mut self) {
        self.inner.reset_all();
    }

    /// Run one frame; returns the number of bodies left
    pub fn step(&mut self) -> usize {
        self.inner.step().bodies
    }

    #[wasm_bindgen(js_name = setFieldEnabled)]
    pub fn set_field_enabled(&mut self, enabled: bool) {
        self.inner.set_field_enabled(enabled);
    }

    /// Resample and return field strengths, row-major
    #[wasm_bindgen(js_name = sampleField)]
    pub fn sample_field(&mut self) -> Vec<f32> {
        self.inner.sample_field().strengths().collect()
    }

    /// Field strengths from the last sampling pass, row-major
    #[wasm_bindgen(js_name = fieldStrengths)]
    pub fn field_strengths(&self) -> Vec<f32> {
        self.inner.field().strengths().collect()
    }

    #[wasm_bindgen(js_name = fieldColumns)]
    pub fn field_columns(&self) -> usize {
        self.inner.field().columns()
    }

    #[wasm_bindgen(js_name = fieldRows)]
    pub fn field_rows(&self) -> usize {
        self.inner.field().rows()
    }

    /// `[x, y, vx, vy, radius]` per body
    pub fn bodies(&self) -> Vec<f32> {
        self.inner
            .bodies()
            .iter()
            .flat_map(|b| {
                let (p, v) = (b.position(), b.velocity());
                [p.x, p.y, v.x, v.y, b.radius()]
            })
            .collect()
    }
}
