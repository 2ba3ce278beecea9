//! Browser exports for the slingshot core.
//!
//! The host runs the landmark detector and draws pixels. Each video frame it
//! calls `game_frame` with the viewport size and a flat `Float32Array` of
//! `hands x 21 x 3` landmarks, then reads the packed frame buffer (or the
//! JSON form) and renders it.

pub mod runner;

pub use runner::GameRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<GameRunner> = RefCell::new(GameRunner::default());
}

fn with_runner<R>(f: impl FnOnce(&mut GameRunner) -> R) -> R {
    RUNNER.with(|cell| f(&mut cell.borrow_mut()))
}

#[wasm_bindgen]
pub fn game_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("sling-web: initialized");
}

/// Override tuning from a (partial) JSON config. Restarts the session.
#[wasm_bindgen]
pub fn game_load_config(json: &str) -> Result<(), JsValue> {
    with_runner(|r| r.load_config(json)).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn game_frame(width: f32, height: f32, landmarks: &[f32]) {
    with_runner(|r| r.frame(width, height, landmarks));
}

#[wasm_bindgen]
pub fn game_reset() {
    with_runner(|r| r.reset());
}

#[wasm_bindgen]
pub fn game_next_level() -> bool {
    with_runner(|r| r.next_level())
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_frame_ptr() -> *const f32 {
    with_runner(|r| r.frame_ptr())
}

#[wasm_bindgen]
pub fn get_frame_len() -> u32 {
    with_runner(|r| r.frame_len())
}

#[wasm_bindgen]
pub fn get_buffer_total_floats() -> u32 {
    with_runner(|r| r.buffer_total_floats())
}

#[wasm_bindgen]
pub fn get_frame_json() -> Result<String, JsValue> {
    with_runner(|r| r.frame_json()).map_err(|e| JsValue::from_str(&e.to_string()))
}
