//! Browser bridge for LeapEngine.
//!
//! JS calls `game_init()` once, forwards key events, and calls `game_tick(dt)`
//! from `requestAnimationFrame`. After each tick it reads the draw list
//! straight out of WASM memory via `get_draw_ptr()` / `get_draw_count()`.

pub mod runner;

pub use runner::PlatformerRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<PlatformerRunner>> = const { RefCell::new(None) };
}

/// Run `f` against the live runner, or return `R::default()` before init.
fn with_runner<R: Default>(f: impl FnOnce(&mut PlatformerRunner) -> R) -> R {
    RUNNER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(runner) => f(runner),
        None => {
            log::warn!("leap-web: call game_init() first");
            R::default()
        }
    })
}

fn install(runner: PlatformerRunner) {
    RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));
}

/// Set up logging and start the built-in demo level.
#[wasm_bindgen]
pub fn game_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    match PlatformerRunner::demo() {
        Ok(runner) => {
            install(runner);
            log::info!("leap-web: initialized demo level");
        }
        Err(e) => log::error!("leap-web: demo level failed to load: {e}"),
    }
}

/// Replace the running world with a level parsed from JSON.
/// Returns false (and keeps the old world) if the level is invalid.
#[wasm_bindgen]
pub fn game_load_level(json: &str) -> bool {
    match PlatformerRunner::from_level_json(json) {
        Ok(runner) => {
            install(runner);
            log::info!("leap-web: level loaded");
            true
        }
        Err(e) => {
            log::error!("leap-web: rejected level: {e}");
            false
        }
    }
}

#[wasm_bindgen]
pub fn game_tick(dt: f32) -> u32 {
    with_runner(|r| r.tick(dt))
}

#[wasm_bindgen]
pub fn game_key_down(key_code: u32) {
    with_runner(|r| r.key_down(key_code));
}

#[wasm_bindgen]
pub fn game_key_up(key_code: u32) {
    with_runner(|r| r.key_up(key_code));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_draw_ptr() -> *const f32 {
    RUNNER.with(|cell| {
        cell.borrow()
            .as_ref()
            .map_or(std::ptr::null(), |r| r.draw_ptr())
    })
}

#[wasm_bindgen]
pub fn get_draw_count() -> u32 {
    with_runner(|r| r.draw_count())
}

#[wasm_bindgen]
pub fn get_draw_entity_start() -> u32 {
    with_runner(|r| r.draw_entity_start())
}

#[wasm_bindgen]
pub fn get_draw_stride_floats() -> u32 {
    leap_engine::DrawInstance::FLOATS as u32
}

#[wasm_bindgen]
pub fn get_camera_x() -> f32 {
    with_runner(|r| r.camera_x())
}

#[wasm_bindgen]
pub fn get_camera_y() -> f32 {
    with_runner(|r| r.camera_y())
}

#[wasm_bindgen]
pub fn get_world_width() -> f32 {
    with_runner(|r| r.world_width())
}

#[wasm_bindgen]
pub fn get_world_height() -> f32 {
    with_runner(|r| r.world_height())
}

#[wasm_bindgen]
pub fn get_viewport_width() -> f32 {
    with_runner(|r| r.viewport_width())
}

#[wasm_bindgen]
pub fn get_viewport_height() -> f32 {
    with_runner(|r| r.viewport_height())
}

#[wasm_bindgen]
pub fn get_player_grounded() -> bool {
    with_runner(|r| r.player_grounded())
}

#[wasm_bindgen]
pub fn get_frame() -> u64 {
    with_runner(|r| r.frame())
}

#[wasm_bindgen]
pub fn get_frame_alpha() -> f32 {
    with_runner(|r| r.frame_alpha())
}
