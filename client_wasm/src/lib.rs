//! Canvas client for Pong
//!
//! The page owns the `requestAnimationFrame` loop and the pointer listener;
//! it calls `render_frame` once per display refresh and `pointer_moved`
//! whenever the mouse moves over the canvas.

pub mod driver;
pub mod input;
pub mod renderer;

pub use driver::FrameDriver;

#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    use log::LevelFilter;
    let _ = env_logger::builder()
        .format_timestamp_secs()
        .filter_level(LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

#[cfg(target_arch = "wasm32")]
mod bindings {
    use std::cell::RefCell;

    use game_core::{Config, Session};
    use log::{info, Level};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use crate::renderer::CanvasSurface;
    use crate::FrameDriver;

    struct Client {
        driver: FrameDriver,
        surface: CanvasSurface,
    }

    thread_local! {
        static CLIENT: RefCell<Option<Client>> = const { RefCell::new(None) };
    }

    fn random_seed() -> Result<u64, JsValue> {
        let mut bytes = [0u8; 8];
        getrandom::getrandom(&mut bytes)
            .map_err(|e| JsValue::from_str(&format!("Failed to seed RNG: {}", e)))?;
        Ok(u64::from_le_bytes(bytes))
    }

    /// Set up the game on `canvas`; the court takes the canvas size
    #[wasm_bindgen]
    pub fn init_game(canvas: HtmlCanvasElement, seed: Option<u64>) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        // Already installed when the page calls init_game again
        let _ = console_log::init_with_level(Level::Info);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("2d context has an unexpected type"))?;

        let config = Config::with_court(canvas.width() as f32, canvas.height() as f32);
        let seed = match seed {
            Some(seed) => seed,
            None => random_seed()?,
        };
        let session = Session::new(config, seed)
            .map_err(|e| JsValue::from_str(&format!("Invalid court: {}", e)))?;

        info!(
            "game ready on a {}x{} court (seed {})",
            canvas.width(),
            canvas.height(),
            seed
        );

        CLIENT.with(|client| {
            *client.borrow_mut() = Some(Client {
                driver: FrameDriver::new(session),
                surface: CanvasSurface::new(ctx),
            });
        });
        Ok(())
    }

    /// Pointer moved to `client_y`; `surface_top` is the canvas' top edge
    #[wasm_bindgen]
    pub fn pointer_moved(client_y: f32, surface_top: f32) {
        CLIENT.with(|client| {
            if let Some(client) = client.borrow_mut().as_mut() {
                client.driver.pointer_moved(client_y, surface_top);
            }
        });
    }

    /// Advance and draw one frame
    #[wasm_bindgen]
    pub fn render_frame() -> Result<(), JsValue> {
        CLIENT.with(|client| match client.borrow_mut().as_mut() {
            Some(client) => client
                .driver
                .frame(&mut client.surface)
                .map_err(|e| JsValue::from_str(&e)),
            None => Err(JsValue::from_str("Game not initialized")),
        })
    }
}
