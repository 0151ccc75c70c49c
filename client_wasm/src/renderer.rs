//! Canvas 2D rendering

use game_core::{Params, Scene};

pub const NET_COLOR: &str = "#444";
pub const PIECE_COLOR: &str = "#fff";

/// The few drawing calls the game needs from a 2D surface
pub trait Surface2d {
    fn clear(&mut self, width: f32, height: f32);
    fn set_fill(&mut self, color: &str);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
}

#[cfg(target_arch = "wasm32")]
pub struct CanvasSurface {
    ctx: web_sys::CanvasRenderingContext2d,
}

#[cfg(target_arch = "wasm32")]
impl CanvasSurface {
    pub fn new(ctx: web_sys::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

#[cfg(target_arch = "wasm32")]
impl Surface2d for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn set_fill(&mut self, color: &str) {
        self.ctx.set_fill_style_str(color);
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ctx
            .fill_rect(x as f64, y as f64, width as f64, height as f64);
    }
}

/// Draw one frame: cleared court, dashed centre net, both paddles, ball
pub fn draw_frame<S: Surface2d + ?Sized>(surface: &mut S, scene: &Scene) {
    let court = scene.court;
    surface.clear(court.width, court.height);

    // Net
    surface.set_fill(NET_COLOR);
    let net_x = court.width / 2.0 - Params::NET_WIDTH / 2.0;
    let mut y = 0.0;
    while y < court.height {
        surface.fill_rect(net_x, y, Params::NET_WIDTH, Params::NET_DASH);
        y += Params::NET_SPACING;
    }

    surface.set_fill(PIECE_COLOR);
    for paddle in [scene.left, scene.right] {
        surface.fill_rect(paddle.pos.x, paddle.pos.y, paddle.size.x, paddle.size.y);
    }
    let ball = scene.ball;
    surface.fill_rect(ball.pos.x, ball.pos.y, ball.size.x, ball.size.y);
}
