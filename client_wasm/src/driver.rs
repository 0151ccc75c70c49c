//! Per-frame driver: step the simulation, then draw it

use game_core::Session;
use log::info;

use crate::input::paddle_y_from_pointer;
use crate::renderer::{draw_frame, Surface2d};

pub struct FrameDriver {
    session: Session,
}

impl FrameDriver {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Record a pointer position; the latest one before a frame is used
    pub fn pointer_moved(&mut self, client_y: f32, surface_top: f32) {
        let paddle_height = self.session.config().paddle_height;
        self.session
            .set_pointer(paddle_y_from_pointer(client_y, surface_top, paddle_height));
    }

    /// Run one display frame: update first, then render
    pub fn frame<S: Surface2d + ?Sized>(&mut self, surface: &mut S) -> Result<(), String> {
        let exited = self.session.step().ball_exited;
        if let Some(side) = exited {
            info!(
                "ball missed on the {:?} side at frame {}",
                side,
                self.session.frame()
            );
        }

        let scene = self
            .session
            .scene()
            .ok_or_else(|| "Session is missing its ball or paddles".to_string())?;
        draw_frame(surface, &scene);
        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}
