//! Pointer input handling

/// Paddle top edge that centres the paddle on the pointer
///
/// `client_y` is the pointer position in page coordinates and `surface_top`
/// the canvas' top edge in the same coordinates. The result is not clamped;
/// the simulation clamps it when applying it.
pub fn paddle_y_from_pointer(client_y: f32, surface_top: f32, paddle_height: f32) -> f32 {
    client_y - surface_top - paddle_height / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_centres_paddle() {
        assert_eq!(paddle_y_from_pointer(250.0, 50.0, 100.0), 150.0);
    }

    #[test]
    fn test_pointer_above_surface_goes_negative() {
        assert_eq!(paddle_y_from_pointer(10.0, 50.0, 100.0), -90.0);
    }
}
