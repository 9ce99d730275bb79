/// Scroll distance for one frame of a drag with the pointer at `pointer_y`, given the visible
/// range `viewport_top..viewport_bottom`.
///
/// Inside the `edge` band the speed ramps up linearly towards the edge and stays at `speed` past
/// it. The result is negative near the top, positive near the bottom and `0.0` everywhere else.
/// The band never covers more than half the viewport, so a short viewport still has a neutral zone
/// in the middle.
pub fn autoscroll_delta(
    pointer_y: f32,
    viewport_top: f32,
    viewport_bottom: f32,
    edge: f32,
    speed: f32,
) -> f32 {
    let height = viewport_bottom - viewport_top;
    if !(edge > 0.0 && speed > 0.0 && height > 0.0 && pointer_y.is_finite()) {
        return 0.0;
    }
    let edge = edge.min(height / 2.0);

    let top_band = viewport_top + edge;
    let bottom_band = viewport_bottom - edge;
    if pointer_y < top_band {
        -speed * ((top_band - pointer_y) / edge).min(1.0)
    } else if pointer_y > bottom_band {
        speed * ((pointer_y - bottom_band) / edge).min(1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_of_viewport_does_not_scroll() {
        assert_eq!(autoscroll_delta(300.0, 0.0, 600.0, 80.0, 8.0), 0.0);
        assert_eq!(autoscroll_delta(80.0, 0.0, 600.0, 80.0, 8.0), 0.0);
        assert_eq!(autoscroll_delta(520.0, 0.0, 600.0, 80.0, 8.0), 0.0);
    }

    #[test]
    fn speed_ramps_towards_the_edges() {
        assert_eq!(autoscroll_delta(40.0, 0.0, 600.0, 80.0, 8.0), -4.0);
        assert_eq!(autoscroll_delta(0.0, 0.0, 600.0, 80.0, 8.0), -8.0);
        assert_eq!(autoscroll_delta(560.0, 0.0, 600.0, 80.0, 8.0), 4.0);
        assert_eq!(autoscroll_delta(600.0, 0.0, 600.0, 80.0, 8.0), 8.0);
    }

    #[test]
    fn past_the_edge_scrolls_at_full_speed() {
        assert_eq!(autoscroll_delta(-50.0, 0.0, 600.0, 80.0, 8.0), -8.0);
        assert_eq!(autoscroll_delta(900.0, 0.0, 600.0, 80.0, 8.0), 8.0);
    }

    #[test]
    fn band_is_limited_to_half_a_short_viewport() {
        // 60pt viewport: the band shrinks to 30pt on each side
        assert_eq!(autoscroll_delta(30.0, 0.0, 60.0, 80.0, 8.0), 0.0);
        assert_eq!(autoscroll_delta(45.0, 0.0, 60.0, 80.0, 8.0), 4.0);
    }

    #[test]
    fn disabled_or_degenerate_input_never_scrolls() {
        assert_eq!(autoscroll_delta(0.0, 0.0, 600.0, 0.0, 8.0), 0.0);
        assert_eq!(autoscroll_delta(0.0, 0.0, 600.0, 80.0, 0.0), 0.0);
        assert_eq!(autoscroll_delta(0.0, 600.0, 0.0, 80.0, 8.0), 0.0);
        assert_eq!(autoscroll_delta(f32::NAN, 0.0, 600.0, 80.0, 8.0), 0.0);
        assert_eq!(autoscroll_delta(0.0, 0.0, 600.0, f32::NAN, 8.0), 0.0);
    }
}
