use crate::config::DEFAULT_ROW_HEIGHT;

/// Turns the vertical pointer travel since the gesture began into the index the dragged item
/// should occupy.
///
/// The naive answer is `current_index + round(delta_y / row_height)`. That flaps back and forth
/// when the pointer rests near a row boundary, so a move is only confirmed once the remainder of
/// the travel inside the target row reaches `row_height * swap_threshold`. Below that the result
/// backs off one row towards where the drag came from.
///
/// `delta_y` is measured from where the gesture began, so `current_index` has to be the index the
/// item had at that moment (its origin), not where an earlier update moved it. Because every
/// row boundary has its own back-off band, the result is not monotonic in `delta_y`: a steady
/// downward move can step back one row just after crossing into the next.
///
/// The result is always within `0..list_len` (or `0` for lists with fewer than two items).
/// A non-positive `row_height` is replaced by [`DEFAULT_ROW_HEIGHT`] and a non-finite `delta_y`
/// resolves to `current_index`.
pub fn resolve_target_index(
    delta_y: f32,
    row_height: f32,
    current_index: usize,
    list_len: usize,
    swap_threshold: f32,
) -> usize {
    if list_len <= 1 {
        return 0;
    }
    let last = list_len - 1;
    let current_index = current_index.min(last);
    if !delta_y.is_finite() {
        return current_index;
    }

    let row_height = if row_height.is_finite() && row_height > 0.0 {
        row_height
    } else {
        DEFAULT_ROW_HEIGHT
    };

    // `as` saturates, so absurd deltas still land on the clamp below
    let rows_moved = (delta_y / row_height).round() as isize;
    let candidate = clamp_index((current_index as isize).saturating_add(rows_moved), last);

    let partial_move = delta_y.abs() % row_height;
    let threshold_px = row_height * swap_threshold;

    if partial_move < threshold_px && candidate != current_index {
        let direction = if delta_y > 0.0 { -1 } else { 1 };
        return clamp_index(candidate as isize + direction, last);
    }
    candidate
}

fn clamp_index(index: isize, last: usize) -> usize {
    index.clamp(0, last as isize) as usize
}
