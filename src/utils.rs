/// Removes value at `source_idx` and places it at `target_idx`. Does nothing if `source_idx` is
/// equal to `target_idx` or if either index is outside the vec bounds.
///
/// `target_idx` is the slot *before* which the value lands, counted in the vec as it was prior to
/// the removal, so `vec.len()` appends. [`DragIndices`](crate::DragIndices) uses the final position
/// instead; apply those with [`move_item`].
pub fn shift_vec<T>(source_idx: usize, mut target_idx: usize, vec: &mut Vec<T>) {
    if source_idx == target_idx || source_idx >= vec.len() || target_idx > vec.len() {
        return;
    }

    if source_idx < target_idx {
        target_idx -= 1
    };

    let item = vec.remove(source_idx);
    vec.insert(target_idx, item);
}

/// Moves the value at `from` so that it ends up at index `to`, shifting everything in between by
/// one. Out of bounds indices leave the vec untouched.
pub fn move_item<T>(vec: &mut Vec<T>, from: usize, to: usize) {
    if to >= vec.len() {
        return;
    }
    let insert_before = if from < to { to + 1 } else { to };
    shift_vec(from, insert_before, vec);
}
