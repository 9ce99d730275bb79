use egui::Rect;
use std::collections::HashMap;

use crate::config::ReorderConfig;
use crate::resolver::resolve_target_index;
use crate::utils::move_item;

/// Where the dragged item started (`source`) and where it currently sits or was dropped
/// (`target`), both as indices into the list.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragIndices {
    pub source: usize,
    pub target: usize,
}

/// State that only exists between gesture start and gesture end.
struct DragSession<T> {
    /// Working copy of the list, the only thing `update_drag` mutates.
    visual: Vec<T>,
    dragged_key: String,
    /// Index of the dragged item when the gesture began. Resolution is anchored here because
    /// `start_y` is fixed for the whole gesture.
    origin_index: usize,
    dragged_index: usize,
    over_index: usize,
    start_y: f32,
    row_height: f32,
}

/// [EphemeralReorder] keeps the committed order of a list apart from the order shown while an
/// item is being dragged.
///
/// The list passed in (or set through [`Self::set_items`]) is the authoritative order. A drag works
/// on a private copy; only [`Self::end_drag`] writes that copy back and hands a snapshot to
/// `on_commit`. Cancelling, or starting over, simply drops the copy, so an interrupted gesture can
/// never leave the authoritative list half reordered.
///
/// Every operation is synchronous and infallible. Lifecycle calls outside of a drag are no-ops,
/// since input layers do not reliably deliver exactly one end-of-gesture event.
///
/// `key` must return the same string for an item across reorders and frames; it identifies the
/// dragged item and keys the geometry cache.
pub struct EphemeralReorder<T, K, C> {
    items: Vec<T>,
    session: Option<DragSession<T>>,
    /// External update that arrived mid-drag, applied if the drag is cancelled.
    deferred_items: Option<Vec<T>>,
    item_rects: HashMap<String, Rect>,
    config: ReorderConfig,
    key: K,
    on_commit: C,
}

impl<T, K, C> EphemeralReorder<T, K, C>
where
    T: Clone,
    K: Fn(&T) -> String,
    C: FnMut(Vec<T>),
{
    pub fn new(items: Vec<T>, key: K, on_commit: C) -> Self {
        Self {
            items,
            session: None,
            deferred_items: None,
            item_rects: HashMap::new(),
            config: ReorderConfig::default(),
            key,
            on_commit,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: ReorderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ReorderConfig {
        &self.config
    }

    /// Swaps the tuning. A running drag keeps the row height it started with but resolves with
    /// the new swap threshold from the next update on.
    pub fn set_config(&mut self, config: ReorderConfig) {
        self.config = config;
    }

    /// The authoritative order, untouched by any drag in progress.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn key_of(&self, item: &T) -> String {
        (self.key)(item)
    }

    /// The order to render: the working copy while dragging, the authoritative list otherwise.
    pub fn visual_order(&self) -> &[T] {
        match &self.session {
            Some(session) => &session.visual,
            None => &self.items,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Current position of the dragged item within [`Self::visual_order`].
    pub fn dragged_index(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.dragged_index)
    }

    /// Position the resolver last settled on.
    pub fn over_index(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.over_index)
    }

    /// Position of the dragged item when the gesture began.
    pub fn origin_index(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.origin_index)
    }

    pub fn dragged_key(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.dragged_key.as_str())
    }

    pub fn dragged_item(&self) -> Option<&T> {
        self.session
            .as_ref()
            .and_then(|s| s.visual.get(s.dragged_index))
    }

    pub fn drag_indices(&self) -> Option<DragIndices> {
        self.session.as_ref().map(|s| DragIndices {
            source: s.origin_index,
            target: s.dragged_index,
        })
    }

    /// Pointer travel since the gesture began, `None` when idle.
    pub fn drag_offset(&self, current_y: f32) -> Option<f32> {
        self.session.as_ref().map(|s| current_y - s.start_y)
    }

    /// Replaces the authoritative list.
    ///
    /// Returns `false` if a drag is in progress. The update is then held back: a cancelled drag
    /// reverts to it, a committed drag supersedes it.
    pub fn set_items(&mut self, items: Vec<T>) -> bool {
        if self.session.is_some() {
            #[cfg(feature = "tracing")]
            tracing::debug!(len = items.len(), "reorder: external update deferred until drag ends");
            self.deferred_items = Some(items);
            return false;
        }
        self.items = items;
        true
    }

    /// Begins dragging the item at `index`. An index past the end is clamped to the last item and
    /// an empty list is ignored. A session that is already running is discarded without a commit.
    ///
    /// `row_height` is the measured row pitch, if known; see
    /// [`ReorderConfig::effective_row_height`].
    pub fn start_drag(&mut self, index: usize, start_y: f32, row_height: Option<f32>) {
        if self.session.is_some() {
            #[cfg(feature = "tracing")]
            tracing::debug!("reorder: new drag supersedes unfinished session");
            self.discard_session();
        }
        if self.items.is_empty() {
            return;
        }

        let index = index.min(self.items.len() - 1);
        let row_height = self.config.effective_row_height(row_height);
        let visual = self.items.clone();
        let dragged_key = (self.key)(&visual[index]);

        #[cfg(feature = "tracing")]
        tracing::debug!(index, start_y, row_height, key = %dragged_key, "reorder: drag started");

        self.item_rects.clear();
        self.session = Some(DragSession {
            visual,
            dragged_key,
            origin_index: index,
            dragged_index: index,
            over_index: index,
            start_y,
            row_height,
        });
    }

    /// Feeds a new pointer position. Returns `true` only if the dragged item moved, which is the
    /// only case where the host needs to redraw.
    pub fn update_drag(&mut self, current_y: f32) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        let target = resolve_target_index(
            current_y - session.start_y,
            session.row_height,
            session.origin_index,
            session.visual.len(),
            self.config.swap_threshold(),
        );
        if target == session.over_index {
            return false;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(from = session.dragged_index, to = target, "reorder: dragged item moved");

        move_item(&mut session.visual, session.dragged_index, target);
        session.dragged_index = target;
        session.over_index = target;
        true
    }

    /// Finishes the drag: the working copy becomes the authoritative list and a snapshot of it is
    /// passed to `on_commit`. Returns `None` (and commits nothing) when no drag is active.
    pub fn end_drag(&mut self) -> Option<DragIndices> {
        let session = self.session.take()?;
        let indices = DragIndices {
            source: session.origin_index,
            target: session.dragged_index,
        };
        self.deferred_items = None;
        self.items = session.visual;

        #[cfg(feature = "tracing")]
        tracing::debug!(source = indices.source, target = indices.target, "reorder: drag committed");

        (self.on_commit)(self.items.clone());
        Some(indices)
    }

    /// Drops the working copy without committing. Returns whether a drag was active.
    pub fn cancel_drag(&mut self) -> bool {
        if self.session.is_none() {
            return false;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("reorder: drag cancelled");

        self.discard_session();
        true
    }

    /// Remembers where an item was last laid out. Purely advisory, the resolver works from the
    /// row height alone.
    pub fn register_item_rect(&mut self, key: impl Into<String>, rect: Rect) {
        self.item_rects.insert(key.into(), rect);
    }

    pub fn item_rect(&self, key: &str) -> Option<Rect> {
        self.item_rects.get(key).copied()
    }

    fn discard_session(&mut self) {
        self.session = None;
        if let Some(items) = self.deferred_items.take() {
            self.items = items;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};
    use std::cell::RefCell;
    use std::rc::Rc;

    type Commits = Rc<RefCell<Vec<Vec<&'static str>>>>;

    fn letters(
        items: &[&'static str],
    ) -> (
        EphemeralReorder<&'static str, impl Fn(&&'static str) -> String, impl FnMut(Vec<&'static str>)>,
        Commits,
    ) {
        let commits: Commits = Rc::default();
        let sink = Rc::clone(&commits);
        let reorder = EphemeralReorder::new(
            items.to_vec(),
            |item: &&'static str| item.to_string(),
            move |order: Vec<&'static str>| sink.borrow_mut().push(order),
        );
        (reorder, commits)
    }

    #[test]
    fn drag_and_commit_scenario() {
        let (mut reorder, commits) = letters(&["A", "B", "C", "D", "E"]);
        reorder.start_drag(1, 100.0, Some(50.0));
        assert_eq!(reorder.dragged_key(), Some("B"));

        assert!(reorder.update_drag(175.0));
        assert_eq!(reorder.over_index(), Some(2));
        assert_eq!(reorder.visual_order(), ["A", "C", "B", "D", "E"]);
        assert_eq!(reorder.items(), ["A", "B", "C", "D", "E"]);

        assert_eq!(
            reorder.end_drag(),
            Some(DragIndices {
                source: 1,
                target: 2
            })
        );
        assert_eq!(*commits.borrow(), vec![vec!["A", "C", "B", "D", "E"]]);
        assert_eq!(reorder.items(), ["A", "C", "B", "D", "E"]);
        assert!(!reorder.is_dragging());
    }

    #[test]
    fn repeated_pointer_position_is_stable() {
        let (mut reorder, _) = letters(&["A", "B", "C", "D", "E"]);
        reorder.start_drag(1, 100.0, Some(50.0));
        assert!(reorder.update_drag(175.0));
        assert!(!reorder.update_drag(175.0));
        assert!(!reorder.update_drag(176.0));
        assert_eq!(reorder.visual_order(), ["A", "C", "B", "D", "E"]);
    }

    #[test]
    fn hovering_below_threshold_never_moves() {
        let (mut reorder, _) = letters(&["A", "B", "C", "D", "E"]);
        reorder.start_drag(2, 0.0, None);
        for y in [0.0, 10.0, 20.0, 30.0, 20.0, 10.0] {
            assert!(!reorder.update_drag(y));
            assert_eq!(reorder.over_index(), Some(2));
        }
        assert!(reorder.update_drag(40.0));
        assert_eq!(reorder.over_index(), Some(3));
    }

    #[test]
    fn dragging_back_restores_original_order() {
        let (mut reorder, _) = letters(&["A", "B", "C", "D", "E"]);
        reorder.start_drag(0, 0.0, Some(10.0));
        reorder.update_drag(38.0);
        assert_eq!(reorder.visual_order(), ["B", "C", "D", "E", "A"]);
        reorder.update_drag(0.0);
        assert_eq!(reorder.visual_order(), ["A", "B", "C", "D", "E"]);
        assert_eq!(reorder.dragged_item(), Some(&"A"));
    }

    #[test]
    fn large_negative_travel_clamps_to_top() {
        let (mut reorder, _) = letters(&["A", "B", "C", "D", "E"]);
        reorder.start_drag(0, 500.0, None);
        reorder.update_drag(-10_000.0);
        assert_eq!(reorder.over_index(), Some(0));
        assert_eq!(reorder.visual_order(), ["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn cancel_reverts_without_commit() {
        let (mut reorder, commits) = letters(&["A", "B", "C"]);
        reorder.start_drag(0, 0.0, Some(20.0));
        reorder.update_drag(35.0);
        assert_eq!(reorder.visual_order(), ["B", "C", "A"]);

        assert!(reorder.cancel_drag());
        assert!(!reorder.cancel_drag());
        assert_eq!(reorder.visual_order(), ["A", "B", "C"]);
        assert!(commits.borrow().is_empty());
    }

    #[test]
    fn terminal_calls_are_idempotent() {
        let (mut reorder, commits) = letters(&["A", "B"]);
        reorder.start_drag(0, 0.0, None);
        assert!(reorder.end_drag().is_some());
        assert!(reorder.end_drag().is_none());
        assert!(!reorder.update_drag(100.0));
        assert_eq!(commits.borrow().len(), 1);
    }

    #[test]
    fn unchanged_drag_still_commits_once() {
        let (mut reorder, commits) = letters(&["A", "B"]);
        reorder.start_drag(1, 0.0, None);
        assert_eq!(
            reorder.end_drag(),
            Some(DragIndices {
                source: 1,
                target: 1
            })
        );
        assert_eq!(*commits.borrow(), vec![vec!["A", "B"]]);
    }

    #[test]
    fn new_drag_supersedes_unfinished_one() {
        let (mut reorder, commits) = letters(&["A", "B", "C"]);
        reorder.start_drag(0, 0.0, Some(20.0));
        reorder.update_drag(35.0);
        reorder.start_drag(2, 0.0, Some(20.0));

        assert_eq!(reorder.dragged_key(), Some("C"));
        assert_eq!(reorder.visual_order(), ["A", "B", "C"]);
        assert!(commits.borrow().is_empty());
    }

    #[test]
    fn start_drag_on_bad_input_is_tolerated() {
        let (mut reorder, _) = letters(&[]);
        reorder.start_drag(0, 0.0, None);
        assert!(!reorder.is_dragging());

        let (mut reorder, _) = letters(&["A", "B"]);
        reorder.start_drag(7, 0.0, Some(-1.0));
        assert_eq!(reorder.dragged_index(), Some(1));
    }

    #[test]
    fn external_updates_apply_when_idle() {
        let (mut reorder, _) = letters(&["A", "B"]);
        assert!(reorder.set_items(vec!["X", "Y", "Z"]));
        assert_eq!(reorder.visual_order(), ["X", "Y", "Z"]);
    }

    #[test]
    fn external_update_mid_drag_is_deferred() {
        let (mut reorder, _) = letters(&["A", "B", "C"]);
        reorder.start_drag(0, 0.0, Some(20.0));
        reorder.update_drag(35.0);

        assert!(!reorder.set_items(vec!["A", "B"]));
        assert_eq!(reorder.visual_order(), ["B", "C", "A"]);
        assert_eq!(reorder.items(), ["A", "B", "C"]);

        reorder.cancel_drag();
        assert_eq!(reorder.visual_order(), ["A", "B"]);
    }

    #[test]
    fn commit_wins_over_deferred_update() {
        let (mut reorder, _) = letters(&["A", "B", "C"]);
        reorder.start_drag(0, 0.0, Some(20.0));
        reorder.update_drag(35.0);
        reorder.set_items(vec!["Q"]);
        reorder.end_drag();
        assert_eq!(reorder.items(), ["B", "C", "A"]);

        reorder.start_drag(0, 0.0, None);
        reorder.cancel_drag();
        assert_eq!(reorder.items(), ["B", "C", "A"]);
    }

    #[test]
    fn geometry_cache_is_reset_by_new_drag() {
        let (mut reorder, _) = letters(&["A", "B"]);
        let rect = Rect::from_min_size(pos2(0.0, 10.0), vec2(100.0, 30.0));
        reorder.register_item_rect("A", rect);
        assert_eq!(reorder.item_rect("A"), Some(rect));
        assert_eq!(reorder.item_rect("B"), None);

        reorder.start_drag(0, 0.0, None);
        assert_eq!(reorder.item_rect("A"), None);
    }

    #[test]
    fn drag_offset_tracks_pointer_travel() {
        let (mut reorder, _) = letters(&["A", "B"]);
        assert_eq!(reorder.drag_offset(10.0), None);
        reorder.start_drag(0, 100.0, None);
        assert_eq!(reorder.drag_offset(130.0), Some(30.0));
    }
}
