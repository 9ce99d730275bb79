//! Drag-to-reorder for lists, with the committed order kept apart from what is shown mid-drag.
//!
//! [EphemeralReorder] owns the authoritative order and a working copy that only exists while an
//! item is being dragged. Pointer travel is turned into a target index by
//! [resolve_target_index], which only confirms a swap after the pointer has covered
//! [`ReorderConfig::swap_threshold`] of the next row, so hovering on a boundary does not flicker.
//! The new order reaches the owner through a single commit callback when the gesture ends;
//! cancelling never touches it.
//!
//! [ReorderList] drives all of this from egui pointer input. It can wait for a press-and-hold
//! before starting a drag, scrolls an enclosing `ScrollArea` when the pointer nears its edge, and
//! goes inert when [`ReorderConfig::enabled`] is off.
//!
//! # Example
//! ```rust
//! use ephemeral_reorder::EphemeralReorder;
//!
//! let mut committed = Vec::new();
//! {
//!     let mut reorder = EphemeralReorder::new(
//!         vec!["A", "B", "C", "D", "E"],
//!         |item: &&str| item.to_string(),
//!         |order| committed = order,
//!     );
//!
//!     reorder.start_drag(1, 100.0, Some(50.0));
//!     reorder.update_drag(175.0);
//!     assert_eq!(reorder.visual_order(), ["A", "C", "B", "D", "E"]);
//!     reorder.end_drag();
//! }
//! assert_eq!(committed, ["A", "C", "B", "D", "E"]);
//! ```
//!
//! With egui, keep a [ReorderList] next to the [EphemeralReorder] and call [`ReorderList::ui`]
//! every frame:
//! ```rust,no_run
//! use ephemeral_reorder::{EphemeralReorder, ReorderList};
//!
//! fn list_ui(
//!     ui: &mut egui::Ui,
//!     list: &mut ReorderList,
//!     reorder: &mut EphemeralReorder<String, fn(&String) -> String, fn(Vec<String>)>,
//! ) {
//!     list.ui(ui, reorder, |ui, handle, _index, item| {
//!         ui.horizontal(|ui| {
//!             handle.ui(ui, |ui| {
//!                 ui.label("grab");
//!             });
//!             ui.label(item.as_str());
//!         });
//!     });
//! }
//! ```

pub use autoscroll::autoscroll_delta;
pub use config::{
    ReorderConfig, DEFAULT_AUTOSCROLL_EDGE, DEFAULT_AUTOSCROLL_SPEED, DEFAULT_HOLD_CANCEL_DISTANCE,
    DEFAULT_ROW_HEIGHT, DEFAULT_SWAP_THRESHOLD, TOUCH_START_DELAY_MS,
};
pub use handle::Handle;
pub use list::{ReorderList, ReorderResponse};
pub use resolver::resolve_target_index;
pub use state::{DragIndices, EphemeralReorder};

mod autoscroll;
mod config;
mod handle;
mod list;
mod resolver;
mod state;
pub mod utils;
