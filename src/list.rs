use egui::{self, CursorIcon, Id, Key, Order, Pos2, Rect, Shape, Ui, Vec2};

use crate::autoscroll::autoscroll_delta;
use crate::config::ReorderConfig;
use crate::handle::Handle;
use crate::state::{DragIndices, EphemeralReorder};

/// What happened to the list during this frame.
/// `CurrentDrag` is reported on every frame of an active drag and can be used to update some state
/// while the drag is in progress. `Completed` is reported once, after the new order has been
/// handed to the commit callback. `Cancelled` means the list went back to its committed order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReorderResponse {
    NoDrag,
    CurrentDrag(DragIndices),
    Completed(DragIndices),
    Cancelled,
}

/// Pointer press on a handle that still has to become a drag session.
#[derive(Clone, Copy, Debug)]
pub(crate) struct GrabStart {
    pub index: usize,
    pub pointer: Pos2,
}

/// Press waiting out [`ReorderConfig::start_delay_ms`].
#[derive(Clone, Copy, Debug)]
struct PendingGrab {
    index: usize,
    pointer: Pos2,
    /// Press position measured from the top of the list content
    list_y: f32,
    pressed_at: f64,
}

/// [ReorderList] stores the per-widget ui state of a reorderable list. The list order itself lives
/// in the [EphemeralReorder] passed to [`ReorderList::ui`].
#[derive(Default, Clone)]
pub struct ReorderList {
    pub(crate) grab: Option<GrabStart>,
    pub(crate) drag_enabled: bool,
    pending: Option<PendingGrab>,
    /// Offset from the pointer to the top left of the dragged row when dragging began
    grab_offset: Option<Vec2>,
}

impl ReorderList {
    /// Draws the rows in [`EphemeralReorder::visual_order`] and drives the drag session from the
    /// pointer.
    ///
    /// `item_ui` draws one row. Its arguments are:
    /// - a mutable reference to the ui
    /// - a [Handle] that can be used to draw the draggable part of the row
    /// - the index of the row in the visual order
    /// - a reference to the item
    ///
    /// Releasing the pointer commits the drag, pressing Escape or losing the pointer cancels it.
    /// With a [start delay](ReorderConfig::with_delay) a press only becomes a drag once it has been
    /// held still long enough; releasing or moving further than
    /// [`ReorderConfig::hold_cancel_distance`] before that drops it.
    ///
    /// Drag positions are measured against the top of the list rather than the screen, so placing
    /// the list in an [`egui::ScrollArea`] lets the drag scroll it when the pointer nears an edge of
    /// the visible area.
    pub fn ui<T, K, C>(
        &mut self,
        ui: &mut Ui,
        reorder: &mut EphemeralReorder<T, K, C>,
        mut item_ui: impl FnMut(&mut Ui, Handle, usize, &T),
    ) -> ReorderResponse
    where
        T: Clone,
        K: Fn(&T) -> String,
        C: FnMut(Vec<T>),
    {
        let config = *reorder.config();
        self.drag_enabled = config.enabled;
        if !config.enabled {
            self.grab = None;
            self.pending = None;
        }

        let dragged_key = reorder.dragged_key().map(str::to_owned);
        let reordering = reorder
            .drag_indices()
            .map_or(false, |indices| indices.source != indices.target);
        let mut item_rects: Vec<(String, Rect)> = Vec::with_capacity(reorder.visual_order().len());

        let list_top = {
            let order = reorder.visual_order();
            ReorderList::draw_list(ui, reordering, |ui| {
                for (idx, item) in order.iter().enumerate() {
                    let key = reorder.key_of(item);
                    let is_being_dragged = dragged_key.as_deref() == Some(key.as_str());
                    let id = ui.make_persistent_id(("ephemeral_reorder_row", &key));
                    let rect = self.draw_item(ui, id, idx, is_being_dragged, |ui, handle| {
                        item_ui(ui, handle, idx, item);
                    });
                    item_rects.push((key, rect));
                }
            })
        };

        if let Some(grab) = self.grab.take() {
            let list_y = grab.pointer.y - list_top;
            if config.start_delay_ms == 0 {
                self.begin_drag(ui, reorder, &item_rects, grab.index, grab.pointer, list_y);
            } else {
                self.pending = Some(PendingGrab {
                    index: grab.index,
                    pointer: grab.pointer,
                    list_y,
                    pressed_at: ui.input().time,
                });
            }
        }
        if let Some(pending) = self.pending.take() {
            self.poll_pending(ui, reorder, &item_rects, pending, &config);
        }
        for (key, rect) in item_rects {
            reorder.register_item_rect(key, rect);
        }

        let Some(indices) = reorder.drag_indices() else {
            return ReorderResponse::NoDrag;
        };

        if !config.enabled || ui.input().key_pressed(Key::Escape) {
            reorder.cancel_drag();
            self.grab_offset = None;
            return ReorderResponse::Cancelled;
        }

        // dragging finished
        if ui.input().pointer.any_released() {
            self.grab_offset = None;
            return match reorder.end_drag() {
                Some(indices) => ReorderResponse::Completed(indices),
                None => ReorderResponse::NoDrag,
            };
        }

        let Some(pointer) = ui.ctx().pointer_interact_pos() else {
            // the pointer left without a release, e.g. the window lost it mid gesture
            reorder.cancel_drag();
            self.grab_offset = None;
            return ReorderResponse::Cancelled;
        };

        let clip = ui.clip_rect();
        let scroll = autoscroll_delta(
            pointer.y,
            clip.top(),
            clip.bottom(),
            config.autoscroll_edge,
            config.autoscroll_speed,
        );
        if scroll != 0.0 {
            // ask the enclosing scroll area to bring a line just beyond the edge into view
            let edge = if scroll > 0.0 { clip.bottom() } else { clip.top() } + scroll;
            ui.scroll_to_rect(Rect::from_x_y_ranges(clip.x_range(), edge..=edge), None);
            ui.ctx().request_repaint();
        }

        if reorder.update_drag(pointer.y - list_top) {
            ui.ctx().request_repaint();
        }
        ReorderResponse::CurrentDrag(reorder.drag_indices().unwrap_or(indices))
    }

    fn begin_drag<T, K, C>(
        &mut self,
        ui: &Ui,
        reorder: &mut EphemeralReorder<T, K, C>,
        item_rects: &[(String, Rect)],
        index: usize,
        pointer: Pos2,
        list_y: f32,
    ) where
        T: Clone,
        K: Fn(&T) -> String,
        C: FnMut(Vec<T>),
    {
        if let Some((_, rect)) = item_rects.get(index) {
            let row_pitch = rect.height() + ui.spacing().item_spacing.y;
            reorder.start_drag(index, list_y, Some(row_pitch));
            self.grab_offset = Some(rect.min - pointer);
        }
    }

    /// Turns a held press into a drag once the delay has passed, keeps waiting, or drops it.
    fn poll_pending<T, K, C>(
        &mut self,
        ui: &Ui,
        reorder: &mut EphemeralReorder<T, K, C>,
        item_rects: &[(String, Rect)],
        pending: PendingGrab,
        config: &ReorderConfig,
    ) where
        T: Clone,
        K: Fn(&T) -> String,
        C: FnMut(Vec<T>),
    {
        let (released, pointer, now) = {
            let input = ui.input();
            (
                input.pointer.any_released(),
                input.pointer.interact_pos(),
                input.time,
            )
        };

        // a tap, a swipe or a lost pointer never becomes a drag
        let Some(pointer) = pointer.filter(|_| !released) else {
            return;
        };
        if pointer.distance(pending.pointer) > config.hold_cancel_distance() {
            return;
        }

        if now - pending.pressed_at >= config.start_delay_secs() {
            self.begin_drag(ui, reorder, item_rects, pending.index, pointer, pending.list_y);
        } else {
            self.pending = Some(pending);
            ui.ctx().request_repaint();
        }
    }

    /// Draw the widget for a row using `item_body` either inline with the list or hovering depending
    /// on if its being dragged, then returns its rect. A dragged row follows the pointer while a
    /// disabled copy keeps its slot in the list.
    fn draw_item(
        &mut self,
        ui: &mut Ui,
        id: Id,
        index: usize,
        is_being_dragged: bool,
        mut item_body: impl FnMut(&mut Ui, Handle),
    ) -> Rect {
        if !is_being_dragged {
            let scope = ui.scope(|ui| {
                item_body(
                    ui,
                    Handle {
                        state: self,
                        id,
                        index,
                        placeholder: false,
                    },
                )
            });
            return scope.response.rect;
        }

        ui.output().cursor_icon = CursorIcon::Grabbing;

        // A dragged row cannot be interacted with anyway (anything on the `Order::Tooltip` layer
        // gets an empty response), so it is fine to position it by the pointer after the fact.
        let pointer_pos = ui
            .ctx()
            .pointer_interact_pos()
            .unwrap_or(ui.next_widget_position());

        egui::Area::new(id.with("floating"))
            .order(Order::Tooltip)
            .interactable(false)
            .fixed_pos(pointer_pos + self.grab_offset.unwrap_or_default())
            .show(ui.ctx(), |ui| {
                item_body(
                    ui,
                    Handle {
                        state: self,
                        id,
                        index,
                        placeholder: true,
                    },
                )
            });

        let scope = ui.scope(|ui| {
            // disabled style for placeholder ui
            ui.add_enabled_ui(false, |ui| {
                item_body(
                    ui,
                    Handle {
                        state: self,
                        id,
                        index,
                        placeholder: true,
                    },
                )
            });
        });
        scope.response.rect
    }

    /// Draw the list body on a background that lights up while the dragged row sits away from its
    /// starting slot. Returns the top of the content area, the origin drag positions are measured
    /// from.
    fn draw_list(ui: &mut Ui, highlight: bool, list_body: impl FnOnce(&mut Ui)) -> f32 {
        let margin = Vec2::splat(4.0);

        let outer_rect_bounds = ui.available_rect_before_wrap();
        let inner_rect = outer_rect_bounds.shrink2(margin);
        let where_to_put_background = ui.painter().add(Shape::Noop);

        let mut content_ui = ui.child_ui(inner_rect, *ui.layout());

        list_body(&mut content_ui);
        let outer_rect =
            Rect::from_min_max(outer_rect_bounds.min, content_ui.min_rect().max + margin);
        let (_, rect) = ui.allocate_space(outer_rect.size());

        let style = if highlight {
            ui.visuals().widgets.active
        } else {
            ui.visuals().widgets.inactive
        };

        ui.painter().set(
            where_to_put_background,
            epaint::RectShape {
                rounding: style.rounding,
                fill: style.bg_fill,
                stroke: style.bg_stroke,
                rect,
            },
        );

        inner_rect.top()
    }
}
