use egui::{CursorIcon, Id, Response, Sense, Ui};

use crate::list::{GrabStart, ReorderList};

/// [Handle::ui] is used to draw the drag handle
pub struct Handle<'a> {
    pub(crate) state: &'a mut ReorderList,
    pub(crate) id: Id,
    pub(crate) index: usize,
    pub(crate) placeholder: bool,
}

/// The part of the row ui thats draggable. Accessible by the user with the `item_ui` parameter of
/// [`ReorderList::ui`]
impl<'a> Handle<'a> {
    pub fn ui(self, ui: &mut Ui, contents: impl FnOnce(&mut Ui)) -> Response {
        if self.placeholder || !self.state.drag_enabled {
            // placeholder rows only reserve space and disabled lists ignore the pointer
            return ui.scope(contents).response;
        }

        let added_contents = ui.scope(contents);
        let dragable_response = ui.interact(added_contents.response.rect, self.id, Sense::drag());

        if dragable_response.hovered() {
            ui.output().cursor_icon = CursorIcon::Grab;
        }

        // the list turns this into a drag session once the row rects of this frame are known
        if dragable_response.drag_started() {
            if let Some(pointer) = dragable_response.interact_pointer_pos() {
                self.state.grab = Some(GrabStart {
                    index: self.index,
                    pointer,
                });
            }
        }

        dragable_response
    }
}
