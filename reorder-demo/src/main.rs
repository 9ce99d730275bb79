use std::cell::RefCell;
use std::rc::Rc;

use eframe::{App, Frame, NativeOptions};
use egui::{CentralPanel, Context, ScrollArea};
use ephemeral_reorder::{EphemeralReorder, ReorderConfig, ReorderList, ReorderResponse};

#[derive(Clone, Debug)]
struct Quest {
    id: u32,
    title: &'static str,
    xp: u32,
}

fn quest_key(quest: &Quest) -> String {
    quest.id.to_string()
}

type QuestReorder = EphemeralReorder<Quest, fn(&Quest) -> String, Box<dyn FnMut(Vec<Quest>)>>;

struct QuestBoard {
    reorder: QuestReorder,
    list: ReorderList,
    /// What a backend would have persisted, most recent last.
    saved: Rc<RefCell<Vec<Vec<u32>>>>,
    status: String,
}

impl QuestBoard {
    fn new() -> Self {
        let quests = vec![
            Quest { id: 1, title: "Morning stretch", xp: 10 },
            Quest { id: 2, title: "Read 20 pages", xp: 25 },
            Quest { id: 3, title: "Journal entry", xp: 15 },
            Quest { id: 4, title: "Drink water", xp: 5 },
            Quest { id: 5, title: "Evening walk", xp: 20 },
            Quest { id: 6, title: "Tidy the desk", xp: 10 },
            Quest { id: 7, title: "Call a friend", xp: 15 },
            Quest { id: 8, title: "Cook dinner", xp: 20 },
            Quest { id: 9, title: "Plan tomorrow", xp: 10 },
            Quest { id: 10, title: "Lights out by 11", xp: 30 },
        ];
        let saved: Rc<RefCell<Vec<Vec<u32>>>> = Rc::default();
        let sink = Rc::clone(&saved);
        let on_commit: Box<dyn FnMut(Vec<Quest>)> = Box::new(move |order| {
            let ids: Vec<u32> = order.iter().map(|quest| quest.id).collect();
            tracing::info!(order = ?ids, "quest order saved");
            sink.borrow_mut().push(ids);
        });
        Self {
            reorder: EphemeralReorder::new(quests, quest_key as fn(&Quest) -> String, on_commit)
                .with_config(ReorderConfig::default().with_autoscroll(40.0, 6.0)),
            list: ReorderList::default(),
            saved,
            status: "Drag a quest by its handle".to_owned(),
        }
    }
}

impl App for QuestBoard {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        CentralPanel::default().show(ctx, |ui| {
            ui.heading("Today's quests");

            let response = ScrollArea::vertical()
                .max_height(240.0)
                .drag_to_scroll(false)
                .show(ui, |ui| {
                    self.list.ui(ui, &mut self.reorder, |ui, handle, _index, quest| {
                        ui.horizontal(|ui| {
                            handle.ui(ui, |ui| {
                                ui.label("☰");
                            });
                            ui.label(quest.title);
                            ui.weak(format!("+{} XP", quest.xp));
                        });
                    })
                })
                .inner;

            match response {
                ReorderResponse::CurrentDrag(indices) => {
                    self.status = format!("moving {} → {}", indices.source, indices.target);
                }
                ReorderResponse::Completed(indices) => {
                    self.status = format!("saved move {} → {}", indices.source, indices.target);
                }
                ReorderResponse::Cancelled => {
                    self.status = "move cancelled".to_owned();
                }
                ReorderResponse::NoDrag => {}
            }

            ui.separator();
            ui.label(self.status.as_str());
            if let Some(last) = self.saved.borrow().last() {
                ui.weak(format!("persisted order: {last:?}"));
            }
        });
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();

    let options = NativeOptions {
        initial_window_size: Some(egui::vec2(360.0, 420.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Quest order",
        options,
        Box::new(|_cc| Box::new(QuestBoard::new())),
    );
}
