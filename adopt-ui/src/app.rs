use adopt_core::{Dog, Roster};
use eframe::egui;

use crate::browse::{BrowseAction, BrowseManager, Screen};
use crate::gallery::Gallery;

/// Two-screen adoption browser: a card list and a details view.
pub struct AdoptApp {
    manager: BrowseManager,
    gallery: Gallery,
}

impl AdoptApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, roster: Roster) -> Self {
        Self {
            manager: BrowseManager::new(roster),
            gallery: Gallery::default(),
        }
    }
}

impl eframe::App for AdoptApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Keep repainting while a toast is counting down or actions queued.
        if self.manager.has_pending_actions() || self.manager.state().toast.is_some() {
            ctx.request_repaint();
        }

        self.manager.update();

        if self
            .manager
            .state()
            .toast
            .as_ref()
            .is_some_and(|toast| toast.is_expired())
        {
            self.manager.dispatch(BrowseAction::DismissToast);
        }

        // Platform-default back: Escape returns to the list.
        if self.manager.state().screen == Screen::Details
            && ctx.input(|i| i.key_pressed(egui::Key::Escape))
        {
            self.manager.dispatch(BrowseAction::ShowList);
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🐾 Adopt a Dog");

                if self.manager.state().screen == Screen::Details {
                    ui.separator();
                    if ui.button("⬅ Back to list").clicked() {
                        self.manager.dispatch(BrowseAction::ShowList);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "{} dog(s) looking for a home",
                        self.manager.roster().len()
                    ));
                });
            });

            if self.manager.state().has_errors() {
                let errors = self.manager.state().errors.clone();
                ui.horizontal(|ui| {
                    for error in &errors {
                        ui.colored_label(egui::Color32::RED, format!("❌ {}", error));
                    }
                    if ui.small_button("Dismiss").clicked() {
                        self.manager.dispatch(BrowseAction::ClearErrors);
                    }
                });
            }
        });

        let screen = self.manager.state().screen;
        egui::CentralPanel::default().show(ctx, |ui| match screen {
            Screen::List => self.render_list_view(ui),
            Screen::Details => self.render_details_view(ui),
        });

        if let Some(toast) = &self.manager.state().toast {
            let message = toast.message().to_string();
            egui::Area::new(egui::Id::new("adopt_toast"))
                .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
                .show(ctx, |ui| {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.label(message);
                    });
                });
        }
    }
}

impl AdoptApp {
    fn render_list_view(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new("My puppies list")
                .size(30.0)
                .strong()
                .color(egui::Color32::LIGHT_GRAY),
        );
        ui.add_space(16.0);

        let dogs: Vec<Dog> = self.manager.list().dogs().to_vec();
        egui::ScrollArea::vertical().show(ui, |ui| {
            for (index, dog) in dogs.iter().enumerate() {
                let response = self.render_dog_card(ui, index, dog);
                if response.clicked() {
                    self.manager.dispatch(BrowseAction::OpenDetails {
                        dog_id: dog.id.clone(),
                    });
                }
                ui.add_space(16.0);
            }
        });
    }

    fn render_dog_card(&mut self, ui: &mut egui::Ui, index: usize, dog: &Dog) -> egui::Response {
        let card = egui::Frame::group(ui.style())
            .rounding(8.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    let texture = self.gallery.texture(ui.ctx(), &dog.photo);
                    ui.add(
                        egui::Image::new((texture.id(), egui::vec2(128.0, 128.0))).rounding(8.0),
                    );
                    ui.add_space(16.0);

                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(&dog.name).heading().strong());
                        ui.label(&dog.breed);
                        ui.label(format!("Age : {}", dog.age));
                    });
                });
            });

        // The whole card is the tap target.
        ui.interact(
            card.response.rect,
            egui::Id::new(("dog_card", index)),
            egui::Sense::click(),
        )
        .on_hover_cursor(egui::CursorIcon::PointingHand)
    }

    fn render_details_view(&mut self, ui: &mut egui::Ui) {
        let Some(dog) = self.manager.details().dog().cloned() else {
            ui.centered_and_justified(|ui| {
                ui.label("No dog found for this identifier");
            });
            return;
        };

        egui::ScrollArea::vertical().show(ui, |ui| {
            let texture = self.gallery.texture(ui.ctx(), &dog.photo);
            let width = ui.available_width();
            ui.add(egui::Image::new((texture.id(), egui::vec2(width, 320.0))));

            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(&dog.name)
                        .size(48.0)
                        .strong()
                        .color(ui.visuals().strong_text_color()),
                );
            });
            ui.add_space(16.0);

            details_row(ui, "🏠", format!("Shelter : {}", dog.shelter));
            details_row(ui, "🐕", format!("Breed : {}", dog.breed));
            details_row(ui, "📏", format!("Size : {}", dog.size));
            details_row(ui, "🎂", format!("Age : {}", dog.age));

            ui.add_space(8.0);
            let adopt = egui::Button::new(egui::RichText::new("Adopt me !").size(22.0));
            if ui
                .add_sized([ui.available_width() - 32.0, 40.0], adopt)
                .clicked()
            {
                self.manager.dispatch(BrowseAction::AdoptCurrent);
            }
        });
    }
}

fn details_row(ui: &mut egui::Ui, icon: &str, text: String) {
    ui.horizontal(|ui| {
        ui.add_space(16.0);
        ui.label(icon);
        ui.label(egui::RichText::new(text).size(18.0));
    });
    ui.add_space(4.0);
}
