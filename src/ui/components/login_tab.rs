use super::details_modal::{DetailsModal, DetailsModalEvent};
use crate::models::{LoginForm, ModalState};
use eframe::egui;

const FIELD_WIDTH: f32 = 200.0;

#[derive(Debug, PartialEq, Eq)]
pub enum LoginTabEvent {
    Submit,
    CloseModal,
}

/// User ID / password form that echoes what was typed in a modal.
/// Nothing is validated or sent anywhere.
pub struct LoginTab {
    form: LoginForm,
    modal: ModalState,
}

impl LoginTab {
    pub fn new() -> Self {
        Self {
            form: LoginForm::default(),
            modal: ModalState::Closed,
        }
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut LoginForm {
        &mut self.form
    }

    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn handle(&mut self, event: LoginTabEvent) {
        match event {
            LoginTabEvent::Submit => {
                tracing::debug!("Login form submitted");
                self.modal = ModalState::Open;
            }
            LoginTabEvent::CloseModal => {
                tracing::debug!("Login details closed, clearing form");
                self.modal = ModalState::Closed;
                self.form.clear();
            }
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let mut event = None;

        egui::Frame::none()
            .stroke(ui.visuals().widgets.noninteractive.bg_stroke)
            .inner_margin(egui::Margin::symmetric(24.0, 16.0))
            .show(ui, |ui| {
                ui.set_min_size(egui::vec2(250.0, 200.0));

                ui.vertical_centered(|ui| {
                    let user_id = Self::required_field(ui, "User ID", &mut self.form.user_id, false);
                    ui.add_space(12.0);
                    let password = Self::required_field(ui, "Password", &mut self.form.password, true);

                    let enter_pressed = (user_id.lost_focus() || password.lost_focus())
                        && ui.input(|i| i.key_pressed(egui::Key::Enter));

                    ui.add_space(16.0);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                        if ui.button("SUBMIT").clicked() || enter_pressed {
                            event = Some(LoginTabEvent::Submit);
                        }
                    });
                });
            });

        if self.modal.is_open() {
            let closed = DetailsModal::show(
                ui.ctx(),
                egui::Id::new("login_details"),
                "Login Details",
                self.form.echo_pairs(),
            );
            if let Some(DetailsModalEvent::Close) = closed {
                event = Some(LoginTabEvent::CloseModal);
            }
        }

        if let Some(event) = event {
            self.handle(event);
        }
    }

    /// Label with a required marker above a single-line input.
    fn required_field(ui: &mut egui::Ui, label: &str, value: &mut String, masked: bool) -> egui::Response {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.label(egui::RichText::new("*").color(ui.visuals().error_fg_color));
        });
        ui.add(
            egui::TextEdit::singleline(value)
                .password(masked)
                .desired_width(FIELD_WIDTH),
        )
    }
}
