use super::home_tab::HomeTab;
use super::login_tab::LoginTab;
use super::tab_menu::{TabMenu, TabMenuEvent};
use super::tab_panel::TabPanel;
use crate::data::Fixture;
use crate::models::{HOME_TAB, LOGIN_TAB, TAB_LABELS};
use eframe::egui;

/// Vertical tab menu and the panels it switches between.
pub struct Tabset {
    active_tab: usize,
    menu: TabMenu,
    home: HomeTab,
    login: LoginTab,
}

impl Tabset {
    pub fn new(page_size: usize) -> Self {
        Self {
            active_tab: HOME_TAB,
            menu: TabMenu::new(),
            home: HomeTab::new(page_size),
            login: LoginTab::new(),
        }
    }

    pub fn active_tab(&self) -> usize {
        self.active_tab
    }

    pub fn home(&self) -> &HomeTab {
        &self.home
    }

    pub fn login(&self) -> &LoginTab {
        &self.login
    }

    pub fn login_mut(&mut self) -> &mut LoginTab {
        &mut self.login
    }

    /// Whether any modal is showing. The menu and panels are disabled
    /// until it closes.
    pub fn modal_open(&self) -> bool {
        self.login.modal().is_open() || self.home.modal_open()
    }

    pub fn handle(&mut self, event: TabMenuEvent) {
        match event {
            TabMenuEvent::Selected(index) if index < TAB_LABELS.len() => {
                tracing::debug!(from = self.active_tab, to = index, "Switching tab");
                self.active_tab = index;
            }
            TabMenuEvent::Selected(index) => {
                tracing::warn!(index, "Ignoring selection of a tab that does not exist");
            }
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, fixture: &Fixture) {
        let mut event = None;
        let blocked = self.modal_open();

        // Modals are their own windows, so they stay enabled.
        ui.add_enabled_ui(!blocked, |ui| {
            ui.horizontal_top(|ui| {
                event = self.menu.show(ui, self.active_tab);
                ui.separator();

                let active = self.active_tab;
                let home = &mut self.home;
                let login = &mut self.login;
                TabPanel::show(ui, HOME_TAB, active, |ui| home.show(ui, fixture));
                TabPanel::show(ui, LOGIN_TAB, active, |ui| login.show(ui));
            });
        });

        if let Some(event) = event {
            self.handle(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModalState;
    use crate::ui::components::test_input::{click_at, column, in_panel};
    use crate::ui::components::{ActionRowEvent, HomeTabEvent, LoginTabEvent};

    /// Clicks at `pos` on a rendered tab set.
    fn click(ctx: &egui::Context, tabset: &mut Tabset, fixture: &Fixture, pos: egui::Pos2) {
        let _ = click_at(ctx, pos, |ctx| {
            in_panel(ctx, |ui| tabset.show(ui, fixture));
            None::<()>
        });
    }

    /// A point on the HOME label, found by clicking down the menu from the
    /// login tab until the tab switches.
    fn home_label_pos(ctx: &egui::Context, fixture: &Fixture) -> egui::Pos2 {
        column(20.0, 0.0, 150.0, 2.0)
            .find(|&pos| {
                let mut tabset = Tabset::new(20);
                tabset.handle(TabMenuEvent::Selected(LOGIN_TAB));
                click(ctx, &mut tabset, fixture, pos);
                tabset.active_tab() == HOME_TAB
            })
            .expect("HOME label is clickable")
    }

    #[test]
    fn test_starts_on_home() {
        let tabset = Tabset::new(20);
        assert_eq!(tabset.active_tab(), HOME_TAB);
    }

    #[test]
    fn test_selecting_a_tab_changes_index() {
        let mut tabset = Tabset::new(20);
        tabset.handle(TabMenuEvent::Selected(LOGIN_TAB));
        assert_eq!(tabset.active_tab(), LOGIN_TAB);

        tabset.handle(TabMenuEvent::Selected(3));
        assert_eq!(tabset.active_tab(), 3, "Tabs without a panel are still selectable");
    }

    #[test]
    fn test_out_of_range_selection_is_ignored() {
        let mut tabset = Tabset::new(20);
        tabset.handle(TabMenuEvent::Selected(TAB_LABELS.len()));
        assert_eq!(tabset.active_tab(), HOME_TAB);
    }

    #[test]
    fn test_login_fields_survive_tab_switches() {
        let fixture = Fixture::embedded().unwrap();
        let mut tabset = Tabset::new(20);
        let ctx = egui::Context::default();

        tabset.handle(TabMenuEvent::Selected(LOGIN_TAB));
        tabset.login_mut().form_mut().user_id = "alice".to_string();
        tabset.login_mut().form_mut().password = "secret".to_string();

        for tab in [HOME_TAB, LOGIN_TAB] {
            tabset.handle(TabMenuEvent::Selected(tab));
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| tabset.show(ui, &fixture));
            });
        }

        assert_eq!(tabset.active_tab(), LOGIN_TAB);
        assert_eq!(tabset.login().form().user_id, "alice");
        assert_eq!(tabset.login().form().password, "secret");
    }

    #[test]
    fn test_home_filter_survives_tab_switches() {
        let fixture = Fixture::embedded().unwrap();
        let mut tabset = Tabset::new(20);
        tabset.home.handle(HomeTabEvent::NodeSelected("germany".to_string()), &fixture.locations);

        tabset.handle(TabMenuEvent::Selected(LOGIN_TAB));
        tabset.handle(TabMenuEvent::Selected(HOME_TAB));

        assert!(tabset.home().filter().is_some());
    }

    #[test]
    fn test_login_round_trip_through_modal() {
        let mut tabset = Tabset::new(20);
        tabset.handle(TabMenuEvent::Selected(LOGIN_TAB));
        tabset.login_mut().form_mut().user_id = "alice".to_string();
        tabset.login_mut().form_mut().password = "secret".to_string();

        tabset.login_mut().handle(LoginTabEvent::Submit);
        assert_eq!(tabset.login().modal(), ModalState::Open);
        assert_eq!(
            tabset.login().form().echo_pairs(),
            [("User ID", "alice"), ("Password", "secret")]
        );

        tabset.login_mut().handle(LoginTabEvent::CloseModal);
        assert_eq!(tabset.login().form().user_id, "");
        assert_eq!(tabset.login().form().password, "");
    }

    #[test]
    fn test_open_login_modal_blocks_tab_menu() {
        let fixture = Fixture::embedded().unwrap();
        let ctx = egui::Context::default();
        let home_label = home_label_pos(&ctx, &fixture);

        let mut tabset = Tabset::new(20);
        tabset.handle(TabMenuEvent::Selected(LOGIN_TAB));
        tabset.login_mut().form_mut().user_id = "alice".to_string();
        tabset.login_mut().form_mut().password = "secret".to_string();
        tabset.login_mut().handle(LoginTabEvent::Submit);
        assert!(tabset.modal_open());

        click(&ctx, &mut tabset, &fixture, home_label);

        assert_eq!(tabset.active_tab(), LOGIN_TAB);
        assert_eq!(tabset.login().modal(), ModalState::Open);
        assert_eq!(tabset.login().form().user_id, "alice");
        assert_eq!(tabset.login().form().password, "secret");
    }

    #[test]
    fn test_open_row_modal_blocks_tab_menu() {
        let fixture = Fixture::embedded().unwrap();
        let ctx = egui::Context::default();

        let mut clicks_that_switch = 0;
        for pos in column(20.0, 0.0, 150.0, 4.0) {
            let mut tabset = Tabset::new(20);
            tabset.home.customers_mut().handle_action(1, ActionRowEvent::View);
            assert!(tabset.modal_open());

            click(&ctx, &mut tabset, &fixture, pos);

            if tabset.active_tab() != HOME_TAB {
                clicks_that_switch += 1;
            }
            assert_eq!(tabset.home().customers().action_row(1).map(|r| r.modal()), Some(ModalState::Open));
        }

        assert_eq!(clicks_that_switch, 0, "No tab label reacts while a row modal is open");
    }

    #[test]
    fn test_menu_works_again_after_modal_closes() {
        let fixture = Fixture::embedded().unwrap();
        let ctx = egui::Context::default();
        let home_label = home_label_pos(&ctx, &fixture);

        let mut tabset = Tabset::new(20);
        tabset.handle(TabMenuEvent::Selected(LOGIN_TAB));
        tabset.login_mut().handle(LoginTabEvent::Submit);
        tabset.login_mut().handle(LoginTabEvent::CloseModal);
        assert!(!tabset.modal_open());

        click(&ctx, &mut tabset, &fixture, home_label);

        assert_eq!(tabset.active_tab(), HOME_TAB);
    }
}
