use crate::config::Config;
use crate::data::Fixture;
use crate::ui::components::Tabset;
use crate::ui::{setup_styles, APP_PADDING};
use eframe::egui;

pub struct CustomerExplorerApp {
    fixture: Fixture,
    tabset: Tabset,
}

impl CustomerExplorerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &Config) -> Self {
        setup_styles(&cc.egui_ctx);
        Self::with_config(config)
    }

    /// Builds the app state without a window.
    pub fn with_config(config: &Config) -> Self {
        let fixture = Fixture::load(config.fixture_dir.as_deref()).unwrap_or_else(|e| {
            tracing::error!("Failed to load fixture, starting with no data: {:#}", e);
            Fixture::default()
        });

        Self {
            fixture,
            tabset: Tabset::new(config.page_size),
        }
    }

    pub fn fixture(&self) -> &Fixture {
        &self.fixture
    }

    pub fn tabset(&self) -> &Tabset {
        &self.tabset
    }

    /// Lays out one frame: the tab set inside the page padding.
    pub fn ui(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).inner_margin(APP_PADDING))
            .show(ctx, |ui| {
                egui::ScrollArea::both()
                    .id_source("app_scroll")
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        self.tabset.show(ui, &self.fixture);
                    });
            });
    }
}

impl eframe::App for CustomerExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
