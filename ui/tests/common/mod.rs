use egui_kittest::Harness;
use zetable_ui::{DemoConfig, ZeTableApp};

/// Window size wide enough for desktop mode.
pub const DESKTOP_SIZE: egui::Vec2 = egui::vec2(1280.0, 720.0);

/// Window size at or below the mobile breakpoint.
#[allow(unused)]
pub const MOBILE_SIZE: egui::Vec2 = egui::vec2(800.0, 600.0);

pub struct TestCtx<'a, T> {
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }
}

impl<'a, T> TestCtx<'a, T> {
    #[allow(unused)]
    pub fn new(size: egui::Vec2, app: impl FnMut(&mut egui::Ui, &mut T) + 'a, state: T) -> Self {
        let harness = Harness::builder().with_size(size).build_ui_state(app, state);
        Self { harness }
    }
}

impl TestCtx<'static, ZeTableApp> {
    #[allow(unused)]
    pub fn new_app(config: DemoConfig) -> Self {
        Self::new_app_with_size(config, DESKTOP_SIZE)
    }

    #[allow(unused)]
    pub fn new_app_with_size(config: DemoConfig, size: egui::Vec2) -> Self {
        let app = ZeTableApp::new(config);
        let harness = Harness::builder()
            .with_size(size)
            .build_eframe(|_| app);
        Self { harness }
    }
}
