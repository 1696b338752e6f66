use crate::app::event::FormId;
use crate::app::form::RegistrationForm;
use crate::app::menu::MenuState;
use crate::app::route::Route;
use crate::app::toast::Toasts;
use crate::config::AppConfig;
use crate::registration::flow::FlowState;
use std::time::{Duration, Instant};

pub struct AppState {
    pub config: AppConfig,
    pub route: Route,
    pub menu: MenuState,
    /// Mounted only while the registration screen is shown.
    pub form: Option<RegistrationForm>,
    pub toasts: Toasts,
    pub next_form_id: FormId,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
    /// Confirmation URL to hand off once the terminal is restored.
    pub redirect_to: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig, route: Route) -> Self {
        let toasts = Toasts::new(Duration::from_millis(config.ui.toast_duration_ms));
        let mut state = Self {
            config,
            route: Route::Landing,
            menu: MenuState::default(),
            form: None,
            toasts,
            next_form_id: 1,
            tick_count: 0,
            should_quit: false,
            dirty: true,
            redirect_to: None,
        };
        state.navigate(route);
        state
    }

    pub fn allocate_form_id(&mut self) -> FormId {
        let id = self.next_form_id;
        self.next_form_id += 1;
        id
    }

    /// Switch screens. Entering the registration screen mounts a fresh
    /// form; leaving it discards the draft. Navigating to the current
    /// screen keeps it as is.
    pub fn navigate(&mut self, route: Route) {
        self.menu.close();
        self.dirty = true;
        if route == self.route && (route != Route::Register || self.form.is_some()) {
            return;
        }
        tracing::debug!(from = self.route.path(), to = route.path(), "Navigate");
        self.form = if route == Route::Register {
            Some(RegistrationForm::new(self.allocate_form_id()))
        } else {
            None
        };
        self.route = route;
    }

    /// The mounted form, if it is the one identified by `form_id`.
    pub fn form_mut(&mut self, form_id: FormId) -> Option<&mut RegistrationForm> {
        self.form.as_mut().filter(|f| f.id == form_id)
    }

    pub fn notify_success(&mut self, text: impl Into<String>) {
        self.toasts.success(text, Instant::now());
        self.dirty = true;
    }

    pub fn notify_error(&mut self, text: impl Into<String>) {
        self.toasts.error(text, Instant::now());
        self.dirty = true;
    }

    pub fn status_line(&self) -> String {
        let mut s = format!("Udgosh 3.0 | {}", self.route.path());
        match self.form.as_ref().map(|f| f.flow.state()) {
            Some(FlowState::Submitting) => s.push_str(" | Submitting..."),
            Some(FlowState::Succeeded) => s.push_str(" | Submitted"),
            Some(FlowState::Editing) | None => {}
        }
        s
    }
}
