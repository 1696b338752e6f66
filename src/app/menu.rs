use crate::app::route::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Home,
    Register,
    Login,
    About,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Home,
        MenuItem::Register,
        MenuItem::Login,
        MenuItem::About,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Home => "Home",
            MenuItem::Register => "Register",
            MenuItem::Login => "Login",
            MenuItem::About => "About",
        }
    }

    /// Screen the item navigates to. About has no screen of its own.
    pub fn target(&self) -> Option<Route> {
        match self {
            MenuItem::Home => Some(Route::Landing),
            MenuItem::Register => Some(Route::Register),
            MenuItem::Login => Some(Route::Auth),
            MenuItem::About => None,
        }
    }
}

/// Navigation overlay toggled over any screen.
#[derive(Debug, Default)]
pub struct MenuState {
    pub visible: bool,
    pub selected: usize,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        if self.visible {
            self.selected = 0;
        }
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < MenuItem::ALL.len() {
            self.selected += 1;
        }
    }

    pub fn selected_item(&self) -> MenuItem {
        MenuItem::ALL[self.selected.min(MenuItem::ALL.len() - 1)]
    }
}
