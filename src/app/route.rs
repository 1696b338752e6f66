/// Screens the client can show, addressed by the site's URL paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Register,
    Auth,
    NotFound(String),
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = trimmed.trim_end_matches('/');
        match normalized {
            "" => Route::Landing,
            "/register" | "register" => Route::Register,
            "/auth" | "auth" => Route::Auth,
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Landing => "/",
            Route::Register => "/register",
            Route::Auth => "/auth",
            Route::NotFound(path) => path,
        }
    }
}
