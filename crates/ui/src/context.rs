use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use course_core::model::Course;

pub trait UiApp: Send + Sync {
    fn course(&self) -> Arc<Course>;
    fn open_preview_on_launch(&self) -> bool;
}

#[derive(Clone)]
pub struct AppContext {
    course: Arc<Course>,
    open_preview_on_launch_configured: bool,
    open_preview_on_launch_once: Arc<AtomicBool>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let open_preview_on_launch_configured = app.open_preview_on_launch();
        Self {
            course: app.course(),
            open_preview_on_launch_configured,
            open_preview_on_launch_once: Arc::new(AtomicBool::new(
                open_preview_on_launch_configured,
            )),
        }
    }

    #[must_use]
    pub fn course(&self) -> Arc<Course> {
        Arc::clone(&self.course)
    }

    /// True only for the first caller when launch-time preview was requested.
    #[must_use]
    pub fn take_open_preview_on_launch(&self) -> bool {
        self.open_preview_on_launch_once.swap(false, Ordering::AcqRel)
    }

    #[must_use]
    pub fn open_preview_on_launch_configured(&self) -> bool {
        self.open_preview_on_launch_configured
    }
}

// Provided by the composition root in `crates/app`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
