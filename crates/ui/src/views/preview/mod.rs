mod content;
mod home;
mod lesson;

use std::sync::Arc;

use dioxus::prelude::*;
use course_core::model::Course;
use services::{LessonNavigator, PreviewState, ViewMode};

use crate::vm::{map_home, map_lesson_pane};

pub use content::LessonBody;
use home::HomePane;
use lesson::{LessonPane, MissingLesson};

/// Learner-facing course preview.
///
/// Renders nothing while `open` is false. The dialog is mounted fresh on every
/// open, so progress never carries over between sessions.
#[component]
pub fn CoursePreview(course: Arc<Course>, open: bool, on_close: EventHandler) -> Element {
    if !open {
        return rsx! {};
    }
    rsx! {
        PreviewDialog { course, initial_state: PreviewState::default(), on_close }
    }
}

#[component]
pub(crate) fn PreviewDialog(
    course: Arc<Course>,
    initial_state: PreviewState,
    on_close: EventHandler,
) -> Element {
    let navigator = use_signal(move || LessonNavigator::with_state(course, initial_state));

    let (view, home, pane) = {
        let nav = navigator.read();
        (nav.view_mode(), map_home(&nav), map_lesson_pane(&nav))
    };
    let title = home.overview.title.clone();

    rsx! {
        div { class: "preview-backdrop",
            div { class: "preview-dialog", role: "dialog",
                header { class: "preview-bar",
                    span { class: "preview-badge", "Preview" }
                    h2 { class: "preview-course-title", "{title}" }
                    button {
                        class: "btn btn-secondary preview-close",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                }
                div { class: "preview-body",
                    match (view, pane) {
                        (ViewMode::Lesson, Some(pane)) => rsx! {
                            LessonPane { pane, navigator }
                        },
                        (ViewMode::Lesson, None) => rsx! {
                            MissingLesson { navigator }
                        },
                        (ViewMode::Home, _) => rsx! {
                            HomePane { home, navigator }
                        },
                    }
                }
            }
        }
    }
}
