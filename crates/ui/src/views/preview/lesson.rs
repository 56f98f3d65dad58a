use dioxus::prelude::*;
use services::LessonNavigator;

use super::content::LessonBody;
use crate::vm::LessonPaneVm;

#[component]
pub(super) fn LessonPane(pane: LessonPaneVm, navigator: Signal<LessonNavigator>) -> Element {
    let mut navigator = navigator;
    let lesson_id = pane.lesson_id;
    let (complete_label, complete_class) = if pane.is_complete {
        ("Completed", "btn btn-success preview-complete is-complete")
    } else {
        ("Mark complete", "btn btn-secondary preview-complete")
    };

    rsx! {
        article { class: "preview-lesson",
            button {
                class: "btn btn-link preview-back",
                r#type: "button",
                onclick: move |_| navigator.write().return_home(),
                "← Back to course"
            }
            header { class: "preview-lesson-header",
                p { class: "preview-breadcrumb", "{pane.module_title}" }
                div { class: "preview-lesson-heading",
                    span { class: "lesson-kind", "{pane.kind_label}" }
                    h2 { class: "preview-lesson-title", "{pane.title}" }
                }
                if let Some(position) = pane.position_label.as_ref() {
                    p { class: "preview-position", "{position}" }
                }
            }
            div { class: "preview-lesson-body",
                LessonBody { body: pane.body.clone() }
            }
            footer { class: "preview-lesson-footer",
                button {
                    class: "btn btn-secondary preview-previous",
                    r#type: "button",
                    disabled: !pane.has_previous,
                    onclick: move |_| {
                        navigator.write().go_to_previous_lesson();
                    },
                    "Previous"
                }
                button {
                    class: "{complete_class}",
                    r#type: "button",
                    onclick: move |_| {
                        navigator.write().toggle_lesson_complete(lesson_id);
                    },
                    "{complete_label}"
                }
                button {
                    class: "btn btn-primary preview-next",
                    r#type: "button",
                    disabled: !pane.has_next,
                    onclick: move |_| {
                        navigator.write().go_to_next_lesson();
                    },
                    "Next"
                }
            }
        }
    }
}

#[component]
pub(super) fn MissingLesson(navigator: Signal<LessonNavigator>) -> Element {
    let mut navigator = navigator;
    rsx! {
        div { class: "preview-missing",
            p { "This lesson is no longer available." }
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| navigator.write().return_home(),
                "← Back to course"
            }
        }
    }
}
