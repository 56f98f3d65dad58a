use dioxus::prelude::*;
use services::LessonNavigator;

use crate::vm::{HomeVm, LessonRowVm, ModuleRowVm, PrimaryAction};

#[component]
pub(super) fn HomePane(home: HomeVm, navigator: Signal<LessonNavigator>) -> Element {
    let mut navigator = navigator;
    let overview = home.overview.clone();
    let facts = overview.facts.iter().map(|(label, value)| {
        rsx! {
            div { class: "preview-fact", key: "{label}",
                dt { "{label}" }
                dd { "{value}" }
            }
        }
    });

    rsx! {
        section { class: "preview-home",
            div { class: "preview-hero",
                if let Some(src) = overview.thumbnail.as_ref() {
                    img { class: "preview-thumbnail", src: "{src}", alt: "{overview.title}" }
                }
                div { class: "preview-hero-text",
                    if let Some(subtitle) = overview.subtitle.as_ref() {
                        p { class: "preview-subtitle", "{subtitle}" }
                    }
                    if let Some(description) = overview.description.as_ref() {
                        p { class: "preview-description", "{description}" }
                    }
                    dl { class: "preview-facts", {facts} }
                }
            }
            div { class: "preview-progress-row",
                ProgressBar { percentage: home.percentage, label: home.progress_label.clone() }
                if let Some(action) = home.primary_action {
                    button {
                        class: "btn btn-primary preview-primary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut nav = navigator.write();
                            if action == PrimaryAction::Start {
                                nav.start_course();
                            } else {
                                nav.continue_course();
                            }
                        },
                        "{action.label()}"
                    }
                }
            }
            if home.modules.is_empty() {
                p { class: "preview-empty", "This course has no modules yet." }
            }
            ol { class: "preview-modules",
                for module in home.modules.iter() {
                    ModuleSection { key: "{module.id}", module: module.clone(), navigator }
                }
            }
        }
    }
}

#[component]
pub(super) fn ProgressBar(percentage: u8, label: String) -> Element {
    rsx! {
        div { class: "progress",
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {percentage}%" }
            }
            span { class: "progress-percentage", "{percentage}% complete" }
            span { class: "progress-label", "{label}" }
        }
    }
}

#[component]
fn ModuleSection(module: ModuleRowVm, navigator: Signal<LessonNavigator>) -> Element {
    rsx! {
        li { class: "preview-module",
            div { class: "preview-module-header",
                h3 { class: "preview-module-title", "Module {module.number}: {module.title}" }
                span { class: "preview-module-count", "{module.completed_label}" }
            }
            if let Some(description) = module.description.as_ref() {
                p { class: "preview-module-description", "{description}" }
            }
            if module.lessons.is_empty() {
                p { class: "preview-module-empty", "No lessons in this module yet." }
            } else {
                ul { class: "preview-lessons",
                    for lesson in module.lessons.iter() {
                        LessonRow { key: "{lesson.lesson_id}", lesson: lesson.clone(), navigator }
                    }
                }
            }
        }
    }
}

#[component]
fn LessonRow(lesson: LessonRowVm, navigator: Signal<LessonNavigator>) -> Element {
    let mut navigator = navigator;
    let module_id = lesson.module_id;
    let lesson_id = lesson.lesson_id;
    let mut row_class = String::from("preview-lesson-row");
    if lesson.is_complete {
        row_class.push_str(" is-complete");
    }
    if lesson.is_current {
        row_class.push_str(" is-current");
    }
    let marker = if lesson.is_complete { "✓" } else { "○" };

    rsx! {
        li { class: "{row_class}",
            button {
                class: "preview-lesson-button",
                r#type: "button",
                onclick: move |_| navigator.write().start_lesson(module_id, lesson_id),
                span { class: "preview-lesson-marker", "{marker}" }
                span { class: "preview-lesson-title", "{lesson.title}" }
                span { class: "lesson-kind", "{lesson.kind_label}" }
            }
            if let Some(excerpt) = lesson.excerpt.as_ref() {
                p { class: "preview-lesson-excerpt", "{excerpt}" }
            }
        }
    }
}
