use dioxus::prelude::*;

use super::preview::CoursePreview;
use crate::context::AppContext;
use crate::vm::map_course_overview;

/// Author-side course page hosting the preview launcher.
#[component]
pub fn CourseOverview() -> Element {
    let ctx = use_context::<AppContext>();
    let course = ctx.course();
    let overview = map_course_overview(&course);
    let mut preview_open = use_signal(|| ctx.take_open_preview_on_launch());

    let facts = overview.facts.iter().map(|(label, value)| {
        rsx! {
            div { class: "overview-fact", key: "{label}",
                dt { "{label}" }
                dd { "{value}" }
            }
        }
    });

    rsx! {
        div { class: "page course-overview",
            header { class: "overview-header",
                h1 { "{overview.title}" }
                if let Some(subtitle) = overview.subtitle.as_ref() {
                    p { class: "overview-subtitle", "{subtitle}" }
                }
            }
            if let Some(description) = overview.description.as_ref() {
                p { class: "overview-description", "{description}" }
            }
            dl { class: "overview-facts", {facts} }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| preview_open.set(true),
                "Preview course"
            }
            CoursePreview {
                course,
                open: preview_open(),
                on_close: move |_| {
                    tracing::info!("course preview closed");
                    preview_open.set(false);
                },
            }
        }
    }
}
