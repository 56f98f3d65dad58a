use course_core::model::FieldKind;
use dioxus::prelude::*;

use crate::vm::{
    FormFieldVm, FormVm, ImageVm, LessonBodyVm, QuizOptionVm, QuizVm, VideoSource, VideoVm,
};

/// Renders one lesson body. Forms and quizzes are display-only.
#[component]
pub fn LessonBody(body: LessonBodyVm) -> Element {
    match body {
        LessonBodyVm::Text { html } if html.trim().is_empty() => rsx! {
            EmptyBody { message: "This lesson has no text yet." }
        },
        LessonBodyVm::Quiz(quiz) if quiz.questions.is_empty() => rsx! {
            EmptyBody { message: "This quiz has no questions yet." }
        },
        LessonBodyVm::Form(form) if form.fields.is_empty() => rsx! {
            EmptyBody { message: "This form has no fields yet." }
        },
        LessonBodyVm::Text { html } => rsx! {
            div { class: "lesson-text", dangerous_inner_html: "{html}" }
        },
        LessonBodyVm::Image(image) => rsx! { ImageBody { image } },
        LessonBodyVm::Video(video) => rsx! { VideoBody { video } },
        LessonBodyVm::Quiz(quiz) => rsx! { QuizBody { quiz } },
        LessonBodyVm::Form(form) => rsx! { FormBody { form } },
    }
}

#[component]
fn EmptyBody(message: &'static str) -> Element {
    rsx! {
        p { class: "lesson-empty", "{message}" }
    }
}

#[component]
fn ImageBody(image: ImageVm) -> Element {
    rsx! {
        figure { class: "lesson-image",
            img { src: "{image.src}", alt: "{image.alt}" }
            if let Some(caption) = image.caption.as_ref() {
                figcaption { "{caption}" }
            }
        }
    }
}

#[component]
fn VideoBody(video: VideoVm) -> Element {
    rsx! {
        div { class: "lesson-video",
            match &video.source {
                VideoSource::Embed { src } => rsx! {
                    iframe {
                        class: "lesson-video-frame",
                        src: "{src}",
                        title: "Lesson video",
                        allow: "accelerometer; encrypted-media; picture-in-picture; fullscreen",
                    }
                },
                VideoSource::Native { src } => rsx! {
                    video { class: "lesson-video-player", src: "{src}", controls: true }
                },
            }
            if let Some(duration) = video.duration_label.as_ref() {
                p { class: "lesson-video-duration", "{duration}" }
            }
        }
    }
}

#[component]
fn QuizBody(quiz: QuizVm) -> Element {
    rsx! {
        div { class: "lesson-quiz",
            p { class: "lesson-note", "Preview: answers are shown for reference and are not scored." }
            ol { class: "quiz-questions",
                for question in quiz.questions.iter() {
                    li { class: "quiz-question", key: "{question.number}",
                        p { class: "quiz-prompt", "{question.number}. {question.prompt}" }
                        if question.options.is_empty() {
                            p { class: "lesson-empty", "No answer options yet." }
                        } else {
                            ul { class: "quiz-options",
                                for option in question.options.iter() {
                                    QuizOption { key: "{option.letter}", option: option.clone() }
                                }
                            }
                        }
                        if let Some(explanation) = question.explanation.as_ref() {
                            p { class: "quiz-explanation", "{explanation}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuizOption(option: QuizOptionVm) -> Element {
    let class = if option.is_correct {
        "quiz-option is-correct"
    } else {
        "quiz-option"
    };
    rsx! {
        li { class: "{class}",
            span { class: "quiz-letter", "{option.letter}" }
            span { class: "quiz-text", "{option.text}" }
            if option.is_correct {
                span { class: "quiz-correct", "Correct answer" }
            }
        }
    }
}

#[component]
fn FormBody(form: FormVm) -> Element {
    rsx! {
        form { class: "lesson-form",
            p { class: "lesson-note", "Preview: this form is shown as learners will see it and cannot be submitted." }
            for field in form.fields.iter() {
                FormControl { key: "{field.key}", field: field.clone() }
            }
        }
    }
}

#[component]
fn FormControl(field: FormFieldVm) -> Element {
    let id = field.key.clone();
    let control = match field.kind {
        FieldKind::Text => rsx! {
            input {
                id: "{id}",
                r#type: "text",
                placeholder: "{field.placeholder}",
                disabled: true,
            }
        },
        FieldKind::Textarea => rsx! {
            textarea { id: "{id}", placeholder: "{field.placeholder}", disabled: true }
        },
        kind if kind.needs_options() && field.options.is_empty() => rsx! {
            p { class: "lesson-empty", id: "{id}", "No choices yet." }
        },
        FieldKind::Select => rsx! {
            select { id: "{id}", disabled: true,
                option { value: "", "Select an option" }
                for choice in field.options.iter() {
                    option { key: "{choice}", value: "{choice}", "{choice}" }
                }
            }
        },
        FieldKind::Checkbox | FieldKind::Radio if !field.options.is_empty() => {
            let input_type = field.kind.as_str();
            rsx! {
                div { class: "form-choices", id: "{id}",
                    for (index, choice) in field.options.iter().enumerate() {
                        label { class: "form-choice", key: "{index}",
                            input {
                                r#type: "{input_type}",
                                name: "{id}",
                                value: "{choice}",
                                disabled: true,
                            }
                            span { "{choice}" }
                        }
                    }
                }
            }
        }
        FieldKind::Checkbox | FieldKind::Radio => {
            let input_type = field.kind.as_str();
            rsx! {
                input { id: "{id}", r#type: "{input_type}", disabled: true }
            }
        }
    };

    rsx! {
        div { class: "form-field",
            label { class: "form-label", r#for: "{id}",
                "{field.label}"
                if field.required {
                    span { class: "form-required", " *" }
                }
            }
            {control}
        }
    }
}
