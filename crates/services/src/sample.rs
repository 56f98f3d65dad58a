//! Built-in course shown when no course file is configured.

use course_core::Error;
use course_core::model::{
    Course, CourseId, CourseLevel, CourseMeta, FieldKind, FormContent, FormField, ImageContent,
    Lesson, LessonContent, LessonId, MediaUri, Module, ModuleId, QuizContent, QuizQuestion,
    TextContent, VideoContent,
};

const WELCOME: &str = "\
# Welcome to the course

This course walks through the **fundamentals** of digital photography.

## What you will learn

- How your camera turns light into an image
- The *exposure triangle*: aperture, shutter speed and ISO
- Composition basics you can practise today

### Before you start

1. Charge your camera battery
2. Switch the mode dial to `M`
3. Find a subject near a window
";

const EXPOSURE: &str = "\
# The exposure triangle

Exposure is controlled by three settings that trade off against each other:

- **Aperture**: how wide the lens opens, written as `f/2.8`, `f/8`, ...
- **Shutter speed**: how long the sensor collects light
- **ISO**: how strongly the signal is amplified

Doubling one setting lets you *halve* another and keep the same brightness.
";

/// # Errors
///
/// Returns an error only if the bundled content stops validating.
pub fn sample_course() -> Result<Course, Error> {
    let mut meta = CourseMeta::new(CourseId::new(1), "Digital Photography Fundamentals");
    meta.subtitle = Some("From auto mode to confident manual shooting".to_string());
    meta.description = Some(
        "A short, practical introduction to cameras, exposure and composition.".to_string(),
    );
    meta.category = Some("Photography".to_string());
    meta.level = Some(CourseLevel::Beginner);
    meta.duration = Some("1h 45m".to_string());
    meta.thumbnail = Some(MediaUri::parse(
        "https://images.example.com/courses/photography/cover.jpg",
    )?);

    let getting_started = Module::new(
        ModuleId::new(1),
        "Getting Started",
        vec![
            Lesson::new(
                LessonId::new(1),
                "Welcome",
                LessonContent::Text(TextContent::new(WELCOME)),
            )
            .with_order(1),
            Lesson::new(
                LessonId::new(2),
                "Anatomy of a camera",
                LessonContent::Image(
                    ImageContent::new(MediaUri::parse(
                        "https://images.example.com/courses/photography/camera-anatomy.png",
                    )?)
                    .with_caption("Body, lens mount, sensor and viewfinder"),
                ),
            )
            .with_order(2),
            Lesson::new(
                LessonId::new(3),
                "Your first photo",
                LessonContent::Video(
                    VideoContent::new(MediaUri::parse(
                        "https://www.youtube.com/watch?v=V7z7BAZdt2M",
                    )?)
                    .with_duration("8:12"),
                ),
            )
            .with_order(3),
        ],
    )
    .with_description("Get comfortable with your camera.")
    .with_order(1);

    let exposure = Module::new(
        ModuleId::new(2),
        "Exposure",
        vec![
            Lesson::new(
                LessonId::new(4),
                "The exposure triangle",
                LessonContent::Text(TextContent::new(EXPOSURE)),
            )
            .with_order(1),
            Lesson::new(
                LessonId::new(5),
                "Shutter speed in practice",
                LessonContent::Video(
                    VideoContent::new(MediaUri::parse(
                        "https://media.example.com/photography/shutter-speed.mp4",
                    )?)
                    .with_duration("5:40"),
                ),
            )
            .with_order(2),
            Lesson::new(
                LessonId::new(6),
                "Exposure check",
                LessonContent::Quiz(QuizContent::new(vec![
                    QuizQuestion::new(
                        "Which setting controls depth of field?",
                        vec!["ISO".into(), "Aperture".into(), "White balance".into()],
                        1,
                    )
                    .with_explanation("A wider aperture gives a shallower depth of field."),
                    QuizQuestion::new(
                        "What happens when you raise the ISO?",
                        vec![
                            "The image gets brighter and noisier".into(),
                            "The lens opens wider".into(),
                            "Motion blur increases".into(),
                        ],
                        0,
                    ),
                ])),
            )
            .with_order(3),
        ],
    )
    .with_description("Control how much light reaches the sensor.")
    .with_order(2);

    let wrap_up = Module::new(
        ModuleId::new(3),
        "Wrap-up",
        vec![
            Lesson::new(
                LessonId::new(7),
                "Course feedback",
                LessonContent::Form(FormContent::new(vec![
                    FormField::new("Your name", FieldKind::Text).with_placeholder("Jane Doe"),
                    FormField::new("What did you enjoy most?", FieldKind::Textarea),
                    FormField::new("Which camera do you use?", FieldKind::Select)
                        .with_options(["DSLR", "Mirrorless", "Phone"])
                        .required(),
                    FormField::new("How confident do you feel now?", FieldKind::Radio)
                        .with_options(["Not yet", "Somewhat", "Very"])
                        .required(),
                    FormField::new("Email me about new courses", FieldKind::Checkbox),
                ])),
            )
            .with_order(1),
        ],
    )
    .with_order(3);

    Ok(Course::new(meta, vec![getting_started, exposure, wrap_up])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::model::LessonKind;
    use std::collections::HashSet;

    #[test]
    fn sample_course_covers_every_lesson_kind() {
        let course = sample_course().unwrap();
        let kinds: HashSet<LessonKind> = course.lessons().map(|(_, l)| l.kind()).collect();
        assert_eq!(kinds.len(), 5);
        assert_eq!(course.total_lessons(), 7);
    }
}
