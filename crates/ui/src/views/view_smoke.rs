use std::sync::Arc;

use course_core::model::{
    Course, CourseId, CourseMeta, FieldKind, FormContent, FormField, Lesson, LessonContent,
    LessonCursor, LessonId, Module, ModuleId, QuizContent, QuizQuestion, TextContent,
};
use services::PreviewState;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_course};

fn render(view: ViewKind) -> String {
    let mut harness = setup_view_harness(view);
    harness.rebuild();
    harness.render()
}

fn lesson_view(module: u64, lesson: u64) -> String {
    render(ViewKind::Dialog(PreviewState::at(LessonCursor::new(
        ModuleId::new(module),
        LessonId::new(lesson),
    ))))
}

#[test]
fn closed_preview_renders_nothing() {
    let html = render(ViewKind::Preview { open: false });
    assert!(!html.contains("preview-dialog"), "unexpected dialog in {html}");
    assert!(!html.contains("Getting Started"), "unexpected content in {html}");
}

#[test]
fn open_preview_starts_on_course_home() {
    let html = render(ViewKind::Preview { open: true });
    assert!(html.contains("preview-dialog"), "missing dialog in {html}");
    assert!(html.contains("Digital Photography Fundamentals"), "missing title in {html}");
    assert!(html.contains("Module 1: Getting Started"), "missing module in {html}");
    assert!(html.contains("Module 3: Wrap-up"), "missing module in {html}");
    assert!(html.contains("0% complete"), "missing progress in {html}");
    assert!(html.contains("0 of 7 lessons completed"), "missing progress label in {html}");
    assert!(html.contains("Start course"), "missing primary action in {html}");
    assert!(html.contains("Close"), "missing close button in {html}");
}

#[test]
fn overview_keeps_preview_closed_until_requested() {
    let html = render(ViewKind::Overview {
        open_on_launch: false,
    });
    assert!(html.contains("Preview course"), "missing launcher in {html}");
    assert!(html.contains("Beginner"), "missing level fact in {html}");
    assert!(!html.contains("preview-dialog"), "unexpected dialog in {html}");
}

#[test]
fn overview_opens_preview_on_launch_when_configured() {
    let html = render(ViewKind::Overview {
        open_on_launch: true,
    });
    assert!(html.contains("preview-dialog"), "missing dialog in {html}");
    assert!(html.contains("Start course"), "missing primary action in {html}");
}

#[test]
fn text_lesson_renders_markup_and_navigation() {
    let html = lesson_view(1, 1);
    assert!(html.contains("<h1>Welcome to the course</h1>"), "missing heading in {html}");
    assert!(html.contains("<strong>fundamentals</strong>"), "missing emphasis in {html}");
    assert!(html.contains("Lesson 1 of 7"), "missing position in {html}");
    assert!(html.contains("Mark complete"), "missing toggle in {html}");
    assert!(html.contains("Back to course"), "missing back button in {html}");
    assert!(html.contains("Next"), "missing next button in {html}");
}

#[test]
fn completed_lesson_shows_completed_toggle() {
    let state = PreviewState::at(LessonCursor::new(ModuleId::new(1), LessonId::new(2)))
        .with_completed([LessonId::new(2)]);
    let html = render(ViewKind::Dialog(state));
    assert!(html.contains("Completed"), "missing completed toggle in {html}");
    assert!(html.contains("Body, lens mount, sensor and viewfinder"), "missing caption in {html}");
    assert!(html.contains("<figcaption"), "missing figcaption in {html}");
}

#[test]
fn hosted_video_is_embedded() {
    let html = lesson_view(1, 3);
    assert!(html.contains("<iframe"), "missing iframe in {html}");
    assert!(
        html.contains("https://www.youtube.com/embed/V7z7BAZdt2M"),
        "missing embed url in {html}"
    );
    assert!(html.contains("Duration: 8:12"), "missing duration in {html}");
}

#[test]
fn other_video_plays_natively() {
    let html = lesson_view(2, 5);
    assert!(html.contains("<video"), "missing video element in {html}");
    assert!(html.contains("shutter-speed.mp4"), "missing source in {html}");
    assert!(!html.contains("<iframe"), "unexpected iframe in {html}");
}

#[test]
fn quiz_highlights_correct_answers() {
    let html = lesson_view(2, 6);
    assert!(html.contains("Which setting controls depth of field?"), "missing prompt in {html}");
    assert!(html.contains("Correct answer"), "missing answer badge in {html}");
    assert!(html.contains("is-correct"), "missing correct class in {html}");
    assert!(html.contains("not scored"), "missing preview note in {html}");
}

#[test]
fn form_renders_disabled_controls() {
    let html = lesson_view(3, 7);
    assert!(html.contains("Your name"), "missing label in {html}");
    assert!(html.contains("form-required"), "missing required marker in {html}");
    assert!(html.contains("<textarea"), "missing textarea in {html}");
    assert!(html.contains("<select"), "missing select in {html}");
    assert!(html.contains("Mirrorless"), "missing select option in {html}");
    assert!(html.contains("Lesson 7 of 7"), "missing position in {html}");
}

#[test]
fn stale_cursor_shows_missing_lesson() {
    let html = lesson_view(1, 7);
    assert!(html.contains("no longer available"), "missing notice in {html}");
}

#[test]
fn empty_module_is_listed_without_lessons() {
    let course = Course::new(
        CourseMeta::new(CourseId::new(9), "Drafts"),
        vec![
            Module::new(ModuleId::new(1), "Planned", Vec::new()),
            Module::new(
                ModuleId::new(2),
                "Ready",
                vec![Lesson::new(
                    LessonId::new(1),
                    "Only lesson",
                    LessonContent::Text(TextContent::new("Hello")),
                )],
            ),
        ],
    )
    .unwrap();
    let mut harness =
        setup_view_harness_with_course(ViewKind::Preview { open: true }, Arc::new(course));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("No lessons in this module yet."), "missing empty note in {html}");
    assert!(html.contains("Only lesson"), "missing lesson row in {html}");
    assert_eq!(harness.course.total_lessons(), 1);
}

fn draft_course() -> Arc<Course> {
    let lessons = vec![
        Lesson::new(
            LessonId::new(1),
            "Outline",
            LessonContent::Text(TextContent::new("   ")),
        ),
        Lesson::new(
            LessonId::new(2),
            "Check",
            LessonContent::Quiz(QuizContent::new(Vec::new())),
        ),
        Lesson::new(
            LessonId::new(3),
            "Survey",
            LessonContent::Form(FormContent::new(Vec::new())),
        ),
        Lesson::new(
            LessonId::new(4),
            "Half done",
            LessonContent::Quiz(QuizContent::new(vec![QuizQuestion::new(
                "Coming soon",
                Vec::new(),
                0,
            )])),
        ),
        Lesson::new(
            LessonId::new(5),
            "Choices",
            LessonContent::Form(FormContent::new(vec![FormField::new(
                "Pick one",
                FieldKind::Radio,
            )])),
        ),
    ];
    Arc::new(
        Course::new(
            CourseMeta::new(CourseId::new(4), "Draft course"),
            vec![Module::new(ModuleId::new(1), "Drafts", lessons)],
        )
        .unwrap(),
    )
}

fn draft_lesson_view(lesson: u64) -> String {
    let state = PreviewState::at(LessonCursor::new(ModuleId::new(1), LessonId::new(lesson)));
    let mut harness = setup_view_harness_with_course(ViewKind::Dialog(state), draft_course());
    harness.rebuild();
    harness.render()
}

#[test]
fn draft_lessons_render_empty_notes() {
    let cases = [
        (1, "This lesson has no text yet."),
        (2, "This quiz has no questions yet."),
        (3, "This form has no fields yet."),
        (4, "No answer options yet."),
        (5, "No choices yet."),
    ];
    for (lesson, note) in cases {
        let html = draft_lesson_view(lesson);
        assert!(html.contains(note), "missing {note:?} for lesson {lesson} in {html}");
        assert!(html.contains("Mark complete"), "missing toggle in {html}");
    }
}
