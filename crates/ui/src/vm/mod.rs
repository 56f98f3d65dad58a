mod lesson_vm;
mod markdown_vm;
mod preview_vm;

pub use lesson_vm::{
    FormFieldVm, FormVm, ImageVm, LessonBodyVm, QuizOptionVm, QuizQuestionVm, QuizVm, VideoSource,
    VideoVm, map_lesson_body,
};
pub use markdown_vm::{lesson_excerpt, lesson_markup_to_html, normalize_markup, sanitize_html};
pub use preview_vm::{
    CourseOverviewVm, HomeVm, LessonPaneVm, LessonRowVm, ModuleRowVm, PrimaryAction,
    map_course_overview, map_home, map_lesson_pane,
};
