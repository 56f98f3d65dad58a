use course_core::model::{Course, LessonContent, LessonId, ModuleId};
use services::LessonNavigator;

use super::lesson_vm::{LessonBodyVm, map_lesson_body};
use super::markdown_vm::lesson_excerpt;

const EXCERPT_CHARS: usize = 90;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseOverviewVm {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    /// Label/value pairs such as ("Level", "Beginner").
    pub facts: Vec<(&'static str, String)>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimaryAction {
    Start,
    Continue,
    Review,
}

impl PrimaryAction {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Start => "Start course",
            Self::Continue => "Continue",
            Self::Review => "Review course",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonRowVm {
    pub module_id: ModuleId,
    pub lesson_id: LessonId,
    pub title: String,
    pub kind_label: &'static str,
    pub excerpt: Option<String>,
    pub is_complete: bool,
    pub is_current: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleRowVm {
    pub id: ModuleId,
    pub number: usize,
    pub title: String,
    pub description: Option<String>,
    pub completed_label: String,
    pub lessons: Vec<LessonRowVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeVm {
    pub overview: CourseOverviewVm,
    pub percentage: u8,
    pub progress_label: String,
    pub primary_action: Option<PrimaryAction>,
    pub modules: Vec<ModuleRowVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonPaneVm {
    pub lesson_id: LessonId,
    pub module_title: String,
    pub title: String,
    pub kind_label: &'static str,
    pub position_label: Option<String>,
    pub body: LessonBodyVm,
    pub is_complete: bool,
    pub has_previous: bool,
    pub has_next: bool,
}

#[must_use]
pub fn map_course_overview(course: &Course) -> CourseOverviewVm {
    let meta = course.meta();
    let mut facts = Vec::new();
    if let Some(category) = meta.category.as_ref() {
        facts.push(("Category", category.clone()));
    }
    if let Some(level) = meta.level {
        facts.push(("Level", level.to_string()));
    }
    if let Some(duration) = meta.duration.as_ref() {
        facts.push(("Duration", duration.clone()));
    }
    facts.push(("Modules", course.modules().len().to_string()));
    facts.push(("Lessons", course.total_lessons().to_string()));

    CourseOverviewVm {
        title: meta.title.clone(),
        subtitle: meta.subtitle.clone(),
        description: meta.description.clone(),
        thumbnail: meta.thumbnail.as_ref().map(ToString::to_string),
        facts,
    }
}

#[must_use]
pub fn map_home(navigator: &LessonNavigator) -> HomeVm {
    let course = navigator.course();
    let progress = navigator.progress();
    let current = navigator.cursor();

    let primary_action = if progress.total == 0 {
        None
    } else if progress.is_complete {
        Some(PrimaryAction::Review)
    } else if progress.completed == 0 {
        Some(PrimaryAction::Start)
    } else {
        Some(PrimaryAction::Continue)
    };

    let modules = course
        .modules()
        .iter()
        .enumerate()
        .map(|(index, module)| {
            let completed = navigator.module_completed_count(module.id()).unwrap_or(0);
            let lessons = module
                .lessons()
                .iter()
                .map(|lesson| LessonRowVm {
                    module_id: module.id(),
                    lesson_id: lesson.id(),
                    title: lesson.title().to_string(),
                    kind_label: lesson.kind().label(),
                    excerpt: match lesson.content() {
                        LessonContent::Text(text) => lesson_excerpt(text.as_str(), EXCERPT_CHARS),
                        _ => None,
                    },
                    is_complete: navigator.is_lesson_complete(lesson.id()),
                    is_current: current
                        .is_some_and(|c| c.module_id == module.id() && c.lesson_id == lesson.id()),
                })
                .collect();
            ModuleRowVm {
                id: module.id(),
                number: index + 1,
                title: module.title().to_string(),
                description: module.description.clone(),
                completed_label: format!("{completed}/{}", module.lessons().len()),
                lessons,
            }
        })
        .collect();

    HomeVm {
        overview: map_course_overview(course),
        percentage: progress.percentage,
        progress_label: format!(
            "{} of {} lessons completed",
            progress.completed, progress.total
        ),
        primary_action,
        modules,
    }
}

/// `None` when nothing is selected or the selection no longer resolves.
#[must_use]
pub fn map_lesson_pane(navigator: &LessonNavigator) -> Option<LessonPaneVm> {
    let lesson = navigator.selected_lesson()?;
    let module = navigator.current_module()?;
    Some(LessonPaneVm {
        lesson_id: lesson.id(),
        module_title: module.title().to_string(),
        title: lesson.title().to_string(),
        kind_label: lesson.kind().label(),
        position_label: navigator
            .lesson_position()
            .map(|(index, total)| format!("Lesson {index} of {total}")),
        body: map_lesson_body(lesson),
        is_complete: navigator.is_lesson_complete(lesson.id()),
        has_previous: navigator.has_previous_lesson(),
        has_next: navigator.has_next_lesson(),
    })
}
