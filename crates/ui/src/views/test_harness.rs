use std::sync::Arc;

use course_core::model::Course;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{PreviewState, sample_course};

use super::CourseOverview;
use super::preview::{CoursePreview, PreviewDialog};
use crate::context::{UiApp, build_app_context};

struct TestApp {
    course: Arc<Course>,
    open_preview_on_launch: bool,
}

impl UiApp for TestApp {
    fn course(&self) -> Arc<Course> {
        Arc::clone(&self.course)
    }

    fn open_preview_on_launch(&self) -> bool {
        self.open_preview_on_launch
    }
}

#[derive(Clone, PartialEq)]
pub enum ViewKind {
    /// Author page; preview opens on mount when `open_on_launch` is set.
    Overview { open_on_launch: bool },
    /// Bare preview component.
    Preview { open: bool },
    /// Preview dialog resumed from a given state.
    Dialog(PreviewState),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let course = props.app.course();
    match props.view {
        ViewKind::Overview { .. } => rsx! { CourseOverview {} },
        ViewKind::Preview { open } => rsx! {
            CoursePreview { course, open, on_close: move |_| {} }
        },
        ViewKind::Dialog(initial_state) => rsx! {
            PreviewDialog { course, initial_state, on_close: move |_| {} }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub course: Arc<Course>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let course = Arc::new(sample_course().expect("sample course"));
    setup_view_harness_with_course(view, course)
}

pub fn setup_view_harness_with_course(view: ViewKind, course: Arc<Course>) -> ViewHarness {
    let open_preview_on_launch = matches!(
        view,
        ViewKind::Overview {
            open_on_launch: true
        }
    );
    let app = Arc::new(TestApp {
        course: Arc::clone(&course),
        open_preview_on_launch,
    });
    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app, view });
    ViewHarness { dom, course }
}
