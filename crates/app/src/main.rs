use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use course_core::model::Course;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{load_course_from_path, sample_course};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCoursePath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCoursePath { raw } => write!(f, "invalid --course value: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    course: Arc<Course>,
    open_preview_on_launch: bool,
}

impl UiApp for DesktopApp {
    fn course(&self) -> Arc<Course> {
        Arc::clone(&self.course)
    }

    fn open_preview_on_launch(&self) -> bool {
        self.open_preview_on_launch
    }
}

#[derive(Debug, Default)]
struct Args {
    course_path: Option<PathBuf>,
    open_preview: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--course <path.json>] [--open-preview]");
    eprintln!();
    eprintln!("Without --course the bundled sample course is shown.");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  COURSE_PREVIEW_FILE  default for --course");
    eprintln!("  RUST_LOG             log filter (default: info)");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            course_path: std::env::var("COURSE_PREVIEW_FILE")
                .ok()
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
            open_preview: false,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--course" => {
                    let value = require_value(args, "--course")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidCoursePath { raw: value });
                    }
                    parsed.course_path = Some(PathBuf::from(value));
                }
                "--open-preview" => parsed.open_preview = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }
}

type InitError = Box<dyn std::error::Error + Send + Sync>;

fn init_tracing() -> Result<(), InitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,app=info,ui=info,services=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
}

fn load_course(args: &Args) -> Result<Course, Box<dyn std::error::Error>> {
    match args.course_path.as_deref() {
        Some(path) => Ok(load_course_from_path(path)?),
        None => {
            tracing::info!("no course file configured, using the sample course");
            Ok(sample_course()?)
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Logging is optional; the preview still launches without it.
    if let Err(err) = init_tracing() {
        eprintln!("logging disabled: {err}");
    }

    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let course = load_course(&args)?;
    tracing::info!(
        course = %course.title(),
        modules = course.modules().len(),
        lessons = course.total_lessons(),
        open_preview = args.open_preview,
        "launching course preview"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        course: Arc::new(course),
        open_preview_on_launch: args.open_preview,
    });
    let context = build_app_context(&app);

    // tao can default to always-on-top in some macOS dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Course Preview")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
