use course_core::model::{
    FieldKind, FormContent, ImageContent, Lesson, LessonContent, QuizContent, VideoContent,
};

use super::markdown_vm::lesson_markup_to_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LessonBodyVm {
    Text { html: String },
    Image(ImageVm),
    Video(VideoVm),
    Quiz(QuizVm),
    Form(FormVm),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageVm {
    pub src: String,
    pub alt: String,
    pub caption: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VideoSource {
    /// Known hosting site, shown in an iframe.
    Embed { src: String },
    /// Anything else, played by a native `<video>` element.
    Native { src: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoVm {
    pub source: VideoSource,
    pub duration_label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    /// "A" to "Z", then the 1-based position for longer lists.
    pub letter: String,
    pub text: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestionVm {
    pub number: usize,
    pub prompt: String,
    pub options: Vec<QuizOptionVm>,
    pub explanation: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub questions: Vec<QuizQuestionVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormFieldVm {
    /// DOM id, unique within the lesson.
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: String,
    pub options: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormVm {
    pub fields: Vec<FormFieldVm>,
}

#[must_use]
pub fn map_lesson_body(lesson: &Lesson) -> LessonBodyVm {
    match lesson.content() {
        LessonContent::Text(text) => LessonBodyVm::Text {
            html: lesson_markup_to_html(text.as_str()),
        },
        LessonContent::Image(image) => LessonBodyVm::Image(map_image(lesson, image)),
        LessonContent::Video(video) => LessonBodyVm::Video(map_video(video)),
        LessonContent::Quiz(quiz) => LessonBodyVm::Quiz(map_quiz(quiz)),
        LessonContent::Form(form) => LessonBodyVm::Form(map_form(lesson, form)),
    }
}

fn map_image(lesson: &Lesson, image: &ImageContent) -> ImageVm {
    let alt = image
        .alt
        .clone()
        .or_else(|| image.caption.clone())
        .unwrap_or_else(|| lesson.title().to_string());
    ImageVm {
        src: image.url.to_string(),
        alt,
        caption: image.caption.clone(),
    }
}

fn map_video(video: &VideoContent) -> VideoVm {
    let source = match video.embed_url() {
        Some(src) => VideoSource::Embed { src },
        None => VideoSource::Native {
            src: video.url.to_string(),
        },
    };
    VideoVm {
        source,
        duration_label: video.duration.as_ref().map(|d| format!("Duration: {d}")),
    }
}

fn map_quiz(quiz: &QuizContent) -> QuizVm {
    let questions = quiz
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| QuizQuestionVm {
            number: index + 1,
            prompt: question.prompt.clone(),
            options: question
                .options
                .iter()
                .enumerate()
                .map(|(option_index, text)| QuizOptionVm {
                    letter: option_letter(option_index),
                    text: text.clone(),
                    is_correct: option_index == question.correct,
                })
                .collect(),
            explanation: question.explanation.clone(),
        })
        .collect();
    QuizVm { questions }
}

fn option_letter(index: usize) -> String {
    match u8::try_from(index) {
        Ok(offset) if offset < 26 => char::from(b'A' + offset).to_string(),
        _ => (index + 1).to_string(),
    }
}

fn map_form(lesson: &Lesson, form: &FormContent) -> FormVm {
    let fields = form
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| FormFieldVm {
            key: format!("lesson-{}-field-{index}", lesson.id()),
            label: field.label.clone(),
            kind: field.kind,
            required: field.required,
            placeholder: field.placeholder.clone().unwrap_or_default(),
            options: field.options.clone(),
        })
        .collect();
    FormVm { fields }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::model::{FormField, LessonId, MediaUri, QuizQuestion, TextContent};

    fn lesson(content: LessonContent) -> Lesson {
        Lesson::new(LessonId::new(4), "Sample lesson", content)
    }

    #[test]
    fn text_body_renders_markup() {
        let body = map_lesson_body(&lesson(LessonContent::Text(TextContent::new("## Hi"))));
        let LessonBodyVm::Text { html } = body else {
            panic!("expected text");
        };
        assert_eq!(html.trim(), "<h2>Hi</h2>");
    }

    #[test]
    fn image_alt_falls_back_to_title() {
        let image = ImageContent::new(MediaUri::parse("https://cdn.example.com/a.png").unwrap());
        let LessonBodyVm::Image(vm) = map_lesson_body(&lesson(LessonContent::Image(image))) else {
            panic!("expected image");
        };
        assert_eq!(vm.alt, "Sample lesson");
        assert_eq!(vm.src, "https://cdn.example.com/a.png");
        assert_eq!(vm.caption, None);
    }

    #[test]
    fn known_hosts_embed_and_others_play_natively() {
        let youtube = VideoContent::new(MediaUri::parse("https://youtu.be/xyz").unwrap())
            .with_duration("3:00");
        let LessonBodyVm::Video(vm) = map_lesson_body(&lesson(LessonContent::Video(youtube)))
        else {
            panic!("expected video");
        };
        assert_eq!(
            vm.source,
            VideoSource::Embed {
                src: "https://www.youtube.com/embed/xyz".to_string()
            }
        );
        assert_eq!(vm.duration_label.as_deref(), Some("Duration: 3:00"));

        let file = VideoContent::new(MediaUri::parse("media/intro.mp4").unwrap());
        let LessonBodyVm::Video(vm) = map_lesson_body(&lesson(LessonContent::Video(file))) else {
            panic!("expected video");
        };
        assert_eq!(
            vm.source,
            VideoSource::Native {
                src: "media/intro.mp4".to_string()
            }
        );
    }

    #[test]
    fn quiz_marks_correct_option_with_letters() {
        let quiz = QuizContent::new(vec![
            QuizQuestion::new("Q?", vec!["a".into(), "b".into(), "c".into()], 2)
                .with_explanation("because"),
        ]);
        let LessonBodyVm::Quiz(vm) = map_lesson_body(&lesson(LessonContent::Quiz(quiz))) else {
            panic!("expected quiz");
        };
        let question = &vm.questions[0];
        assert_eq!(question.number, 1);
        let letters: Vec<&str> = question.options.iter().map(|o| o.letter.as_str()).collect();
        assert_eq!(letters, vec!["A", "B", "C"]);
        let correct: Vec<bool> = question.options.iter().map(|o| o.is_correct).collect();
        assert_eq!(correct, vec![false, false, true]);
        assert_eq!(question.explanation.as_deref(), Some("because"));
    }

    #[test]
    fn long_option_lists_keep_every_option() {
        let options: Vec<String> = (1..=30).map(|n| format!("choice {n}")).collect();
        let quiz = QuizContent::new(vec![QuizQuestion::new("Which?", options, 27)]);
        let LessonBodyVm::Quiz(vm) = map_lesson_body(&lesson(LessonContent::Quiz(quiz))) else {
            panic!("expected quiz");
        };
        let question = &vm.questions[0];
        assert_eq!(question.options.len(), 30);
        assert_eq!(question.options[25].letter, "Z");
        assert_eq!(question.options[26].letter, "27");
        let correct: Vec<&str> = question
            .options
            .iter()
            .filter(|o| o.is_correct)
            .map(|o| o.text.as_str())
            .collect();
        assert_eq!(correct, vec!["choice 28"]);
    }

    #[test]
    fn out_of_range_correct_index_marks_nothing() {
        let quiz = QuizContent::new(vec![QuizQuestion::new("Q?", vec!["a".into()], 3)]);
        let LessonBodyVm::Quiz(vm) = map_lesson_body(&lesson(LessonContent::Quiz(quiz))) else {
            panic!("expected quiz");
        };
        assert!(vm.questions[0].options.iter().all(|o| !o.is_correct));
    }

    #[test]
    fn form_fields_get_unique_keys() {
        let form = FormContent::new(vec![
            FormField::new("Name", FieldKind::Text).required(),
            FormField::new("Notes", FieldKind::Textarea).with_placeholder("Anything else?"),
        ]);
        let LessonBodyVm::Form(vm) = map_lesson_body(&lesson(LessonContent::Form(form))) else {
            panic!("expected form");
        };
        assert_eq!(vm.fields[0].key, "lesson-4-field-0");
        assert_eq!(vm.fields[1].key, "lesson-4-field-1");
        assert!(vm.fields[0].required);
        assert_eq!(vm.fields[0].placeholder, "");
        assert_eq!(vm.fields[1].placeholder, "Anything else?");
    }
}
