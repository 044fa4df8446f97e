// crates/comment_to_markdown/src/lib.rs

//! Renders an annotated example source as a Markdown page.
//!
//! Every line is either a *comment* (its trimmed text starts with `//`) or
//! *code* (everything else, blank lines included). Comments become prose with
//! the marker stripped; consecutive code lines are wrapped in one fenced block.
//! There is no file‑system access here: callers hand in lines and metadata and
//! get the page back as a `String`.

use genexample_marker::{is_marker_line, COMMENT_PREFIX, DEFAULT_LANGUAGE};

const FENCE: &str = "```";

/// Classification of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Comment,
    Code,
}

/// Classifies `line` as prose or code. Total: every line is exactly one kind.
pub fn classify_line(line: &str) -> LineKind {
    if line.trim_start().starts_with(COMMENT_PREFIX) {
        LineKind::Comment
    } else {
        LineKind::Code
    }
}

/// Drops leading whitespace, the `//` marker and any whitespace right after
/// it. A bare `//` line yields an empty string (its newline goes too).
pub fn strip_comment_marker(line: &str) -> &str {
    let trimmed = line.trim_start();
    trimmed
        .strip_prefix(COMMENT_PREFIX)
        .unwrap_or(trimmed)
        .trim_start()
}

/// Per‑page metadata used for the title, screenshot and attribution lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleDoc<'a> {
    /// File name without extension; becomes the page title.
    pub stem: &'a str,
    /// Source file name, used as both link text and link target in the footer.
    pub source_name: &'a str,
    /// Screenshot path relative to the generated page, if one exists.
    pub image_path: Option<&'a str>,
    /// Tag written after every opening fence.
    pub language: &'a str,
}

impl<'a> ExampleDoc<'a> {
    pub fn new(stem: &'a str, source_name: &'a str) -> Self {
        Self {
            stem,
            source_name,
            image_path: None,
            language: DEFAULT_LANGUAGE,
        }
    }

    pub fn with_image(mut self, image_path: &'a str) -> Self {
        self.image_path = Some(image_path);
        self
    }

    pub fn with_language(mut self, language: &'a str) -> Self {
        self.language = language;
        self
    }
}

/// Converts `lines` (in file order, normally newline‑terminated) into a
/// Markdown page.
///
/// A leading `//genexample` line is consumed silently. The result always
/// starts with `# <stem>`, ends with the attribution footer, and every fence
/// it opens is closed.
pub fn transform<I, S>(lines: I, doc: &ExampleDoc<'_>) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut emitter = BlockEmitter::new(doc.language);
    emitter.push_header(doc);

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        if idx == 0 && is_marker_line(line) {
            continue;
        }
        emitter.push_line(line);
    }

    emitter.finish(doc)
}

/// Splits `source` into newline‑terminated lines and runs [`transform`].
pub fn render_example(source: &str, doc: &ExampleDoc<'_>) -> String {
    transform(source.split_inclusive('\n'), doc)
}

// === Private Implementation === //

/// Output buffer plus the one piece of state the conversion needs.
/// Lives only for the duration of a single `transform` call.
struct BlockEmitter<'a> {
    out: String,
    language: &'a str,
    in_code_block: bool,
}

impl<'a> BlockEmitter<'a> {
    fn new(language: &'a str) -> Self {
        Self {
            out: String::new(),
            language,
            in_code_block: false,
        }
    }

    fn push_header(&mut self, doc: &ExampleDoc<'_>) {
        self.out.push_str(&format!("# {}\n", doc.stem));
        if let Some(image) = doc.image_path {
            self.out
                .push_str(&format!("![Example Screenshot]({})\n\n", image));
        }
    }

    fn push_line(&mut self, line: &str) {
        match classify_line(line) {
            LineKind::Comment => {
                self.close_fence();
                self.push_text(strip_comment_marker(line));
            }
            LineKind::Code => {
                self.open_fence();
                // Blank lines keep the fence open but are not copied into it.
                if !line.trim().is_empty() {
                    self.push_text(line);
                }
            }
        }
    }

    fn open_fence(&mut self) {
        if !self.in_code_block {
            self.out.push_str(FENCE);
            self.out.push_str(self.language);
            self.out.push('\n');
            self.in_code_block = true;
        }
    }

    fn close_fence(&mut self) {
        if self.in_code_block {
            self.out.push_str(FENCE);
            self.out.push_str("\n\n");
            self.in_code_block = false;
        }
    }

    /// Appends `text` verbatim, adding a newline only if the input line had none.
    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.out.push_str(text);
        if !text.ends_with('\n') {
            self.out.push('\n');
        }
    }

    fn finish(mut self, doc: &ExampleDoc<'_>) -> String {
        if self.in_code_block {
            self.out.push_str(FENCE);
            self.out.push('\n');
            self.in_code_block = false;
        }
        self.out.push('\n');
        self.out.push_str(&format!(
            "###### Automatically generated from [{}]({})\n",
            doc.source_name, doc.source_name
        ));
        self.out
    }
}
