// crates/generate_docs/src/processor.rs

use std::fs;

use anyhow::{Context, Result};
use comment_to_markdown::{render_example, ExampleDoc};
use find_example_sources::ExampleFile;

/// Turns one discovered example into page text.
pub trait ExampleProcessor {
    fn process_example(&self, example: &ExampleFile) -> Result<String>;
}

/// Reads the source from disk and renders it with `comment_to_markdown`.
pub struct DefaultExampleProcessor {
    language: String,
}

impl DefaultExampleProcessor {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

impl ExampleProcessor for DefaultExampleProcessor {
    fn process_example(&self, example: &ExampleFile) -> Result<String> {
        let source = fs::read_to_string(&example.source_path)
            .with_context(|| format!("Error reading {}", example.source_path.display()))?;

        let stem = example.stem();
        let source_name = example.source_name();
        let image_link = example.image_link();

        let mut doc = ExampleDoc::new(&stem, &source_name).with_language(&self.language);
        if let Some(image) = image_link.as_deref() {
            doc = doc.with_image(image);
        }

        Ok(render_example(&source, &doc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_default_processor_renders_page() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("hello.c");
        {
            let mut f = File::create(&source).unwrap();
            write!(f, "//genexample\n// Hello world\nint main() {{}}\n").unwrap();
        }
        let example = ExampleFile::from_source(source, "png");

        let page = DefaultExampleProcessor::new("c")
            .process_example(&example)
            .unwrap();
        assert_eq!(
            page,
            "# hello\nHello world\n```c\nint main() {}\n```\n\n###### Automatically generated from [hello.c](hello.c)\n"
        );
    }

    #[test]
    fn test_default_processor_embeds_image() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("cube.c");
        fs::write(&source, "//genexample\n// A cube.\n").unwrap();
        File::create(dir.path().join("cube.png")).unwrap();
        let example = ExampleFile::from_source(source, "png");

        let page = DefaultExampleProcessor::new("c")
            .process_example(&example)
            .unwrap();
        assert!(page.starts_with("# cube\n![Example Screenshot](cube.png)\n\nA cube.\n"));
    }

    #[test]
    fn test_default_processor_missing_source() {
        let dir = tempdir().unwrap();
        let example = ExampleFile::from_source(dir.path().join("gone.c"), "png");
        let err = DefaultExampleProcessor::new("c")
            .process_example(&example)
            .unwrap_err();
        assert!(err.to_string().contains("gone.c"));
    }
}
