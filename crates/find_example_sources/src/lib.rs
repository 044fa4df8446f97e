// crates/find_example_sources/src/lib.rs

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use genexample_marker::{
    is_marker_line, DEFAULT_IMAGE_EXTENSION, DEFAULT_SOURCE_EXTENSION, MARKDOWN_EXTENSION,
};
use walkdir::WalkDir;

/// A marked example source together with the paths derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleFile {
    pub source_path: PathBuf,
    /// Same‑stem screenshot next to the source, if it exists.
    pub image_path: Option<PathBuf>,
    /// Where the generated page goes: the source path with a `.md` extension.
    pub output_path: PathBuf,
}

impl ExampleFile {
    /// Derives the image and output paths for `source_path`.
    pub fn from_source(source_path: PathBuf, image_extension: &str) -> Self {
        let image_path = companion_image(&source_path, image_extension);
        let output_path = output_path_for(&source_path);
        Self {
            source_path,
            image_path,
            output_path,
        }
    }

    /// File name without extension, e.g. `hello` for `examples/hello.c`.
    pub fn stem(&self) -> String {
        self.source_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// File name with extension, e.g. `hello.c`.
    pub fn source_name(&self) -> String {
        self.source_path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Screenshot path as it should appear in the generated page.
    pub fn image_link(&self) -> Option<String> {
        let page_dir = self.output_path.parent().unwrap_or_else(|| Path::new(""));
        self.image_path
            .as_deref()
            .map(|image| relative_image_path(image, page_dir))
    }
}

/// Controls which files are considered candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryOptions {
    pub source_extension: String,
    pub image_extension: String,
    /// Descend into subdirectories instead of looking at `dir` only.
    pub recursive: bool,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            image_extension: DEFAULT_IMAGE_EXTENSION.to_string(),
            recursive: false,
        }
    }
}

/// Finds every source in `dir` whose extension matches and whose first line
/// carries the `//genexample` marker. Files without the marker (shared
/// utility code, usually) are skipped. The result is sorted by path.
///
/// Fails only if `dir` itself cannot be used; unreadable candidates are
/// logged and skipped.
pub fn find_example_sources(dir: &Path, options: &DiscoveryOptions) -> io::Result<Vec<ExampleFile>> {
    ExampleFinder::new(dir, options).find()
}

/// Returns the same‑stem file with `image_extension` if it is a regular file.
pub fn companion_image(source: &Path, image_extension: &str) -> Option<PathBuf> {
    let candidate = source.with_extension(image_extension);
    candidate.is_file().then_some(candidate)
}

/// Replaces the source extension with `md`.
pub fn output_path_for(source: &Path) -> PathBuf {
    source.with_extension(MARKDOWN_EXTENSION)
}

/// Expresses `image` relative to `base_dir` using `/` separators, which is
/// what Markdown links expect on every platform. Paths outside `base_dir` are
/// returned as they are.
pub fn relative_image_path(image: &Path, base_dir: &Path) -> String {
    let relative = image.strip_prefix(base_dir).unwrap_or(image);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

// === Private Implementation === //

struct ExampleFinder<'a> {
    dir: &'a Path,
    options: &'a DiscoveryOptions,
}

impl<'a> ExampleFinder<'a> {
    fn new(dir: &'a Path, options: &'a DiscoveryOptions) -> Self {
        Self { dir, options }
    }

    fn find(&self) -> io::Result<Vec<ExampleFile>> {
        if !self.dir.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not a directory", self.dir.display()),
            ));
        }

        let max_depth = if self.options.recursive { usize::MAX } else { 1 };

        let mut examples: Vec<ExampleFile> = WalkDir::new(self.dir)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    log::warn!("Skipping unreadable entry: {}", err);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| self.has_source_extension(path))
            .filter(|path| self.is_marked(path))
            .map(|path| ExampleFile::from_source(path, &self.options.image_extension))
            .collect();

        examples.sort_by(|a, b| a.source_path.cmp(&b.source_path));

        log::debug!(
            "{} example source(s) found in {}",
            examples.len(),
            self.dir.display()
        );
        Ok(examples)
    }

    fn has_source_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .map(|ext| ext == self.options.source_extension)
            .unwrap_or(false)
    }

    fn is_marked(&self, path: &Path) -> bool {
        match read_first_line(path) {
            Ok(Some(line)) if is_marker_line(&line) => true,
            Ok(_) => {
                log::debug!("No marker, skipping {}", path.display());
                false
            }
            Err(err) => {
                log::warn!("Cannot read {}: {}", path.display(), err);
                false
            }
        }
    }
}

/// Reads just the first line; `None` for an empty file.
fn read_first_line(path: &Path) -> io::Result<Option<String>> {
    let file = fs::File::open(path)?;
    let mut reader = io::BufReader::new(file);
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
