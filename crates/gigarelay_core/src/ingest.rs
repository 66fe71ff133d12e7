use std::path::PathBuf;

/// A local file chosen through the picker or a drop gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelection {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
}

/// What a transfer uploads. Exactly one source per attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadInput {
    File(FileSelection),
    /// Non-empty, trimmed remote URL.
    Url(String),
}

/// Collapses picker, drop and URL-entry gestures into one [`UploadInput`].
///
/// A selected file and URL text never coexist: choosing a file clears the
/// URL text, and URL edits are rejected while a file is held.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IngestSurface {
    file: Option<FileSelection>,
    url_text: String,
    drag_active: bool,
}

impl IngestSurface {
    pub fn pick_file(&mut self, file: FileSelection) {
        self.file = Some(file);
        self.url_text.clear();
    }

    /// Honors only the first dropped item. Returns `false` for an empty drop.
    pub fn drop_files(&mut self, files: Vec<FileSelection>) -> bool {
        self.drag_active = false;
        match files.into_iter().next() {
            Some(first) => {
                self.pick_file(first);
                true
            }
            None => false,
        }
    }

    /// Returns `false` (and changes nothing) while a file is selected.
    pub fn set_url_text(&mut self, text: impl Into<String>) -> bool {
        if self.file.is_some() {
            return false;
        }
        self.url_text = text.into();
        true
    }

    pub fn remove_file(&mut self) -> bool {
        self.file.take().is_some()
    }

    /// Enter and over both raise the flag.
    pub fn drag_over(&mut self) {
        self.drag_active = true;
    }

    pub fn drag_leave(&mut self) {
        self.drag_active = false;
    }

    pub fn file(&self) -> Option<&FileSelection> {
        self.file.as_ref()
    }

    pub fn url_text(&self) -> &str {
        &self.url_text
    }

    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    pub fn url_field_visible(&self) -> bool {
        self.file.is_none()
    }

    pub fn current_input(&self) -> Option<UploadInput> {
        if let Some(file) = &self.file {
            return Some(UploadInput::File(file.clone()));
        }
        let trimmed = self.url_text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(UploadInput::Url(trimmed.to_string()))
        }
    }
}
