//! Interaction state for the drag-and-drop upload widget.
//!
//! The widget owns one [`UploadState`] and forwards DOM events to it. The
//! state decides what is shown; the component only renders [`UploadState::view`]
//! and performs the side effects a [`Selection`] asks for (notify the parent,
//! read a preview).

use tracing::debug;

use crate::validation::{FileMeta, UploadRules, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Empty,
    Selected {
        file: FileMeta,
        preview: Option<String>,
    },
}

/// Which of the three mutually exclusive layouts the drop zone renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadView {
    Empty,
    FileWithPreview,
    FileWithoutPreview,
}

/// Returned by a successful [`UploadState::offer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Tag for the asynchronous preview read started for this selection.
    pub generation: u64,
    pub wants_preview: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadState {
    phase: Phase,
    error: Option<String>,
    dragging: bool,
    generation: u64,
}

impl Default for UploadState {
    fn default() -> Self {
        Self::new()
    }
}

impl UploadState {
    pub fn new() -> Self {
        Self {
            phase: Phase::Empty,
            error: None,
            dragging: false,
            generation: 0,
        }
    }

    pub fn drag_over(&mut self) {
        self.dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    /// Validate and select `file`. A rejected file leaves any earlier
    /// selection in place and only replaces the error message.
    pub fn offer(
        &mut self,
        file: FileMeta,
        rules: &UploadRules,
    ) -> Result<Selection, ValidationError> {
        self.error = None;
        if let Err(e) = rules.validate(&file) {
            debug!(file = %file.name, error = %e, "upload rejected");
            self.error = Some(e.to_string());
            return Err(e);
        }

        self.generation += 1;
        let wants_preview = file.is_image();
        debug!(file = %file.name, size = file.size, generation = self.generation, "upload selected");
        self.phase = Phase::Selected {
            file,
            preview: None,
        };
        Ok(Selection {
            generation: self.generation,
            wants_preview,
        })
    }

    /// A drop always ends the drag, even when nothing usable was dropped.
    pub fn drop_file(
        &mut self,
        file: Option<FileMeta>,
        rules: &UploadRules,
    ) -> Option<Result<Selection, ValidationError>> {
        self.dragging = false;
        file.map(|f| self.offer(f, rules))
    }

    /// Attach a preview read for `generation`. Returns `false` when the
    /// selection has since been removed or replaced.
    pub fn attach_preview(&mut self, generation: u64, data_url: String) -> bool {
        let current = self.generation;
        match &mut self.phase {
            Phase::Selected { preview, .. } if generation == current => {
                *preview = Some(data_url);
                true
            }
            _ => {
                debug!(generation, current, "stale preview discarded");
                false
            }
        }
    }

    /// Back to the initial empty condition. The generation keeps counting so
    /// in-flight preview reads for the removed file are ignored.
    pub fn remove(&mut self) {
        self.phase = Phase::Empty;
        self.error = None;
        self.dragging = false;
    }

    pub fn view(&self) -> UploadView {
        match &self.phase {
            Phase::Empty => UploadView::Empty,
            Phase::Selected {
                preview: Some(_), ..
            } => UploadView::FileWithPreview,
            Phase::Selected { preview: None, .. } => UploadView::FileWithoutPreview,
        }
    }

    pub fn file(&self) -> Option<&FileMeta> {
        match &self.phase {
            Phase::Selected { file, .. } => Some(file),
            Phase::Empty => None,
        }
    }

    pub fn preview(&self) -> Option<&str> {
        match &self.phase {
            Phase::Selected { preview, .. } => preview.as_deref(),
            Phase::Empty => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_initial(&self) -> bool {
        self.phase == Phase::Empty && self.error.is_none() && !self.dragging
    }

    /// CSS classes for the drop zone.
    pub fn zone_class(&self) -> String {
        let mut cls = String::from("file-upload-zone");
        if self.dragging {
            cls.push_str(" dragging");
        }
        if self.file().is_some() {
            cls.push_str(" has-file");
        }
        cls
    }

    /// CSS classes for the upload icon in the empty layout.
    pub fn icon_class(&self) -> &'static str {
        if self.dragging {
            "file-upload-icon active"
        } else {
            "file-upload-icon"
        }
    }
}
