use crate::view_model::{CheckResultView, CheckerViewModel};

/// Which of the two upload targets a document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSlot {
    Reference,
    Test,
}

/// A document the user picked, committed only after its upload succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedDocument {
    pub file_name: String,
}

/// Outcome of a completed similarity check, as reported by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    /// Similarity score in `[0, 1]`.
    pub similarity: f64,
    /// Categorical label derived server-side from the score.
    pub plagiarism_level: String,
    pub test_file: String,
    pub reference_file: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    reference: Option<SelectedDocument>,
    test: Option<SelectedDocument>,
    result: Option<CheckOutcome>,
    loading: bool,
    missing_files_alert: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self, slot: DocumentSlot) -> Option<&SelectedDocument> {
        match slot {
            DocumentSlot::Reference => self.reference.as_ref(),
            DocumentSlot::Test => self.test.as_ref(),
        }
    }

    pub fn has_both_selections(&self) -> bool {
        self.reference.is_some() && self.test.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn missing_files_alert(&self) -> bool {
        self.missing_files_alert
    }

    pub fn result(&self) -> Option<&CheckOutcome> {
        self.result.as_ref()
    }

    /// Commits a selection after its upload confirmed success.
    ///
    /// Any previous check result refers to an older pair of documents and is
    /// dropped here; a pending validation alert is cleared as well.
    pub(crate) fn commit_selection(&mut self, slot: DocumentSlot, document: SelectedDocument) {
        match slot {
            DocumentSlot::Reference => self.reference = Some(document),
            DocumentSlot::Test => self.test = Some(document),
        }
        self.result = None;
        self.missing_files_alert = false;
        self.mark_dirty();
    }

    pub(crate) fn begin_check(&mut self) {
        self.loading = true;
        self.missing_files_alert = false;
        self.mark_dirty();
    }

    pub(crate) fn finish_check(&mut self, result: Option<CheckOutcome>) {
        self.loading = false;
        self.result = result;
        self.mark_dirty();
    }

    pub(crate) fn raise_missing_files_alert(&mut self) {
        self.missing_files_alert = true;
        self.mark_dirty();
    }

    pub(crate) fn clear_missing_files_alert(&mut self) {
        if self.missing_files_alert {
            self.missing_files_alert = false;
            self.mark_dirty();
        }
    }

    pub fn view(&self) -> CheckerViewModel {
        CheckerViewModel {
            reference_name: self.reference.as_ref().map(|d| d.file_name.clone()),
            test_name: self.test.as_ref().map(|d| d.file_name.clone()),
            loading: self.loading,
            missing_files_alert: self.missing_files_alert,
            // A result is only displayable while both selections are present.
            result: if self.has_both_selections() {
                self.result.as_ref().map(CheckResultView::from_outcome)
            } else {
                None
            },
            dirty: self.dirty,
        }
    }

    /// Returns the dirty flag and resets it, so the platform renders at most
    /// once per batch of state changes.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
