//! Session context: the one owner of per-user state.
//!
//! All state the display layer mutates lives behind this object; there are
//! no module-level globals anywhere in the pipeline.

use niaga_shared::types::SessionId;
use niaga_shared::Locale;

use super::error::SessionError;
use crate::dataset::Dataset;
use crate::filter::FilterSelection;
use crate::report::{DashboardReport, ReportService};

/// Per-session state: locale, dataset, and the active filter selection.
///
/// Invariant: `selection` is `Some` exactly when `dataset` is `Some`.
#[derive(Debug, Clone)]
pub struct SessionContext {
    id: SessionId,
    locale: Locale,
    dataset: Option<Dataset>,
    selection: Option<FilterSelection>,
}

impl SessionContext {
    /// Creates an idle session with the given display locale.
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            id: SessionId::new(),
            locale,
            dataset: None,
            selection: None,
        }
    }

    /// Returns the session identifier.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the display locale.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Switches the display locale. Labels only; data semantics are
    /// untouched.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Returns the loaded dataset, if any.
    #[must_use]
    pub const fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Returns the active filter selection, if a dataset is loaded.
    #[must_use]
    pub const fn selection(&self) -> Option<&FilterSelection> {
        self.selection.as_ref()
    }

    /// Replaces the session dataset and resets the filter selection to the
    /// observed defaults (all categories, full date span).
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::EmptyDataset`] if the dataset has no rows;
    /// the previous dataset and selection are left untouched.
    pub fn load_dataset(&mut self, dataset: Dataset) -> Result<&FilterSelection, SessionError> {
        let selection =
            FilterSelection::select_all(&dataset).ok_or(SessionError::EmptyDataset)?;
        self.dataset = Some(dataset);
        Ok(&*self.selection.insert(selection))
    }

    /// Replaces the filter selection.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::DatasetNotLoaded`] if no dataset is loaded.
    pub fn set_selection(&mut self, selection: FilterSelection) -> Result<(), SessionError> {
        if self.dataset.is_none() {
            return Err(SessionError::DatasetNotLoaded);
        }
        self.selection = Some(selection);
        Ok(())
    }

    /// Runs the filter-aggregate pipeline over the session state.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::DatasetNotLoaded`] in the idle state.
    pub fn dashboard(&self) -> Result<DashboardReport, SessionError> {
        match (self.dataset.as_ref(), self.selection.as_ref()) {
            (Some(dataset), Some(selection)) => {
                Ok(ReportService::generate_dashboard(dataset, selection))
            }
            _ => Err(SessionError::DatasetNotLoaded),
        }
    }
}
