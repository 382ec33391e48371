//! Toast notifications for operation outcomes.
//!
//! DESIGN
//! ======
//! Every feature surface funnels failures through one relay so the
//! backend's heterogeneous error shapes render as a uniform toast. The raw
//! failure is always logged first; a torn-down or never-mounted toast area
//! therefore never loses diagnostics.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;
use models::ApiError;

/// Visual class of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warn,
    Error,
}

impl Severity {
    /// Short heading shown above the detail text.
    #[must_use]
    pub fn summary(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Warn => "Warning",
            Self::Error => "Error",
        }
    }

    /// CSS modifier for the toast element.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Warn => "toast--warn",
            Self::Error => "toast--error",
        }
    }
}

/// A single queued notification.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
}

/// Queue of visible toasts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotifyState {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl NotifyState {
    /// Append a toast and return its id.
    pub fn push(&mut self, severity: Severity, detail: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            severity,
            summary: severity.summary().to_owned(),
            detail: detail.into(),
        });
        id
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Handle to the process-wide notification queue.
#[derive(Clone, Copy)]
pub struct Notifier {
    state: RwSignal<NotifyState>,
}

impl Notifier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(NotifyState::default()),
        }
    }

    /// Signal backing the toast area (read and dismiss).
    #[must_use]
    pub fn state(&self) -> RwSignal<NotifyState> {
        self.state
    }

    /// Queue an error toast with an explicit message.
    pub fn error(&self, detail: impl Into<String>) {
        let detail = detail.into();
        leptos::logging::warn!("console error: {detail}");
        self.state.update(|state| {
            state.push(Severity::Error, detail);
        });
    }

    /// Queue a warning toast.
    pub fn warn(&self, detail: impl Into<String>) {
        let detail = detail.into();
        leptos::logging::warn!("console warning: {detail}");
        self.state.update(|state| {
            state.push(Severity::Warn, detail);
        });
    }

    /// Normalize and display an API failure. The raw error is logged before
    /// any extraction so diagnostics survive whatever shape the body had.
    pub fn report_api_error(&self, err: &ApiError) {
        leptos::logging::warn!("api error: {err:?}");
        let detail = err.detail();
        self.state.update(|state| {
            state.push(Severity::Error, detail);
        });
    }

    /// Display a success outcome, preferring the backend's own message.
    pub fn report_success(&self, message: Option<&str>) {
        let detail = message
            .filter(|text| !text.is_empty())
            .map_or_else(|| "Operation completed successfully".to_owned(), ToOwned::to_owned);
        self.state.update(|state| {
            state.push(Severity::Success, detail);
        });
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
