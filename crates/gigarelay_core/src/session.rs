use chrono::{DateTime, Utc};

use crate::ingest::{FileSelection, IngestSurface, UploadInput};

pub type TransferId = u64;

/// Message shown when neither the server nor the transport gave a reason.
pub const GENERIC_FAILURE: &str = "Upload failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Transferring,
    Completed,
    Failed,
}

/// Days the backend keeps an upload retrievable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, PartialOrd, Ord, Hash)]
pub enum RetentionDays {
    D3,
    D5,
    D7,
    D14,
    D30,
    D60,
    #[default]
    D100,
}

impl RetentionDays {
    pub const ALL: [RetentionDays; 7] = [
        RetentionDays::D3,
        RetentionDays::D5,
        RetentionDays::D7,
        RetentionDays::D14,
        RetentionDays::D30,
        RetentionDays::D60,
        RetentionDays::D100,
    ];

    pub fn days(self) -> u32 {
        match self {
            RetentionDays::D3 => 3,
            RetentionDays::D5 => 5,
            RetentionDays::D7 => 7,
            RetentionDays::D14 => 14,
            RetentionDays::D30 => 30,
            RetentionDays::D60 => 60,
            RetentionDays::D100 => 100,
        }
    }

    pub fn from_days(days: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|value| value.days() == days)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult {
    pub page_url: String,
    pub direct_url: String,
    pub proxy_url: String,
    pub filename: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Parses the server's ISO-8601 expiry timestamp.
pub fn parse_expiry(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|value| value.with_timezone(&Utc))
}

/// Everything the engine needs to run one transfer episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub transfer_id: TransferId,
    pub input: UploadInput,
    pub retention: RetentionDays,
}

/// Terminal report for a transfer episode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferOutcome {
    /// 2xx with `success: true`.
    Accepted(UploadResult),
    /// 2xx with `success: false`.
    Rejected { error: Option<String> },
    /// Network failure or non-2xx status. `detail` comes from the error body.
    TransportFailed {
        detail: Option<String>,
        description: Option<String>,
    },
}

impl TransferOutcome {
    fn failure_message(&self) -> Option<String> {
        match self {
            TransferOutcome::Accepted(_) => None,
            TransferOutcome::Rejected { error } => Some(first_message([error.as_deref()])),
            TransferOutcome::TransportFailed {
                detail,
                description,
            } => Some(first_message([detail.as_deref(), description.as_deref()])),
        }
    }
}

fn first_message<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> String {
    candidates
        .into_iter()
        .flatten()
        .find(|text| !text.trim().is_empty())
        .unwrap_or(GENERIC_FAILURE)
        .to_string()
}

/// Discrete change notifications for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    PhaseChanged(Phase),
    ProgressChanged(u8),
}

/// Receives session changes in the order they happened.
pub trait SessionObserver {
    fn notify(&mut self, event: SessionEvent);
}

/// One upload attempt: `Idle -> Transferring -> Completed | Failed`.
///
/// Terminal phases only return to `Idle` through [`UploadSession::reset`].
/// Input edits are accepted in `Idle` only.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UploadSession {
    ingest: IngestSurface,
    retention: RetentionDays,
    phase: Phase,
    progress_percent: u8,
    result: Option<UploadResult>,
    error_message: Option<String>,
    in_flight: Option<TransferId>,
    events: Vec<SessionEvent>,
}

impl UploadSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn retention(&self) -> RetentionDays {
        self.retention
    }

    pub fn progress_percent(&self) -> u8 {
        self.progress_percent
    }

    pub fn result(&self) -> Option<&UploadResult> {
        self.result.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn in_flight(&self) -> Option<TransferId> {
        self.in_flight
    }

    pub fn ingest(&self) -> &IngestSurface {
        &self.ingest
    }

    pub fn input(&self) -> Option<UploadInput> {
        self.ingest.current_input()
    }

    pub fn can_submit(&self) -> bool {
        self.phase == Phase::Idle && self.ingest.current_input().is_some()
    }

    fn accepts_input(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn pick_file(&mut self, file: FileSelection) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.ingest.pick_file(file);
        true
    }

    pub fn drop_files(&mut self, files: Vec<FileSelection>) -> bool {
        if !self.accepts_input() {
            self.ingest.drag_leave();
            return false;
        }
        self.ingest.drop_files(files)
    }

    pub fn set_url_text(&mut self, text: impl Into<String>) -> bool {
        self.accepts_input() && self.ingest.set_url_text(text)
    }

    pub fn remove_file(&mut self) -> bool {
        self.accepts_input() && self.ingest.remove_file()
    }

    /// Presentational only; allowed in every phase.
    pub fn set_drag_active(&mut self, active: bool) -> bool {
        if self.ingest.is_drag_active() == active {
            return false;
        }
        if active {
            self.ingest.drag_over();
        } else {
            self.ingest.drag_leave();
        }
        true
    }

    pub fn select_retention(&mut self, retention: RetentionDays) -> bool {
        if !self.accepts_input() || self.retention == retention {
            return false;
        }
        self.retention = retention;
        true
    }

    /// Starts a transfer episode. Returns `None` when there is no input or
    /// the session is not idle; re-entrant calls are ignored, not queued.
    pub fn begin(&mut self, transfer_id: TransferId) -> Option<TransferRequest> {
        if self.phase != Phase::Idle {
            return None;
        }
        let input = self.ingest.current_input()?;
        self.phase = Phase::Transferring;
        self.progress_percent = 0;
        self.result = None;
        self.error_message = None;
        self.in_flight = Some(transfer_id);
        self.events.push(SessionEvent::PhaseChanged(Phase::Transferring));
        Some(TransferRequest {
            transfer_id,
            input,
            retention: self.retention,
        })
    }

    /// Applies a byte-progress report. Unknown or zero totals are not
    /// reported, and the percentage never moves backwards.
    pub fn apply_progress(
        &mut self,
        transfer_id: TransferId,
        bytes_sent: u64,
        total_bytes: Option<u64>,
    ) -> bool {
        if !self.is_current(transfer_id) {
            return false;
        }
        let Some(total) = total_bytes.filter(|total| *total > 0) else {
            return false;
        };
        let percent = percent_of(bytes_sent, total);
        if percent <= self.progress_percent {
            return false;
        }
        self.set_progress(percent);
        true
    }

    pub fn finish(&mut self, transfer_id: TransferId, outcome: TransferOutcome) -> bool {
        if !self.is_current(transfer_id) {
            return false;
        }
        self.in_flight = None;
        match outcome.failure_message() {
            None => {
                if let TransferOutcome::Accepted(result) = outcome {
                    self.result = Some(result);
                }
                if self.progress_percent != 100 {
                    self.set_progress(100);
                }
                self.set_phase(Phase::Completed);
            }
            Some(message) => {
                self.error_message = Some(message);
                self.set_phase(Phase::Failed);
            }
        }
        true
    }

    /// Returns a terminal session to a pristine `Idle` session.
    pub fn reset(&mut self) -> bool {
        if !matches!(self.phase, Phase::Completed | Phase::Failed) {
            return false;
        }
        let events = std::mem::take(&mut self.events);
        *self = Self {
            events,
            ..Self::default()
        };
        self.events.push(SessionEvent::PhaseChanged(Phase::Idle));
        true
    }

    /// Starts a brand-new session from a failed one, keeping only the
    /// chosen input and retention.
    pub fn retry(&mut self, transfer_id: TransferId) -> Option<TransferRequest> {
        if self.phase != Phase::Failed {
            return None;
        }
        let ingest = self.ingest.clone();
        let retention = self.retention;
        self.reset();
        self.ingest = ingest;
        self.retention = retention;
        self.begin(transfer_id)
    }

    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    fn is_current(&self, transfer_id: TransferId) -> bool {
        self.phase == Phase::Transferring && self.in_flight == Some(transfer_id)
    }

    fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
        self.events.push(SessionEvent::PhaseChanged(phase));
    }

    fn set_progress(&mut self, percent: u8) {
        self.progress_percent = percent;
        self.events.push(SessionEvent::ProgressChanged(percent));
    }
}

fn percent_of(sent: u64, total: u64) -> u8 {
    let ratio = sent.min(total) as f64 / total as f64;
    (ratio * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_rounds_to_nearest() {
        assert_eq!(percent_of(1, 3), 33);
        assert_eq!(percent_of(2, 3), 67);
        assert_eq!(percent_of(5, 1000), 1);
        assert_eq!(percent_of(4, 1000), 0);
    }

    #[test]
    fn percent_clamps_overshoot() {
        assert_eq!(percent_of(150, 100), 100);
    }

    #[test]
    fn retention_round_trips_days() {
        for value in RetentionDays::ALL {
            assert_eq!(RetentionDays::from_days(value.days()), Some(value));
        }
        assert_eq!(RetentionDays::from_days(4), None);
        assert_eq!(RetentionDays::default().days(), 100);
    }

    #[test]
    fn expiry_accepts_offset_timestamps() {
        let parsed = parse_expiry("2026-01-28T10:00:00.123456+00:00").expect("parse");
        assert_eq!(parsed.format("%Y-%m-%d").to_string(), "2026-01-28");
        assert!(parse_expiry("next tuesday").is_none());
    }

    #[test]
    fn failure_message_prefers_detail_then_description() {
        let both = TransferOutcome::TransportFailed {
            detail: Some("File not found".into()),
            description: Some("http status 404".into()),
        };
        assert_eq!(both.failure_message().as_deref(), Some("File not found"));

        let blank_detail = TransferOutcome::TransportFailed {
            detail: Some("  ".into()),
            description: Some("connection refused".into()),
        };
        assert_eq!(
            blank_detail.failure_message().as_deref(),
            Some("connection refused")
        );

        let nothing = TransferOutcome::TransportFailed {
            detail: None,
            description: None,
        };
        assert_eq!(nothing.failure_message().as_deref(), Some(GENERIC_FAILURE));
    }
}
