//! Presentation-layer state for the generator.
//!
//! Owns the three option selections, the single displayed-record slot, and
//! the in-progress flag. Concurrent generations are coordinated with an
//! explicit ticket: `begin` stamps each attempt with a monotonically
//! increasing issue number, and `settle` applies only the most recently
//! issued attempt's completion — a late completion of a superseded attempt is
//! discarded instead of clobbering newer state.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::error::Result;
use crate::options::GenerationOptions;
use crate::record::IdentityRecord;

/// Identity of one generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTicket(u64);

/// Transient outcome shown after a settled attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Generated,
    Failed,
    /// A superseded attempt settled late; nothing is shown for it.
    Stale,
}

impl Notification {
    /// The toast text shown to the user. Stale completions are silent.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::Generated => Some("Identity generated successfully!"),
            Self::Failed => Some("Failed to generate identity. Please try again."),
            Self::Stale => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct GeneratorView {
    pub options: GenerationOptions,
    record: Option<IdentityRecord>,
    generated_at: Option<DateTime<Utc>>,
    generating: bool,
    issued: u64,
}

impl GeneratorView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a generation attempt: raises the in-progress flag and returns
    /// the ticket the eventual completion must present to `settle`.
    pub fn begin(&mut self) -> GenerationTicket {
        self.issued += 1;
        self.generating = true;
        GenerationTicket(self.issued)
    }

    /// Apply a completed attempt.
    ///
    /// A stale ticket leaves all state untouched, including the in-progress
    /// flag — a newer attempt is still outstanding. A current failure clears
    /// the flag and keeps the previously displayed record; a current success
    /// replaces the record wholesale.
    pub fn settle(
        &mut self,
        ticket: GenerationTicket,
        result: Result<IdentityRecord>,
    ) -> Notification {
        if ticket.0 != self.issued {
            debug!(
                ticket = ticket.0,
                current = self.issued,
                "discarding stale generation completion"
            );
            return Notification::Stale;
        }

        self.generating = false;
        match result {
            Ok(record) => {
                self.record = Some(record);
                self.generated_at = Some(Utc::now());
                Notification::Generated
            }
            Err(error) => {
                warn!(%error, "generation attempt failed");
                Notification::Failed
            }
        }
    }

    /// The currently displayed record, if any attempt has succeeded.
    pub fn record(&self) -> Option<&IdentityRecord> {
        self.record.as_ref()
    }

    /// When the displayed record was generated.
    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        self.generated_at
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }
}
