//! State behind the chart view.
//!
//! Every change goes through `roll`, `begin_refresh` and `complete`. Each
//! refresh carries a sequence number so a slow, older refresh can never
//! overwrite the result of a newer one.

use crate::sample::Sample;
use crate::source::SourceError;

/// Handle for one in-flight refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshTicket {
    seq: u64,
}

impl RefreshTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// What `complete` did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The series was replaced.
    Applied,
    /// A newer refresh had already settled; the result was dropped.
    Superseded,
    /// The refresh failed; the previous series was kept.
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartState {
    loading: bool,
    samples: Vec<Sample>,
    refresh_counter: u64,
    latest_requested: u64,
    latest_settled: u64,
    error: Option<SourceError>,
}

impl Default for ChartState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartState {
    pub fn new() -> Self {
        Self {
            loading: true,
            samples: Vec::new(),
            refresh_counter: 0,
            latest_requested: 0,
            latest_settled: 0,
            error: None,
        }
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Bumped by every "Roll Dice" press. Only its changes matter.
    pub fn refresh_counter(&self) -> u64 {
        self.refresh_counter
    }

    pub fn error(&self) -> Option<&SourceError> {
        self.error.as_ref()
    }

    /// True while a refresh newer than the last settled one is in flight.
    pub fn has_pending(&self) -> bool {
        self.latest_requested > self.latest_settled
    }

    /// User asked for new data.
    pub fn roll(&mut self) {
        self.refresh_counter += 1;
    }

    /// Start a refresh. The returned ticket must be handed back to
    /// `complete` together with the result.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.latest_requested += 1;
        self.loading = true;
        RefreshTicket {
            seq: self.latest_requested,
        }
    }

    /// Settle a refresh started with `begin_refresh`.
    pub fn complete(
        &mut self,
        ticket: RefreshTicket,
        result: Result<Vec<Sample>, SourceError>,
    ) -> RefreshOutcome {
        if ticket.seq <= self.latest_settled {
            return RefreshOutcome::Superseded;
        }
        self.latest_settled = ticket.seq;
        self.loading = self.has_pending();

        match result {
            Ok(samples) => {
                self.samples = samples;
                self.error = None;
                RefreshOutcome::Applied
            }
            Err(err) => {
                self.error = Some(err);
                RefreshOutcome::Failed
            }
        }
    }
}
