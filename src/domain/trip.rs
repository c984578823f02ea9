//! TripRequest domain type
//!
//! The canonical trip parameters captured during the Input stage. The value
//! is immutable once passed forward; later stages receive clones through the
//! navigation context.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Trip parameters as sent to the recommendation service
///
/// Every field is always present: unset strings default to empty and unset
/// dates to `None`. No field is validated for non-emptiness here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TripRequest {
    /// Where the trip starts
    pub source: String,

    /// Where the trip goes
    pub destination: String,

    /// Departure date, if the user picked one
    pub departure_date: Option<NaiveDate>,

    /// Return date, if the user picked one
    pub return_date: Option<NaiveDate>,

    /// Free-text budget (kept verbatim, e.g. "2000" or "2000 USD")
    pub budget: String,

    /// Free-text description of the user's interests
    pub description: String,
}

impl TripRequest {
    /// Start building a trip request from defaults
    pub fn builder() -> TripRequestBuilder {
        TripRequestBuilder::default()
    }
}

/// Incremental builder for [`TripRequest`]
///
/// Fields can be set one at a time or in a batch via [`merge`]. `build`
/// always produces a fully-populated value, so no stage ever carries a
/// partially-initialized trip.
///
/// [`merge`]: TripRequestBuilder::merge
#[derive(Debug, Clone, Default)]
pub struct TripRequestBuilder {
    inner: TripRequest,
}

impl TripRequestBuilder {
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.inner.source = source.into();
        self
    }

    pub fn destination(mut self, destination: impl Into<String>) -> Self {
        self.inner.destination = destination.into();
        self
    }

    pub fn departure_date(mut self, date: Option<NaiveDate>) -> Self {
        self.inner.departure_date = date;
        self
    }

    pub fn return_date(mut self, date: Option<NaiveDate>) -> Self {
        self.inner.return_date = date;
        self
    }

    pub fn budget(mut self, budget: impl Into<String>) -> Self {
        self.inner.budget = budget.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = description.into();
        self
    }

    /// Batch update: overwrite every field that is set in `update`
    ///
    /// Empty strings and `None` dates in `update` leave the current value
    /// untouched, so a partial batch only replaces what it carries.
    pub fn merge(mut self, update: TripRequest) -> Self {
        if !update.source.is_empty() {
            self.inner.source = update.source;
        }
        if !update.destination.is_empty() {
            self.inner.destination = update.destination;
        }
        if update.departure_date.is_some() {
            self.inner.departure_date = update.departure_date;
        }
        if update.return_date.is_some() {
            self.inner.return_date = update.return_date;
        }
        if !update.budget.is_empty() {
            self.inner.budget = update.budget;
        }
        if !update.description.is_empty() {
            self.inner.description = update.description;
        }
        self
    }

    /// Produce the canonical value passed to the next stage
    pub fn build(self) -> TripRequest {
        self.inner
    }
}
