//! Workflow stage state machine
//!
//! Three stages - Input, Selecting, Planning - with forward-only transitions
//! and typed navigation contexts. The context payloads are the only state
//! that crosses a stage boundary; a stage entered without its context treats
//! that as the missing-prerequisite edge case and renders empty.

use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::PlaceCatalog;
use crate::domain::{Place, TripRequest};

/// One of the three workflow phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    /// Capturing trip parameters
    #[default]
    Input,
    /// Curating the candidate place set
    Selecting,
    /// Generating and rendering the itinerary (terminal)
    Planning,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Selecting => write!(f, "selecting"),
            Self::Planning => write!(f, "planning"),
        }
    }
}

/// Context carried forward from the Input stage
#[derive(Debug, Clone)]
pub struct SelectingContext {
    pub trip: TripRequest,
}

/// Context carried forward from the Selecting stage
#[derive(Debug, Clone)]
pub struct PlanningContext {
    /// Selected ids in toggle order
    pub selected_ids: Vec<String>,
    /// The full candidate list, catalog order
    pub places: Vec<Place>,
    pub trip: TripRequest,
}

/// Why a forward transition was refused
#[derive(Debug, Error, PartialEq)]
pub enum TransitionError {
    /// The minimum-selection guard: a user-visible warning, not a crash
    #[error("Choose at least 1 place to visit!")]
    NoPlacesSelected,

    #[error("cannot transition from {from} to {to}")]
    InvalidTransition { from: Stage, to: Stage },
}

/// Orchestrates stage transitions and enforces their guards
#[derive(Debug, Default)]
pub struct Navigator {
    stage: Stage,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Planning is terminal: no further forward transition exists
    pub fn is_terminal(&self) -> bool {
        self.stage == Stage::Planning
    }

    /// Input -> Selecting, carrying the trip parameters. No guard.
    pub fn to_selecting(&mut self, trip: TripRequest) -> Result<SelectingContext, TransitionError> {
        if self.stage != Stage::Input {
            warn!(from = %self.stage, "to_selecting: invalid transition");
            return Err(TransitionError::InvalidTransition {
                from: self.stage,
                to: Stage::Selecting,
            });
        }

        debug!(destination = %trip.destination, "to_selecting: advancing");
        self.stage = Stage::Selecting;
        Ok(SelectingContext { trip })
    }

    /// Selecting -> Planning, guarded by the minimum-selection rule
    pub fn to_planning(&mut self, catalog: &PlaceCatalog, trip: TripRequest) -> Result<PlanningContext, TransitionError> {
        if self.stage != Stage::Selecting {
            warn!(from = %self.stage, "to_planning: invalid transition");
            return Err(TransitionError::InvalidTransition {
                from: self.stage,
                to: Stage::Planning,
            });
        }

        if !catalog.can_proceed() {
            debug!("to_planning: blocked by minimum-selection guard");
            return Err(TransitionError::NoPlacesSelected);
        }

        debug!(selected = catalog.selected_ids().len(), "to_planning: advancing");
        self.stage = Stage::Planning;
        Ok(PlanningContext {
            selected_ids: catalog.selected_ids().to_vec(),
            places: catalog.places().to_vec(),
            trip,
        })
    }
}
