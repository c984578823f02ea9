//! Wayfinder - three-stage trip-planning workflow
//!
//! Wayfinder guides a user through one continuous planning session:
//! capture trip parameters, curate a candidate set of recommended places,
//! then generate a day-by-day itinerary from the curated set. The core is
//! the workflow state/transition model - how the trip request, the place
//! catalog with its selection state, and the generated schedule are threaded
//! between stages, validated, and transformed into outbound requests.
//!
//! # Core Concepts
//!
//! - **Ephemeral state**: workflow state lives for one session, by design
//! - **Single source of truth**: selection is an ordered id list; per-place
//!   state is derived on read
//! - **Degrade, never crash**: every service failure logs and renders an
//!   empty state; no retries, no blocking error dialogs
//!
//! # Modules
//!
//! - [`domain`] - TripRequest, Place, ItineraryEvent value types
//! - [`catalog`] - candidate places and the selection over them
//! - [`compose`] - itinerary request composition
//! - [`media`] - photo and map URL resolution
//! - [`schedule`] - the generated itinerary model
//! - [`workflow`] - the stage state machine and navigation contexts
//! - [`api`] - travel service client trait and HTTP implementation
//! - [`session`] - interactive stage driver
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod api;
pub mod catalog;
pub mod cli;
pub mod compose;
pub mod config;
pub mod domain;
pub mod media;
pub mod schedule;
pub mod session;
pub mod workflow;

// Re-export commonly used types
pub use api::{ApiError, HttpTravelApi, TravelApi};
pub use catalog::PlaceCatalog;
pub use compose::compose;
pub use config::{ApiConfig, Config, MediaConfig};
pub use domain::{ItineraryEvent, ItineraryRequest, Photo, Place, Schedule, TripRequest, TripRequestBuilder};
pub use media::{MediaResolver, FALLBACK_PHOTO_URL};
pub use schedule::ScheduleModel;
pub use session::PlannerSession;
pub use workflow::{Navigator, PlanningContext, SelectingContext, Stage, TransitionError};
