//! # CLI Module
//!
//! This module provides the command-line interface layer for omnivox. It
//! resolves configuration, drives the [`crate::workflow`] against the
//! Omnigage API, persists what was created and presents the results.
//!
//! ## Commands
//!
//! - [`launch`] - Uploads both recordings, creates the engagement with its
//!   activity, triggers and envelopes, then schedules it
//! - [`schedule`] - Schedules an engagement created by an earlier launch
//! - [`runs`] - Lists the locally recorded launches
//!
//! ## Architecture Design
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Workflow Layer (ordered launch)
//!     ↓
//! API Layer (Omnigage integration)     Management Layer (run records)
//! ```
//!
//! ## Error Handling
//!
//! Commands never return errors. Fatal problems are reported with
//! [`crate::error!`], which exits with status 1. Before exiting on a failed
//! launch the run record is still written, so partially created resources
//! can be found with `omnivox runs`.
//!
//! ## Usage Patterns
//!
//! ```bash
//! omnivox launch \
//!     --human-recording ~/piano.wav \
//!     --machine-recording ~/voicemail.mp3 \
//!     --caller-id yL9vQaWrSqg5W8EFEpE6xZ \
//!     --envelope "+15551234567,first-name=Ada,last-name=Lovelace"
//! omnivox launch ... --no-schedule          # create everything, schedule later
//! omnivox schedule <ENGAGEMENT_ID>
//! omnivox runs --last 5
//! ```

mod launch;
mod runs;
mod schedule;

pub use launch::LaunchPlan;
pub use launch::build_campaign;
pub use launch::launch;
pub use launch::load_envelopes;
pub use runs::runs;
pub use schedule::schedule;
