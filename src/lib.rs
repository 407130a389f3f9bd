//! Handicap-corrected results and series standings for sailing regattas.
//!
//! One race flows through [`scoring::correct`], [`scoring::rank`] and
//! [`scoring::assign_points`]; [`scoring::aggregate`] totals many races into
//! one standing per boat. The [`event`] and [`pipeline`] modules load an event
//! file and drive that flow for the `regatta-scorer` binary.

pub mod error;
pub mod event;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod timing;

pub use error::ScoringError;
