//! Statistics and threshold classification for network diagnostic logs.
//!
//! The pipeline is: parse one record file into [`model::Record`]s
//! ([`source::ping`], [`source::dns`]), reduce them to a [`model::Summary`]
//! ([`stats::aggregate`]), combine per-file summaries into a global one
//! ([`stats::merge`]), grade each metric against the calibrated thresholds
//! ([`classify`]), and render text report blocks ([`report`]). Packet-loss
//! evaluation over capture-tool frame counts lives in [`packet`].

pub mod classify;
pub mod errors;
pub mod model;
pub mod packet;
pub mod report;
pub mod source;
pub mod stats;

pub use errors::SourceError;
pub use model::{Record, Summary};
