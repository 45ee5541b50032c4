//! Occurrence-driven 3D marker visualization core.
//!
//! Maps free-form text to animated marker placements: tokenize the text into
//! lowercase words, locate configured search terms by occurrence index,
//! derive a deterministic height per occurrence, scatter a randomized batch
//! of markers around it, and advance per-category animation rules (falling,
//! pulsing, floating) each display tick.
//!
//! Zero I/O — pure engine with no opinions about rendering or input hosts.
//! The animator emits mutation descriptors; an adapter layer applies them to
//! actual rendering-host objects.

pub mod animate;
pub mod config;
pub mod constants;
pub mod error;
pub mod locate;
pub mod marker;
pub mod placement;
pub mod session;
pub mod tokenizer;

pub use animate::{MarkerMutation, apply, step};
pub use config::{Rgb, SLOT_COLORS, TermConfig};
pub use error::{Result, VizError};
pub use locate::{TermMatch, locate};
pub use marker::{Behavior, Categories, Category, Marker};
pub use placement::generate_batch;
pub use session::{Session, SessionPhase};
pub use tokenizer::tokenize;
