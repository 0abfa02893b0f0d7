//! Legend-driven class highlighting: classification scheme, predicate and
//! effect construction, and the selection state machine that drives them.

pub mod config;
pub mod controller;
pub mod effect;
pub mod error;
pub mod events;
pub mod legend;
pub mod predicate;
pub mod readiness;
pub mod scheme;

pub use controller::SelectionController;
pub use effect::EffectPolicy;
pub use error::ControllerError;
pub use events::{Publication, SelectionEvent, SelectionState, Transition};
pub use legend::{Legend, LegendClickTarget};
pub use predicate::build_predicate;
pub use readiness::LayerViewSlot;
pub use scheme::ClassificationScheme;
