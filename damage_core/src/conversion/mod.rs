//! Damage conversion - topology, per-edge tables and the node scaler

mod scaler;
mod table;
pub mod topology;

pub use scaler::{ConversionScaler, NodeSplit, ScaleFactors};
pub use table::ConversionTable;
pub use topology::ConversionEdge;
