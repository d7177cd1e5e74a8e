//! Binary decision trees over categorical tables, grown by information gain.
pub mod dataset;
pub mod decision;
pub mod distribution;
pub mod error;
pub mod evaluate;
pub mod information;
pub mod logging;
pub mod majority;
pub mod render;
pub mod selector;
pub mod table;

pub use dataset::{AttributeSchema, Dataset, Record};
pub use decision::{DecisionTree, TrainConfig};
pub use error::{Result, TreeError};
