#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod parser;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::LayoutConfig;
pub use ir::{Cardinality, Constraint, Feature, FeatureModel, FlatFeature, Interval};
pub use layout::{
    LayoutError, LayoutResult, LayoutWarning, Point, layout_feature_model, layout_with_config,
};
