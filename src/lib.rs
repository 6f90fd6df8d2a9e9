//! Shape Inference for Feed-Forward Layer Configurations
//!
//! This library provides the shape-inference and preprocessor-resolution
//! logic shared by feed-forward-style layers during network assembly:
//! inferring a layer's input size from the previous layer's output shape,
//! publishing the layer's own output shape, and selecting the
//! format-conversion preprocessor needed when adjacent layers expect
//! incompatible tensor layouts.
//!
//! # Modules
//!
//! - `shapes`: InputShape descriptors for tensor layouts at layer boundaries
//! - `preprocessor`: Format-conversion preprocessors and their resolution
//! - `layers`: LayerShapeContract trait and the feed-forward layer family
//! - `regularization`: Penalty coefficient lookup keyed by parameter role
//! - `architecture`: JSON architecture configs and the shape-propagation pass
//! - `error`: Configuration-time validation errors

pub mod architecture;
pub mod error;
pub mod layers;
pub mod preprocessor;
pub mod regularization;
pub mod shapes;
