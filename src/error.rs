//! Error types for shape inference and layer configuration
//!
//! All errors are configuration-time validation failures: they are propagated
//! to the caller and abort network assembly on first occurrence. Every
//! variant carries enough context (layer index and/or name, plus the
//! offending shape or role) to locate a miswired layer in a multi-layer
//! network without re-running the pass.

use crate::shapes::InputShape;
use thiserror::Error;

/// Errors produced during shape propagation and layer configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An upstream shape sequence did not contain exactly one element.
    #[error("invalid input for layer \"{layer_name}\": expected exactly 1 upstream shape, got {count}")]
    InvalidShapeArity { layer_name: String, count: usize },

    /// A preprocessor was asked to convert a shape kind it does not handle.
    #[error("{preprocessor} preprocessor cannot convert input shape {shape}")]
    UnsupportedShapeKind {
        preprocessor: &'static str,
        shape: InputShape,
    },

    /// The effective (post-preprocessor) upstream shape is not a kind this
    /// layer family consumes.
    #[error("invalid input shape (layer index = {layer_index}, layer name = \"{layer_name}\"): expected FeedForward or ConvolutionalFlat input, got {shape}")]
    InvalidInputShape {
        layer_index: usize,
        layer_name: String,
        shape: InputShape,
    },

    /// A parameter key outside the layer's role vocabulary was passed to a
    /// penalty lookup.
    #[error("unknown parameter role: \"{role}\"")]
    UnknownParameterRole { role: String },

    /// A shape has non-positive or internally inconsistent dimensions.
    #[error("shape {shape} has non-positive or inconsistent dimensions")]
    InvalidShapeDimensions { shape: InputShape },

    /// An architecture config referenced a layer type this crate does not
    /// build.
    #[error("layer {index}: unknown layer type \"{layer_type}\"; must be one of: dense, output")]
    UnknownLayerType { index: usize, layer_type: String },

    /// A layer config declared a size field that must be positive.
    #[error("layer {index}: {field} must be greater than 0")]
    InvalidLayerSize { index: usize, field: &'static str },

    /// An architecture config declared no layers.
    #[error("architecture must have at least one layer")]
    EmptyArchitecture,

    /// An architecture config file could not be read.
    #[error("failed to read architecture config: {0}")]
    Io(#[from] std::io::Error),

    /// An architecture config file could not be parsed.
    #[error("failed to parse architecture config: {0}")]
    Json(#[from] serde_json::Error),
}
