//! Input shape descriptors for network boundaries
//!
//! This module provides the `InputShape` enum describing the tensor layout
//! produced or consumed at a layer boundary. Shapes are immutable values:
//! each layer publishes one as its output, and the next layer consumes it
//! during the shape-propagation pass.

use crate::error::ConfigError;
use serde::Deserialize;
use std::fmt;

/// Tensor layout at a network boundary.
///
/// Exactly one variant describes each boundary. Shapes are produced by the
/// upstream layer (or the declared network input) and consumed by the next
/// layer's shape contract. All numeric fields are positive once resolved.
///
/// The JSON representation is internally tagged, matching the snake_case
/// vocabulary used in architecture config files:
///
/// ```json
/// { "type": "convolutional", "height": 28, "width": 28, "depth": 1 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputShape {
    /// Flat feed-forward vector of `size` features.
    FeedForward { size: usize },

    /// Convolutional volume (height × width × depth).
    Convolutional {
        height: usize,
        width: usize,
        depth: usize,
    },

    /// Convolutional volume already flattened to a row vector, retaining the
    /// original spatial dimensions. `flattened_size` must equal
    /// height × width × depth.
    ConvolutionalFlat {
        flattened_size: usize,
        height: usize,
        width: usize,
        depth: usize,
    },

    /// Recurrent sequence with `size` features per time step.
    Recurrent { size: usize },
}

impl InputShape {
    /// Create a flat feed-forward shape of `size` features.
    pub fn feed_forward(size: usize) -> Self {
        InputShape::FeedForward { size }
    }

    /// Create a convolutional volume shape.
    pub fn convolutional(height: usize, width: usize, depth: usize) -> Self {
        InputShape::Convolutional {
            height,
            width,
            depth,
        }
    }

    /// Create a flattened-convolutional shape.
    ///
    /// The flattened size is computed as height × width × depth.
    pub fn convolutional_flat(height: usize, width: usize, depth: usize) -> Self {
        InputShape::ConvolutionalFlat {
            flattened_size: height * width * depth,
            height,
            width,
            depth,
        }
    }

    /// Create a recurrent sequence shape with `size` features per step.
    pub fn recurrent(size: usize) -> Self {
        InputShape::Recurrent { size }
    }

    /// Check that all dimensions are positive and internally consistent.
    ///
    /// Used on shapes declared in architecture config files, where a
    /// hand-written `flattened_size` may disagree with the spatial
    /// dimensions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = match *self {
            InputShape::FeedForward { size } => size > 0,
            InputShape::Convolutional {
                height,
                width,
                depth,
            } => height > 0 && width > 0 && depth > 0,
            InputShape::ConvolutionalFlat {
                flattened_size,
                height,
                width,
                depth,
            } => {
                height > 0 && width > 0 && depth > 0 && flattened_size == height * width * depth
            }
            InputShape::Recurrent { size } => size > 0,
        };

        if ok {
            Ok(())
        } else {
            Err(ConfigError::InvalidShapeDimensions { shape: *self })
        }
    }
}

impl fmt::Display for InputShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            InputShape::FeedForward { size } => write!(f, "FeedForward({})", size),
            InputShape::Convolutional {
                height,
                width,
                depth,
            } => write!(f, "Convolutional({}x{}x{})", height, width, depth),
            InputShape::ConvolutionalFlat {
                flattened_size,
                height,
                width,
                depth,
            } => write!(
                f,
                "ConvolutionalFlat({}={}x{}x{})",
                flattened_size, height, width, depth
            ),
            InputShape::Recurrent { size } => write!(f, "Recurrent({})", size),
        }
    }
}
