//! Input preprocessors and preprocessor resolution
//!
//! A preprocessor is the format-conversion step inserted between two adjacent
//! layers whose native tensor layouts differ. Feed-forward-style layers
//! natively consume `FeedForward` and `ConvolutionalFlat` input; recurrent
//! and convolutional upstream output must be converted first.
//!
//! [`resolve_preprocessor`] decides, from a layer's upstream shape, whether a
//! conversion is needed. It is a pure function: the preprocessor it returns
//! is constructed fresh per layer-pair resolution and registered on the layer
//! by the shape-propagation pass.

use crate::error::ConfigError;
use crate::shapes::InputShape;

/// A format-conversion step between two layers.
///
/// "No conversion needed" is represented as `Option::None` by
/// [`resolve_preprocessor`] rather than as an enum variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preprocessor {
    /// Collapses the sequence dimension of recurrent output into the feature
    /// dimension. Needs no parameters.
    RnnToFeedForward,

    /// Flattens a convolutional volume into a 1-D feature vector of
    /// height × width × depth features.
    CnnToFeedForward {
        height: usize,
        width: usize,
        depth: usize,
    },
}

impl Preprocessor {
    /// Compute the shape this preprocessor produces for `input`.
    ///
    /// Input already in the target layout passes through unchanged. A shape
    /// kind the preprocessor cannot convert is a wiring error and fails with
    /// `UnsupportedShapeKind`.
    pub fn output_shape(&self, input: &InputShape) -> Result<InputShape, ConfigError> {
        match *self {
            Preprocessor::RnnToFeedForward => match *input {
                InputShape::Recurrent { size } => Ok(InputShape::feed_forward(size)),
                InputShape::FeedForward { .. } => Ok(*input),
                shape => Err(ConfigError::UnsupportedShapeKind {
                    preprocessor: "RnnToFeedForward",
                    shape,
                }),
            },
            Preprocessor::CnnToFeedForward { .. } => match *input {
                InputShape::Convolutional {
                    height,
                    width,
                    depth,
                } => Ok(InputShape::feed_forward(height * width * depth)),
                InputShape::ConvolutionalFlat { flattened_size, .. } => {
                    Ok(InputShape::feed_forward(flattened_size))
                }
                InputShape::FeedForward { .. } => Ok(*input),
                shape => Err(ConfigError::UnsupportedShapeKind {
                    preprocessor: "CnnToFeedForward",
                    shape,
                }),
            },
        }
    }
}

/// Decide which preprocessor (if any) a feed-forward-style layer needs for
/// the given upstream shape.
///
/// The upstream sequence must contain exactly one shape; any other arity is
/// an input-contract violation reported against `layer_name`. Resolution
/// runs on the raw upstream shape — if an earlier conversion already exists
/// upstream, the caller is responsible for chaining its output in.
///
/// # Arguments
///
/// * `layer_name` - Name of the consuming layer, used in error messages
/// * `upstream` - Shape sequence published by the previous layer
pub fn resolve_preprocessor(
    layer_name: &str,
    upstream: &[InputShape],
) -> Result<Option<Preprocessor>, ConfigError> {
    let shape = match upstream {
        [shape] => shape,
        other => {
            return Err(ConfigError::InvalidShapeArity {
                layer_name: layer_name.to_string(),
                count: other.len(),
            })
        }
    };

    match *shape {
        // Already native: no conversion.
        InputShape::FeedForward { .. } | InputShape::ConvolutionalFlat { .. } => Ok(None),
        InputShape::Recurrent { .. } => Ok(Some(Preprocessor::RnnToFeedForward)),
        InputShape::Convolutional {
            height,
            width,
            depth,
        } => Ok(Some(Preprocessor::CnnToFeedForward {
            height,
            width,
            depth,
        })),
    }
}
