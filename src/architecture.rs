//! Architecture configuration and the shape-propagation pass
//!
//! This module provides configuration structures for defining network
//! architectures via JSON files, plus the sequential pass that walks the
//! ordered layer list at construction time: for each layer it resolves the
//! needed input preprocessor, fixes the layer's input size, and hands the
//! layer's output shape to the next consumer. The pass aborts on the first
//! validation error; miswiring is a structural configuration error, never
//! retried or silently corrected.

use crate::error::ConfigError;
use crate::layers::{FeedForwardConfig, LayerShapeContract};
use crate::regularization::Regularization;
use crate::shapes::InputShape;
use serde::Deserialize;
use std::fs;

/// Configuration for a single layer in the network.
///
/// # Example
///
/// ```json
/// {
///   "layer_type": "dense",
///   "n_out": 256,
///   "l2": 0.001
/// }
/// ```
///
/// `n_in` may be omitted (or 0) to have it inferred from the upstream shape
/// during propagation; a positive value is an explicit user configuration
/// that inference will not overwrite.
#[derive(Debug, Clone, Deserialize)]
pub struct LayerConfig {
    /// Type of layer: "dense" or "output"
    pub layer_type: String,

    /// Layer name used in error messages (default: "<layer_type>_<index>")
    pub name: Option<String>,

    /// Input size; 0 means inferred from the upstream shape
    #[serde(default)]
    pub n_in: usize,

    /// Output width (number of units), must be positive
    pub n_out: usize,

    /// Regularization coefficients (all default to 0.0)
    #[serde(flatten)]
    pub regularization: Regularization,
}

/// Configuration for the entire network architecture.
///
/// # Example
///
/// ```json
/// {
///   "input": { "type": "convolutional", "height": 28, "width": 28, "depth": 1 },
///   "layers": [
///     { "layer_type": "dense", "n_out": 256 },
///     { "layer_type": "output", "n_out": 10 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ArchitectureConfig {
    /// Declared network input shape, fed to the first layer
    pub input: InputShape,

    /// Sequence of layer configurations defining the network structure
    pub layers: Vec<LayerConfig>,
}

/// Loads an architecture configuration from a JSON file.
///
/// Reads the file at `path`, deserializes its JSON contents and validates
/// the configuration structure.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the JSON is invalid, or the
/// configuration fails validation.
pub fn load_architecture(path: &str) -> Result<ArchitectureConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: ArchitectureConfig = serde_json::from_str(&contents)?;
    validate_architecture(&config)?;
    Ok(config)
}

/// Validates an architecture configuration.
///
/// Checks that:
/// - The architecture has at least one layer
/// - The declared input shape has positive, consistent dimensions
/// - Each layer has a known type and a positive `n_out`
///
/// Shape compatibility between adjacent layers is not checked here; that is
/// the job of the propagation pass, which reports the exact miswired layer.
fn validate_architecture(config: &ArchitectureConfig) -> Result<(), ConfigError> {
    if config.layers.is_empty() {
        return Err(ConfigError::EmptyArchitecture);
    }
    config.input.validate()?;

    for (index, layer) in config.layers.iter().enumerate() {
        match layer.layer_type.as_str() {
            "dense" | "output" => {}
            _ => {
                return Err(ConfigError::UnknownLayerType {
                    index,
                    layer_type: layer.layer_type.clone(),
                })
            }
        }
        if layer.n_out == 0 {
            return Err(ConfigError::InvalidLayerSize {
                index,
                field: "n_out",
            });
        }
    }

    Ok(())
}

/// Builds layer configurations from an architecture config.
///
/// Both layer types in the feed-forward family share the same shape
/// contract; the type only informs the generated default name.
///
/// # Errors
///
/// Returns an error if validation fails (unknown layer type, zero `n_out`,
/// bad input shape, or an empty layer list).
pub fn build_layers(config: &ArchitectureConfig) -> Result<Vec<FeedForwardConfig>, ConfigError> {
    validate_architecture(config)?;

    let mut layers = Vec::with_capacity(config.layers.len());
    for (index, layer) in config.layers.iter().enumerate() {
        let name = layer
            .name
            .clone()
            .unwrap_or_else(|| format!("{}_{}", layer.layer_type, index));
        layers.push(FeedForwardConfig::new(
            name,
            layer.n_in,
            layer.n_out,
            layer.regularization,
        ));
    }

    Ok(layers)
}

/// Runs the shape-propagation pass over an ordered layer list.
///
/// For each layer in order: resolves the preprocessor needed for the raw
/// upstream shape, registers it on the layer, derives the layer's input size
/// (user-configured `n_in` wins over inference), and derives the output
/// shape handed to the next layer. The first layer consumes the declared
/// network `input` shape.
///
/// # Returns
///
/// The per-layer output shapes, in layer order.
///
/// # Errors
///
/// Aborts with the first validation error, which names the offending layer.
///
/// # Example
///
/// ```
/// use nn_shape_config::architecture::propagate_shapes;
/// use nn_shape_config::layers::FeedForwardConfig;
/// use nn_shape_config::regularization::Regularization;
/// use nn_shape_config::shapes::InputShape;
///
/// let mut layers = vec![
///     FeedForwardConfig::new("dense_0", 0, 256, Regularization::default()),
///     FeedForwardConfig::new("output_1", 0, 10, Regularization::default()),
/// ];
/// let outputs = propagate_shapes(&mut layers, InputShape::feed_forward(784)).unwrap();
///
/// assert_eq!(layers[0].n_in(), 784);
/// assert_eq!(layers[1].n_in(), 256);
/// assert_eq!(outputs.last(), Some(&InputShape::feed_forward(10)));
/// ```
pub fn propagate_shapes<L: LayerShapeContract>(
    layers: &mut [L],
    input: InputShape,
) -> Result<Vec<InputShape>, ConfigError> {
    let mut upstream = input;
    let mut outputs = Vec::with_capacity(layers.len());

    for (index, layer) in layers.iter_mut().enumerate() {
        let preprocessor = layer.select_preprocessor(&[upstream])?;
        layer.set_preprocessor(preprocessor);
        layer.derive_input_size(index, &[upstream], false)?;
        let output = layer.derive_output_shape(index, &[upstream])?;
        outputs.push(output);
        upstream = output;
    }

    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer_config(layer_type: &str, n_in: usize, n_out: usize) -> LayerConfig {
        LayerConfig {
            layer_type: layer_type.to_string(),
            name: None,
            n_in,
            n_out,
            regularization: Regularization::default(),
        }
    }

    #[test]
    fn test_validate_empty_architecture() {
        let config = ArchitectureConfig {
            input: InputShape::feed_forward(784),
            layers: vec![],
        };
        assert!(matches!(
            validate_architecture(&config).unwrap_err(),
            ConfigError::EmptyArchitecture
        ));
    }

    #[test]
    fn test_validate_unknown_layer_type() {
        let config = ArchitectureConfig {
            input: InputShape::feed_forward(784),
            layers: vec![layer_config("dense", 0, 256), layer_config("conv2d", 0, 10)],
        };
        match validate_architecture(&config).unwrap_err() {
            ConfigError::UnknownLayerType { index, layer_type } => {
                assert_eq!(index, 1);
                assert_eq!(layer_type, "conv2d");
            }
            other => panic!("expected UnknownLayerType, got: {other}"),
        }
    }

    #[test]
    fn test_validate_zero_n_out() {
        let config = ArchitectureConfig {
            input: InputShape::feed_forward(784),
            layers: vec![layer_config("dense", 0, 0)],
        };
        assert!(matches!(
            validate_architecture(&config).unwrap_err(),
            ConfigError::InvalidLayerSize { index: 0, .. }
        ));
    }

    #[test]
    fn test_validate_bad_input_shape() {
        let config = ArchitectureConfig {
            input: InputShape::feed_forward(0),
            layers: vec![layer_config("dense", 0, 10)],
        };
        assert!(matches!(
            validate_architecture(&config).unwrap_err(),
            ConfigError::InvalidShapeDimensions { .. }
        ));
    }

    #[test]
    fn test_build_layers_generates_default_names() {
        let config = ArchitectureConfig {
            input: InputShape::feed_forward(784),
            layers: vec![layer_config("dense", 0, 256), layer_config("output", 0, 10)],
        };
        let layers = build_layers(&config).unwrap();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].layer_name(), "dense_0");
        assert_eq!(layers[1].layer_name(), "output_1");
    }

    #[test]
    fn test_propagate_shapes_mlp() {
        let mut layers = vec![
            FeedForwardConfig::new("dense_0", 0, 256, Regularization::default()),
            FeedForwardConfig::new("output_1", 0, 10, Regularization::default()),
        ];
        let outputs = propagate_shapes(&mut layers, InputShape::feed_forward(784)).unwrap();

        assert_eq!(layers[0].n_in(), 784);
        assert_eq!(layers[1].n_in(), 256);
        assert_eq!(
            outputs,
            vec![InputShape::feed_forward(256), InputShape::feed_forward(10)]
        );
    }

    #[test]
    fn test_propagate_shapes_registers_preprocessor_for_conv_input() {
        let mut layers = vec![FeedForwardConfig::new(
            "dense_0",
            0,
            128,
            Regularization::default(),
        )];
        propagate_shapes(&mut layers, InputShape::convolutional(28, 28, 1)).unwrap();

        assert!(layers[0].preprocessor().is_some());
        assert_eq!(layers[0].n_in(), 784);
    }

    #[test]
    fn test_propagate_shapes_keeps_user_configured_n_in() {
        let mut layers = vec![FeedForwardConfig::new(
            "dense_0",
            300,
            10,
            Regularization::default(),
        )];
        propagate_shapes(&mut layers, InputShape::feed_forward(784)).unwrap();
        // Existing configuration wins; propagation never overrides it.
        assert_eq!(layers[0].n_in(), 300);
    }
}
