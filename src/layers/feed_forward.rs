//! Feed-forward layer family configuration
//!
//! `FeedForwardConfig` holds the shared per-layer state of the
//! feed-forward-style layer family (dense, output): the resolved input size
//! `n_in`, the configured output width `n_out`, the registered input
//! preprocessor, and the regularization coefficients. Concrete layer kinds in
//! this family compose this struct rather than inherit from it; they share
//! identical shape-inference and penalty-lookup behavior.

use crate::error::ConfigError;
use crate::layers::LayerShapeContract;
use crate::preprocessor::{resolve_preprocessor, Preprocessor};
use crate::regularization::{ParamRole, PenaltyKind, Regularization};
use crate::shapes::InputShape;

/// Shape and regularization configuration for one feed-forward-style layer.
///
/// `n_in == 0` means "unresolved": the value is inferred from the upstream
/// shape during the propagation pass. A positive `n_in` set at configuration
/// time wins over inference unless the pass explicitly allows overriding.
///
/// # Example
///
/// ```
/// use nn_shape_config::layers::{FeedForwardConfig, LayerShapeContract};
/// use nn_shape_config::regularization::Regularization;
/// use nn_shape_config::shapes::InputShape;
///
/// let mut layer = FeedForwardConfig::new("dense_0", 0, 10, Regularization::default());
/// let upstream = [InputShape::convolutional(4, 4, 3)];
///
/// let pre = layer.select_preprocessor(&upstream).unwrap();
/// layer.set_preprocessor(pre);
/// layer.derive_input_size(0, &upstream, false).unwrap();
/// assert_eq!(layer.n_in(), 48);
///
/// let out = layer.derive_output_shape(0, &upstream).unwrap();
/// assert_eq!(out, InputShape::feed_forward(10));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FeedForwardConfig {
    name: String,
    n_in: usize,
    n_out: usize,
    preprocessor: Option<Preprocessor>,
    regularization: Regularization,
}

impl FeedForwardConfig {
    /// Create a layer configuration.
    ///
    /// # Arguments
    ///
    /// * `name` - Layer name used in error messages
    /// * `n_in` - Input size; 0 leaves it to be inferred during propagation
    /// * `n_out` - Output width (number of units), must be positive
    /// * `regularization` - Penalty coefficients for this layer's parameters
    pub fn new(
        name: impl Into<String>,
        n_in: usize,
        n_out: usize,
        regularization: Regularization,
    ) -> Self {
        Self {
            name: name.into(),
            n_in,
            n_out,
            preprocessor: None,
            regularization,
        }
    }

    /// Resolved input size (0 if not yet inferred).
    pub fn n_in(&self) -> usize {
        self.n_in
    }

    /// Configured output width.
    pub fn n_out(&self) -> usize {
        self.n_out
    }

    /// The preprocessor registered for this layer, if any.
    pub fn preprocessor(&self) -> Option<Preprocessor> {
        self.preprocessor
    }

    /// Validate arity and return the single upstream shape.
    fn single_upstream<'a>(
        &self,
        upstream: &'a [InputShape],
    ) -> Result<&'a InputShape, ConfigError> {
        match upstream {
            [shape] => Ok(shape),
            other => Err(ConfigError::InvalidShapeArity {
                layer_name: self.name.clone(),
                count: other.len(),
            }),
        }
    }

    /// Apply the registered preprocessor and validate that the effective
    /// upstream shape is native to this family, returning its feature size.
    fn effective_input_size(
        &self,
        layer_index: usize,
        upstream: &[InputShape],
    ) -> Result<usize, ConfigError> {
        let raw = self.single_upstream(upstream)?;
        let effective = match &self.preprocessor {
            Some(pre) => pre.output_shape(raw)?,
            None => *raw,
        };

        match effective {
            InputShape::FeedForward { size } => Ok(size),
            InputShape::ConvolutionalFlat { flattened_size, .. } => Ok(flattened_size),
            shape => Err(ConfigError::InvalidInputShape {
                layer_index,
                layer_name: self.name.clone(),
                shape,
            }),
        }
    }
}

impl LayerShapeContract for FeedForwardConfig {
    fn layer_name(&self) -> &str {
        &self.name
    }

    fn select_preprocessor(
        &self,
        upstream: &[InputShape],
    ) -> Result<Option<Preprocessor>, ConfigError> {
        resolve_preprocessor(&self.name, upstream)
    }

    fn set_preprocessor(&mut self, preprocessor: Option<Preprocessor>) {
        self.preprocessor = preprocessor;
    }

    fn derive_input_size(
        &mut self,
        layer_index: usize,
        upstream: &[InputShape],
        override_allowed: bool,
    ) -> Result<(), ConfigError> {
        let size = self.effective_input_size(layer_index, upstream)?;
        if self.n_in == 0 || override_allowed {
            self.n_in = size;
        }
        Ok(())
    }

    fn derive_output_shape(
        &self,
        layer_index: usize,
        upstream: &[InputShape],
    ) -> Result<InputShape, ConfigError> {
        // Validation only: the output width is fixed by configuration.
        self.effective_input_size(layer_index, upstream)?;
        Ok(InputShape::feed_forward(self.n_out))
    }

    fn penalty_for(&self, kind: PenaltyKind, param: &str) -> Result<f64, ConfigError> {
        let role = ParamRole::from_key(param)?;
        Ok(self.regularization.penalty(kind, role))
    }

    fn is_pretrain_param(&self, _param: &str) -> bool {
        // No pretraining-specific parameters exist in this layer family.
        false
    }
}
