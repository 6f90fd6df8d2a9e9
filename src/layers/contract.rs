//! Shape contract trait for layer configurations
//!
//! This module defines the `LayerShapeContract` trait implemented by every
//! layer family. It is the interface the network-assembly pass drives
//! layer by layer, and the interface the parameter-allocation pass uses to
//! query per-role regularization settings without knowing a layer's concrete
//! type.

use crate::error::ConfigError;
use crate::preprocessor::Preprocessor;
use crate::regularization::PenaltyKind;
use crate::shapes::InputShape;

/// Per-layer shape inference and parameter-role lookup.
///
/// During the shape-propagation pass the assembly driver invokes, in order:
/// [`select_preprocessor`](LayerShapeContract::select_preprocessor) on the
/// raw upstream shape, [`set_preprocessor`](LayerShapeContract::set_preprocessor)
/// to register the result, then
/// [`derive_input_size`](LayerShapeContract::derive_input_size) and
/// [`derive_output_shape`](LayerShapeContract::derive_output_shape). The
/// derive operations apply the registered preprocessor themselves, so they
/// always receive the raw upstream shape.
///
/// Shape propagation is a strictly sequential, synchronous pass run once at
/// network-construction time; the contract provides no internal
/// synchronization.
pub trait LayerShapeContract {
    /// Name of the layer, used in error messages.
    fn layer_name(&self) -> &str;

    /// Decide which preprocessor (if any) this layer needs for the given
    /// upstream shape. Pure: does not register the result.
    fn select_preprocessor(
        &self,
        upstream: &[InputShape],
    ) -> Result<Option<Preprocessor>, ConfigError>;

    /// Register the preprocessor applied before this layer's derive
    /// operations.
    fn set_preprocessor(&mut self, preprocessor: Option<Preprocessor>);

    /// Derive this layer's input size from the upstream shape.
    ///
    /// If `n_in` is already set and `override_allowed` is false, the existing
    /// configuration wins and this is a no-op (still validating the upstream
    /// shape). With `override_allowed` set, the value is recomputed.
    fn derive_input_size(
        &mut self,
        layer_index: usize,
        upstream: &[InputShape],
        override_allowed: bool,
    ) -> Result<(), ConfigError>;

    /// Publish the output shape this layer hands to the next consumer.
    ///
    /// The upstream shape is validated even though the result depends only on
    /// the layer's configured output width: the validation is the earliest
    /// failure signal for a miswired layer.
    fn derive_output_shape(
        &self,
        layer_index: usize,
        upstream: &[InputShape],
    ) -> Result<InputShape, ConfigError>;

    /// Look up the penalty coefficient for a parameter-map key.
    fn penalty_for(&self, kind: PenaltyKind, param: &str) -> Result<f64, ConfigError>;

    /// Whether the named parameter exists only for pretraining.
    fn is_pretrain_param(&self, param: &str) -> bool;
}
