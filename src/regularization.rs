//! Regularization penalty coefficients and parameter role lookup
//!
//! A generic parameter-initialization pass queries per-layer penalty
//! coefficients keyed by parameter role (weight vs bias) without knowing the
//! layer's concrete type. The role vocabulary is a small fixed set; keys
//! outside it are configuration errors, never silently defaulted.

use crate::error::ConfigError;
use serde::Deserialize;

/// Parameter-map key for a layer's weight matrix.
pub const WEIGHT_KEY: &str = "W";

/// Parameter-map key for a layer's bias vector.
pub const BIAS_KEY: &str = "b";

/// Penalty kind used to key a coefficient lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PenaltyKind {
    L1,
    L2,
}

/// Parameter category for regularization lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamRole {
    Weight,
    Bias,
}

impl ParamRole {
    /// Resolve a parameter-map key to its role.
    ///
    /// Only [`WEIGHT_KEY`] and [`BIAS_KEY`] are valid; any other key fails
    /// with `UnknownParameterRole` naming the string received.
    pub fn from_key(key: &str) -> Result<Self, ConfigError> {
        match key {
            WEIGHT_KEY => Ok(ParamRole::Weight),
            BIAS_KEY => Ok(ParamRole::Bias),
            _ => Err(ConfigError::UnknownParameterRole {
                role: key.to_string(),
            }),
        }
    }
}

/// Per-layer regularization coefficients, set at configuration time and
/// read-only during lookup.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Regularization {
    /// L1 penalty applied to weights.
    #[serde(default)]
    pub l1: f64,

    /// L2 penalty applied to weights.
    #[serde(default)]
    pub l2: f64,

    /// L1 penalty applied to biases.
    #[serde(default)]
    pub l1_bias: f64,

    /// L2 penalty applied to biases.
    #[serde(default)]
    pub l2_bias: f64,
}

impl Regularization {
    /// Look up the coefficient for a penalty kind and parameter role.
    pub fn penalty(&self, kind: PenaltyKind, role: ParamRole) -> f64 {
        match (kind, role) {
            (PenaltyKind::L1, ParamRole::Weight) => self.l1,
            (PenaltyKind::L1, ParamRole::Bias) => self.l1_bias,
            (PenaltyKind::L2, ParamRole::Weight) => self.l2,
            (PenaltyKind::L2, ParamRole::Bias) => self.l2_bias,
        }
    }
}
