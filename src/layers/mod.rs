//! Layer configuration abstractions
//!
//! This module provides the LayerShapeContract trait and the
//! feed-forward-style layer family that implements it.

mod contract;
pub mod feed_forward;

// Re-export the contract trait and the family config for convenience
pub use contract::LayerShapeContract;
pub use feed_forward::FeedForwardConfig;
