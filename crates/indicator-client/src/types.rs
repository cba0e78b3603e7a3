//! Indicator service types.

use serde::Deserialize;

/// Computed indicator values for a symbol/interval pair.
///
/// The service reports `rsi` as a number; bodies that do not decode into
/// this shape are a hard error, never substituted with zero.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Indicator {
    pub rsi: f64,
}
