//! Construction-time errors for scene and render setup.
//!
//! Nothing in the tracing loop itself fails: numeric edge cases there are
//! ordinary `Option` branches. These errors only guard against inputs that
//! would otherwise turn into NaN/Inf downstream.

use thiserror::Error;

/// Errors that can occur while building a scene, camera or render config.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Sphere radius must be non-zero")]
    ZeroRadius,

    #[error("Sphere radius must be finite, got {0}")]
    NonFiniteRadius(f32),

    #[error("Refractive index must be finite and positive, got {0}")]
    InvalidRefractiveIndex(f32),

    #[error("Degenerate camera: {0}")]
    DegenerateCamera(&'static str),

    #[error("Invalid render config: {0}")]
    InvalidConfig(String),
}

pub type SceneResult<T> = Result<T, SceneError>;
