//! Error types for the Lorenz demos.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DemoError>;

#[derive(Debug, Error)]
pub enum DemoError {
    /// A trajectory needs at least one integration step.
    #[error("step count must be positive")]
    InvalidStepCount,

    #[error("step size must be finite and positive, got {0}")]
    InvalidStepSize(f64),

    /// Window, context or rendering failure reported by ggez.
    #[error("ggez error: {0}")]
    Game(#[from] ggez::GameError),
}
