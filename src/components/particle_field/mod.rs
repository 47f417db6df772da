//! Animated particle network background.
//!
//! Particles drift across a full-viewport canvas, bounce off its edges, and
//! are joined by fading lines when close enough:
//! - Particle count scales with canvas area, up to a ceiling
//! - Connections are computed in squared-distance space
//! - The animation pauses while scrolled away from the top of the page
//! - Colors follow the page theme's CSS custom properties
//!
//! # Example
//!
//! ```ignore
//! use portfolio_particles::{FieldConfig, ParticleCanvas};
//!
//! let config = FieldConfig { max_particles: 90, ..FieldConfig::default() };
//! view! { <ParticleCanvas config=config /> }
//! ```

mod component;
pub mod config;
pub mod field;
pub mod lifecycle;
pub mod particle;
pub mod render;
pub mod scheduler;
pub mod theme;

pub use component::ParticleCanvas;
pub use config::FieldConfig;
pub use field::Field;
pub use lifecycle::{Animator, RunState};
pub use theme::{Palette, ThemeSource};
