//! Page components: the particle background and the static page behaviors.

pub mod page;
pub mod particle_field;
