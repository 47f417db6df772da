//! portfolio-particles: client-side behavior for a static portfolio site.
//!
//! This crate provides a WASM-based animated particle network that sits
//! behind the page content, plus the small navbar and tab behaviors the page
//! markup expects.

use leptos::prelude::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod error;

pub use components::particle_field::{FieldConfig, ParticleCanvas};
pub use error::{Error, Result};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-particles: logging initialized");
}

/// Parse and validate a [`FieldConfig`] from JSON, keeping defaults for
/// absent keys.
pub fn parse_field_config(json: &str) -> Result<FieldConfig> {
	let config: FieldConfig = serde_json::from_str(json)?;
	config.validate()?;
	Ok(config)
}

/// Load field tuning from a script element with id="particle-config".
/// Expected format: a JSON object with any subset of [`FieldConfig`] keys.
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match parse_field_config(&json_text) {
		Ok(config) => {
			info!(
				"portfolio-particles: loaded config (max {} particles)",
				config.max_particles
			);
			Some(config)
		}
		Err(e) => {
			warn!("portfolio-particles: ignoring particle config: {}", e);
			None
		}
	}
}

/// Wire the navbar and tab behaviors into the existing page markup.
pub fn install_page_behaviors() {
	if let Err(e) = components::page::install() {
		warn!("portfolio-particles: page behaviors unavailable: {}", e);
	}
}

/// Main application component.
/// Loads field tuning from the DOM and renders the particle background.
#[component]
pub fn App() -> impl IntoView {
	let config = load_field_config().unwrap_or_default();

	view! {
		<div class="particle-background">
			<ParticleCanvas config=config />
		</div>
	}
}
