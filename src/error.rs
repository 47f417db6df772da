//! Errors raised while wiring the site behaviors into the page.
//!
//! The simulation itself never fails; these only surface while reading the
//! page config, looking up DOM handles or talking to browser APIs, and are
//! logged by the caller.

use wasm_bindgen::JsValue;

/// Failures while wiring into the page.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// `web_sys::window()` returned nothing.
	#[error("no global window")]
	NoWindow,
	/// The window has no document attached.
	#[error("window has no document")]
	NoDocument,
	/// The canvas refused to hand out a 2D context.
	#[error("canvas 2d context unavailable")]
	ContextUnavailable,
	/// A browser API call threw.
	#[error("{context} failed: {message}")]
	Js {
		/// The API that was called.
		context: &'static str,
		/// Stringified JS exception.
		message: String,
	},
	/// The particle config JSON did not parse.
	#[error("invalid particle config JSON: {0}")]
	ConfigJson(#[from] serde_json::Error),
	/// A particle config value is out of range.
	#[error("particle config `{field}` = {value} {requirement}")]
	InvalidConfig {
		/// Offending key.
		field: &'static str,
		/// Value supplied.
		value: f64,
		/// What the value must satisfy.
		requirement: &'static str,
	},
}

impl Error {
	/// Wrap a JS exception raised by `context`.
	pub fn js(context: &'static str, value: JsValue) -> Self {
		let message = value
			.as_string()
			.unwrap_or_else(|| format!("{value:?}"));
		Self::Js { context, message }
	}
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;
