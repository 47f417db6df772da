//! Theme colors for the particle field.
//!
//! Particle and connection colors come from the host page's color scheme,
//! read as `"r, g, b"` channel triples through a [`ThemeSource`]. Missing or
//! malformed entries fall back to the constants below.

use std::collections::HashMap;

use web_sys::{Element, Window};

/// Key holding the primary particle channels.
pub const PRIMARY_KEY: &str = "--particle-primary-rgb";
/// Key holding the secondary particle channels.
pub const SECONDARY_KEY: &str = "--particle-secondary-rgb";

/// Fallback primary channels (orange red).
pub const FALLBACK_PRIMARY: (u8, u8, u8) = (255, 69, 0);
/// Fallback secondary channels (dark orange).
pub const FALLBACK_SECONDARY: (u8, u8, u8) = (255, 140, 0);

const PRIMARY_ALPHA: f64 = 0.4;
const SECONDARY_ALPHA: f64 = 0.3;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Color from channels and alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same channels, different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS `rgba(...)` string.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Named lookup of RGB channel triples provided by the host page.
pub trait ThemeSource {
	/// Raw value stored under `key`, if any.
	fn lookup(&self, key: &str) -> Option<String>;
}

impl ThemeSource for HashMap<String, String> {
	fn lookup(&self, key: &str) -> Option<String> {
		self.get(key).cloned()
	}
}

/// Reads CSS custom properties from the computed style of the document root.
pub struct CssVariables {
	window: Window,
	root: Element,
}

impl CssVariables {
	/// Reader for `window`'s document root, if the document is loaded.
	pub fn new(window: &Window) -> Option<Self> {
		let root = window.document()?.document_element()?;
		Some(Self {
			window: window.clone(),
			root,
		})
	}
}

impl ThemeSource for CssVariables {
	fn lookup(&self, key: &str) -> Option<String> {
		let style = self.window.get_computed_style(&self.root).ok()??;
		let value = style.get_property_value(key).ok()?;
		let value = value.trim();
		(!value.is_empty()).then(|| value.to_string())
	}
}

/// Parses `"255, 69, 0"` (optionally wrapped in `rgb(...)`) into channels.
pub fn parse_rgb_triple(value: &str) -> Option<(u8, u8, u8)> {
	let inner = value
		.trim()
		.trim_start_matches("rgb(")
		.trim_end_matches(')');
	let mut channels = inner.split(',').map(|s| s.trim().parse::<u8>());
	let r = channels.next()?.ok()?;
	let g = channels.next()?.ok()?;
	let b = channels.next()?.ok()?;
	if channels.next().is_some() {
		return None;
	}
	Some((r, g, b))
}

/// The two particle colors plus the connection line color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
	/// Color of half the particles.
	pub primary: Color,
	/// Color of the other half.
	pub secondary: Color,
	/// Base color of connection lines; alpha is replaced per line.
	pub link: Color,
}

impl Palette {
	/// Resolves the palette from `source`, falling back per key.
	pub fn resolve(source: &dyn ThemeSource) -> Self {
		let channels = |key: &str, fallback: (u8, u8, u8)| {
			source
				.lookup(key)
				.and_then(|v| parse_rgb_triple(&v))
				.unwrap_or_else(|| {
					log::debug!("portfolio-particles: theme key {key} unset, using fallback");
					fallback
				})
		};
		let (pr, pg, pb) = channels(PRIMARY_KEY, FALLBACK_PRIMARY);
		let (sr, sg, sb) = channels(SECONDARY_KEY, FALLBACK_SECONDARY);

		Self {
			primary: Color::rgba(pr, pg, pb, PRIMARY_ALPHA),
			secondary: Color::rgba(sr, sg, sb, SECONDARY_ALPHA),
			link: Color::rgba(pr, pg, pb, 1.0),
		}
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self::resolve(&HashMap::new())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn parses_channel_triples() {
		assert_eq!(parse_rgb_triple("255, 69, 0"), Some((255, 69, 0)));
		assert_eq!(parse_rgb_triple(" 1,2,3 "), Some((1, 2, 3)));
		assert_eq!(parse_rgb_triple("rgb(10, 20, 30)"), Some((10, 20, 30)));
	}

	#[test]
	fn rejects_malformed_triples() {
		assert_eq!(parse_rgb_triple(""), None);
		assert_eq!(parse_rgb_triple("255, 69"), None);
		assert_eq!(parse_rgb_triple("255, 69, 0, 1"), None);
		assert_eq!(parse_rgb_triple("300, 0, 0"), None);
		assert_eq!(parse_rgb_triple("red"), None);
	}

	#[test]
	fn missing_keys_use_fallbacks() {
		let palette = Palette::resolve(&HashMap::new());
		assert_eq!(palette.primary, Color::rgba(255, 69, 0, 0.4));
		assert_eq!(palette.secondary, Color::rgba(255, 140, 0, 0.3));
		assert_eq!(palette.link, Color::rgba(255, 69, 0, 1.0));
	}

	#[test]
	fn theme_values_override_fallbacks() {
		let source: HashMap<String, String> = [
			(PRIMARY_KEY.to_string(), "0, 128, 255".to_string()),
			(SECONDARY_KEY.to_string(), "garbage".to_string()),
		]
		.into_iter()
		.collect();

		let palette = Palette::resolve(&source);
		assert_eq!(palette.primary, Color::rgba(0, 128, 255, 0.4));
		assert_eq!(palette.link, Color::rgba(0, 128, 255, 1.0));
		assert_eq!(palette.secondary, Color::rgba(255, 140, 0, 0.3));
	}

	#[test]
	fn css_output_keeps_alpha() {
		assert_eq!(
			Color::rgba(255, 69, 0, 0.4).with_alpha(0.1).to_css(),
			"rgba(255, 69, 0, 0.1)"
		);
	}
}
