//! Static page behaviors: navbar scroll highlight and publication tabs.
//!
//! These bind to markup that already exists in the page, so every lookup is
//! optional: a page without a navbar or tabs simply gets no listeners.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, Window};

use crate::error::{Error, Result};

/// Scroll offset (px) past which the navbar gets its `scrolled` style.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Whether the navbar should render in its scrolled style.
pub fn navbar_is_scrolled(offset: f64) -> bool {
	offset > NAVBAR_SCROLL_THRESHOLD
}

/// A group of tabs of which at most one is visible.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TabStrip {
	names: Vec<String>,
	active: Option<usize>,
}

impl TabStrip {
	/// Strip over the given tab names, none visible yet. Empty names are
	/// dropped so an unnamed panel can never be activated.
	pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Self {
			names: names
				.into_iter()
				.map(Into::into)
				.filter(|name: &String| !name.is_empty())
				.collect(),
			active: None,
		}
	}

	/// Make `name` the visible tab. Unknown names leave the strip unchanged.
	pub fn activate(&mut self, name: &str) -> bool {
		match self.names.iter().position(|n| n == name) {
			Some(idx) => {
				self.active = Some(idx);
				true
			}
			None => false,
		}
	}

	/// Name of the visible tab.
	pub fn active(&self) -> Option<&str> {
		self.active.map(|idx| self.names[idx].as_str())
	}

	/// Whether `name` is the visible tab.
	pub fn is_visible(&self, name: &str) -> bool {
		self.active() == Some(name)
	}
}

/// Attach the navbar and tab behaviors to the current document.
pub fn install() -> Result<()> {
	let window = web_sys::window().ok_or(Error::NoWindow)?;
	let document = window.document().ok_or(Error::NoDocument)?;
	install_navbar(&window, &document)?;
	install_tabs(&document)?;
	Ok(())
}

fn install_navbar(window: &Window, document: &Document) -> Result<()> {
	let Some(navbar) = document.get_element_by_id("navbar") else {
		debug!("portfolio-particles: no #navbar, skipping scroll highlight");
		return Ok(());
	};

	let on_scroll = Closure::<dyn FnMut()>::new(move || {
		let Some(offset) = web_sys::window().and_then(|w| w.scroll_y().ok()) else {
			return;
		};
		let _ = navbar
			.class_list()
			.toggle_with_force("scrolled", navbar_is_scrolled(offset));
	});
	window
		.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
		.map_err(|e| Error::js("add_event_listener(scroll)", e))?;
	// Lives as long as the page.
	on_scroll.forget();
	Ok(())
}

fn elements(document: &Document, selector: &str) -> Result<Vec<Element>> {
	let list = document
		.query_selector_all(selector)
		.map_err(|e| Error::js("query_selector_all", e))?;
	Ok((0..list.length())
		.filter_map(|i| list.item(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect())
}

/// Show the panel matching the strip's active tab and mark its button.
fn apply_tabs(document: &Document, strip: &TabStrip) -> Result<()> {
	for panel in elements(document, ".tab-content")? {
		if let Some(panel) = panel.dyn_ref::<HtmlElement>() {
			let display = if strip.is_visible(&panel.id()) { "block" } else { "none" };
			let _ = panel.style().set_property("display", display);
		}
	}
	for button in elements(document, ".tab-btn")? {
		let active = button
			.get_attribute("data-tab")
			.is_some_and(|tab| strip.is_visible(&tab));
		let _ = button.class_list().toggle_with_force("active", active);
	}
	Ok(())
}

fn install_tabs(document: &Document) -> Result<()> {
	let panels = elements(document, ".tab-content")?;
	if panels.is_empty() {
		return Ok(());
	}
	let strip = Rc::new(RefCell::new(TabStrip::new(panels.iter().map(|p| p.id()))));

	for button in elements(document, ".tab-btn")? {
		let Some(tab) = button.get_attribute("data-tab") else {
			continue;
		};
		let (strip, document) = (strip.clone(), document.clone());
		let on_click = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
			let mut strip = strip.borrow_mut();
			if strip.activate(&tab) {
				if let Err(e) = apply_tabs(&document, &strip) {
					log::warn!("portfolio-particles: tab switch failed: {}", e);
				}
			}
		});
		button
			.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
			.map_err(|e| Error::js("add_event_listener(click)", e))?;
		on_click.forget();
	}
	debug!("portfolio-particles: bound {} tab panels", panels.len());
	Ok(())
}
