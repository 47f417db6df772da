//! Leptos component hosting the particle field canvas.
//!
//! The component creates a canvas sized to the viewport, seeds a [`Field`],
//! and hands it to an [`Animator`] driven by `requestAnimationFrame`. Window
//! resize re-seeds the field; window scroll pauses and resumes it.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use super::config::FieldConfig;
use super::field::Field;
use super::lifecycle::Animator;
use super::render::CanvasSurface;
use super::scheduler::{FrameCallback, RafScheduler};
use super::theme::{CssVariables, Palette};
use crate::error::{Error, Result};

/// Animator and the canvas it draws on, created once the canvas mounts.
struct FieldContext {
	animator: Animator<RafScheduler>,
	surface: CanvasSurface,
}

type SharedContext = Rc<RefCell<Option<FieldContext>>>;
type Listeners = Rc<RefCell<Vec<Closure<dyn FnMut()>>>>;

/// Renders the animated particle network behind the page content.
///
/// The canvas is fixed to the viewport and ignores pointer events.
#[component]
pub fn ParticleCanvas(
	/// Tuning overrides; invalid values fall back to the defaults.
	#[prop(default = FieldConfig::default())]
	config: FieldConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: SharedContext = Rc::new(RefCell::new(None));
	let frame: FrameCallback = Rc::new(RefCell::new(None));
	let listeners: Listeners = Rc::new(RefCell::new(Vec::new()));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if context.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		if let Err(e) = mount(canvas, config.clone(), &context, &frame, &listeners) {
			warn!("portfolio-particles: particle field disabled: {}", e);
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="particleCanvas"
			class="particle-canvas"
			style="position: fixed; inset: 0; z-index: -1; pointer-events: none;"
		/>
	}
}

fn pixels(value: std::result::Result<JsValue, JsValue>, context: &'static str) -> Result<u32> {
	value
		.map_err(|e| Error::js(context, e))
		.map(|v| v.as_f64().unwrap_or(0.0).max(0.0) as u32)
}

fn viewport_size(window: &Window) -> Result<(u32, u32)> {
	Ok((
		pixels(window.inner_width(), "inner_width")?,
		pixels(window.inner_height(), "inner_height")?,
	))
}

fn mount(
	canvas: HtmlCanvasElement,
	config: FieldConfig,
	context: &SharedContext,
	frame: &FrameCallback,
	listeners: &Listeners,
) -> Result<()> {
	let window = web_sys::window().ok_or(Error::NoWindow)?;
	let (width, height) = viewport_size(&window)?;
	let config = match config.validate() {
		Ok(()) => config,
		Err(e) => {
			warn!("portfolio-particles: using default field config: {}", e);
			FieldConfig::default()
		}
	};

	let mut surface = CanvasSurface::new(canvas)?;
	surface.resize(width, height);

	let palette = match CssVariables::new(&window) {
		Some(vars) => Palette::resolve(&vars),
		None => Palette::default(),
	};
	let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
	let mut field = Field::new(config, palette, fastrand::Rng::with_seed(seed));
	field.init(width, height);

	let scheduler = RafScheduler::new(window.clone(), frame.clone());
	*context.borrow_mut() = Some(FieldContext {
		animator: Animator::new(field, scheduler),
		surface,
	});

	let context_frame = context.clone();
	*frame.borrow_mut() = Some(Closure::new(move || {
		if let Some(ref mut c) = *context_frame.borrow_mut() {
			c.animator.tick(&mut c.surface);
		}
	}));

	let context_resize = context.clone();
	let resize = Closure::<dyn FnMut()>::new(move || {
		let Some(win) = web_sys::window() else {
			return;
		};
		match viewport_size(&win) {
			Ok((w, h)) => {
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.surface.resize(w, h);
					c.animator.on_resize(w, h);
				}
			}
			Err(e) => warn!("portfolio-particles: resize ignored: {}", e),
		}
	});
	window
		.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
		.map_err(|e| Error::js("add_event_listener(resize)", e))?;
	listeners.borrow_mut().push(resize);

	let context_scroll = context.clone();
	let scroll = Closure::<dyn FnMut()>::new(move || {
		let Some(offset) = web_sys::window().and_then(|w| w.scroll_y().ok()) else {
			return;
		};
		if let Some(ref mut c) = *context_scroll.borrow_mut() {
			c.animator.on_scroll(offset);
		}
	});
	window
		.add_event_listener_with_callback("scroll", scroll.as_ref().unchecked_ref())
		.map_err(|e| Error::js("add_event_listener(scroll)", e))?;
	listeners.borrow_mut().push(scroll);

	if let Some(ref mut c) = *context.borrow_mut() {
		c.animator.start();
		info!(
			"portfolio-particles: animating {} particles on {}x{}",
			c.animator.field().particles().len(),
			width,
			height
		);
	}
	Ok(())
}
