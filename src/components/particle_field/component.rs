//! Leptos component owning the particle-field canvas.
//!
//! Wires a fixed fullscreen canvas to the animator: sizes the surface to the
//! viewport, seeds the particle set, and drives the per-frame
//! update/draw/connect cycle through `requestAnimationFrame`. Reseeds (mount,
//! color-mode change, resize settle) cancel the pending frame before the new
//! particle set goes in, so a stale frame callback never reads half-replaced
//! state. Unmount cancels the loop and removes both window listeners.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::field::ParticleField;
use super::render;
use super::schedule::PendingHandle;
use super::theme::{ColorMode, FieldStyle};
use super::tier::{DeviceTier, TierProfile};

/// Delay after the last resize event before the field regenerates, ms.
const RESIZE_SETTLE_MS: i32 = 250;
/// Minimum interval between processed pointer moves, ms (roughly 60 fps).
const POINTER_THROTTLE_MS: f64 = 16.0;

/// Field plus the style it was seeded with; swapped wholesale on reseed.
struct FieldContext {
	field: ParticleField,
	style: FieldStyle,
}

fn viewport_size(window: &Window) -> (f64, f64) {
	(
		window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
		window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0),
	)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	match canvas.get_context("2d") {
		Ok(Some(obj)) => obj.dyn_into().ok(),
		_ => None,
	}
}

/// Size the canvas to the viewport and regenerate the particle set for the
/// current color mode. A zero-area viewport seeds an empty field.
fn reseed(
	canvas: &HtmlCanvasElement,
	window: &Window,
	mode: ColorMode,
	context: &Rc<RefCell<Option<FieldContext>>>,
) {
	let (w, h) = viewport_size(window);
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let tier = DeviceTier::classify(w);
	let profile = TierProfile::for_tier(tier);
	let style = FieldStyle::for_mode(mode);
	let field = ParticleField::seed(profile, w, h, &style, js_sys::Date::now());
	debug!(
		"particle field reseed: {}x{} {:?} {:?}, {} particles",
		w as u32,
		h as u32,
		tier,
		mode,
		field.len()
	);

	*context.borrow_mut() = Some(FieldContext { field, style });
}

fn cancel_frame(window: &Window, frame: &Rc<RefCell<PendingHandle>>) {
	frame.borrow_mut().clear(|h| {
		let _ = window.cancel_animation_frame(h);
	});
}

fn request_frame(window: &Window, frame: &Rc<RefCell<PendingHandle>>, cb: &Closure<dyn FnMut()>) {
	if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
		frame.borrow_mut().replace(id, |h| {
			let _ = window.cancel_animation_frame(h);
		});
	}
}

/// Fullscreen decorative particle background.
///
/// Owns its drawing surface and render loop; reacts to viewport resize,
/// pointer movement, and the page's color mode (a mode change reseeds the
/// field with fresh colors). Output is pixels only: there is no callback
/// contract beyond mount and unmount, and every failure path degrades to an
/// empty canvas rather than an error surface.
#[component]
pub fn ParticleFieldCanvas(#[prop(into)] mode: Signal<ColorMode>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let settle_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let pointer_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> = Rc::new(RefCell::new(None));
	let frame: Rc<RefCell<PendingHandle>> = Rc::new(RefCell::new(PendingHandle::new()));
	let settle: Rc<RefCell<PendingHandle>> = Rc::new(RefCell::new(PendingHandle::new()));
	let last_pointer: Rc<Cell<f64>> = Rc::new(Cell::new(0.0));

	let (context_fx, animate_fx, resize_cb_fx, settle_cb_fx, pointer_cb_fx, frame_fx, settle_fx) = (
		context.clone(),
		animate.clone(),
		resize_cb.clone(),
		settle_cb.clone(),
		pointer_cb.clone(),
		frame.clone(),
		settle.clone(),
	);

	Effect::new(move |_| {
		// Read first so the effect re-runs on every mode change, even while
		// the canvas has not been attached yet.
		let mode_now = mode.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		// Cancel before swapping the particle set; a stale frame callback
		// must never see a half-replaced field.
		cancel_frame(&window, &frame_fx);
		reseed(&canvas, &window, mode_now, &context_fx);

		// The 2d context, frame callback, and listeners are created once;
		// later reseeds swap the field underneath them.
		if animate_fx.borrow().is_none() {
			let Some(ctx) = context_2d(&canvas) else {
				warn!("particle field: no 2d context, background stays empty");
				return;
			};

			let (context_anim, frame_anim, animate_inner) =
				(context_fx.clone(), frame_fx.clone(), animate_fx.clone());
			*animate_fx.borrow_mut() = Some(Closure::new(move || {
				if let Some(ref mut c) = *context_anim.borrow_mut() {
					c.field.step();
					render::draw(&ctx, &c.field, &c.style);
				}
				if let Some(win) = web_sys::window() {
					if let Some(ref cb) = *animate_inner.borrow() {
						request_frame(&win, &frame_anim, cb);
					}
				}
			}));

			// Resize settle: regenerate once the viewport stops changing.
			let (context_st, animate_st, frame_st, settle_st, canvas_st) = (
				context_fx.clone(),
				animate_fx.clone(),
				frame_fx.clone(),
				settle_fx.clone(),
				canvas.clone(),
			);
			*settle_cb_fx.borrow_mut() = Some(Closure::new(move || {
				// The timeout that invoked us has fired; drop its id.
				settle_st.borrow_mut().clear(|_| {});
				let Some(win) = web_sys::window() else {
					return;
				};
				cancel_frame(&win, &frame_st);
				reseed(&canvas_st, &win, mode.get_untracked(), &context_st);
				if let Some(ref cb) = *animate_st.borrow() {
					request_frame(&win, &frame_st, cb);
				}
			}));

			let (settle_rz, settle_cb_rz) = (settle_fx.clone(), settle_cb_fx.clone());
			*resize_cb_fx.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				if let Some(ref cb) = *settle_cb_rz.borrow() {
					if let Ok(id) = win.set_timeout_with_callback_and_timeout_and_arguments_0(
						cb.as_ref().unchecked_ref(),
						RESIZE_SETTLE_MS,
					) {
						// Restarting the timer debounces a resize storm.
						settle_rz.borrow_mut().replace(id, |h| {
							win.clear_timeout_with_handle(h);
						});
					}
				}
			}));
			if let Some(ref cb) = *resize_cb_fx.borrow() {
				let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}

			let (context_pt, last_pt) = (context_fx.clone(), last_pointer.clone());
			*pointer_cb_fx.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
				let now = js_sys::Date::now();
				if now - last_pt.get() < POINTER_THROTTLE_MS {
					return;
				}
				last_pt.set(now);
				if let Some(ref mut c) = *context_pt.borrow_mut() {
					// The canvas is viewport-fixed, so client coordinates
					// map onto it directly.
					c.field.repel_from(ev.client_x() as f64, ev.client_y() as f64);
				}
			}));
			if let Some(ref cb) = *pointer_cb_fx.borrow() {
				let _ =
					window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
			}
		}

		if let Some(ref cb) = *animate_fx.borrow() {
			request_frame(&window, &frame_fx, cb);
		}
	});

	// The cleanup captures !Send `Rc<RefCell<_>>` handles, but leptos's
	// `on_cleanup` requires `Send + Sync`. On the single-threaded wasm target
	// these never cross threads, so wrap the closure in `SendWrapper` (leptos
	// re-exports it for exactly this) to satisfy the bound without changing
	// behavior.
	let cleanup = leptos::__reexports::send_wrapper::SendWrapper::new(move || {
		if let Some(window) = web_sys::window() {
			cancel_frame(&window, &frame);
			settle.borrow_mut().clear(|h| {
				window.clear_timeout_with_handle(h);
			});
			if let Some(cb) = resize_cb.borrow_mut().take() {
				let _ =
					window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
			if let Some(cb) = pointer_cb.borrow_mut().take() {
				let _ = window
					.remove_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
			}
		}
		settle_cb.borrow_mut().take();
		animate.borrow_mut().take();
		context.borrow_mut().take();
	});
	on_cleanup(move || (cleanup.take())());

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			aria-hidden="true"
			style="position: fixed; inset: 0; width: 100%; height: 100%; display: block; z-index: 0;"
		/>
	}
}
