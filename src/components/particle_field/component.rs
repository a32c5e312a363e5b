//! Leptos component wrapping the particle field canvas.
//!
//! The component creates an HTML canvas element, sizes it to its parent
//! container with device-pixel-ratio awareness, and wires window resize and
//! mousemove handlers. An animation loop runs via `requestAnimationFrame`,
//! clearing the surface, stepping the simulation, and repainting each frame.
//! Unmounting removes the listeners and stops the loop; a frame already
//! scheduled when the component unmounts lands on a no-op.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::bounds::BoundsTracker;
use super::field::ParticleField;
use super::pointer::PointerTracker;
use super::render::{self, Surface};
use super::style::FieldStyle;

/// Per-instance simulation state owned by one mounted component.
///
/// Two mounted fields never share anything; each holds its own context,
/// bounds, pointer, and particles.
struct FieldContext {
	ctx: CanvasRenderingContext2d,
	bounds: BoundsTracker,
	pointer: PointerTracker,
	field: ParticleField,
	running: bool,
}

/// Size the canvas to its parent container and reseed the field.
///
/// The backing store gets the pixel size, the CSS style the logical size.
/// Resetting the backing store clears the context transform, so the pixel
/// ratio scale is reapplied here on every pass.
fn apply_sizing(canvas: &HtmlCanvasElement, c: &mut FieldContext) {
	let (w, h) = canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.unwrap_or((0.0, 0.0));
	let desc = c.bounds.resize(w, h);

	canvas.set_width(desc.pixel_width as u32);
	canvas.set_height(desc.pixel_height as u32);
	let style = web_sys::HtmlElement::style(canvas);
	let _ = style.set_property("width", &format!("{}px", desc.logical_width));
	let _ = style.set_property("height", &format!("{}px", desc.logical_height));
	let _ = c.ctx.scale(desc.pixel_ratio, desc.pixel_ratio);

	c.field.reseed(&desc);
}

/// Renders an ambient particle backdrop on a canvas element.
///
/// The canvas fills its parent container and reseeds whenever the window
/// resizes. `staticity` scales drift speed and `ease` the per-frame damping;
/// both are divided by 1000 internally. Drive `refresh` to `true` to force a
/// reseed without a size change.
#[component]
pub fn ParticleFieldCanvas(
	#[prop(default = 30)] quantity: usize,
	#[prop(default = 50.0)] staticity: f64,
	#[prop(default = 50.0)] ease: f64,
	#[prop(default = None)] refresh: Option<Signal<bool>>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let pointer_cb: Rc<RefCell<Option<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(None));
	let (staticity, ease) = (staticity / 1000.0, ease / 1000.0);

	let (context_init, animate_init, resize_cb_init, pointer_cb_init) = (
		context.clone(),
		animate.clone(),
		resize_cb.clone(),
		pointer_cb.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let mut field_ctx = FieldContext {
			ctx,
			bounds: BoundsTracker::new(window.device_pixel_ratio()),
			pointer: PointerTracker::new(),
			field: ParticleField::new(quantity, FieldStyle::default()),
			running: true,
		};
		apply_sizing(&canvas, &mut field_ctx);
		*context_init.borrow_mut() = Some(field_ctx);

		let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				apply_sizing(&canvas_resize, c);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		// Listen on the window rather than the canvas: the backdrop usually
		// sits underneath other content that would swallow canvas events.
		let (context_pointer, canvas_pointer) = (context_init.clone(), canvas.clone());
		*pointer_cb_init.borrow_mut() = Some(Closure::new(move |ev: MouseEvent| {
			let rect = canvas_pointer.get_bounding_client_rect();
			if let Some(ref mut c) = *context_pointer.borrow_mut() {
				let desc = c.bounds.descriptor();
				c.pointer.observe(
					ev.client_x() as f64,
					ev.client_y() as f64,
					(rect.left(), rect.top()),
					&desc,
				);
			}
		}));
		if let Some(ref cb) = *pointer_cb_init.borrow() {
			let _ =
				window.add_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			let mut keep_running = false;
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				if c.running {
					keep_running = true;
					let desc = c.bounds.descriptor();
					// A zero-sized surface pauses the frame body, not the
					// loop; it self-corrects once the surface regains size.
					if !desc.is_empty() {
						c.ctx.clear(desc.logical_width, desc.logical_height);
						let pointer = c.pointer.position();
						c.field.step(pointer, staticity, ease);
						render::render(&c.field, &c.ctx);
					}
				}
			}
			// A tick that fires after unmount must not reschedule.
			if keep_running {
				if let Some(ref cb) = *animate_inner.borrow() {
					let _ = web_sys::window()
						.unwrap()
						.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	if let Some(refresh) = refresh {
		let context_refresh = context.clone();
		Effect::new(move |_| {
			if !refresh.get() {
				return;
			}
			let Some(canvas) = canvas_ref.get() else {
				return;
			};
			let canvas: HtmlCanvasElement = canvas.into();
			if let Some(ref mut c) = *context_refresh.borrow_mut() {
				apply_sizing(&canvas, c);
			}
		});
	}

	let cleanup_state = SendWrapper::new((context, resize_cb, pointer_cb));
	on_cleanup(move || {
		let (context_cleanup, resize_cleanup, pointer_cleanup) = cleanup_state.take();
		if let Some(window) = web_sys::window() {
			if let Some(cb) = resize_cleanup.borrow_mut().take() {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
			if let Some(cb) = pointer_cleanup.borrow_mut().take() {
				let _ = window
					.remove_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
			}
		}
		// The animate closure keeps itself alive through its own Rc; the
		// flag makes any already-scheduled frame a safe no-op. Running this
		// cleanup twice just sees the listeners already taken.
		if let Some(ref mut c) = *context_cleanup.borrow_mut() {
			c.running = false;
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			style="display: block;"
		/>
	}
}
