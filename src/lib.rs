//! studhub-site: single-page StudHub marketing site.
//!
//! A WASM CSR app: static content sections rendered over a fullscreen
//! animated particle-field canvas, with a persisted dark/light mode and a
//! contact form that forwards to a transactional email relay.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;

pub use components::particle_field::{ColorMode, ParticleFieldCanvas};

use components::contact::ContactForm;
use components::page::{About, Hero, Projects, Services, SiteFooter, SiteNav, Technologies};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("studhub-site: logging initialized");
}

/// Storage key for the persisted color mode.
const THEME_KEY: &str = "theme";

fn local_storage() -> Option<web_sys::Storage> {
	web_sys::window()?.local_storage().ok().flatten()
}

/// Color mode persisted from a previous visit, if any.
fn stored_mode() -> Option<ColorMode> {
	let value = local_storage()?.get_item(THEME_KEY).ok().flatten()?;
	ColorMode::from_name(&value)
}

fn store_mode(mode: ColorMode) {
	if let Some(storage) = local_storage() {
		let _ = storage.set_item(THEME_KEY, mode.name());
	}
}

/// Main application component: the particle background plus the page shell.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let mode = RwSignal::new(stored_mode().unwrap_or_default());
	let toggle = Callback::new(move |_: ()| {
		let next = mode.get_untracked().toggled();
		mode.set(next);
		store_mode(next);
	});

	// Mirror the mode onto <html data-theme="..."> for the stylesheet.
	Effect::new(move |_| {
		let current = mode.get();
		if let Some(root) = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.document_element())
		{
			let _ = root.set_attribute("data-theme", current.name());
		}
	});

	view! {
		<Html attr:lang="en" />
		<Title text="StudHub - Student Web Solutions" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleFieldCanvas mode=mode />
		<div class="page">
			<SiteNav mode=mode on_toggle=toggle />
			<main>
				<Hero />
				<Services />
				<Projects />
				<Technologies />
				<About />
				<ContactForm />
			</main>
			<SiteFooter />
		</div>
	}
}
