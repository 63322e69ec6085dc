//! Contact form forwarding submissions to the transactional email relay.
//!
//! The relay accepts name/email/institution/message and answers with
//! success or failure. On success the form resets and shows a transient
//! acknowledgment; failures are logged and surfaced inline. No retries,
//! no queueing.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use log::warn;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

/// EmailJS send endpoint; the account routes messages to the studio inbox.
const RELAY_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
const SERVICE_ID: &str = "service_pnr5uok";
const TEMPLATE_ID: &str = "template_smpcie9";
const PUBLIC_KEY: &str = "she8kcUPDszRB7iPb";

/// How long the success acknowledgment stays up, ms.
const ACK_MS: i32 = 5000;

/// One submission from the contact form.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ContactMessage {
	pub name: String,
	pub email: String,
	pub institution: String,
	pub message: String,
}

/// Relay envelope around one [`ContactMessage`].
#[derive(Serialize)]
struct RelayRequest<'a> {
	service_id: &'a str,
	template_id: &'a str,
	user_id: &'a str,
	template_params: ContactMessage,
}

/// POST a submission to the relay. Errors on network failure or a
/// non-success status.
async fn send_message(msg: ContactMessage) -> Result<(), JsValue> {
	let body = serde_json::to_string(&RelayRequest {
		service_id: SERVICE_ID,
		template_id: TEMPLATE_ID,
		user_id: PUBLIC_KEY,
		template_params: msg,
	})
	.map_err(|e| JsValue::from_str(&e.to_string()))?;

	let headers = Headers::new()?;
	headers.set("Content-Type", "application/json")?;

	let init = RequestInit::new();
	init.set_method("POST");
	init.set_mode(RequestMode::Cors);
	init.set_headers(&headers);
	init.set_body(&JsValue::from_str(&body));

	let request = Request::new_with_str_and_init(RELAY_URL, &init)?;
	let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
	let response: Response = JsFuture::from(window.fetch_with_request(&request))
		.await?
		.dyn_into()?;

	if response.ok() {
		Ok(())
	} else {
		Err(JsValue::from_str(&format!(
			"relay answered {}",
			response.status()
		)))
	}
}

/// Contact section with the direct-message form.
#[component]
pub fn ContactForm() -> impl IntoView {
	let name = RwSignal::new(String::new());
	let email = RwSignal::new(String::new());
	let institution = RwSignal::new(String::new());
	let message = RwSignal::new(String::new());
	let submitted = RwSignal::new(false);
	let error = RwSignal::new(None::<String>);

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		let msg = ContactMessage {
			name: name.get_untracked(),
			email: email.get_untracked(),
			institution: institution.get_untracked(),
			message: message.get_untracked(),
		};

		wasm_bindgen_futures::spawn_local(async move {
			match send_message(msg).await {
				Ok(()) => {
					error.set(None);
					submitted.set(true);
					name.set(String::new());
					email.set(String::new());
					institution.set(String::new());
					message.set(String::new());

					// Transient acknowledgment; the closure hands itself to
					// JS and is collected after the single call.
					if let Some(window) = web_sys::window() {
						let cb = Closure::once_into_js(move || submitted.set(false));
						let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
							cb.unchecked_ref(),
							ACK_MS,
						);
					}
				}
				Err(e) => {
					warn!("contact relay send failed: {e:?}");
					error.set(Some(
						"Could not send your message right now. Try email or WhatsApp instead."
							.to_string(),
					));
				}
			}
		});
	};

	view! {
		<section id="contact" class="section contact">
			<h2>"Get In Touch"</h2>
			<p class="lede">"Let's discuss your project and find a solution that fits your budget."</p>

			{move || {
				submitted
					.get()
					.then(|| {
						view! {
							<p class="contact-ack">
								"Thank you for your message! We'll get back to you within 24 hours."
							</p>
						}
					})
			}}
			{move || error.get().map(|e| view! { <p class="contact-error">{e}</p> })}

			<form class="contact-form" on:submit=on_submit>
				<label>
					"Your Name"
					<input
						type="text"
						placeholder="Enter your name"
						prop:value=name
						on:input=move |ev| name.set(event_target_value(&ev))
						required=true
					/>
				</label>
				<label>
					"Your Email"
					<input
						type="email"
						placeholder="Enter your email"
						prop:value=email
						on:input=move |ev| email.set(event_target_value(&ev))
						required=true
					/>
				</label>
				<label>
					"College/University"
					<input
						type="text"
						placeholder="Where do you study?"
						prop:value=institution
						on:input=move |ev| institution.set(event_target_value(&ev))
						required=true
					/>
				</label>
				<label>
					"Project Details"
					<textarea
						rows="4"
						placeholder="Tell us about your project requirements..."
						prop:value=message
						on:input=move |ev| message.set(event_target_value(&ev))
						required=true
					></textarea>
				</label>
				<button type="submit" class="button">"Send Message"</button>
			</form>
		</section>
	}
}
