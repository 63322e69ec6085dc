//! Page shell: navigation, content sections, and footer.
//!
//! Layout only; all copy comes from [`content`]. The shell renders in a
//! stacking context above the particle canvas, which stays fixed behind it.

pub mod content;

use leptos::prelude::*;

use super::particle_field::ColorMode;
use content::{PROJECTS, SECTIONS, SERVICES, SOCIAL_LINKS, TECHNOLOGIES};

fn title_case(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
		None => String::new(),
	}
}

/// Top navigation: section links plus the color-mode toggle.
#[component]
pub fn SiteNav(
	#[prop(into)] mode: Signal<ColorMode>,
	#[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
	view! {
		<nav class="site-nav">
			<a class="brand" href="#home">"StudHub"</a>
			<div class="nav-links">
				{SECTIONS
					.iter()
					.map(|s| view! { <a href=format!("#{s}")>{title_case(s)}</a> })
					.collect_view()}
				<button
					class="mode-toggle"
					title="Toggle color mode"
					on:click=move |_| on_toggle.run(())
				>
					{move || match mode.get() {
						ColorMode::Dark => "\u{2600}",
						ColorMode::Light => "\u{1f319}",
					}}
				</button>
			</div>
		</nav>
	}
}

/// Landing section.
#[component]
pub fn Hero() -> impl IntoView {
	view! {
		<section id="home" class="section hero">
			<p class="badge">"Student-Friendly Web Solutions"</p>
			<h1>"Build Your " <span class="accent">"Digital Presence"</span></h1>
			<p class="lede">
				"Get custom websites and mobile apps designed specifically for college students. "
				"Affordable prices, fast delivery, and unlimited revisions until you're satisfied."
			</p>
			<div class="hero-actions">
				<a class="button" href="#projects">"View Projects"</a>
				<a class="button outline" href="#contact">"Get Free Quote"</a>
			</div>
		</section>
	}
}

/// Services grid.
#[component]
pub fn Services() -> impl IntoView {
	view! {
		<section id="services" class="section services">
			<h2>"What We Offer"</h2>
			<p class="lede">
				"Comprehensive web and mobile solutions designed specifically for student needs and budgets."
			</p>
			<div class="card-grid">
				{SERVICES
					.iter()
					.map(|s| {
						view! {
							<div class="card">
								<h3>{s.title}</h3>
								<p>{s.description}</p>
							</div>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}

/// Featured project cards.
#[component]
pub fn Projects() -> impl IntoView {
	view! {
		<section id="projects" class="section projects">
			<h2>"Featured Projects"</h2>
			<div class="card-grid">
				{PROJECTS
					.iter()
					.map(|p| {
						view! {
							<div class="card project">
								<h3>{p.title}</h3>
								<p>{p.description}</p>
								<div class="tags">
									{p.technologies
										.iter()
										.map(|t| view! { <span class="tag">{*t}</span> })
										.collect_view()}
								</div>
								<a class="button" href=p.url target="_blank" rel="noopener noreferrer">
									"View Live Demo"
								</a>
							</div>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}

/// Technology skill meters.
#[component]
pub fn Technologies() -> impl IntoView {
	view! {
		<section id="technologies" class="section technologies">
			<h2>"Technologies We Use"</h2>
			<div class="tech-grid">
				{TECHNOLOGIES
					.iter()
					.map(|t| {
						view! {
							<div class="tech">
								<h3>{t.name}</h3>
								<div class="meter">
									<div class="meter-fill" style=format!("width: {}%", t.level)></div>
								</div>
								<span class="meter-label">{t.level}"%"</span>
							</div>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}

/// About section.
#[component]
pub fn About() -> impl IntoView {
	view! {
		<section id="about" class="section about">
			<h2>"About StudHub"</h2>
			<p>
				"We are developers who specialize in creating affordable digital solutions for students. "
				"We understand the budget constraints that students face, which is why we offer competitive "
				"pricing without compromising on quality."
			</p>
			<p>
				"Whether you need a website for your student organization, a portfolio for yourself, "
				"or a custom web application for a project, we can help bring your ideas to life."
			</p>
		</section>
	}
}

/// Footer with quick links and social profiles.
#[component]
pub fn SiteFooter() -> impl IntoView {
	let year = js_sys::Date::new_0().get_full_year();

	view! {
		<footer class="site-footer">
			<div class="footer-links">
				{SECTIONS
					.iter()
					.map(|s| view! { <a href=format!("#{s}")>{title_case(s)}</a> })
					.collect_view()}
			</div>
			<div class="footer-social">
				{SOCIAL_LINKS
					.iter()
					.map(|(name, url)| {
						view! {
							<a href=*url target="_blank" rel="noopener noreferrer">{*name}</a>
						}
					})
					.collect_view()}
			</div>
			<p class="copyright">{format!("© {year} StudHub. All rights reserved.")}</p>
		</footer>
	}
}
