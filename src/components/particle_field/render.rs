//! Canvas drawing for the particle field.
//!
//! Read-only over the field: paints the background gradient, the particle
//! discs, and the connection lines, in that order. Never mutates state.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::ParticleField;
use super::theme::FieldStyle;

/// Connection line width, px.
const LINE_WIDTH: f64 = 0.5;

/// Paint one frame.
pub fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField, style: &FieldStyle) {
	draw_background(ctx, field, style);
	draw_particles(ctx, field);
	draw_connections(ctx, field, style);
}

fn draw_background(ctx: &CanvasRenderingContext2d, field: &ParticleField, style: &FieldStyle) {
	let (w, h) = (field.width(), field.height());
	let (top, bottom) = style.background;

	let gradient = ctx.create_linear_gradient(0.0, 0.0, w, h);
	let _ = gradient.add_color_stop(0.0, &top.to_css());
	let _ = gradient.add_color_stop(1.0, &bottom.to_css());

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, w, h);
}

fn draw_particles(ctx: &CanvasRenderingContext2d, field: &ParticleField) {
	for p in field.particles() {
		ctx.set_fill_style_str(&p.color.to_css());
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
		ctx.fill();
	}
}

fn draw_connections(ctx: &CanvasRenderingContext2d, field: &ParticleField, style: &FieldStyle) {
	ctx.set_line_width(LINE_WIDTH);

	field.for_each_connection(|a, b, opacity| {
		let color = style.line_color.with_alpha(opacity * style.line_intensity);
		ctx.set_stroke_style_str(&color.to_css());
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	});
}
