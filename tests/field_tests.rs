// Host-side tests for the particle-field simulation. The crate itself is
// wasm-only, so the pure modules are included directly and tested natively.

#![allow(dead_code)]
#![allow(unused_crate_dependencies)]

#[path = "../src/components/particle_field/theme.rs"]
mod theme;
#[path = "../src/components/particle_field/tier.rs"]
mod tier;
#[path = "../src/components/particle_field/particle.rs"]
mod particle;
#[path = "../src/components/particle_field/field.rs"]
mod field;

use field::ParticleField;
use particle::Particle;
use theme::{Color, ColorMode, FieldStyle};
use tier::{DeviceTier, TierProfile};

fn desktop_profile() -> TierProfile {
	TierProfile::for_tier(DeviceTier::Desktop)
}

fn seeded_field(width: f64, height: f64, seed: f64) -> ParticleField {
	ParticleField::seed(
		desktop_profile(),
		width,
		height,
		&FieldStyle::for_mode(ColorMode::Dark),
		seed,
	)
}

fn particle_at(x: f64, y: f64) -> Particle {
	Particle {
		x,
		y,
		vx: 0.0,
		vy: 0.0,
		radius: 2.0,
		color: Color::rgb(255, 255, 255),
	}
}

fn assert_in_bounds(field: &ParticleField) {
	for p in field.particles() {
		assert!(
			p.x >= 0.0 && p.x < field.width(),
			"x out of bounds: {}",
			p.x
		);
		assert!(
			p.y >= 0.0 && p.y < field.height(),
			"y out of bounds: {}",
			p.y
		);
	}
}

#[test]
fn seeding_fills_the_surface_within_bounds() {
	let field = seeded_field(1920.0, 1080.0, 42.0);
	// Full HD on the desktop tier saturates the cap.
	assert_eq!(field.len(), 100);
	assert_in_bounds(&field);
}

#[test]
fn particle_count_is_independent_of_the_seed() {
	let a = seeded_field(1200.0, 800.0, 1.0);
	let b = seeded_field(1200.0, 800.0, 99.0);
	assert_eq!(a.len(), b.len());
}

#[test]
fn positions_stay_in_bounds_over_many_steps() {
	let mut field = seeded_field(640.0, 480.0, 7.0);
	for _ in 0..5000 {
		field.step();
		assert_in_bounds(&field);
	}
}

#[test]
fn bounds_hold_through_interleaved_repulsion() {
	let mut field = seeded_field(800.0, 600.0, 3.0);
	for i in 0..1000 {
		field.repel_from((i % 800) as f64, (i % 600) as f64);
		field.step();
		assert_in_bounds(&field);
	}
}

#[test]
fn step_wraps_both_edges() {
	let mut near_right = particle_at(99.9, 50.0);
	near_right.vx = 0.5;
	let mut near_left = particle_at(0.1, 50.0);
	near_left.vx = -0.5;
	let mut field =
		ParticleField::from_particles(desktop_profile(), 100.0, 100.0, vec![near_right, near_left]);

	field.step();

	let ps = field.particles();
	assert!(
		(ps[0].x - 0.4).abs() < 1e-9,
		"right edge should wrap to the left, got {}",
		ps[0].x
	);
	assert!(
		(ps[1].x - 99.6).abs() < 1e-9,
		"left edge should wrap to the right, got {}",
		ps[1].x
	);
}

#[test]
fn close_pair_connects_with_distance_faded_opacity() {
	let mut profile = desktop_profile();
	profile.connection_distance = 100.0;
	let field = ParticleField::from_particles(
		profile,
		500.0,
		500.0,
		vec![particle_at(0.0, 0.0), particle_at(50.0, 0.0)],
	);

	let mut pairs = Vec::new();
	field.for_each_connection(|a, b, opacity| pairs.push((a.x, b.x, opacity)));

	assert_eq!(pairs.len(), 1);
	assert!((pairs[0].2 - 0.5).abs() < 1e-9);
}

#[test]
fn distant_pair_draws_no_connection() {
	let mut profile = desktop_profile();
	profile.connection_distance = 40.0;
	let field = ParticleField::from_particles(
		profile,
		500.0,
		500.0,
		vec![particle_at(0.0, 0.0), particle_at(50.0, 0.0)],
	);

	let mut calls = 0;
	field.for_each_connection(|_, _, _| calls += 1);
	assert_eq!(calls, 0);
}

#[test]
fn each_unordered_pair_is_visited_once() {
	// Triangle with all sides below the threshold.
	let mut profile = desktop_profile();
	profile.connection_distance = 100.0;
	let field = ParticleField::from_particles(
		profile,
		500.0,
		500.0,
		vec![
			particle_at(0.0, 0.0),
			particle_at(30.0, 0.0),
			particle_at(0.0, 40.0),
		],
	);

	let mut seen: Vec<((i64, i64), (i64, i64))> = Vec::new();
	field.for_each_connection(|a, b, _| {
		let key = ((a.x as i64, a.y as i64), (b.x as i64, b.y as i64));
		let flipped = (key.1, key.0);
		assert!(!seen.contains(&key), "pair visited twice: {key:?}");
		assert!(!seen.contains(&flipped), "pair visited in both orders: {key:?}");
		seen.push(key);
	});
	assert_eq!(seen.len(), 3);
}

#[test]
fn repulsion_pushes_strictly_away_from_the_pointer() {
	let mut profile = desktop_profile();
	profile.repulsion_radius = 80.0;
	let mut field =
		ParticleField::from_particles(profile, 500.0, 500.0, vec![particle_at(60.0, 0.0)]);

	field.repel_from(0.0, 0.0);

	let p = &field.particles()[0];
	let dist = (p.x * p.x + p.y * p.y).sqrt();
	assert!(dist > 60.0, "particle moved toward the pointer: {dist}");
}

#[test]
fn repulsion_ignores_particles_outside_the_capture_radius() {
	let mut profile = desktop_profile();
	profile.repulsion_radius = 80.0;
	let mut field =
		ParticleField::from_particles(profile, 500.0, 500.0, vec![particle_at(200.0, 0.0)]);

	field.repel_from(0.0, 0.0);

	let p = &field.particles()[0];
	assert_eq!(p.x, 200.0);
	assert_eq!(p.y, 0.0);
}

#[test]
fn repulsion_at_the_exact_pointer_position_stays_finite() {
	let mut field =
		ParticleField::from_particles(desktop_profile(), 500.0, 500.0, vec![particle_at(60.0, 40.0)]);

	field.repel_from(60.0, 40.0);

	let p = &field.particles()[0];
	assert!(p.x.is_finite() && p.y.is_finite());
}

#[test]
fn empty_field_update_repel_connect_are_no_ops() {
	let mut field = seeded_field(0.0, 0.0, 5.0);
	assert!(field.is_empty());

	field.step();
	field.repel_from(10.0, 10.0);

	let mut calls = 0;
	field.for_each_connection(|_, _, _| calls += 1);
	assert_eq!(calls, 0);
}
