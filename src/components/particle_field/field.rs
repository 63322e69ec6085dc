//! Particle field state: seeding, motion, pointer repulsion, connections.

use super::particle::Particle;
use super::theme::FieldStyle;
use super::tier::TierProfile;

/// The animated particle set together with the surface it lives on.
///
/// Boundary contract: **wrap**. A particle crossing an edge re-enters from
/// the opposite edge, so every position stays in `[0, width) x [0, height)`
/// after each [`step`](Self::step). The set is fixed for one sizing epoch and
/// replaced wholesale on reseed; particles have no identity across epochs.
pub struct ParticleField {
	particles: Vec<Particle>,
	width: f64,
	height: f64,
	profile: TierProfile,
}

impl ParticleField {
	/// Seed a fresh field for one sizing epoch.
	///
	/// The count is deterministic in `(profile, width, height)`; individual
	/// particle values vary with `seed`.
	pub fn seed(profile: TierProfile, width: f64, height: f64, style: &FieldStyle, seed: f64) -> Self {
		let count = profile.particle_count(width, height);
		let particles = (0..count)
			.map(|i| Particle::spawn(i, seed, width, height, style))
			.collect();

		Self {
			particles,
			width,
			height,
			profile,
		}
	}

	/// Build a field from an explicit particle set (embedding and tests).
	pub fn from_particles(
		profile: TierProfile,
		width: f64,
		height: f64,
		particles: Vec<Particle>,
	) -> Self {
		Self {
			particles,
			width,
			height,
			profile,
		}
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	/// Advance every particle by one frame: add velocity, wrap at the edges.
	pub fn step(&mut self) {
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			// Wrap: drift re-enters from the opposite edge.
			if p.x < 0.0 || p.x >= self.width {
				p.x = p.x.rem_euclid(self.width);
			}
			if p.y < 0.0 || p.y >= self.height {
				p.y = p.y.rem_euclid(self.height);
			}
		}
	}

	/// Nudge every particle inside the capture radius directly away from the
	/// pointer, proportionally to how deep inside the radius it sits.
	///
	/// This is an instantaneous position bias applied between frames, not a
	/// velocity change; drift resumes unaffected once the pointer moves on.
	/// A nudge may momentarily push a particle past an edge; the next step's
	/// wrap restores the bounds invariant.
	pub fn repel_from(&mut self, pointer_x: f64, pointer_y: f64) {
		let radius = self.profile.repulsion_radius;
		let strength = self.profile.repulsion_strength;

		for p in &mut self.particles {
			let dx = pointer_x - p.x;
			let dy = pointer_y - p.y;
			let dist = (dx * dx + dy * dy).sqrt();

			if dist < radius {
				let force = (radius - dist) / radius;
				p.x -= dx * force * strength;
				p.y -= dy * force * strength;
			}
		}
	}

	/// Visit every unordered particle pair closer than the tier's connection
	/// distance, once per pair. `f` receives both endpoints and the line
	/// opacity, `1 - distance / max_distance`.
	///
	/// Quadratic over the set; the tier caps bound the worst case to a few
	/// thousand pairs per frame, so a spatial index would be dead weight at
	/// these counts.
	pub fn for_each_connection<F>(&self, mut f: F)
	where
		F: FnMut(&Particle, &Particle, f64),
	{
		let max_distance = self.profile.connection_distance;

		for i in 0..self.particles.len() {
			for j in (i + 1)..self.particles.len() {
				let a = &self.particles[i];
				let b = &self.particles[j];
				let dx = a.x - b.x;
				let dy = a.y - b.y;
				let dist = (dx * dx + dy * dy).sqrt();

				if dist < max_distance {
					f(a, b, 1.0 - dist / max_distance);
				}
			}
		}
	}
}
