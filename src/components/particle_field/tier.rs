//! Device-tier classification and per-tier tuning.
//!
//! The connection pass is quadratic in particle count, so the count (and the
//! interaction radii) scale with a coarse device class instead of raw
//! viewport size alone. All tier constants live in one record selected at
//! reseed time; nothing downstream branches on the tier.

/// Viewport width below which the mobile profile applies, px.
const MOBILE_MAX_WIDTH: f64 = 768.0;

/// Coarse device class derived from the viewport at reseed time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceTier {
	/// Narrow viewports: fewer particles, shorter interaction radii.
	Mobile,
	/// Everything else.
	Desktop,
}

impl DeviceTier {
	/// Classify a viewport by width.
	pub fn classify(width: f64) -> Self {
		if width < MOBILE_MAX_WIDTH {
			Self::Mobile
		} else {
			Self::Desktop
		}
	}
}

/// Tuning constants for one tier.
#[derive(Clone, Copy, Debug)]
pub struct TierProfile {
	/// Hard upper bound on particle count. Caps the pair count of the
	/// connection pass (100 particles is at most 4950 pairs per frame).
	pub particle_cap: usize,
	/// Surface area budget per particle, px^2.
	pub area_per_particle: f64,
	/// Connection line distance threshold, px.
	pub connection_distance: f64,
	/// Pointer capture radius for repulsion, px.
	pub repulsion_radius: f64,
	/// Repulsion displacement coefficient.
	pub repulsion_strength: f64,
}

impl TierProfile {
	/// The tuning record for a tier.
	pub fn for_tier(tier: DeviceTier) -> Self {
		match tier {
			DeviceTier::Desktop => Self {
				particle_cap: 100,
				area_per_particle: 15_000.0,
				connection_distance: 150.0,
				repulsion_radius: 100.0,
				repulsion_strength: 0.02,
			},
			DeviceTier::Mobile => Self {
				particle_cap: 50,
				area_per_particle: 20_000.0,
				connection_distance: 100.0,
				repulsion_radius: 80.0,
				repulsion_strength: 0.02,
			},
		}
	}

	/// Particle count for a surface: proportional to area, capped per tier.
	///
	/// A collapsed surface yields zero particles rather than NaN positions.
	pub fn particle_count(&self, width: f64, height: f64) -> usize {
		if width <= 0.0 || height <= 0.0 {
			return 0;
		}
		((width * height / self.area_per_particle) as usize).min(self.particle_cap)
	}
}
