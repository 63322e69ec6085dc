// Host-side tests for device-tier classification and particle budgets.

#![allow(dead_code)]
#![allow(unused_crate_dependencies)]

#[path = "../src/components/particle_field/tier.rs"]
mod tier;

use tier::{DeviceTier, TierProfile};

#[test]
fn narrow_viewports_classify_as_mobile() {
	assert_eq!(DeviceTier::classify(0.0), DeviceTier::Mobile);
	assert_eq!(DeviceTier::classify(767.9), DeviceTier::Mobile);
	assert_eq!(DeviceTier::classify(768.0), DeviceTier::Desktop);
	assert_eq!(DeviceTier::classify(2560.0), DeviceTier::Desktop);
}

#[test]
fn particle_count_is_deterministic() {
	let profile = TierProfile::for_tier(DeviceTier::Desktop);
	let first = profile.particle_count(1366.0, 768.0);
	for _ in 0..10 {
		assert_eq!(profile.particle_count(1366.0, 768.0), first);
	}
}

#[test]
fn particle_count_grows_with_area_up_to_the_cap() {
	let profile = TierProfile::for_tier(DeviceTier::Desktop);
	let mut last = 0;
	for width in (100..=4000).step_by(100) {
		let count = profile.particle_count(width as f64, 1080.0);
		assert!(count >= last, "count shrank as area grew");
		assert!(count <= profile.particle_cap);
		last = count;
	}
	// Large surfaces saturate the cap rather than growing unbounded.
	assert_eq!(last, profile.particle_cap);
}

#[test]
fn full_hd_desktop_saturates_the_cap() {
	let profile = TierProfile::for_tier(DeviceTier::Desktop);
	assert_eq!(profile.particle_count(1920.0, 1080.0), profile.particle_cap);
}

#[test]
fn collapsed_surfaces_produce_no_particles() {
	for tier in [DeviceTier::Mobile, DeviceTier::Desktop] {
		let profile = TierProfile::for_tier(tier);
		assert_eq!(profile.particle_count(0.0, 1080.0), 0);
		assert_eq!(profile.particle_count(1920.0, 0.0), 0);
		assert_eq!(profile.particle_count(0.0, 0.0), 0);
	}
}

#[test]
fn mobile_profile_is_uniformly_lighter_than_desktop() {
	let mobile = TierProfile::for_tier(DeviceTier::Mobile);
	let desktop = TierProfile::for_tier(DeviceTier::Desktop);
	assert!(mobile.particle_cap < desktop.particle_cap);
	assert!(mobile.connection_distance < desktop.connection_distance);
	assert!(mobile.repulsion_radius < desktop.repulsion_radius);
	assert!(mobile.area_per_particle > desktop.area_per_particle);
}
