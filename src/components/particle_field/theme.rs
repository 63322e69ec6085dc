//! Color mode and visual styling for the particle field.
//!
//! The page shell owns the dark/light toggle; this module turns the active
//! mode into a concrete style record once per reseed. Particle colors are
//! sampled from a hue band at spawn time and never recomputed per frame.

/// Site color mode, toggled and persisted by the page shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColorMode {
	/// Light backgrounds, deeper particle colors.
	#[default]
	Light,
	/// Dark backgrounds, brighter particle colors.
	Dark,
}

impl ColorMode {
	/// Storage/attribute name for this mode.
	pub fn name(self) -> &'static str {
		match self {
			Self::Light => "light",
			Self::Dark => "dark",
		}
	}

	/// Parse a stored mode name. Unknown values yield `None`.
	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"light" => Some(Self::Light),
			"dark" => Some(Self::Dark),
			_ => None,
		}
	}

	/// The other mode.
	pub fn toggled(self) -> Self {
		match self {
			Self::Light => Self::Dark,
			Self::Dark => Self::Light,
		}
	}
}

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Build an opaque color from hue (degrees), saturation, and lightness
	/// (both unit-interval).
	pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
		let h = h.rem_euclid(360.0);
		let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
		let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
		let m = l - c / 2.0;

		let (r, g, b) = match h {
			h if h < 60.0 => (c, x, 0.0),
			h if h < 120.0 => (x, c, 0.0),
			h if h < 180.0 => (0.0, c, x),
			h if h < 240.0 => (0.0, x, c),
			h if h < 300.0 => (x, 0.0, c),
			_ => (c, 0.0, x),
		};

		Self {
			r: ((r + m) * 255.0).round() as u8,
			g: ((g + m) * 255.0).round() as u8,
			b: ((b + m) * 255.0).round() as u8,
			a: 1.0,
		}
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Per-mode visual configuration, selected once per reseed.
#[derive(Clone, Debug)]
pub struct FieldStyle {
	/// Lower edge of the particle hue band, degrees.
	pub hue_base: f64,
	/// Width of the hue band, degrees.
	pub hue_span: f64,
	/// Particle color saturation.
	pub saturation: f64,
	/// Lower edge of the particle lightness band.
	pub lightness_base: f64,
	/// Width of the lightness band.
	pub lightness_span: f64,
	/// Base color of connection lines; per-line alpha is applied on top.
	pub line_color: Color,
	/// Scales connection opacity. Distinguishes the modes.
	pub line_intensity: f64,
	/// Background gradient endpoints, top-left to bottom-right.
	pub background: (Color, Color),
}

impl FieldStyle {
	/// Style record for the given color mode.
	///
	/// Both modes share one cool hue band (200-260 degrees); dark mode lifts
	/// the lightness band so particles read against the darker backdrop.
	pub fn for_mode(mode: ColorMode) -> Self {
		match mode {
			ColorMode::Dark => Self {
				hue_base: 200.0,
				hue_span: 60.0,
				saturation: 0.7,
				lightness_base: 0.5,
				lightness_span: 0.3,
				line_color: Color::rgb(100, 150, 255),
				line_intensity: 0.3,
				background: (Color::rgb(15, 23, 42), Color::rgb(51, 65, 85)),
			},
			ColorMode::Light => Self {
				hue_base: 200.0,
				hue_span: 60.0,
				saturation: 0.7,
				lightness_base: 0.3,
				lightness_span: 0.3,
				line_color: Color::rgb(70, 130, 255),
				line_intensity: 0.2,
				background: (Color::rgb(248, 250, 252), Color::rgb(203, 213, 225)),
			},
		}
	}

	/// Sample a particle color from the band. `h` and `l` are unit-interval
	/// samples positioning the color within the hue and lightness spans.
	pub fn particle_color(&self, h: f64, l: f64) -> Color {
		Color::from_hsl(
			self.hue_base + h * self.hue_span,
			self.saturation,
			self.lightness_base + l * self.lightness_span,
		)
	}
}
