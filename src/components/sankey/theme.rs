//! Visual theming for the Sankey diagram.
//!
//! Provides the choice color palette and the node styling hints handed to the
//! plotting library.

use crate::votes::Choice;

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

/// Link colors per vote choice.
///
/// Links are translucent so overlapping flows into the same proposal stay
/// readable.
#[derive(Clone, Debug, PartialEq)]
pub struct ChoicePalette {
	pub for_color: Color,
	pub against_color: Color,
	pub abstain_color: Color,
}

/// Alpha shared by all link colors.
const LINK_ALPHA: f64 = 0.4;

impl ChoicePalette {
	pub fn color(&self, choice: Choice) -> Color {
		match choice {
			Choice::For => self.for_color,
			Choice::Against => self.against_color,
			Choice::Abstain => self.abstain_color,
		}
	}
}

impl Default for ChoicePalette {
	fn default() -> Self {
		Self {
			for_color: Color::rgb(0, 128, 0).with_alpha(LINK_ALPHA),
			against_color: Color::rgb(255, 0, 0).with_alpha(LINK_ALPHA),
			abstain_color: Color::rgb(128, 128, 128).with_alpha(LINK_ALPHA),
		}
	}
}

/// Node styling hints for the Sankey trace.
#[derive(Clone, Debug, PartialEq)]
pub struct SankeyStyle {
	/// Vertical gap between nodes, in pixels.
	pub pad: f64,
	/// Node bar width, in pixels.
	pub thickness: f64,
	/// Node outline color (any CSS color).
	pub border_color: String,
	/// Node outline width, in pixels.
	pub border_width: f64,
}

impl Default for SankeyStyle {
	fn default() -> Self {
		Self {
			pad: 15.0,
			thickness: 20.0,
			border_color: "black".to_string(),
			border_width: 0.5,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_palette_matches_link_colors() {
		let palette = ChoicePalette::default();
		assert_eq!(palette.color(Choice::For).to_css(), "rgba(0, 128, 0, 0.4)");
		assert_eq!(palette.color(Choice::Against).to_css(), "rgba(255, 0, 0, 0.4)");
		assert_eq!(
			palette.color(Choice::Abstain).to_css(),
			"rgba(128, 128, 128, 0.4)"
		);
	}

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::rgb(0, 128, 255).to_css(), "#0080ff");
		assert_eq!(Color::rgba(0, 128, 255, 1.0).to_css(), "#0080ff");
	}
}
