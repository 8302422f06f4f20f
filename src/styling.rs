//! Visual configuration for rendered documents.

use serde::{Deserialize, Serialize};

/// Caller-supplied font and colors substituted into the generated
/// document's embedded stylesheet.
///
/// Values are inserted verbatim: they are trusted configuration chosen
/// by the caller, not form data, so they are not escaped or validated.
/// Missing entries fall back to the defaults when deserialized.
///
/// # Examples
///
/// ```
/// use formwright::StylingOptions;
///
/// let styling = StylingOptions {
///     button_color: "#336699".to_string(),
///     ..StylingOptions::default()
/// };
/// assert_eq!(styling.font, "Arial");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylingOptions {
	/// Font family for the whole document.
	pub font: String,
	/// Page background color.
	pub background_color: String,
	/// Body text color.
	pub text_color: String,
	/// Heading color.
	pub title_color: String,
	/// Background color of inputs, selects, and textareas.
	pub input_background_color: String,
	/// Text color inside inputs.
	pub input_text_color: String,
	/// Submit button background color.
	pub button_color: String,
	/// Submit button text color.
	pub button_text_color: String,
	/// Submit button background color while hovered.
	pub button_hover_color: String,
}

impl Default for StylingOptions {
	fn default() -> Self {
		Self {
			font: "Arial".to_string(),
			background_color: "#ffffff".to_string(),
			text_color: "#000000".to_string(),
			title_color: "#333333".to_string(),
			input_background_color: "#f9f9f9".to_string(),
			input_text_color: "#000000".to_string(),
			button_color: "#4CAF50".to_string(),
			button_text_color: "#ffffff".to_string(),
			button_hover_color: "#45a049".to_string(),
		}
	}
}
