//! Normalized in-memory representation of a parsed form.
//!
//! The model is immutable once constructed: rendering never mutates it,
//! and every conversion builds a fresh value. Field and option order is
//! document order and is preserved end-to-end.

use serde::{Deserialize, Serialize};

/// Field kind enumeration
///
/// The recognized kinds form a closed set; anything else found in a
/// document is carried through verbatim in [`FieldType::Other`] so the
/// renderer can apply its documented fall-through instead of the parser
/// rejecting the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
	/// Single-line text input
	Text,
	/// Email input
	Email,
	/// Password input
	Password,
	/// Dropdown with options
	Select,
	/// Single checkbox
	Checkbox,
	/// Radio button group
	Radio,
	/// Multiline text area
	Textarea,
	/// Unrecognized kind, preserved verbatim
	#[serde(untagged)]
	Other(String),
}

impl FieldType {
	/// Returns the HTML `type` attribute value for this kind.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Text => "text",
			Self::Email => "email",
			Self::Password => "password",
			Self::Select => "select",
			Self::Checkbox => "checkbox",
			Self::Radio => "radio",
			Self::Textarea => "textarea",
			Self::Other(kind) => kind,
		}
	}
}

impl From<&str> for FieldType {
	fn from(kind: &str) -> Self {
		match kind {
			"text" => Self::Text,
			"email" => Self::Email,
			"password" => Self::Password,
			"select" => Self::Select,
			"checkbox" => Self::Checkbox,
			"radio" => Self::Radio,
			"textarea" => Self::Textarea,
			other => Self::Other(other.to_string()),
		}
	}
}

impl Default for FieldType {
	fn default() -> Self {
		Self::Text
	}
}

/// One selectable choice within a select or radio field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OptionSpec {
	/// Submitted value, taken from the `value` attribute.
	pub value: String,
	/// User-visible label, taken from the element content.
	pub text: String,
}

/// One form field's full description, independent of rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldSpec {
	/// Field kind driving widget selection.
	pub kind: FieldType,
	/// Identifier used for the HTML `name` and `id` attributes.
	pub name: String,
	/// Display label shown above the widget.
	pub label: String,
	/// Marks the widget required when true.
	pub required: bool,
	/// Placeholder text, rendered only when present.
	pub placeholder: Option<String>,
	/// Minimum length constraint, carried verbatim into the attribute.
	pub min_length: Option<String>,
	/// Pre-checks a checkbox when true.
	pub checked: bool,
	/// Option value to pre-select in a select widget.
	pub selected: Option<String>,
	/// Choices for select and radio fields, in document order.
	pub options: Vec<OptionSpec>,
}

/// Root result of parsing a form document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormModel {
	/// Heading shown at the top of the document.
	pub title: String,
	/// Introductory paragraph under the title.
	pub description: String,
	/// Visible text of the submit button.
	pub submit_label: String,
	/// Fields in document order.
	pub fields: Vec<FieldSpec>,
}

impl Default for FormModel {
	fn default() -> Self {
		Self {
			title: "Untitled Form".to_string(),
			description: String::new(),
			submit_label: "Submit".to_string(),
			fields: Vec::new(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("text", FieldType::Text)]
	#[case("email", FieldType::Email)]
	#[case("password", FieldType::Password)]
	#[case("select", FieldType::Select)]
	#[case("checkbox", FieldType::Checkbox)]
	#[case("radio", FieldType::Radio)]
	#[case("textarea", FieldType::Textarea)]
	fn test_field_type_from_recognized_names(#[case] name: &str, #[case] expected: FieldType) {
		assert_eq!(FieldType::from(name), expected);
		assert_eq!(FieldType::from(name).as_str(), name);
	}

	#[rstest]
	#[case("date")]
	#[case("Text")]
	#[case("EMAIL")]
	#[case("")]
	fn test_field_type_preserves_unrecognized_names(#[case] name: &str) {
		let kind = FieldType::from(name);
		assert_eq!(kind, FieldType::Other(name.to_string()));
		assert_eq!(kind.as_str(), name);
	}

	#[rstest]
	fn test_form_model_defaults() {
		let model = FormModel::default();
		assert_eq!(model.title, "Untitled Form");
		assert_eq!(model.description, "");
		assert_eq!(model.submit_label, "Submit");
		assert!(model.fields.is_empty());
	}

	#[rstest]
	fn test_field_spec_defaults() {
		let field = FieldSpec::default();
		assert_eq!(field.kind, FieldType::Text);
		assert_eq!(field.name, "");
		assert_eq!(field.label, "");
		assert!(!field.required);
		assert!(field.placeholder.is_none());
		assert!(field.min_length.is_none());
		assert!(!field.checked);
		assert!(field.selected.is_none());
		assert!(field.options.is_empty());
	}

	#[rstest]
	fn test_field_type_serializes_as_lowercase_name() {
		let json = serde_json::to_string(&FieldType::Email).unwrap();
		assert_eq!(json, r#""email""#);

		let json = serde_json::to_string(&FieldType::Other("date".to_string())).unwrap();
		assert_eq!(json, r#""date""#);
	}

	#[rstest]
	fn test_field_type_deserializes_unknown_as_other() {
		let kind: FieldType = serde_json::from_str(r#""tel""#).unwrap();
		assert_eq!(kind, FieldType::Other("tel".to_string()));

		let kind: FieldType = serde_json::from_str(r#""radio""#).unwrap();
		assert_eq!(kind, FieldType::Radio);
	}
}
