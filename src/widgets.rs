//! HTML fragments for each field kind.
//!
//! Each function produces the bare widget markup for one field; the
//! wrapping container and label around it come from the document
//! renderer. Boolean HTML attributes are emitted in their bare form
//! (` required`, ` checked`, ` selected`), and optional attributes are
//! emitted only when the model carries a value for them.

use crate::escape::escape_html;
use crate::model::{FieldSpec, FieldType, OptionSpec};

/// Renders the widget markup for a field.
///
/// Unrecognized kinds produce no markup at all; the caller still wraps
/// the field in its container with a label.
pub fn render_widget(field: &FieldSpec) -> String {
	match &field.kind {
		FieldType::Text | FieldType::Email | FieldType::Password => render_input(field),
		FieldType::Select => render_select(field),
		FieldType::Checkbox => render_checkbox(field),
		FieldType::Radio => render_radio_group(field),
		FieldType::Textarea => render_textarea(field),
		FieldType::Other(_) => String::new(),
	}
}

/// Single-line input for the text, email, and password kinds
fn render_input(field: &FieldSpec) -> String {
	let escaped_name = escape_html(&field.name);
	let mut html = format!(
		r#"<input type="{}" id="{}" name="{}""#,
		field.kind.as_str(),
		escaped_name,
		escaped_name
	);

	if let Some(placeholder) = &field.placeholder {
		html.push_str(&format!(r#" placeholder="{}""#, escape_html(placeholder)));
	}
	if field.required {
		html.push_str(" required");
	}
	if let Some(min_length) = &field.min_length {
		// Carried verbatim from the document, so never parsed to a number.
		html.push_str(&format!(r#" minlength="{}""#, escape_html(min_length)));
	}

	html.push('>');
	html
}

fn render_select(field: &FieldSpec) -> String {
	let escaped_name = escape_html(&field.name);
	let mut html = format!(r#"<select id="{}" name="{}""#, escaped_name, escaped_name);

	if field.required {
		html.push_str(" required");
	}
	html.push('>');

	for option in &field.options {
		html.push_str(&render_option(option, field.selected.as_deref()));
	}

	html.push_str("</select>");
	html
}

fn render_option(option: &OptionSpec, selected: Option<&str>) -> String {
	let mut html = format!(r#"<option value="{}""#, escape_html(&option.value));

	if selected == Some(option.value.as_str()) {
		html.push_str(" selected");
	}

	html.push('>');
	html.push_str(&escape_html(&option.text));
	html.push_str("</option>");
	html
}

fn render_checkbox(field: &FieldSpec) -> String {
	let escaped_name = escape_html(&field.name);
	let mut html = format!(
		r#"<input type="checkbox" id="{}" name="{}""#,
		escaped_name, escaped_name
	);

	if field.checked {
		html.push_str(" checked");
	}

	html.push('>');
	html
}

/// Radio group sharing the field's name across its options
fn render_radio_group(field: &FieldSpec) -> String {
	let escaped_name = escape_html(&field.name);
	let mut html = String::from(r#"<div class="radio-group">"#);

	for (i, option) in field.options.iter().enumerate() {
		html.push_str(&format!(
			r#"<label class="radio-option"><input type="radio" name="{}" value="{}""#,
			escaped_name,
			escape_html(&option.value)
		));

		// The first choice is always pre-checked.
		if i == 0 {
			html.push_str(" checked");
		}

		html.push_str("> ");
		html.push_str(&escape_html(&option.text));
		html.push_str("</label>");
	}

	html.push_str("</div>");
	html
}

fn render_textarea(field: &FieldSpec) -> String {
	let escaped_name = escape_html(&field.name);
	let mut html = format!(
		r#"<textarea id="{}" name="{}""#,
		escaped_name, escaped_name
	);

	if let Some(placeholder) = &field.placeholder {
		html.push_str(&format!(r#" placeholder="{}""#, escape_html(placeholder)));
	}

	// Never pre-filled with content.
	html.push_str("></textarea>");
	html
}
