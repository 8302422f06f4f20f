//! Assembles the final HTML document from a parsed form model.
//!
//! The output is a standalone page: an inline stylesheet in the head,
//! the form body, and a submit button. Styling values are substituted
//! into the stylesheet verbatim, since they come from the caller's
//! configuration rather than from the untrusted document. All text
//! that originates in the XML goes through [`escape_html`] on the way
//! into markup.

use crate::error::ParseResult;
use crate::escape::escape_html;
use crate::model::{FieldSpec, FormModel};
use crate::parser::parse;
use crate::styling::StylingOptions;
use crate::widgets::render_widget;

/// Renders a complete HTML document for the given form model.
///
/// Never fails: a model with no fields renders a form holding only the
/// submit button, and a field whose kind has no widget still gets its
/// labeled container.
///
/// # Examples
///
/// ```
/// use formwright::{FormModel, StylingOptions};
///
/// let html = formwright::render(&FormModel::default(), &StylingOptions::default());
/// assert!(html.contains("<h1>Untitled Form</h1>"));
/// ```
pub fn render(model: &FormModel, styling: &StylingOptions) -> String {
	let escaped_title = escape_html(&model.title);
	let escaped_description = escape_html(&model.description);
	let escaped_submit_label = escape_html(&model.submit_label);

	let fields_html = model
		.fields
		.iter()
		.map(render_field)
		.collect::<Vec<_>>()
		.join("");

	let html = format!(
		r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <style>
        body {{
            font-family: '{}';
            max-width: 600px;
            margin: 0 auto;
            padding: 20px;
            background-color: {};
            color: {};
        }}
        h1 {{
            color: {};
        }}
        .form-group {{
            margin-bottom: 15px;
        }}
        label {{
            display: block;
            margin-bottom: 5px;
            font-weight: bold;
        }}
        input[type="text"],
        input[type="email"],
        input[type="password"],
        select,
        textarea {{
            width: 100%;
            padding: 8px;
            border: 1px solid #ddd;
            border-radius: 4px;
            background-color: {};
            color: {};
        }}
        textarea {{
            height: 100px;
        }}
        .radio-group, .checkbox-group {{
            margin-top: 5px;
        }}
        .radio-option, .checkbox-option {{
            margin-right: 10px;
        }}
        button {{
            background-color: {};
            color: {};
            padding: 10px 15px;
            border: none;
            border-radius: 4px;
            cursor: pointer;
        }}
        button:hover {{
            background-color: {};
        }}
    </style>
</head>
<body>
    <h1>{}</h1>
    <p>{}</p>
    <form>
{}        <button type="submit">{}</button>
    </form>
</body>
</html>
"#,
		escaped_title,
		styling.font,
		styling.background_color,
		styling.text_color,
		styling.title_color,
		styling.input_background_color,
		styling.input_text_color,
		styling.button_color,
		styling.button_text_color,
		styling.button_hover_color,
		escaped_title,
		escaped_description,
		fields_html,
		escaped_submit_label
	);

	tracing::debug!(bytes = html.len(), "rendered form document");
	html
}

/// Container, label, and widget for one field
fn render_field(field: &FieldSpec) -> String {
	let mut html = String::from("        <div class=\"form-group\">\n");
	html.push_str(&format!(
		"            <label for=\"{}\">{}</label>\n",
		escape_html(&field.name),
		escape_html(&field.label)
	));

	let widget = render_widget(field);
	if !widget.is_empty() {
		html.push_str("            ");
		html.push_str(&widget);
		html.push('\n');
	}

	html.push_str("        </div>\n");
	html
}

/// Parses an XML form definition and renders it in one step.
///
/// # Examples
///
/// ```
/// use formwright::StylingOptions;
///
/// let xml = "<form><title>Signup</title></form>";
/// let html = formwright::convert(xml, &StylingOptions::default()).unwrap();
/// assert!(html.contains("<h1>Signup</h1>"));
/// ```
pub fn convert(xml: &str, styling: &StylingOptions) -> ParseResult<String> {
	let model = parse(xml)?;
	Ok(render(&model, styling))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::{FieldType, OptionSpec};
	use proptest::prelude::*;

	#[test]
	fn test_empty_model_renders_submit_only_form() {
		let html = render(&FormModel::default(), &StylingOptions::default());

		assert!(html.starts_with("<!DOCTYPE html>"));
		assert!(html.contains("<title>Untitled Form</title>"));
		assert!(html.contains("<h1>Untitled Form</h1>"));
		assert!(html.contains(r#"<button type="submit">Submit</button>"#));
		assert!(!html.contains(r#"<div class="form-group">"#));
	}

	#[test]
	fn test_document_structure() {
		let html = render(&FormModel::default(), &StylingOptions::default());

		assert!(html.contains(r#"<html lang="en">"#));
		assert!(html.contains(r#"<meta charset="UTF-8">"#));
		assert!(html.contains(r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#));
		assert!(html.contains("<style>"));
		assert!(html.contains("<form>"));
		assert!(html.contains("</form>"));
		assert!(html.trim_end().ends_with("</html>"));
	}

	#[test]
	fn test_default_styling_substituted_into_stylesheet() {
		let html = render(&FormModel::default(), &StylingOptions::default());

		assert!(html.contains("font-family: 'Arial';"));
		assert!(html.contains("max-width: 600px;"));
		assert!(html.contains("background-color: #4CAF50;"));
		assert!(html.contains("background-color: #45a049;"));
		assert!(html.contains("height: 100px;"));
	}

	#[test]
	fn test_custom_styling_substituted_verbatim() {
		let styling = StylingOptions {
			font: "Courier New".to_string(),
			background_color: "#123456".to_string(),
			button_color: "rebeccapurple".to_string(),
			..StylingOptions::default()
		};

		let html = render(&FormModel::default(), &styling);
		assert!(html.contains("font-family: 'Courier New';"));
		assert!(html.contains("background-color: #123456;"));
		assert!(html.contains("background-color: rebeccapurple;"));
	}

	#[test]
	fn test_field_wrapped_in_labeled_container() {
		let model = FormModel {
			fields: vec![FieldSpec {
				kind: FieldType::Text,
				name: "username".to_string(),
				label: "Username".to_string(),
				..FieldSpec::default()
			}],
			..FormModel::default()
		};

		let html = render(&model, &StylingOptions::default());
		assert!(html.contains(r#"<div class="form-group">"#));
		assert!(html.contains(r#"<label for="username">Username</label>"#));
		assert!(html.contains(r#"<input type="text" id="username" name="username">"#));
	}

	#[test]
	fn test_fields_render_in_model_order() {
		let model = FormModel {
			fields: vec![
				FieldSpec {
					kind: FieldType::Text,
					name: "first".to_string(),
					..FieldSpec::default()
				},
				FieldSpec {
					kind: FieldType::Text,
					name: "second".to_string(),
					..FieldSpec::default()
				},
			],
			..FormModel::default()
		};

		let html = render(&model, &StylingOptions::default());
		let first = html.find(r#"id="first""#);
		let second = html.find(r#"id="second""#);
		assert!(first.is_some());
		assert!(second.is_some());
		assert!(first < second);
	}

	#[test]
	fn test_unrecognized_kind_gets_container_without_widget() {
		let model = FormModel {
			fields: vec![FieldSpec {
				kind: FieldType::Other("date".to_string()),
				name: "when".to_string(),
				label: "When".to_string(),
				..FieldSpec::default()
			}],
			..FormModel::default()
		};

		let html = render(&model, &StylingOptions::default());
		assert!(html.contains(r#"<label for="when">When</label>"#));
		assert!(!html.contains("<input"));
	}

	#[test]
	fn test_title_and_description_are_escaped() {
		let model = FormModel {
			title: "<script>alert('xss')</script>".to_string(),
			description: "Tom & Jerry".to_string(),
			..FormModel::default()
		};

		let html = render(&model, &StylingOptions::default());
		assert!(!html.contains("<script>"));
		assert!(html.contains("&lt;script&gt;"));
		assert!(html.contains("<p>Tom &amp; Jerry</p>"));
	}

	#[test]
	fn test_submit_label_is_escaped() {
		let model = FormModel {
			submit_label: "Go <fast>".to_string(),
			..FormModel::default()
		};

		let html = render(&model, &StylingOptions::default());
		assert!(html.contains(r#"<button type="submit">Go &lt;fast&gt;</button>"#));
	}

	#[test]
	fn test_convert_composes_parse_and_render() {
		let xml = r#"<form>
			<title>Signup</title>
			<field>
				<type>email</type>
				<name>email</name>
				<label>Email</label>
				<required>true</required>
				<placeholder>you@example.com</placeholder>
			</field>
		</form>"#;

		let html = convert(xml, &StylingOptions::default()).unwrap();
		assert!(html.contains("<h1>Signup</h1>"));
		assert!(html.contains(r#"<label for="email">Email</label>"#));
		assert!(html.contains(r#"type="email""#));
		assert!(html.contains(" required"));
		assert!(html.contains(r#"placeholder="you@example.com""#));
	}

	#[test]
	fn test_convert_propagates_parse_errors() {
		assert!(convert("<form><field>", &StylingOptions::default()).is_err());
	}

	#[test]
	fn test_select_field_in_document_has_no_selection() {
		let model = FormModel {
			fields: vec![FieldSpec {
				kind: FieldType::Select,
				name: "color".to_string(),
				options: vec![
					OptionSpec { value: "r".to_string(), text: "Red".to_string() },
					OptionSpec { value: "g".to_string(), text: "Green".to_string() },
				],
				..FieldSpec::default()
			}],
			..FormModel::default()
		};

		let html = render(&model, &StylingOptions::default());
		assert!(!html.contains("selected"));
	}

	proptest! {
		#[test]
		fn prop_render_never_panics(title in ".*", description in ".*", submit in ".*") {
			let model = FormModel {
				title,
				description,
				submit_label: submit,
				..FormModel::default()
			};

			let html = render(&model, &StylingOptions::default());
			prop_assert!(html.starts_with("<!DOCTYPE html>"));
			prop_assert!(html.trim_end().ends_with("</html>"));
		}
	}
}
