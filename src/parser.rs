//! XML parsing into the normalized form model.
//!
//! A stack-based quick-xml event loop builds a small element tree, then
//! the form model is extracted from the tree with per-element defaults.
//! Extraction never fails: every optional element falls back to its
//! documented default, and unknown field kinds are carried through
//! verbatim. The only error source is input that is not well-formed XML.

use quick_xml::Reader;
use quick_xml::events::{BytesRef, Event, attributes::Attributes};

use crate::error::{ParseError, ParseResult};
use crate::model::{FieldSpec, FieldType, FormModel, OptionSpec};

/// A single element of the parsed document.
///
/// Children are kept in document order. `text` holds only the content
/// that appears before the first child element, so markup like
/// `<description>intro<b>x</b>tail</description>` yields `"intro"`.
#[derive(Debug, Clone, Default)]
struct XmlElement {
	name: String,
	attributes: Vec<(String, String)>,
	text: String,
	children: Vec<XmlElement>,
}

impl XmlElement {
	/// First direct child with the given tag name.
	fn child(&self, name: &str) -> Option<&XmlElement> {
		self.children.iter().find(|child| child.name == name)
	}

	/// All direct children with the given tag name, in document order.
	fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
		self.children.iter().filter(move |child| child.name == name)
	}

	/// Attribute value by name.
	fn attr(&self, name: &str) -> Option<&str> {
		self.attributes
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.as_str())
	}
}

/// Parses a form document into a [`FormModel`].
///
/// Fails only when the input is not well-formed XML. Missing optional
/// elements default as documented on the model types; duplicate field
/// names, empty names, and unknown field kinds are all accepted as-is.
///
/// # Examples
///
/// ```
/// use formwright::{FieldType, parse};
///
/// let xml = "<form>\
///     <title>Contact</title>\
///     <field><type>email</type><name>email</name><label>Email</label></field>\
/// </form>";
///
/// let model = parse(xml).unwrap();
/// assert_eq!(model.title, "Contact");
/// assert_eq!(model.fields.len(), 1);
/// assert_eq!(model.fields[0].kind, FieldType::Email);
/// ```
pub fn parse(xml: &str) -> ParseResult<FormModel> {
	let root = parse_tree(xml)?;

	let mut model = FormModel::default();
	if let Some(title) = root.child("title") {
		model.title = title.text.clone();
	}
	if let Some(description) = root.child("description") {
		model.description = description.text.clone();
	}
	if let Some(label) = root.child("submit").and_then(|submit| submit.child("label")) {
		model.submit_label = label.text.clone();
	}

	for field in root.children_named("field") {
		model.fields.push(build_field(field));
	}

	tracing::debug!(fields = model.fields.len(), "parsed form document");
	Ok(model)
}

/// Parse XML text into an element tree
fn parse_tree(xml: &str) -> ParseResult<XmlElement> {
	let mut reader = Reader::from_str(xml);
	let mut stack: Vec<XmlElement> = Vec::new();
	let mut root: Option<XmlElement> = None;

	loop {
		match reader.read_event() {
			Ok(Event::Start(e)) => {
				if root.is_some() && stack.is_empty() {
					return Err(ParseError::MalformedInput(
						"content after the root element".to_string(),
					));
				}
				stack.push(XmlElement {
					name: String::from_utf8_lossy(e.name().as_ref()).to_string(),
					attributes: read_attributes(e.attributes())?,
					..XmlElement::default()
				});
			}

			Ok(Event::End(_)) => {
				// quick-xml rejects mismatched closing tags before we see them
				let Some(element) = stack.pop() else {
					return Err(ParseError::MalformedInput(
						"closing tag without an opening tag".to_string(),
					));
				};
				match stack.last_mut() {
					Some(parent) => parent.children.push(element),
					None => root = Some(element),
				}
			}

			Ok(Event::Empty(e)) => {
				if root.is_some() && stack.is_empty() {
					return Err(ParseError::MalformedInput(
						"content after the root element".to_string(),
					));
				}
				let element = XmlElement {
					name: String::from_utf8_lossy(e.name().as_ref()).to_string(),
					attributes: read_attributes(e.attributes())?,
					..XmlElement::default()
				};
				match stack.last_mut() {
					Some(parent) => parent.children.push(element),
					None => root = Some(element),
				}
			}

			Ok(Event::Text(e)) => {
				let text = e
					.xml_content()
					.map_err(|e| ParseError::MalformedInput(format!("XML decode error: {}", e)))?;

				match stack.last_mut() {
					// Only text before the first child element counts as content.
					Some(current) if current.children.is_empty() => current.text.push_str(&text),
					Some(_) => {}
					// Whitespace around the root element is fine, anything else is junk.
					None if text.trim().is_empty() => {}
					None => {
						return Err(ParseError::MalformedInput(
							"text outside the root element".to_string(),
						));
					}
				}
			}

			Ok(Event::GeneralRef(e)) => {
				let text = resolve_entity(&e)?;
				match stack.last_mut() {
					Some(current) if current.children.is_empty() => current.text.push_str(&text),
					Some(_) => {}
					None => {
						return Err(ParseError::MalformedInput(
							"text outside the root element".to_string(),
						));
					}
				}
			}

			Ok(Event::CData(e)) => {
				let text = String::from_utf8_lossy(e.into_inner().as_ref()).to_string();
				if let Some(current) = stack.last_mut()
					&& current.children.is_empty()
				{
					current.text.push_str(&text);
				}
			}

			Ok(Event::Eof) => break,

			Ok(_) => {}

			Err(e) => {
				return Err(ParseError::MalformedInput(format!("XML parse error: {}", e)));
			}
		}
	}

	if let Some(open) = stack.last() {
		return Err(ParseError::MalformedInput(format!(
			"unclosed element <{}>",
			open.name
		)));
	}
	root.ok_or_else(|| ParseError::MalformedInput("no root element found".to_string()))
}

/// Resolve an entity reference to its text.
///
/// Character references (`&#65;`, `&#x27;`) and the five predefined
/// entities are resolved; any other entity name is malformed, since the
/// dialect declares no custom entities.
fn resolve_entity(entity: &BytesRef) -> ParseResult<String> {
	if let Some(ch) = entity
		.resolve_char_ref()
		.map_err(|e| ParseError::MalformedInput(format!("XML parse error: {}", e)))?
	{
		return Ok(ch.to_string());
	}

	let name = entity
		.decode()
		.map_err(|e| ParseError::MalformedInput(format!("XML decode error: {}", e)))?;
	let text = match name.as_ref() {
		"amp" => "&",
		"lt" => "<",
		"gt" => ">",
		"quot" => "\"",
		"apos" => "'",
		other => {
			return Err(ParseError::MalformedInput(format!(
				"unknown entity &{};",
				other
			)));
		}
	};
	Ok(text.to_string())
}

/// Collect element attributes as name/value pairs
fn read_attributes(attributes: Attributes) -> ParseResult<Vec<(String, String)>> {
	let mut pairs = Vec::new();
	for attr in attributes {
		let attr =
			attr.map_err(|e| ParseError::MalformedInput(format!("XML attribute error: {}", e)))?;
		pairs.push((
			String::from_utf8_lossy(attr.key.as_ref()).to_string(),
			String::from_utf8_lossy(&attr.value).to_string(),
		));
	}
	Ok(pairs)
}

/// Build one field description from a `<field>` element
fn build_field(el: &XmlElement) -> FieldSpec {
	let mut field = FieldSpec::default();

	if let Some(kind) = el.child("type") {
		field.kind = FieldType::from(kind.text.as_str());
	}
	if let Some(name) = el.child("name") {
		field.name = name.text.clone();
	}
	if let Some(label) = el.child("label") {
		field.label = label.text.clone();
	}
	field.required = flag_is_set(el, "required");
	field.placeholder = el.child("placeholder").map(|p| p.text.clone());
	field.min_length = el.child("minlength").map(|m| m.text.clone());
	field.checked = flag_is_set(el, "checked");

	if matches!(field.kind, FieldType::Select | FieldType::Radio)
		&& let Some(options) = el.child("options")
	{
		// Every child contributes one option, whatever its tag name.
		field.options = options
			.children
			.iter()
			.map(|option| OptionSpec {
				value: option.attr("value").unwrap_or_default().to_string(),
				text: option.text.clone(),
			})
			.collect();
	}

	field
}

/// True only when the element is present and its text is exactly `"true"`.
fn flag_is_set(el: &XmlElement, name: &str) -> bool {
	el.child(name).is_some_and(|flag| flag.text == "true")
}
