//! XML form definitions rendered as standalone HTML documents
//!
//! This crate converts a small XML vocabulary describing a form (title,
//! description, a sequence of typed fields, a submit label) into a
//! complete HTML page with an inline stylesheet. It provides:
//! - A permissive parser that fails only on malformed XML, never on
//!   missing or unknown form content
//! - A typed form model with per-element defaults
//! - A pure renderer with per-kind widget markup and HTML escaping of
//!   all document-supplied text
//! - Caller-controlled styling substituted into the embedded stylesheet
//!
//! ## Quick Example
//!
//! ```
//! use formwright::StylingOptions;
//!
//! let xml = r#"<form>
//!     <title>Contact</title>
//!     <field>
//!         <type>email</type>
//!         <name>email</name>
//!         <label>Email</label>
//!         <required>true</required>
//!     </field>
//! </form>"#;
//!
//! let html = formwright::convert(xml, &StylingOptions::default())?;
//! assert!(html.contains("<h1>Contact</h1>"));
//! assert!(html.contains(r#"<input type="email" id="email" name="email" required>"#));
//! # Ok::<(), formwright::ParseError>(())
//! ```

pub mod error;
pub mod escape;
pub mod model;
pub mod parser;
pub mod render;
pub mod styling;
pub mod widgets;

pub use error::{ParseError, ParseResult};
pub use escape::escape_html;
pub use model::{FieldSpec, FieldType, FormModel, OptionSpec};
pub use parser::parse;
pub use render::{convert, render};
pub use styling::StylingOptions;
pub use widgets::render_widget;
