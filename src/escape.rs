//! HTML escaping for interpolated user text
//!
//! Every string that originates from a form document (titles, labels,
//! names, placeholders, option text) is escaped before it is placed in
//! markup, so field data can never inject executable content into the
//! generated document.
//!
//! Escaped characters:
//! - `&` → `&amp;`
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `"` → `&quot;`
//! - `'` → `&#x27;`

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use formwright::escape::escape_html;
///
/// assert_eq!(escape_html("<script>alert('XSS')</script>"),
///            "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;");
/// assert_eq!(escape_html("Tom & Jerry"), "Tom &amp; Jerry");
/// ```
pub fn escape_html(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}
