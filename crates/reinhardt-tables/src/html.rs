//! HTML escaping and markup building helpers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use reinhardt_tables::html::escape;
///
/// assert_eq!(escape("Hello, World!"), "Hello, World!");
/// assert_eq!(escape("<script>alert('XSS')</script>"),
///            "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;");
/// assert_eq!(escape("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
/// ```
pub fn escape(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Escape attribute value for use in HTML
///
/// Like [`escape`], but also encodes whitespace control characters so the
/// value survives inside a quoted attribute unchanged.
///
/// # Examples
///
/// ```
/// use reinhardt_tables::html::escape_attr;
///
/// assert_eq!(escape_attr("value"), "value");
/// assert_eq!(escape_attr("value with \"quotes\""),
///            "value with &quot;quotes&quot;");
/// assert_eq!(escape_attr("line\nbreak"), "line&#10;break");
/// ```
pub fn escape_attr(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			'\n' => result.push_str("&#10;"),
			'\r' => result.push_str("&#13;"),
			'\t' => result.push_str("&#9;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Markup that is already safe to emit without escaping
///
/// Cell content flows through the table as `SafeString`. Plain text enters
/// through [`SafeString::escape`]; trusted markup (glyphs, entities, tags
/// built by [`content_tag`]) enters through [`SafeString::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SafeString(String);

impl SafeString {
	/// Wrap trusted markup without escaping it
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_tables::SafeString;
	///
	/// let safe = SafeString::new("<b>Bold</b>");
	/// assert_eq!(safe.as_str(), "<b>Bold</b>");
	/// ```
	pub fn new(s: impl Into<String>) -> Self {
		SafeString(s.into())
	}

	/// Escape plain text into safe markup
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_tables::SafeString;
	///
	/// assert_eq!(SafeString::escape("<b>").as_str(), "&lt;b&gt;");
	/// ```
	pub fn escape(text: &str) -> Self {
		SafeString(escape(text))
	}

	/// Get the inner string
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Convert to String
	pub fn into_string(self) -> String {
		self.0
	}

	/// Append another piece of safe markup
	pub fn push_safe(&mut self, other: &SafeString) {
		self.0.push_str(&other.0);
	}
}

impl From<&str> for SafeString {
	fn from(s: &str) -> Self {
		SafeString(s.to_string())
	}
}

impl From<String> for SafeString {
	fn from(s: String) -> Self {
		SafeString(s)
	}
}

impl AsRef<str> for SafeString {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for SafeString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Build an HTML element from a tag name, safe content and attributes
///
/// Attributes are emitted in the given order and their values are escaped
/// with [`escape_attr`]. The content is emitted verbatim.
///
/// # Examples
///
/// ```
/// use reinhardt_tables::html::content_tag;
/// use reinhardt_tables::SafeString;
///
/// let tag = content_tag(
///     "span",
///     &SafeString::escape("a & b"),
///     &[("class", "note".to_string()), ("title", "\"quoted\"".to_string())],
/// );
/// assert_eq!(
///     tag.as_str(),
///     r#"<span class="note" title="&quot;quoted&quot;">a &amp; b</span>"#
/// );
/// ```
pub fn content_tag(name: &str, content: &SafeString, attrs: &[(&str, String)]) -> SafeString {
	let mut html = String::with_capacity(name.len() * 2 + content.as_str().len() + 32);
	html.push('<');
	html.push_str(name);
	for (key, value) in attrs {
		html.push(' ');
		html.push_str(key);
		html.push_str("=\"");
		html.push_str(&escape_attr(value));
		html.push('"');
	}
	html.push('>');
	html.push_str(content.as_str());
	html.push_str("</");
	html.push_str(name);
	html.push('>');
	SafeString(html)
}
