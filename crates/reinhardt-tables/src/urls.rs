//! URL reverse resolution for table cells
//!
//! Columns that link to per-row endpoints resolve named routes here instead of
//! formatting paths by hand. Route names follow Django's `namespace:name`
//! convention.

use crate::error::{Result, TableError};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::collections::HashMap;

/// Characters escaped in a single path segment
///
/// Everything outside RFC 3986 `pchar`, plus `/` so a value never spans
/// segments and `%` so literal percent signs survive a round trip.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
	.add(b' ')
	.add(b'"')
	.add(b'#')
	.add(b'%')
	.add(b'/')
	.add(b'<')
	.add(b'>')
	.add(b'?')
	.add(b'[')
	.add(b'\\')
	.add(b']')
	.add(b'^')
	.add(b'`')
	.add(b'{')
	.add(b'|')
	.add(b'}');

/// A row that can be addressed by a resource route
///
/// `collection_name` selects the route family (`widgets`), `url_param`
/// fills the `{id}` placeholder.
pub trait UrlTarget {
	/// Plural collection name used in route names, e.g. `"widgets"`
	fn collection_name(&self) -> &str;

	/// Value substituted for the `{id}` placeholder
	fn url_param(&self) -> String;
}

/// Build the route name for a resource action
///
/// # Examples
///
/// ```
/// use reinhardt_tables::urls::action_route_name;
///
/// assert_eq!(action_route_name("sort", "admin", "widgets"), "admin:sort_widgets");
/// ```
pub fn action_route_name(action: &str, namespace: &str, collection: &str) -> String {
	format!("{}:{}_{}", namespace, action, collection)
}

/// Extract parameter names from a URL pattern
///
/// # Examples
///
/// ```
/// use reinhardt_tables::urls::extract_param_names;
///
/// let names = extract_param_names("/users/{id}/posts/{post_id}/");
/// assert_eq!(names, vec!["id", "post_id"]);
/// ```
pub fn extract_param_names(pattern: &str) -> Vec<String> {
	let mut names = Vec::new();
	let mut chars = pattern.chars();

	while let Some(ch) = chars.next() {
		if ch == '{' {
			let name: String = chars.by_ref().take_while(|&c| c != '}').collect();
			if !name.is_empty() {
				names.push(name);
			}
		}
	}

	names
}

/// Percent-encode a value for use as one path segment
///
/// # Examples
///
/// ```
/// use reinhardt_tables::urls::encode_path_segment;
///
/// assert_eq!(encode_path_segment("red widget"), "red%20widget");
/// assert_eq!(encode_path_segment("café"), "caf%C3%A9");
/// assert_eq!(encode_path_segment("a/b"), "a%2Fb");
/// assert_eq!(encode_path_segment("v1..2"), "v1..2");
/// ```
pub fn encode_path_segment(value: &str) -> String {
	utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Check that a parameter value can fill a path segment
///
/// Empty values and the dot segments `.` and `..` are rejected since they
/// would collapse or climb the path; everything else is encoded.
pub fn validate_reverse_param(value: &str) -> bool {
	!matches!(value, "" | "." | "..")
}

/// Single-pass URL parameter substitution
///
/// Unknown placeholders are preserved as-is. Callers are expected to
/// validate parameters first, see [`UrlReverser::reverse`].
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use reinhardt_tables::urls::reverse_single_pass;
///
/// let mut params = HashMap::new();
/// params.insert("id".to_string(), "123".to_string());
///
/// assert_eq!(reverse_single_pass("/users/{id}/", &params), "/users/123/");
/// ```
pub fn reverse_single_pass(pattern: &str, params: &HashMap<String, String>) -> String {
	let mut result = String::with_capacity(pattern.len());
	let mut chars = pattern.chars();

	while let Some(ch) = chars.next() {
		if ch == '{' {
			let param_name: String = chars.by_ref().take_while(|&c| c != '}').collect();
			if let Some(value) = params.get(&param_name) {
				result.push_str(value);
			} else {
				result.push('{');
				result.push_str(&param_name);
				result.push('}');
			}
		} else {
			result.push(ch);
		}
	}

	result
}

/// URL reverser for resolving route names back to paths
/// Similar to Django's URLResolver reverse functionality
#[derive(Debug, Clone, Default)]
pub struct UrlReverser {
	/// Map of fully qualified route names to path patterns
	routes: HashMap<String, String>,
}

impl UrlReverser {
	/// Create an empty reverser
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a path pattern under a fully qualified name
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_tables::UrlReverser;
	///
	/// let mut reverser = UrlReverser::new();
	/// reverser.register_path("admin:sort_widgets", "/admin/sort/widgets/{id}");
	///
	/// let url = reverser.reverse_with("admin:sort_widgets", &[("id", "7")]).unwrap();
	/// assert_eq!(url, "/admin/sort/widgets/7");
	/// ```
	pub fn register_path(&mut self, name: impl Into<String>, path: impl Into<String>) {
		self.routes.insert(name.into(), path.into());
	}

	/// Builder form of [`UrlReverser::register_path`]
	pub fn with_path(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
		self.register_path(name, path);
		self
	}

	/// Reverse a route name to a path with parameters
	///
	/// Parameter values are percent-encoded as path segments.
	pub fn reverse(&self, name: &str, params: &HashMap<String, String>) -> Result<String> {
		let pattern = self
			.routes
			.get(name)
			.ok_or_else(|| TableError::NoReverseMatch(name.to_string()))?;

		for param_name in extract_param_names(pattern) {
			if !params.contains_key(&param_name) {
				return Err(TableError::MissingUrlParameter {
					route: name.to_string(),
					param: param_name,
				});
			}
		}

		let mut encoded = HashMap::with_capacity(params.len());
		for (param_name, value) in params {
			if !validate_reverse_param(value) {
				return Err(TableError::InvalidUrlParameter {
					name: param_name.clone(),
					value: value.clone(),
				});
			}
			encoded.insert(param_name.clone(), encode_path_segment(value));
		}

		Ok(reverse_single_pass(pattern, &encoded))
	}

	/// Reverse a route name with a slice of key-value pairs
	pub fn reverse_with<S: AsRef<str>>(&self, name: &str, params: &[(S, S)]) -> Result<String> {
		let params_map: HashMap<String, String> = params
			.iter()
			.map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
			.collect();

		self.reverse(name, &params_map)
	}
}
