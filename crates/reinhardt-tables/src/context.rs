//! Rendering scope shared by all cells of a table render

use crate::error::Result;
use crate::html::{self, SafeString};
use crate::urls::{UrlReverser, UrlTarget, action_route_name};

/// Namespace used when a render context is not configured otherwise
pub const DEFAULT_NAMESPACE: &str = "admin";

/// Helpers available to columns while a table is being rendered
///
/// A context is built once per request and borrowed by every cell, so
/// columns can build markup and resolve routes without global state.
#[derive(Debug, Clone)]
pub struct RenderContext {
	reverser: UrlReverser,
	default_namespace: String,
}

impl RenderContext {
	/// Create a context resolving routes through `reverser`
	pub fn new(reverser: UrlReverser) -> Self {
		Self {
			reverser,
			default_namespace: DEFAULT_NAMESPACE.to_string(),
		}
	}

	/// Override the application's default namespace
	pub fn with_default_namespace(mut self, namespace: impl Into<String>) -> Self {
		self.default_namespace = namespace.into();
		self
	}

	/// The application's default namespace
	pub fn default_namespace(&self) -> &str {
		&self.default_namespace
	}

	/// Build an HTML element, see [`html::content_tag`]
	pub fn content_tag(
		&self,
		name: &str,
		content: &SafeString,
		attrs: &[(&str, String)],
	) -> SafeString {
		html::content_tag(name, content, attrs)
	}

	/// Resolve the URL of `action` on `target` inside `namespace`
	///
	/// Looks up the route `"{namespace}:{action}_{collection}"` and fills its
	/// `{id}` placeholder from [`UrlTarget::url_param`].
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_tables::{RenderContext, UrlReverser, UrlTarget};
	///
	/// struct Widget(i64);
	///
	/// impl UrlTarget for Widget {
	///     fn collection_name(&self) -> &str {
	///         "widgets"
	///     }
	///     fn url_param(&self) -> String {
	///         self.0.to_string()
	///     }
	/// }
	///
	/// let ctx = RenderContext::new(
	///     UrlReverser::new().with_path("admin:sort_widgets", "/admin/sort/widgets/{id}"),
	/// );
	/// let url = ctx.url_for("sort", ctx.default_namespace(), &Widget(7)).unwrap();
	/// assert_eq!(url, "/admin/sort/widgets/7");
	/// ```
	pub fn url_for<T>(&self, action: &str, namespace: &str, target: &T) -> Result<String>
	where
		T: UrlTarget + ?Sized,
	{
		let route = action_route_name(action, namespace, target.collection_name());
		self.reverser
			.reverse_with(&route, &[("id".to_string(), target.url_param())])
	}
}

impl Default for RenderContext {
	fn default() -> Self {
		Self::new(UrlReverser::new())
	}
}
