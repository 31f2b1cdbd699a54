//! Handle column options and their per-row resolution
//!
//! Every option is either a constant or a function of the current row. Caller
//! options are merged over the defaults once, when the column is registered,
//! and evaluated again for every rendered row.

use crate::resource::Sortable;
use crate::settings::SortableTableSettings;
use reinhardt_tables::{RenderContext, Result, SafeString};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Route action of the default sort URL
pub const SORT_ACTION: &str = "sort";

/// Route action of the default move-to-top URL
pub const MOVE_TO_TOP_ACTION: &str = "move_to_top";

/// Function computing an option value for a row
pub type OptionFn<R, T> = Arc<dyn Fn(&R, &RenderContext) -> Result<T> + Send + Sync>;

/// A constant option value or one computed from the current row
pub enum OptionValue<R, T> {
	/// Used as-is for every row
	Constant(T),
	/// Called with the row and the render context
	Computed(OptionFn<R, T>),
}

impl<R, T: Clone> OptionValue<R, T> {
	/// Wrap a constant value
	pub fn constant(value: impl Into<T>) -> Self {
		OptionValue::Constant(value.into())
	}

	/// Wrap a function of the row and the render context
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_sortable_table::OptionValue;
	/// use reinhardt_tables::RenderContext;
	///
	/// let label: OptionValue<u32, String> =
	///     OptionValue::computed(|row: &u32, _ctx: &RenderContext| Ok(format!("row-{row}")));
	/// assert_eq!(label.resolve(&4, &RenderContext::default()).unwrap(), "row-4");
	/// ```
	pub fn computed<F>(f: F) -> Self
	where
		F: Fn(&R, &RenderContext) -> Result<T> + Send + Sync + 'static,
	{
		OptionValue::Computed(Arc::new(f))
	}

	/// Evaluate the value for `resource`
	///
	/// Errors raised by a computed value are returned unchanged.
	pub fn resolve(&self, resource: &R, ctx: &RenderContext) -> Result<T> {
		match self {
			OptionValue::Constant(value) => Ok(value.clone()),
			OptionValue::Computed(f) => f(resource, ctx),
		}
	}
}

impl<R, T: Clone> Clone for OptionValue<R, T> {
	fn clone(&self) -> Self {
		match self {
			OptionValue::Constant(value) => OptionValue::Constant(value.clone()),
			OptionValue::Computed(f) => OptionValue::Computed(Arc::clone(f)),
		}
	}
}

impl<R, T: fmt::Debug> fmt::Debug for OptionValue<R, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			OptionValue::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
			OptionValue::Computed(_) => f.write_str("Computed(..)"),
		}
	}
}

impl<R> From<bool> for OptionValue<R, bool> {
	fn from(value: bool) -> Self {
		OptionValue::Constant(value)
	}
}

impl<R> From<&str> for OptionValue<R, String> {
	fn from(value: &str) -> Self {
		OptionValue::Constant(value.to_string())
	}
}

impl<R> From<String> for OptionValue<R, String> {
	fn from(value: String) -> Self {
		OptionValue::Constant(value)
	}
}

// Plain text handles are escaped; pass a SafeString for trusted markup.
impl<R> From<&str> for OptionValue<R, SafeString> {
	fn from(value: &str) -> Self {
		OptionValue::Constant(SafeString::escape(value))
	}
}

impl<R> From<String> for OptionValue<R, SafeString> {
	fn from(value: String) -> Self {
		OptionValue::Constant(SafeString::escape(&value))
	}
}

impl<R> From<SafeString> for OptionValue<R, SafeString> {
	fn from(value: SafeString) -> Self {
		OptionValue::Constant(value)
	}
}

/// URL of `action` on the row, inside `namespace` or the context's default one
///
/// This is the shape of the default `sort_url` and `move_to_top_url`.
pub fn action_url<R>(action: &'static str, namespace: Option<String>) -> OptionValue<R, String>
where
	R: Sortable + 'static,
{
	OptionValue::computed(move |resource: &R, ctx: &RenderContext| {
		let namespace = namespace.as_deref().unwrap_or_else(|| ctx.default_namespace());
		let url = ctx.url_for(action, namespace, resource)?;
		tracing::trace!(action, namespace, url = %url, "resolved handle column url");
		Ok(url)
	})
}

/// Options passed when registering a handle column
///
/// Unset options fall back to the defaults. Keys the column does not know
/// are kept through [`HandleColumnOptions::extra`] without validation.
///
/// # Examples
///
/// ```
/// use reinhardt_sortable_table::{HandleColumnOptions, PositionValue, Sortable, SortableTableSettings};
/// use reinhardt_tables::{RenderContext, UrlTarget};
///
/// struct Widget {
///     id: i64,
/// }
/// # impl UrlTarget for Widget {
/// #     fn collection_name(&self) -> &str { "widgets" }
/// #     fn url_param(&self) -> String { self.id.to_string() }
/// # }
/// # impl Sortable for Widget {
/// #     fn read_attribute(&self, _name: &str) -> Option<PositionValue> { None }
/// # }
///
/// let options = HandleColumnOptions::<Widget>::new()
///     .sort_handle("X")
///     .sort_url_with(|widget: &Widget, _ctx: &RenderContext| Ok(format!("/widgets/{}/sort", widget.id)))
///     .extra("confirm", "Sure?")
///     .over_defaults(&SortableTableSettings::default());
///
/// let resolved = options.evaluate(&Widget { id: 7 }, &RenderContext::default()).unwrap();
/// assert_eq!(resolved.sort_url, "/widgets/7/sort");
/// assert_eq!(resolved.sort_handle.as_str(), "X");
/// assert_eq!(options.extras().get("confirm").map(String::as_str), Some("Sure?"));
/// ```
pub struct HandleColumnOptions<R> {
	show_move_to_top_handle: Option<OptionValue<R, bool>>,
	sort_url: Option<OptionValue<R, String>>,
	sort_handle: Option<OptionValue<R, SafeString>>,
	move_to_top_url: Option<OptionValue<R, String>>,
	move_to_top_handle: Option<OptionValue<R, SafeString>>,
	extra: BTreeMap<String, String>,
}

impl<R> HandleColumnOptions<R> {
	/// Options with nothing set
	pub fn new() -> Self {
		Self {
			show_move_to_top_handle: None,
			sort_url: None,
			sort_handle: None,
			move_to_top_url: None,
			move_to_top_handle: None,
			extra: BTreeMap::new(),
		}
	}

	/// Whether to append the move-to-top link
	pub fn show_move_to_top_handle(mut self, value: impl Into<OptionValue<R, bool>>) -> Self {
		self.show_move_to_top_handle = Some(value.into());
		self
	}

	/// URL the client posts the new position to
	pub fn sort_url(mut self, value: impl Into<OptionValue<R, String>>) -> Self {
		self.sort_url = Some(value.into());
		self
	}

	/// Compute the sort URL per row
	pub fn sort_url_with<F>(self, f: F) -> Self
	where
		F: Fn(&R, &RenderContext) -> Result<String> + Send + Sync + 'static,
	{
		self.sort_url(OptionValue::computed(f))
	}

	/// Content of the drag handle
	pub fn sort_handle(mut self, value: impl Into<OptionValue<R, SafeString>>) -> Self {
		self.sort_handle = Some(value.into());
		self
	}

	/// URL of the move-to-top link
	pub fn move_to_top_url(mut self, value: impl Into<OptionValue<R, String>>) -> Self {
		self.move_to_top_url = Some(value.into());
		self
	}

	/// Content of the move-to-top link
	pub fn move_to_top_handle(mut self, value: impl Into<OptionValue<R, SafeString>>) -> Self {
		self.move_to_top_handle = Some(value.into());
		self
	}

	/// Keep an option this column does not interpret
	pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.extra.insert(key.into(), value.into());
		self
	}
}

impl<R: Sortable + 'static> HandleColumnOptions<R> {
	/// Resolve the sort URL in `namespace` instead of the default one
	pub fn sort_url_in_namespace(self, namespace: impl Into<String>) -> Self {
		self.sort_url(action_url(SORT_ACTION, Some(namespace.into())))
	}

	/// Resolve the move-to-top URL in `namespace` instead of the default one
	pub fn move_to_top_url_in_namespace(self, namespace: impl Into<String>) -> Self {
		self.move_to_top_url(action_url(MOVE_TO_TOP_ACTION, Some(namespace.into())))
	}

	/// Fill every unset option from the defaults
	///
	/// The default URLs resolve in `settings.default_namespace` when it is
	/// set and in the render context's default namespace otherwise.
	pub fn over_defaults(self, settings: &SortableTableSettings) -> EffectiveOptions<R> {
		EffectiveOptions {
			show_move_to_top_handle: self
				.show_move_to_top_handle
				.unwrap_or(OptionValue::Constant(false)),
			sort_url: self
				.sort_url
				.unwrap_or_else(|| action_url(SORT_ACTION, settings.default_namespace.clone())),
			sort_handle: self
				.sort_handle
				.unwrap_or_else(|| OptionValue::Constant(settings.sort_handle.clone())),
			move_to_top_url: self
				.move_to_top_url
				.unwrap_or_else(|| {
					action_url(MOVE_TO_TOP_ACTION, settings.default_namespace.clone())
				}),
			move_to_top_handle: self
				.move_to_top_handle
				.unwrap_or_else(|| OptionValue::Constant(settings.move_to_top_handle.clone())),
			extra: self.extra,
		}
	}
}

impl<R> Default for HandleColumnOptions<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R> Clone for HandleColumnOptions<R> {
	fn clone(&self) -> Self {
		Self {
			show_move_to_top_handle: self.show_move_to_top_handle.clone(),
			sort_url: self.sort_url.clone(),
			sort_handle: self.sort_handle.clone(),
			move_to_top_url: self.move_to_top_url.clone(),
			move_to_top_handle: self.move_to_top_handle.clone(),
			extra: self.extra.clone(),
		}
	}
}

impl<R> fmt::Debug for HandleColumnOptions<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HandleColumnOptions")
			.field("show_move_to_top_handle", &self.show_move_to_top_handle)
			.field("sort_url", &self.sort_url)
			.field("sort_handle", &self.sort_handle)
			.field("move_to_top_url", &self.move_to_top_url)
			.field("move_to_top_handle", &self.move_to_top_handle)
			.field("extra", &self.extra)
			.finish()
	}
}

/// Caller options merged over the defaults, ready to evaluate per row
pub struct EffectiveOptions<R> {
	show_move_to_top_handle: OptionValue<R, bool>,
	sort_url: OptionValue<R, String>,
	sort_handle: OptionValue<R, SafeString>,
	move_to_top_url: OptionValue<R, String>,
	move_to_top_handle: OptionValue<R, SafeString>,
	extra: BTreeMap<String, String>,
}

impl<R> EffectiveOptions<R> {
	/// Evaluate every option for one row
	///
	/// Sort options are evaluated first. The move-to-top URL and handle are
	/// only evaluated when the link is shown, so applications without a
	/// move-to-top route render fine.
	pub fn evaluate(&self, resource: &R, ctx: &RenderContext) -> Result<ResolvedOptions> {
		let sort_url = self.sort_url.resolve(resource, ctx)?;
		let sort_handle = self.sort_handle.resolve(resource, ctx)?;
		let show_move_to_top_handle = self.show_move_to_top_handle.resolve(resource, ctx)?;
		let (move_to_top_url, move_to_top_handle) = if show_move_to_top_handle {
			(
				Some(self.move_to_top_url.resolve(resource, ctx)?),
				Some(self.move_to_top_handle.resolve(resource, ctx)?),
			)
		} else {
			(None, None)
		};

		Ok(ResolvedOptions {
			show_move_to_top_handle,
			sort_url,
			sort_handle,
			move_to_top_url,
			move_to_top_handle,
			extra: self.extra.clone(),
		})
	}

	/// Options this column does not interpret
	pub fn extras(&self) -> &BTreeMap<String, String> {
		&self.extra
	}
}

impl<R> fmt::Debug for EffectiveOptions<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("EffectiveOptions")
			.field("show_move_to_top_handle", &self.show_move_to_top_handle)
			.field("sort_url", &self.sort_url)
			.field("sort_handle", &self.sort_handle)
			.field("move_to_top_url", &self.move_to_top_url)
			.field("move_to_top_handle", &self.move_to_top_handle)
			.field("extra", &self.extra)
			.finish()
	}
}

/// Option values for a single row
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOptions {
	/// Whether the move-to-top link is rendered
	pub show_move_to_top_handle: bool,
	/// Value of `data-sort-url`
	pub sort_url: String,
	/// Content of the drag handle
	pub sort_handle: SafeString,
	/// Move-to-top URL, set only when the link is shown
	pub move_to_top_url: Option<String>,
	/// Move-to-top content, set only when the link is shown
	pub move_to_top_handle: Option<SafeString>,
	/// Options this column does not interpret
	pub extra: BTreeMap<String, String>,
}
