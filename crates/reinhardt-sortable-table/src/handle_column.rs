//! Drag handle column

use crate::options::{EffectiveOptions, HandleColumnOptions, ResolvedOptions};
use crate::resource::{PositionValue, Sortable};
use crate::settings::SortableTableSettings;
use reinhardt_tables::{Column, RenderContext, Result, SafeString};
use std::fmt;

/// Name under which the handle column is registered on a table
pub const HANDLE_COLUMN_NAME: &str = "handle";

/// Tooltip of the drag handle
pub const SORT_HANDLE_TITLE: &str = "Drag to reorder";

/// Tooltip of the move-to-top link
pub const MOVE_TO_TOP_TITLE: &str = "Move to top";

/// Column rendering a drag handle for each row
///
/// The column has an empty header. Each cell holds a `span.handle` carrying
/// the sort URL and the row's current position for the client-side script:
///
/// ```html
/// <span class="handle" data-sort-url="/admin/sort/widgets/7" data-position="3" title="Drag to reorder">⇅</span>
/// ```
///
/// ```mermaid
/// flowchart LR
///     O[caller options] --> M[merge over defaults]
///     D[SortableTableSettings] --> M
///     M --> E[EffectiveOptions]
///     E -->|per row| R[ResolvedOptions]
///     P[Sortable::position] --> H[span.handle]
///     R --> H
///     R -->|show_move_to_top_handle| T[a.move_to_top]
/// ```
#[cfg_attr(doc, aquamarine::aquamarine)]
pub struct HandleColumn<R> {
	css_classes: String,
	options: EffectiveOptions<R>,
}

impl<R: Sortable + 'static> HandleColumn<R> {
	/// Create a handle column using the default settings
	pub fn new(options: HandleColumnOptions<R>) -> Self {
		Self::with_settings(options, &SortableTableSettings::default())
	}

	/// Create a handle column whose defaults come from `settings`
	pub fn with_settings(options: HandleColumnOptions<R>, settings: &SortableTableSettings) -> Self {
		tracing::debug!(
			column_class = %settings.column_class,
			overrides = ?options,
			"creating handle column"
		);
		Self {
			css_classes: settings.column_class.clone(),
			options: options.over_defaults(settings),
		}
	}
}

impl<R: Sortable> HandleColumn<R> {
	/// Options merged over the defaults
	pub fn options(&self) -> &EffectiveOptions<R> {
		&self.options
	}

	/// Render the cell of one row
	///
	/// Options are evaluated for this row only; nothing is cached between
	/// rows or renders.
	pub fn render_row(&self, resource: &R, ctx: &RenderContext) -> Result<SafeString> {
		let options = self.options.evaluate(resource, ctx)?;
		let position = resource.position()?;

		tracing::trace!(
			collection = resource.collection_name(),
			position = %position,
			"rendering sort handle"
		);

		let mut html = sort_handle(ctx, &options, &position);
		if let Some(link) = move_to_top_handle(ctx, &options) {
			html.push_safe(&link);
		}
		Ok(html)
	}
}

fn sort_handle(ctx: &RenderContext, options: &ResolvedOptions, position: &PositionValue) -> SafeString {
	ctx.content_tag(
		"span",
		&options.sort_handle,
		&[
			("class", "handle".to_string()),
			("data-sort-url", options.sort_url.clone()),
			("data-position", position.to_string()),
			("title", SORT_HANDLE_TITLE.to_string()),
		],
	)
}

fn move_to_top_handle(ctx: &RenderContext, options: &ResolvedOptions) -> Option<SafeString> {
	if !options.show_move_to_top_handle {
		return None;
	}
	let url = options.move_to_top_url.as_ref()?;
	let handle = options.move_to_top_handle.as_ref()?;
	Some(ctx.content_tag(
		"a",
		handle,
		&[
			("class", "move_to_top".to_string()),
			("href", url.clone()),
			("data-method", "post".to_string()),
			("title", MOVE_TO_TOP_TITLE.to_string()),
		],
	))
}

impl<R> fmt::Debug for HandleColumn<R> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HandleColumn")
			.field("css_classes", &self.css_classes)
			.field("options", &self.options)
			.finish()
	}
}

impl<R: Sortable> Column for HandleColumn<R> {
	type Row = R;

	fn name(&self) -> &str {
		HANDLE_COLUMN_NAME
	}

	fn header(&self) -> &str {
		""
	}

	fn render(&self, row: &R, ctx: &RenderContext) -> Result<SafeString> {
		self.render_row(row, ctx)
	}

	fn css_classes(&self) -> &str {
		&self.css_classes
	}
}
