//! Table DSL extension registering handle columns

use crate::handle_column::HandleColumn;
use crate::options::HandleColumnOptions;
use crate::resource::Sortable;
use crate::settings::SortableTableSettings;
use reinhardt_tables::table::SimpleTable;

/// Adds `handle_column` to table builders
///
/// # Examples
///
/// ```
/// use reinhardt_sortable_table::{HandleColumnExt, HandleColumnOptions, PositionValue, Sortable};
/// use reinhardt_tables::table::SimpleTable;
/// use reinhardt_tables::{RenderContext, Table, UrlReverser, UrlTarget};
///
/// struct Widget {
///     id: i64,
///     position: i64,
/// }
///
/// impl UrlTarget for Widget {
///     fn collection_name(&self) -> &str {
///         "widgets"
///     }
///     fn url_param(&self) -> String {
///         self.id.to_string()
///     }
/// }
///
/// impl Sortable for Widget {
///     fn read_attribute(&self, name: &str) -> Option<PositionValue> {
///         (name == "position").then(|| self.position.into())
///     }
/// }
///
/// let mut table = SimpleTable::with_rows(vec![Widget { id: 7, position: 3 }]);
/// table.handle_column(HandleColumnOptions::new());
///
/// let ctx = RenderContext::new(
///     UrlReverser::new().with_path("admin:sort_widgets", "/admin/sort/widgets/{id}"),
/// );
/// let html = table.render_html(&ctx).unwrap();
/// assert!(html.contains(r#"data-sort-url="/admin/sort/widgets/7" data-position="3""#));
/// ```
pub trait HandleColumnExt<R> {
	/// Register a handle column with the default settings
	fn handle_column(&mut self, options: HandleColumnOptions<R>) -> &mut Self;

	/// Register a handle column whose defaults come from `settings`
	fn handle_column_with_settings(
		&mut self,
		options: HandleColumnOptions<R>,
		settings: &SortableTableSettings,
	) -> &mut Self;
}

impl<R: Sortable + 'static> HandleColumnExt<R> for SimpleTable<R> {
	fn handle_column(&mut self, options: HandleColumnOptions<R>) -> &mut Self {
		self.add_column(Box::new(HandleColumn::new(options)))
	}

	fn handle_column_with_settings(
		&mut self,
		options: HandleColumnOptions<R>,
		settings: &SortableTableSettings,
	) -> &mut Self {
		self.add_column(Box::new(HandleColumn::with_settings(options, settings)))
	}
}
