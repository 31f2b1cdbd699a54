//! Table trait and in-memory table implementation

use crate::column::Column;
use crate::context::RenderContext;
use crate::error::{Result, TableError};
use crate::html::{SafeString, content_tag};

/// A set of columns rendered over a list of rows
///
/// ```mermaid
/// sequenceDiagram
///     participant T as Table
///     participant C as Column
///     participant X as RenderContext
///     T->>C: header()
///     loop each row
///         loop each column
///             T->>C: render(row, ctx)
///             C->>X: content_tag / url_for
///             C-->>T: SafeString or error
///         end
///     end
/// ```
#[cfg_attr(doc, aquamarine::aquamarine)]
pub trait Table {
	/// The type of rows in this table
	type Row;

	/// Returns the registered columns, in display order
	fn columns(&self) -> &[Box<dyn Column<Row = Self::Row>>];

	/// Returns all rows
	fn rows(&self) -> &[Self::Row];

	/// Returns the number of rows
	fn total_rows(&self) -> usize {
		self.rows().len()
	}

	/// Renders the table as an HTML `<table>` element
	///
	/// The first cell that fails to render aborts the render and its error
	/// is returned unchanged.
	fn render_html(&self, ctx: &RenderContext) -> Result<String> {
		let mut head = SafeString::default();
		for column in self.columns() {
			head.push_safe(&content_tag(
				"th",
				&SafeString::escape(column.header()),
				&class_attrs(column.css_classes()),
			));
		}

		let mut body = SafeString::default();
		for (index, row) in self.rows().iter().enumerate() {
			tracing::trace!(row = index, "rendering table row");
			let mut cells = SafeString::default();
			for column in self.columns() {
				let cell = column.render(row, ctx)?;
				cells.push_safe(&content_tag("td", &cell, &class_attrs(column.css_classes())));
			}
			body.push_safe(&content_tag("tr", &cells, &[]));
		}

		let mut inner = content_tag("thead", &content_tag("tr", &head, &[]), &[]);
		inner.push_safe(&content_tag("tbody", &body, &[]));
		Ok(content_tag("table", &inner, &[]).into_string())
	}
}

fn class_attrs(css_classes: &str) -> Vec<(&'static str, String)> {
	if css_classes.is_empty() {
		Vec::new()
	} else {
		vec![("class", css_classes.to_string())]
	}
}

/// A table holding its rows in memory
pub struct SimpleTable<R> {
	rows: Vec<R>,
	columns: Vec<Box<dyn Column<Row = R>>>,
}

impl<R> SimpleTable<R> {
	/// Creates an empty table
	pub fn new() -> Self {
		Self::with_rows(Vec::new())
	}

	/// Creates a table over the given rows
	pub fn with_rows(rows: Vec<R>) -> Self {
		Self {
			rows,
			columns: Vec::new(),
		}
	}

	/// Appends a column
	pub fn add_column(&mut self, column: Box<dyn Column<Row = R>>) -> &mut Self {
		tracing::debug!(column = column.name(), "registered table column");
		self.columns.push(column);
		self
	}

	/// Looks up a column by name
	pub fn column(&self, name: &str) -> Result<&dyn Column<Row = R>> {
		self.columns
			.iter()
			.find(|column| column.name() == name)
			.map(|column| column.as_ref())
			.ok_or_else(|| TableError::ColumnNotFound(name.to_string()))
	}
}

impl<R> Default for SimpleTable<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R> std::fmt::Debug for SimpleTable<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SimpleTable")
			.field("rows", &self.rows.len())
			.field("columns", &self.columns)
			.finish()
	}
}

impl<R> Table for SimpleTable<R> {
	type Row = R;

	fn columns(&self) -> &[Box<dyn Column<Row = R>>] {
		&self.columns
	}

	fn rows(&self) -> &[R] {
		&self.rows
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::column::BaseColumn;

	#[derive(Debug)]
	struct Row {
		label: &'static str,
	}

	#[derive(Debug)]
	struct FailingColumn;

	impl Column for FailingColumn {
		type Row = Row;

		fn name(&self) -> &str {
			"failing"
		}

		fn header(&self) -> &str {
			""
		}

		fn render(&self, _row: &Row, _ctx: &RenderContext) -> Result<SafeString> {
			Err(TableError::Evaluation("boom".to_string()))
		}
	}

	#[test]
	fn test_render_empty_table() {
		let table: SimpleTable<Row> = SimpleTable::new();
		let html = table.render_html(&RenderContext::default()).unwrap();
		assert_eq!(
			html,
			"<table><thead><tr></tr></thead><tbody></tbody></table>"
		);
	}

	#[test]
	fn test_render_cells_with_classes() {
		let mut table = SimpleTable::with_rows(vec![Row { label: "a<b" }]);
		table.add_column(Box::new(
			BaseColumn::new("label", "Label", |row: &Row| row.label.to_string()).css_classes("col-label"),
		));

		let html = table.render_html(&RenderContext::default()).unwrap();
		assert_eq!(
			html,
			"<table><thead><tr><th class=\"col-label\">Label</th></tr></thead>\
			 <tbody><tr><td class=\"col-label\">a&lt;b</td></tr></tbody></table>"
		);
	}

	#[test]
	fn test_render_propagates_cell_error() {
		let mut table = SimpleTable::with_rows(vec![Row { label: "x" }]);
		table.add_column(Box::new(FailingColumn));

		let err = table.render_html(&RenderContext::default()).unwrap_err();
		assert!(matches!(err, TableError::Evaluation(msg) if msg == "boom"));
	}

	#[test]
	fn test_render_error_only_when_rows_exist() {
		let mut table: SimpleTable<Row> = SimpleTable::new();
		table.add_column(Box::new(FailingColumn));

		assert!(table.render_html(&RenderContext::default()).is_ok());
	}

	#[test]
	fn test_column_lookup() {
		let mut table: SimpleTable<Row> = SimpleTable::new();
		table.add_column(Box::new(FailingColumn));

		assert_eq!(table.column("failing").unwrap().name(), "failing");
		assert!(matches!(
			table.column("missing"),
			Err(TableError::ColumnNotFound(name)) if name == "missing"
		));
	}
}
