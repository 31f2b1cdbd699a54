
use fixtures::*;
use reinhardt_tables::column::BaseColumn;
use reinhardt_tables::html::content_tag;
use reinhardt_tables::table::SimpleTable;
use reinhardt_tables::{Column, RenderContext, Result, SafeString, Table, TableError};
use rstest::*;

/// Column linking each user to its change page, resolved per row
#[derive(Debug)]
struct ChangeLinkColumn {
	namespace: Option<String>,
}

impl Column for ChangeLinkColumn {
	type Row = TestUser;

	fn name(&self) -> &str {
		"change"
	}

	fn header(&self) -> &str {
		""
	}

	fn render(&self, user: &TestUser, ctx: &RenderContext) -> Result<SafeString> {
		let namespace = self.namespace.as_deref().unwrap_or(ctx.default_namespace());
		let url = ctx.url_for("change", namespace, user)?;
		Ok(ctx.content_tag("a", &SafeString::escape("Edit"), &[("href", url)]))
	}
}

#[rstest]
fn test_create_empty_table(empty_table: SimpleTable<TestUser>) {
	assert_eq!(empty_table.rows().len(), 0);
	assert_eq!(empty_table.total_rows(), 0);
	assert!(empty_table.columns().is_empty());
}

#[rstest]
fn test_create_table_with_rows(sample_users: Vec<TestUser>) {
	let table = SimpleTable::with_rows(sample_users);
	assert_eq!(table.rows().len(), 3);
	assert_eq!(table.total_rows(), 3);
}

#[rstest]
fn test_table_with_columns(table_with_columns: SimpleTable<TestUser>) {
	let names: Vec<&str> = table_with_columns
		.columns()
		.iter()
		.map(|column| column.name())
		.collect();
	assert_eq!(names, vec!["id", "name", "email", "active"]);
	assert_eq!(table_with_columns.column("email").unwrap().header(), "Email");
}

#[rstest]
fn test_render_html_headers(table_with_columns: SimpleTable<TestUser>, render_context: RenderContext) {
	let html = table_with_columns.render_html(&render_context).unwrap();
	assert!(html.starts_with(
		"<table><thead><tr><th>ID</th><th class=\"col-name\">Name</th><th>Email</th><th>Active</th></tr></thead>"
	));
}

#[rstest]
fn test_render_html_rows_in_order(
	table_with_columns: SimpleTable<TestUser>,
	render_context: RenderContext,
) {
	let html = table_with_columns.render_html(&render_context).unwrap();
	let alice = html.find("Alice").unwrap();
	let bob = html.find("Bob").unwrap();
	let charlie = html.find("Charlie").unwrap();
	assert!(alice < bob && bob < charlie);
	assert_eq!(html.matches("<tr>").count(), 4);
}

#[rstest]
fn test_render_html_escapes_cells(
	table_with_columns: SimpleTable<TestUser>,
	render_context: RenderContext,
) {
	let html = table_with_columns.render_html(&render_context).unwrap();
	assert!(html.contains("<td class=\"col-name\">Charlie &lt;admin&gt;</td>"));
	assert!(!html.contains("<admin>"));
}

#[rstest]
fn test_custom_column_resolves_urls(sample_users: Vec<TestUser>, render_context: RenderContext) {
	let mut table = SimpleTable::with_rows(sample_users);
	table.add_column(Box::new(ChangeLinkColumn { namespace: None }));

	let html = table.render_html(&render_context).unwrap();
	let expected = content_tag(
		"a",
		&SafeString::new("Edit"),
		&[("href", "/admin/users/2/change/".to_string())],
	);
	assert!(html.contains(expected.as_str()));
}

#[rstest]
#[case("admin", "/admin/users/1/change/")]
#[case("staff", "/staff/users/1/change/")]
fn test_custom_column_namespace(
	sample_users: Vec<TestUser>,
	render_context: RenderContext,
	#[case] namespace: &str,
	#[case] expected_url: &str,
) {
	let column = ChangeLinkColumn {
		namespace: Some(namespace.to_string()),
	};
	let html = column.render(&sample_users[0], &render_context).unwrap();
	assert_eq!(
		html.as_str(),
		format!("<a href=\"{}\">Edit</a>", expected_url)
	);
}

#[rstest]
fn test_render_error_propagates(sample_users: Vec<TestUser>) {
	let mut table = SimpleTable::with_rows(sample_users);
	table.add_column(Box::new(ChangeLinkColumn { namespace: None }));

	let err = table.render_html(&RenderContext::default()).unwrap_err();
	assert!(matches!(err, TableError::NoReverseMatch(route) if route == "admin:change_users"));
}

#[rstest]
fn test_render_is_repeatable(
	table_with_columns: SimpleTable<TestUser>,
	render_context: RenderContext,
) {
	let first = table_with_columns.render_html(&render_context).unwrap();
	let second = table_with_columns.render_html(&render_context).unwrap();
	assert_eq!(first, second);
}

#[rstest]
fn test_add_column_after_render(mut table_with_columns: SimpleTable<TestUser>) {
	table_with_columns.add_column(Box::new(BaseColumn::new(
		"email_domain",
		"Domain",
		|user: &TestUser| user.email.split('@').nth(1).unwrap_or_default().to_string(),
	)));

	let html = table_with_columns.render_html(&RenderContext::default()).unwrap();
	assert!(html.contains("<td>example.com</td>"));
}
