//! Common test fixtures for reinhardt-sortable-table tests

#![allow(dead_code)]

use reinhardt_sortable_table::{PositionValue, Sortable};
use reinhardt_tables::{RenderContext, UrlReverser, UrlTarget};
use rstest::*;

/// Sortable model stored under the default `position` attribute
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
	pub id: i64,
	pub name: String,
	pub position: i64,
}

impl Widget {
	pub fn new(id: i64, name: &str, position: i64) -> Self {
		Self {
			id,
			name: name.to_string(),
			position,
		}
	}
}

impl UrlTarget for Widget {
	fn collection_name(&self) -> &str {
		"widgets"
	}

	fn url_param(&self) -> String {
		self.id.to_string()
	}
}

impl Sortable for Widget {
	fn read_attribute(&self, name: &str) -> Option<PositionValue> {
		match name {
			"position" => Some(self.position.into()),
			_ => None,
		}
	}
}

/// Model that names a position column it does not expose
#[derive(Debug, Clone)]
pub struct Unpositioned {
	pub id: i64,
}

impl UrlTarget for Unpositioned {
	fn collection_name(&self) -> &str {
		"unpositioned"
	}

	fn url_param(&self) -> String {
		self.id.to_string()
	}
}

impl Sortable for Unpositioned {
	fn position_column(&self) -> &str {
		"sort_order"
	}

	fn read_attribute(&self, _name: &str) -> Option<PositionValue> {
		None
	}
}

/// Model addressed by a free-form slug instead of a numeric id
#[derive(Debug, Clone)]
pub struct Slugged {
	pub slug: String,
	pub position: i64,
}

impl Slugged {
	pub fn new(slug: &str, position: i64) -> Self {
		Self {
			slug: slug.to_string(),
			position,
		}
	}
}

impl UrlTarget for Slugged {
	fn collection_name(&self) -> &str {
		"slugs"
	}

	fn url_param(&self) -> String {
		self.slug.clone()
	}
}

impl Sortable for Slugged {
	fn read_attribute(&self, name: &str) -> Option<PositionValue> {
		match name {
			"position" => Some(self.position.into()),
			_ => None,
		}
	}
}

/// Fixture providing widgets in display order
#[fixture]
pub fn widgets() -> Vec<Widget> {
	vec![
		Widget::new(7, "Sprocket", 3),
		Widget::new(12, "Gear", 4),
		Widget::new(3, "Cog", 5),
	]
}

/// Fixture providing the sort and move-to-top routes of the admin and staff namespaces
#[fixture]
pub fn reverser() -> UrlReverser {
	UrlReverser::new()
		.with_path("admin:sort_widgets", "/admin/sort/widgets/{id}")
		.with_path("admin:move_to_top_widgets", "/admin/move_to_top/widgets/{id}")
		.with_path("staff:sort_widgets", "/staff/sort/widgets/{id}")
		.with_path("admin:sort_unpositioned", "/admin/sort/unpositioned/{id}")
}

/// Fixture providing a render context in the `admin` namespace
#[fixture]
pub fn admin_context(reverser: UrlReverser) -> RenderContext {
	RenderContext::new(reverser)
}
