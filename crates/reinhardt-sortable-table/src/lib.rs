//! Sortable handle column for Reinhardt admin tables
//!
//! Adds a column rendering a drag handle on every row so users can reorder
//! rows of a model that stores its order in a position attribute. The column
//! only renders markup; the client-side drag script and the endpoint that
//! persists the new position live elsewhere.
//!
//! # Features
//!
//! - **Handle column**: [`HandleColumn`], registered with [`HandleColumnExt::handle_column`]
//! - **Per-row options**: constants or functions of the row, see [`OptionValue`]
//! - **Move to top**: optional link posting to a `move_to_top` route
//! - **Settings**: application defaults loaded with serde, see [`SortableTableSettings`]
//!
//! # Example
//!
//! ```rust
//! use reinhardt_sortable_table::{HandleColumnExt, HandleColumnOptions, PositionValue, Sortable};
//! use reinhardt_tables::table::SimpleTable;
//! use reinhardt_tables::{RenderContext, Table, UrlReverser, UrlTarget};
//!
//! struct Lesson {
//!     id: i64,
//!     position: i64,
//! }
//!
//! impl UrlTarget for Lesson {
//!     fn collection_name(&self) -> &str {
//!         "lessons"
//!     }
//!     fn url_param(&self) -> String {
//!         self.id.to_string()
//!     }
//! }
//!
//! impl Sortable for Lesson {
//!     fn read_attribute(&self, name: &str) -> Option<PositionValue> {
//!         (name == "position").then(|| self.position.into())
//!     }
//! }
//!
//! let mut table = SimpleTable::with_rows(vec![Lesson { id: 1, position: 1 }]);
//! table.handle_column(
//!     HandleColumnOptions::new()
//!         .sort_url_with(|lesson: &Lesson, _ctx: &RenderContext| Ok(format!("/lessons/{}/sort", lesson.id))),
//! );
//!
//! let html = table.render_html(&RenderContext::new(UrlReverser::new())).unwrap();
//! assert!(html.contains(r#"<th class="activeadmin_sortable_table"></th>"#));
//! assert!(html.contains(r#"data-sort-url="/lessons/1/sort""#));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod dsl;
pub mod error;
pub mod handle_column;
pub mod options;
pub mod resource;
pub mod settings;

// Re-exports for convenience
pub use dsl::HandleColumnExt;
pub use error::{SettingsError, SettingsResult};
pub use handle_column::HandleColumn;
pub use options::{EffectiveOptions, HandleColumnOptions, OptionValue, ResolvedOptions};
pub use resource::{PositionValue, Sortable};
pub use settings::SortableTableSettings;
