//! Data table rendering utilities for Reinhardt
//!
//! This crate provides the table-building layer used by the admin list views:
//! declarative column definitions, a simple in-memory table and the rendering
//! scope (markup and URL helpers) that columns are rendered against.
//!
//! # Features
//!
//! - **Table Definition**: Declarative table definition using traits and builders
//! - **Columns**: Pluggable column types through the [`Column`] trait
//! - **HTML Rendering**: Escaped cells, pre-escaped markup via [`SafeString`]
//! - **URL Reversal**: Named routes resolved through [`UrlReverser`]
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[Table] --> B[Columns]
//!     A --> C[Rows]
//!     A --> D[RenderContext]
//!     B --> E[BaseColumn]
//!     B --> F[Custom Columns]
//!     D --> G[content_tag]
//!     D --> H[UrlReverser]
//! ```
//!
//! # Example
//!
//! ```rust
//! use reinhardt_tables::column::BaseColumn;
//! use reinhardt_tables::table::SimpleTable;
//! use reinhardt_tables::{RenderContext, Table};
//!
//! #[derive(Debug)]
//! struct User {
//!     id: i32,
//!     name: String,
//! }
//!
//! let mut table = SimpleTable::with_rows(vec![User {
//!     id: 1,
//!     name: "Alice".to_string(),
//! }]);
//! table.add_column(Box::new(BaseColumn::new("name", "Name", |user: &User| {
//!     user.name.clone()
//! })));
//!
//! let html = table.render_html(&RenderContext::default()).unwrap();
//! assert!(html.contains("<td>Alice</td>"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod context;
pub mod error;
pub mod html;
pub mod table;
pub mod urls;

// Re-exports for convenience
pub use column::Column;
pub use context::RenderContext;
pub use error::{Result, TableError};
pub use html::SafeString;
pub use table::Table;
pub use urls::{UrlReverser, UrlTarget};
