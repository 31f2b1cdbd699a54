//! Resource contract for sortable rows

use reinhardt_tables::{Result, TableError, UrlTarget};
use std::fmt;

/// Attribute name read when a resource does not override it
pub const DEFAULT_POSITION_COLUMN: &str = "position";

/// A row's sort position as read from its position column
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PositionValue {
	/// Integer position, the usual case
	Integer(i64),
	/// Any other orderable representation
	Text(String),
}

impl fmt::Display for PositionValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PositionValue::Integer(value) => write!(f, "{}", value),
			PositionValue::Text(value) => f.write_str(value),
		}
	}
}

impl From<i64> for PositionValue {
	fn from(value: i64) -> Self {
		PositionValue::Integer(value)
	}
}

impl From<i32> for PositionValue {
	fn from(value: i32) -> Self {
		PositionValue::Integer(i64::from(value))
	}
}

impl From<u32> for PositionValue {
	fn from(value: u32) -> Self {
		PositionValue::Integer(i64::from(value))
	}
}

impl From<String> for PositionValue {
	fn from(value: String) -> Self {
		PositionValue::Text(value)
	}
}

impl From<&str> for PositionValue {
	fn from(value: &str) -> Self {
		PositionValue::Text(value.to_string())
	}
}

/// A resource whose rows can be reordered by a handle column
///
/// The name of the position attribute is resolved per resource, so models
/// storing their order under another name only override
/// [`Sortable::position_column`].
///
/// # Examples
///
/// ```
/// use reinhardt_sortable_table::{PositionValue, Sortable};
/// use reinhardt_tables::UrlTarget;
///
/// struct Widget {
///     id: i64,
///     rank: i64,
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
///     fn position_column(&self) -> &str {
///         "rank"
///     }
///     fn read_attribute(&self, name: &str) -> Option<PositionValue> {
///         match name {
///             "rank" => Some(self.rank.into()),
///             _ => None,
///         }
///     }
/// }
///
/// let widget = Widget { id: 7, rank: 3 };
/// assert_eq!(widget.position().unwrap(), PositionValue::Integer(3));
/// ```
pub trait Sortable: UrlTarget {
	/// Name of the attribute holding this row's position
	fn position_column(&self) -> &str {
		DEFAULT_POSITION_COLUMN
	}

	/// Read an attribute by name, `None` when the resource has no such attribute
	fn read_attribute(&self, name: &str) -> Option<PositionValue>;

	/// Read the value of the position column
	///
	/// Fails with [`TableError::MissingAttribute`] when the resource does not
	/// expose the attribute its position column names.
	fn position(&self) -> Result<PositionValue> {
		let column = self.position_column();
		self.read_attribute(column).ok_or_else(|| {
			tracing::warn!(
				attribute = column,
				collection = self.collection_name(),
				"position attribute missing on sortable resource"
			);
			TableError::MissingAttribute {
				attribute: column.to_string(),
				resource: format!("{} #{}", self.collection_name(), self.url_param()),
			}
		})
	}
}
