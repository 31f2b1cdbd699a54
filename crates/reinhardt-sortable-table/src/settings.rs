//! Application-wide defaults for handle columns

use crate::error::{SettingsError, SettingsResult};
use reinhardt_tables::{RenderContext, SafeString, UrlReverser};
use serde::{Deserialize, Serialize};

/// CSS class of the cells of a handle column
pub const HANDLE_COLUMN_CLASS: &str = "activeadmin_sortable_table";

/// Up-down arrow (U+21C5)
pub const DEFAULT_SORT_HANDLE: &str = "\u{21C5}";

/// Upwards white double arrow (U+21EE)
pub const DEFAULT_MOVE_TO_TOP_HANDLE: &str = "\u{21EE}";

/// Defaults applied to every handle column of an application
///
/// Handle glyphs are trusted markup and are emitted without escaping.
///
/// # Examples
///
/// ```
/// use reinhardt_sortable_table::SortableTableSettings;
///
/// let settings = SortableTableSettings::from_json(r#"{"default_namespace": "staff"}"#).unwrap();
/// assert_eq!(settings.default_namespace.as_deref(), Some("staff"));
/// assert_eq!(settings.sort_handle.as_str(), "\u{21C5}");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortableTableSettings {
	/// Namespace of the default sort and move-to-top routes
	///
	/// Unset means the namespace of the render context.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub default_namespace: Option<String>,
	/// CSS class of the handle column cells
	pub column_class: String,
	/// Markup of the drag handle
	pub sort_handle: SafeString,
	/// Markup of the move-to-top link
	pub move_to_top_handle: SafeString,
}

impl Default for SortableTableSettings {
	fn default() -> Self {
		Self {
			default_namespace: None,
			column_class: HANDLE_COLUMN_CLASS.to_string(),
			sort_handle: SafeString::new(DEFAULT_SORT_HANDLE),
			move_to_top_handle: SafeString::new(DEFAULT_MOVE_TO_TOP_HANDLE),
		}
	}
}

impl SortableTableSettings {
	/// Parse settings from JSON, filling omitted fields with defaults
	pub fn from_json(json: &str) -> SettingsResult<Self> {
		let settings: Self = serde_json::from_str(json)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reject values that would produce unusable route names
	pub fn validate(&self) -> SettingsResult<()> {
		let Some(namespace) = &self.default_namespace else {
			return Ok(());
		};
		if namespace.is_empty() {
			return Err(SettingsError::InvalidValue {
				field: "default_namespace",
				reason: "must not be empty".to_string(),
			});
		}
		if namespace.contains([':', '/']) {
			return Err(SettingsError::InvalidValue {
				field: "default_namespace",
				reason: format!("{:?} must not contain ':' or '/'", namespace),
			});
		}
		Ok(())
	}

	/// Build the render context for a request
	///
	/// The context keeps its own default namespace unless one is configured.
	pub fn render_context(&self, reverser: UrlReverser) -> RenderContext {
		let ctx = RenderContext::new(reverser);
		match &self.default_namespace {
			Some(namespace) => ctx.with_default_namespace(namespace.clone()),
			None => ctx,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let settings = SortableTableSettings::default();
		assert_eq!(settings.default_namespace, None);
		assert_eq!(settings.column_class, "activeadmin_sortable_table");
		assert_eq!(settings.sort_handle.as_str(), "⇅");
		assert_eq!(settings.move_to_top_handle.as_str(), "⇮");
	}

	#[rstest]
	fn test_from_json_empty_object() {
		let settings = SortableTableSettings::from_json("{}").unwrap();
		assert_eq!(settings, SortableTableSettings::default());
	}

	#[rstest]
	fn test_from_json_overrides() {
		let settings = SortableTableSettings::from_json(
			r#"{"column_class": "sortable", "sort_handle": "&#8645;"}"#,
		)
		.unwrap();
		assert_eq!(settings.column_class, "sortable");
		assert_eq!(settings.sort_handle.as_str(), "&#8645;");
		assert_eq!(settings.default_namespace, None);
	}

	#[rstest]
	#[case(r#"{"default_namespace": ""}"#)]
	#[case(r#"{"default_namespace": "admin:v2"}"#)]
	fn test_from_json_invalid_namespace(#[case] json: &str) {
		let err = SortableTableSettings::from_json(json).unwrap_err();
		assert!(matches!(
			err,
			SettingsError::InvalidValue {
				field: "default_namespace",
				..
			}
		));
	}

	#[rstest]
	fn test_from_json_malformed() {
		let err = SortableTableSettings::from_json("{default_namespace").unwrap_err();
		assert!(matches!(err, SettingsError::Parse(_)));
	}

	#[rstest]
	fn test_render_context_namespace() {
		let settings = SortableTableSettings {
			default_namespace: Some("staff".to_string()),
			..Default::default()
		};
		let ctx = settings.render_context(UrlReverser::new());
		assert_eq!(ctx.default_namespace(), "staff");
	}

	#[rstest]
	fn test_render_context_keeps_its_namespace_when_unset() {
		let ctx = SortableTableSettings::default().render_context(UrlReverser::new());
		assert_eq!(ctx.default_namespace(), "admin");
	}

	#[rstest]
	fn test_unset_namespace_is_not_serialized() {
		let json = serde_json::to_string(&SortableTableSettings::default()).unwrap();
		assert!(!json.contains("default_namespace"));
	}
}
