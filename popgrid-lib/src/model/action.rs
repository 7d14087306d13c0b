//! Per-row actions.

use std::fmt;
use std::sync::Arc;

use super::Record;

type ActionFn = Arc<dyn Fn(&Record) + Send + Sync>;
type ConditionFn = Arc<dyn Fn(&Record) -> bool + Send + Sync>;

/// An action button rendered in a row's actions cell.
///
/// # Example
///
/// ```
/// use popgrid_lib::model::{Record, RowAction, visible_actions};
///
/// let actions = vec![
///     RowAction::new("Inspect", |_row| {}),
///     RowAction::new("Remove", |_row| {})
///         .show_when(|row| row.get_i64("value").ok().flatten().unwrap_or(0) > 0),
/// ];
///
/// let row = Record::new().set("value", 0i64);
/// let shown: Vec<&str> = visible_actions(&row, &actions)
///     .into_iter()
///     .map(|a| a.label.as_str())
///     .collect();
/// assert_eq!(shown, vec!["Inspect"]);
/// ```
#[derive(Clone)]
pub struct RowAction {
    /// Button label.
    pub label: String,
    /// Optional icon name.
    pub icon: Option<String>,
    /// Optional style class for the presentation layer.
    pub style: Option<String>,
    on_click: ActionFn,
    show_condition: Option<ConditionFn>,
}

impl RowAction {
    /// Creates an action that is shown for every row.
    pub fn new<F>(label: impl Into<String>, on_click: F) -> Self
    where
        F: Fn(&Record) + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            icon: None,
            style: None,
            on_click: Arc::new(on_click),
            show_condition: None,
        }
    }

    /// Sets the icon name.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the style class.
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Only show the action for rows where `condition` holds.
    pub fn show_when<F>(mut self, condition: F) -> Self
    where
        F: Fn(&Record) -> bool + Send + Sync + 'static,
    {
        self.show_condition = Some(Arc::new(condition));
        self
    }

    /// Returns `true` if the action is shown for `row`.
    pub fn is_visible(&self, row: &Record) -> bool {
        self.show_condition.as_ref().is_none_or(|condition| condition(row))
    }

    /// Runs the action against `row`.
    pub fn invoke(&self, row: &Record) {
        (self.on_click)(row);
    }
}

impl fmt::Debug for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowAction")
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("style", &self.style)
            .field("conditional", &self.show_condition.is_some())
            .finish()
    }
}

/// Returns the actions shown for `row`, in list order.
pub fn visible_actions<'a>(row: &Record, actions: &'a [RowAction]) -> Vec<&'a RowAction> {
    actions.iter().filter(|action| action.is_visible(row)).collect()
}
