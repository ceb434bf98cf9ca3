//! Presentation binding.
//!
//! The widget does not draw. [`SelectView`] is a plain snapshot of what a
//! renderer needs, and [`Presentation`] is the seam a rendering backend
//! implements. Each rendered zone maps back to exactly one
//! [`SelectEvent`](crate::events::SelectEvent):
//!
//! | Zone                          | Event                      |
//! |-------------------------------|----------------------------|
//! | widget body                   | `BodyClick`                |
//! | option row `i`                | `OptionClick(i)`, `OptionHover(i)` |
//! | clear control                 | `ClearClick`               |
//! | badge remove control for `k`  | `RemoveClick(k)`           |
//!
//! [`PlainTextPresenter`] renders to text, for terminals, logs and tests.

use std::fmt::Write as _;

use crate::option::OptionKey;
use crate::selection::{SelectedValue, SelectionMode};
use crate::widget::Select;

/// A removable chip for one selected option in multiple mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// Key to report in `RemoveClick`.
    pub key: OptionKey,
    /// Text on the badge.
    pub label: String,
}

/// What the widget body shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayValue {
    /// Nothing selected.
    Placeholder(String),
    /// The single selection's label.
    Label(String),
    /// One badge per selected option, in selection order.
    Badges(Vec<Badge>),
}

/// One row of the option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    /// Position in the option list, reported by `OptionClick`/`OptionHover`.
    pub index: usize,
    /// Key of the option.
    pub key: OptionKey,
    /// Text shown for the option.
    pub label: String,
    /// Part of the current value.
    pub selected: bool,
    /// Target of keyboard navigation.
    pub highlighted: bool,
}

/// Snapshot of one widget instance for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectView {
    /// Single or multiple selection.
    pub mode: SelectionMode,
    /// Whether the option list is visible. `rows` are only populated when open.
    pub open: bool,
    /// Highlighted row, if there are any rows.
    pub highlighted: Option<usize>,
    /// What the closed control shows.
    pub display: DisplayValue,
    /// The option list, top to bottom.
    pub rows: Vec<OptionRow>,
    /// Whether there is anything for the clear control to clear. The control
    /// itself stays clickable either way.
    pub clearable: bool,
}

impl SelectView {
    /// Build the view of `select`.
    pub fn of(select: &Select) -> Self {
        let highlighted = select.highlighted_index();
        let rows = if select.is_open() {
            select
                .options()
                .iter()
                .enumerate()
                .map(|(index, option)| OptionRow {
                    index,
                    key: option.value.clone(),
                    label: option.label.clone(),
                    selected: select.value().contains(&option.value),
                    highlighted: highlighted == Some(index),
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            mode: select.mode(),
            open: select.is_open(),
            highlighted,
            display: display_value(select.value(), select.placeholder()),
            rows,
            clearable: !select.value().is_empty(),
        }
    }
}

fn display_value(value: &SelectedValue, placeholder: &str) -> DisplayValue {
    match value {
        SelectedValue::Single(Some(option)) => DisplayValue::Label(option.label.clone()),
        SelectedValue::Multiple(values) if !values.is_empty() => DisplayValue::Badges(
            values
                .iter()
                .map(|o| Badge {
                    key: o.value.clone(),
                    label: o.label.clone(),
                })
                .collect(),
        ),
        _ => DisplayValue::Placeholder(placeholder.to_owned()),
    }
}

/// A rendering backend.
pub trait Presentation {
    /// Render `view`, replacing whatever was rendered before.
    fn present(&mut self, view: &SelectView);
}

/// Renders a view as plain text.
///
/// ```text
/// [First x] [Second x]   (x) v
/// > * First
///   * Second
///     Third
/// ```
///
/// The first line is the body: the value (badges or a label, or the
/// placeholder in angle brackets), the clear control and the open indicator.
/// Rows follow while open; `>` marks the highlight and `*` a selected option.
#[derive(Debug, Default)]
pub struct PlainTextPresenter {
    output: String,
}

impl PlainTextPresenter {
    /// Create a presenter with empty output.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last rendered text.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Render a view straight to a string.
    pub fn render(view: &SelectView) -> String {
        let mut out = String::new();
        match &view.display {
            DisplayValue::Placeholder(text) => {
                let _ = write!(out, "<{text}>");
            }
            DisplayValue::Label(label) => out.push_str(label),
            DisplayValue::Badges(badges) => {
                let chips: Vec<String> = badges.iter().map(|b| format!("[{} x]", b.label)).collect();
                out.push_str(&chips.join(" "));
            }
        }
        out.push_str("   (x) ");
        out.push(if view.open { '^' } else { 'v' });

        for row in &view.rows {
            let cursor = if row.highlighted { '>' } else { ' ' };
            let mark = if row.selected { '*' } else { ' ' };
            let _ = write!(out, "\n{cursor} {mark} {}", row.label);
        }
        out
    }
}

impl Presentation for PlainTextPresenter {
    fn present(&mut self, view: &SelectView) {
        self.output = Self::render(view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::SelectEvent;
    use crate::option::SelectOption;

    fn options() -> Vec<SelectOption> {
        vec![
            SelectOption::new("First", 1),
            SelectOption::new("Second", 2),
            SelectOption::new("Third", 3),
        ]
    }

    #[test]
    fn test_closed_view_has_no_rows() {
        let select = Select::single()
            .with_options(options())
            .with_placeholder("Pick one");
        let view = select.view();
        assert!(!view.open);
        assert!(view.rows.is_empty());
        assert!(!view.clearable);
        assert_eq!(view.display, DisplayValue::Placeholder("Pick one".into()));
        assert_eq!(PlainTextPresenter::render(&view), "<Pick one>   (x) v");
    }

    #[test]
    fn test_open_view_marks_rows() {
        let mut select = Select::multiple()
            .with_options(options())
            .with_value(SelectedValue::multiple([
                SelectOption::new("First", 1),
                SelectOption::new("Second", 2),
            ]))
            .unwrap();
        select.event(&SelectEvent::BodyClick);
        select.event(&SelectEvent::OptionHover(1));

        let view = select.view();
        assert_eq!(view.mode, SelectionMode::Multiple);
        assert_eq!(view.highlighted, Some(1));
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.rows[2].key, OptionKey::Int(3));
        assert_eq!(view.rows[2].label, "Third");
        assert!(view.rows[0].selected && !view.rows[0].highlighted);
        assert!(view.rows[1].selected && view.rows[1].highlighted);
        assert!(!view.rows[2].selected);
        assert!(view.clearable);

        let mut presenter = PlainTextPresenter::new();
        presenter.present(&view);
        assert_eq!(
            presenter.output(),
            "[First x] [Second x]   (x) ^\n  * First\n> * Second\n    Third"
        );
    }

    #[test]
    fn test_single_label_display() {
        let select = Select::single()
            .with_options(options())
            .with_value(SelectedValue::single(SelectOption::new("Third", 3)))
            .unwrap();
        assert_eq!(select.view().display, DisplayValue::Label("Third".into()));
    }

    #[test]
    fn test_badges_carry_keys() {
        let select = Select::multiple()
            .with_value(SelectedValue::multiple([SelectOption::new("Second", 2)]))
            .unwrap();
        match select.view().display {
            DisplayValue::Badges(badges) => {
                assert_eq!(badges.len(), 1);
                assert_eq!(badges[0].key, OptionKey::Int(2));
            }
            other => panic!("expected badges, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_multiple_shows_placeholder() {
        let select = Select::multiple();
        assert!(matches!(select.view().display, DisplayValue::Placeholder(_)));
    }
}
