//! Stateless rendering of a course list.
//!
//! A view is rebuilt from the controller's entries after every change. It
//! owns nothing; interactions come back out as [`ListAction`] values that the
//! controller applies to the list the view was rendered for.

use std::fmt;

use crate::models::{CourseEntry, CourseField, CourseId, Direction};

pub const ADD_ROW_LABEL: &str = "إضافة مادة";
pub const REMOVE_ROW_LABEL: &str = "حذف";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    Add,
    Remove(CourseId),
    Change {
        id: CourseId,
        field: CourseField,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInput<'a> {
    pub field: CourseField,
    pub placeholder: &'static str,
    pub value: &'a str,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRowView<'a> {
    pub ordinal: usize,
    pub id: CourseId,
    pub inputs: Vec<FieldInput<'a>>,
}

impl CourseRowView<'_> {
    pub fn remove_action(&self) -> ListAction {
        ListAction::Remove(self.id)
    }

    pub fn change_action(&self, field: CourseField, value: impl Into<String>) -> ListAction {
        ListAction::Change {
            id: self.id,
            field,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseListView<'a> {
    pub direction: Direction,
    pub title: &'static str,
    pub rows: Vec<CourseRowView<'a>>,
}

impl<'a> CourseListView<'a> {
    /// Row shown at 1-based `ordinal`.
    pub fn row(&self, ordinal: usize) -> Option<&CourseRowView<'a>> {
        ordinal.checked_sub(1).and_then(|index| self.rows.get(index))
    }

    pub fn add_action(&self) -> ListAction {
        ListAction::Add
    }
}

pub fn render_course_list(direction: Direction, entries: &[CourseEntry]) -> CourseListView<'_> {
    let rows = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| CourseRowView {
            ordinal: index + 1,
            id: entry.id,
            inputs: CourseField::ALL
                .into_iter()
                .map(|field| FieldInput {
                    field,
                    placeholder: field.placeholder(),
                    value: entry.field(field),
                    required: true,
                })
                .collect(),
        })
        .collect();

    CourseListView {
        direction,
        title: direction.title(),
        rows,
    }
}

impl fmt::Display for FieldInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "[{}{}]", self.placeholder, if self.required { " *" } else { "" })
        } else {
            write!(f, "[{}: {}]", self.placeholder, self.value)
        }
    }
}

impl fmt::Display for CourseListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "── {} ({}) ──", self.title, self.direction.as_str())?;
        for row in &self.rows {
            write!(f, "  {}.", row.ordinal)?;
            for input in &row.inputs {
                write!(f, " {}", input)?;
            }
            writeln!(f, "  [{}]", REMOVE_ROW_LABEL)?;
        }
        write!(f, "  [+ {}]", ADD_ROW_LABEL)
    }
}
