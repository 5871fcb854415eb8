use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UnknownKeyword;

/// Row identifier, taken from the clock when the row is created.
pub type CourseId = u64;

/// Which of the two course lists an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Add,
    Drop,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Add, Direction::Drop];

    pub fn title(self) -> &'static str {
        match self {
            Direction::Add => "المواد المراد إضافتها",
            Direction::Drop => "المواد المراد حذفها",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Add => "add",
            Direction::Drop => "drop",
        }
    }
}

impl FromStr for Direction {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "add" => Ok(Direction::Add),
            "drop" => Ok(Direction::Drop),
            _ => Err(UnknownKeyword::new("direction", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseField {
    Code,
    Crn,
    Section,
    Name,
}

impl CourseField {
    /// Display order of the row inputs.
    pub const ALL: [CourseField; 4] = [
        CourseField::Code,
        CourseField::Crn,
        CourseField::Section,
        CourseField::Name,
    ];

    pub fn placeholder(self) -> &'static str {
        match self {
            CourseField::Code => "رمز المادة",
            CourseField::Crn => "الرقم المرجعي",
            CourseField::Section => "الشعبة",
            CourseField::Name => "اسم المادة",
        }
    }
}

impl FromStr for CourseField {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "code" => Ok(CourseField::Code),
            "crn" => Ok(CourseField::Crn),
            "section" => Ok(CourseField::Section),
            "name" => Ok(CourseField::Name),
            _ => Err(UnknownKeyword::new("course field", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub id: CourseId,
    pub code: String,
    pub name: String,
    pub crn: String,
    pub section: String,
}

impl CourseEntry {
    pub fn blank(id: CourseId) -> Self {
        Self {
            id,
            code: String::new(),
            name: String::new(),
            crn: String::new(),
            section: String::new(),
        }
    }

    pub fn field(&self, field: CourseField) -> &str {
        match field {
            CourseField::Code => &self.code,
            CourseField::Crn => &self.crn,
            CourseField::Section => &self.section,
            CourseField::Name => &self.name,
        }
    }

    pub fn set_field(&mut self, field: CourseField, value: String) {
        match field {
            CourseField::Code => self.code = value,
            CourseField::Crn => self.crn = value,
            CourseField::Section => self.section = value,
            CourseField::Name => self.name = value,
        }
    }

    /// First field, in display order, that is empty or whitespace only.
    pub fn first_blank_field(&self) -> Option<CourseField> {
        CourseField::ALL
            .into_iter()
            .find(|field| self.field(*field).trim().is_empty())
    }
}
