use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UnknownKeyword;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInfo {
    pub name: String,
    pub id: String,
    pub email: String,
    pub phone: String,
}

impl StudentInfo {
    pub fn field(&self, field: StudentField) -> &str {
        match field {
            StudentField::Name => &self.name,
            StudentField::Id => &self.id,
            StudentField::Email => &self.email,
            StudentField::Phone => &self.phone,
        }
    }

    pub fn set_field(&mut self, field: StudentField, value: String) {
        match field {
            StudentField::Name => self.name = value,
            StudentField::Id => self.id = value,
            StudentField::Email => self.email = value,
            StudentField::Phone => self.phone = value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudentField {
    Name,
    Id,
    Email,
    Phone,
}

impl StudentField {
    pub const ALL: [StudentField; 4] = [
        StudentField::Name,
        StudentField::Id,
        StudentField::Email,
        StudentField::Phone,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StudentField::Name => "اسم الطالب",
            StudentField::Id => "الرقم الجامعي",
            StudentField::Email => "البريد الجامعي",
            StudentField::Phone => "رقم الجوال",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            StudentField::Name => "ادخل اسمك الكامل",
            StudentField::Id => "ادخل رقمك الجامعي",
            StudentField::Email => "example@kau.edu.sa",
            StudentField::Phone => "05xxxxxxxx",
        }
    }
}

impl FromStr for StudentField {
    type Err = UnknownKeyword;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(StudentField::Name),
            "id" => Ok(StudentField::Id),
            "email" => Ok(StudentField::Email),
            "phone" => Ok(StudentField::Phone),
            _ => Err(UnknownKeyword::new("student field", s)),
        }
    }
}
