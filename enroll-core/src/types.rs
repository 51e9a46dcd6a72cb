//! Domain types for the enrollment roster.
//!
//! [`StudentRecord`] keeps its fields private so every value that exists has
//! passed validation; the only way in is [`StudentRecord::new`] or one of the
//! validating setters. [`StudentEntry`] is the raw on-disk shape.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which name field a [`ValidationError::InvalidName`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameField {
    First,
    Last,
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameField::First => write!(f, "First name"),
            NameField::Last => write!(f, "Last name"),
        }
    }
}

// ---------------------------------------------------------------------------
// Text rules
// ---------------------------------------------------------------------------

/// Uppercase the first letter of each whitespace-delimited word and lowercase
/// the rest. Whitespace between words is kept as-is.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut word_start = true;
    for ch in value.chars() {
        if ch.is_whitespace() {
            word_start = true;
            out.push(ch);
        } else if word_start {
            word_start = false;
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Checked against the raw input: surrounding whitespace is also rejected.
fn validate_name(field: NameField, value: &str) -> Result<String, ValidationError> {
    if value.is_empty() || !value.chars().all(char::is_alphabetic) {
        return Err(ValidationError::InvalidName {
            field,
            value: value.to_owned(),
        });
    }
    Ok(title_case(value.trim()))
}

fn validate_course(value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyCourse);
    }
    Ok(title_case(trimmed))
}

// ---------------------------------------------------------------------------
// Domain structs
// ---------------------------------------------------------------------------

/// Raw JSON object as stored in the roster file. Not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentEntry {
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "CourseName")]
    pub course_name: String,
}

/// A student registered for one course.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StudentEntry", into = "StudentEntry")]
pub struct StudentRecord {
    first_name: String,
    last_name: String,
    course_name: String,
}

impl StudentRecord {
    /// Validate and normalise all three fields.
    pub fn new(
        first_name: &str,
        last_name: &str,
        course_name: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: validate_name(NameField::First, first_name)?,
            last_name: validate_name(NameField::Last, last_name)?,
            course_name: validate_course(course_name)?,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    /// `"First Last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// On error the record is left unchanged.
    pub fn set_first_name(&mut self, value: &str) -> Result<(), ValidationError> {
        self.first_name = validate_name(NameField::First, value)?;
        Ok(())
    }

    pub fn set_last_name(&mut self, value: &str) -> Result<(), ValidationError> {
        self.last_name = validate_name(NameField::Last, value)?;
        Ok(())
    }

    pub fn set_course_name(&mut self, value: &str) -> Result<(), ValidationError> {
        self.course_name = validate_course(value)?;
        Ok(())
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} is enrolled in {}",
            self.first_name, self.last_name, self.course_name
        )
    }
}

impl TryFrom<StudentEntry> for StudentRecord {
    type Error = ValidationError;

    fn try_from(entry: StudentEntry) -> Result<Self, Self::Error> {
        Self::new(&entry.first_name, &entry.last_name, &entry.course_name)
    }
}

impl From<StudentRecord> for StudentEntry {
    fn from(record: StudentRecord) -> Self {
        Self {
            first_name: record.first_name,
            last_name: record.last_name,
            course_name: record.course_name,
        }
    }
}

/// Ordered list of records for the current session, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Roster {
    records: Vec<StudentRecord>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: StudentRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StudentRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }
}

impl FromIterator<StudentRecord> for Roster {
    fn from_iter<I: IntoIterator<Item = StudentRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Roster {
    type Item = StudentRecord;
    type IntoIter = std::vec::IntoIter<StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a StudentRecord;
    type IntoIter = std::slice::Iter<'a, StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalises_case_and_trims_course() {
        let r = StudentRecord::new("ann", "lee", "  calculus I ").expect("valid");
        assert_eq!(r.first_name(), "Ann");
        assert_eq!(r.last_name(), "Lee");
        assert_eq!(r.course_name(), "Calculus I");
    }

    #[test]
    fn digit_in_first_name_is_rejected() {
        let err = StudentRecord::new("Ann2", "Lee", "Calculus").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidName {
                field: NameField::First,
                value: "Ann2".into()
            }
        );
        assert!(err.to_string().starts_with("First name must only contain letters"));
    }

    #[test]
    fn padded_name_is_rejected_before_trim() {
        let err = StudentRecord::new(" ann", "lee", "Calculus").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidName { field: NameField::First, .. }));
    }

    #[test]
    fn last_name_error_names_the_field() {
        let err = StudentRecord::new("Ann", "O'Neil", "Calculus").unwrap_err();
        assert!(err.to_string().starts_with("Last name"));
    }

    #[test]
    fn blank_course_is_rejected() {
        assert_eq!(
            StudentRecord::new("Ann", "Lee", " \t ").unwrap_err(),
            ValidationError::EmptyCourse
        );
    }

    #[test]
    fn setter_revalidates_and_keeps_old_value_on_error() {
        let mut r = StudentRecord::new("Ann", "Lee", "Calculus").expect("valid");
        assert!(r.set_last_name("Lee Smith").is_err());
        assert_eq!(r.last_name(), "Lee");
        r.set_course_name("  organic chemistry ").expect("valid course");
        assert_eq!(r.course_name(), "Organic Chemistry");
        assert!(r.set_course_name("").is_err());
        assert_eq!(r.course_name(), "Organic Chemistry");
        r.set_first_name("bEA").expect("valid name");
        assert_eq!(r.first_name(), "Bea");
    }

    #[test]
    fn title_case_keeps_inner_whitespace() {
        assert_eq!(title_case("intro  TO\tlogic"), "Intro  To\tLogic");
        assert_eq!(title_case("cs101a"), "Cs101a");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn display_and_full_name() {
        let r = StudentRecord::new("ann", "lee", "calculus").expect("valid");
        assert_eq!(r.full_name(), "Ann Lee");
        assert_eq!(r.to_string(), "Ann Lee is enrolled in Calculus");
    }

    #[test]
    fn record_serializes_with_fixed_keys() {
        let r = StudentRecord::new("Ann", "Lee", "Calculus").expect("valid");
        let json = serde_json::to_value(&r).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"FirstName": "Ann", "LastName": "Lee", "CourseName": "Calculus"})
        );
    }

    #[test]
    fn record_deserialize_runs_validation() {
        let bad = r#"{"FirstName": "Ann 2", "LastName": "Lee", "CourseName": "Calculus"}"#;
        assert!(serde_json::from_str::<StudentRecord>(bad).is_err());
        let good = r#"{"FirstName": "ann", "LastName": "lee", "CourseName": "calculus"}"#;
        let r: StudentRecord = serde_json::from_str(good).expect("valid");
        assert_eq!(r.first_name(), "Ann");
    }

    #[test]
    fn roster_preserves_insertion_order() {
        let mut roster = Roster::new();
        assert!(roster.is_empty());
        roster.push(StudentRecord::new("Zed", "Zulu", "Art").unwrap());
        roster.push(StudentRecord::new("Amy", "Alpha", "Bio").unwrap());
        let names: Vec<_> = roster.iter().map(StudentRecord::first_name).collect();
        assert_eq!(names, ["Zed", "Amy"]);
        assert_eq!(roster.len(), 2);
    }
}
