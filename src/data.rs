use std::path::Path;

use anyhow::Context;
use regex::Regex;
use serde::de::DeserializeOwned;

use crate::models::{CourseRecord, ElectiveOffering, TermRecord};

/// The three source tables, loaded once per invocation. The advisor
/// never writes them back.
pub struct Dataset {
    pub enrollment: Vec<CourseRecord>,
    pub terms: Vec<TermRecord>,
    pub electives: Vec<ElectiveOffering>,
}

pub fn load_dataset(
    enrollment_path: &Path,
    terms_path: &Path,
    electives_path: &Path,
) -> anyhow::Result<Dataset> {
    Ok(Dataset {
        enrollment: read_csv(enrollment_path)?,
        terms: read_csv(terms_path)?,
        electives: read_csv(electives_path)?,
    })
}

fn read_csv<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let mut rows = Vec::new();
    for result in reader.deserialize::<T>() {
        rows.push(result.with_context(|| format!("bad row in {}", path.display()))?);
    }
    Ok(rows)
}

/// Matches a free-text query against enrollment display names. First
/// tries the name following an "I am" / "I'm" / "My name is" phrase,
/// then any query word longer than three characters. Returns the first
/// enrollment row whose display name contains the match.
pub fn find_student<'a>(query: &str, enrollment: &'a [CourseRecord]) -> Option<&'a CourseRecord> {
    let pattern = Regex::new(r"(?:I am|I'm|My name is) ([A-Za-z ]+)").ok()?;

    if let Some(captures) = pattern.captures(query) {
        let name = captures[1].trim().to_lowercase();
        if let Some(student) = enrollment
            .iter()
            .find(|record| record.name_display.to_lowercase().contains(&name))
        {
            return Some(student);
        }
    }

    for word in query.to_lowercase().split_whitespace() {
        let word = word.trim_matches(|c: char| !c.is_alphanumeric());
        if word.len() <= 3 {
            continue;
        }
        if let Some(student) = enrollment
            .iter()
            .find(|record| record.name_display.to_lowercase().contains(word))
        {
            return Some(student);
        }
    }

    None
}

pub fn courses_for(enrollment: &[CourseRecord], emplid: &str) -> Vec<CourseRecord> {
    enrollment
        .iter()
        .filter(|record| record.emplid == emplid)
        .cloned()
        .collect()
}

pub fn terms_for(terms: &[TermRecord], emplid: &str) -> Vec<TermRecord> {
    terms
        .iter()
        .filter(|record| record.emplid == emplid)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enrollment_row(emplid: &str, name: &str) -> CourseRecord {
        CourseRecord {
            emplid: emplid.to_string(),
            name_display: name.to_string(),
            acad_prog: "ENG".to_string(),
            subject: Some("MATH".to_string()),
            crse_id: Some("200100".to_string()),
            crse_grade_off: Some("A".to_string()),
            cum_gpa: None,
            electives_finished: None,
        }
    }

    #[test]
    fn extracts_name_from_introduction_phrases() {
        let enrollment = vec![
            enrollment_row("1001", "Yaman Ahmed Al saadi"),
            enrollment_row("1002", "Huda Al Balushi"),
        ];

        let student = find_student("I'm Yaman Ahmed Al saadi, what electives fit me?", &enrollment);
        assert_eq!(student.map(|s| s.emplid.as_str()), Some("1001"));

        let student = find_student("My name is Huda Al Balushi", &enrollment);
        assert_eq!(student.map(|s| s.emplid.as_str()), Some("1002"));
    }

    #[test]
    fn falls_back_to_long_query_words() {
        let enrollment = vec![enrollment_row("1002", "Huda Al Balushi")];

        let student = find_student("any electives for balushi this term?", &enrollment);
        assert_eq!(student.map(|s| s.emplid.as_str()), Some("1002"));
    }

    #[test]
    fn short_words_and_unknown_names_match_nothing() {
        let enrollment = vec![enrollment_row("1002", "Huda Al Balushi")];

        assert!(find_student("who is al?", &enrollment).is_none());
        assert!(find_student("I am Omar Said", &enrollment).is_none());
    }

    #[test]
    fn selects_records_by_student_id() {
        let enrollment = vec![
            enrollment_row("1001", "Yaman Ahmed Al saadi"),
            enrollment_row("1001", "Yaman Ahmed Al saadi"),
            enrollment_row("1002", "Huda Al Balushi"),
        ];

        assert_eq!(courses_for(&enrollment, "1001").len(), 2);
        assert_eq!(courses_for(&enrollment, "1003").len(), 0);
    }
}
