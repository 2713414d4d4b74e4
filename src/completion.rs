use std::collections::HashSet;

use crate::models::CourseRecord;

/// Grades that do not satisfy a course: fail, withdrawals, incomplete,
/// unsatisfactory.
const NON_PASSING: [&str; 5] = ["F", "W", "I", "U", "WA"];

/// Collects every course id the student has already satisfied, from
/// two sources: explicit elective-completion lists on enrollment rows,
/// and any row whose posted grade is a passing one. Output is a
/// deduplicated set with no ordering guarantee.
pub fn extract_completed(courses: &[CourseRecord]) -> HashSet<String> {
    let mut completed = HashSet::new();

    for course in courses {
        if let Some(raw) = course.electives_finished.as_deref() {
            completed.extend(parse_course_list(raw));
        }
    }

    for course in courses {
        let Some(grade) = course.crse_grade_off.as_deref() else {
            continue;
        };
        if NON_PASSING.contains(&grade) {
            continue;
        }
        if let Some(id) = course.crse_id.as_deref().filter(|s| !s.is_empty()) {
            completed.insert(id.to_string());
        }
    }

    completed
}

/// Completion lists arrive either as JSON arrays or as Python-style
/// bracketed strings like `['201774', '201882']`. Parsing is strict
/// and never executes anything; input that fits neither shape
/// contributes no entries.
pub fn parse_course_list(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if let Ok(values) = serde_json::from_str::<Vec<serde_json::Value>>(trimmed) {
        return values
            .into_iter()
            .filter_map(|value| match value {
                serde_json::Value::String(s) => Some(s),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect();
    }

    let Some(inner) = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    else {
        return Vec::new();
    };

    inner
        .split(',')
        .map(|item| item.trim().trim_matches(|c| c == '\'' || c == '"').trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(crse_id: &str, grade: Option<&str>, finished: Option<&str>) -> CourseRecord {
        CourseRecord {
            emplid: "1001".to_string(),
            name_display: "Yaman Ahmed".to_string(),
            acad_prog: "ENG".to_string(),
            subject: Some("MATH".to_string()),
            crse_id: Some(crse_id.to_string()),
            crse_grade_off: grade.map(str::to_string),
            cum_gpa: None,
            electives_finished: finished.map(str::to_string),
        }
    }

    #[test]
    fn failing_grade_contributes_only_through_explicit_list() {
        let failed_only = vec![record("201774", Some("F"), None)];
        assert!(!extract_completed(&failed_only).contains("201774"));

        let failed_but_listed = vec![record("201774", Some("F"), Some("['201774']"))];
        assert!(extract_completed(&failed_but_listed).contains("201774"));
    }

    #[test]
    fn passing_grades_complete_even_outside_the_point_map() {
        // "P" has no grade-point value but is not a non-passing marker.
        let courses = vec![record("201774", Some("P"), None)];
        assert!(extract_completed(&courses).contains("201774"));
    }

    #[test]
    fn missing_grade_never_completes_a_course() {
        let courses = vec![record("201774", None, None)];
        assert!(extract_completed(&courses).is_empty());
    }

    #[test]
    fn merges_and_dedupes_both_sources() {
        let courses = vec![
            record("201774", Some("A"), Some("['201774', '201882']")),
            record("201990", Some("B"), None),
        ];

        let completed = extract_completed(&courses);
        assert_eq!(completed.len(), 3);
        assert!(completed.contains("201882"));
        assert!(completed.contains("201990"));
    }

    #[test]
    fn parses_json_and_python_style_lists() {
        assert_eq!(parse_course_list(r#"["201774", "201882"]"#), vec!["201774", "201882"]);
        assert_eq!(parse_course_list("['201774', '201882']"), vec!["201774", "201882"]);
        assert_eq!(parse_course_list("[201774, 201882]"), vec!["201774", "201882"]);
    }

    #[test]
    fn unparseable_lists_contribute_nothing() {
        assert!(parse_course_list("not a list").is_empty());
        assert!(parse_course_list("[unterminated").is_empty());
        assert!(parse_course_list("").is_empty());
        assert!(parse_course_list("[]").is_empty());
    }
}
