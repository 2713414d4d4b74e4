use crate::models::{CourseRecord, SubjectStrength};

/// Grade-point value for an official letter grade. Grades outside this
/// map (W, I, transfer markers, blanks) do not feed strength averages.
pub fn grade_points(grade: &str) -> Option<f64> {
    let points = match grade {
        "A" => 4.0,
        "B+" => 3.3,
        "B" => 3.0,
        "C+" => 2.3,
        "C" => 2.0,
        "D+" => 1.3,
        "D" => 1.0,
        "F" => 0.0,
        "S" => 3.0,
        "U" => 0.0,
        _ => return None,
    };
    Some(points)
}

/// Aggregates a student's graded courses into per-subject averages,
/// strongest subject first. Records with no subject, no grade, or an
/// unmapped grade are skipped; malformed input yields an empty profile
/// rather than an error.
pub fn profile_strengths(courses: &[CourseRecord]) -> Vec<SubjectStrength> {
    // Accumulate in first-encounter order so equal averages keep a
    // stable ordering after the sort.
    let mut totals: Vec<(String, f64, Vec<String>)> = Vec::new();

    for course in courses {
        let Some(subject) = course.subject.as_deref().filter(|s| !s.is_empty()) else {
            continue;
        };
        let Some(grade) = course.crse_grade_off.as_deref() else {
            continue;
        };
        let Some(points) = grade_points(grade) else {
            continue;
        };

        match totals.iter_mut().find(|(s, _, _)| s == subject) {
            Some((_, total, grades)) => {
                *total += points;
                grades.push(grade.to_string());
            }
            None => totals.push((subject.to_string(), points, vec![grade.to_string()])),
        }
    }

    let mut strengths: Vec<SubjectStrength> = totals
        .into_iter()
        .map(|(subject, total, grades)| SubjectStrength {
            subject,
            average: round2(total / grades.len() as f64),
            count: grades.len(),
            grades,
        })
        .collect();

    strengths.sort_by(|a, b| b.average.partial_cmp(&a.average).unwrap_or(std::cmp::Ordering::Equal));
    strengths
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
