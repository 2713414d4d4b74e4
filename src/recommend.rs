use std::collections::HashSet;

use crate::models::{Difficulty, ElectiveOffering, Recommendation, SubjectStrength};

pub const MAX_RECOMMENDATIONS: usize = 5;

/// Scores the elective catalog against a student's strengths and GPA
/// tier and returns the top offerings, best first. Offerings the
/// student has already completed are skipped outright. Ties keep
/// catalog order.
pub fn recommend_electives(
    strengths: &[SubjectStrength],
    completed: &HashSet<String>,
    catalog: &[ElectiveOffering],
    cumulative_gpa: f64,
) -> Vec<Recommendation> {
    let student_tier = Difficulty::from_gpa(cumulative_gpa);
    let mut recommendations = Vec::new();

    for elective in catalog {
        if completed.contains(&elective.course_id) {
            continue;
        }

        let mut score = 0.0;

        if let Some(strength) = strengths.iter().find(|s| s.subject == elective.subject) {
            score += strength.average * 2.0;
        }

        let course_tier = Difficulty::parse(&elective.difficulty);
        score += match (student_tier, course_tier) {
            (Difficulty::Low, Difficulty::High) => -2.0,
            (Difficulty::High, Difficulty::Low) => -0.5,
            (student, course) if student == course => 1.0,
            _ => 0.0,
        };

        let capacity_issue = elective.capacity_status != "OK";
        let timing_issue = elective.timing_status != "OK";
        if capacity_issue {
            score -= 1.0;
        }
        if timing_issue {
            score -= 0.5;
        }

        recommendations.push(Recommendation {
            course_id: elective.course_id.clone(),
            title: elective.course_title.clone(),
            subject: elective.subject.clone(),
            schedule: format!(
                "{} {}-{}",
                elective.scheduled_days, elective.start_time, elective.end_time
            ),
            instructor: elective.instructor.clone(),
            capacity_issue,
            timing_issue,
            difficulty: course_tier,
            score,
        });
    }

    recommendations
        .sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}
