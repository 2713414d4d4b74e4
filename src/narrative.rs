use std::fmt::Write;

use crate::models::AdvisoryContext;

/// Boundary to the prose-generation service. The advisory context is
/// fully computed before an engine runs, so a failing engine can only
/// cost the prose, never the ranking.
pub trait NarrativeEngine {
    fn compose(&self, query: &str, context: &AdvisoryContext) -> anyhow::Result<String>;
}

/// Offline engine: renders a deterministic advisory from the context
/// alone. Stands in wherever a hosted language model is not wired up.
pub struct TemplateNarrative;

impl NarrativeEngine for TemplateNarrative {
    fn compose(&self, _query: &str, context: &AdvisoryContext) -> anyhow::Result<String> {
        let mut text = String::new();

        let _ = write!(
            text,
            "Hello {}. Your cumulative GPA stands at {:.2} and your recent trend is {}.",
            context.student.name, context.student.gpa, context.student.gpa_trend
        );

        if let Some(best) = context.strengths.first() {
            let _ = write!(
                text,
                " Your strongest subject is {} with a {:.2} average over {} courses.",
                best.subject, best.average, best.count
            );
        }

        if context.recommendations.is_empty() {
            let _ = write!(text, " No electives in the current catalog fit your profile.");
        } else {
            let _ = write!(text, " Based on your record, consider:");
            for rec in &context.recommendations {
                let _ = write!(text, "\n- {} {} ({})", rec.course_id, rec.title, rec.subject);
                if rec.capacity_issue {
                    let _ = write!(text, " — note: this section is near capacity");
                }
                if rec.timing_issue {
                    let _ = write!(text, " — note: the meeting time may conflict");
                }
            }
        }

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Recommendation, StrengthSummary, StudentSummary, Trend};

    fn sample_context() -> AdvisoryContext {
        AdvisoryContext {
            student: StudentSummary {
                name: "Yaman Ahmed Al saadi".to_string(),
                id: "1001".to_string(),
                program: "ENG".to_string(),
                gpa: 3.5,
                gpa_trend: Trend::Improving,
            },
            strengths: vec![StrengthSummary {
                subject: "MATH".to_string(),
                average: 3.65,
                count: 2,
            }],
            completed_courses: vec!["200101".to_string()],
            recommendations: vec![Recommendation {
                course_id: "300500".to_string(),
                title: "Applied Statistics".to_string(),
                subject: "MATH".to_string(),
                schedule: "TuTh 09:00-10:15".to_string(),
                instructor: "Dr. Haddad".to_string(),
                capacity_issue: false,
                timing_issue: true,
                difficulty: Difficulty::Medium,
                score: 6.8,
            }],
        }
    }

    #[test]
    fn narrative_names_the_student_and_each_pick() {
        let context = sample_context();
        let text = TemplateNarrative
            .compose("what should I take?", &context)
            .expect("template narrative cannot fail");

        assert!(text.contains("Yaman Ahmed Al saadi"));
        assert!(text.contains("3.50"));
        assert!(text.contains("improving"));
        assert!(text.contains("300500 Applied Statistics"));
        assert!(text.contains("meeting time may conflict"));
    }
}
