use std::collections::HashSet;
use std::fmt::Write;

use crate::models::{
    AdvisoryContext, CourseRecord, GpaOutlook, Recommendation, StrengthSummary, StudentSummary,
    SubjectStrength,
};

const TOP_STRENGTHS: usize = 3;
const COMPLETED_SHOWN: usize = 5;

/// Assembles the structured context handed to the narrative layer:
/// top 3 strengths, first 5 completed course ids, top 5
/// recommendations. Completed ids are sorted so the same records
/// always produce the same context.
pub fn build_context(
    student: &CourseRecord,
    strengths: &[SubjectStrength],
    outlook: &GpaOutlook,
    completed: &HashSet<String>,
    recommendations: &[Recommendation],
) -> AdvisoryContext {
    let mut completed_courses: Vec<String> = completed.iter().cloned().collect();
    completed_courses.sort();
    completed_courses.truncate(COMPLETED_SHOWN);

    AdvisoryContext {
        student: StudentSummary {
            name: student.name_display.clone(),
            id: student.emplid.clone(),
            program: student.acad_prog.clone(),
            gpa: outlook.cumulative,
            gpa_trend: outlook.trend,
        },
        strengths: strengths
            .iter()
            .take(TOP_STRENGTHS)
            .map(|s| StrengthSummary {
                subject: s.subject.clone(),
                average: s.average,
                count: s.count,
            })
            .collect(),
        completed_courses,
        recommendations: recommendations.to_vec(),
    }
}

/// Renders the advisory as a markdown report, with the narrative (when
/// one was composed) leading the structured sections.
pub fn build_report(context: &AdvisoryContext, narrative: Option<&str>) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Academic Advisory Report");
    let _ = writeln!(
        output,
        "Prepared for {} (ID {}, program {})",
        context.student.name, context.student.id, context.student.program
    );
    let _ = writeln!(output);

    if let Some(narrative) = narrative {
        let _ = writeln!(output, "## Advisor Notes");
        let _ = writeln!(output, "{narrative}");
        let _ = writeln!(output);
    }

    let _ = writeln!(output, "## Academic Standing");
    let _ = writeln!(
        output,
        "- Cumulative GPA: {:.2} (trend: {})",
        context.student.gpa, context.student.gpa_trend
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Academic Strengths");

    if context.strengths.is_empty() {
        let _ = writeln!(output, "No graded coursework on record.");
    } else {
        for strength in &context.strengths {
            let _ = writeln!(
                output,
                "- {}: {:.2} across {} courses",
                strength.subject, strength.average, strength.count
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Recommended Electives");

    if context.recommendations.is_empty() {
        let _ = writeln!(output, "No eligible electives in the current catalog.");
    } else {
        for rec in &context.recommendations {
            let mut issues = String::new();
            if rec.capacity_issue {
                issues.push_str(" [capacity]");
            }
            if rec.timing_issue {
                issues.push_str(" [timing]");
            }
            let _ = writeln!(
                output,
                "- {} {} ({}, {}) with {} at {} score {:.2}{}",
                rec.course_id,
                rec.title,
                rec.subject,
                rec.difficulty,
                rec.instructor,
                rec.schedule,
                rec.score,
                issues
            );
        }
    }

    output
}
