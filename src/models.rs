use serde::{Deserialize, Serialize};

/// One student-course enrollment row. Grade and subject columns are
/// frequently blank in the source tables, so they stay optional here.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseRecord {
    pub emplid: String,
    #[serde(default)]
    pub name_display: String,
    #[serde(default)]
    pub acad_prog: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub crse_id: Option<String>,
    #[serde(default)]
    pub crse_grade_off: Option<String>,
    #[serde(default)]
    pub cum_gpa: Option<String>,
    #[serde(default)]
    pub electives_finished: Option<String>,
}

/// One student-term row. `strm` is the term sequence number and the
/// only chronological key; a `term_gpa` of zero means no GPA was
/// posted for that term.
#[derive(Debug, Clone, Deserialize)]
pub struct TermRecord {
    pub emplid: String,
    pub strm: i32,
    #[serde(default)]
    pub term_gpa: f64,
}

/// One row of the elective catalog. Missing columns default to empty
/// strings; scoring treats an empty difficulty as medium.
#[derive(Debug, Clone, Deserialize)]
pub struct ElectiveOffering {
    #[serde(default)]
    pub course_id: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub course_title: String,
    #[serde(default)]
    pub scheduled_days: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub instructor: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub capacity_status: String,
    #[serde(default)]
    pub timing_status: String,
}

/// Per-subject grade aggregate produced by the strength profiler.
#[derive(Debug, Clone, Serialize)]
pub struct SubjectStrength {
    pub subject: String,
    pub average: f64,
    pub count: usize,
    pub grades: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
    Insufficient,
    Unavailable,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Trend::Improving => "improving",
            Trend::Declining => "declining",
            Trend::Stable => "stable",
            Trend::Insufficient => "insufficient",
            Trend::Unavailable => "unavailable",
        };
        f.write_str(label)
    }
}

/// What the GPA resolver knows about a student's standing.
#[derive(Debug, Clone)]
pub struct GpaOutlook {
    pub cumulative: f64,
    pub trend: Trend,
    pub avg_term_gpa: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Low,
    Medium,
    High,
}

impl Difficulty {
    /// GPA tier used to match students against course difficulty.
    pub fn from_gpa(gpa: f64) -> Self {
        if gpa >= 3.5 {
            Difficulty::High
        } else if gpa >= 2.5 {
            Difficulty::Medium
        } else {
            Difficulty::Low
        }
    }

    /// Catalog labels are free text; anything unrecognized (including
    /// an empty column) counts as medium.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => Difficulty::Low,
            "high" => Difficulty::High,
            _ => Difficulty::Medium,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Difficulty::Low => "low",
            Difficulty::Medium => "medium",
            Difficulty::High => "high",
        };
        f.write_str(label)
    }
}

/// One scored elective, ready for ranking and display.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub course_id: String,
    pub title: String,
    pub subject: String,
    pub schedule: String,
    pub instructor: String,
    pub capacity_issue: bool,
    pub timing_issue: bool,
    pub difficulty: Difficulty,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentSummary {
    pub name: String,
    pub id: String,
    pub program: String,
    pub gpa: f64,
    pub gpa_trend: Trend,
}

#[derive(Debug, Clone, Serialize)]
pub struct StrengthSummary {
    pub subject: String,
    pub average: f64,
    pub count: usize,
}

/// The structured object handed to the narrative layer. This is the
/// only contract the analysis side honors toward presentation: top 3
/// strengths, first 5 completed course ids, top 5 recommendations.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryContext {
    pub student: StudentSummary,
    pub strengths: Vec<StrengthSummary>,
    pub completed_courses: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}
