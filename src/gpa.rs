use crate::models::{GpaOutlook, TermRecord, Trend};

/// Movement smaller than this between the last two valid terms counts
/// as stable.
const TREND_BAND: f64 = 0.2;

/// Derives cumulative standing and trend from term history.
///
/// A term GPA of exactly zero marks a term with nothing posted, not an
/// earned 0.0; those terms are excluded from every computation here.
/// The most recent valid term's GPA is taken as the authoritative
/// cumulative GPA; when no valid term exists the enrollment table's
/// cumulative column is the fallback, and 0.0 after that.
pub fn resolve_gpa(terms: &[TermRecord], fallback_cum_gpa: Option<&str>) -> GpaOutlook {
    let mut valid: Vec<&TermRecord> = terms.iter().filter(|t| t.term_gpa > 0.0).collect();
    valid.sort_by_key(|t| t.strm);

    let cumulative = match valid.last() {
        Some(latest) => latest.term_gpa,
        None => fallback_cum_gpa
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .unwrap_or(0.0),
    };

    let (trend, avg_term_gpa) = match valid.len() {
        0 => (Trend::Unavailable, 0.0),
        1 => (Trend::Insufficient, valid[0].term_gpa),
        n => {
            let latest = valid[n - 1].term_gpa;
            let previous = valid[n - 2].term_gpa;
            let trend = if latest > previous + TREND_BAND {
                Trend::Improving
            } else if latest < previous - TREND_BAND {
                Trend::Declining
            } else {
                Trend::Stable
            };
            let avg = valid.iter().map(|t| t.term_gpa).sum::<f64>() / n as f64;
            (trend, avg)
        }
    };

    GpaOutlook {
        cumulative,
        trend,
        avg_term_gpa,
    }
}
