use std::fmt::Write;

use crate::models::{AuditReport, MetricScore, StudentRecord, Tier};
use crate::rank;

const KEY_STRENGTHS: [&str; 5] = [
    "Strong technical foundation",
    "Excellent problem-solving skills",
    "Consistent academic performance",
    "Good project implementation",
    "Leadership qualities",
];

const AREAS_FOR_IMPROVEMENT: [&str; 4] = [
    "Communication skills enhancement",
    "Industry exposure expansion",
    "Advanced technology adoption",
    "Team collaboration improvement",
];

// metric, high/mid/low constants, summary
const METRICS: [(&str, i32, i32, i32, &str); 4] = [
    (
        "Technical Skills",
        92,
        78,
        65,
        "Strong grasp of core technical concepts and implementation",
    ),
    (
        "Problem Solving",
        88,
        75,
        62,
        "Effective analytical thinking and solution development",
    ),
    (
        "Project Quality",
        90,
        77,
        64,
        "Well-executed projects with good documentation",
    ),
    (
        "Academic Performance",
        85,
        72,
        58,
        "Consistent academic excellence across subjects",
    ),
];

/// Tier that picks the metric constants. 85.0 lands on Mid and 70.0 on
/// Low; `rank::badge_tier` keeps 70.0 on Mid instead. The boundaries
/// intentionally stay unaligned.
pub fn metric_tier(score: f64) -> Tier {
    if score > 85.0 {
        Tier::High
    } else if score > 70.0 {
        Tier::Mid
    } else {
        Tier::Low
    }
}

// Pure over the record: the same input always yields the same report.
pub fn audit_report(student: &StudentRecord) -> AuditReport {
    let overview = format!(
        "{}'s performance demonstrates strong technical capabilities with excellent \
         problem-solving skills. Their JRI score of {}% reflects consistent academic \
         and project excellence.",
        student.name, student.jri_score
    );

    let tier = metric_tier(student.jri_score);
    let breakdown = METRICS
        .iter()
        .map(|&(metric, high, mid, low, summary)| MetricScore {
            metric: metric.to_string(),
            score: match tier {
                Tier::High => high,
                Tier::Mid => mid,
                Tier::Low => low,
            },
            summary: summary.to_string(),
        })
        .collect();

    AuditReport {
        overview,
        key_strengths: KEY_STRENGTHS.iter().map(|s| s.to_string()).collect(),
        areas_for_improvement: AREAS_FOR_IMPROVEMENT
            .iter()
            .map(|s| s.to_string())
            .collect(),
        breakdown,
    }
}

pub fn render_markdown(student: &StudentRecord, report: &AuditReport) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "# Placement Audit Report");
    let _ = writeln!(
        output,
        "Generated for {} ({}, {})",
        student.name, student.department, student.year
    );
    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "JRI score: {} ({})",
        student.jri_score,
        rank::badge_tier(student.jri_score).label()
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Overview");
    let _ = writeln!(output, "{}", report.overview);

    let _ = writeln!(output);
    let _ = writeln!(output, "## Key Strengths");
    for strength in report.key_strengths.iter() {
        let _ = writeln!(output, "- {strength}");
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Areas for Improvement");
    for area in report.areas_for_improvement.iter() {
        let _ = writeln!(output, "- {area}");
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Detailed Breakdown");
    for metric in report.breakdown.iter() {
        let _ = writeln!(
            output,
            "- {} ({}): {}/100. {}",
            metric.metric,
            rank::badge_tier(f64::from(metric.score)).label(),
            metric.score,
            metric.summary
        );
    }

    output
}
