//! Rating-card presentation math.
//!
//! Everything here is a pure computation over a score: the color bucket, the
//! five-segment score bar, star-asset bucketing for Yelp, and the small text
//! labels. Terminal rendering lives in the binary; this module only decides
//! what to draw.

use crate::place::Place;
use crate::providers::ProviderInfo;

/// Cue points of the five score-bar segments, one per 20%.
pub const BAR_CUE_POINTS: [f64; 5] = [0.0, 20.0, 40.0, 60.0, 80.0];

/// Width in percent covered by one bar segment.
const SEGMENT_SPAN: f64 = 20.0;

/// Color bucket for a score percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreColor {
    Red,
    Orange,
    Yellow,
    Green,
    Gray,
}

/// Fill state of one score-bar segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentFill {
    Empty,
    Full,
    /// Partially filled, with the filled fraction in `[0, 1)`
    Partial(f64),
}

/// An RGB color parsed from a hex code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Color bucket for a score expressed as a percentage of the provider scale.
pub fn score_color(percentage: f64) -> ScoreColor {
    match percentage {
        p if p < 0.0 => ScoreColor::Gray,
        p if p < 40.0 => ScoreColor::Red,
        p if p < 60.0 => ScoreColor::Orange,
        p if p < 80.0 => ScoreColor::Yellow,
        _ => ScoreColor::Green,
    }
}

/// A place's score as a percentage of the provider's scale, when it has one.
pub fn score_percentage(place: &Place, info: &ProviderInfo) -> Option<f64> {
    let score = place.score?;
    if info.total_score == 0 {
        return None;
    }
    Some(score / f64::from(info.total_score) * 100.0)
}

/// Fill states for the five bar segments at a given percentage.
pub fn bar_segments(percentage: f64) -> [SegmentFill; 5] {
    BAR_CUE_POINTS.map(|cue| {
        if cue > percentage {
            SegmentFill::Empty
        } else if cue + SEGMENT_SPAN <= percentage {
            SegmentFill::Full
        } else {
            SegmentFill::Partial((percentage - cue) / SEGMENT_SPAN)
        }
    })
}

/// Advance an animated bar one tick toward its target percentage.
pub fn advance_bar(visible: f64, actual: f64) -> f64 {
    (visible + 1.0).min(actual)
}

/// Star asset name for a Yelp score, bucketed to half stars.
pub fn yelp_star_asset(score: f64) -> &'static str {
    match score {
        s if s >= 5.0 => "regular_5",
        s if s >= 4.5 => "regular_4_half",
        s if s >= 4.0 => "regular_4",
        s if s >= 3.5 => "regular_3_half",
        s if s >= 3.0 => "regular_3",
        s if s >= 2.5 => "regular_2_half",
        s if s >= 2.0 => "regular_2",
        s if s >= 1.5 => "regular_1_half",
        _ => "regular_1",
    }
}

/// Dollar-sign label for a price tier.
pub fn price_label(tier: u8) -> String {
    "$".repeat(tier as usize)
}

/// Attribution line under a score, e.g. "by 231 users on".
pub fn reviewer_label(num_of_scores: u64) -> String {
    format!(
        "by {} user{} on",
        num_of_scores,
        if num_of_scores > 1 { "s" } else { "" }
    )
}

/// Parse a hex color code like "#AF0606" (leading '#' and whitespace allowed).
pub fn color_from_hex(code: &str) -> Rgb {
    let hex = code.trim().trim_start_matches('#');
    let value = u32::from_str_radix(hex, 16).unwrap_or(0);
    Rgb {
        r: ((value >> 16) & 0xFF) as u8,
        g: ((value >> 8) & 0xFF) as u8,
        b: (value & 0xFF) as u8,
    }
}

/// Approximate distance label, e.g. "~120 m" or "~1.2 km".
pub fn formatted_distance(meters: Option<f64>) -> Option<String> {
    let meters = meters?;
    if meters < 1000.0 {
        Some(format!("~{} m", meters.round() as i64))
    } else {
        Some(format!("~{:.1} km", meters / 1000.0))
    }
}
