// src/grading.rs
use serde::{Deserialize, Serialize};

/// The six readability metrics reported by the summarization API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Coleman-Liau index
    #[serde(rename = "CLI")]
    Cli,
    /// Flesch reading ease
    #[serde(rename = "FRE")]
    Fre,
    /// Gunning fog index
    #[serde(rename = "GFI")]
    Gfi,
    #[serde(rename = "SMOG")]
    Smog,
    /// Flesch-Kincaid grade level
    #[serde(rename = "FKGL")]
    Fkgl,
    /// Dale-Chall readability score
    #[serde(rename = "DCRS")]
    Dcrs,
}

impl Metric {
    /// Row order of the scores table.
    pub const ROWS: [Metric; 6] = [
        Metric::Cli,
        Metric::Fre,
        Metric::Gfi,
        Metric::Smog,
        Metric::Fkgl,
        Metric::Dcrs,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Metric::Cli => "CLI",
            Metric::Fre => "FRE",
            Metric::Gfi => "GFI",
            Metric::Smog => "SMOG",
            Metric::Fkgl => "FKGL",
            Metric::Dcrs => "DCRS",
        }
    }

    /// Grade band for a score of this metric. FRE runs on an inverted scale.
    pub fn grade_level(self, score: f64) -> &'static str {
        match self {
            Metric::Fre => fre_grade_level(score),
            _ => score_grade_level(score),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Grade band for the grade-scaled metrics (CLI, GFI, SMOG, FKGL, DCRS).
pub fn score_grade_level(score: f64) -> &'static str {
    if score < 1.0 {
        "Pre-kindergarten - 1st grade"
    } else if score < 5.0 {
        "1st grade - 5th grade"
    } else if score < 8.0 {
        "5th grade - 8th grade"
    } else if score < 11.0 {
        "8th grade - 11th grade"
    } else {
        "11th grade - college"
    }
}

/// Grade band for Flesch reading ease, where a higher score reads easier.
pub fn fre_grade_level(score: f64) -> &'static str {
    if score < 30.0 {
        "Graduate level"
    } else if score < 50.0 {
        "University"
    } else if score < 60.0 {
        "College"
    } else if score < 70.0 {
        "High school"
    } else if score < 90.0 {
        "6th–8th grade"
    } else {
        "5th grade"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERIC_BANDS: [&str; 5] = [
        "Pre-kindergarten - 1st grade",
        "1st grade - 5th grade",
        "5th grade - 8th grade",
        "8th grade - 11th grade",
        "11th grade - college",
    ];

    // Ordered from hardest to easiest text.
    const FRE_BANDS: [&str; 6] = [
        "Graduate level",
        "University",
        "College",
        "High school",
        "6th–8th grade",
        "5th grade",
    ];

    fn band_index(bands: &[&str], label: &str) -> usize {
        bands.iter().position(|b| *b == label).unwrap()
    }

    #[test]
    fn generic_band_edges() {
        assert_eq!(score_grade_level(0.999), GENERIC_BANDS[0]);
        assert_eq!(score_grade_level(1.0), GENERIC_BANDS[1]);
        assert_eq!(score_grade_level(4.999), GENERIC_BANDS[1]);
        assert_eq!(score_grade_level(5.0), GENERIC_BANDS[2]);
        assert_eq!(score_grade_level(8.0), GENERIC_BANDS[3]);
        assert_eq!(score_grade_level(10.999), GENERIC_BANDS[3]);
        assert_eq!(score_grade_level(11.0), GENERIC_BANDS[4]);
        assert_eq!(score_grade_level(-3.0), GENERIC_BANDS[0]);
    }

    #[test]
    fn fre_band_edges() {
        assert_eq!(fre_grade_level(29.99), "Graduate level");
        assert_eq!(fre_grade_level(30.0), "University");
        assert_eq!(fre_grade_level(50.0), "College");
        assert_eq!(fre_grade_level(60.0), "High school");
        assert_eq!(fre_grade_level(70.0), "6th–8th grade");
        assert_eq!(fre_grade_level(89.99), "6th–8th grade");
        assert_eq!(fre_grade_level(90.0), "5th grade");
        assert_eq!(fre_grade_level(121.2), "5th grade");
    }

    #[test]
    fn generic_bands_never_go_down_as_score_rises() {
        let mut prev = 0;
        for step in -20..=300 {
            let score = step as f64 * 0.05;
            let idx = band_index(&GENERIC_BANDS, score_grade_level(score));
            assert!(idx >= prev, "score {} dropped to band {}", score, idx);
            prev = idx;
        }
    }

    #[test]
    fn fre_grade_never_rises_as_score_rises() {
        let mut prev = 0;
        for step in -20..=1100 {
            let score = step as f64 * 0.1;
            let idx = band_index(&FRE_BANDS, fre_grade_level(score));
            assert!(idx >= prev, "score {} moved to a harder band", score);
            prev = idx;
        }
    }

    #[test]
    fn only_fre_uses_the_inverted_table() {
        assert_eq!(Metric::Fre.grade_level(80.0), "6th–8th grade");
        for metric in Metric::ROWS.iter().filter(|m| **m != Metric::Fre) {
            assert_eq!(metric.grade_level(9.1), "8th grade - 11th grade");
        }
    }

    #[test]
    fn row_order_is_fixed() {
        let names: Vec<_> = Metric::ROWS.iter().map(|m| m.name()).collect();
        assert_eq!(names, ["CLI", "FRE", "GFI", "SMOG", "FKGL", "DCRS"]);
    }
}
