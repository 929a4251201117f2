// Analysis service response types.
// Defines structs for deserializing /api/analyze responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Categories produced by the analysis service, in display order.
pub const KNOWN_CATEGORIES: [&str; 5] = ["languages", "frameworks", "tools", "databases", "other"];

/// Successful analysis response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Match percentage, 0-100.
    pub score: f64,
    #[serde(default)]
    pub matched: Vec<String>,
    #[serde(default)]
    pub missing: Vec<String>,
    #[serde(default)]
    pub matched_categories: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub missing_categories: BTreeMap<String, Vec<String>>,
}

impl AnalysisResult {
    pub fn keywords(&self, kind: KeywordKind) -> &[String] {
        match kind {
            KeywordKind::Matched => &self.matched,
            KeywordKind::Missing => &self.missing,
        }
    }

    pub fn categories(&self, kind: KeywordKind) -> &BTreeMap<String, Vec<String>> {
        match kind {
            KeywordKind::Matched => &self.matched_categories,
            KeywordKind::Missing => &self.missing_categories,
        }
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }

    /// Score clamped to 0-100 for progress bars.
    pub fn ratio(&self) -> f64 {
        if self.score.is_nan() {
            0.0
        } else {
            self.score.clamp(0.0, 100.0) / 100.0
        }
    }
}

/// Which keyword section a view refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordKind {
    Matched,
    Missing,
}

impl KeywordKind {
    pub fn title(&self) -> &'static str {
        match self {
            KeywordKind::Matched => "Matched Skills",
            KeywordKind::Missing => "Missing Keywords",
        }
    }
}

/// Qualitative label for a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Strong,
    Good,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 65.0 {
            ScoreBand::Strong
        } else if score >= 50.0 {
            ScoreBand::Good
        } else if score >= 35.0 {
            ScoreBand::Moderate
        } else {
            ScoreBand::Weak
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Strong => "Strong match",
            ScoreBand::Good => "Good match",
            ScoreBand::Moderate => "Moderate match",
            ScoreBand::Weak => "Weak match",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(70.0).label(), "Strong match");
        assert_eq!(ScoreBand::from_score(65.0), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(64.9), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(50.0), ScoreBand::Good);
        assert_eq!(ScoreBand::from_score(40.0).label(), "Moderate match");
        assert_eq!(ScoreBand::from_score(35.0), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(12.5).label(), "Weak match");
    }

    #[test]
    fn test_deserialize_wire_format() {
        let json = r#"{
            "score": 72.5,
            "matched": ["python", "sql"],
            "missing": ["kubernetes"],
            "matchedCategories": {"languages": ["python"], "databases": ["sql"]},
            "missingCategories": {"tools": ["kubernetes"]}
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.score, 72.5);
        assert_eq!(result.keywords(KeywordKind::Matched), ["python", "sql"]);
        assert_eq!(
            result.categories(KeywordKind::Missing)["tools"],
            vec!["kubernetes".to_string()]
        );
        assert_eq!(result.band(), ScoreBand::Strong);
    }

    #[test]
    fn test_missing_category_maps_default_to_empty() {
        let result: AnalysisResult =
            serde_json::from_str(r#"{"score": 10, "matched": [], "missing": []}"#).unwrap();
        assert!(result.matched_categories.is_empty());
        assert!(result.missing_categories.is_empty());
    }

    #[test]
    fn test_ratio_is_clamped() {
        let mut result: AnalysisResult = serde_json::from_str(r#"{"score": 120}"#).unwrap();
        assert_eq!(result.ratio(), 1.0);
        result.score = -5.0;
        assert_eq!(result.ratio(), 0.0);
        result.score = 42.0;
        assert!((result.ratio() - 0.42).abs() < f64::EPSILON);
    }
}
