//! One-call bundle of every aggregation, for reports.

use core::fmt;

use cord_types::{AnalysisConfig, GroupCount};
use serde::Serialize;

use crate::aggregate::groups::{count_by_year, top_journals, top_sources, top_title_tokens};
use crate::analyzer::StopwordSet;
use crate::record::ValidatedRecord;

/// Aggregations over one record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusSummary {
    /// Number of records aggregated.
    pub records: usize,
    /// Mean `title_word_count`, 0.0 for an empty set.
    pub mean_title_words: f64,
    /// Mean `abstract_word_count`, 0.0 for an empty set.
    pub mean_abstract_words: f64,
    /// Records per publication year, ascending.
    pub by_year: GroupCount<i32>,
    /// Most frequent journals, capped at `top_n`.
    pub top_journals: GroupCount<String>,
    /// Most frequent sources, capped at `top_n`.
    pub top_sources: GroupCount<String>,
    /// Most frequent non-stopword title tokens, capped at `title_top_n`.
    pub top_title_words: GroupCount<String>,
}

impl CorpusSummary {
    /// Computes all aggregations. `records` should already be enriched.
    pub fn compute(records: &[ValidatedRecord], config: &AnalysisConfig) -> Self {
        let stopwords = StopwordSet::from_config(config);
        Self::compute_with(records, config, &stopwords)
    }

    /// Like [`CorpusSummary::compute`] with a prebuilt stopword set.
    pub fn compute_with(
        records: &[ValidatedRecord],
        config: &AnalysisConfig,
        stopwords: &StopwordSet,
    ) -> Self {
        Self {
            records: records.len(),
            mean_title_words: mean(records, ValidatedRecord::title_word_count),
            mean_abstract_words: mean(records, ValidatedRecord::abstract_word_count),
            by_year: count_by_year(records),
            top_journals: top_journals(records, config.top_n),
            top_sources: top_sources(records, config.top_n),
            top_title_words: top_title_tokens(records, config.title_top_n, stopwords),
        }
    }
}

fn mean(records: &[ValidatedRecord], f: fn(&ValidatedRecord) -> usize) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records.iter().map(f).sum::<usize>() as f64 / records.len() as f64
}

impl fmt::Display for CorpusSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Records             : {}", self.records)?;
        writeln!(f, "Mean title words    : {:.2}", self.mean_title_words)?;
        writeln!(f, "Mean abstract words : {:.2}", self.mean_abstract_words)?;
        writeln!(f, "\n-- Papers per year --")?;
        write!(f, "{}", self.by_year)?;
        writeln!(f, "\n-- Top journals --")?;
        write!(f, "{}", self.top_journals)?;
        writeln!(f, "\n-- Top sources --")?;
        write!(f, "{}", self.top_sources)?;
        writeln!(f, "\n-- Most common title words --")?;
        write!(f, "{}", self.top_title_words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rec(title: &str, abstract_text: &str, year: i32) -> ValidatedRecord {
        ValidatedRecord::new(
            title,
            abstract_text,
            NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
            Some("J".into()),
            Some("S".into()),
        )
        .unwrap()
        .enriched()
    }

    #[test]
    fn empty_summary() {
        let s = CorpusSummary::compute(&[], &AnalysisConfig::default());
        assert_eq!(s.records, 0);
        assert_eq!(s.mean_title_words, 0.0);
        assert!(s.by_year.is_empty());
        assert!(s.top_title_words.is_empty());
    }

    #[test]
    fn summary_uses_config_caps() {
        let records = vec![
            rec("alpha beta gamma", "one two", 2020),
            rec("alpha delta", "", 2021),
        ];
        let config = AnalysisConfig {
            title_top_n: 1,
            ..AnalysisConfig::default()
        };
        let s = CorpusSummary::compute(&records, &config);
        assert_eq!(s.records, 2);
        assert_eq!(s.mean_title_words, 2.5);
        assert_eq!(s.mean_abstract_words, 1.0);
        assert_eq!(s.by_year.len(), 2);
        assert_eq!(s.top_journals.get(&"J".to_string()), Some(2));
        assert_eq!(s.top_title_words.into_vec(), vec![("alpha".to_string(), 2)]);
    }

    #[test]
    fn display_has_sections() {
        let s = CorpusSummary::compute(&[rec("a b", "", 2020)], &AnalysisConfig::default());
        let text = s.to_string();
        assert!(text.contains("Papers per year"));
        assert!(text.contains("Most common title words"));
    }
}
