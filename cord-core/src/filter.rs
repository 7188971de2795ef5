//! Year range selection for interactive exploration.
//!
//! Filtering only selects. It never re-validates or re-derives records, so
//! the cleaned set can be loaded once and re-filtered on every change of the
//! year control, with each call independent of the last.

use cord_types::RangeError;

use crate::record::ValidatedRecord;

/// Inclusive `[min, max]` span of publication years. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearRange {
    min: i32,
    max: i32,
}

impl YearRange {
    /// Creates a range.
    ///
    /// # Errors
    ///
    /// Returns [`RangeError::Inverted`] if `min > max`.
    pub const fn new(min: i32, max: i32) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    /// Earliest year in the range.
    #[inline]
    pub const fn min(self) -> i32 {
        self.min
    }

    /// Latest year in the range.
    #[inline]
    pub const fn max(self) -> i32 {
        self.max
    }

    /// Returns `true` if `min <= year <= max`.
    #[inline]
    pub const fn contains(self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }

    /// Intersects with `bounds`, or `None` if they do not overlap.
    pub fn clamp_to(self, bounds: YearRange) -> Option<YearRange> {
        let min = self.min.max(bounds.min);
        let max = self.max.min(bounds.max);
        YearRange::new(min, max).ok()
    }
}

/// Resolves a year selection with optional bounds against the data's span.
///
/// A bound left out is open. The result is the overlap of the selection with
/// `bounds`, or `None` when there is no data or the selection lies entirely
/// outside it.
///
/// # Errors
///
/// Returns [`RangeError::Inverted`] only if both bounds are given and
/// `min > max`.
pub fn resolve_selection(
    min: Option<i32>,
    max: Option<i32>,
    bounds: Option<YearRange>,
) -> Result<Option<YearRange>, RangeError> {
    let requested = YearRange::new(min.unwrap_or(i32::MIN), max.unwrap_or(i32::MAX))?;
    Ok(bounds.and_then(|b| requested.clamp_to(b)))
}

/// Smallest range covering every record's year, or `None` for an empty set.
pub fn year_bounds(records: &[ValidatedRecord]) -> Option<YearRange> {
    let mut years = records.iter().map(ValidatedRecord::year);
    let first = years.next()?;
    let (min, max) = years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y)));
    Some(YearRange { min, max })
}

/// Records with `min_year <= year <= max_year`, in input order.
///
/// # Errors
///
/// Returns [`RangeError::Inverted`] if `min_year > max_year`.
pub fn filter_by_year_range(
    records: &[ValidatedRecord],
    min_year: i32,
    max_year: i32,
) -> Result<Vec<ValidatedRecord>, RangeError> {
    let range = YearRange::new(min_year, max_year)?;
    Ok(filter_in_range(records, range).into_iter().cloned().collect())
}

/// Borrowing form of [`filter_by_year_range`] over a prevalidated range.
pub fn filter_in_range(records: &[ValidatedRecord], range: YearRange) -> Vec<&ValidatedRecord> {
    let selected: Vec<_> = records.iter().filter(|r| range.contains(r.year())).collect();
    tracing::debug!(
        min = range.min,
        max = range.max,
        selected = selected.len(),
        of = records.len(),
        "filtered by year"
    );
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rec(title: &str, year: i32) -> ValidatedRecord {
        ValidatedRecord::new(
            title,
            "",
            NaiveDate::from_ymd_opt(year, 3, 1).unwrap(),
            None,
            None,
        )
        .unwrap()
    }

    fn sample() -> Vec<ValidatedRecord> {
        vec![rec("a", 2019), rec("b", 2020), rec("c", 2021), rec("d", 2020)]
    }

    fn titles(records: &[ValidatedRecord]) -> Vec<&str> {
        records.iter().map(|r| r.title()).collect()
    }

    #[test]
    fn inverted_range_errors() {
        assert_eq!(
            filter_by_year_range(&sample(), 2021, 2020),
            Err(RangeError::Inverted { min: 2021, max: 2020 })
        );
    }

    #[test]
    fn inverted_range_errors_on_empty_input() {
        assert!(filter_by_year_range(&[], 5, 4).is_err());
    }

    #[test]
    fn single_year_selects_exactly_that_year() {
        let out = filter_by_year_range(&sample(), 2020, 2020).unwrap();
        assert_eq!(titles(&out), ["b", "d"]);
        assert!(out.iter().all(|r| r.year() == 2020));
    }

    #[test]
    fn bounds_are_inclusive() {
        let out = filter_by_year_range(&sample(), 2019, 2020).unwrap();
        assert_eq!(titles(&out), ["a", "b", "d"]);
    }

    #[test]
    fn range_outside_data_is_empty() {
        assert!(filter_by_year_range(&sample(), 1990, 2000).unwrap().is_empty());
    }

    #[test]
    fn filtering_keeps_enrichment() {
        let records: Vec<_> = sample().into_iter().map(ValidatedRecord::enriched).collect();
        let out = filter_by_year_range(&records, 2021, 2021).unwrap();
        assert_eq!(out[0].title_word_count(), 1);
    }

    #[test]
    fn borrowing_filter_matches_owned() {
        let records = sample();
        let range = YearRange::new(2020, 2021).unwrap();
        let borrowed: Vec<_> = filter_in_range(&records, range).into_iter().cloned().collect();
        assert_eq!(borrowed, filter_by_year_range(&records, 2020, 2021).unwrap());
    }

    #[test]
    fn bounds_of_records() {
        assert_eq!(year_bounds(&sample()), YearRange::new(2019, 2021).ok());
        assert_eq!(year_bounds(&[]), None);
    }

    #[test]
    fn clamp_to_bounds() {
        let bounds = YearRange::new(2019, 2021).unwrap();
        assert_eq!(
            YearRange::new(2000, 2020).unwrap().clamp_to(bounds),
            YearRange::new(2019, 2020).ok()
        );
        assert_eq!(YearRange::new(2030, 2040).unwrap().clamp_to(bounds), None);
    }

    #[test]
    fn open_bound_is_clamped_to_data() {
        let bounds = year_bounds(&sample());
        assert_eq!(
            resolve_selection(Some(2020), None, bounds),
            Ok(YearRange::new(2020, 2021).ok())
        );
        assert_eq!(
            resolve_selection(None, Some(2019), bounds),
            Ok(YearRange::new(2019, 2019).ok())
        );
        assert_eq!(resolve_selection(Some(1900), Some(2100), bounds), Ok(bounds));
    }

    #[test]
    fn single_bound_outside_data_selects_nothing() {
        let bounds = year_bounds(&sample());
        assert_eq!(resolve_selection(Some(2030), None, bounds), Ok(None));
        assert_eq!(resolve_selection(None, Some(2000), bounds), Ok(None));
        assert_eq!(resolve_selection(Some(2030), Some(2040), bounds), Ok(None));
    }

    #[test]
    fn selection_inverted_only_when_both_bounds_given() {
        let bounds = year_bounds(&sample());
        assert_eq!(
            resolve_selection(Some(2021), Some(2020), bounds),
            Err(RangeError::Inverted { min: 2021, max: 2020 })
        );
        assert!(resolve_selection(Some(5), Some(4), None).is_err());
        assert_eq!(resolve_selection(Some(2020), None, None), Ok(None));
    }

    #[test]
    fn contains_is_inclusive() {
        let r = YearRange::new(2020, 2021).unwrap();
        assert!(r.contains(2020) && r.contains(2021));
        assert!(!r.contains(2019) && !r.contains(2022));
    }
}
