//! Date-window filtering
//!
//! Providers frequently omit or malform publish dates, so exclusion
//! requires positive evidence: a hit is dropped only when its date
//! parses and falls strictly outside the inclusive window. Unknown
//! dates are retained (recall over precision).

use chrono::NaiveDate;

use crate::domain::entities::RawHit;
use crate::domain::value_objects::parse_publish_date;

/// Filter hits to the inclusive `[min, max]` publish-date window,
/// preserving input order. Hits with no parseable date are retained.
pub fn filter_by_window(
    hits: Vec<RawHit>,
    min: Option<NaiveDate>,
    max: Option<NaiveDate>,
) -> Vec<RawHit> {
    if min.is_none() && max.is_none() {
        return hits;
    }

    hits.into_iter()
        .filter(|hit| {
            let parsed = hit.date.as_deref().and_then(parse_publish_date);
            match parsed {
                None => true,
                Some(date) => {
                    if let Some(min) = min {
                        if date < min {
                            tracing::debug!(url = %hit.url, %date, %min, "hit before window, dropped");
                            return false;
                        }
                    }
                    if let Some(max) = max {
                        if date > max {
                            tracing::debug!(url = %hit.url, %date, %max, "hit after window, dropped");
                            return false;
                        }
                    }
                    true
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hit(url: &str, raw_date: Option<&str>) -> RawHit {
        RawHit {
            date: raw_date.map(String::from),
            ..RawHit::new("post", url)
        }
    }

    #[test]
    fn no_window_passes_everything_through() {
        let hits = vec![hit("a", Some("2020-01-01")), hit("b", None)];
        let out = filter_by_window(hits.clone(), None, None);
        assert_eq!(out, hits);
    }

    #[test]
    fn drops_only_dates_strictly_outside_the_window() {
        let hits = vec![
            hit("before", Some("2023-12-31")),
            hit("on-min", Some("2024-01-01")),
            hit("inside", Some("2024-02-15")),
            hit("on-max", Some("2024-03-31")),
            hit("after", Some("2024-04-01")),
        ];
        let out = filter_by_window(hits, Some(date(2024, 1, 1)), Some(date(2024, 3, 31)));
        let urls: Vec<_> = out.iter().map(|h| h.url.as_str()).collect();
        assert_eq!(urls, vec!["on-min", "inside", "on-max"]);
    }

    #[test]
    fn unparseable_date_is_retained() {
        // Exclusion requires positive evidence the hit is out of range.
        let hits = vec![hit("garbage", Some("not-a-date")), hit("absent", None)];
        let out = filter_by_window(hits, Some(date(2024, 1, 1)), Some(date(2024, 3, 31)));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn output_is_an_order_preserving_subsequence() {
        let hits = vec![
            hit("1", Some("2024-02-01")),
            hit("2", Some("2019-01-01")),
            hit("3", None),
            hit("4", Some("2024-03-01")),
            hit("5", Some("2030-01-01")),
        ];
        let out = filter_by_window(hits, Some(date(2024, 1, 1)), Some(date(2024, 12, 31)));
        let urls: Vec<_> = out.iter().map(|h| h.url.as_str()).collect();
        assert_eq!(urls, vec!["1", "3", "4"]);
    }

    #[test]
    fn min_only_window() {
        let hits = vec![hit("old", Some("2023-06-01")), hit("new", Some("2024-06-01"))];
        let out = filter_by_window(hits, Some(date(2024, 1, 1)), None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].url, "new");
    }

    #[test]
    fn max_only_window() {
        let hits = vec![hit("old", Some("2023-06-01")), hit("new", Some("2024-06-01"))];
        let out = filter_by_window(hits, None, Some(date(2024, 1, 1)));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].url, "old");
    }

    #[test]
    fn rfc3339_dates_from_semantic_provider_are_compared() {
        let hits = vec![hit("in", Some("2024-02-01T09:00:00Z"))];
        let out = filter_by_window(hits, Some(date(2024, 1, 1)), Some(date(2024, 3, 31)));
        assert_eq!(out.len(), 1);
    }
}
