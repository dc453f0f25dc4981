// src/analytics.rs

//! Chart-ready aggregations over fetched listings.
//!
//! All functions here are pure transformations of already-fetched data, so
//! they are unit-testable without a network or view layer. Time-dependent
//! functions take an explicit end date; the convenience wrappers pin it to
//! today.

use std::collections::HashMap;

use chrono::{Days, Local, NaiveDate};

use crate::models::{ExperienceLevel, JobListing, JobType};

/// One calendar-day bucket of the posting timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Salary aggregation result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryStats {
    /// Arithmetic mean of qualifying salaries, 0.0 when none qualify
    pub average: f64,
    /// How many listings carried a usable salary
    pub sample_count: usize,
}

/// Count listings per employment type, in first-seen order.
///
/// Listings without a type count as full time.
pub fn count_by_type(jobs: &[JobListing]) -> Vec<(JobType, usize)> {
    tally(jobs, JobListing::job_type)
}

/// Count listings per experience level, in first-seen order.
///
/// Listings without a level count as mid.
pub fn count_by_experience(jobs: &[JobListing]) -> Vec<(ExperienceLevel, usize)> {
    tally(jobs, JobListing::experience)
}

fn tally<K, F>(jobs: &[JobListing], key: F) -> Vec<(K, usize)>
where
    K: PartialEq,
    F: Fn(&JobListing) -> K,
{
    let mut counts: Vec<(K, usize)> = Vec::new();
    for job in jobs {
        let group = key(job);
        match counts.iter_mut().find(|(k, _)| *k == group) {
            Some((_, count)) => *count += 1,
            None => counts.push((group, 1)),
        }
    }
    counts
}

/// Postings per day over the trailing window ending today, inclusive.
pub fn posting_timeline(jobs: &[JobListing], window_days: usize) -> Vec<DayCount> {
    posting_timeline_ending(jobs, window_days, Local::now().date_naive())
}

/// Postings per day over the trailing window ending at `end`, inclusive.
///
/// Always returns exactly `window_days` buckets, oldest first, each
/// initialized to zero. A listing lands in a bucket only when its
/// `posted_date` string equals the bucket's ISO date; dates outside the
/// window (and unparseable ones) are silently dropped.
pub fn posting_timeline_ending(
    jobs: &[JobListing],
    window_days: usize,
    end: NaiveDate,
) -> Vec<DayCount> {
    let mut buckets: Vec<DayCount> = (0..window_days)
        .map(|offset| {
            let back = (window_days - 1 - offset) as u64;
            DayCount {
                date: end - Days::new(back),
                count: 0,
            }
        })
        .collect();

    let index: HashMap<String, usize> = buckets
        .iter()
        .enumerate()
        .map(|(i, bucket)| (bucket.date.format("%Y-%m-%d").to_string(), i))
        .collect();

    for job in jobs {
        let Some(date) = job.posted_date.as_deref() else {
            continue;
        };
        if let Some(&i) = index.get(date) {
            buckets[i].count += 1;
        }
    }

    buckets
}

/// Mean of the lower salary bounds across listings.
///
/// String salaries have thousands separators stripped before parsing;
/// missing, non-numeric, and non-positive values are dropped without a
/// user-visible warning.
pub fn average_salary(jobs: &[JobListing]) -> SalaryStats {
    let samples: Vec<f64> = jobs
        .iter()
        .filter_map(JobListing::salary_min)
        .filter(|amount| *amount > 0.0)
        .collect();

    let dropped = jobs.len() - samples.len();
    if dropped > 0 {
        log::debug!("average_salary: {dropped} listings without a usable salary");
    }

    if samples.is_empty() {
        return SalaryStats {
            average: 0.0,
            sample_count: 0,
        };
    }

    let sum: f64 = samples.iter().sum();
    SalaryStats {
        average: sum / samples.len() as f64,
        sample_count: samples.len(),
    }
}

/// First `n` items by descending count. The sort is stable, so equal counts
/// preserve their input order.
pub fn top_by_count<T, F>(items: &[T], n: usize, count: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> u64,
{
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| count(b).cmp(&count(a)));
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn job(value: serde_json::Value) -> JobListing {
        serde_json::from_value(value).unwrap()
    }

    fn jobs(values: Vec<serde_json::Value>) -> Vec<JobListing> {
        values.into_iter().map(job).collect()
    }

    #[test]
    fn count_by_type_first_seen_order_with_default() {
        let listings = jobs(vec![
            json!({"id": 1, "title": "a", "job_type": "contract"}),
            json!({"id": 2, "title": "b"}),
            json!({"id": 3, "title": "c", "job_type": "contract"}),
        ]);

        assert_eq!(
            count_by_type(&listings),
            vec![(JobType::Contract, 2), (JobType::FullTime, 1)]
        );
    }

    #[test]
    fn count_by_experience_defaults_to_mid() {
        let listings = jobs(vec![
            json!({"id": 1, "title": "a"}),
            json!({"id": 2, "title": "b", "experience_level": "lead"}),
        ]);

        assert_eq!(
            count_by_experience(&listings),
            vec![(ExperienceLevel::Mid, 1), (ExperienceLevel::Lead, 1)]
        );
    }

    #[test]
    fn average_salary_mixed_inputs() {
        let listings = jobs(vec![
            json!({"id": 1, "title": "a", "salary_min": "5,000"}),
            json!({"id": 2, "title": "b", "salary_min": 3000}),
            json!({"id": 3, "title": "c", "salary_min": null}),
        ]);

        let stats = average_salary(&listings);
        assert_eq!(stats.average, 4000.0);
        assert_eq!(stats.sample_count, 2);
    }

    #[test]
    fn average_salary_drops_non_positive_and_non_numeric() {
        let listings = jobs(vec![
            json!({"id": 1, "title": "a", "salary_min": 0}),
            json!({"id": 2, "title": "b", "salary_min": -100}),
            json!({"id": 3, "title": "c", "salary_min": "competitive"}),
        ]);

        let stats = average_salary(&listings);
        assert_eq!(stats.average, 0.0);
        assert_eq!(stats.sample_count, 0);
    }

    #[test]
    fn timeline_has_exactly_window_buckets() {
        let end = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();

        let empty = posting_timeline_ending(&[], 30, end);
        assert_eq!(empty.len(), 30);
        assert!(empty.iter().all(|bucket| bucket.count == 0));
        assert_eq!(empty.last().unwrap().date, end);
        assert_eq!(
            empty.first().unwrap().date,
            NaiveDate::from_ymd_opt(2026, 7, 8).unwrap()
        );
    }

    #[test]
    fn timeline_counts_in_window_and_drops_outside() {
        let end = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let listings = jobs(vec![
            json!({"id": 1, "title": "a", "posted_date": "2026-08-06"}), // last bucket
            json!({"id": 2, "title": "b", "posted_date": "2026-08-06"}),
            json!({"id": 3, "title": "c", "posted_date": "2026-07-08"}), // first bucket
            json!({"id": 4, "title": "d", "posted_date": "2026-07-07"}), // before window
            json!({"id": 5, "title": "e", "posted_date": "2026-08-07"}), // after window
            json!({"id": 6, "title": "f", "posted_date": "not a date"}),
            json!({"id": 7, "title": "g"}),
        ]);

        let timeline = posting_timeline_ending(&listings, 30, end);
        assert_eq!(timeline.len(), 30);
        assert_eq!(timeline.last().unwrap().count, 2);
        assert_eq!(timeline.first().unwrap().count, 1);
        let counted: usize = timeline.iter().map(|bucket| bucket.count).sum();
        assert_eq!(counted, 3);
    }

    #[test]
    fn top_by_count_is_stable_on_ties() {
        let items = vec![("a", 3u64), ("b", 5), ("c", 3), ("d", 1)];
        let top = top_by_count(&items, 3, |(_, count)| *count);
        assert_eq!(top, vec![("b", 5), ("a", 3), ("c", 3)]);
    }

    #[test]
    fn top_by_count_truncates_to_n() {
        let items = vec![("a", 1u64), ("b", 2)];
        assert_eq!(top_by_count(&items, 10, |(_, c)| *c).len(), 2);
        assert_eq!(top_by_count(&items, 1, |(_, c)| *c), vec![("b", 2)]);
    }
}
