use contracts::domain::a104_review::aggregate::Review;
use contracts::enums::delivery_speed::DeliverySpeed;
use contracts::projections::p910_sales_dataset::dto::SalesRecord;
use contracts::shared::date_utils::whole_days_between;
use contracts::shared::metrics::DeliveryPerformance;
use std::collections::{BTreeMap, HashSet};

use super::aggregate::{inner_join, mean};
use super::dataset::{DeliveryEnrichment, SalesDataset};

/// Bucket a delivery duration: up to 3 days, 4 to 7 days, 8 days and more
pub fn categorize_delivery_speed(days: i64) -> DeliverySpeed {
    DeliverySpeed::from_days(days)
}

/// One reviewed delivery, unique per (order, days, score)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ReviewedDelivery<'a> {
    order_id: &'a str,
    delivery_days: i64,
    review_score: u8,
}

fn dedup<'a, I>(rows: I) -> Vec<ReviewedDelivery<'a>>
where
    I: IntoIterator<Item = ReviewedDelivery<'a>>,
{
    let mut seen = HashSet::new();
    rows.into_iter().filter(|row| seen.insert(*row)).collect()
}

/// Delivery and review attributes already attached to the records, one row
/// per review score
fn from_enriched(sales: &SalesDataset, year: i32) -> Vec<ReviewedDelivery<'_>> {
    dedup(sales.in_year(year).flat_map(|r| {
        let days = r.delivery_days;
        r.review_scores.iter().filter_map(move |&score| {
            Some(ReviewedDelivery {
                order_id: r.order_id.as_str(),
                delivery_days: days?,
                review_score: score,
            })
        })
    }))
}

/// Durations computed from timestamps, scores taken from the reviews table
fn from_raw<'a>(sales: &'a SalesDataset, reviews: &'a [Review], year: i32) -> Vec<ReviewedDelivery<'a>> {
    let delivered: Vec<(&SalesRecord, i64)> = sales
        .in_year(year)
        .filter_map(|r| {
            r.order_delivered_customer_date
                .map(|d| (r, whole_days_between(r.order_purchase_timestamp, d)))
        })
        .collect();

    let joined = inner_join(
        &delivered,
        reviews,
        |(r, _)| r.order_id.as_str(),
        |review| review.order_id.as_str(),
    );

    dedup(joined.into_iter().map(|((r, days), review)| ReviewedDelivery {
        order_id: r.order_id.as_str(),
        delivery_days: days,
        review_score: review.review_score,
    }))
}

/// Average delivery time, average review score and review score per
/// delivery-speed bucket for orders purchased in `year`.
///
/// Enriched datasets are read as-is and `reviews` is not consulted; raw
/// datasets derive durations from timestamps and inner-join `reviews`.
/// Orders without a delivery date or a review do not contribute.
pub fn calculate_delivery_performance(
    sales: &SalesDataset,
    reviews: &[Review],
    year: i32,
) -> DeliveryPerformance {
    let rows = match sales.enrichment() {
        DeliveryEnrichment::Enriched => from_enriched(sales, year),
        DeliveryEnrichment::Raw => from_raw(sales, reviews, year),
    };
    tracing::debug!(
        year,
        enrichment = ?sales.enrichment(),
        rows = rows.len(),
        "delivery performance input"
    );

    let avg_delivery_days = mean(rows.iter().map(|r| r.delivery_days as f64));
    let avg_review_score = mean(rows.iter().map(|r| f64::from(r.review_score)));

    let mut buckets: BTreeMap<DeliverySpeed, (f64, usize)> = BTreeMap::new();
    for row in &rows {
        let (sum, count) = buckets
            .entry(categorize_delivery_speed(row.delivery_days))
            .or_insert((0.0, 0));
        *sum += f64::from(row.review_score);
        *count += 1;
    }

    DeliveryPerformance {
        avg_delivery_days,
        avg_review_score,
        delivery_categories_performance: buckets
            .into_iter()
            .map(|(bucket, (sum, count))| (bucket, sum / count as f64))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metrics::test_support::{assert_close, at, item};

    #[test]
    fn test_categorize_delivery_speed_boundaries() {
        assert_eq!(categorize_delivery_speed(0).label(), "1-3 days");
        assert_eq!(categorize_delivery_speed(1).label(), "1-3 days");
        assert_eq!(categorize_delivery_speed(3).label(), "1-3 days");
        assert_eq!(categorize_delivery_speed(4).label(), "4-7 days");
        assert_eq!(categorize_delivery_speed(7).label(), "4-7 days");
        assert_eq!(categorize_delivery_speed(8).label(), "8+ days");
        assert_eq!(categorize_delivery_speed(45).label(), "8+ days");
    }

    #[test]
    fn test_categorize_covers_every_day_without_gaps() {
        let mut previous = categorize_delivery_speed(0);
        let mut transitions = 0;
        for days in 1..=60 {
            let bucket = categorize_delivery_speed(days);
            assert!(bucket >= previous);
            if bucket != previous {
                transitions += 1;
            }
            previous = bucket;
        }
        assert_eq!(transitions, 2);
    }

    fn enriched_sales() -> SalesDataset {
        SalesDataset::enriched(vec![
            // two line items of the same order count once
            item("o1", 1, "p1", 10.0, 2023, 1).delivered_at(at(2023, 1, 3)).with_review_score(5),
            item("o1", 2, "p2", 10.0, 2023, 1).delivered_at(at(2023, 1, 3)).with_review_score(5),
            item("o2", 1, "p1", 10.0, 2023, 2).delivered_at(at(2023, 2, 7)).with_review_score(4),
            item("o3", 1, "p1", 10.0, 2023, 3).delivered_at(at(2023, 3, 21)).with_review_score(1),
            // no review: dropped
            item("o4", 1, "p1", 10.0, 2023, 3).delivered_at(at(2023, 3, 2)),
            // other year
            item("o5", 1, "p1", 10.0, 2022, 3).delivered_at(at(2022, 3, 30)).with_review_score(2),
        ])
        .unwrap()
    }

    #[test]
    fn test_enriched_path() {
        let perf = calculate_delivery_performance(&enriched_sales(), &[], 2023);

        // o1: 2 days/5, o2: 6 days/4, o3: 20 days/1
        assert_close(perf.avg_delivery_days.unwrap(), 28.0 / 3.0);
        assert_close(perf.avg_review_score.unwrap(), 10.0 / 3.0);
        assert_eq!(perf.delivery_categories_performance.len(), 3);
        assert_close(perf.delivery_categories_performance[&DeliverySpeed::UpTo3Days], 5.0);
        assert_close(perf.delivery_categories_performance[&DeliverySpeed::From4To7Days], 4.0);
        assert_close(perf.delivery_categories_performance[&DeliverySpeed::EightPlusDays], 1.0);
    }

    #[test]
    fn test_enriched_path_ignores_reviews_table() {
        let reviews = vec![Review::new("r", "o4", 1)];
        let with_table = calculate_delivery_performance(&enriched_sales(), &reviews, 2023);
        let without = calculate_delivery_performance(&enriched_sales(), &[], 2023);
        assert_eq!(with_table, without);
    }

    #[test]
    fn test_raw_path_joins_reviews() {
        let sales = SalesDataset::raw(vec![
            item("o1", 1, "p1", 10.0, 2023, 1).delivered_at(at(2023, 1, 3)),
            item("o1", 2, "p2", 10.0, 2023, 1).delivered_at(at(2023, 1, 3)),
            item("o2", 1, "p1", 10.0, 2023, 2).delivered_at(at(2023, 2, 12)),
            // not delivered yet
            item("o3", 1, "p1", 10.0, 2023, 3),
            // delivered but never reviewed
            item("o4", 1, "p1", 10.0, 2023, 3).delivered_at(at(2023, 3, 5)),
        ])
        .unwrap();
        let reviews = vec![
            Review::new("r1", "o1", 4),
            Review::new("r2", "o2", 2),
            Review::new("r3", "o3", 5),
            Review::new("r4", "o9", 3),
        ];

        let perf = calculate_delivery_performance(&sales, &reviews, 2023);
        // o1: 2 days/4, o2: 11 days/2
        assert_close(perf.avg_delivery_days.unwrap(), 6.5);
        assert_close(perf.avg_review_score.unwrap(), 3.0);
        assert_eq!(
            perf.delivery_categories_performance.keys().copied().collect::<Vec<_>>(),
            vec![DeliverySpeed::UpTo3Days, DeliverySpeed::EightPlusDays]
        );
    }

    #[test]
    fn test_raw_and_enriched_paths_agree() {
        let records = vec![
            item("o1", 1, "p1", 10.0, 2023, 1).delivered_at(at(2023, 1, 5)),
            item("o2", 1, "p1", 10.0, 2023, 1).delivered_at(at(2023, 1, 15)),
        ];
        let reviews = vec![Review::new("r1", "o1", 5), Review::new("r2", "o2", 3)];

        let raw = SalesDataset::raw(records.clone()).unwrap();
        let enriched = SalesDataset::enriched(vec![
            records[0].clone().with_review_score(5),
            records[1].clone().with_review_score(3),
        ])
        .unwrap();

        assert_eq!(
            calculate_delivery_performance(&raw, &reviews, 2023),
            calculate_delivery_performance(&enriched, &[], 2023)
        );
    }

    #[test]
    fn test_paths_agree_for_order_reviewed_twice() {
        let record = item("o1", 1, "p1", 10.0, 2023, 1).delivered_at(at(2023, 1, 3));
        let reviews = vec![Review::new("r1", "o1", 1), Review::new("r2", "o1", 5)];

        let raw = SalesDataset::raw(vec![record.clone()]).unwrap();
        let enriched = SalesDataset::enriched(vec![
            record.with_review_score(1).with_review_score(5),
        ])
        .unwrap();

        let from_raw = calculate_delivery_performance(&raw, &reviews, 2023);
        let from_enriched = calculate_delivery_performance(&enriched, &[], 2023);
        assert_eq!(from_raw, from_enriched);
        assert_close(from_enriched.avg_review_score.unwrap(), 3.0);
        assert_close(from_enriched.avg_delivery_days.unwrap(), 2.0);
    }

    #[test]
    fn test_empty_year_yields_undefined_means() {
        let perf = calculate_delivery_performance(&enriched_sales(), &[], 2019);
        assert_eq!(perf.avg_delivery_days, None);
        assert_eq!(perf.avg_review_score, None);
        assert!(perf.delivery_categories_performance.is_empty());
    }
}
