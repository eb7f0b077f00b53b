use contracts::shared::indicators::*;

/// Well-known indicator IDs (constants to avoid typos).
pub mod ids {
    use super::*;

    pub fn sales_revenue() -> IndicatorId {
        IndicatorId::new("sales_revenue")
    }
    pub fn sales_monthly_growth() -> IndicatorId {
        IndicatorId::new("sales_monthly_growth")
    }
    pub fn sales_avg_order_value() -> IndicatorId {
        IndicatorId::new("sales_avg_order_value")
    }
    pub fn sales_order_count() -> IndicatorId {
        IndicatorId::new("sales_order_count")
    }
    pub fn delivery_avg_days() -> IndicatorId {
        IndicatorId::new("delivery_avg_days")
    }
    pub fn delivery_avg_review_score() -> IndicatorId {
        IndicatorId::new("delivery_avg_review_score")
    }
}

fn usd() -> ValueFormat {
    ValueFormat::Money {
        currency: "$".into(),
    }
}

/// Build the full catalogue of indicators + sets.
pub fn build_catalog() -> IndicatorCatalogResponse {
    let indicators = vec![
        IndicatorMeta {
            id: ids::sales_revenue(),
            label: "Total Revenue".into(),
            short_label: Some("Revenue".into()),
            icon: "dollar-sign".into(),
            format: usd(),
            description: Some("Sum of line-item prices in the target year".into()),
        },
        IndicatorMeta {
            id: ids::sales_monthly_growth(),
            label: "Monthly Growth".into(),
            short_label: None,
            icon: "trending-up".into(),
            format: ValueFormat::Percent { decimals: 2 },
            description: Some("Mean month-over-month revenue change in the selected range".into()),
        },
        IndicatorMeta {
            id: ids::sales_avg_order_value(),
            label: "Average Order Value".into(),
            short_label: Some("AOV".into()),
            icon: "invoices".into(),
            format: usd(),
            description: Some("Mean of per-order totals".into()),
        },
        IndicatorMeta {
            id: ids::sales_order_count(),
            label: "Total Orders".into(),
            short_label: Some("Orders".into()),
            icon: "orders".into(),
            format: ValueFormat::Integer,
            description: Some("Number of distinct orders".into()),
        },
        IndicatorMeta {
            id: ids::delivery_avg_days(),
            label: "Average Delivery Time (Days)".into(),
            short_label: Some("Delivery".into()),
            icon: "truck".into(),
            format: ValueFormat::Number { decimals: 1 },
            description: Some("Mean days from purchase to delivery of reviewed orders".into()),
        },
        IndicatorMeta {
            id: ids::delivery_avg_review_score(),
            label: "Average Review Score".into(),
            short_label: Some("Reviews".into()),
            icon: "star".into(),
            format: ValueFormat::Rating { max: 5 },
            description: Some("Mean review score of delivered orders".into()),
        },
    ];

    let sets = vec![
        IndicatorSetMeta {
            id: IndicatorSetId::new("sales_overview"),
            label: "Key Performance Indicators".into(),
            indicators: vec![
                ids::sales_revenue(),
                ids::sales_monthly_growth(),
                ids::sales_avg_order_value(),
                ids::sales_order_count(),
            ],
            columns: 4,
        },
        IndicatorSetMeta {
            id: IndicatorSetId::new("customer_experience"),
            label: "Additional Metrics".into(),
            indicators: vec![ids::delivery_avg_days(), ids::delivery_avg_review_score()],
            columns: 2,
        },
    ];

    IndicatorCatalogResponse { indicators, sets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sets_reference_known_indicators() {
        let catalog = build_catalog();
        let known: HashSet<_> = catalog.indicators.iter().map(|m| m.id.clone()).collect();
        assert_eq!(known.len(), catalog.indicators.len());
        for set in &catalog.sets {
            for id in &set.indicators {
                assert!(known.contains(id), "{} not in catalog", id.0);
            }
        }
    }
}
