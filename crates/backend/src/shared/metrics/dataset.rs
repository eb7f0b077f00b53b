use chrono::{Datelike, NaiveDate};
use contracts::projections::p910_sales_dataset::dto::SalesRecord;
use std::collections::BTreeSet;

use crate::shared::data::error::DataError;

const TABLE: &str = "sales dataset";

/// Whether delivery and review attributes were already attached to the
/// records by the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryEnrichment {
    /// `delivery_days` and `review_scores` are filled where known
    Enriched,
    /// Only timestamps are present; delivery metrics join the reviews table
    Raw,
}

/// Validated, read-only snapshot of sales line items
#[derive(Debug, Clone)]
pub struct SalesDataset {
    records: Vec<SalesRecord>,
    enrichment: DeliveryEnrichment,
}

impl SalesDataset {
    /// Validate records and wrap them.
    ///
    /// Fails on negative or non-finite prices, year/month fields that do not
    /// match the purchase timestamp, review scores outside 1..=5 and negative
    /// delivery durations.
    pub fn try_new(
        records: Vec<SalesRecord>,
        enrichment: DeliveryEnrichment,
    ) -> Result<Self, DataError> {
        for (idx, record) in records.iter().enumerate() {
            validate(record, idx + 1)?;
        }
        Ok(Self {
            records,
            enrichment,
        })
    }

    pub fn enriched(records: Vec<SalesRecord>) -> Result<Self, DataError> {
        Self::try_new(records, DeliveryEnrichment::Enriched)
    }

    pub fn raw(records: Vec<SalesRecord>) -> Result<Self, DataError> {
        Self::try_new(records, DeliveryEnrichment::Raw)
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn enrichment(&self) -> DeliveryEnrichment {
        self.enrichment
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records purchased in `year`
    pub fn in_year(&self, year: i32) -> impl Iterator<Item = &SalesRecord> + '_ {
        self.records.iter().filter(move |r| r.purchase_year == year)
    }

    /// Distinct purchase years, ascending
    pub fn years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|r| r.purchase_year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Copy of the records matching `predicate`; already validated rows are
    /// not checked again
    pub fn filtered<P>(&self, predicate: P) -> SalesDataset
    where
        P: Fn(&SalesRecord) -> bool,
    {
        SalesDataset {
            records: self
                .records
                .iter()
                .filter(|&r| predicate(r))
                .cloned()
                .collect(),
            enrichment: self.enrichment,
        }
    }

    /// Records purchased between two dates, both inclusive
    pub fn between(&self, date_from: NaiveDate, date_to: NaiveDate) -> SalesDataset {
        self.filtered(|r| {
            let date = r.order_purchase_timestamp.date();
            date >= date_from && date <= date_to
        })
    }
}

fn validate(record: &SalesRecord, row: usize) -> Result<(), DataError> {
    if !record.price.is_finite() || record.price < 0.0 {
        return Err(DataError::invalid(
            TABLE,
            row,
            format!("price {} of order {} is not a non-negative amount", record.price, record.order_id),
        ));
    }

    let ts = record.order_purchase_timestamp;
    if record.purchase_year != ts.year() || record.purchase_month != ts.month() {
        return Err(DataError::invalid(
            TABLE,
            row,
            format!(
                "purchase period {}-{:02} does not match timestamp {}",
                record.purchase_year, record.purchase_month, ts
            ),
        ));
    }

    for &score in &record.review_scores {
        if !(1..=5).contains(&score) {
            return Err(DataError::invalid(
                TABLE,
                row,
                format!("review score {score} is outside 1..=5"),
            ));
        }
    }

    if let Some(days) = record.delivery_days {
        if days < 0 {
            return Err(DataError::invalid(
                TABLE,
                row,
                format!("order {} delivered {} days before purchase", record.order_id, -days),
            ));
        }
    }

    Ok(())
}
