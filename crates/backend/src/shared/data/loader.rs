use chrono::{NaiveDate, NaiveDateTime};
use contracts::domain::a101_product::aggregate::Product;
use contracts::domain::a102_order::aggregate::Order;
use contracts::domain::a103_customer::aggregate::Customer;
use contracts::domain::a104_review::aggregate::Review;
use contracts::enums::order_status::OrderStatus;
use contracts::projections::p910_sales_dataset::dto::SalesRecord;
use csv::StringRecord;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::DataError;
use crate::shared::config::DataConfig;
use crate::shared::metrics::SalesDataset;

/// Provider of the sales dataset and its reference tables
pub trait SalesSource {
    /// Denormalized line items of orders with the given status (all orders
    /// when `None`)
    fn create_sales_dataset(&self, status_filter: Option<OrderStatus>)
        -> Result<SalesDataset, DataError>;

    fn products(&self) -> &[Product];
    fn orders(&self) -> &[Order];
    fn customers(&self) -> &[Customer];
    fn reviews(&self) -> &[Review];
}

/// Order line as stored in the order items file
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub order_id: String,
    pub order_item_id: u32,
    pub product_id: String,
    pub price: f64,
}

/// Tables read from the CSV export
#[derive(Debug, Clone, Default)]
pub struct CsvSalesSource {
    orders: Vec<Order>,
    items: Vec<OrderItem>,
    products: Vec<Product>,
    customers: Vec<Customer>,
    reviews: Vec<Review>,
}

const ORDERS: &str = "orders";
const ORDER_ITEMS: &str = "order items";
const PRODUCTS: &str = "products";
const CUSTOMERS: &str = "customers";
const REVIEWS: &str = "reviews";

impl CsvSalesSource {
    pub fn new(
        orders: Vec<Order>,
        items: Vec<OrderItem>,
        products: Vec<Product>,
        customers: Vec<Customer>,
        reviews: Vec<Review>,
    ) -> Self {
        Self {
            orders,
            items,
            products,
            customers,
            reviews,
        }
    }

    /// Read all five tables from `dir`
    pub fn load(dir: &Path, files: &DataConfig) -> Result<Self, DataError> {
        let open = |name: &str| {
            let path = dir.join(name);
            File::open(&path).map_err(|source| DataError::Io {
                path: path.display().to_string(),
                source,
            })
        };

        let source = Self::new(
            parse_orders(open(&files.orders_file)?)?,
            parse_order_items(open(&files.order_items_file)?)?,
            parse_products(open(&files.products_file)?)?,
            parse_customers(open(&files.customers_file)?)?,
            parse_reviews(open(&files.reviews_file)?)?,
        );

        tracing::info!(
            orders = source.orders.len(),
            items = source.items.len(),
            products = source.products.len(),
            customers = source.customers.len(),
            reviews = source.reviews.len(),
            "Loaded e-commerce tables from {}",
            dir.display()
        );

        Ok(source)
    }
}

impl SalesSource for CsvSalesSource {
    /// Items are inner-joined with their order; category and state are
    /// attached when known, together with the scores of every review of the
    /// order.
    fn create_sales_dataset(
        &self,
        status_filter: Option<OrderStatus>,
    ) -> Result<SalesDataset, DataError> {
        let orders: HashMap<&str, &Order> = self
            .orders
            .iter()
            .filter(|o| status_filter.map_or(true, |s| o.order_status == s))
            .map(|o| (o.order_id.as_str(), o))
            .collect();
        let categories: HashMap<&str, Option<&str>> = self
            .products
            .iter()
            .map(|p| (p.product_id.as_str(), p.product_category_name.as_deref()))
            .collect();
        let states: HashMap<&str, Option<&str>> = self
            .customers
            .iter()
            .map(|c| (c.customer_id.as_str(), c.customer_state.as_deref()))
            .collect();
        let mut scores: HashMap<&str, Vec<u8>> = HashMap::new();
        for review in &self.reviews {
            scores
                .entry(review.order_id.as_str())
                .or_default()
                .push(review.review_score);
        }

        let mut records = Vec::with_capacity(self.items.len());
        for item in &self.items {
            let Some(order) = orders.get(item.order_id.as_str()) else {
                continue;
            };

            let mut record = SalesRecord::new(
                item.order_id.as_str(),
                item.order_item_id,
                item.product_id.as_str(),
                item.price,
                order.order_purchase_timestamp,
            );
            if let Some(delivered) = order.order_delivered_customer_date {
                record = record.delivered_at(delivered);
            }
            record.review_scores = scores
                .get(order.order_id.as_str())
                .cloned()
                .unwrap_or_default();
            record.product_category_name = categories
                .get(item.product_id.as_str())
                .copied()
                .flatten()
                .map(str::to_string);
            record.customer_state = states
                .get(order.customer_id.as_str())
                .copied()
                .flatten()
                .map(str::to_string);

            records.push(record);
        }

        tracing::debug!(
            status = ?status_filter,
            records = records.len(),
            "Built sales dataset"
        );

        SalesDataset::enriched(records)
    }

    fn products(&self) -> &[Product] {
        &self.products
    }

    fn orders(&self) -> &[Order] {
        &self.orders
    }

    fn customers(&self) -> &[Customer] {
        &self.customers
    }

    fn reviews(&self) -> &[Review] {
        &self.reviews
    }
}

// ---------------------------------------------------------------------------
// Table parsing
// ---------------------------------------------------------------------------

/// One data row with its columns resolved by header name
struct Row<'r> {
    table: &'static str,
    line: usize,
    record: &'r StringRecord,
    columns: &'r [(&'static str, usize)],
}

impl<'r> Row<'r> {
    fn field(&self, column: &str) -> Option<&'r str> {
        self.columns
            .iter()
            .find(|(name, _)| *name == column)
            .and_then(|(_, idx)| self.record.get(*idx))
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }

    fn invalid(&self, message: impl Into<String>) -> DataError {
        DataError::invalid(self.table, self.line, message)
    }

    fn required(&self, column: &str) -> Result<&'r str, DataError> {
        self.field(column)
            .ok_or_else(|| self.invalid(format!("empty `{column}`")))
    }

    fn optional(&self, column: &str) -> Option<&'r str> {
        self.field(column)
    }

    fn timestamp(&self, column: &str) -> Result<NaiveDateTime, DataError> {
        let raw = self.required(column)?;
        parse_timestamp(raw)
            .ok_or_else(|| self.invalid(format!("`{column}` is not a timestamp: {raw:?}")))
    }

    fn optional_timestamp(&self, column: &str) -> Result<Option<NaiveDateTime>, DataError> {
        match self.optional(column) {
            None => Ok(None),
            Some(raw) => parse_timestamp(raw).map(Some).ok_or_else(|| {
                self.invalid(format!("`{column}` is not a timestamp: {raw:?}"))
            }),
        }
    }
}

/// `YYYY-MM-DD HH:MM:SS` or a bare date (midnight)
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

fn read_table<R, T, F>(
    table: &'static str,
    reader: R,
    required: &[&'static str],
    mut parse: F,
) -> Result<Vec<T>, DataError>
where
    R: Read,
    F: FnMut(&Row<'_>) -> Result<T, DataError>,
{
    let csv_err = |source: csv::Error| DataError::Csv { table, source };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_err)?.clone();
    let mut columns = Vec::with_capacity(required.len());
    for &name in required {
        let idx = headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| DataError::MissingColumn {
                table,
                column: name.to_string(),
            })?;
        columns.push((name, idx));
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_err)?;
        let line = record.position().map_or(0, |p| p.line() as usize);
        let row = Row {
            table,
            line,
            record: &record,
            columns: &columns,
        };
        rows.push(parse(&row)?);
    }

    Ok(rows)
}

pub fn parse_orders<R: Read>(reader: R) -> Result<Vec<Order>, DataError> {
    read_table(
        ORDERS,
        reader,
        &[
            "order_id",
            "customer_id",
            "order_status",
            "order_purchase_timestamp",
            "order_delivered_customer_date",
        ],
        |row| {
            let status_raw = row.required("order_status")?;
            let status = OrderStatus::from_code(status_raw)
                .ok_or_else(|| row.invalid(format!("unknown order status {status_raw:?}")))?;
            Ok(Order::new(
                row.required("order_id")?,
                row.required("customer_id")?,
                status,
                row.timestamp("order_purchase_timestamp")?,
                row.optional_timestamp("order_delivered_customer_date")?,
            ))
        },
    )
}

pub fn parse_order_items<R: Read>(reader: R) -> Result<Vec<OrderItem>, DataError> {
    read_table(
        ORDER_ITEMS,
        reader,
        &["order_id", "order_item_id", "product_id", "price"],
        |row| {
            let item_raw = row.required("order_item_id")?;
            let order_item_id = item_raw
                .parse::<u32>()
                .map_err(|_| row.invalid(format!("`order_item_id` is not an integer: {item_raw:?}")))?;
            let price_raw = row.required("price")?;
            let price = price_raw
                .parse::<f64>()
                .ok()
                .filter(|p| p.is_finite() && *p >= 0.0)
                .ok_or_else(|| row.invalid(format!("`price` is not a non-negative amount: {price_raw:?}")))?;
            Ok(OrderItem {
                order_id: row.required("order_id")?.to_string(),
                order_item_id,
                product_id: row.required("product_id")?.to_string(),
                price,
            })
        },
    )
}

pub fn parse_products<R: Read>(reader: R) -> Result<Vec<Product>, DataError> {
    read_table(
        PRODUCTS,
        reader,
        &["product_id", "product_category_name"],
        |row| {
            Ok(Product::new(
                row.required("product_id")?,
                row.optional("product_category_name"),
            ))
        },
    )
}

pub fn parse_customers<R: Read>(reader: R) -> Result<Vec<Customer>, DataError> {
    read_table(
        CUSTOMERS,
        reader,
        &["customer_id", "customer_state"],
        |row| {
            Ok(Customer::new(
                row.required("customer_id")?,
                row.optional("customer_state"),
            ))
        },
    )
}

pub fn parse_reviews<R: Read>(reader: R) -> Result<Vec<Review>, DataError> {
    read_table(
        REVIEWS,
        reader,
        &["review_id", "order_id", "review_score"],
        |row| {
            let raw = row.required("review_score")?;
            let score = raw
                .parse::<u8>()
                .ok()
                .filter(|s| (1..=5).contains(s))
                .ok_or_else(|| row.invalid(format!("`review_score` must be 1..=5, got {raw:?}")))?;
            Ok(Review::new(
                row.required("review_id")?,
                row.required("order_id")?,
                score,
            ))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metrics::calculate_delivery_performance;

    const ORDERS_CSV: &str = "\
order_id,customer_id,order_status,order_purchase_timestamp,order_approved_at,order_delivered_customer_date
o1,c1,delivered,2023-01-10 08:00:00,2023-01-10 09:00:00,2023-01-14 18:00:00
o2,c2,delivered,2023-02-01 12:00:00,,2023-02-11 12:00:00
o3,c1,canceled,2023-02-05 12:00:00,,
o4,c3,delivered,2022-11-20 12:00:00,,2022-11-22 12:00:00
";

    const ITEMS_CSV: &str = "\
order_id,order_item_id,product_id,seller_id,price,freight_value
o1,1,p1,s1,100.00,10.0
o1,2,p2,s1,20.50,5.0
o2,1,p1,s2,80,7.5
o3,1,p2,s2,15,1
o4,1,p3,s3,60,3
o9,1,p1,s1,999,0
";

    const PRODUCTS_CSV: &str = "\
product_id,product_category_name,product_weight_g
p1,toys,100
p2,,200
p3,books,300
";

    const CUSTOMERS_CSV: &str = "\
customer_id,customer_unique_id,customer_zip_code_prefix,customer_city,customer_state
c1,u1,01000,sao paulo,SP
c2,u2,20000,rio,RJ
";

    const REVIEWS_CSV: &str = "\
review_id,order_id,review_score,review_comment_message
r1,o1,4,ok
r2,o2,2,
r3,o2,3,changed my mind
";

    fn source() -> CsvSalesSource {
        CsvSalesSource::new(
            parse_orders(ORDERS_CSV.as_bytes()).unwrap(),
            parse_order_items(ITEMS_CSV.as_bytes()).unwrap(),
            parse_products(PRODUCTS_CSV.as_bytes()).unwrap(),
            parse_customers(CUSTOMERS_CSV.as_bytes()).unwrap(),
            parse_reviews(REVIEWS_CSV.as_bytes()).unwrap(),
        )
    }

    #[test]
    fn test_parse_orders() {
        let orders = parse_orders(ORDERS_CSV.as_bytes()).unwrap();
        assert_eq!(orders.len(), 4);
        assert_eq!(orders[0].purchase_year, 2023);
        assert_eq!(orders[0].delivery_days(), Some(4));
        assert_eq!(orders[2].order_status, OrderStatus::Canceled);
        assert_eq!(orders[2].order_delivered_customer_date, None);
    }

    #[test]
    fn test_missing_column_is_reported() {
        let csv = "order_id,order_item_id,product_id\no1,1,p1\n";
        let err = parse_order_items(csv.as_bytes()).unwrap_err();
        match err {
            DataError::MissingColumn { table, column } => {
                assert_eq!(table, "order items");
                assert_eq!(column, "price");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_timestamp_is_not_coerced() {
        let csv = "\
order_id,customer_id,order_status,order_purchase_timestamp,order_delivered_customer_date
o1,c1,delivered,10/01/2023 8am,
";
        let err = parse_orders(csv.as_bytes()).unwrap_err();
        match err {
            DataError::InvalidData { table, row, message } => {
                assert_eq!(table, "orders");
                assert_eq!(row, 2);
                assert!(message.contains("order_purchase_timestamp"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let bad_score = "review_id,order_id,review_score\nr1,o1,7\n";
        assert!(matches!(
            parse_reviews(bad_score.as_bytes()),
            Err(DataError::InvalidData { .. })
        ));

        let bad_price = "order_id,order_item_id,product_id,price\no1,1,p1,-3\n";
        assert!(matches!(
            parse_order_items(bad_price.as_bytes()),
            Err(DataError::InvalidData { .. })
        ));

        let bad_status = "\
order_id,customer_id,order_status,order_purchase_timestamp,order_delivered_customer_date
o1,c1,teleported,2023-01-01 00:00:00,
";
        assert!(matches!(
            parse_orders(bad_status.as_bytes()),
            Err(DataError::InvalidData { .. })
        ));
    }

    #[test]
    fn test_parse_timestamp_accepts_date_only() {
        let ts = parse_timestamp("2023-05-06").unwrap();
        assert_eq!(ts.to_string(), "2023-05-06 00:00:00");
        assert!(parse_timestamp("2023-13-01").is_none());
    }

    #[test]
    fn test_create_delivered_dataset() {
        let dataset = source()
            .create_sales_dataset(Some(OrderStatus::Delivered))
            .unwrap();

        // o3 is canceled, o9 has no order row
        let keys: Vec<_> = dataset
            .records()
            .iter()
            .map(|r| (r.order_id.as_str(), r.order_item_id))
            .collect();
        assert_eq!(keys, vec![("o1", 1), ("o1", 2), ("o2", 1), ("o4", 1)]);

        let first = &dataset.records()[0];
        assert_eq!(first.purchase_year, 2023);
        assert_eq!(first.purchase_month, 1);
        assert_eq!(first.delivery_days, Some(4));
        assert_eq!(first.review_scores, vec![4]);
        assert_eq!(first.product_category_name.as_deref(), Some("toys"));
        assert_eq!(first.customer_state.as_deref(), Some("SP"));

        // product without category, customer unknown
        let o1_second = &dataset.records()[1];
        assert_eq!(o1_second.product_category_name, None);
        let o4 = &dataset.records()[3];
        assert_eq!(o4.customer_state, None);
        assert!(o4.review_scores.is_empty());

        // every review of the order is kept
        assert_eq!(dataset.records()[2].review_scores, vec![2, 3]);
    }

    #[test]
    fn test_twice_reviewed_order_matches_reviews_table() {
        let source = source();
        let enriched = source
            .create_sales_dataset(Some(OrderStatus::Delivered))
            .unwrap();
        let raw = SalesDataset::raw(enriched.records().to_vec()).unwrap();

        let year = enriched.records()[2].purchase_year;
        let from_records = calculate_delivery_performance(&enriched, &[], year);
        let from_table = calculate_delivery_performance(&raw, source.reviews(), year);
        assert_eq!(from_records, from_table);
    }

    #[test]
    fn test_delivery_before_purchase_is_not_coerced() {
        let orders = "\
order_id,customer_id,order_status,order_purchase_timestamp,order_delivered_customer_date
o1,c1,delivered,2023-01-02 10:00:00,2023-01-01 22:00:00
";
        let source = CsvSalesSource::new(
            parse_orders(orders.as_bytes()).unwrap(),
            vec![OrderItem {
                order_id: "o1".into(),
                order_item_id: 1,
                product_id: "p1".into(),
                price: 10.0,
            }],
            vec![],
            vec![],
            vec![],
        );
        let err = source.create_sales_dataset(None).unwrap_err();
        match err {
            DataError::InvalidData { table, message, .. } => {
                assert_eq!(table, "sales dataset");
                assert!(message.contains("before purchase"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_create_dataset_without_status_filter() {
        let dataset = source().create_sales_dataset(None).unwrap();
        assert_eq!(dataset.len(), 5);
        assert_eq!(
            dataset.enrichment(),
            crate::shared::metrics::DeliveryEnrichment::Enriched
        );
    }
}
