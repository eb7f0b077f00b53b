use contracts::projections::p910_sales_dataset::dto::{SalesPeriodQuery, SalesRecord};

use crate::shared::data::store::DataStore;
use crate::shared::metrics::filter_sales_data_by_period;

/// Sales records of the requested year, optionally narrowed to one month
pub fn list_by_period(store: &DataStore, query: &SalesPeriodQuery) -> Vec<SalesRecord> {
    filter_sales_data_by_period(store.sales(), query.year, query.month)
        .records()
        .to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::loader::{CsvSalesSource, OrderItem};
    use crate::shared::metrics::test_support::at;
    use contracts::domain::a102_order::aggregate::Order;
    use contracts::enums::order_status::OrderStatus;

    fn store() -> DataStore {
        let orders = vec![
            Order::new("o1", "c1", OrderStatus::Delivered, at(2023, 1, 5), None),
            Order::new("o2", "c1", OrderStatus::Delivered, at(2023, 2, 5), None),
            Order::new("o3", "c1", OrderStatus::Delivered, at(2022, 2, 5), None),
        ];
        let items = orders
            .iter()
            .map(|o| OrderItem {
                order_id: o.order_id.clone(),
                order_item_id: 1,
                product_id: "p1".into(),
                price: 10.0,
            })
            .collect();
        let source = CsvSalesSource::new(orders, items, vec![], vec![], vec![]);
        DataStore::new(Box::new(source), None).unwrap()
    }

    #[test]
    fn test_list_by_year_and_month() {
        let store = store();
        let year = list_by_period(&store, &SalesPeriodQuery { year: 2023, month: None });
        assert_eq!(year.len(), 2);

        let month = list_by_period(&store, &SalesPeriodQuery { year: 2023, month: Some(2) });
        assert_eq!(month.len(), 1);
        assert_eq!(month[0].order_id, "o2");

        assert!(list_by_period(&store, &SalesPeriodQuery { year: 2021, month: None }).is_empty());
    }
}
