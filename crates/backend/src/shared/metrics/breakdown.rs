use contracts::domain::a101_product::aggregate::Product;
use contracts::domain::a102_order::aggregate::Order;
use contracts::domain::a103_customer::aggregate::Customer;
use contracts::projections::p910_sales_dataset::dto::SalesRecord;
use contracts::shared::metrics::{CategorySales, StateSales};

use super::aggregate::{group_sum, inner_join, sorted_desc};
use super::dataset::SalesDataset;

/// Revenue per product category for `year`, highest first.
///
/// Categories come from the products table (inner join on `product_id`).
/// Sales of unknown products and products without a category are left out,
/// so the total can be lower than the year's revenue.
pub fn calculate_product_category_sales(
    sales: &SalesDataset,
    products: &[Product],
    year: i32,
) -> Vec<CategorySales> {
    let year_sales: Vec<&SalesRecord> = sales.in_year(year).collect();
    let joined = inner_join(
        &year_sales,
        products,
        |s| s.product_id.as_str(),
        |p| p.product_id.as_str(),
    );

    let dropped = year_sales.len().saturating_sub(joined.len());
    if dropped > 0 {
        tracing::debug!(year, dropped, "category sales: line items without product match");
    }

    let totals = group_sum(joined.into_iter().filter_map(|(sale, product)| {
        product
            .product_category_name
            .as_deref()
            .map(|category| (category, sale.price))
    }));

    sorted_desc(totals)
        .into_iter()
        .map(|(category, price)| CategorySales {
            product_category_name: category.to_string(),
            price,
        })
        .collect()
}

/// Revenue per customer state for `year`, highest first.
///
/// Sales are joined to orders on `order_id` and then to customers on
/// `customer_id`. A line item whose order or customer is missing is dropped;
/// the result undercounts revenue in that case.
pub fn calculate_geographic_sales(
    sales: &SalesDataset,
    orders: &[Order],
    customers: &[Customer],
    year: i32,
) -> Vec<StateSales> {
    let year_sales: Vec<&SalesRecord> = sales.in_year(year).collect();
    let with_orders = inner_join(
        &year_sales,
        orders,
        |s| s.order_id.as_str(),
        |o| o.order_id.as_str(),
    );
    let with_customers = inner_join(
        &with_orders,
        customers,
        |(_, order)| order.customer_id.as_str(),
        |c| c.customer_id.as_str(),
    );

    let dropped = year_sales.len().saturating_sub(with_customers.len());
    if dropped > 0 {
        tracing::debug!(year, dropped, "geographic sales: line items without order or customer match");
    }

    let totals = group_sum(with_customers.into_iter().filter_map(|((sale, _), customer)| {
        customer
            .customer_state
            .as_deref()
            .map(|state| (state, sale.price))
    }));

    sorted_desc(totals)
        .into_iter()
        .map(|(state, price)| StateSales {
            customer_state: state.to_string(),
            price,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metrics::test_support::{at, item};
    use contracts::enums::order_status::OrderStatus;

    fn sales() -> SalesDataset {
        SalesDataset::raw(vec![
            item("o1", 1, "p1", 100.0, 2023, 1),
            item("o1", 2, "p2", 40.0, 2023, 1),
            item("o2", 1, "p3", 70.0, 2023, 2),
            item("o3", 1, "p1", 30.0, 2023, 3),
            item("o4", 1, "p4", 500.0, 2023, 3),
            item("o5", 1, "p1", 900.0, 2022, 5),
        ])
        .unwrap()
    }

    fn products() -> Vec<Product> {
        vec![
            Product::new("p1", Some("toys")),
            Product::new("p2", Some("books")),
            Product::new("p3", Some("books")),
            Product::new("p5", Some("garden")),
            Product::new("p4", None),
        ]
    }

    fn order(id: &str, customer: &str) -> Order {
        Order::new(id, customer, OrderStatus::Delivered, at(2023, 1, 1), None)
    }

    #[test]
    fn test_category_sales_sorted_descending() {
        let rows = calculate_product_category_sales(&sales(), &products(), 2023);
        assert_eq!(
            rows,
            vec![
                CategorySales { product_category_name: "toys".into(), price: 130.0 },
                CategorySales { product_category_name: "books".into(), price: 110.0 },
            ]
        );
    }

    #[test]
    fn test_category_sales_excludes_unmatched_products() {
        // p4 has no category and p1 is unknown to this catalogue
        let catalogue = vec![Product::new("p2", Some("books")), Product::new("p4", None)];
        let rows = calculate_product_category_sales(&sales(), &catalogue, 2023);
        assert_eq!(
            rows,
            vec![CategorySales { product_category_name: "books".into(), price: 40.0 }]
        );
        assert!(calculate_product_category_sales(&sales(), &[], 2023).is_empty());
    }

    #[test]
    fn test_geographic_sales() {
        let orders = vec![
            order("o1", "c1"),
            order("o2", "c2"),
            order("o3", "c3"),
            order("o4", "c1"),
        ];
        let customers = vec![
            Customer::new("c1", Some("SP")),
            Customer::new("c2", Some("RJ")),
            Customer::new("c3", Some("RJ")),
        ];

        let rows = calculate_geographic_sales(&sales(), &orders, &customers, 2023);
        assert_eq!(
            rows,
            vec![
                StateSales { customer_state: "SP".into(), price: 640.0 },
                StateSales { customer_state: "RJ".into(), price: 100.0 },
            ]
        );
    }

    #[test]
    fn test_geographic_sales_drops_unmatched_rows() {
        // o2 has no order row, c3 has no customer row
        let orders = vec![order("o1", "c1"), order("o3", "c3")];
        let customers = vec![Customer::new("c1", Some("MG"))];

        let rows = calculate_geographic_sales(&sales(), &orders, &customers, 2023);
        assert_eq!(
            rows,
            vec![StateSales { customer_state: "MG".into(), price: 140.0 }]
        );
    }
}
