use contracts::domain::a102_order::aggregate::Order;
use contracts::enums::order_status::OrderStatus;
use contracts::shared::metrics::StatusShare;
use std::collections::HashMap;

/// Share of each order status among orders purchased in `year`, largest
/// share first. Empty for a year without orders.
pub fn calculate_order_status_distribution(orders: &[Order], year: i32) -> Vec<StatusShare> {
    let mut counts: HashMap<OrderStatus, usize> = HashMap::new();
    let mut total = 0usize;
    for order in orders.iter().filter(|o| o.purchase_year == year) {
        *counts.entry(order.order_status).or_insert(0) += 1;
        total += 1;
    }

    let mut shares: Vec<(OrderStatus, usize)> = counts.into_iter().collect();
    shares.sort_by(|(sa, ca), (sb, cb)| cb.cmp(ca).then_with(|| sa.cmp(sb)));

    shares
        .into_iter()
        .map(|(order_status, count)| StatusShare {
            order_status,
            share: count as f64 / total as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metrics::test_support::at;

    fn order(id: &str, status: OrderStatus, year: i32) -> Order {
        Order::new(id, "c", status, at(year, 6, 15), None)
    }

    fn orders() -> Vec<Order> {
        vec![
            order("1", OrderStatus::Delivered, 2023),
            order("2", OrderStatus::Delivered, 2023),
            order("3", OrderStatus::Canceled, 2023),
            order("4", OrderStatus::Shipped, 2023),
            order("5", OrderStatus::Delivered, 2023),
            order("6", OrderStatus::Canceled, 2022),
            order("7", OrderStatus::Unavailable, 2023),
            order("8", OrderStatus::Delivered, 2023),
            order("9", OrderStatus::Invoiced, 2023),
        ]
    }

    #[test]
    fn test_distribution() {
        let dist = calculate_order_status_distribution(&orders(), 2023);
        assert_eq!(dist[0].order_status, OrderStatus::Delivered);
        assert_eq!(dist[0].share, 0.5);
        assert_eq!(dist.len(), 5);
        // equal shares keep a stable status order
        let tail: Vec<_> = dist[1..].iter().map(|s| s.order_status).collect();
        assert_eq!(
            tail,
            vec![
                OrderStatus::Invoiced,
                OrderStatus::Shipped,
                OrderStatus::Canceled,
                OrderStatus::Unavailable,
            ]
        );
    }

    #[test]
    fn test_shares_sum_to_one() {
        for year in [2022, 2023] {
            let total: f64 = calculate_order_status_distribution(&orders(), year)
                .iter()
                .map(|s| s.share)
                .sum();
            assert!((total - 1.0).abs() < 1e-9, "year {year}: {total}");
        }
    }

    #[test]
    fn test_empty_year() {
        assert!(calculate_order_status_distribution(&orders(), 2021).is_empty());
    }
}
