use super::*;

fn product(stock: i64) -> TopProduct {
    serde_json::from_value(serde_json::json!({
        "productId": 7,
        "title": "Hoodie",
        "imageSrc": null,
        "unitPrice": 49.5,
        "stock": stock,
        "quantitySold": 3,
        "revenue": 148.5
    }))
    .unwrap()
}

#[test]
fn series_follows_date_order() {
    let summary: DashboardSummary = serde_json::from_value(serde_json::json!({
        "revenueTrend": { "2024-05-03": 30.0, "2024-05-01": 10.0, "2024-05-02": 20.0 }
    }))
    .unwrap();
    let points = series(&summary.revenue_trend);
    let dates: Vec<&str> = points.iter().map(|(d, _)| d.as_str()).collect();
    assert_eq!(dates, vec!["2024-05-01", "2024-05-02", "2024-05-03"]);
    assert_eq!(points[0].1, 10.0);
}

#[test]
fn empty_trend_gives_empty_series() {
    assert!(series(&DashboardSummary::default().orders_by_day).is_empty());
}

#[test]
fn product_detail_shows_price_and_stock() {
    assert_eq!(price_and_stock(&product(12)), "$49.5 | 12 in stock");
}

#[test]
fn untracked_inventory_shows_infinity() {
    assert_eq!(price_and_stock(&product(-1)), "$49.5 | ∞");
}
