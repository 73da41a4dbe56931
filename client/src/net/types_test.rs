use super::*;

// =============================================================
// Request payloads
// =============================================================

#[test]
fn register_request_nests_tenant_fields_in_camel_case() {
    let req = RegisterTenantRequest {
        email: "owner@shop.test".to_owned(),
        password: "pw".to_owned(),
        tenant: TenantRegistration {
            tenant_id: "shop-1".to_owned(),
            shopify_base_url: "https://shop-1.myshopify.com".to_owned(),
            access_token: "shpat_x".to_owned(),
            shop_name: "Shop One".to_owned(),
        },
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({
            "email": "owner@shop.test",
            "password": "pw",
            "tenant": {
                "tenantId": "shop-1",
                "shopifyBaseUrl": "https://shop-1.myshopify.com",
                "accessToken": "shpat_x",
                "shopName": "Shop One"
            }
        })
    );
}

#[test]
fn reset_password_request_uses_new_password_key() {
    let req = ResetPasswordRequest {
        email: "a@b.com".to_owned(),
        otp: "123456".to_owned(),
        new_password: "s3cret".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&req).unwrap(),
        serde_json::json!({ "email": "a@b.com", "otp": "123456", "newPassword": "s3cret" })
    );
}

#[test]
fn message_body_tolerates_missing_message() {
    let body: MessageBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message, None);
    let body: MessageBody = serde_json::from_str(r#"{"message":"Email already registered"}"#).unwrap();
    assert_eq!(body.message.as_deref(), Some("Email already registered"));
}

// =============================================================
// Dashboard
// =============================================================

#[test]
fn dashboard_summary_decodes_full_payload() {
    let raw = serde_json::json!({
        "totalRevenue": 1234.5,
        "totalRevenueChangePercent": 12.5,
        "totalOrders": 40,
        "totalOrdersChangePercent": 3.0,
        "totalCustomers": 25.0,
        "totalCustomersChangePercent": 0,
        "totalProducts": 9,
        "revenueTrend": { "2024-05-02": 20.0, "2024-05-01": 10.0 },
        "ordersByDay": { "2024-05-01": 1, "2024-05-02": 3 },
        "topCustomers": [
            { "customerId": 7001, "name": "Ada", "email": "ada@x.test", "totalSpent": 99.9, "ordersCount": 3 }
        ],
        "topProducts": [
            {
                "productId": "gid://shopify/Product/1",
                "title": "Tee",
                "imageSrc": "https://cdn.test/tee.png",
                "unitPrice": 19.99,
                "stock": -1,
                "quantitySold": 12,
                "revenue": 239.88
            }
        ]
    });
    let summary: DashboardSummary = serde_json::from_value(raw).unwrap();
    assert_eq!(summary.total_orders, 40);
    assert_eq!(summary.total_customers, 25);
    assert_eq!(summary.total_products, 9);
    let dates: Vec<&String> = summary.revenue_trend.keys().collect();
    assert_eq!(dates, ["2024-05-01", "2024-05-02"]);
    assert_eq!(summary.orders_by_day.get("2024-05-02"), Some(&3.0));
    assert_eq!(summary.top_customers[0].customer_id, "7001");
    assert_eq!(summary.top_customers[0].orders_count, 3);
    assert_eq!(summary.top_products[0].stock, -1);
    assert_eq!(summary.top_products[0].image_src.as_deref(), Some("https://cdn.test/tee.png"));
}

#[test]
fn dashboard_summary_defaults_missing_and_null_collections() {
    let summary: DashboardSummary = serde_json::from_value(serde_json::json!({
        "totalRevenue": 0,
        "topCustomers": null,
        "revenueTrend": null
    }))
    .unwrap();
    assert!(summary.top_customers.is_empty());
    assert!(summary.top_products.is_empty());
    assert!(summary.revenue_trend.is_empty());
    assert!(summary.orders_by_day.is_empty());
    assert_eq!(summary.total_orders, 0);
}

#[test]
fn dashboard_summary_treats_null_amounts_as_zero() {
    let summary: DashboardSummary = serde_json::from_value(serde_json::json!({
        "totalRevenue": 10.0,
        "totalRevenueChangePercent": null,
        "totalOrders": 1,
        "topCustomers": [
            { "customerId": 7, "name": "Ada", "email": "ada@shop.test", "totalSpent": null, "ordersCount": 2 }
        ],
        "topProducts": [
            { "productId": "p-1", "title": "Tee", "unitPrice": null, "stock": 3, "quantitySold": 1, "revenue": null }
        ]
    }))
    .unwrap();
    assert!((summary.total_revenue - 10.0).abs() < f64::EPSILON);
    assert!(summary.total_revenue_change_percent.abs() < f64::EPSILON);
    assert_eq!(summary.total_orders, 1);
    assert!(summary.top_customers[0].total_spent.abs() < f64::EPSILON);
    assert!(summary.top_products[0].unit_price.abs() < f64::EPSILON);
    assert!(summary.top_products[0].revenue.abs() < f64::EPSILON);
}

#[test]
fn dashboard_summary_rejects_fractional_counts() {
    let err = serde_json::from_value::<DashboardSummary>(serde_json::json!({ "totalOrders": 1.5 }));
    assert!(err.is_err());
}

// =============================================================
// Tenants
// =============================================================

#[test]
fn tenant_list_decodes_numeric_ids() {
    let tenants: Vec<Tenant> = serde_json::from_value(serde_json::json!([
        { "id": 1, "tenantId": "shop-1", "shopName": "Shop One", "shopifyBaseUrl": "https://shop-1.myshopify.com" },
        { "id": "2", "tenantId": 22, "shopName": "Shop Two", "shopifyBaseUrl": "shop-2" }
    ]))
    .unwrap();
    assert_eq!(tenants.len(), 2);
    assert_eq!(tenants[0].id, "1");
    assert_eq!(tenants[1].tenant_id, "22");
    assert_eq!(tenants[1].shop_name, "Shop Two");
}

#[test]
fn tenant_rejects_object_id() {
    let err = serde_json::from_value::<Tenant>(serde_json::json!({ "id": {}, "tenantId": "t" }));
    assert!(err.is_err());
}
