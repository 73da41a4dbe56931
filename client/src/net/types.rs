//! Wire DTOs for the tenant backend's REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Decoding is lenient
//! where the backend is loose: ids may arrive as strings or numbers, counts
//! may arrive as integer-valued floats, and absent collections are empty.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// REQUEST PAYLOADS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Shop connection details submitted at registration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantRegistration {
    pub tenant_id: String,
    pub shopify_base_url: String,
    pub access_token: String,
    pub shop_name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegisterTenantRequest {
    pub email: String,
    pub password: String,
    pub tenant: TenantRegistration,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    pub new_password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SyncRequest {
    pub email: String,
}

/// Generic `{ "message": ... }` body the backend uses for errors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

// =============================================================================
// DASHBOARD
// =============================================================================

/// Aggregated tenant metrics for a date range.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub total_revenue: f64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub total_revenue_change_percent: f64,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub total_orders: u64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub total_orders_change_percent: f64,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub total_customers: u64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub total_customers_change_percent: f64,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub total_products: u64,
    /// `YYYY-MM-DD` → revenue. Ordered by date because ISO dates sort lexically.
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub revenue_trend: BTreeMap<String, f64>,
    /// `YYYY-MM-DD` → order count.
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub orders_by_day: BTreeMap<String, f64>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub top_customers: Vec<TopCustomer>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub top_products: Vec<TopProduct>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCustomer {
    #[serde(deserialize_with = "deserialize_id")]
    pub customer_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub total_spent: f64,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub orders_count: u64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    #[serde(deserialize_with = "deserialize_id")]
    pub product_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image_src: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub unit_price: f64,
    /// Negative means untracked inventory.
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub stock: i64,
    #[serde(default, deserialize_with = "deserialize_u64_from_number")]
    pub quantity_sold: u64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub revenue: f64,
}

// =============================================================================
// TENANTS
// =============================================================================

/// A registered store as listed for administrators.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub tenant_id: String,
    #[serde(default)]
    pub shop_name: String,
    #[serde(default)]
    pub shopify_base_url: String,
}

// =============================================================================
// LENIENT DECODERS
// =============================================================================

fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn id_from_value<E: serde::de::Error>(value: serde_json::Value) -> Result<String, E> {
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(E::custom("expected string or number id")),
    }
}

pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    id_from_value(serde_json::Value::deserialize(deserializer)?)
}

fn deserialize_u64_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_i64_from_number(deserializer)?;
    u64::try_from(value).map_err(|_| D::Error::custom(format!("value {value} out of range for u64")))
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
