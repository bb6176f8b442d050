use contracts::domain::a004_sale::aggregate::{PaymentDto, Sale, SaleDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;
use crate::system::auth::storage;

fn get_auth_header() -> Option<String> {
    storage::get_access_token().map(|token| format!("Bearer {}", token))
}

/// Fetch all sales
pub async fn fetch_all() -> Result<Vec<Sale>, String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let response = Request::get(&format!("{}/api/sales", api_base()))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch sales: {}", response.status()));
    }

    response
        .json::<Vec<Sale>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create or update a sale
pub async fn upsert(dto: SaleDto) -> Result<String, String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let response = Request::post(&format!("{}/api/sales", api_base()))
        .header("Authorization", &auth_header)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to save sale: {}", response.status()));
    }

    let result: serde_json::Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(result["id"].as_str().unwrap_or("").to_string())
}

/// Delete a sale
pub async fn delete(id: &str) -> Result<(), String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let response = Request::delete(&format!("{}/api/sales/{}", api_base(), id))
        .header("Authorization", &auth_header)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete sale: {}", response.status()));
    }

    Ok(())
}

/// Record a payment; the server answers with the updated sale
pub async fn add_payment(sale_id: &str, dto: PaymentDto) -> Result<Sale, String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let response = Request::post(&format!("{}/api/sales/{}/payments", api_base(), sale_id))
        .header("Authorization", &auth_header)
        .json(&dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to record payment: {}", response.status()));
    }

    response
        .json::<Sale>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Remove a payment; the server answers with the updated sale
pub async fn delete_payment(sale_id: &str, payment_id: &str) -> Result<Sale, String> {
    let auth_header = get_auth_header().ok_or("Not authenticated")?;

    let response = Request::delete(&format!(
        "{}/api/sales/{}/payments/{}",
        api_base(),
        sale_id,
        payment_id
    ))
    .header("Authorization", &auth_header)
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete payment: {}", response.status()));
    }

    response
        .json::<Sale>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
