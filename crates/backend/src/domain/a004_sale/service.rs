use super::repository;
use contracts::domain::a004_sale::aggregate::{PaymentDto, Sale, SaleDto};
use uuid::Uuid;

pub async fn create(dto: SaleDto) -> anyhow::Result<Uuid> {
    let code = dto
        .sale_number
        .clone()
        .unwrap_or_else(|| format!("VTA-{}", Uuid::new_v4()));
    let mut aggregate = Sale::new_for_insert(code, &dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::insert(&aggregate).await
}

pub async fn update(dto: SaleDto) -> anyhow::Result<()> {
    let id = dto
        .id
        .as_ref()
        .and_then(|s| Uuid::parse_str(s).ok())
        .ok_or_else(|| anyhow::anyhow!("Invalid ID"))?;

    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Not found"))?;

    aggregate.update(&dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;
    aggregate.before_write();

    repository::update(&aggregate).await
}

pub async fn delete(id: Uuid) -> anyhow::Result<bool> {
    repository::soft_delete(id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Sale>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> anyhow::Result<Vec<Sale>> {
    repository::list_all().await
}

/// Record a payment against a sale; totals and status are re-derived.
/// Returns the updated sale, or None when the sale does not exist.
pub async fn add_payment(id: Uuid, dto: PaymentDto) -> anyhow::Result<Option<Sale>> {
    if dto.amount <= 0.0 {
        return Err(anyhow::anyhow!("El monto del pago debe ser positivo"));
    }

    let mut aggregate = match repository::get_by_id(id).await? {
        Some(sale) => sale,
        None => return Ok(None),
    };

    aggregate.add_payment(dto.date, dto.amount, dto.comments);
    aggregate.before_write();

    repository::update(&aggregate).await?;
    Ok(Some(aggregate))
}

/// Remove a payment; totals and status are re-derived. Returns the updated
/// sale, or None when the sale or the payment does not exist.
pub async fn delete_payment(id: Uuid, payment_id: &str) -> anyhow::Result<Option<Sale>> {
    let mut aggregate = match repository::get_by_id(id).await? {
        Some(sale) => sale,
        None => return Ok(None),
    };

    if !aggregate.remove_payment(payment_id) {
        return Ok(None);
    }
    aggregate.before_write();

    repository::update(&aggregate).await?;
    Ok(Some(aggregate))
}
