use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore, Origin,
};
use crate::shared::list_view::TableRecord;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SaleId(pub Uuid);

impl SaleId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for SaleId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SaleId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Status
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SaleStatus {
    Pagado,
    Parcial,
    #[serde(rename = "No Pagado")]
    #[default]
    NoPagado,
}

impl SaleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::Pagado => "Pagado",
            SaleStatus::Parcial => "Parcial",
            SaleStatus::NoPagado => "No Pagado",
        }
    }

    pub const ALL: [SaleStatus; 3] = [SaleStatus::Pagado, SaleStatus::Parcial, SaleStatus::NoPagado];

    /// Unknown strings fall back to the default status
    pub fn parse(s: &str) -> SaleStatus {
        match s {
            "Pagado" => SaleStatus::Pagado,
            "Parcial" => SaleStatus::Parcial,
            _ => SaleStatus::NoPagado,
        }
    }
}

// ============================================================================
// Lines and payments
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SaleLine {
    #[serde(rename = "productId")]
    pub product_id: Option<String>,
    #[serde(rename = "productName", default)]
    pub product_name: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(rename = "unitPrice", default)]
    pub unit_price: f64,
}

impl SaleLine {
    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalePayment {
    pub id: String,
    pub date: chrono::NaiveDate,
    pub amount: f64,
    #[serde(default)]
    pub comments: String,
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// A completed sale. `base.code` holds the sale number, `base.description`
/// the client display name. `amount_owed` and `status` are derived: they are
/// recomputed from totals on every mutation, never set directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    #[serde(flatten)]
    pub base: BaseAggregate<SaleId>,

    #[serde(rename = "clientId")]
    pub client_id: Option<String>,

    #[serde(rename = "clientName", default)]
    pub client_name: String,

    #[serde(rename = "saleDate")]
    pub sale_date: Option<chrono::NaiveDate>,

    #[serde(default)]
    pub currency: String,

    /// Domestic sale flag (tax treatment differs for exports)
    #[serde(default)]
    pub national: bool,

    #[serde(default)]
    pub items: Vec<SaleLine>,

    #[serde(default)]
    pub payments: Vec<SalePayment>,

    #[serde(rename = "totalAmount", default)]
    pub total_amount: f64,

    #[serde(rename = "amountPaid", default)]
    pub amount_paid: f64,

    #[serde(rename = "amountOwed", default)]
    pub amount_owed: f64,

    #[serde(default)]
    pub status: SaleStatus,
}

impl Sale {
    pub fn new_for_insert(code: String, dto: &SaleDto) -> Self {
        let mut sale = Self {
            base: BaseAggregate::new(SaleId::new_v4(), code, dto.client_name.clone()),
            client_id: dto.client_id.clone(),
            client_name: dto.client_name.clone(),
            sale_date: dto.sale_date,
            currency: dto.currency.clone().unwrap_or_else(|| "MXN".into()),
            national: dto.national.unwrap_or(true),
            items: dto.items.clone(),
            payments: Vec::new(),
            total_amount: dto.total_amount.unwrap_or_default(),
            amount_paid: 0.0,
            amount_owed: 0.0,
            status: SaleStatus::NoPagado,
        };
        sale.base.comment = dto.comment.clone();
        if sale.total_amount == 0.0 {
            sale.total_amount = sale.items_total();
        }
        sale.recalculate();
        sale
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn sale_number(&self) -> &str {
        &self.base.code
    }

    /// Sum of `quantity * unit_price` across all lines
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(SaleLine::line_total).sum()
    }

    /// Re-derive `amount_paid`, `amount_owed` and `status` from the payment
    /// list. Must run after every payment mutation.
    pub fn recalculate(&mut self) {
        self.amount_paid = self.payments.iter().map(|p| p.amount).sum();
        self.amount_owed = self.total_amount - self.amount_paid;
        self.status = if self.amount_owed <= 0.0 && self.total_amount > 0.0 {
            SaleStatus::Pagado
        } else if self.amount_paid > 0.0 {
            SaleStatus::Parcial
        } else {
            SaleStatus::NoPagado
        };
    }

    pub fn add_payment(&mut self, date: chrono::NaiveDate, amount: f64, comments: String) {
        self.payments.push(SalePayment {
            id: Uuid::new_v4().to_string(),
            date,
            amount,
            comments,
        });
        self.recalculate();
    }

    /// Removes a payment by id. Returns false when no payment matched.
    pub fn remove_payment(&mut self, payment_id: &str) -> bool {
        let before = self.payments.len();
        self.payments.retain(|p| p.id != payment_id);
        let removed = self.payments.len() < before;
        if removed {
            self.recalculate();
        }
        removed
    }

    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    pub fn update(&mut self, dto: &SaleDto) {
        self.client_id = dto.client_id.clone();
        self.client_name = dto.client_name.clone();
        self.base.description = dto.client_name.clone();
        self.base.comment = dto.comment.clone();
        self.sale_date = dto.sale_date;
        if let Some(currency) = &dto.currency {
            self.currency = currency.clone();
        }
        if let Some(national) = dto.national {
            self.national = national;
        }
        self.items = dto.items.clone();
        self.total_amount = dto.total_amount.unwrap_or_else(|| self.items_total());
        self.recalculate();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.trim().is_empty() {
            return Err("El número de venta no puede estar vacío".into());
        }
        if self.client_name.trim().is_empty() {
            return Err("La venta requiere un cliente".into());
        }
        if self.total_amount < 0.0 {
            return Err("El total no puede ser negativo".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for Sale {
    type Id = SaleId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn events(&self) -> &EventStore {
        &self.base.events
    }

    fn events_mut(&mut self) -> &mut EventStore {
        &mut self.base.events
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "sale"
    }

    fn element_name() -> &'static str {
        "Venta"
    }

    fn list_name() -> &'static str {
        "Ventas"
    }

    fn origin() -> Origin {
        Origin::Self_
    }
}

// ============================================================================
// List view
// ============================================================================
impl TableRecord for Sale {
    fn matches_text(&self, query: &str) -> bool {
        // Searchable fields: sale number and client name
        self.base.code.to_lowercase().contains(query)
            || self.client_name.to_lowercase().contains(query)
    }

    fn compare_by_column(&self, other: &Self, column: &str) -> Option<std::cmp::Ordering> {
        match column {
            "saleNumber" => Some(self.base.code.cmp(&other.base.code)),
            "customerName" => Some(
                self.client_name
                    .to_lowercase()
                    .cmp(&other.client_name.to_lowercase()),
            ),
            "saleDate" => Some(self.sale_date.cmp(&other.sale_date)),
            "totalAmount" => self.total_amount.partial_cmp(&other.total_amount),
            "national" => Some(self.national.cmp(&other.national)),
            "amountOwed" => self.amount_owed.partial_cmp(&other.amount_owed),
            "status" => Some(self.status.as_str().cmp(other.status.as_str())),
            _ => None,
        }
    }

    fn status_key(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

// ============================================================================
// DTOs
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SaleDto {
    pub id: Option<String>,
    #[serde(rename = "saleNumber")]
    pub sale_number: Option<String>,
    #[serde(rename = "clientId")]
    pub client_id: Option<String>,
    #[serde(rename = "clientName", default)]
    pub client_name: String,
    #[serde(rename = "saleDate")]
    pub sale_date: Option<chrono::NaiveDate>,
    pub currency: Option<String>,
    pub national: Option<bool>,
    #[serde(default)]
    pub items: Vec<SaleLine>,
    #[serde(rename = "totalAmount")]
    pub total_amount: Option<f64>,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PaymentDto {
    pub date: chrono::NaiveDate,
    pub amount: f64,
    #[serde(default)]
    pub comments: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sale() -> Sale {
        let dto = SaleDto {
            client_name: "Acme".into(),
            total_amount: Some(1000.0),
            ..Default::default()
        };
        Sale::new_for_insert("VTA-001".into(), &dto)
    }

    #[test]
    fn test_new_sale_owes_full_amount() {
        let sale = sample_sale();
        assert_eq!(sale.amount_owed, 1000.0);
        assert_eq!(sale.status, SaleStatus::NoPagado);
    }

    #[test]
    fn test_amount_owed_consistent_after_payments() {
        let mut sale = sample_sale();
        let date = chrono::NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

        sale.add_payment(date, 400.0, "anticipo".into());
        assert_eq!(sale.amount_owed, sale.total_amount - sale.amount_paid);
        assert_eq!(sale.status, SaleStatus::Parcial);

        sale.add_payment(date, 600.0, "liquidación".into());
        assert_eq!(sale.amount_owed, 0.0);
        assert_eq!(sale.status, SaleStatus::Pagado);

        let payment_id = sale.payments[1].id.clone();
        assert!(sale.remove_payment(&payment_id));
        assert_eq!(sale.amount_paid, 400.0);
        assert_eq!(sale.amount_owed, 600.0);
        assert_eq!(sale.status, SaleStatus::Parcial);
    }

    #[test]
    fn test_remove_unknown_payment_is_noop() {
        let mut sale = sample_sale();
        assert!(!sale.remove_payment("missing"));
        assert_eq!(sale.amount_owed, 1000.0);
    }

    #[test]
    fn test_total_defaults_to_items_total() {
        let dto = SaleDto {
            client_name: "Bravo".into(),
            items: vec![
                SaleLine {
                    product_id: None,
                    product_name: "Silla".into(),
                    quantity: 4.0,
                    unit_price: 150.0,
                },
                SaleLine {
                    product_id: None,
                    product_name: "Mesa".into(),
                    quantity: 1.0,
                    unit_price: 900.0,
                },
            ],
            ..Default::default()
        };
        let sale = Sale::new_for_insert("VTA-002".into(), &dto);
        assert_eq!(sale.total_amount, 1500.0);
        assert_eq!(sale.amount_owed, 1500.0);
    }
}
