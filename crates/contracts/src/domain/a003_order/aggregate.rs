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
pub struct OrderId(pub Uuid);

impl OrderId {
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

impl AggregateId for OrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(OrderId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Status enums
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pendiente,
    Completado,
    Descartado,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pendiente => "Pendiente",
            OrderStatus::Completado => "Completado",
            OrderStatus::Descartado => "Descartado",
        }
    }

    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pendiente,
        OrderStatus::Completado,
        OrderStatus::Descartado,
    ];

    /// Unknown strings fall back to the default status
    pub fn parse(s: &str) -> OrderStatus {
        match s {
            "Completado" => OrderStatus::Completado,
            "Descartado" => OrderStatus::Descartado,
            _ => OrderStatus::Pendiente,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FulfillmentStatus {
    Completo,
    Parcial,
    #[serde(rename = "No Cumplido")]
    #[default]
    NoCumplido,
}

impl FulfillmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FulfillmentStatus::Completo => "Completo",
            FulfillmentStatus::Parcial => "Parcial",
            FulfillmentStatus::NoCumplido => "No Cumplido",
        }
    }

    pub fn parse(s: &str) -> FulfillmentStatus {
        match s {
            "Completo" => FulfillmentStatus::Completo,
            "Parcial" => FulfillmentStatus::Parcial,
            _ => FulfillmentStatus::NoCumplido,
        }
    }
}

// ============================================================================
// Line items
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderLine {
    #[serde(rename = "productId")]
    pub product_id: Option<String>,
    #[serde(rename = "productName", default)]
    pub product_name: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(rename = "unitPrice", default)]
    pub unit_price: f64,
}

impl OrderLine {
    pub fn line_total(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// A client order. `base.description` holds a short display summary
/// (client name), `base.code` the order number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(flatten)]
    pub base: BaseAggregate<OrderId>,

    #[serde(rename = "clientId")]
    pub client_id: Option<String>,

    #[serde(rename = "clientName", default)]
    pub client_name: String,

    #[serde(default)]
    pub items: Vec<OrderLine>,

    #[serde(rename = "deliveryDate")]
    pub delivery_date: Option<chrono::NaiveDate>,

    #[serde(rename = "negotiatedPrice", default)]
    pub negotiated_price: f64,

    #[serde(default)]
    pub currency: String,

    #[serde(default)]
    pub status: OrderStatus,

    #[serde(rename = "fulfillmentStatus", default)]
    pub fulfillment_status: FulfillmentStatus,
}

impl Order {
    pub fn new_for_insert(code: String, dto: &OrderDto) -> Self {
        let mut order = Self {
            base: BaseAggregate::new(OrderId::new_v4(), code, dto.client_name.clone()),
            client_id: dto.client_id.clone(),
            client_name: dto.client_name.clone(),
            items: dto.items.clone(),
            delivery_date: dto.delivery_date,
            negotiated_price: dto.negotiated_price.unwrap_or_default(),
            currency: dto.currency.clone().unwrap_or_else(|| "MXN".into()),
            status: dto.status.unwrap_or_default(),
            fulfillment_status: dto.fulfillment_status.unwrap_or_default(),
        };
        order.base.comment = dto.comment.clone();
        order
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Sum of `quantity * unit_price` across all lines
    pub fn items_total(&self) -> f64 {
        self.items.iter().map(OrderLine::line_total).sum()
    }

    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    pub fn update(&mut self, dto: &OrderDto) {
        self.client_id = dto.client_id.clone();
        self.client_name = dto.client_name.clone();
        self.base.description = dto.client_name.clone();
        self.base.comment = dto.comment.clone();
        self.items = dto.items.clone();
        self.delivery_date = dto.delivery_date;
        if let Some(price) = dto.negotiated_price {
            self.negotiated_price = price;
        }
        if let Some(currency) = &dto.currency {
            self.currency = currency.clone();
        }
        if let Some(status) = dto.status {
            self.status = status;
        }
        if let Some(fulfillment) = dto.fulfillment_status {
            self.fulfillment_status = fulfillment;
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.client_name.trim().is_empty() {
            return Err("El pedido requiere un cliente".into());
        }
        if self.items.is_empty() {
            return Err("El pedido requiere al menos un producto".into());
        }
        if self.items.iter().any(|line| line.quantity <= 0.0) {
            return Err("Cantidad inválida en los productos".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for Order {
    type Id = OrderId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "order"
    }

    fn element_name() -> &'static str {
        "Pedido"
    }

    fn list_name() -> &'static str {
        "Pedidos"
    }

    fn origin() -> Origin {
        Origin::Self_
    }
}

// ============================================================================
// List view
// ============================================================================
impl TableRecord for Order {
    fn matches_text(&self, query: &str) -> bool {
        // Searchable fields: client name plus every line's product name
        self.client_name.to_lowercase().contains(query)
            || self
                .items
                .iter()
                .any(|line| line.product_name.to_lowercase().contains(query))
    }

    fn compare_by_column(&self, other: &Self, column: &str) -> Option<std::cmp::Ordering> {
        match column {
            "deliveryDate" => Some(self.delivery_date.cmp(&other.delivery_date)),
            "client" => Some(
                self.client_name
                    .to_lowercase()
                    .cmp(&other.client_name.to_lowercase()),
            ),
            "negotiatedPrice" => self.negotiated_price.partial_cmp(&other.negotiated_price),
            "currency" => Some(self.currency.cmp(&other.currency)),
            "status" => Some(self.status.as_str().cmp(other.status.as_str())),
            "fulfillmentStatus" => Some(
                self.fulfillment_status
                    .as_str()
                    .cmp(other.fulfillment_status.as_str()),
            ),
            _ => None,
        }
    }

    fn status_key(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderDto {
    pub id: Option<String>,
    pub code: Option<String>,
    #[serde(rename = "clientId")]
    pub client_id: Option<String>,
    #[serde(rename = "clientName", default)]
    pub client_name: String,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    #[serde(rename = "deliveryDate")]
    pub delivery_date: Option<chrono::NaiveDate>,
    #[serde(rename = "negotiatedPrice")]
    pub negotiated_price: Option<f64>,
    pub currency: Option<String>,
    pub status: Option<OrderStatus>,
    #[serde(rename = "fulfillmentStatus")]
    pub fulfillment_status: Option<FulfillmentStatus>,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_total() {
        let line = OrderLine {
            product_id: None,
            product_name: "Mesa".into(),
            quantity: 3.0,
            unit_price: 250.0,
        };
        assert_eq!(line.line_total(), 750.0);
    }

    #[test]
    fn test_order_requires_items() {
        let dto = OrderDto {
            client_name: "Acme".into(),
            ..Default::default()
        };
        let order = Order::new_for_insert("PED-001".into(), &dto);
        assert!(order.validate().is_err());
    }
}
