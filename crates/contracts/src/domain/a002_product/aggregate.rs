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
pub struct ProductId(pub Uuid);

impl ProductId {
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

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// A catalog product. `base.description` holds the product name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    /// Free-form characteristics (size, material, finish, ...)
    #[serde(default)]
    pub characteristics: String,

    /// Unit of measure (pza, kg, m, ...)
    #[serde(default)]
    pub unit: String,
}

impl Product {
    pub fn new_for_insert(
        code: String,
        name: String,
        characteristics: String,
        unit: String,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(ProductId::new_v4(), code, name);
        base.comment = comment;

        Self {
            base,
            characteristics,
            unit,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn name(&self) -> &str {
        &self.base.description
    }

    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    pub fn update(&mut self, dto: &ProductDto) {
        if let Some(code) = &dto.code {
            self.base.code = code.clone();
        }
        self.base.description = dto.name.clone();
        self.base.comment = dto.comment.clone();
        self.characteristics = dto.characteristics.clone().unwrap_or_default();
        self.unit = dto.unit.clone().unwrap_or_default();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("El nombre no puede estar vacío".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "product"
    }

    fn element_name() -> &'static str {
        "Producto"
    }

    fn list_name() -> &'static str {
        "Productos"
    }

    fn origin() -> Origin {
        Origin::Self_
    }
}

// ============================================================================
// List view
// ============================================================================
impl TableRecord for Product {
    fn matches_text(&self, query: &str) -> bool {
        // Searchable fields: name, characteristics
        self.base.description.to_lowercase().contains(query)
            || self.characteristics.to_lowercase().contains(query)
    }

    fn compare_by_column(&self, other: &Self, column: &str) -> Option<std::cmp::Ordering> {
        match column {
            "name" => Some(
                self.base
                    .description
                    .to_lowercase()
                    .cmp(&other.base.description.to_lowercase()),
            ),
            "characteristics" => Some(
                self.characteristics
                    .to_lowercase()
                    .cmp(&other.characteristics.to_lowercase()),
            ),
            "unit" => Some(self.unit.cmp(&other.unit)),
            _ => None,
        }
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub name: String,
    pub characteristics: Option<String>,
    pub unit: Option<String>,
    pub comment: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}
