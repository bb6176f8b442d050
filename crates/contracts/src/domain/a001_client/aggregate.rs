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
pub struct ClientId(pub Uuid);

impl ClientId {
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

impl AggregateId for ClientId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ClientId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// A customer of the business. `base.description` holds the display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    #[serde(flatten)]
    pub base: BaseAggregate<ClientId>,

    #[serde(default)]
    pub company: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub address: String,
}

impl Client {
    pub fn new_for_insert(
        code: String,
        name: String,
        company: String,
        email: String,
        phone: String,
        address: String,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(ClientId::new_v4(), code, name);
        base.comment = comment;

        Self {
            base,
            company,
            email,
            phone,
            address,
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

    pub fn update(&mut self, dto: &ClientDto) {
        if let Some(code) = &dto.code {
            self.base.code = code.clone();
        }
        self.base.description = dto.name.clone();
        self.base.comment = dto.comment.clone();
        self.company = dto.company.clone().unwrap_or_default();
        self.email = dto.email.clone().unwrap_or_default();
        self.phone = dto.phone.clone().unwrap_or_default();
        self.address = dto.address.clone().unwrap_or_default();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("El nombre no puede estar vacío".into());
        }
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            return Err("Email inválido".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for Client {
    type Id = ClientId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "client"
    }

    fn element_name() -> &'static str {
        "Cliente"
    }

    fn list_name() -> &'static str {
        "Clientes"
    }

    fn origin() -> Origin {
        Origin::Self_
    }
}

// ============================================================================
// List view
// ============================================================================
impl TableRecord for Client {
    fn matches_text(&self, query: &str) -> bool {
        // Searchable fields: name, company, email
        self.base.description.to_lowercase().contains(query)
            || self.company.to_lowercase().contains(query)
            || self.email.to_lowercase().contains(query)
    }

    fn compare_by_column(&self, other: &Self, column: &str) -> Option<std::cmp::Ordering> {
        match column {
            "name" => Some(
                self.base
                    .description
                    .to_lowercase()
                    .cmp(&other.base.description.to_lowercase()),
            ),
            "company" => Some(self.company.to_lowercase().cmp(&other.company.to_lowercase())),
            "email" => Some(self.email.to_lowercase().cmp(&other.email.to_lowercase())),
            "phone" => Some(self.phone.cmp(&other.phone)),
            _ => None,
        }
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClientDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub name: String,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub comment: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{self, FilterState, PageState, SortSpec};

    fn client(name: &str) -> Client {
        Client::new_for_insert(
            format!("CLT-{}", name),
            name.to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            None,
        )
    }

    #[test]
    fn test_text_search_over_client_fields() {
        let clients = vec![client("Acme"), client("Bravo"), client("Acme Corp")];
        let view = list_view::apply(
            &clients,
            &SortSpec::asc(""),
            &FilterState::with_text("acme"),
            &PageState::default(),
        );
        let names: Vec<&str> = view
            .visible
            .iter()
            .map(|c| c.base.description.as_str())
            .collect();
        assert_eq!(names, vec!["Acme", "Acme Corp"]);
        assert!(!view.is_empty);
    }

    #[test]
    fn test_email_is_searchable() {
        let mut with_email = client("Zeta");
        with_email.email = "ventas@acme.mx".to_string();
        let clients = vec![client("Bravo"), with_email];
        let view = list_view::apply(
            &clients,
            &SortSpec::asc("name"),
            &FilterState::with_text("ACME"),
            &PageState::default(),
        );
        assert_eq!(view.total, 1);
        assert_eq!(view.visible[0].base.description, "Zeta");
    }

    #[test]
    fn test_client_validation() {
        let empty = client("");
        assert!(empty.validate().is_err());

        let mut bad_email = client("Acme");
        bad_email.email = "not-an-email".to_string();
        assert!(bad_email.validate().is_err());

        assert!(client("Acme").validate().is_ok());
    }
}
