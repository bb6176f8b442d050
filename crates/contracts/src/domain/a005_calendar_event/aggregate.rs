use crate::domain::common::{
    AggregateId, AggregateRoot, BaseAggregate, EntityMetadata, EventStore, Origin,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarEventId(pub Uuid);

impl CalendarEventId {
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

impl AggregateId for CalendarEventId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CalendarEventId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// A scheduled event. `base.description` holds the title; rendering is the
/// calendar widget's job, this aggregate only stores the data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(flatten)]
    pub base: BaseAggregate<CalendarEventId>,

    /// Body text shown in the event dialog
    #[serde(rename = "bodyText", default)]
    pub body_text: String,

    pub start: chrono::DateTime<chrono::Utc>,

    pub end: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(rename = "allDay", default)]
    pub all_day: bool,

    /// Display color token, opaque to the backend
    #[serde(default)]
    pub color: String,
}

impl CalendarEvent {
    pub fn new_for_insert(code: String, dto: &CalendarEventDto) -> Self {
        let mut base = BaseAggregate::new(CalendarEventId::new_v4(), code, dto.title.clone());
        base.comment = dto.comment.clone();

        Self {
            base,
            body_text: dto.body_text.clone().unwrap_or_default(),
            start: dto.start,
            end: dto.end,
            all_day: dto.all_day.unwrap_or(false),
            color: dto.color.clone().unwrap_or_default(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn title(&self) -> &str {
        &self.base.description
    }

    pub fn touch_updated(&mut self) {
        self.base.touch();
    }

    pub fn update(&mut self, dto: &CalendarEventDto) {
        self.base.description = dto.title.clone();
        self.base.comment = dto.comment.clone();
        self.body_text = dto.body_text.clone().unwrap_or_default();
        self.start = dto.start;
        self.end = dto.end;
        self.all_day = dto.all_day.unwrap_or(self.all_day);
        self.color = dto.color.clone().unwrap_or_default();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("El título no puede estar vacío".into());
        }
        if let Some(end) = self.end {
            if end < self.start {
                return Err("La fecha final no puede ser anterior al inicio".into());
            }
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.touch_updated();
    }
}

impl AggregateRoot for CalendarEvent {
    type Id = CalendarEventId;

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
        "a005"
    }

    fn collection_name() -> &'static str {
        "calendar_event"
    }

    fn element_name() -> &'static str {
        "Evento"
    }

    fn list_name() -> &'static str {
        "Eventos"
    }

    fn origin() -> Origin {
        Origin::Self_
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEventDto {
    pub id: Option<String>,
    pub code: Option<String>,
    pub title: String,
    #[serde(rename = "bodyText")]
    pub body_text: Option<String>,
    #[serde(default = "default_start")]
    pub start: chrono::DateTime<chrono::Utc>,
    pub end: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "allDay")]
    pub all_day: Option<bool>,
    pub color: Option<String>,
    pub comment: Option<String>,
}

fn default_start() -> chrono::DateTime<chrono::Utc> {
    chrono::Utc::now()
}
