use super::{EntityMetadata, EventStore, Origin};

/// Trait for aggregate roots
///
/// Defines the required instance accessors and class-level metadata for
/// every aggregate in the system.
pub trait AggregateRoot {
    /// Aggregate identifier type
    type Id;

    // ============================================================================
    // Instance accessors (data of a concrete record)
    // ============================================================================

    /// Record ID
    fn id(&self) -> Self::Id;

    /// Business code (e.g. "VTA-2025-001")
    fn code(&self) -> &str;

    /// Description / display name
    fn description(&self) -> &str;

    /// Lifecycle metadata
    fn metadata(&self) -> &EntityMetadata;

    /// Mutable lifecycle metadata
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    /// Domain event container
    fn events(&self) -> &EventStore;

    /// Mutable domain event container
    fn events_mut(&mut self) -> &mut EventStore;

    // ============================================================================
    // Aggregate class metadata (static data)
    // ============================================================================

    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name for the database (e.g. "client")
    fn collection_name() -> &'static str;

    /// Element name for the UI (singular, e.g. "Cliente")
    fn element_name() -> &'static str;

    /// List name for the UI (plural, e.g. "Clientes")
    fn list_name() -> &'static str;

    /// Data origin of the aggregate
    fn origin() -> Origin;

    // ============================================================================
    // Default implementations
    // ============================================================================

    /// Full aggregate name (e.g. "a001_client")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Database table prefix (e.g. "a001_client_")
    fn table_prefix() -> String {
        format!("{}_", Self::full_name())
    }
}
