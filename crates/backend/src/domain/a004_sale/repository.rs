use chrono::Utc;
use contracts::domain::a004_sale::aggregate::{Sale, SaleId, SaleLine, SalePayment, SaleStatus};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a004_sale")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub client_id: Option<String>,
    pub client_name: String,
    pub sale_date: Option<String>,
    pub currency: String,
    pub national: bool,
    /// JSON array of sale lines
    pub items: String,
    /// JSON array of payments
    pub payments: String,
    pub total_amount: f64,
    pub amount_paid: f64,
    pub amount_owed: f64,
    pub status: String,
    pub is_deleted: bool,
    pub is_posted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Sale {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            is_posted: m.is_posted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let items: Vec<SaleLine> = serde_json::from_str(&m.items).unwrap_or_default();
        let payments: Vec<SalePayment> = serde_json::from_str(&m.payments).unwrap_or_default();

        Sale {
            base: BaseAggregate::with_metadata(
                SaleId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            client_id: m.client_id,
            client_name: m.client_name,
            sale_date: m
                .sale_date
                .as_deref()
                .and_then(|s| s.parse::<chrono::NaiveDate>().ok()),
            currency: m.currency,
            national: m.national,
            items,
            payments,
            total_amount: m.total_amount,
            amount_paid: m.amount_paid,
            amount_owed: m.amount_owed,
            status: SaleStatus::parse(&m.status),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &Sale, for_insert: bool) -> anyhow::Result<ActiveModel> {
    Ok(ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        client_id: Set(aggregate.client_id.clone()),
        client_name: Set(aggregate.client_name.clone()),
        sale_date: Set(aggregate.sale_date.map(|d| d.to_string())),
        currency: Set(aggregate.currency.clone()),
        national: Set(aggregate.national),
        items: Set(serde_json::to_string(&aggregate.items)?),
        payments: Set(serde_json::to_string(&aggregate.payments)?),
        total_amount: Set(aggregate.total_amount),
        amount_paid: Set(aggregate.amount_paid),
        amount_owed: Set(aggregate.amount_owed),
        status: Set(aggregate.status.as_str().to_string()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        is_posted: Set(aggregate.base.metadata.is_posted),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
        created_at: if for_insert {
            Set(Some(aggregate.base.metadata.created_at))
        } else {
            sea_orm::ActiveValue::NotSet
        },
    })
}

pub async fn list_all() -> anyhow::Result<Vec<Sale>> {
    // Newest sales first; the view pipeline re-sorts client-side
    let items: Vec<Sale> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::SaleDate)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Sale>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Sale) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate, true)?.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Sale) -> anyhow::Result<()> {
    to_active(aggregate, false)?.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
