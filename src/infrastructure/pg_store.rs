//! Postgres 存储实现

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{
    postgres::{PgArguments, PgRow},
    query::QueryAs,
    FromRow, PgPool, Postgres,
};

use crate::core::{
    error::StoreError,
    record::{Column, Record},
    store::RecordStore,
};

/// 共享同一个连接池，按记录类型区分表
pub struct PgStore<R> {
    pool: PgPool,
    _record: PhantomData<fn() -> R>,
}

impl<R> PgStore<R> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _record: PhantomData,
        }
    }
}

type PgQueryAs<'q, O> = QueryAs<'q, Postgres, O, PgArguments>;

fn bind_column<O>(query: PgQueryAs<'_, O>, column: Column) -> PgQueryAs<'_, O> {
    match column {
        Column::Text(value) => query.bind(value),
        Column::Integer(value) => query.bind(value),
    }
}

fn insert_sql<R: Record>() -> String {
    let columns = R::COLUMNS.join(", ");
    let placeholders = (4..4 + R::COLUMNS.len())
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} (created_at, updated_at, deleted_at, {}) VALUES ($1, $2, $3, {}) RETURNING *",
        R::TABLE,
        columns,
        placeholders
    )
}

fn update_sql<R: Record>() -> String {
    let assignments = R::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{} = ${}", column, i + 4))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "UPDATE {} SET created_at = $1, updated_at = $2, deleted_at = $3, {} WHERE id = ${} RETURNING *",
        R::TABLE,
        assignments,
        R::COLUMNS.len() + 4
    )
}

#[async_trait]
impl<R> RecordStore<R> for PgStore<R>
where
    R: Record + for<'r> FromRow<'r, PgRow> + Unpin,
{
    async fn find_all(&self) -> Result<Vec<R>, StoreError> {
        let sql = format!(
            "SELECT * FROM {} WHERE deleted_at IS NULL ORDER BY id",
            R::TABLE
        );
        let records = sqlx::query_as::<_, R>(&sql).fetch_all(&self.pool).await?;
        Ok(records)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<R>, StoreError> {
        let sql = format!(
            "SELECT * FROM {} WHERE id = $1 AND deleted_at IS NULL ORDER BY id LIMIT 1",
            R::TABLE
        );
        let record = sqlx::query_as::<_, R>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(record)
    }

    async fn insert(&self, record: R) -> Result<R, StoreError> {
        let sql = insert_sql::<R>();
        let now = Utc::now();
        let mut query = sqlx::query_as::<_, R>(&sql)
            .bind(now)
            .bind(now)
            .bind(None::<DateTime<Utc>>);
        for column in record.columns() {
            query = bind_column(query, column);
        }
        let inserted = query.fetch_one(&self.pool).await?;
        Ok(inserted)
    }

    async fn save(&self, mut record: R) -> Result<R, StoreError> {
        if record.model().is_new() {
            return self.insert(record).await;
        }

        record.model_mut().updated_at = Utc::now();
        let sql = update_sql::<R>();
        let model = record.model().clone();
        let mut query = sqlx::query_as::<_, R>(&sql)
            .bind(model.created_at)
            .bind(model.updated_at)
            .bind(model.deleted_at);
        for column in record.columns() {
            query = bind_column(query, column);
        }
        query
            .bind(model.id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| StoreError::new(format!("no {} row with id {}", R::TABLE, model.id)))
    }

    async fn delete(&self, mut record: R) -> Result<R, StoreError> {
        if record.model().is_new() {
            return Ok(record);
        }

        let now = Utc::now();
        let sql = format!(
            "UPDATE {} SET deleted_at = $1 WHERE id = $2 AND deleted_at IS NULL",
            R::TABLE
        );
        sqlx::query(&sql)
            .bind(now)
            .bind(record.id())
            .execute(&self.pool)
            .await?;

        record.model_mut().deleted_at = Some(now);
        Ok(record)
    }

    async fn latest_sequence(&self) -> Result<Option<i64>, StoreError> {
        let Some(column) = R::SEQUENCE_COLUMN else {
            return Ok(None);
        };

        // 不过滤 deleted_at，已删除的行也参与计算
        let sql = format!("SELECT {} FROM {} ORDER BY id DESC LIMIT 1", column, R::TABLE);
        let latest = sqlx::query_scalar::<_, i64>(&sql)
            .fetch_optional(&self.pool)
            .await?;
        Ok(latest)
    }
}
