//! 进程内存储
//!
//! 与 Postgres 实现保持同样的语义：自增 id、软删除、
//! `latest_sequence` 包含已删除的行。`DIALECT=memory` 时使用，测试也依赖它。

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::core::{error::StoreError, record::Record, store::RecordStore};

struct Table<R> {
    // 按 id 升序追加，从不物理删除
    rows: Vec<R>,
    last_id: i64,
}

pub struct MemoryStore<R> {
    table: Mutex<Table<R>>,
}

impl<R> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table {
                rows: Vec::new(),
                last_id: 0,
            }),
        }
    }
}

impl<R> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for MemoryStore<R> {
    async fn find_all(&self) -> Result<Vec<R>, StoreError> {
        let table = self.table.lock().await;
        Ok(table
            .rows
            .iter()
            .filter(|row| !row.model().is_deleted())
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<R>, StoreError> {
        let table = self.table.lock().await;
        Ok(table
            .rows
            .iter()
            .find(|row| row.id() == id && !row.model().is_deleted())
            .cloned())
    }

    async fn insert(&self, mut record: R) -> Result<R, StoreError> {
        let mut table = self.table.lock().await;
        table.last_id += 1;

        let now = Utc::now();
        let model = record.model_mut();
        model.id = table.last_id;
        model.created_at = now;
        model.updated_at = now;
        model.deleted_at = None;

        table.rows.push(record.clone());
        Ok(record)
    }

    async fn save(&self, mut record: R) -> Result<R, StoreError> {
        if record.model().is_new() {
            return self.insert(record).await;
        }

        let mut table = self.table.lock().await;
        let id = record.id();
        let row = table
            .rows
            .iter_mut()
            .find(|row| row.id() == id)
            .ok_or_else(|| StoreError::new(format!("no {} row with id {}", R::TABLE, id)))?;

        record.model_mut().updated_at = Utc::now();
        *row = record.clone();
        Ok(record)
    }

    async fn delete(&self, mut record: R) -> Result<R, StoreError> {
        if record.model().is_new() {
            return Ok(record);
        }

        let now = Utc::now();
        let mut table = self.table.lock().await;
        let id = record.id();
        if let Some(row) = table
            .rows
            .iter_mut()
            .find(|row| row.id() == id && !row.model().is_deleted())
        {
            row.model_mut().deleted_at = Some(now);
        }

        record.model_mut().deleted_at = Some(now);
        Ok(record)
    }

    async fn latest_sequence(&self) -> Result<Option<i64>, StoreError> {
        if R::SEQUENCE_COLUMN.is_none() {
            return Ok(None);
        }

        let table = self.table.lock().await;
        Ok(table.rows.last().and_then(|row| row.sequence()))
    }
}
