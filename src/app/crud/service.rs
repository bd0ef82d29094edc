//! 通用 CRUD 业务服务

use tracing::{debug, info, warn};

use crate::core::{error::StoreError, record::Record, store::SharedStore};

/// 一类记录的 CRUD 服务，每次请求只做一到两次存储往返
///
/// 请求之间没有任何协调：并发创建 User 时可能读到同一个最新序号，
/// 写出重复的 `userid`；并发更新同一 id 时以最后一次写入为准。
pub struct CrudService<R: Record> {
    store: SharedStore<R>,
}

impl<R: Record> Clone for CrudService<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<R: Record> CrudService<R> {
    pub fn new(store: SharedStore<R>) -> Self {
        Self { store }
    }

    /// 查询失败时返回空列表
    pub async fn list(&self) -> Vec<R> {
        match self.store.find_all().await {
            Ok(records) => records,
            Err(err) => {
                warn!(table = R::TABLE, "listing records failed: {}", err);
                Vec::new()
            }
        }
    }

    pub async fn create(&self, patch: R::Patch) -> Result<R, StoreError> {
        let mut record = R::default();
        record.apply(patch);

        if R::SEQUENCE_COLUMN.is_some() {
            let next = self.next_sequence().await;
            record.set_sequence(next);
        }

        let created = self.store.insert(record).await?;
        info!(table = R::TABLE, id = created.id(), "record created");
        Ok(created)
    }

    /// 返回删除前的快照；找不到记录时返回零值记录，不报错
    pub async fn delete(&self, id: &str) -> R {
        let record = self.fetch(id).await;

        match self.store.delete(record.clone()).await {
            Ok(deleted) => info!(table = R::TABLE, id = deleted.id(), "record deleted"),
            Err(err) => warn!(table = R::TABLE, id, "deleting record failed: {}", err),
        }

        record
    }

    /// 把补丁合并到已存储的记录上再整行保存
    pub async fn update(&self, id: &str, patch: R::Patch) -> Result<R, StoreError> {
        let mut record = self.fetch(id).await;
        record.apply(patch);

        let saved = self.store.save(record).await?;
        info!(table = R::TABLE, id = saved.id(), "record updated");
        Ok(saved)
    }

    // 未命中、查询失败、id 不是整数都落到零值记录
    async fn fetch(&self, id: &str) -> R {
        let Ok(id) = id.parse::<i64>() else {
            debug!(table = R::TABLE, id, "unparsable id, using zero record");
            return R::default();
        };

        match self.store.find_by_id(id).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!(table = R::TABLE, id, "no record found, using zero record");
                R::default()
            }
            Err(err) => {
                warn!(table = R::TABLE, id, "fetching record failed: {}", err);
                R::default()
            }
        }
    }

    // 最新一行的序号加一，读取失败按空表处理
    async fn next_sequence(&self) -> i64 {
        match self.store.latest_sequence().await {
            Ok(latest) => latest.unwrap_or(0) + 1,
            Err(err) => {
                warn!(table = R::TABLE, "reading latest sequence failed: {}", err);
                1
            }
        }
    }
}
