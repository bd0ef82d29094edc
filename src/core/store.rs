//! 记录存储网关

use std::sync::Arc;

use async_trait::async_trait;

use super::{error::StoreError, record::Record};

/// 处理器需要的五个基本操作，外加 User 序号计算用的 `latest_sequence`
///
/// 每个方法对应一次后端往返；查询类操作都排除已软删除的行。
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// 所有未删除的记录，按 id 排序
    async fn find_all(&self) -> Result<Vec<R>, StoreError>;

    /// 主键匹配的第一条未删除记录
    async fn find_by_id(&self, id: i64) -> Result<Option<R>, StoreError>;

    /// 写入新记录，由存储分配 id 并填写创建/更新时间
    async fn insert(&self, record: R) -> Result<R, StoreError>;

    /// 按主键整行覆盖；id 为 0 的记录按新记录写入
    async fn save(&self, record: R) -> Result<R, StoreError>;

    /// 软删除：只设置删除时间，行本身保留
    async fn delete(&self, record: R) -> Result<R, StoreError>;

    /// id 最大的那一行（包括已删除的）的序号值
    async fn latest_sequence(&self) -> Result<Option<i64>, StoreError>;
}

pub type SharedStore<R> = Arc<dyn RecordStore<R>>;
