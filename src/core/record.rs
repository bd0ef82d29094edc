//! 记录抽象
//!
//! Person 和 User 两类实体结构几乎一致，CRUD 逻辑只实现一次，
//! 通过 [`Record`] 描述每类记录的表名、列、元数据访问和可选的序号列。

use chrono::{DateTime, TimeZone, Utc};
use serde::{de::DeserializeOwned, Serialize};

/// 内嵌元数据：代理主键和审计时间戳
///
/// 线上字段名保持 `ID` / `CreatedAt` / `UpdatedAt` / `DeletedAt`。
/// `deleted_at` 非空表示记录已被软删除。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Model {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "UpdatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "DeletedAt")]
    pub deleted_at: Option<DateTime<Utc>>,
}

// 零值记录的时间戳为 0001-01-01T00:00:00Z
impl Default for Model {
    fn default() -> Self {
        let zero = zero_time();
        Self {
            id: 0,
            created_at: zero,
            updated_at: zero,
            deleted_at: None,
        }
    }
}

fn zero_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

impl Model {
    /// id 为 0 表示从未持久化
    pub fn is_new(&self) -> bool {
        self.id == 0
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// 业务列的取值，按 [`Record::COLUMNS`] 的顺序绑定到 SQL 参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Column {
    Text(String),
    Integer(i64),
}

/// 记录的能力集合
pub trait Record: Clone + Default + Serialize + Send + Sync + 'static {
    /// 请求体解码目标：所有字段可选，缺失的字段不覆盖原值
    type Patch: DeserializeOwned + Default + Send + 'static;

    const TABLE: &'static str;

    /// 业务列名（不含 id 和时间戳）
    const COLUMNS: &'static [&'static str];

    /// 请求体中可写的线上字段名
    const FIELDS: &'static [&'static str];

    /// 应用层维护的序号列，只有 User 有
    const SEQUENCE_COLUMN: Option<&'static str> = None;

    fn model(&self) -> &Model;

    fn model_mut(&mut self) -> &mut Model;

    /// 把补丁中出现的字段写到当前记录上
    fn apply(&mut self, patch: Self::Patch);

    /// 与 `COLUMNS` 一一对应的列值
    fn columns(&self) -> Vec<Column>;

    fn sequence(&self) -> Option<i64> {
        None
    }

    fn set_sequence(&mut self, _value: i64) {}

    fn id(&self) -> i64 {
        self.model().id
    }
}

/// 仅在补丁给出值时覆盖目标字段
pub(crate) fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}
