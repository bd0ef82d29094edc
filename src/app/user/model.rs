//! User 数据模型

use serde::{Deserialize, Serialize};

use crate::core::record::{merge, Column, Model, Record};

/// 与 Person 相同的字段，外加应用层分配的 `userid`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct User {
    #[serde(flatten)]
    #[cfg_attr(feature = "database", sqlx(flatten))]
    pub model: Model,

    #[serde(rename = "firstname")]
    pub name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
    pub age: String,
    pub birthdate: String,
    #[serde(rename = "userid")]
    pub user_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserPatch {
    #[serde(rename = "firstname")]
    pub name: Option<String>,
    #[serde(rename = "lastname")]
    pub last_name: Option<String>,
    pub age: Option<String>,
    pub birthdate: Option<String>,
    #[serde(rename = "userid")]
    pub user_id: Option<i64>,
}

impl Record for User {
    type Patch = UserPatch;

    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] =
        &["name", "last_name", "age", "birthdate", "user_id"];
    const FIELDS: &'static [&'static str] =
        &["firstname", "lastname", "age", "birthdate", "userid"];
    const SEQUENCE_COLUMN: Option<&'static str> = Some("user_id");

    fn model(&self) -> &Model {
        &self.model
    }

    fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }

    fn apply(&mut self, patch: UserPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.last_name, patch.last_name);
        merge(&mut self.age, patch.age);
        merge(&mut self.birthdate, patch.birthdate);
        merge(&mut self.user_id, patch.user_id);
    }

    fn columns(&self) -> Vec<Column> {
        vec![
            Column::Text(self.name.clone()),
            Column::Text(self.last_name.clone()),
            Column::Text(self.age.clone()),
            Column::Text(self.birthdate.clone()),
            Column::Integer(self.user_id),
        ]
    }

    fn sequence(&self) -> Option<i64> {
        Some(self.user_id)
    }

    fn set_sequence(&mut self, value: i64) {
        self.user_id = value;
    }
}
