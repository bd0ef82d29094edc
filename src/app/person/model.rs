//! Person 数据模型

use serde::{Deserialize, Serialize};

use crate::core::record::{merge, Column, Model, Record};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Person {
    #[serde(flatten)]
    #[cfg_attr(feature = "database", sqlx(flatten))]
    pub model: Model,

    #[serde(rename = "firstname")]
    pub name: String,
    #[serde(rename = "lastname")]
    pub last_name: String,
    // age 和 birthdate 都按原样保存为文本
    pub age: String,
    pub birthdate: String,
}

/// Person 请求体，未出现的字段为 None
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonPatch {
    #[serde(rename = "firstname")]
    pub name: Option<String>,
    #[serde(rename = "lastname")]
    pub last_name: Option<String>,
    pub age: Option<String>,
    pub birthdate: Option<String>,
}

impl Record for Person {
    type Patch = PersonPatch;

    const TABLE: &'static str = "people";
    const COLUMNS: &'static [&'static str] = &["name", "last_name", "age", "birthdate"];
    const FIELDS: &'static [&'static str] = &["firstname", "lastname", "age", "birthdate"];

    fn model(&self) -> &Model {
        &self.model
    }

    fn model_mut(&mut self) -> &mut Model {
        &mut self.model
    }

    fn apply(&mut self, patch: PersonPatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.last_name, patch.last_name);
        merge(&mut self.age, patch.age);
        merge(&mut self.birthdate, patch.birthdate);
    }

    fn columns(&self) -> Vec<Column> {
        vec![
            Column::Text(self.name.clone()),
            Column::Text(self.last_name.clone()),
            Column::Text(self.age.clone()),
            Column::Text(self.birthdate.clone()),
        ]
    }
}
