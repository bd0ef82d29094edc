//! 请求体解码

use axum::body::Bytes;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

/// 宽松地把请求体解码为补丁
///
/// 不要求 `Content-Type`。请求体按字段逐个解码：
/// - 键名与 `fields` 中的线上字段名忽略大小写匹配，优先精确匹配
/// - 类型不符的字段单独跳过，其余字段照常生效
/// - 空体、非对象或无法解析的 JSON 当作空补丁
pub fn decode_patch<P>(body: &Bytes, fields: &[&str]) -> P
where
    P: DeserializeOwned + Default,
{
    if body.is_empty() {
        return P::default();
    }

    let object = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(object)) => object,
        Ok(other) => {
            debug!("ignoring non-object request body: {}", other);
            return P::default();
        }
        Err(err) => {
            debug!("ignoring undecodable request body: {}", err);
            return P::default();
        }
    };

    let mut accepted = Map::new();
    for (key, value) in object {
        let Some(field) = match_field(&key, fields) else {
            continue;
        };

        let single = Map::from_iter([(field.to_string(), value.clone())]);
        match serde_json::from_value::<P>(Value::Object(single)) {
            Ok(_) => {
                accepted.insert(field.to_string(), value);
            }
            Err(err) => debug!(field, "skipping mistyped field: {}", err),
        }
    }

    serde_json::from_value(Value::Object(accepted)).unwrap_or_default()
}

fn match_field<'a>(key: &str, fields: &[&'a str]) -> Option<&'a str> {
    fields
        .iter()
        .find(|field| **field == key)
        .or_else(|| fields.iter().find(|field| field.eq_ignore_ascii_case(key)))
        .copied()
}
