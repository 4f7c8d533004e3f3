//! serde_json 取值辅助。
//!
//! 各家接口的字段类型并不稳定（布尔写成 0/1、数组偶尔为空但仍表示
//! 存在），统一用宽松真值判断。

use serde_json::Value;

/// 宽松真值：数字 0、空串、null 视为假，数组/对象只要存在即为真。
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub(crate) fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.as_object().and_then(|map| map.get(key))
}

pub(crate) fn field_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    field(value, key).and_then(Value::as_str)
}

pub(crate) fn field_truthy(value: &Value, key: &str) -> bool {
    field(value, key).is_some_and(truthy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthiness_matches_loose_api_fields() {
        assert!(truthy(&json!(true)));
        assert!(truthy(&json!(1)));
        assert!(truthy(&json!("x")));
        assert!(truthy(&json!([])));
        assert!(truthy(&json!({})));
        assert!(!truthy(&json!(false)));
        assert!(!truthy(&json!(0)));
        assert!(!truthy(&json!("")));
        assert!(!truthy(&Value::Null));
    }

    #[test]
    fn field_helpers_tolerate_non_objects() {
        assert!(field(&json!([1, 2]), "state").is_none());
        assert!(!field_truthy(&json!("plain"), "state"));
        assert_eq!(field_str(&json!({"error": "需要访问码"}), "error"), Some("需要访问码"));
    }
}
