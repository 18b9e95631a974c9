use serde_json::{Map, Value};

use crate::{error::dashboard_error::DashboardError, utils::string_util::strip_code_fence};

/// 解析用户输入的上下文文本，失败时返回本地错误，不会发起网络请求
pub fn parse_context(text: &str) -> Result<Value, DashboardError> {
    let body = strip_code_fence(text);
    serde_json::from_str(body).map_err(|e| DashboardError::InvalidContext(e.to_string()))
}

/// 将覆盖项合并进上下文对象，已有的同名键会被替换
pub fn merge_overrides(context: &mut Value, overrides: &Map<String, Value>) -> Result<(), DashboardError> {
    if overrides.is_empty() {
        return Ok(());
    }
    let Some(object) = context.as_object_mut() else {
        return Err(DashboardError::InvalidContext(
            "overrides require the context to be a JSON object".into(),
        ));
    };
    for (key, value) in overrides {
        object.insert(key.clone(), value.clone());
    }
    Ok(())
}

/// JSON 值的真假判断：null、false、0、空字符串为假
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_context() {
        assert_eq!(parse_context("{}").unwrap(), json!({}));
        assert_eq!(
            parse_context("```json\n{\"api\": \"groq\"}\n```").unwrap(),
            json!({"api": "groq"})
        );
        assert!(matches!(
            parse_context("{not json"),
            Err(DashboardError::InvalidContext(_))
        ));
        assert!(parse_context("").is_err());
    }

    #[test]
    fn test_merge_overrides() {
        let mut context = json!({"api": "groq", "topic": "rust"});
        let mut overrides = Map::new();
        overrides.insert("api".into(), json!("openai"));
        merge_overrides(&mut context, &overrides).unwrap();
        assert_eq!(context, json!({"api": "openai", "topic": "rust"}));

        let mut list = json!([1, 2]);
        assert!(merge_overrides(&mut list, &overrides).is_err());
        assert!(merge_overrides(&mut list, &Map::new()).is_ok());
    }

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!("yes")));
        assert!(is_truthy(&json!(["x"])));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
    }
}
