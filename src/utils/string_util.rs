/// 去掉 Markdown 代码块包裹（```json ... ```），返回内部文本
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    if let Some(rest) = trimmed.strip_prefix("```")
        && let Some(pos) = rest.find('\n')
        && let Some(inner) = rest[pos + 1..].trim_end().strip_suffix("```")
    {
        return inner.trim();
    }
    trimmed
}

/// 按 JSON 数字的习惯格式化：整数不带小数部分，小数取最短表示
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // -0 也显示为 0
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        // 指数形式，正指数带 + 号：1e+21、1.5e-7
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
        assert_eq!(strip_code_fence("```\n[]\n```  "), "[]");
        assert_eq!(strip_code_fence("  {}  "), "{}");
        assert_eq!(strip_code_fence("```{}```"), "```{}```");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(90.0), "90");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_format_number_exponent_ranges() {
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(123e-9), "1.23e-7");
        assert_eq!(format_number(-2.5e-8), "-2.5e-8");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e21), "1.5e+21");
        // 边界内仍是普通写法
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }
}
