//! 物理命名规则

/// camelCase → snake_case
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// 属性名对应的物理列名
pub fn physical_name(attribute: &str, underscored: bool) -> String {
    if underscored {
        to_snake_case(attribute)
    } else {
        attribute.to_string()
    }
}

/// 默认索引名：`<表名>_<列1>_<列2>`，列名统一转为 snake_case
pub fn index_name(table: &str, columns: &[String]) -> String {
    let mut name = table.to_string();
    for column in columns {
        name.push('_');
        name.push_str(&to_snake_case(column));
    }
    name
}
