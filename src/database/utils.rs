/// Collapses whitespace and rewrites `?` placeholders to Postgres `$n`
/// ordinals, so queries can be written in the portable style.
pub fn sql(query: &str) -> String {
    let cleaned = query.split_whitespace().collect::<Vec<&str>>().join(" ");

    let mut result = String::with_capacity(cleaned.len());
    let mut param_index = 1;
    for ch in cleaned.chars() {
        if ch == '?' {
            result.push('$');
            result.push_str(&param_index.to_string());
            param_index += 1;
        } else {
            result.push(ch);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::sql;
    use pretty_assertions::assert_eq;

    #[test]
    fn numbers_placeholders_in_order() {
        assert_eq!(
            sql("SELECT * FROM t WHERE a = ? AND b = ?"),
            "SELECT * FROM t WHERE a = $1 AND b = $2"
        );
    }

    #[test]
    fn collapses_indented_query_text() {
        assert_eq!(
            sql("SELECT\n    id,\n    name\nFROM\n    teams\nWHERE id = ?"),
            "SELECT id, name FROM teams WHERE id = $1"
        );
    }
}
