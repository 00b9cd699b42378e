use serde_json::Value;

#[derive(Debug, PartialEq)]
pub enum PathToken {
    Field(String),
    Index(usize),
    Len,
}

/// Split `books[0].title` / `[1].id` / `errors.len()` into tokens.
pub fn tokenize_path(path: &str) -> Vec<PathToken> {
    let mut tokens = Vec::new();
    for segment in path.split('.') {
        if segment.is_empty() {
            continue;
        }
        if segment == "len()" || segment == "size()" {
            tokens.push(PathToken::Len);
            continue;
        }
        let Some(bracket_pos) = segment.find('[') else {
            tokens.push(PathToken::Field(segment.to_string()));
            continue;
        };
        let field = &segment[..bracket_pos];
        if !field.is_empty() {
            tokens.push(PathToken::Field(field.to_string()));
        }
        let mut rest = &segment[bracket_pos..];
        while let Some(start) = rest.find('[') {
            let end = rest.find(']').expect("unclosed bracket in JSON path");
            let index: usize = rest[start + 1..end]
                .parse()
                .expect("non-numeric array index in JSON path");
            tokens.push(PathToken::Index(index));
            rest = &rest[end + 1..];
        }
    }
    tokens
}

/// Resolve a path against a JSON value. Missing fields and indices yield `null`.
pub fn resolve_path(root: &Value, path: &str) -> Value {
    let mut current = root.clone();
    for token in tokenize_path(path) {
        current = match token {
            PathToken::Field(name) => current.get(&name).cloned().unwrap_or(Value::Null),
            PathToken::Index(idx) => current.get(idx).cloned().unwrap_or(Value::Null),
            PathToken::Len => {
                let len = match &current {
                    Value::Array(a) => a.len(),
                    Value::Object(o) => o.len(),
                    Value::String(s) => s.len(),
                    other => panic!("len() applied to non-collection in \"{path}\": got {other}"),
                };
                Value::from(len)
            }
        };
    }
    current
}
