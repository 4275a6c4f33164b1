use serde_json::{Map, Value};

/// 以點記路徑走訪巢狀映射（例：'hero.background'）。
/// 任一層不存在或不是映射就回傳 None，不報錯。
pub fn resolve<'a>(root: &'a Value, dotted_path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in dotted_path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// 設定點記路徑上的葉值，缺少的中間層建立為空映射。
/// 中間層已存在但不是映射時會被空映射取代。
pub fn set(root: &mut Value, dotted_path: &str, value: Value) {
    let mut segments: Vec<&str> = dotted_path.split('.').collect();
    let leaf = match segments.pop() {
        Some(leaf) => leaf,
        None => return,
    };

    let mut current = root;
    for segment in segments {
        if !current.is_object() {
            *current = Value::Object(Map::new());
        }
        current = match current.as_object_mut() {
            Some(map) => map.entry(segment).or_insert(Value::Null),
            None => return,
        };
    }

    if !current.is_object() {
        *current = Value::Object(Map::new());
    }
    if let Some(map) = current.as_object_mut() {
        map.insert(leaf.to_string(), value);
    }
}
