//! Error path construction.

/// Escapes a path component.
///
/// `~` is replaced with `~0` and `/` with `~1`, so keys containing a slash
/// stay addressable.
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // Order matters: ~ must be escaped before /
    component.replace('~', "~0").replace('/', "~1")
}

/// Extends `parent` with an object key.
pub fn child_key(parent: &str, key: &str) -> String {
    let key = escape_component(key);
    let mut out = String::with_capacity(parent.len() + key.len() + 1);
    out.push_str(parent);
    out.push('/');
    out.push_str(&key);
    out
}

/// Extends `parent` with an array index.
pub fn child_index(parent: &str, index: usize) -> String {
    format!("{parent}/{index}")
}
