use std::fmt::Display;

pub type ParamVec = Vec<(String, String)>;

/// write `(key, val)` to buf if val is not empty
pub fn append_argument_pair(buf: &mut ParamVec, key: &'static str, val: impl Display) {
    let val = val.to_string();
    if !val.is_empty() {
        buf.push((key.into(), val));
    }
}

/// write one `(key, val)` per non-empty value, for repeated query keys
pub fn append_argument_list<T: Display>(buf: &mut ParamVec, key: &'static str, vals: impl IntoIterator<Item = T>) {
    for val in vals {
        append_argument_pair(buf, key, val);
    }
}
