//! Attribute list parsing.
//!
//! An attribute list is a comma-separated sequence of `name:attributes`
//! entries, e.g. `"ethaddr:m,ipaddr:i,bootdelay:d"`. The attributes string
//! is opaque at this layer; [`crate::flags`] interprets it.

/// Walks every `name:attributes` entry in `list`, in order.
///
/// Entries are separated by commas and split on the first colon. Whitespace
/// around names and attribute strings is trimmed. Entries with an empty name
/// are skipped; an entry without a colon yields empty attributes.
pub fn walk(list: &str, mut f: impl FnMut(&str, &str)) {
    for entry in list.split(',') {
        let (name, attrs) = match entry.split_once(':') {
            Some((name, attrs)) => (name.trim(), attrs.trim()),
            None => (entry.trim(), ""),
        };
        if name.is_empty() {
            continue;
        }
        f(name, attrs);
    }
}

/// Looks up the attributes for `name` in `list`.
///
/// Returns the attributes of the first matching entry, or `None` when the
/// list does not mention the name at all. An entry like `"foo:"` (or bare
/// `"foo"`) yields `Some("")`, which is distinct from absent.
pub fn lookup<'a>(list: &'a str, name: &str) -> Option<&'a str> {
    for entry in list.split(',') {
        let (entry_name, attrs) = match entry.split_once(':') {
            Some((entry_name, attrs)) => (entry_name.trim(), attrs.trim()),
            None => (entry.trim(), ""),
        };
        if entry_name == name {
            return Some(attrs);
        }
    }
    None
}
