use std::fmt::{Display, Formatter};

use gpui::SharedString;

use super::controller::{FieldKey, FormError, FormResult};

/// Values of every field at submission time, in declaration order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormRecord {
    entries: Vec<(FieldKey, SharedString)>,
}

impl FormRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: FieldKey) -> Option<&SharedString> {
        self.entries
            .iter()
            .find_map(|(entry_key, value)| (*entry_key == key).then_some(value))
    }

    pub fn require(&self, key: FieldKey) -> FormResult<&SharedString> {
        self.get(key).ok_or(FormError::MissingField(key))
    }

    pub fn keys(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &SharedString)> + '_ {
        self.entries.iter().map(|(key, value)| (*key, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(FieldKey, SharedString)> for FormRecord {
    fn from_iter<I: IntoIterator<Item = (FieldKey, SharedString)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Display for FormRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (index, (key, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {:?}", value.as_ref())?;
        }
        f.write_str("}")
    }
}
