use std::fmt::{Display, Formatter};
use std::ops::Deref;

use gpui::{ElementId, SharedString};

/// Stable identity of a rendered component.
///
/// Widget-owned state (see `components::control`) is keyed by this id, so an
/// id must stay the same across renders for the widget to keep its value.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ComponentId(SharedString);

impl ComponentId {
    pub fn new(value: impl Into<SharedString>) -> Self {
        Self(value.into())
    }

    #[track_caller]
    pub fn auto(prefix: &str) -> Self {
        Self(stable_auto_id(prefix).into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    pub fn slot(&self, slot: &str) -> ElementId {
        ElementId::Name(format!("{}::{slot}", self.0).into())
    }
}

impl Deref for ComponentId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl Display for ComponentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&'static str> for ComponentId {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ComponentId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<SharedString> for ComponentId {
    fn from(value: SharedString) -> Self {
        Self(value)
    }
}

impl From<ComponentId> for ElementId {
    fn from(value: ComponentId) -> Self {
        ElementId::Name(value.0)
    }
}

#[track_caller]
pub fn stable_auto_id(prefix: &str) -> String {
    let location = std::panic::Location::caller();
    let seed = format!(
        "{prefix}:{}:{}:{}",
        location.file(),
        location.line(),
        location.column()
    );
    format!("{prefix}-{:016x}", fnv1a64(seed.as_bytes()))
}

fn fnv1a64(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x00000100000001b3;

    let mut hash = OFFSET_BASIS;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn call_once() -> ComponentId {
        ComponentId::auto("input")
    }

    #[test]
    fn id_is_stable_for_same_callsite() {
        let ids = (0..3).map(|_| call_once()).collect::<Vec<_>>();
        assert!(ids.windows(2).all(|pair| pair[0] == pair[1]));
        assert!(ids[0].as_str().starts_with("input-"));
    }

    #[test]
    fn id_differs_for_different_callsites() {
        let first = call_once();
        let second = ComponentId::auto("input");
        assert_ne!(first, second);
    }

    #[test]
    fn explicit_ids_are_kept_verbatim() {
        let id = ComponentId::from("signup-email");
        assert_eq!(&*id, "signup-email");
        assert_eq!(id.to_string(), "signup-email");
    }
}
