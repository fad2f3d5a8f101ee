//! Arrow-key routing.
//!
//! One document-level key listener serves every carousel on the page. The
//! [`CarouselRegistry`] records which instances are currently visible so a
//! key press reaches only those, without measuring layout per keystroke.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationKey {
    Previous,
    Next,
}

impl NavigationKey {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(NavigationKey::Previous),
            "ArrowRight" => Some(NavigationKey::Next),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RegistrationId(u64);

struct Registration<T> {
    id: RegistrationId,
    visible: bool,
    target: T,
}

pub struct CarouselRegistry<T> {
    entries: Vec<Registration<T>>,
    next_id: u64,
}

impl<T: Clone> CarouselRegistry<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Adds a target. It starts hidden until a visibility update arrives.
    pub fn register(&mut self, target: T) -> RegistrationId {
        let id = RegistrationId(self.next_id);
        self.next_id += 1;
        self.entries.push(Registration {
            id,
            visible: false,
            target,
        });
        id
    }

    pub fn unregister(&mut self, id: RegistrationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    pub fn set_visible(&mut self, id: RegistrationId, visible: bool) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
            entry.visible = visible;
        }
    }

    pub fn is_visible(&self, id: RegistrationId) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.id == id && entry.visible)
    }

    /// Snapshot of the targets that should receive key input.
    pub fn visible_targets(&self) -> Vec<T> {
        self.entries
            .iter()
            .filter(|entry| entry.visible)
            .map(|entry| entry.target.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> Default for CarouselRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_arrow_keys_navigate() {
        assert_eq!(NavigationKey::from_key("ArrowLeft"), Some(NavigationKey::Previous));
        assert_eq!(NavigationKey::from_key("ArrowRight"), Some(NavigationKey::Next));
        assert_eq!(NavigationKey::from_key("ArrowUp"), None);
        assert_eq!(NavigationKey::from_key("Enter"), None);
    }

    #[test]
    fn hidden_targets_receive_nothing() {
        let mut registry = CarouselRegistry::new();
        let first = registry.register("first");
        let second = registry.register("second");

        assert!(registry.visible_targets().is_empty());

        registry.set_visible(second, true);
        assert_eq!(registry.visible_targets(), vec!["second"]);
        assert!(!registry.is_visible(first));

        registry.set_visible(second, false);
        registry.set_visible(first, true);
        assert_eq!(registry.visible_targets(), vec!["first"]);
    }

    #[test]
    fn unregister_removes_target() {
        let mut registry = CarouselRegistry::new();
        let id = registry.register(7u32);
        registry.set_visible(id, true);

        assert!(registry.unregister(id));
        assert!(!registry.unregister(id));
        assert!(registry.is_empty());
        assert!(registry.visible_targets().is_empty());
    }
}
