//! Key bindings with per-owner install/remove.
//!
//! Each mounted component installs its bindings under its own owner id and
//! removes them on unmount. Installing again under the same owner replaces
//! the previous set, so a binding can never be registered twice.

/// Terminal-independent key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Tab,
    Esc,
    Char(char),
    CtrlC,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Previous,
    Next,
    ToggleSection,
    TogglePause,
    Quit,
}

/// Who installed a binding. Mounted components carry their mount generation
/// so a stale owner can never remove a newer mount's bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingOwner {
    Global,
    Carousel(u64),
    Stack(u64),
}

#[derive(Debug, Clone, Copy)]
struct Binding {
    owner: BindingOwner,
    key: Key,
    action: Action,
}

#[derive(Debug, Default)]
pub struct Keymap {
    bindings: Vec<Binding>,
}

impl Keymap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn install(&mut self, owner: BindingOwner, bindings: &[(Key, Action)]) {
        let replaced = self.remove(owner);
        if replaced > 0 {
            tracing::debug!(?owner, replaced, "Replacing existing key bindings");
        }
        self.bindings
            .extend(bindings.iter().map(|&(key, action)| Binding { owner, key, action }));
    }

    /// Remove every binding of `owner`; returns how many were removed.
    pub fn remove(&mut self, owner: BindingOwner) -> usize {
        let before = self.bindings.len();
        self.bindings.retain(|binding| binding.owner != owner);
        before - self.bindings.len()
    }

    /// Most recently installed binding wins.
    #[must_use]
    pub fn resolve(&self, key: Key) -> Option<Action> {
        self.bindings
            .iter()
            .rev()
            .find(|binding| binding.key == key)
            .map(|binding| binding.action)
    }

    #[must_use]
    pub fn count_for(&self, owner: BindingOwner) -> usize {
        self.bindings.iter().filter(|b| b.owner == owner).count()
    }

    /// Bindings whose owner matches `pred`, across all generations.
    #[must_use]
    pub fn count_where(&self, pred: impl Fn(BindingOwner) -> bool) -> usize {
        self.bindings.iter().filter(|b| pred(b.owner)).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
