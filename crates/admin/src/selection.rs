use zenith_core::types::ApplicationId;

/// Which applications are ticked in the table, in the order they were ticked.
///
/// Independent of persisted status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<ApplicationId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[ApplicationId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: ApplicationId) -> bool {
        self.ids.contains(&id)
    }

    /// Add `id` if absent, remove it if present.
    pub fn toggle(&mut self, id: ApplicationId) {
        if let Some(pos) = self.ids.iter().position(|x| *x == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    /// True when exactly the ids in `all` are selected.
    pub fn covers(&self, all: &[ApplicationId]) -> bool {
        self.ids.len() == all.len() && all.iter().all(|id| self.contains(*id))
    }

    /// Full set when not already fully selected, otherwise empty.
    pub fn toggle_all(&mut self, all: &[ApplicationId]) {
        if self.covers(all) {
            self.clear();
        } else {
            self.ids = all.to_vec();
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drop every id for which `keep` returns false.
    pub fn retain(&mut self, keep: impl FnMut(&ApplicationId) -> bool) {
        self.ids.retain(keep);
    }
}
