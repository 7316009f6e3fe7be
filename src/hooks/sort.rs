// Sort-toggle state
use crate::api::query::{SortKey, SortOrder};

/// Current sort selection. Toggling the active key flips the direction;
/// selecting a different key switches to it ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub order: SortOrder,
}

impl SortState {
    pub fn new(key: SortKey) -> Self {
        Self {
            key: Some(key),
            order: SortOrder::Asc,
        }
    }

    pub fn toggle(&mut self, key: SortKey) {
        if self.key == Some(key) {
            self.order = self.order.flipped();
        } else {
            self.key = Some(key);
            self.order = SortOrder::Asc;
        }
    }

    pub fn is_active(&self, key: SortKey) -> bool {
        self.key == Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_sequence_from_unsorted() {
        let mut sort = SortState::default();
        assert_eq!(sort.key, None);
        assert_eq!(sort.order, SortOrder::Asc);

        sort.toggle(SortKey::Email);
        assert_eq!(sort.key, Some(SortKey::Email));
        assert_eq!(sort.order, SortOrder::Asc);

        sort.toggle(SortKey::Email);
        assert_eq!(sort.order, SortOrder::Desc);

        sort.toggle(SortKey::Email);
        assert_eq!(sort.order, SortOrder::Asc);
    }

    #[test]
    fn switching_key_resets_to_ascending() {
        let mut sort = SortState::new(SortKey::LastName);
        sort.toggle(SortKey::LastName);
        assert_eq!(sort.order, SortOrder::Desc);

        sort.toggle(SortKey::CreatedAt);
        assert_eq!(sort.key, Some(SortKey::CreatedAt));
        assert_eq!(sort.order, SortOrder::Asc);
    }
}
