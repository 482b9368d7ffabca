use collapsing_core::{ViewId, sanitize_length};

/// The three places a collapsing layout can hold a view, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotKey {
    Header,
    /// Optional fixed-height strip between header and content (tabs, a
    /// segmented control). Stays pinned once the header has collapsed.
    Section,
    Content,
}

impl SlotKey {
    pub const ALL: [SlotKey; 3] = [SlotKey::Header, SlotKey::Section, SlotKey::Content];

    fn index(self) -> usize {
        match self {
            SlotKey::Header => 0,
            SlotKey::Section => 1,
            SlotKey::Content => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SlotKey::Header => "header",
            SlotKey::Section => "section",
            SlotKey::Content => "content",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slot {
    pub view: ViewId,
    /// Fixed height. `None` means the slot takes no fixed space; content always
    /// fills whatever is left regardless.
    pub height: Option<f32>,
}

impl Slot {
    pub fn height_or_zero(&self) -> f32 {
        self.height.unwrap_or(0.0)
    }
}

#[derive(Clone, Debug, Default)]
pub struct SlotTable {
    slots: [Option<Slot>; 3],
}

impl SlotTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `view` into `key`, or clear the slot with `None`.
    ///
    /// Returns the slot that was there before so the caller can detach its
    /// view from the host hierarchy.
    pub fn configure(&mut self, key: SlotKey, view: Option<ViewId>, height: Option<f32>) -> Option<Slot> {
        let height = height.map(|h| sanitize_length(h, key.as_str()));
        let new = view.map(|view| Slot { view, height });
        let previous = std::mem::replace(&mut self.slots[key.index()], new);
        log::debug!(
            "slot {}: {:?} -> {:?}",
            key.as_str(),
            previous.map(|s| s.view),
            new.map(|s| s.view)
        );
        previous
    }

    pub fn get(&self, key: SlotKey) -> Option<&Slot> {
        self.slots[key.index()].as_ref()
    }

    pub fn is_configured(&self, key: SlotKey) -> bool {
        self.get(key).is_some()
    }

    /// Fixed height of `key`, or 0 when the slot is empty or has none.
    pub fn height(&self, key: SlotKey) -> f32 {
        self.get(key).map(Slot::height_or_zero).unwrap_or(0.0)
    }

    /// Change the fixed height of a configured slot. Returns `true` when the
    /// stored height actually changed; an empty slot is left alone.
    pub fn set_height(&mut self, key: SlotKey, height: f32) -> bool {
        let height = sanitize_length(height, key.as_str());
        match self.slots[key.index()].as_mut() {
            Some(slot) if slot.height != Some(height) => {
                slot.height = Some(height);
                true
            }
            _ => false,
        }
    }

    /// A header only collapses when it exists and has a positive height.
    pub fn has_header(&self) -> bool {
        self.height(SlotKey::Header) > 0.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotKey, &Slot)> {
        SlotKey::ALL
            .into_iter()
            .filter_map(move |k| self.get(k).map(|s| (k, s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configure_returns_previous_slot() {
        let mut slots = SlotTable::new();
        assert_eq!(slots.configure(SlotKey::Header, Some(1), Some(180.0)), None);

        let prev = slots.configure(SlotKey::Header, Some(2), Some(120.0));
        assert_eq!(
            prev,
            Some(Slot {
                view: 1,
                height: Some(180.0)
            })
        );
        assert_eq!(slots.height(SlotKey::Header), 120.0);
    }

    #[test]
    fn clearing_a_slot_removes_it() {
        let mut slots = SlotTable::new();
        slots.configure(SlotKey::Section, Some(3), Some(44.0));
        slots.configure(SlotKey::Section, None, Some(44.0));

        assert!(!slots.is_configured(SlotKey::Section));
        assert_eq!(slots.height(SlotKey::Section), 0.0);
    }

    #[test]
    fn negative_height_is_clamped() {
        let mut slots = SlotTable::new();
        slots.configure(SlotKey::Header, Some(1), Some(-20.0));
        assert_eq!(slots.height(SlotKey::Header), 0.0);
        assert!(!slots.has_header());
    }

    #[test]
    fn set_height_only_reports_real_changes() {
        let mut slots = SlotTable::new();
        assert!(!slots.set_height(SlotKey::Header, 100.0));

        slots.configure(SlotKey::Header, Some(1), Some(100.0));
        assert!(!slots.set_height(SlotKey::Header, 100.0));
        assert!(slots.set_height(SlotKey::Header, 80.0));
        assert_eq!(slots.height(SlotKey::Header), 80.0);
    }

    #[test]
    fn iter_walks_top_to_bottom() {
        let mut slots = SlotTable::new();
        slots.configure(SlotKey::Content, Some(30), None);
        slots.configure(SlotKey::Header, Some(10), Some(50.0));

        let keys: Vec<_> = slots.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![SlotKey::Header, SlotKey::Content]);
    }
}
