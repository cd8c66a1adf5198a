//! Chart Slot Registry
//!
//! An owned map from chart slot to the handle of its live rendering.
//! Installing a slot that already holds a handle replaces it, so a repaint
//! never leaves two chart instances layered on one canvas.

use std::collections::HashMap;

/// The five chart slots the dashboard renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    Trend,
    DealStages,
    LeadStatuses,
    DealValue,
    Campaigns,
}

/// Handle for one rendered chart. Generations are unique per registry, so
/// a replacement is observable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartHandle {
    generation: u64,
}

/// Registry owned by the chart panel; no module-level state.
#[derive(Debug, Default)]
pub struct ChartRegistry {
    next_generation: u64,
    handles: HashMap<ChartSlot, ChartHandle>,
}

impl ChartRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a slot for a fresh rendering, returning the handle it
    /// replaced, if any.
    pub fn install(&mut self, slot: ChartSlot) -> Option<ChartHandle> {
        self.next_generation += 1;
        let handle = ChartHandle {
            generation: self.next_generation,
        };
        self.handles.insert(slot, handle)
    }

    /// The live handle for a slot.
    pub fn handle(&self, slot: ChartSlot) -> Option<ChartHandle> {
        self.handles.get(&slot).copied()
    }

    /// Number of slots with a live rendering.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_replaces_previous_handle() {
        let mut registry = ChartRegistry::new();

        assert_eq!(registry.install(ChartSlot::Trend), None);
        let first = registry.handle(ChartSlot::Trend).unwrap();

        // Second install reports the replaced handle and keeps one entry
        assert_eq!(registry.install(ChartSlot::Trend), Some(first));
        assert_eq!(registry.len(), 1);
        assert_ne!(registry.handle(ChartSlot::Trend), Some(first));
    }

    #[test]
    fn test_slots_are_independent() {
        let mut registry = ChartRegistry::new();
        registry.install(ChartSlot::Trend);
        registry.install(ChartSlot::DealStages);
        registry.install(ChartSlot::Campaigns);

        assert_eq!(registry.len(), 3);
        assert_ne!(
            registry.handle(ChartSlot::Trend),
            registry.handle(ChartSlot::DealStages)
        );
        assert_eq!(registry.handle(ChartSlot::LeadStatuses), None);
    }

    #[test]
    fn test_new_registry_is_empty() {
        assert!(ChartRegistry::new().is_empty());
    }
}
