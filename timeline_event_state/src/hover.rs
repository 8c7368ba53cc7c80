// Copyright 2025 the Timeline Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking: where the pointer is and which item it is over.
//!
//! The pointer column drives the hover guideline; the target is whatever the
//! caller's hit test returned for that position. [`HoverState::update`]
//! reports whether the target changed so callers can restyle only on
//! transitions.

/// Pointer column and hovered item.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverState<K> {
    x: Option<f64>,
    target: Option<K>,
}

impl<K> Default for HoverState<K> {
    fn default() -> Self {
        Self {
            x: None,
            target: None,
        }
    }
}

impl<K: PartialEq> HoverState<K> {
    /// Creates a state with no pointer and no target.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the pointer column without re-evaluating the target.
    pub fn set_x(&mut self, x: f64) {
        self.x = Some(x);
    }

    /// Records the pointer column and the item under it.
    ///
    /// Returns `true` if the hovered item changed.
    pub fn update(&mut self, x: f64, target: Option<K>) -> bool {
        self.x = Some(x);
        if self.target == target {
            return false;
        }
        self.target = target;
        true
    }

    /// Forgets both the pointer column and the target (pointer left the surface).
    ///
    /// Returns `true` if an item was hovered.
    pub fn clear(&mut self) -> bool {
        self.x = None;
        self.target.take().is_some()
    }

    /// The pointer column, if the pointer is over the surface.
    #[must_use]
    pub fn x(&self) -> Option<f64> {
        self.x
    }

    /// The hovered item, if any.
    #[must_use]
    pub fn target(&self) -> Option<&K> {
        self.target.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::HoverState;

    #[test]
    fn reports_only_target_transitions() {
        let mut hover = HoverState::new();
        assert!(!hover.update(10.0, None));
        assert_eq!(hover.x(), Some(10.0));

        assert!(hover.update(11.0, Some(3_u32)));
        assert!(!hover.update(12.0, Some(3)));
        assert!(hover.update(13.0, Some(4)));
        assert!(hover.update(14.0, None));
        assert_eq!(hover.target(), None);
        assert_eq!(hover.x(), Some(14.0));
    }

    #[test]
    fn set_x_keeps_target() {
        let mut hover = HoverState::new();
        hover.update(1.0, Some("a"));
        hover.set_x(99.0);
        assert_eq!(hover.x(), Some(99.0));
        assert_eq!(hover.target(), Some(&"a"));
    }

    #[test]
    fn clear_forgets_everything() {
        let mut hover = HoverState::new();
        assert!(!hover.clear());
        hover.update(5.0, Some(1_u8));
        assert!(hover.clear());
        assert_eq!(hover.x(), None);
        assert_eq!(hover.target(), None);
    }
}
