//! Staggered children sharing their parent's reveal trigger.

use std::time::Duration;

use crate::reveal::{RevealAnimation, SectionVisibility};

/// Ordered children that animate off one parent trigger.
///
/// Children have no trigger of their own; once the parent is revealed,
/// child `i` starts `i * step` after the group's base delay.
#[derive(Debug, Clone, PartialEq)]
pub struct StaggerGroup {
    child: RevealAnimation,
    step: Duration,
    len: usize,
}

impl StaggerGroup {
    pub fn new(child: RevealAnimation, step: Duration, len: usize) -> Self {
        Self { child, step, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Start offset of child `index`, measured from the parent's trigger.
    pub fn start_of(&self, index: usize) -> Duration {
        self.child.delay + self.step * index as u32
    }

    /// Animation for child `index`, delayed to its slot.
    pub fn child(&self, index: usize) -> RevealAnimation {
        self.child.with_delay(self.start_of(index))
    }

    /// Start offsets of every child in document order.
    pub fn schedule(&self) -> Vec<Duration> {
        (0..self.len).map(|index| self.start_of(index)).collect()
    }

    /// Time until the last child has settled.
    pub fn total(&self) -> Duration {
        match self.len {
            0 => Duration::ZERO,
            len => self.child(len - 1).total(),
        }
    }

    /// Animation registered for the parent trigger: the last child's, so
    /// the parent counts as seen once every child has settled.
    pub fn trigger_animation(&self) -> RevealAnimation {
        self.child(self.len.saturating_sub(1))
    }

    /// Inline style for child `index` given the parent's visibility.
    pub fn style_for(&self, index: usize, parent: SectionVisibility) -> String {
        self.child(index).style_for(parent)
    }
}
