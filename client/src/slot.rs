//! Page selectors and the slot ids that address animated elements.
//!
//! Every element the engine writes to gets a dense [`SlotId`]. Stat
//! containers carry their id in [`SLOT_ATTR`] so intersection entries can be
//! mapped back without holding element references in the callback.

#[cfg(test)]
#[path = "slot_test.rs"]
mod slot_test;

use std::fmt;

/// Containers observed for visibility; each holds one heading with the value.
pub const STAT_SELECTOR: &str = ".stat";

/// Heading inside a stat container that shows the number.
pub const STAT_VALUE_SELECTOR: &str = "h3";

/// Hero heading that gets the typing effect.
pub const HERO_SELECTOR: &str = ".hero-title";

/// Attribute tagging an observed element with its slot id.
pub const SLOT_ATTR: &str = "data-motion-slot";

/// Attribute on `<body>` carrying the motion config JSON.
pub const CONFIG_ATTR: &str = "data-motion-config";

/// Index of an animated element in the host's slot tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub usize);

impl SlotId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    /// Read a slot id back from its attribute value.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<usize>().ok().map(Self)
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Slot assignment for one page: stats first in document order, then the hero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotPlan {
    pub stats: Vec<SlotId>,
    pub hero: Option<SlotId>,
}

impl SlotPlan {
    #[must_use]
    pub fn new(stat_count: usize, has_hero: bool) -> Self {
        let stats = (0..stat_count).map(SlotId).collect();
        let hero = has_hero.then_some(SlotId(stat_count));
        Self { stats, hero }
    }

    /// Number of text slots the sink must hold.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stats.len() + usize::from(self.hero.is_some())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
