//! Per-day event counts and their intensity tiers.

use std::collections::BTreeMap;

use crate::calendar_day::CalendarDay;
use crate::event::Event;

/// Intensity of a calendar day, by number of events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeatTier {
    None,
    Low,
    Medium,
    High,
    Max,
}

impl HeatTier {
    pub const ALL: [HeatTier; 5] = [
        HeatTier::None,
        HeatTier::Low,
        HeatTier::Medium,
        HeatTier::High,
        HeatTier::Max,
    ];

    /// Range of counts covered by the tier, as shown in the legend.
    pub fn label(&self) -> &'static str {
        match self {
            HeatTier::None => "0",
            HeatTier::Low => "1-3",
            HeatTier::Medium => "4-7",
            HeatTier::High => "8-12",
            HeatTier::Max => "12+",
        }
    }
}

/// Classify a day's event count. The thresholds are fixed: 0, 1-3, 4-7, 8-12, 13+.
pub fn tier(count: usize) -> HeatTier {
    match count {
        0 => HeatTier::None,
        1..=3 => HeatTier::Low,
        4..=7 => HeatTier::Medium,
        8..=12 => HeatTier::High,
        _ => HeatTier::Max,
    }
}

/// Count events per local calendar day. Days without events are absent.
pub fn aggregate<'a, I>(events: I) -> BTreeMap<CalendarDay, usize>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut counts = BTreeMap::new();
    for event in events {
        *counts.entry(event.calendar_day()).or_insert(0) += 1;
    }
    counts
}

/// Day buckets for one event collection. Rebuild it whenever the collection changes.
#[derive(Debug, Clone, Default)]
pub struct Heatmap {
    counts: BTreeMap<CalendarDay, usize>,
}

impl Heatmap {
    pub fn new<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a Event>,
    {
        Heatmap {
            counts: aggregate(events),
        }
    }

    pub fn count(&self, day: CalendarDay) -> usize {
        self.counts.get(&day).copied().unwrap_or(0)
    }

    pub fn tier(&self, day: CalendarDay) -> HeatTier {
        tier(self.count(day))
    }

    /// Sum over all buckets; equals the number of events aggregated.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Days with at least one event, in calendar order.
    pub fn days(&self) -> impl Iterator<Item = (CalendarDay, usize)> + '_ {
        self.counts.iter().map(|(day, count)| (*day, *count))
    }
}
