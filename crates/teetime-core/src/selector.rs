use crate::{Error, Result, SlotCollection, SlotEntry, TimeOfDay};
use chrono::TimeDelta;
use std::fmt;
use std::str::FromStr;

/// Rule used to pick one slot relative to a desired time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPolicy {
    /// Earliest slot at or after the desired time
    #[default]
    After,
}

impl SelectionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionPolicy::After => "after",
        }
    }
}

impl FromStr for SelectionPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "after" => Ok(SelectionPolicy::After),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks the slot to book from a sorted collection
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeSlotSelector {
    policy: SelectionPolicy,
}

impl TimeSlotSelector {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self { policy }
    }

    /// Index of the chosen entry within the collection
    pub fn select_index<H>(&self, slots: &SlotCollection<H>, target: TimeOfDay) -> Result<usize> {
        let chosen = match self.policy {
            SelectionPolicy::After => Self::earliest_not_before(slots, target),
        };

        match chosen {
            Some(index) => {
                tracing::debug!(
                    "Policy '{}' chose {} for target {}",
                    self.policy,
                    slots.entries()[index].slot.display_text(),
                    target
                );
                Ok(index)
            }
            None => Err(Error::NoCandidate {
                target: target.to_string(),
            }),
        }
    }

    /// The chosen entry itself
    pub fn select<'a, H>(
        &self,
        slots: &'a SlotCollection<H>,
        target: TimeOfDay,
    ) -> Result<&'a SlotEntry<H>> {
        let index = self.select_index(slots, target)?;
        Ok(&slots.entries()[index])
    }

    // Strict `<` keeps the first of several equally close slots.
    fn earliest_not_before<H>(slots: &SlotCollection<H>, target: TimeOfDay) -> Option<usize> {
        let mut best: Option<(usize, TimeDelta)> = None;
        for (index, slot) in slots.slots().enumerate() {
            let diff = slot.time_of_day() - target;
            if diff < TimeDelta::zero() {
                continue;
            }
            match best {
                Some((_, best_diff)) if diff >= best_diff => {}
                _ => best = Some((index, diff)),
            }
        }
        best.map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TimeSlot;
    use chrono::NaiveDate;

    fn collection(labels: &[&str]) -> SlotCollection {
        let date = NaiveDate::from_ymd_opt(2022, 8, 19).unwrap();
        let slots = labels.iter().map(|l| TimeSlot::parse(*l).unwrap()).collect();
        SlotCollection::from_slots(date, slots)
    }

    fn target(text: &str) -> TimeOfDay {
        TimeOfDay::parse(text).unwrap()
    }

    #[test]
    fn test_after_picks_earliest_slot_not_before_target() {
        let slots = collection(&["8:00 AM", "8:30 AM", "9:15 AM"]);
        let selector = TimeSlotSelector::new(SelectionPolicy::After);

        let chosen = selector.select(&slots, target("9:00 AM")).unwrap();
        assert_eq!(chosen.slot.display_text(), "9:15 AM");
    }

    #[test]
    fn test_after_accepts_exact_match() {
        let slots = collection(&["8:52 AM", "9:00 AM", "9:08 AM"]);
        let selector = TimeSlotSelector::default();

        let chosen = selector.select(&slots, target("9:00 AM")).unwrap();
        assert_eq!(chosen.slot.display_text(), "9:00 AM");
    }

    #[test]
    fn test_after_fails_when_every_slot_is_earlier() {
        let slots = collection(&["8:00 AM", "8:30 AM"]);
        let selector = TimeSlotSelector::new(SelectionPolicy::After);

        let err = selector.select(&slots, target("9:00 AM")).unwrap_err();
        assert_eq!(
            err,
            Error::NoCandidate {
                target: "9:00 AM".to_string()
            }
        );
    }

    #[test]
    fn test_after_fails_on_empty_collection() {
        let slots = collection(&[]);
        let result = TimeSlotSelector::default().select(&slots, target("7:00 AM"));
        assert!(matches!(result, Err(Error::NoCandidate { .. })));
    }

    #[test]
    fn test_ties_resolve_to_first_in_sorted_order() {
        let date = NaiveDate::from_ymd_opt(2022, 8, 19).unwrap();
        let entries = vec![
            SlotEntry { slot: TimeSlot::parse("9:00 AM").unwrap(), handle: 1 },
            SlotEntry { slot: TimeSlot::parse("9:00 AM").unwrap(), handle: 2 },
        ];
        let slots = SlotCollection::new(date, entries);

        let selector = TimeSlotSelector::default();
        assert_eq!(selector.select_index(&slots, target("9:00 AM")).unwrap(), 0);
        assert_eq!(selector.select(&slots, target("9:00 AM")).unwrap().handle, 1);
    }

    #[test]
    fn test_afternoon_target_skips_morning() {
        let slots = collection(&["11:50 AM", "12:10 PM", "1:00 PM"]);
        let chosen = TimeSlotSelector::default()
            .select(&slots, target("12:00 PM"))
            .unwrap();
        assert_eq!(chosen.slot.display_text(), "12:10 PM");
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("after".parse::<SelectionPolicy>().unwrap(), SelectionPolicy::After);
        assert_eq!("AFTER".parse::<SelectionPolicy>().unwrap(), SelectionPolicy::After);
        assert_eq!(
            "closest".parse::<SelectionPolicy>(),
            Err(Error::UnknownPolicy("closest".to_string()))
        );
        assert_eq!(SelectionPolicy::After.to_string(), "after");
    }
}
