use crate::{Result, TimeOfDay};
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;

/// A bookable tee time scraped from the listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    display_text: String,
    time_of_day: TimeOfDay,
}

impl TimeSlot {
    /// Create a slot from the label shown on the page
    pub fn parse(display_text: impl Into<String>) -> Result<Self> {
        let display_text = display_text.into();
        let time_of_day = TimeOfDay::parse(&display_text)?;
        Ok(Self {
            display_text,
            time_of_day,
        })
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.time_of_day
    }

    /// Ordering used for slot lists: by time of day only
    pub fn cmp_by_time(a: &TimeSlot, b: &TimeSlot) -> Ordering {
        a.time_of_day.cmp(&b.time_of_day)
    }
}

/// A slot paired with the handle used to act on it
#[derive(Debug)]
pub struct SlotEntry<H> {
    pub slot: TimeSlot,
    pub handle: H,
}

/// Slots for one booking date, kept sorted by time of day.
///
/// Sorting is stable, so slots sharing a time keep the order in which they
/// were scraped. Duplicates are not removed.
#[derive(Debug)]
pub struct SlotCollection<H = ()> {
    date: NaiveDate,
    entries: Vec<SlotEntry<H>>,
}

impl<H> SlotCollection<H> {
    /// Build a collection from scraped entries in page order
    pub fn new(date: NaiveDate, mut entries: Vec<SlotEntry<H>>) -> Self {
        entries.sort_by(|a, b| TimeSlot::cmp_by_time(&a.slot, &b.slot));
        Self { date, entries }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn entries(&self) -> &[SlotEntry<H>] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&SlotEntry<H>> {
        self.entries.get(index)
    }

    pub fn slots(&self) -> impl Iterator<Item = &TimeSlot> {
        self.entries.iter().map(|entry| &entry.slot)
    }

    /// Display texts in ascending time order
    pub fn display_texts(&self) -> Vec<String> {
        self.slots().map(|slot| slot.display_text.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SlotCollection<()> {
    /// Collection without element handles, for offline selection
    pub fn from_slots(date: NaiveDate, slots: Vec<TimeSlot>) -> Self {
        let entries = slots
            .into_iter()
            .map(|slot| SlotEntry { slot, handle: () })
            .collect();
        Self::new(date, entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 8, 19).unwrap()
    }

    #[test]
    fn test_time_slot_keeps_display_text() {
        let slot = TimeSlot::parse("9:15 AM").unwrap();
        assert_eq!(slot.display_text(), "9:15 AM");
        assert_eq!(slot.time_of_day(), TimeOfDay::from_hm(9, 15).unwrap());
    }

    #[test]
    fn test_time_slot_rejects_bad_label() {
        assert!(TimeSlot::parse("Reserved").is_err());
    }

    #[test]
    fn test_collection_sorts_ascending() {
        let labels = ["1:10 PM", "7:30 AM", "12:00 PM", "9:15 AM", "7:30 AM"];
        let slots = labels.iter().map(|l| TimeSlot::parse(*l).unwrap()).collect();
        let collection = SlotCollection::from_slots(date(), slots);

        let times: Vec<TimeOfDay> = collection.slots().map(|s| s.time_of_day()).collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(
            collection.display_texts(),
            vec!["7:30 AM", "7:30 AM", "9:15 AM", "12:00 PM", "1:10 PM"]
        );
        assert_eq!(collection.date(), date());
    }

    #[test]
    fn test_collection_sort_is_stable() {
        let entries = vec![
            SlotEntry { slot: TimeSlot::parse("9:00 AM").unwrap(), handle: "first" },
            SlotEntry { slot: TimeSlot::parse("8:00 AM").unwrap(), handle: "early" },
            SlotEntry { slot: TimeSlot::parse("9:00 AM").unwrap(), handle: "second" },
        ];
        let collection = SlotCollection::new(date(), entries);

        let handles: Vec<&str> = collection.entries().iter().map(|e| e.handle).collect();
        assert_eq!(handles, vec!["early", "first", "second"]);
    }

    fn permutations(items: &[&'static str]) -> Vec<Vec<&'static str>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut out = Vec::new();
        for i in 0..items.len() {
            let mut rest = items.to_vec();
            let head = rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, head);
                out.push(tail);
            }
        }
        out
    }

    #[test]
    fn test_collection_sort_over_every_input_order() {
        let labels = ["9:00 AM", "8:00 AM", "12:00 PM", "9:00 AM", "7:30 AM"];
        let orders = permutations(&labels);
        assert_eq!(orders.len(), 120);

        let mut expected: Vec<TimeOfDay> = labels
            .iter()
            .map(|l| TimeOfDay::parse(l).unwrap())
            .collect();
        expected.sort();

        for order in orders {
            // Handle is the position the slot was scraped at
            let entries = order
                .iter()
                .enumerate()
                .map(|(pos, l)| SlotEntry { slot: TimeSlot::parse(*l).unwrap(), handle: pos })
                .collect();
            let collection = SlotCollection::new(date(), entries);

            let times: Vec<TimeOfDay> = collection.slots().map(|s| s.time_of_day()).collect();
            assert_eq!(times, expected, "input order {:?}", order);

            for pair in collection.entries().windows(2) {
                if pair[0].slot.time_of_day() == pair[1].slot.time_of_day() {
                    assert!(pair[0].handle < pair[1].handle, "input order {:?}", order);
                }
            }

            let mut handles: Vec<usize> = collection.entries().iter().map(|e| e.handle).collect();
            handles.sort();
            assert_eq!(handles, (0..labels.len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_empty_collection() {
        let collection = SlotCollection::from_slots(date(), Vec::new());
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
        assert!(collection.get(0).is_none());
    }
}
