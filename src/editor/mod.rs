pub mod view;

use crate::models::{CourseEntry, CourseField, CourseId};

/// Source of row ids. Rows are stamped with the creation time in milliseconds.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default()
    }
}

/// Ordered, editable list of course rows. Used once per direction.
///
/// Ids handed out by one list are strictly increasing: a clock reading that
/// does not move past the last issued id is bumped by one, so two rows added
/// within the same millisecond still get distinct ids and a removed id is
/// never reissued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseList {
    entries: Vec<CourseEntry>,
    last_issued: Option<CourseId>,
}

impl CourseList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a blank row and returns its id.
    pub fn push_blank(&mut self, now_millis: u64) -> CourseId {
        let id = match self.last_issued {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        };
        self.last_issued = Some(id);
        self.entries.push(CourseEntry::blank(id));
        id
    }

    /// Removes the row with `id`. Returns false when no such row exists.
    pub fn remove(&mut self, id: CourseId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Replaces one field of the row with `id`. Returns false when no such row exists.
    pub fn update(&mut self, id: CourseId, field: CourseField, value: String) -> bool {
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.set_field(field, value);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: CourseId) -> Option<&CourseEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Id of the row shown at 1-based `ordinal`.
    pub fn id_at(&self, ordinal: usize) -> Option<CourseId> {
        ordinal
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
            .map(|entry| entry.id)
    }

    pub fn entries(&self) -> &[CourseEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_blank_creates_empty_rows() {
        let mut list = CourseList::new();
        let id = list.push_blank(1_000);

        let entry = list.get(id).expect("row must exist");
        assert_eq!(entry, &CourseEntry::blank(1_000));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_same_millisecond_ids_are_bumped() {
        let mut list = CourseList::new();
        let a = list.push_blank(500);
        let b = list.push_blank(500);
        let c = list.push_blank(400);

        assert_eq!((a, b, c), (500, 501, 502));
    }

    #[test]
    fn test_removed_id_is_not_reissued() {
        let mut list = CourseList::new();
        let a = list.push_blank(10);
        assert!(list.remove(a));

        let b = list.push_blank(10);
        assert_ne!(a, b);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut list = CourseList::new();
        list.push_blank(1);
        list.push_blank(2);
        let before = list.clone();

        assert!(!list.remove(999));
        assert_eq!(list, before);
    }

    #[test]
    fn test_update_touches_only_target_field() {
        let mut list = CourseList::new();
        let a = list.push_blank(1);
        let b = list.push_blank(2);
        list.update(a, CourseField::Name, "Data Structures".to_string());
        let untouched = list.get(a).cloned();

        assert!(list.update(b, CourseField::Crn, "40211".to_string()));

        assert_eq!(list.get(a).cloned(), untouched);
        let entry = list.get(b).expect("row b");
        assert_eq!(entry.crn, "40211");
        assert_eq!(entry.code, "");
        assert_eq!(entry.name, "");
        assert_eq!(entry.section, "");
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut list = CourseList::new();
        list.push_blank(1);
        let before = list.clone();

        assert!(!list.update(42, CourseField::Code, "CS101".to_string()));
        assert_eq!(list, before);
    }

    #[test]
    fn test_add_edit_remove_scenario() {
        let mut list = CourseList::new();
        let a = list.push_blank(100);
        let b = list.push_blank(200);
        list.update(b, CourseField::Code, "CS301".to_string());
        list.remove(a);

        assert_eq!(list.len(), 1);
        let entry = &list.entries()[0];
        assert_eq!(entry.id, b);
        assert_eq!(entry.code, "CS301");
        assert_eq!(entry.name, "");
        assert_eq!(entry.crn, "");
        assert_eq!(entry.section, "");
    }

    #[test]
    fn test_id_at_is_one_based() {
        let mut list = CourseList::new();
        let a = list.push_blank(7);
        let b = list.push_blank(8);

        assert_eq!(list.id_at(0), None);
        assert_eq!(list.id_at(1), Some(a));
        assert_eq!(list.id_at(2), Some(b));
        assert_eq!(list.id_at(3), None);

        list.remove(a);
        assert_eq!(list.id_at(1), Some(b));
    }
}
