//! Invariants of the course list editor under arbitrary edit sequences.

use std::collections::HashSet;

use add_drop_form::editor::CourseList;
use add_drop_form::models::CourseField;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    /// Add a row with the given clock reading.
    Add(u64),
    /// Remove the row at this index (mod len), or a missing id when empty.
    Remove(usize),
    /// Remove an id that was never handed out.
    RemoveMissing,
    Update(usize, usize, String),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u64..=20u64).prop_map(Op::Add),
        (0usize..16usize).prop_map(Op::Remove),
        Just(Op::RemoveMissing),
        (0usize..16usize, 0usize..4usize, "[A-Z]{2,4} [0-9]{3}")
            .prop_map(|(i, f, v)| Op::Update(i, f, v)),
    ]
}

proptest! {
    /// Size always equals adds minus successful removes, and ids never collide.
    #[test]
    fn list_size_tracks_adds_and_removes(
        ops in proptest::collection::vec(arb_op(), 1..=60),
    ) {
        let mut list = CourseList::new();
        let mut adds = 0usize;
        let mut removes = 0usize;

        for op in &ops {
            match op {
                Op::Add(now) => {
                    list.push_blank(*now);
                    adds += 1;
                }
                Op::Remove(index) => {
                    if !list.is_empty() {
                        let id = list.entries()[index % list.len()].id;
                        if list.remove(id) {
                            removes += 1;
                        }
                    }
                }
                Op::RemoveMissing => {
                    let before = list.clone();
                    prop_assert!(!list.remove(u64::MAX));
                    prop_assert_eq!(&list, &before);
                }
                Op::Update(index, field, value) => {
                    if !list.is_empty() {
                        let id = list.entries()[index % list.len()].id;
                        list.update(id, CourseField::ALL[*field], value.clone());
                    }
                }
            }

            let ids: HashSet<u64> = list.entries().iter().map(|e| e.id).collect();
            prop_assert_eq!(ids.len(), list.len(), "ids must stay unique");
        }

        prop_assert_eq!(list.len(), adds - removes);
    }

    /// Updating one field of one row leaves every other row and field as it was.
    #[test]
    fn update_changes_only_target(
        rows in 1usize..8,
        target in 0usize..8,
        field in 0usize..4,
        value in "[a-z0-9 ]{0,12}",
    ) {
        let mut list = CourseList::new();
        for n in 0..rows {
            let id = list.push_blank(n as u64);
            list.update(id, CourseField::Name, format!("course {}", n));
        }
        let before = list.entries().to_vec();
        let index = target % rows;
        let id = before[index].id;
        let field = CourseField::ALL[field];

        prop_assert!(list.update(id, field, value.clone()));

        for (old, new) in before.iter().zip(list.entries()) {
            if old.id == id {
                for other in CourseField::ALL {
                    if other == field {
                        prop_assert_eq!(new.field(other), value.as_str());
                    } else {
                        prop_assert_eq!(new.field(other), old.field(other));
                    }
                }
            } else {
                prop_assert_eq!(new, old);
            }
        }
    }
}
