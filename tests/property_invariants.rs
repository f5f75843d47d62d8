// tests/property_invariants.rs

mod common;
use crate::common::builders::{PatchBuilder, date, is_symmetric};

use chrono::Days;
use proptest::prelude::*;

use construplan::dag::{check_integrity, resolve};
use construplan::engine::ActivityStore;
use construplan::model::{ActivityDefaults, ActivityDraft, ActivityId};

#[derive(Debug, Clone)]
enum Op {
    Create {
        duration: i64,
        after: Vec<ActivityId>,
        before: Vec<ActivityId>,
    },
    SetPredecessors(ActivityId, Vec<ActivityId>),
    SetSuccessors(ActivityId, Vec<ActivityId>),
    SetDuration(ActivityId, i64),
    Remove(ActivityId),
}

fn ids() -> impl Strategy<Value = Vec<ActivityId>> {
    proptest::collection::vec(1..8u64, 0..3)
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (1..6i64, ids(), ids()).prop_map(|(duration, after, before)| Op::Create {
            duration,
            after,
            before,
        }),
        2 => (1..8u64, ids()).prop_map(|(id, preds)| Op::SetPredecessors(id, preds)),
        2 => (1..8u64, ids()).prop_map(|(id, succs)| Op::SetSuccessors(id, succs)),
        1 => (1..8u64, -2..6i64).prop_map(|(id, d)| Op::SetDuration(id, d)),
        1 => (1..8u64).prop_map(Op::Remove),
    ]
}

fn apply(store: &mut ActivityStore, op: Op) -> bool {
    let result = match op {
        Op::Create {
            duration,
            after,
            before,
        } => {
            let draft = ActivityDraft {
                start: Some("2024-01-01".to_string()),
                duration: Some(duration),
                predecessors: Some(after),
                successors: Some(before),
                ..Default::default()
            };
            let new = draft
                .validate(&ActivityDefaults::default(), date("2024-01-01"))
                .unwrap();
            store.create(new).map(|_| ())
        }
        Op::SetPredecessors(id, preds) => store
            .update(id, PatchBuilder::new().predecessors(&preds).build())
            .map(|_| ()),
        Op::SetSuccessors(id, succs) => store
            .update(id, PatchBuilder::new().successors(&succs).build())
            .map(|_| ()),
        Op::SetDuration(id, d) => store
            .update(id, PatchBuilder::new().duration(d).build())
            .map(|_| ()),
        Op::Remove(id) => store.remove(id).map(|_| ()),
    };
    result.is_ok()
}

fn op_sequence() -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(op_strategy(), 1..40)
}

proptest! {
    #[test]
    fn relations_stay_symmetric_and_acyclic(ops in op_sequence()) {
        let mut store = ActivityStore::default();

        for op in ops {
            let before = store.clone();
            let applied = apply(&mut store, op);

            if !applied {
                prop_assert_eq!(&store, &before);
            }
            prop_assert!(is_symmetric(store.all()));
            prop_assert!(check_integrity(store.all()).cycles.is_empty());
        }
    }

    #[test]
    fn resolved_dates_follow_the_propagation_rule(ops in op_sequence()) {
        let mut store = ActivityStore::default();
        for op in ops {
            apply(&mut store, op);
        }

        let resolved = resolve(store.all()).unwrap();
        prop_assert_eq!(&resolved, &resolve(store.all()).unwrap());

        for activity in store.all() {
            let finishes: Vec<_> = activity
                .predecessors
                .iter()
                .filter_map(|p| store.get(*p))
                .map(|p| resolved[&p.id] + Days::new(u64::from(p.duration)))
                .collect();

            let expected = match finishes.into_iter().max() {
                Some(finish) => finish + Days::new(1),
                None => activity.start,
            };
            prop_assert_eq!(resolved[&activity.id], expected);
        }
    }
}
