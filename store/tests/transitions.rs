use std::collections::HashSet;
use std::sync::Arc;

use store::labels::UPDATE_SUFFIX;
use store::{
    apply, Action, Entry, EntryId, IdCounter, LabelGenerator, Lcg, SequenceSource, State,
};

fn populated(ids: &IdCounter) -> State {
    let mut rows = LabelGenerator::new(ids, Lcg::new(11));
    apply(&State::initial(), &Action::Run, &mut rows)
}

#[test]
fn build_data_ids_are_fresh_and_distinct() {
    let ids = IdCounter::new();
    let mut rows = LabelGenerator::new(&ids, Lcg::new(1));
    let first = rows.build_data(100);
    let second = rows.build_data(100);

    let distinct: HashSet<EntryId> = first.iter().chain(&second).map(|row| row.id).collect();
    assert_eq!(distinct.len(), 200);

    let max_first = first.iter().map(|row| row.id).max().unwrap();
    assert!(second.iter().all(|row| row.id > max_first));
}

#[test]
fn run_runlots_add_sizes() {
    let ids = IdCounter::new();
    let mut rows = LabelGenerator::new(&ids, Lcg::new(1));
    let state = apply(&State::initial(), &Action::Run, &mut rows);
    assert_eq!(state.len(), 1000);
    let state = apply(&state, &Action::Add, &mut rows);
    assert_eq!(state.len(), 2000);
    let state = apply(&state, &Action::RunLots, &mut rows);
    assert_eq!(state.len(), 10_000);
}

#[test]
fn add_keeps_existing_rows_in_front() {
    let ids = IdCounter::new();
    let mut rows = LabelGenerator::new(&ids, Lcg::new(1));
    let before = apply(&State::initial(), &Action::Run, &mut rows);
    let after = apply(&before, &Action::Add, &mut rows);
    for (old, new) in before.data().iter().zip(after.data()) {
        assert!(Arc::ptr_eq(old, new));
    }
    let last_old = before.data().last().unwrap().id;
    assert!(after.data()[1000..].iter().all(|row| row.id > last_old));
}

#[test]
fn run_twice_discards_old_rows() {
    let ids = IdCounter::new();
    let mut rows = LabelGenerator::new(&ids, Lcg::new(1));
    let first = apply(&State::initial(), &Action::Run, &mut rows);
    let second = apply(&first, &Action::Run, &mut rows);
    assert_eq!(second.len(), 1000);
    let old: HashSet<EntryId> = first.data().iter().map(|row| row.id).collect();
    assert!(second.data().iter().all(|row| !old.contains(&row.id)));
}

#[test]
fn clear_does_not_reset_ids() {
    let ids = IdCounter::new();
    let mut rows = LabelGenerator::new(&ids, Lcg::new(1));
    let state = apply(&State::initial(), &Action::Run, &mut rows);
    let max_issued = state.data().iter().map(|row| row.id).max().unwrap();

    let cleared = apply(&state, &Action::Clear, &mut rows);
    assert_eq!(cleared, State::initial());

    let again = apply(&cleared, &Action::Run, &mut rows);
    assert!(again.data().iter().all(|row| row.id > max_issued));
}

#[test]
fn update_touches_every_tenth_row() {
    let ids = IdCounter::new();
    let before = populated(&ids);
    let mut rows = LabelGenerator::new(&ids, Lcg::new(2));
    let after = apply(&before, &Action::Update, &mut rows);
    assert_eq!(after.len(), 1000);

    let mut changed = 0;
    for (index, (old, new)) in before.data().iter().zip(after.data()).enumerate() {
        if index % 10 == 0 {
            changed += 1;
            assert_eq!(new.id, old.id);
            assert_eq!(new.label, format!("{}{UPDATE_SUFFIX}", old.label));
        } else {
            assert!(Arc::ptr_eq(old, new));
        }
    }
    assert_eq!(changed, 100);
}

#[test]
fn update_does_not_issue_ids() {
    let ids = IdCounter::new();
    let before = populated(&ids);
    let next = ids.peek();
    let mut rows = LabelGenerator::new(&ids, Lcg::new(2));
    apply(&before, &Action::Update, &mut rows);
    assert_eq!(ids.peek(), next);
}

#[test]
fn swap_rows_exchanges_one_and_998() {
    let ids = IdCounter::new();
    let before = populated(&ids).with_selected(Some(EntryId::new(7)));
    let mut rows = LabelGenerator::new(&ids, Lcg::new(2));
    let after = apply(&before, &Action::SwapRows, &mut rows);

    assert!(Arc::ptr_eq(&after.data()[1], &before.data()[998]));
    assert!(Arc::ptr_eq(&after.data()[998], &before.data()[1]));
    for index in (0..1000).filter(|index| *index != 1 && *index != 998) {
        assert!(Arc::ptr_eq(&after.data()[index], &before.data()[index]));
    }
    assert_eq!(after.selected(), before.selected());

    let restored = apply(&after, &Action::SwapRows, &mut rows);
    assert_eq!(restored, before);
}

#[test]
fn swap_rows_needs_999_rows() {
    let ids = IdCounter::new();
    let mut rows = LabelGenerator::new(&ids, Lcg::new(2));
    let short = State::new(rows.build_data(998), None);
    let after = apply(&short, &Action::SwapRows, &mut rows);
    assert!(after.shares_data_with(&short));

    let just_enough = State::new(rows.build_data(999), None);
    let after = apply(&just_enough, &Action::SwapRows, &mut rows);
    assert!(Arc::ptr_eq(&after.data()[998], &just_enough.data()[1]));
}

#[test]
fn select_only_changes_selection() {
    let ids = IdCounter::new();
    let before = populated(&ids);
    let mut rows = LabelGenerator::new(&ids, Lcg::new(2));
    let target = Arc::clone(&before.data()[42]);
    let after = apply(&before, &Action::Select(Arc::clone(&target)), &mut rows);
    assert_eq!(after.selected(), Some(target.id));
    assert!(after.shares_data_with(&before));
}

#[test]
fn selection_survives_bulk_actions() {
    let ids = IdCounter::new();
    let mut rows = LabelGenerator::new(&ids, Lcg::new(2));
    let state = populated(&ids);
    let target = Arc::clone(&state.data()[0]);
    let mut state = apply(&state, &Action::Select(target), &mut rows);
    let selected = state.selected();
    for action in [
        Action::Update,
        Action::SwapRows,
        Action::Add,
        Action::Run,
        Action::RunLots,
    ] {
        state = apply(&state, &action, &mut rows);
        assert_eq!(state.selected(), selected, "after {}", action.kind());
    }
}

#[test]
fn remove_by_identity() {
    let ids = IdCounter::new();
    let before = populated(&ids);
    let mut rows = LabelGenerator::new(&ids, Lcg::new(2));
    let target = Arc::clone(&before.data()[10]);
    let after = apply(&before, &Action::Remove(Arc::clone(&target)), &mut rows);
    assert_eq!(after.len(), 999);
    assert!(after.data().iter().all(|row| row.id != target.id));
    assert!(Arc::ptr_eq(&after.data()[10], &before.data()[11]));
}

#[test]
fn remove_foreign_row_is_no_op() {
    let ids = IdCounter::new();
    let before = populated(&ids);
    let mut rows = LabelGenerator::new(&ids, Lcg::new(2));
    let lookalike = Arc::new(Entry::clone(&before.data()[10]));
    let after = apply(&before, &Action::Remove(lookalike), &mut rows);
    assert_eq!(after.len(), 1000);
    assert_eq!(after, before);
}

#[test]
fn remove_selected_row_leaves_dangling_selection() {
    let ids = IdCounter::new();
    let mut rows = LabelGenerator::new(&ids, Lcg::new(3));
    let state = apply(&State::initial(), &Action::Run, &mut rows);
    assert_eq!(state.len(), 1000);

    let fifth = Arc::clone(&state.data()[5]);
    let state = apply(&state, &Action::Select(Arc::clone(&fifth)), &mut rows);
    assert_eq!(state.selected(), Some(fifth.id));

    let state = apply(&state, &Action::Remove(Arc::clone(&fifth)), &mut rows);
    assert_eq!(state.len(), 999);
    assert_eq!(state.selected(), Some(fifth.id));
    assert!(state.data().iter().all(|row| row.id != fifth.id));
}

#[test]
fn inputs_are_not_mutated() {
    let ids = IdCounter::new();
    let before = populated(&ids);
    let snapshot: Vec<Entry> = before.data().iter().map(|row| Entry::clone(row)).collect();
    let mut rows = LabelGenerator::new(&ids, Lcg::new(2));
    for action in [Action::Update, Action::SwapRows, Action::Add, Action::Clear] {
        apply(&before, &action, &mut rows);
    }
    let after: Vec<Entry> = before.data().iter().map(|row| Entry::clone(row)).collect();
    assert_eq!(snapshot, after);
}

#[test]
fn fixed_sequence_gives_exact_labels() {
    let ids = IdCounter::new();
    let mut rows = LabelGenerator::new(&ids, SequenceSource::new([0, 0, 0, 24, 10, 12]));
    let data = rows.build_data(2);
    assert_eq!(data[0].label, "pretty red table");
    assert_eq!(data[1].label, "fancy orange keyboard");
    assert_eq!(data[0].id, EntryId::new(1));
    assert_eq!(data[1].id, EntryId::new(2));
}

#[test]
fn ids_keep_increasing_past_u32_range() {
    let ids = IdCounter::starting_at(u64::from(u32::MAX) - 1);
    let mut rows = LabelGenerator::new(&ids, Lcg::new(1));
    let issued: Vec<u64> = rows.build_data(4).iter().map(|row| row.id.raw()).collect();
    assert!(issued.windows(2).all(|pair| pair[0] < pair[1]), "{issued:?}");
    assert!(issued.iter().all(|&id| id != 0));
}

#[test]
fn selecting_first_row_of_zero_started_counter_reads_as_selected() {
    let ids = IdCounter::starting_at(0);
    let mut rows = LabelGenerator::new(&ids, Lcg::new(1));
    let state = apply(&State::initial(), &Action::Run, &mut rows);
    let first = Arc::clone(&state.data()[0]);
    assert_eq!(first.id, EntryId::new(1));

    let state = apply(&state, &Action::Select(first), &mut rows);
    assert_eq!(state.selected(), Some(EntryId::new(1)));
    assert_eq!(state.selected_raw(), 1);
}
