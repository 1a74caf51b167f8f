use std::sync::Once;

use catalog_core::{update, Catalog, Category, Course, Effect, Msg, StoreKind, StoreState};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(catalog_logging::initialize_for_tests);
}

fn sample_catalog() -> Catalog {
    Catalog::from_courses(vec![
        Course::with_categories(vec![Category::new(1, "A"), Category::new(2, "B")]),
        Course::with_categories(vec![Category::new(1, "A2")]),
        Course::with_categories(Vec::new()),
    ])
}

fn fetch_generation(effects: &[Effect]) -> u64 {
    effects
        .iter()
        .map(|effect| match effect {
            Effect::FetchCatalog { generation } => *generation,
        })
        .next()
        .expect("fetch effect")
}

fn loaded_store(kind: StoreKind) -> StoreState {
    let (state, effects) = update(StoreState::new(kind), Msg::InitRequested);
    let generation = fetch_generation(&effects);
    let (state, _) = update(
        state,
        Msg::FetchSucceeded {
            generation,
            catalog: sample_catalog(),
        },
    );
    state
}

#[test]
fn init_starts_a_single_fetch() {
    init_logging();
    let (mut state, effects) = update(StoreState::launches(), Msg::InitRequested);

    assert!(state.loading());
    assert!(!state.loaded());
    assert_eq!(effects, vec![Effect::FetchCatalog { generation: 0 }]);
    assert!(state.consume_dirty());

    let (mut state, effects) = update(state, Msg::InitRequested);
    assert!(effects.is_empty());
    assert!(state.loading());
    assert!(!state.consume_dirty());
}

#[test]
fn success_populates_courses_and_unique_categories() {
    init_logging();
    let state = loaded_store(StoreKind::Launches);
    let view = state.view();

    assert!(!view.loading);
    assert!(view.loaded);
    assert_eq!(view.courses.len(), 3);
    assert_eq!(
        view.categories,
        vec![Category::new(1, "A2"), Category::new(2, "B")]
    );
    assert_eq!(view.filtered_categories, view.categories);
    assert_eq!(view.filtered_courses, view.courses);
}

#[test]
fn init_after_load_is_noop() {
    init_logging();
    let state = loaded_store(StoreKind::Launches);
    let (next, effects) = update(state.clone(), Msg::InitRequested);

    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn fetch_bypasses_the_init_guard() {
    init_logging();
    let state = loaded_store(StoreKind::Launches);
    let (next, effects) = update(state, Msg::FetchRequested);

    assert!(next.loading());
    assert!(next.loaded());
    assert_eq!(effects.len(), 1);
}

#[test]
fn categories_only_store_discards_courses() {
    init_logging();
    let state = loaded_store(StoreKind::CategoriesOnly);
    let view = state.view();

    assert_eq!(view.kind, StoreKind::CategoriesOnly);
    assert!(view.courses.is_empty());
    assert!(view.filtered_courses.is_empty());
    assert_eq!(view.categories.len(), 2);
    assert!(view.loaded);
}

#[test]
fn failure_clears_loading_and_keeps_previous_data() {
    init_logging();
    let state = loaded_store(StoreKind::Launches);
    let before = state.view();

    let (state, effects) = update(state, Msg::FetchRequested);
    let generation = fetch_generation(&effects);
    let (state, effects) = update(state, Msg::FetchFailed { generation });

    assert!(effects.is_empty());
    let after = state.view();
    assert!(!after.loading);
    assert_eq!(after.courses, before.courses);
    assert_eq!(after.categories, before.categories);
    assert!(after.loaded);
}

#[test]
fn failure_on_empty_store_returns_to_empty() {
    init_logging();
    let (state, effects) = update(StoreState::launches(), Msg::InitRequested);
    let generation = fetch_generation(&effects);
    let (state, _) = update(state, Msg::FetchFailed { generation });

    assert!(!state.loading());
    assert!(!state.loaded());
    assert!(state.courses().is_empty());

    // Not loaded, so init is allowed to try again.
    let (_, effects) = update(state, Msg::InitRequested);
    assert_eq!(effects.len(), 1);
}

#[test]
fn filter_toggle_narrows_courses_but_not_categories() {
    init_logging();
    let state = loaded_store(StoreKind::Launches);

    let (state, _) = update(state, Msg::FilterToggled(Some(2)));
    let view = state.view();
    assert_eq!(view.filter_id, Some(2));
    assert_eq!(view.filtered_courses, view.courses[..1].to_vec());
    assert_eq!(view.filtered_categories.len(), 2);

    let (state, _) = update(state, Msg::FilterToggled(Some(2)));
    assert_eq!(state.filter_id(), None);
    assert_eq!(state.filtered_courses().len(), 3);
}

#[test]
fn filter_switches_between_ids() {
    init_logging();
    let (state, _) = update(StoreState::launches(), Msg::FilterToggled(Some(5)));
    let (state, _) = update(state, Msg::FilterToggled(Some(7)));

    assert_eq!(state.filter_id(), Some(7));
    assert!(state.filtered_courses().is_empty());
}

#[test]
fn reset_restores_initial_values_and_allows_fresh_fetch() {
    init_logging();
    let state = loaded_store(StoreKind::Launches);
    let (state, _) = update(state, Msg::FilterToggled(Some(1)));

    let (mut state, effects) = update(state, Msg::ResetRequested);
    assert!(effects.is_empty());
    assert!(state.consume_dirty());

    let view = state.view();
    assert!(view.courses.is_empty());
    assert!(view.categories.is_empty());
    assert!(!view.loading);
    assert!(!view.loaded);
    assert_eq!(view.filter_id, None);
    assert_eq!(view.kind, StoreKind::Launches);

    let (_, effects) = update(state, Msg::InitRequested);
    assert_eq!(effects, vec![Effect::FetchCatalog { generation: 1 }]);
}

#[test]
fn late_result_after_reset_is_discarded() {
    init_logging();
    let (state, effects) = update(StoreState::launches(), Msg::InitRequested);
    let stale = fetch_generation(&effects);
    let (mut state, _) = update(state, Msg::ResetRequested);
    assert!(state.consume_dirty());

    let (mut state, _) = update(
        state,
        Msg::FetchSucceeded {
            generation: stale,
            catalog: sample_catalog(),
        },
    );

    assert!(state.courses().is_empty());
    assert!(state.categories().is_empty());
    assert!(!state.loaded());
    assert!(!state.consume_dirty());
}

#[test]
fn stale_failure_does_not_clear_a_newer_fetch() {
    init_logging();
    let (state, effects) = update(StoreState::launches(), Msg::InitRequested);
    let stale = fetch_generation(&effects);
    let (state, _) = update(state, Msg::ResetRequested);
    let (state, effects) = update(state, Msg::InitRequested);
    let current = fetch_generation(&effects);
    assert_ne!(stale, current);

    let (state, _) = update(state, Msg::FetchFailed { generation: stale });
    assert!(state.loading());

    let (state, _) = update(
        state,
        Msg::FetchSucceeded {
            generation: current,
            catalog: sample_catalog(),
        },
    );
    assert!(!state.loading());
    assert!(state.loaded());
}
