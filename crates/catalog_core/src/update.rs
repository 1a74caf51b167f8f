use crate::{Effect, Msg, StoreState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: StoreState, msg: Msg) -> (StoreState, Vec<Effect>) {
    let effects = match msg {
        Msg::InitRequested => {
            if state.can_init() {
                start_fetch(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::FetchRequested => start_fetch(&mut state),
        Msg::FetchSucceeded {
            generation,
            catalog,
        } => {
            // Results issued before the last reset are dropped.
            if state.is_current(generation) {
                state.apply_catalog(catalog);
            }
            Vec::new()
        }
        Msg::FetchFailed { generation } => {
            // Prior courses and categories stay as they were.
            if state.is_current(generation) {
                state.apply_failure();
            }
            Vec::new()
        }
        Msg::FilterToggled(id) => {
            state.toggle_filter(id);
            Vec::new()
        }
        Msg::ResetRequested => {
            state.reset();
            Vec::new()
        }
    };

    (state, effects)
}

fn start_fetch(state: &mut StoreState) -> Vec<Effect> {
    let generation = state.begin_fetch();
    vec![Effect::FetchCatalog { generation }]
}
