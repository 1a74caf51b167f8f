#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Load the catalog unless it is already loaded or loading.
    InitRequested,
    /// Load the catalog unconditionally, bypassing the init guard.
    FetchRequested,
    /// Engine delivered a catalog for the given generation.
    FetchSucceeded {
        generation: crate::Generation,
        catalog: crate::Catalog,
    },
    /// Engine gave up on the fetch for the given generation.
    FetchFailed { generation: crate::Generation },
    /// User picked a category; picking the active one again clears it.
    FilterToggled(Option<crate::CategoryId>),
    /// Drop everything and start over on the next init.
    ResetRequested,
}
