use crate::Generation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the course listing and derive its categories.
    FetchCatalog { generation: Generation },
}
