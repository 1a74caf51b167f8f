//! Catalog core: course model, category dedupe, filtering and the pure store state machine.
mod course;
mod dedupe;
mod effect;
mod filter;
mod msg;
mod state;
mod update;
mod view_model;

pub use course::{Catalog, Category, CategoryId, Course, CoursePage};
pub use dedupe::dedupe;
pub use effect::Effect;
pub use filter::{filtered, toggle_filter};
pub use msg::Msg;
pub use state::{Generation, StoreKind, StoreState};
pub use update::update;
pub use view_model::StoreViewModel;
