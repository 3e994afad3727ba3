//! PFT Browser UI Module
//!
//! MVVM split, as in the detail forms:
//! - model.rs: data file fetch
//! - state.rs: what is shown, independent of the DOM
//! - view_model.rs: state in a signal, selection and image commands
//! - view.rs: Leptos components (pure UI)

mod model;
mod state;
mod view;
mod view_model;

pub use model::fetch_dataset;
pub use state::BrowserState;
pub use view::CategoryBrowser;
pub use view_model::CategoryBrowserViewModel;
