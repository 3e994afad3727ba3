use super::state::{BrowserState, MapView, ParamTable};
use leptos::prelude::*;

/// ViewModel for the PFT browser
#[derive(Clone, Copy)]
pub struct CategoryBrowserViewModel {
    pub state: RwSignal<BrowserState>,
}

impl CategoryBrowserViewModel {
    pub fn new(state: BrowserState) -> Self {
        Self {
            state: RwSignal::new(state),
        }
    }

    /// Selection changed: render the new PFT
    pub fn select(&self, name: String) {
        // Stale or foreign values must not notify subscribers
        if !self.state.with_untracked(|s| s.contains(&name)) {
            return;
        }
        self.state.update(|s| {
            s.render(&name);
        });
    }

    /// The `<img>` reported a load error for `src`
    pub fn image_failed(&self, src: Option<String>) {
        let Some(src) = src else { return };
        let current = self
            .state
            .with_untracked(|s| s.map().src.as_deref() == Some(src.as_str()));
        if current {
            self.state.update(|s| {
                s.image_failed(&src);
            });
        }
    }

    pub fn options(&self) -> Vec<(String, String)> {
        self.state
            .with(|s| s.options().iter().map(|n| (n.clone(), n.clone())).collect())
    }

    pub fn selected(&self) -> String {
        self.state
            .with(|s| s.selected().map(str::to_string).unwrap_or_default())
    }

    pub fn phenology_label(&self) -> String {
        self.state.with(|s| s.phenology_label().to_string())
    }

    pub fn table(&self) -> ParamTable {
        self.state.with(|s| s.table().clone())
    }

    pub fn map(&self) -> MapView {
        self.state.with(|s| s.map().clone())
    }
}
