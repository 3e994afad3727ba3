use super::state::{BrowserState, ParamTable, NO_PARAMETERS};
use super::view_model::CategoryBrowserViewModel;
use crate::shared::components::ui::Select;
use leptos::prelude::*;

const MAP_CAPTION: &str = "Map images are generated from potential non-zero NPP.";

#[component]
pub fn CategoryBrowser(state: BrowserState) -> impl IntoView {
    let vm = CategoryBrowserViewModel::new(state);

    view! {
        <div class="pft-ui">
            <div class="pft-controls pft-card">
                <Select
                    id="pft-select"
                    label="PFT"
                    aria_label="Select PFT"
                    value=Signal::derive(move || vm.selected())
                    options=Signal::derive(move || vm.options())
                    on_change=Callback::new(move |name: String| vm.select(name))
                />
                <span id="pft-phenology" style="opacity:.8">
                    {move || vm.phenology_label()}
                </span>
            </div>
            <div class="pft-row">
                <div class="pft-card">
                    <h3 style="margin-top:0">"Parameters"</h3>
                    <ParameterTable vm=vm />
                </div>
                <div class="pft-card">
                    <h3 style="margin-top:0">"Distribution map"</h3>
                    <DistributionMap vm=vm />
                    <div style="opacity:.8; font-size:.9em; margin-top:.4rem">
                        {MAP_CAPTION}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ParameterTable(vm: CategoryBrowserViewModel) -> impl IntoView {
    view! {
        <table class="pft-table" id="pft-params">
            {move || match vm.table() {
                ParamTable::Blank => ().into_any(),
                ParamTable::Placeholder => view! {
                    <tr>
                        <td>{NO_PARAMETERS}</td>
                    </tr>
                }
                .into_any(),
                ParamTable::Rows(rows) => rows
                    .into_iter()
                    .map(|row| view! {
                        <tr>
                            <th>{row.name}</th>
                            <td>{row.value}</td>
                        </tr>
                    })
                    .collect_view()
                    .into_any(),
            }}
        </table>
    }
}

#[component]
fn DistributionMap(vm: CategoryBrowserViewModel) -> impl IntoView {
    // on:error stays bound across renders; the view model drops failures
    // of a source that is no longer current.
    view! {
        <img
            id="pft-map"
            class="pft-map"
            src=move || vm.map().src
            alt=move || vm.map().alt
            style:display=move || if vm.map().visible { "" } else { "none" }
            on:error=move |ev| {
                let img = event_target::<web_sys::HtmlImageElement>(&ev);
                vm.image_failed(img.get_attribute("src"));
            }
        />
    }
}
