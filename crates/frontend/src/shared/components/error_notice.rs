use leptos::prelude::*;

/// Single card replacing the widget when it cannot start
#[component]
pub fn ErrorNotice(message: String) -> impl IntoView {
    view! {
        <div class="pft-card pft-error" role="alert">
            {message}
        </div>
    }
}
