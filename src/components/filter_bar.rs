//! Filter Bar Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Filter;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <div class="filter-buttons">
            {Filter::ALL.iter().map(|&filter| {
                let is_active = move || ctx.filter.get() == filter;
                view! {
                    <button
                        class=move || if is_active() { "btn btn-filter active" } else { "btn btn-filter" }
                        data-filter=filter.as_str()
                        on:click=move |_| ctx.set_filter(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
