//! Todo List Component
//!
//! Renders the latest snapshot through the current filter.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::AppContext;
use crate::view::{render_list, ListState, ListView, EMPTY_HEADLINE, EMPTY_HINT, LOADING, LOAD_FAILED};

#[component]
pub fn TodoList(list_state: ReadSignal<ListState>) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <div id="todosList" class="todos-list">
            {move || match list_state.get() {
                ListState::Loading => view! { <div class="loading">{LOADING}</div> }.into_any(),
                ListState::Failed => view! { <div class="empty-state">{LOAD_FAILED}</div> }.into_any(),
                ListState::Loaded(todos) => match render_list(&todos, ctx.filter.get()) {
                    ListView::Empty => view! {
                        <div class="empty-state">{EMPTY_HEADLINE}<br />{EMPTY_HINT}</div>
                    }.into_any(),
                    ListView::Rows(rows) => rows
                        .into_iter()
                        .map(|row| view! { <TodoRow row=row /> })
                        .collect_view()
                        .into_any(),
                },
            }}
        </div>
    }
}
