//! Todo Row Component
//!
//! One item with its actions, or the inline edit form while editing.
//! User text is only ever inserted as text nodes.

use leptos::prelude::*;

use crate::components::TodoEditForm;
use crate::context::AppContext;
use crate::view::{RowView, CREATED_PREFIX};

#[component]
pub fn TodoRow(row: RowView) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let row_class = row.class();
    let data_id = row.id.to_string();
    // Memoized so opening another row's form does not rebuild this one
    let editing_todo = {
        let id = row.id.clone();
        Memo::new(move |_| ctx.editing_for(&id))
    };
    let is_editing = move || editing_todo.with(|t| t.is_some());

    view! {
        <div
            class=move || if is_editing() { format!("{} editing", row_class) } else { row_class.to_string() }
            data-id=data_id
        >
            {move || match editing_todo.get() {
                Some(todo) => view! { <TodoEditForm todo=todo /> }.into_any(),
                None => row_body(ctx, row.clone()).into_any(),
            }}
        </div>
    }
}

fn row_body(ctx: AppContext, row: RowView) -> impl IntoView {
    let toggle_id = row.id.clone();
    let edit_id = row.id.clone();
    let delete_id = row.id.clone();

    view! {
        <div class="todo-header">
            <div class="todo-title">{row.title.clone()}</div>
        </div>
        {row.description.clone().map(|d| view! { <div class="todo-description">{d}</div> })}
        <div class="todo-meta">
            <div class="todo-date">{CREATED_PREFIX}{row.created.clone()}</div>
            <div class="todo-actions">
                <button class="btn btn-small btn-complete" on:click=move |_| {
                    let id = toggle_id.clone();
                    ctx.dispatch(move |c| async move { c.toggle(&id).await });
                }>
                    {row.toggle_label()}
                </button>
                <button class="btn btn-small btn-edit" on:click=move |_| {
                    let id = edit_id.clone();
                    ctx.dispatch(move |c| async move { c.begin_edit(&id).await });
                }>
                    "编辑"
                </button>
                <button class="btn btn-small btn-delete" on:click=move |_| {
                    let id = delete_id.clone();
                    ctx.dispatch(move |c| async move { c.delete(&id).await });
                }>
                    "删除"
                </button>
            </div>
        </div>
    }
}
