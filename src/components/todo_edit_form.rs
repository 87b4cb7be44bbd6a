//! Inline Edit Form Component
//!
//! Replaces a row while it is being edited. Cancel re-fetches the list.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Todo;

#[component]
pub fn TodoEditForm(todo: Todo) -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let dom_id = todo.id.to_string();
    let id = todo.id;
    let (title, set_title) = signal(todo.title);
    let (description, set_description) = signal(todo.description.unwrap_or_default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let id = id.clone();
        let title_text = title.get();
        let description_text = description.get();
        ctx.dispatch(move |c| async move { c.save_edit(&id, &title_text, &description_text).await });
    };

    let on_cancel = move |_| {
        let outcome = ctx.controller().cancel_edit();
        ctx.apply(outcome);
    };

    view! {
        <form class="edit-form" on:submit=on_submit>
            <input
                type="text"
                id=format!("edit-title-{}", dom_id)
                required=true
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                id=format!("edit-description-{}", dom_id)
                rows="3"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            <div class="edit-form-actions">
                <button type="submit" class="btn btn-small btn-save">"保存"</button>
                <button type="button" class="btn btn-small btn-cancel" on:click=on_cancel>"取消"</button>
            </div>
        </form>
    }
}
