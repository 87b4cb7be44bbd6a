//! New Todo Form Component
//!
//! Title + optional description, submitted as a new item.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::controller::Outcome;

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_text = title.get();
        let description_text = description.get();
        spawn_local(async move {
            let outcome = ctx.controller().add(&title_text, &description_text).await;
            if outcome == Outcome::Refresh {
                set_title.set(String::new());
                set_description.set(String::new());
            }
            ctx.apply(outcome);
        });
    };

    view! {
        <section class="add-todo-section">
            <form id="todoForm" class="todo-form" on:submit=on_submit>
                <input
                    type="text"
                    id="title"
                    placeholder="输入待办事项标题..."
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <textarea
                    id="description"
                    rows="3"
                    placeholder="描述（可选）"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" class="btn btn-primary">"添加"</button>
            </form>
        </section>
    }
}
