//! Todo Frontend App
//!
//! Main application component: add form, filter bar, counters, list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{FilterBar, StatsBar, TodoForm, TodoList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::models::Stats;
use crate::view::ListState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(config);
    provide_context(ctx);

    let (list_state, set_list_state) = signal(ListState::Loading);
    let (stats, set_stats) = signal(Stats::default());
    let (api_healthy, set_api_healthy) = signal::<Option<bool>>(None);

    // Probe the backend once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let health = ctx.controller().health().await;
            set_api_healthy.set(Some(health.is_some_and(|h| h.is_healthy())));
        });
    });

    // Re-fetch the full snapshot whenever a reload is triggered
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::debug!("loading todos, trigger={}", trigger);
        set_list_state.set(ListState::Loading);
        spawn_local(async move {
            let state = ctx.controller().load().await;
            // Counters keep their last values when the fetch fails
            if let ListState::Loaded(todos) = &state {
                set_stats.set(Stats::of(todos));
            }
            set_list_state.set(state);
        });
    });

    view! {
        <div class="container">
            <header>
                <h1>"待办事项"</h1>
            </header>

            <TodoForm />

            <section class="todos-section">
                <div class="todos-header">
                    <h2>"我的待办"</h2>
                    <FilterBar />
                </div>
                <TodoList list_state=list_state />
            </section>

            <StatsBar stats=stats />

            <footer class="api-status">
                {move || match api_healthy.get() {
                    None => "服务状态: 检查中",
                    Some(true) => "服务状态: 正常",
                    Some(false) => "服务状态: 不可用",
                }}
            </footer>
        </div>
    }
}
