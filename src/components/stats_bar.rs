//! Stats Bar Component
//!
//! Counters over the whole snapshot, independent of the filter.

use leptos::prelude::*;

use crate::models::Stats;

#[component]
pub fn StatsBar(stats: ReadSignal<Stats>) -> impl IntoView {
    view! {
        <section class="stats">
            <div class="stat-item">
                <span class="stat-label">"总计"</span>
                <span id="totalCount" class="stat-value">{move || stats.get().total}</span>
            </div>
            <div class="stat-item">
                <span class="stat-label">"已完成"</span>
                <span id="completedCount" class="stat-value">{move || stats.get().completed}</span>
            </div>
            <div class="stat-item">
                <span class="stat-label">"未完成"</span>
                <span id="pendingCount" class="stat-value">{move || stats.get().pending}</span>
            </div>
        </section>
    }
}
