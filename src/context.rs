//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::HttpTodoApi;
use crate::config::AppConfig;
use crate::controller::{Outcome, TodoController};
use crate::models::{Filter, Todo, TodoId};
use crate::notify::BrowserNotifier;
use crate::view::EditRows;

/// Controller wired to the real API and browser dialogs
pub type Controller = TodoController<HttpTodoApi, BrowserNotifier>;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to re-fetch the list - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to re-fetch the list - write
    set_reload_trigger: WriteSignal<u32>,
    /// Current filter - read
    pub filter: ReadSignal<Filter>,
    /// Current filter - write
    set_filter: WriteSignal<Filter>,
    /// Rows showing the edit form - read
    pub editing: ReadSignal<EditRows>,
    /// Rows showing the edit form - write
    set_editing: WriteSignal<EditRows>,
    /// One client for the page lifetime, cloned per operation
    api: StoredValue<HttpTodoApi>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        let (filter, set_filter) = signal(Filter::default());
        let (editing, set_editing) = signal(EditRows::default());
        Self {
            reload_trigger,
            set_reload_trigger,
            filter,
            set_filter,
            editing,
            set_editing,
            api: StoredValue::new(HttpTodoApi::new(config.api_base)),
        }
    }

    /// Re-fetch the list. Every open edit form is discarded.
    pub fn reload(&self) {
        self.set_editing.update(|rows| rows.clear());
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Switch filter and re-fetch
    pub fn set_filter(&self, filter: Filter) {
        self.set_filter.set(filter);
        self.reload();
    }

    /// Item a row's edit form was opened with, if that row is editing
    pub fn editing_for(&self, id: &TodoId) -> Option<Todo> {
        self.editing.with(|rows| rows.get(id).cloned())
    }

    pub fn controller(&self) -> Controller {
        let api = self.api.with_value(|api| api.clone());
        TodoController::new(api, BrowserNotifier)
    }

    /// Apply what a controller operation asked for
    pub fn apply(&self, outcome: Outcome) {
        match outcome {
            Outcome::Refresh => self.reload(),
            Outcome::Stay => {}
            Outcome::Edit(todo) => self.set_editing.update(|rows| rows.open(todo)),
        }
    }

    /// Run a controller operation in the background, then apply its outcome
    pub fn dispatch<F, Fut>(&self, op: F)
    where
        F: FnOnce(Controller) -> Fut + 'static,
        Fut: Future<Output = Outcome> + 'static,
    {
        let ctx = *self;
        spawn_local(async move {
            let outcome = op(ctx.controller()).await;
            ctx.apply(outcome);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64) -> Todo {
        Todo {
            id: TodoId::Int(id),
            title: format!("Todo {}", id),
            description: None,
            completed: false,
            created_at: None,
        }
    }

    #[test]
    fn test_opening_edit_keeps_other_rows_editing() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppContext::new(AppConfig::default());

            ctx.apply(Outcome::Edit(todo(1)));
            ctx.apply(Outcome::Edit(todo(2)));

            assert_eq!(ctx.editing_for(&TodoId::Int(1)), Some(todo(1)));
            assert_eq!(ctx.editing_for(&TodoId::Int(2)), Some(todo(2)));
            assert_eq!(ctx.editing_for(&TodoId::Int(3)), None);
        });
    }

    #[test]
    fn test_reload_closes_all_edit_forms() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = AppContext::new(AppConfig::default());
            ctx.apply(Outcome::Edit(todo(1)));
            ctx.apply(Outcome::Edit(todo(2)));

            ctx.apply(Outcome::Stay);
            assert!(ctx.editing_for(&TodoId::Int(1)).is_some());

            let before = ctx.reload_trigger.get_untracked();
            ctx.apply(Outcome::Refresh);
            assert_eq!(ctx.reload_trigger.get_untracked(), before + 1);
            assert_eq!(ctx.editing_for(&TodoId::Int(1)), None);
            assert_eq!(ctx.editing_for(&TodoId::Int(2)), None);
        });
    }
}
