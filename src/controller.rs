//! Todo Controller
//!
//! One async operation per user gesture. Every operation owns its failure:
//! it logs, shows a blocking notification and reports an [`Outcome`]
//! telling the view whether to re-fetch. Nothing is mutated locally.

use crate::api::{ApiError, TodoApi};
use crate::models::{Health, NewTodo, Todo, TodoId, TodoPatch};
use crate::notify::Notifier;
use crate::view::ListState;

/// User-facing messages
pub mod messages {
    pub const EMPTY_TITLE: &str = "请输入待办事项标题";
    pub const EMPTY_EDIT_TITLE: &str = "标题不能为空";
    pub const ADD_FAILED: &str = "添加待办事项失败，请重试";
    pub const TOGGLE_FAILED: &str = "操作失败，请重试";
    pub const EDIT_LOAD_FAILED: &str = "加载待办事项失败，请重试";
    pub const SAVE_FAILED: &str = "保存失败，请重试";
    pub const CONFIRM_DELETE: &str = "确定要删除这个待办事项吗？";
    pub const DELETE_FAILED: &str = "删除失败，请重试";
}

/// What the view does after a gesture completes
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Re-fetch the list and re-render
    Refresh,
    /// Leave the current render as it is
    Stay,
    /// Swap the row for an edit form pre-filled with this item
    Edit(Todo),
}

pub struct TodoController<A, N> {
    api: A,
    notifier: N,
}

impl<A: TodoApi, N: Notifier> TodoController<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self { api, notifier }
    }

    /// Fetch the full snapshot. Failure yields [`ListState::Failed`], never a dialog.
    pub async fn load(&self) -> ListState {
        match self.api.list().await {
            Ok(todos) => {
                log::debug!("loaded {} todos", todos.len());
                ListState::Loaded(todos)
            }
            Err(e) => {
                log::error!("error loading todos: {}", e);
                ListState::Failed
            }
        }
    }

    pub async fn add(&self, title: &str, description: &str) -> Outcome {
        let Some(todo) = NewTodo::from_input(title, description) else {
            self.notifier.alert(messages::EMPTY_TITLE);
            return Outcome::Stay;
        };
        match self.api.create(&todo).await {
            Ok(()) => Outcome::Refresh,
            Err(e) => self.fail("adding todo", &e, messages::ADD_FAILED),
        }
    }

    /// Read the current state, then write its inverse.
    pub async fn toggle(&self, id: &TodoId) -> Outcome {
        let current = match self.api.get(id).await {
            Ok(todo) => todo,
            Err(e) => return self.fail("toggling todo", &e, messages::TOGGLE_FAILED),
        };
        let patch = TodoPatch::completed(!current.completed);
        match self.api.update(id, &patch).await {
            Ok(()) => Outcome::Refresh,
            Err(e) => self.fail("toggling todo", &e, messages::TOGGLE_FAILED),
        }
    }

    pub async fn begin_edit(&self, id: &TodoId) -> Outcome {
        match self.api.get(id).await {
            Ok(todo) => Outcome::Edit(todo),
            Err(e) => self.fail("editing todo", &e, messages::EDIT_LOAD_FAILED),
        }
    }

    pub async fn save_edit(&self, id: &TodoId, title: &str, description: &str) -> Outcome {
        let Some(patch) = TodoPatch::from_edit(title, description) else {
            self.notifier.alert(messages::EMPTY_EDIT_TITLE);
            return Outcome::Stay;
        };
        match self.api.update(id, &patch).await {
            Ok(()) => Outcome::Refresh,
            Err(e) => self.fail("saving edit", &e, messages::SAVE_FAILED),
        }
    }

    pub fn cancel_edit(&self) -> Outcome {
        Outcome::Refresh
    }

    pub async fn delete(&self, id: &TodoId) -> Outcome {
        if !self.notifier.confirm(messages::CONFIRM_DELETE) {
            return Outcome::Stay;
        }
        match self.api.delete(id).await {
            Ok(()) => Outcome::Refresh,
            Err(e) => self.fail("deleting todo", &e, messages::DELETE_FAILED),
        }
    }

    /// Probe the backend. Logged only; never shown as a dialog.
    pub async fn health(&self) -> Option<Health> {
        match self.api.health().await {
            Ok(health) => {
                log::info!("api health: {} ({:?})", health.status, health.timestamp);
                Some(health)
            }
            Err(e) => {
                log::warn!("api health check failed: {}", e);
                None
            }
        }
    }

    fn fail(&self, action: &str, err: &ApiError, message: &str) -> Outcome {
        log::error!("error {}: {}", action, err);
        self.notifier.alert(message);
        Outcome::Stay
    }
}
