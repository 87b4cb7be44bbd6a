//! Render Model
//!
//! Pure transformation from a fetched snapshot and the current filter to
//! what the list shows. Components only turn this into DOM.

use std::collections::HashMap;

use chrono::{DateTime, Local, NaiveDateTime};

use crate::models::{Filter, Todo, TodoId};

pub const LOADING: &str = "加载中...";
pub const LOAD_FAILED: &str = "加载失败，请刷新页面重试";
pub const EMPTY_HEADLINE: &str = "暂无待办事项";
pub const EMPTY_HINT: &str = "添加一个开始吧！";
pub const CREATED_PREFIX: &str = "创建时间: ";

/// Zh-CN `toLocaleString` layout
const CREATED_FORMAT: &str = "%Y/%-m/%-d %H:%M:%S";

/// State of the most recent list fetch
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListState {
    #[default]
    Loading,
    Loaded(Vec<Todo>),
    Failed,
}

/// One rendered item
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowView {
    pub id: TodoId,
    pub title: String,
    /// Present only when non-empty
    pub description: Option<String>,
    pub created: String,
    pub completed: bool,
}

impl RowView {
    pub fn from_todo(todo: &Todo) -> Self {
        Self {
            id: todo.id.clone(),
            title: todo.title.clone(),
            description: todo.description.clone().filter(|d| !d.is_empty()),
            created: format_created_at(todo.created_at.as_deref()),
            completed: todo.completed,
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.completed {
            "取消完成"
        } else {
            "完成"
        }
    }

    pub fn class(&self) -> &'static str {
        if self.completed {
            "todo-item completed"
        } else {
            "todo-item"
        }
    }
}

/// Rows currently showing the inline edit form, each with the item
/// fetched when its edit was opened. Rows are independent of each other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditRows(HashMap<TodoId, Todo>);

impl EditRows {
    pub fn open(&mut self, todo: Todo) {
        self.0.insert(todo.id.clone(), todo);
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.0.get(id)
    }

    pub fn is_open(&self, id: &TodoId) -> bool {
        self.0.contains_key(id)
    }

    /// A re-render discards every open form
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Empty,
    Rows(Vec<RowView>),
}

/// Select the rows matching `filter`, in snapshot order.
pub fn render_list(todos: &[Todo], filter: Filter) -> ListView {
    let rows: Vec<RowView> = todos
        .iter()
        .filter(|t| filter.matches(t))
        .map(RowView::from_todo)
        .collect();
    if rows.is_empty() {
        ListView::Empty
    } else {
        ListView::Rows(rows)
    }
}

/// Localized creation time. Offset-less ISO values are local wall time;
/// anything unparseable is shown as received.
pub fn format_created_at(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.format(CREATED_FORMAT).to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format(CREATED_FORMAT).to_string();
    }
    raw.to_string()
}
