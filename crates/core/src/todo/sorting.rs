use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::types::TodoItem;

/// Field used to order a todo list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    #[default]
    Name,
    DueDate,
    CreatedAt,
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Which todos to keep when filtering by completion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Done,
    Pending,
}

impl StatusFilter {
    /// Returns true if the todo passes this filter.
    pub fn matches(&self, todo: &TodoItem) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Done => todo.done,
            StatusFilter::Pending => !todo.done,
        }
    }
}

fn compare(a: &TodoItem, b: &TodoItem, by: SortBy) -> Ordering {
    match by {
        SortBy::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortBy::DueDate => a.due_date.cmp(&b.due_date),
        SortBy::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

/// Sorts todos in place. The sort is stable, so equal keys keep their order.
pub fn sort_todos(todos: &mut [TodoItem], by: SortBy, order: SortOrder) {
    todos.sort_by(|a, b| {
        let ordering = compare(a, b, by);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
}

/// Keeps only the todos matching `filter`.
pub fn filter_todos(todos: Vec<TodoItem>, filter: StatusFilter) -> Vec<TodoItem> {
    todos.into_iter().filter(|todo| filter.matches(todo)).collect()
}

/// Filters then sorts a todo list for display.
pub fn arrange_todos(
    todos: Vec<TodoItem>,
    filter: StatusFilter,
    by: SortBy,
    order: SortOrder,
) -> Vec<TodoItem> {
    let mut todos = filter_todos(todos, filter);
    sort_todos(&mut todos, by, order);
    todos
}
