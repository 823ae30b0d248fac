//! Pretty output formatting.

use todos_core::todo::TodoItem;

/// Format a todo for display.
pub fn format_todo(todo: &TodoItem) -> String {
    let mark = if todo.done { "x" } else { " " };
    let mut output = format!(
        "[{}] {}\n  ID: {}\n  Due: {}\n  Created: {}",
        mark,
        todo.name,
        todo.todo_id,
        todo.due_date,
        todo.created_at.format("%Y-%m-%d %H:%M")
    );
    if let Some(url) = &todo.attachment_url {
        output.push_str(&format!("\n  Attachment: {}", url));
    }
    output
}

/// Format todos for display.
pub fn format_todos(todos: &[TodoItem]) -> String {
    if todos.is_empty() {
        return "No todos found.".to_string();
    }
    let mut output = format!("TODOS ({})\n", todos.len());
    output.push_str(&"-".repeat(40));
    for todo in todos {
        output.push_str(&format!("\n{}", format_todo(todo)));
        output.push('\n');
    }
    output
}
