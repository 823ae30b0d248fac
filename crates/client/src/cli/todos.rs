//! Todo CLI commands.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Subcommand, ValueEnum};
use uuid::Uuid;

use todos_core::todo::{SortBy as CoreSortBy, SortOrder as CoreSortOrder, StatusFilter};

/// Field to sort the todo list by.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum SortBy {
    #[default]
    Name,
    DueDate,
    CreatedAt,
}

impl From<SortBy> for CoreSortBy {
    fn from(s: SortBy) -> Self {
        match s {
            SortBy::Name => CoreSortBy::Name,
            SortBy::DueDate => CoreSortBy::DueDate,
            SortBy::CreatedAt => CoreSortBy::CreatedAt,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl From<Order> for CoreSortOrder {
    fn from(o: Order) -> Self {
        match o {
            Order::Ascending => CoreSortOrder::Ascending,
            Order::Descending => CoreSortOrder::Descending,
        }
    }
}

/// Which todos to show.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Status {
    #[default]
    All,
    Done,
    Pending,
}

impl From<Status> for StatusFilter {
    fn from(s: Status) -> Self {
        match s {
            Status::All => StatusFilter::All,
            Status::Done => StatusFilter::Done,
            Status::Pending => StatusFilter::Pending,
        }
    }
}

/// Available todo actions.
#[derive(Debug, Subcommand)]
pub enum TodosAction {
    /// List your todos.
    List {
        /// Field to sort by.
        #[arg(long, value_enum, default_value_t)]
        sort_by: SortBy,
        /// Sort direction.
        #[arg(long, value_enum, default_value_t)]
        order: Order,
        /// Show only done or pending todos.
        #[arg(long, value_enum, default_value_t)]
        status: Status,
    },
    /// Create a new todo.
    Create {
        /// Todo name.
        #[arg(long)]
        name: String,
        /// Due date (YYYY-MM-DD), one week from today if omitted.
        #[arg(long)]
        due_date: Option<NaiveDate>,
    },
    /// Overwrite a todo's name, due date and done flag.
    Update {
        /// Todo ID.
        id: Uuid,
        /// New name.
        #[arg(long)]
        name: String,
        /// New due date (YYYY-MM-DD).
        #[arg(long)]
        due_date: NaiveDate,
        /// Done flag (true or false).
        #[arg(long, action = ArgAction::Set)]
        done: bool,
    },
    /// Flip a todo between done and pending.
    Toggle {
        /// Todo ID.
        id: Uuid,
    },
    /// Delete a todo and its attachment.
    Delete {
        /// Todo ID.
        id: Uuid,
    },
    /// Get an attachment upload URL, optionally uploading a file to it.
    Attach {
        /// Todo ID.
        id: Uuid,
        /// File to upload.
        #[arg(long)]
        file: Option<PathBuf>,
    },
}
