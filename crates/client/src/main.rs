//! todos-client CLI entry point.

use clap::Parser;
use todos_client::cli::todos::TodosAction;
use todos_client::cli::{Cli, OutputFormat};
use todos_client::client::TodosClient;
use todos_client::output::{format_output, pretty};
use todos_core::todo::{arrange_todos, CreateTodoRequest, UpdateTodoRequest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = match cli.token {
        Some(token) => TodosClient::new(&cli.base_url).with_token(token),
        None => TodosClient::new(&cli.base_url),
    };

    match cli.command {
        TodosAction::List {
            sort_by,
            order,
            status,
        } => {
            let todos = client.list_todos().await?;
            let todos = arrange_todos(todos, status.into(), sort_by.into(), order.into());
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&todos, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_todos(&todos)),
            }
        }
        TodosAction::Create { name, due_date } => {
            let mut request = CreateTodoRequest::new(name);
            if let Some(due_date) = due_date {
                request = request.with_due_date(due_date);
            }
            let todo = client.create_todo(&request).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&todo, cli.format)),
                OutputFormat::Pretty => println!("Created:\n{}", pretty::format_todo(&todo)),
            }
        }
        TodosAction::Update {
            id,
            name,
            due_date,
            done,
        } => {
            let todo = client
                .update_todo(
                    id,
                    &UpdateTodoRequest {
                        name,
                        due_date,
                        done,
                    },
                )
                .await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&todo, cli.format)),
                OutputFormat::Pretty => println!("Updated:\n{}", pretty::format_todo(&todo)),
            }
        }
        TodosAction::Toggle { id } => {
            let todo = client.toggle_todo(id).await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&todo, cli.format)),
                OutputFormat::Pretty => println!("Toggled:\n{}", pretty::format_todo(&todo)),
            }
        }
        TodosAction::Delete { id } => {
            client.delete_todo(id).await?;
            if !cli.quiet {
                println!("Deleted todo {}", id);
            }
        }
        TodosAction::Attach { id, file } => {
            let upload_url = client.generate_upload_url(id).await?;
            match file {
                Some(path) => {
                    let bytes = tokio::fs::read(&path).await?;
                    client.upload_attachment(&upload_url, bytes).await?;
                    if !cli.quiet {
                        println!("Uploaded {} to todo {}", path.display(), id);
                    }
                }
                None => match cli.format {
                    OutputFormat::Json => println!(
                        "{}",
                        format_output(&serde_json::json!({ "uploadUrl": upload_url }), cli.format)
                    ),
                    OutputFormat::Pretty => println!("{}", upload_url),
                },
            }
        }
    }

    Ok(())
}
