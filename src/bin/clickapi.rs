//! ClickUp API CLI binary.
//!
//! A command-line interface for interacting with the ClickUp API.

use clap::Parser;
use clickapi::cli::{Cli, Collection, Command, CreateTarget, Entity, UpdateEntity};
use clickapi::output::{CommentRow, ContainerRow, TaskRow, WebhookRow};
use clickapi::{ClickUpClient, Page, Priority, PrettyPrint};
use futures::TryStreamExt;
use serde::Serialize;
use std::process::ExitCode;
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match ClickUpClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set CLICKUP_API_TOKEN environment variable");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &ClickUpClient, cli: Cli) -> clickapi::Result<()> {
    match cli.command {
        Command::Get { entity, id } => handle_get(client, entity, &id, cli.json).await,
        Command::List { collection } => handle_list(client, collection, cli.json).await,
        Command::Create {
            target:
                CreateTarget::Task {
                    list,
                    name,
                    description,
                    priority,
                },
        } => handle_create_task(client, &list, name, description, priority, cli.json).await,
        Command::Update {
            entity: UpdateEntity::Task,
            id,
            name,
            status,
            priority,
        } => handle_update_task(client, &id, name, status, priority, cli.json).await,
        Command::Comment { task_id, text } => {
            let created = client.comments().on_task(task_id).create().text(text).send().await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&created)?);
            } else {
                println!("Created comment {}", created.id);
            }
            Ok(())
        }
    }
}

async fn handle_get(
    client: &ClickUpClient,
    entity: Entity,
    id: &str,
    json: bool,
) -> clickapi::Result<()> {
    match entity {
        Entity::Task => output_single(&client.tasks().get(id).send().await?, json),
        Entity::List => output_single(&client.lists().get(id).await?, json),
        Entity::Folder => output_single(&client.folders().get(id).await?, json),
        Entity::Space => output_single(&client.spaces().get(id).await?, json),
        Entity::Goal => output_single(&client.goals().get(id).await?, json),
    }
}

async fn handle_list(
    client: &ClickUpClient,
    collection: Collection,
    json: bool,
) -> clickapi::Result<()> {
    match collection {
        Collection::Tasks {
            list,
            page,
            all,
            include_closed,
        } => {
            let builder = client.tasks().list(list).include_closed(include_closed);
            if all {
                let tasks: Vec<_> = builder.stream().try_collect().await?;
                output_items(&tasks, json, |item| TaskRow::from(item))?;
            } else {
                let page = builder.page(page.unwrap_or(0)).send().await?;
                output_page(&page, json, |item| TaskRow::from(item))?;
            }
        }
        Collection::Spaces { team, archived } => {
            let spaces = client.spaces().list(&team, archived).await?;
            output_items(&spaces, json, |item| ContainerRow::from(item))?;
        }
        Collection::Folders { space, archived } => {
            let folders = client.folders().list(&space, archived).await?;
            output_items(&folders, json, |item| ContainerRow::from(item))?;
        }
        Collection::Lists { folder, archived } => {
            let lists = client.lists().in_folder(&folder, archived).await?;
            output_items(&lists, json, |item| ContainerRow::from(item))?;
        }
        Collection::Comments { task, all } => {
            let thread = client.comments().on_task(task);
            let comments = if all {
                thread.stream().try_collect().await?
            } else {
                thread.page(None).await?.items
            };
            output_items(&comments, json, |item| CommentRow::from(item))?;
        }
        Collection::Webhooks { team } => {
            let webhooks = client.webhooks().list(&team).await?;
            output_items(&webhooks, json, |item| WebhookRow::from(item))?;
        }
    }
    Ok(())
}

async fn handle_create_task(
    client: &ClickUpClient,
    list_id: &str,
    name: String,
    description: Option<String>,
    priority: Option<Priority>,
    json: bool,
) -> clickapi::Result<()> {
    let mut builder = client.tasks().create(list_id).name(name);
    if let Some(description) = description {
        builder = builder.description(description);
    }
    if let Some(priority) = priority {
        builder = builder.priority(priority);
    }
    output_single(&builder.send().await?, json)
}

async fn handle_update_task(
    client: &ClickUpClient,
    task_id: &str,
    name: Option<String>,
    status: Option<String>,
    priority: Option<Priority>,
    json: bool,
) -> clickapi::Result<()> {
    let mut builder = client.tasks().update(task_id);
    if let Some(name) = name {
        builder = builder.name(name);
    }
    if let Some(status) = status {
        builder = builder.status(status);
    }
    if let Some(priority) = priority {
        builder = builder.priority(priority);
    }
    output_single(&builder.send().await?, json)
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> clickapi::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_items<T, R, F>(items: &[T], json: bool, to_row: F) -> clickapi::Result<()>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        let rows: Vec<R> = items.iter().map(to_row).collect();
        println!("{}", Table::new(rows));
    }
    Ok(())
}

fn output_page<T, R, F>(page: &Page<T>, json: bool, to_row: F) -> clickapi::Result<()>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    output_items(&page.items, json, to_row)?;
    if !json {
        if page.has_more {
            println!("\nPage {} (more available)", page.page);
        } else {
            println!("\nPage {} (end)", page.page);
        }
    }
    Ok(())
}
