//! Basic example demonstrating the ClickUp API client.
//!
//! Run with:
//! ```
//! CLICKUP_API_TOKEN=pk_your_token cargo run --example basic
//! ```

use clickapi::ClickUpClient;
use futures::TryStreamExt;

#[tokio::main]
async fn main() -> clickapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    println!("Creating ClickUp client...");
    let client = ClickUpClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    let me = client.authorization().user().await?;
    println!("Authorized as {}", me.display_name());

    println!("\n--- Workspaces ---");
    let workspaces = client.authorization().workspaces().await?;
    for workspace in &workspaces {
        println!("  - {} ({})", workspace.name, workspace.id);
    }

    let Some(workspace) = workspaces.first() else {
        println!("No workspaces available");
        return Ok(());
    };

    println!("\n--- Spaces in {} ---", workspace.name);
    let spaces = client.spaces().list(&workspace.id, false).await?;
    for space in &spaces {
        println!("  - {} ({})", space.name, space.id);
    }

    // Walk into the first folder of the first space
    let Some(space) = spaces.first() else {
        return Ok(());
    };
    let folders = client.folders().list(&space.id, false).await?;
    let Some(folder) = folders.first() else {
        println!("Space {} has no folders", space.name);
        return Ok(());
    };
    let lists = client.lists().in_folder(&folder.id, false).await?;

    for list in lists.iter().take(3) {
        println!("\n--- Tasks in {} ---", list.name);
        let tasks: Vec<_> = client
            .tasks()
            .list(&list.id)
            .include_closed(true)
            .stream()
            .try_collect()
            .await?;
        println!("Found {} tasks", tasks.len());

        for task in tasks.iter().take(5) {
            let status = task.status_name().unwrap_or("none");
            let priority = task
                .priority_level()
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!("  - [{status}] {} ({priority})", task.name);
        }

        if let Some(task) = tasks.first() {
            let comments = client.comments().on_task(task.id.clone()).page(None).await?;
            println!("  Latest comments on {}: {}", task.name, comments.len());
        }
    }

    println!("\nDone!");
    Ok(())
}
