//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the clickapi binary.

use clap::{Parser, Subcommand, ValueEnum};

use crate::models::Priority;

/// ClickUp API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "clickapi", about = "ClickUp API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get a single entity by ID.
    Get {
        /// The type of entity to get.
        entity: Entity,

        /// The entity ID.
        id: String,
    },

    /// List a collection under its parent container.
    List {
        #[command(subcommand)]
        collection: Collection,
    },

    /// Create an entity.
    Create {
        #[command(subcommand)]
        target: CreateTarget,
    },

    /// Update an entity.
    Update {
        /// The type of entity to update.
        entity: UpdateEntity,

        /// The ID of the entity to update.
        id: String,

        /// New name.
        #[arg(long)]
        name: Option<String>,

        /// New status (e.g. "in progress").
        #[arg(long)]
        status: Option<String>,

        /// New priority: urgent, high, normal, low or 1-4.
        #[arg(long)]
        priority: Option<Priority>,
    },

    /// Add a comment to a task.
    Comment {
        /// The task to comment on.
        task_id: String,

        /// Comment text.
        text: String,
    },
}

/// Collections that can be listed.
#[derive(Subcommand, Debug)]
pub enum Collection {
    /// Tasks in a list.
    Tasks {
        /// List ID.
        #[arg(long)]
        list: String,

        /// Page number (0-indexed).
        #[arg(long, conflicts_with = "all")]
        page: Option<u32>,

        /// Fetch every page.
        #[arg(long)]
        all: bool,

        /// Include closed tasks.
        #[arg(long)]
        include_closed: bool,
    },

    /// Spaces in a workspace.
    Spaces {
        /// Workspace (team) ID.
        #[arg(long)]
        team: String,

        /// Include archived spaces.
        #[arg(long)]
        archived: bool,
    },

    /// Folders in a space.
    Folders {
        /// Space ID.
        #[arg(long)]
        space: String,

        /// Include archived folders.
        #[arg(long)]
        archived: bool,
    },

    /// Lists in a folder.
    Lists {
        /// Folder ID.
        #[arg(long)]
        folder: String,

        /// Include archived lists.
        #[arg(long)]
        archived: bool,
    },

    /// Comments on a task, newest first.
    Comments {
        /// Task ID.
        #[arg(long)]
        task: String,

        /// Fetch every page instead of the newest 25.
        #[arg(long)]
        all: bool,
    },

    /// Webhooks registered in a workspace.
    Webhooks {
        /// Workspace (team) ID.
        #[arg(long)]
        team: String,
    },
}

/// Entities the `create` command supports.
#[derive(Subcommand, Debug)]
pub enum CreateTarget {
    /// Create a task in a list.
    Task {
        /// List ID.
        #[arg(long)]
        list: String,

        /// Task name.
        #[arg(long)]
        name: String,

        /// Plain-text description.
        #[arg(long)]
        description: Option<String>,

        /// Priority: urgent, high, normal, low or 1-4.
        #[arg(long)]
        priority: Option<Priority>,
    },
}

/// Entity types that can be fetched by ID.
#[derive(ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum Entity {
    /// A task.
    #[value(alias = "tasks")]
    Task,
    /// A list.
    #[value(alias = "lists")]
    List,
    /// A folder.
    #[value(alias = "folders")]
    Folder,
    /// A space.
    #[value(alias = "spaces")]
    Space,
    /// A goal.
    #[value(alias = "goals")]
    Goal,
}

/// Entity types the `update` command supports.
#[derive(ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum UpdateEntity {
    #[value(alias = "tasks")]
    Task,
}
