//! Command-line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use oryza_core::EntityId;

/// Oryza - rice variant catalogue and ordering desk
#[derive(Parser, Debug)]
#[command(name = "oryza", author, version)]
#[command(about = "Rice variant catalogue and ordering desk", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "ORYZA_CONFIG")]
    pub config: Option<String>,

    /// Store file path (overrides the configured one)
    #[arg(long, global = true, env = "ORYZA_STORE")]
    pub store: Option<PathBuf>,

    /// Print views as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Catalogue operations
    Variants {
        /// Variant action
        #[command(subcommand)]
        action: VariantAction,
    },
    /// Order operations
    Orders {
        /// Order action
        #[command(subcommand)]
        action: OrderAction,
    },
    /// Contact details
    Contact {
        /// Contact action
        #[command(subcommand)]
        action: ContactAction,
    },
    /// Configuration management
    Config {
        /// Config action
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Catalogue subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum VariantAction {
    /// Show the card gallery
    List,
    /// Show one variant in detail
    Show {
        /// Variant id
        id: EntityId,
    },
    /// Add a variant to the top of the catalogue
    Add(AddVariantArgs),
    /// Delete a variant
    Delete {
        /// Variant id
        id: EntityId,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Fields of the add-variant form.
#[derive(Args, Debug, Clone)]
pub struct AddVariantArgs {
    /// Variant name
    #[arg(long)]
    pub name: String,
    /// Card tag
    #[arg(long, default_value = "")]
    pub tag: String,
    /// Origin
    #[arg(long, default_value = "")]
    pub origin: String,
    /// Image URL (a placeholder is used when omitted)
    #[arg(long)]
    pub image: Option<String>,
    /// Description
    #[arg(long = "desc", default_value = "")]
    pub description: String,
    /// Days from planting to harvest
    #[arg(long)]
    pub harvest_days: Option<u32>,
    /// Grain type, e.g. "Long Grain"
    #[arg(long)]
    pub grain_type: Option<String>,
    /// Growing ecosystem, e.g. "Irrigated"
    #[arg(long)]
    pub ecosystem: Option<String>,
}

/// Order subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum OrderAction {
    /// Show all orders
    List,
    /// Place an order for a variant
    Place {
        /// Variant to order
        variant: EntityId,
        /// Quantity (free text is accepted)
        #[arg(long)]
        qty: String,
        /// Customer name
        #[arg(long, default_value = "")]
        customer: String,
        /// Delivery location
        #[arg(long, default_value = "")]
        location: String,
    },
    /// Delete an order
    Delete {
        /// Order id
        id: EntityId,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Contact subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ContactAction {
    /// Show phone and address
    Show,
    /// Change phone and/or address; prompts when no flag is given
    Edit {
        /// New phone number
        #[arg(long)]
        phone: Option<String>,
        /// New address
        #[arg(long)]
        address: Option<String>,
    },
    /// Send a message through the contact form
    Send {
        /// Message text
        message: String,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Print the resolved config file path
    Path,
    /// Print the effective configuration
    Show,
    /// Print one value by dotted key, e.g. `orders.date_format`
    Get {
        /// Dotted key
        key: String,
    },
    /// Write a default config file
    Init {
        /// Target file (defaults to the platform config location)
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Whether the command asked to skip confirmations.
    pub fn assume_yes(&self) -> bool {
        matches!(
            self.command,
            Command::Variants {
                action: VariantAction::Delete { yes: true, .. }
            } | Command::Orders {
                action: OrderAction::Delete { yes: true, .. }
            }
        )
    }
}
