//! Command execution.
//!
//! [`run`] wires configuration, the on-disk store and the terminal front end
//! together; [`execute`] maps one parsed command onto controller calls and
//! works with any store and front end.

use oryza_app::{App, DeleteOutcome, Ui};
use oryza_core::{EntityId, OrderForm, Quantity, VariantDraft};
use oryza_storage::{FileStore, KeyValueStore, LocalStore};

use crate::cli::{AddVariantArgs, Cli, Command, ContactAction, OrderAction, VariantAction};
use crate::config::OryzaConfig;
use crate::config_handlers::handle_config_command;
use crate::terminal::TerminalUi;
use crate::{Error, Result};

/// Runs a parsed command line against the configured store.
pub fn run(cli: &Cli) -> Result<()> {
    if let Command::Config { action } = &cli.command {
        return handle_config_command(cli.config.as_deref(), action, &mut std::io::stdout());
    }

    let config = OryzaConfig::load(cli.config.as_deref())?;
    let path = match &cli.store {
        Some(path) => path.clone(),
        None => config.store_path()?,
    };
    tracing::debug!(path = %path.display(), "Opening store");

    let store =
        LocalStore::new(FileStore::open(&path)?).with_prefix(config.store.key_prefix.as_str());
    let ui = TerminalUi::stdio()
        .with_assume_yes(cli.assume_yes())
        .with_json(cli.json);
    let mut app = App::load(store, ui, config.app_options())?;

    execute(&mut app, &cli.command)
}

/// Runs one store-backed command on `app`.
pub fn execute<S, U>(app: &mut App<S, U>, command: &Command) -> Result<()>
where
    S: KeyValueStore,
    U: Ui,
{
    match command {
        Command::Variants { action } => variants(app, action),
        Command::Orders { action } => orders(app, action),
        Command::Contact { action } => contact(app, action),
        Command::Config { .. } => {
            Err(Error::config("config commands run without opening the store"))
        }
    }
}

fn variants<S: KeyValueStore, U: Ui>(app: &mut App<S, U>, action: &VariantAction) -> Result<()> {
    match action {
        VariantAction::List => {
            let view = app.gallery_view();
            app.ui_mut().render_gallery(&view);
        }
        VariantAction::Show { id } => {
            if app.open_view_modal(*id).is_none() {
                tracing::debug!(id = %id, "No variant to show");
            }
        }
        VariantAction::Add(args) => {
            app.open_add_form();
            let variant = app.add_variant(draft_from(args))?;
            tracing::info!(id = %variant.id, name = %variant.name, "Variant added");
        }
        VariantAction::Delete { id, .. } => {
            check_deleted(app.delete_variant(*id)?, "variant", *id)?;
        }
    }
    Ok(())
}

fn orders<S: KeyValueStore, U: Ui>(app: &mut App<S, U>, action: &OrderAction) -> Result<()> {
    match action {
        OrderAction::List => {
            let view = app.orders_view();
            app.ui_mut().render_orders(&view);
        }
        OrderAction::Place {
            variant,
            qty,
            customer,
            location,
        } => {
            open_variant(app, *variant)?;
            app.open_order_form()?;
            let form = OrderForm::new(Quantity::parse(qty), customer.as_str(), location.as_str());
            let order = app.place_order(form)?;
            tracing::info!(id = %order.id, item = %order.item, "Order placed");
        }
        OrderAction::Delete { id, .. } => {
            check_deleted(app.delete_order(*id)?, "order", *id)?;
        }
    }
    Ok(())
}

fn contact<S: KeyValueStore, U: Ui>(app: &mut App<S, U>, action: &ContactAction) -> Result<()> {
    match action {
        ContactAction::Show => {
            let view = app.contact_view();
            app.ui_mut().render_contact(&view);
        }
        ContactAction::Edit { phone, address } => {
            app.open_contact();
            if phone.is_none() && address.is_none() {
                app.edit_contact()?;
            } else {
                app.update_contact(phone.as_deref(), address.as_deref())?;
            }
        }
        ContactAction::Send { message } => {
            app.open_contact();
            app.send_message(message);
        }
    }
    Ok(())
}

fn open_variant<S: KeyValueStore, U: Ui>(app: &mut App<S, U>, id: EntityId) -> Result<()> {
    app.open_view_modal(id)
        .map(|_| ())
        .ok_or(Error::NotFound { kind: "variant", id })
}

fn check_deleted(outcome: DeleteOutcome, kind: &'static str, id: EntityId) -> Result<()> {
    match outcome {
        DeleteOutcome::Deleted { .. } => Ok(()),
        DeleteOutcome::Cancelled => {
            tracing::info!(kind, id = %id, "Delete cancelled");
            Ok(())
        }
        DeleteOutcome::NotFound => {
            tracing::debug!(kind, id = %id, "Nothing to delete");
            Ok(())
        }
    }
}

fn draft_from(args: &AddVariantArgs) -> VariantDraft {
    VariantDraft {
        name: args.name.clone(),
        tag: args.tag.clone(),
        origin: args.origin.clone(),
        image: args.image.clone(),
        description: args.description.clone(),
        harvest_days: args.harvest_days,
        grain_type: args.grain_type.clone(),
        ecosystem: args.ecosystem.clone(),
    }
}
