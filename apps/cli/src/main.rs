mod render;

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use client_core::{
    config::load_settings,
    execute,
    view_state::{DELETE_FAILED_FALLBACK, LOAD_FAILED_FALLBACK, SAVE_FAILED_FALLBACK},
    ClientError, ControllerOutcome, ControllerRequest, DivisionApi, DivisionClient,
    DivisionController, DivisionDraft,
};
use shared::domain::{Division, DivisionStatus, RecordId, StatusFilter};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "division-cli", about = "Manage organizational divisions")]
struct Args {
    /// Overrides the configured api base url.
    #[arg(long, global = true)]
    base_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List divisions, optionally filtered.
    List {
        /// Case-insensitive match on name, description or head.
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all", value_parser = parse_status_filter)]
        status: StatusFilter,
        #[arg(long)]
        json: bool,
    },
    /// Show one division by record id.
    Get {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Create a division. The division id defaults to the next free DIV-NNN.
    Create {
        #[arg(long)]
        division_id: Option<String>,
        #[arg(long)]
        name: String,
        #[command(flatten)]
        fields: OptionalFields,
    },
    /// Update a division; omitted fields keep their current values.
    Update {
        id: String,
        #[arg(long)]
        division_id: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[command(flatten)]
        fields: OptionalFields,
    },
    /// Delete a division.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Print the next free DIV-NNN identifier.
    NextId,
}

#[derive(ClapArgs, Debug, Default)]
struct OptionalFields {
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    head: Option<String>,
    #[arg(long)]
    parent_organization: Option<String>,
    #[arg(long)]
    budget: Option<String>,
    #[arg(long, value_parser = parse_division_status)]
    status: Option<DivisionStatus>,
}

impl OptionalFields {
    fn apply(self, draft: &mut DivisionDraft) {
        if let Some(description) = self.description {
            draft.description = description;
        }
        if let Some(head) = self.head {
            draft.head = head;
        }
        if let Some(parent_organization) = self.parent_organization {
            draft.parent_organization = parent_organization;
        }
        if let Some(budget) = self.budget {
            draft.budget = budget;
        }
        if let Some(status) = self.status {
            draft.status = status;
        }
    }
}

fn parse_status_filter(raw: &str) -> Result<StatusFilter, String> {
    StatusFilter::parse(raw).ok_or_else(|| format!("expected all, active or inactive, got {raw:?}"))
}

fn parse_division_status(raw: &str) -> Result<DivisionStatus, String> {
    match StatusFilter::parse(raw) {
        Some(StatusFilter::Only(status)) => Ok(status),
        _ => Err(format!("expected active or inactive, got {raw:?}")),
    }
}

type Controller = DivisionController<DivisionClient>;

/// Loads the collection and fails when the load surfaced an error.
async fn loaded_controller(client: DivisionClient) -> Result<Controller> {
    let mut controller = DivisionController::new(client);
    controller.load().await;
    fail_on_banner(&controller)?;
    Ok(controller)
}

fn fail_on_banner(controller: &Controller) -> Result<()> {
    match controller.state().error() {
        Some(message) => Err(anyhow!(message.to_string())),
        None => Ok(()),
    }
}

/// Runs a save or delete and folds its outcome into the state. Success is
/// decided by the mutation alone; a failed follow-up reload comes back as
/// `Ok(Some(message))`.
async fn mutate(controller: &mut Controller, request: ControllerRequest) -> Result<Option<String>> {
    let outcome = execute(controller.api(), request).await;
    let verdict = match &outcome {
        ControllerOutcome::Saved { result, reload } => {
            mutation_verdict(result.as_ref().map(|_| ()), reload, SAVE_FAILED_FALLBACK)
        }
        ControllerOutcome::Deleted { result, reload } => {
            mutation_verdict(result.as_ref().map(|_| ()), reload, DELETE_FAILED_FALLBACK)
        }
        ControllerOutcome::Loaded(_) => Ok(None),
    };
    controller.state_mut().apply(outcome);
    verdict
}

fn mutation_verdict(
    result: Result<(), &ClientError>,
    reload: &Option<Result<Vec<Division>, ClientError>>,
    fallback: &str,
) -> Result<Option<String>> {
    result.map_err(|err| anyhow!(err.user_message(fallback)))?;
    Ok(match reload {
        Some(Err(err)) => Some(err.user_message(LOAD_FAILED_FALLBACK)),
        _ => None,
    })
}

fn warn_reload_failed(done: &str, warning: Option<String>) {
    if let Some(message) = warning {
        tracing::warn!(%message, "reload after {done} failed");
        eprintln!("warning: {done}, but reloading the list failed: {message}");
    }
}

fn confirm_on_stdin() -> Result<bool> {
    print!(
        "Are you sure you want to delete this division? This action cannot be undone. [y/N] "
    );
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

async fn run(client: DivisionClient, command: Command) -> Result<()> {
    match command {
        Command::List {
            search,
            status,
            json,
        } => {
            let mut controller = loaded_controller(client).await?;
            let state = controller.state_mut();
            state.set_search_term(search);
            state.set_status_filter(status);

            let state = controller.state();
            let visible = state.filtered();
            if json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else {
                print!(
                    "{}",
                    render::divisions_table(&visible, state.empty_state_message())
                );
            }
        }
        Command::Get { id, json } => {
            let division = client
                .get_by_id(&RecordId::new(id))
                .await
                .map_err(|err| anyhow!(err.user_message("Failed to load division")))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&division)?);
            } else {
                print!("{}", render::division_details(&division));
            }
        }
        Command::Create {
            division_id,
            name,
            fields,
        } => {
            let mut controller = loaded_controller(client).await?;
            let state = controller.state_mut();
            state.open_create();
            let draft = state.draft_mut();
            if let Some(division_id) = division_id {
                draft.division_id = division_id;
            }
            draft.name = name;
            fields.apply(draft);
            let division_id = draft.division_id.trim().to_string();
            let request = state.submit().map_err(|err| anyhow!(err.to_string()))?;

            let warning = mutate(&mut controller, request).await?;
            println!("Created division {division_id}");
            warn_reload_failed("created", warning);
        }
        Command::Update {
            id,
            division_id,
            name,
            fields,
        } => {
            let mut controller = loaded_controller(client).await?;
            let id = RecordId::new(id);
            let state = controller.state_mut();
            if !state.open_edit(&id) {
                bail!("Division {id} not found");
            }
            let draft = state.draft_mut();
            if let Some(division_id) = division_id {
                draft.division_id = division_id;
            }
            if let Some(name) = name {
                draft.name = name;
            }
            fields.apply(draft);
            let request = state.submit().map_err(|err| anyhow!(err.to_string()))?;

            let warning = mutate(&mut controller, request).await?;
            println!("Updated division {id}");
            warn_reload_failed("updated", warning);
        }
        Command::Delete { id, yes } => {
            if !yes && !confirm_on_stdin()? {
                println!("Delete cancelled");
                return Ok(());
            }
            let mut controller = DivisionController::new(client);
            let id = RecordId::new(id);
            let state = controller.state_mut();
            state.request_delete(id.clone());
            let request = state
                .confirm_delete()
                .map_err(|err| anyhow!(err.to_string()))?;

            let warning = mutate(&mut controller, request).await?;
            println!("Deleted division {id}");
            warn_reload_failed("deleted", warning);
        }
        Command::NextId => {
            let controller = loaded_controller(client).await?;
            println!("{}", controller.state().suggest_division_id());
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = load_settings();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let base_url = args.base_url.unwrap_or(settings.api_base_url);
    let client = DivisionClient::new(&base_url)
        .with_context(|| format!("cannot use api base url {base_url:?}"))?;

    run(client, args.command).await
}
