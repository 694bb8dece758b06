//! `civic-console` entry point.
//!
//! # Purpose
//! Inspects the console authorization policy from the command line: list
//! roles and grants, evaluate gate requirements, and preview the navigation
//! and route decisions a given session would see.
use anyhow::Result;
use civic_console::app::build_state;
use civic_console::commands;
use civic_console::config::ConsoleConfig;
use civic_console::observability::init_observability;
use civic_authz::Requirement;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::fmt::Display;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "civic-console")]
#[command(about = "Inspect role-based access for the civic engagement admin console")]
struct Cli {
    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List roles with their labels and grant counts
    Roles,
    /// Show the permissions granted to a role
    Permissions {
        /// Role identifier (e.g. `campaign_manager`)
        #[arg(long)]
        role: String,
    },
    /// Evaluate a gate requirement; exits 1 when denied
    Check {
        #[command(flatten)]
        principal: PrincipalArgs,

        /// Single permission to require
        #[arg(long)]
        permission: Option<String>,

        /// Permissions of which at least one is required (comma separated)
        #[arg(long, value_delimiter = ',')]
        any_of: Vec<String>,

        /// Permissions that are all required (comma separated)
        #[arg(long, value_delimiter = ',')]
        all_of: Vec<String>,
    },
    /// Show the sidebar entries visible to a session
    Nav {
        #[command(flatten)]
        principal: PrincipalArgs,
    },
    /// Show the route guard decision for a path
    Route {
        /// Console path (e.g. `/dashboard/users`)
        path: String,

        #[command(flatten)]
        principal: PrincipalArgs,
    },
}

#[derive(Args, Debug)]
#[group(multiple = false)]
struct PrincipalArgs {
    /// Role of the signed-in user
    #[arg(long)]
    role: Option<String>,

    /// JSON file holding the `/api/auth/me` response
    #[arg(long)]
    session: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_observability("civic-console");
    let config = ConsoleConfig::from_env_or_yaml()?;
    let state = build_state(config);

    match cli.command {
        Command::Roles => emit(&commands::roles_report(&state.policy), cli.json)?,
        Command::Permissions { role } => {
            emit(&commands::permissions_report(&state.policy, &role), cli.json)?
        }
        Command::Check {
            principal,
            permission,
            any_of,
            all_of,
        } => {
            let principal =
                commands::load_principal(principal.role.as_deref(), principal.session.as_deref())?;
            let requirement = Requirement::parse_parts(permission.as_deref(), &any_of, &all_of)?;
            let report = commands::check_report(&state, principal.as_ref(), requirement);
            emit(&report, cli.json)?;
            if !report.allowed {
                return Ok(ExitCode::from(1));
            }
        }
        Command::Nav { principal } => {
            let principal =
                commands::load_principal(principal.role.as_deref(), principal.session.as_deref())?;
            emit(&commands::nav_report(&state, principal.as_ref()), cli.json)?
        }
        Command::Route { path, principal } => {
            let principal =
                commands::load_principal(principal.role.as_deref(), principal.session.as_deref())?;
            emit(
                &commands::route_report(&state, principal.as_ref(), &path),
                cli.json,
            )?
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn emit<T: Serialize + Display>(report: &T, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}
