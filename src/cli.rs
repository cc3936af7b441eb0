use std::{io::Write as _, path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use userdb_application::{
    error::{AppError, BError},
    prelude as flows,
};
use userdb_boundary as json;
use userdb_db_memory::Connections;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "userdb", version, about = "Manage user accounts")]
pub struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON file with all users (overrides the configuration)
    #[arg(long, value_name = "FILE")]
    pub snapshot_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register a new user
    CreateUser {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Update the account of an authenticated user
    UpdateUser {
        /// Id of the authenticated user
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Required to change the password
        #[arg(long)]
        old_password: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// Print all users
    ListUsers,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Output {
    User(json::User),
    Users(Vec<json::User>),
}

pub fn run(args: Args) -> Result<ExitCode> {
    let Args {
        config,
        snapshot_file,
        command,
    } = args;
    let mut cfg = Config::try_load_from_file_or_default(config)?;
    if snapshot_file.is_some() {
        cfg.db.snapshot_file = snapshot_file;
    }
    let connections = match cfg.db.snapshot_file {
        Some(file_path) => {
            log::info!("Loading users from {}", file_path.display());
            Connections::init_with_snapshot(file_path)?
        }
        None => Connections::init_in_memory(),
    };
    match execute(&connections, command) {
        Ok(output) => {
            print_json(&output)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(AppError::Business(BError::Parameter(err))) => {
            print_json(&json::Error::from(err))?;
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

pub fn execute(connections: &Connections, command: Command) -> userdb_application::Result<Output> {
    let output = match command {
        Command::CreateUser {
            name,
            email,
            password,
        } => {
            let new_user = json::NewUser {
                name,
                email,
                password,
            };
            let user = flows::create_user(connections, new_user.into())?;
            Output::User(user.into())
        }
        Command::UpdateUser {
            id,
            name,
            email,
            old_password,
            password,
            confirm_password,
        } => {
            let update = json::UpdateUser {
                name,
                email,
                old_password,
                password,
                confirm_password,
            };
            let user = flows::update_user(connections, &id, update.into())?;
            Output::User(user.into())
        }
        Command::ListUsers => {
            let users = userdb_application::all_users(connections)?;
            Output::Users(users.into_iter().map(Into::into).collect())
        }
    };
    Ok(output)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
