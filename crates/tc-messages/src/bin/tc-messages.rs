use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process,
};

use anyhow::{Context, Result, anyhow, bail};
use clap::{Args, Parser, Subcommand};
use tc_messages::{
    ApiCall, ApiError, ArgumentError, LookupKey, MessageType, Messages, ProcessConsole,
    load_catalog, logging,
};

#[derive(Parser, Debug)]
#[command(
    name = "tc-messages",
    version,
    about = "Resolve test-center CLI messages from the message catalog."
)]
struct Cli {
    /// Catalog file to use instead of the bundled one (fallback env TC_MESSAGES_CATALOG).
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the lookup key for a command path, e.g. "test-center test-suite view".
    Key { path: String },
    /// Print the message of a command, or of a key below it.
    Get(GetArgs),
    /// Print the message stored at an already dotted key.
    Resolve { key: String },
    /// Print a global message.
    Global { key: String },
    /// Print an edge grid (authentication) message.
    EdgeGrid { key: String },
    /// Print the message for a missing or invalid flag.
    Flag {
        path: String,
        #[arg(value_name = "missing|invalid")]
        kind: String,
        flag: String,
    },
    /// Print the message for a missing or invalid sub-command.
    SubCommand {
        path: String,
        #[arg(value_name = "missing|invalid")]
        kind: String,
        name: String,
    },
    /// Print spinner or display text of a command.
    Service {
        path: String,
        #[arg(value_name = "spinner|display|testCmdSpinner")]
        message_type: String,
        key: String,
        #[arg(long, default_value = "")]
        sub_resource: String,
    },
    /// Print the messages for an API error payload.
    ApiError(ApiErrorArgs),
}

#[derive(Args, Debug)]
struct GetArgs {
    path: String,
    /// Key below the command, e.g. not-found.
    #[arg(long)]
    key: Option<String>,
    /// Placeholder value, repeatable.
    #[arg(long = "value", value_name = "NAME=VALUE")]
    values: Vec<String>,
}

#[derive(Args, Debug)]
struct ApiErrorArgs {
    path: String,
    #[arg(long, default_value = "")]
    sub_resource: String,
    #[arg(long)]
    operation: String,
    /// HTTP status code of the failed response.
    #[arg(long)]
    response_code: String,
    /// JSON payload file; reads stdin when omitted or "-".
    #[arg(long, value_name = "FILE")]
    payload: Option<PathBuf>,
}

fn main() {
    logging::init_tracing("warn");
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let catalog = load_catalog(cli.catalog).context("failed to load message catalog")?;
    let messages = Messages::new(catalog);

    match cli.command {
        Command::Key { path } => println!("{}", LookupKey::for_command(&path)),
        Command::Get(args) => println!("{}", handle_get(&messages, args)?),
        Command::Resolve { key } => {
            println!("{}", messages.catalog().resolve(&LookupKey::from(key.as_str())))
        }
        Command::Global { key } => println!("{}", messages.global_error(&key)),
        Command::EdgeGrid { key } => println!("{}", messages.edge_grid_error(&key)),
        Command::Flag { path, kind, flag } => {
            println!("{}", messages.flag_error(&path, ArgumentError::parse(&kind), &flag))
        }
        Command::SubCommand { path, kind, name } => {
            println!("{}", messages.sub_command_error(&path, ArgumentError::parse(&kind), &name))
        }
        Command::Service { path, message_type, key, sub_resource } => println!(
            "{}",
            messages.service_message(&path, MessageType::parse(&message_type), &sub_resource, &key)
        ),
        Command::ApiError(args) => handle_api_error(&messages, args)?,
    }
    Ok(())
}

fn handle_get(messages: &Messages, args: GetArgs) -> Result<String> {
    let key = match &args.key {
        Some(key) => LookupKey::for_command_message(&args.path, key),
        None => LookupKey::for_command(&args.path),
    };
    let values = args.values.iter().map(|raw| parse_value_pair(raw)).collect::<Result<Vec<_>>>()?;
    let values: Vec<(&str, String)> =
        values.iter().map(|(name, value)| (name.as_str(), value.clone())).collect();
    Ok(messages.render(&key, &values))
}

fn handle_api_error(messages: &Messages, args: ApiErrorArgs) -> Result<()> {
    let raw = read_payload(args.payload.as_ref())?;
    let error: ApiError = serde_json::from_str(&raw).context("failed to parse API error payload")?;

    let call = ApiCall {
        command_path: &args.path,
        sub_resource: &args.sub_resource,
        operation: &args.operation,
        response_code: &args.response_code,
    };
    for message in messages.api_error_messages(&call, &error, &ProcessConsole) {
        println!("{message}");
    }
    Ok(())
}

fn read_payload(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read payload {}", path.display())),
        _ => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw).context("failed to read payload from stdin")?;
            Ok(raw)
        }
    }
}

fn parse_value_pair(raw: &str) -> Result<(String, String)> {
    let (name, value) =
        raw.split_once('=').ok_or_else(|| anyhow!("placeholder values must look like NAME=VALUE"))?;
    if name.trim().is_empty() {
        bail!("placeholder name cannot be empty");
    }
    Ok((name.trim().to_string(), value.to_string()))
}
