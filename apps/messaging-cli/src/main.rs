use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chime_messaging::{
    ChannelMessagePersistenceType, ChannelMessageType, ChannelMode, ChannelPrivacy,
    CreateChannelRequest, Operation, SearchChannelsRequest, SearchField, SearchFieldOperator,
    SendChannelMessageRequest, Target,
};
use chime_messaging_config::{load as load_config, LoggingConfig};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;

#[derive(Parser)]
#[command(name = "chime-messaging")]
#[command(about = "Build and validate Chime SDK Messaging request payloads")]
#[command(version)]
struct Cli {
    /// Serialize without client-side validation
    #[arg(long, global = true)]
    skip_validation: bool,

    /// Pretty-print the JSON payload
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a CreateChannel payload
    CreateChannel {
        #[arg(long)]
        app_instance_arn: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        bearer: String,
        #[arg(long)]
        mode: Option<ChannelMode>,
        #[arg(long)]
        privacy: Option<ChannelPrivacy>,
        #[arg(long)]
        metadata: Option<String>,
        #[arg(long)]
        channel_id: Option<String>,
        /// Member added on creation, repeatable
        #[arg(long = "member")]
        members: Vec<String>,
        /// Moderator added on creation, repeatable
        #[arg(long = "moderator")]
        moderators: Vec<String>,
        /// Generate a client request token
        #[arg(long)]
        idempotent: bool,
    },
    /// Build a SendChannelMessage payload
    SendMessage {
        #[arg(long)]
        channel_arn: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        bearer: String,
        #[arg(long = "type", default_value = "STANDARD")]
        message_type: ChannelMessageType,
        #[arg(long, default_value = "PERSISTENT")]
        persistence: ChannelMessagePersistenceType,
        /// Message attribute as key=value[,value...], repeatable
        #[arg(long = "attribute")]
        attributes: Vec<String>,
        /// Deliver the message to this member only
        #[arg(long)]
        target: Option<String>,
        #[arg(long)]
        sub_channel_id: Option<String>,
    },
    /// Build a SearchChannels payload over channel members
    SearchChannels {
        /// Member ARN, repeatable
        #[arg(long = "member", required = true)]
        members: Vec<String>,
        #[arg(long, default_value = "EQUALS")]
        operator: SearchFieldOperator,
        #[arg(long)]
        bearer: Option<String>,
        #[arg(long)]
        max_results: Option<i32>,
    },
    /// Validate a JSON request payload of any operation
    Validate {
        /// Operation name, e.g. SendChannelMessage
        operation: String,
        /// Payload file, `-` reads stdin
        file: PathBuf,
    },
    /// List the supported operations
    Operations,
}

fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")
}

fn read_payload(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .context("failed to read payload from stdin")?;
        return Ok(body);
    }
    std::fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = load_config().context("failed to load configuration")?;
    init_tracing(&config.logging)?;

    if cli.skip_validation {
        config.validation.enforce = false;
    }
    debug!(enforce = config.validation.enforce, "client-side validation");

    let payload = match cli.command {
        Commands::CreateChannel {
            app_instance_arn,
            name,
            bearer,
            mode,
            privacy,
            metadata,
            channel_id,
            members,
            moderators,
            idempotent,
        } => {
            let mut request = CreateChannelRequest {
                mode,
                privacy,
                metadata,
                channel_id,
                member_arns: (!members.is_empty()).then_some(members),
                moderator_arns: (!moderators.is_empty()).then_some(moderators),
                ..CreateChannelRequest::new(app_instance_arn, name, bearer)
            };
            if idempotent {
                request.ensure_client_request_token();
            }
            request.to_payload(&config.validation)?
        }
        Commands::SendMessage {
            channel_arn,
            content,
            bearer,
            message_type,
            persistence,
            attributes,
            target,
            sub_channel_id,
        } => {
            let mut request = SendChannelMessageRequest {
                message_type,
                persistence,
                sub_channel_id,
                target: target.map(|arn| vec![Target::member(arn)]),
                ..SendChannelMessageRequest::new(channel_arn, content, bearer)
            };
            for raw in &attributes {
                let (key, value) = commands::parse_attribute(raw)?;
                request.add_message_attributes_entry(key, value)?;
            }
            request.to_payload(&config.validation)?
        }
        Commands::SearchChannels {
            members,
            operator,
            bearer,
            max_results,
        } => {
            let field = match operator {
                SearchFieldOperator::Equals => SearchField::members_equal(members),
                SearchFieldOperator::Includes => SearchField::members_include(members),
            };
            let request = SearchChannelsRequest {
                chime_bearer: bearer,
                max_results,
                ..SearchChannelsRequest::new(vec![field])
            };
            request.to_payload(&config.validation)?
        }
        Commands::Validate { operation, file } => {
            let body = read_payload(&file)?;
            commands::validate_payload(&operation, &body, &config.validation)?
        }
        Commands::Operations => {
            for name in commands::operation_names() {
                println!("{}", name);
            }
            return Ok(());
        }
    };

    if cli.pretty {
        println!("{}", commands::pretty(&payload)?);
    } else {
        println!("{}", payload);
    }
    Ok(())
}
