use anyhow::Result;
use clap::Parser;
use reqwest::Client;
use tracing::{error, info};

use edl_token_rotator::config::loader;
use edl_token_rotator::config::settings::RotationEvent;
use edl_token_rotator::creds::ssm::SsmCredentialStore;
use edl_token_rotator::runner;
use edl_token_rotator::sinks::kms::KmsKeyResolver;
use edl_token_rotator::sinks::parameter_store::TokenSink;
use edl_token_rotator::sinks::ssm::SsmParameterWriter;
use edl_token_rotator::sources::edl::EdlClient;
use edl_token_rotator::utils::logging;
use edl_token_rotator::utils::logging::LogLevel;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Invocation event payload, e.g. '{"prefix": "uds"}'
    #[arg(long, env = "ROTATION_EVENT")]
    event: Option<String>,
    /// Deployment prefix; shorthand for an event carrying only a prefix
    #[arg(short, long, env = "PREFIX")]
    prefix: Option<String>,
    #[arg(short, long, env = "CONFIG", default_value = "edl-token-rotator.yaml")]
    config: String,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Make preparations
    //
    // read args
    // load settings
    // init logging
    // resolve the invocation event
    // -------------------------------

    let args = Args::parse();

    let settings = loader::load_settings(&args.config)?;
    logging::run(&settings, args.log_level)?;

    let event = RotationEvent::resolve(args.event.as_deref(), args.prefix)?;

    // -------------------------------
    // 2. Build the collaborators
    // -------------------------------

    let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(settings.region.clone()))
        .load()
        .await;

    let creds_store = SsmCredentialStore::new(&sdk_config);
    let edl = EdlClient::new(Client::new(), settings.edl_base_url.clone());
    let sink = TokenSink::new(
        KmsKeyResolver::new(&sdk_config),
        SsmParameterWriter::new(&sdk_config),
    );

    // -------------------------------
    // 3. Run the rotation
    // -------------------------------

    info!("attempting to create token");
    if let Err(err) = runner::rotate(&event, &creds_store, &edl, &sink).await {
        error!("token rotation failed: {err}");
        info!("program exiting");
        std::process::exit(1);
    }

    Ok(())
}
