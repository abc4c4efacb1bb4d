use anyhow::Context;
use clap::Parser;
use crm_toolkit::core::{document, mask};
use crm_toolkit::utils::{logger, validation::Validate};
use crm_toolkit::{CliConfig, Command, Document, GateDecision, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match &cli.config {
        Some(path) => TomlConfig::from_file(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => TomlConfig::default(),
    };

    if config.logging.json {
        logger::init_json_logger(&config.logging.level, cli.verbose);
    } else {
        logger::init_cli_logger(&config.logging.level, cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    match cli.command {
        Command::Validate { document: input } => match Document::parse(&input) {
            Ok(doc) => println!("valid {} {}", doc.kind(), doc),
            Err(e) => {
                let kind = document::detect_kind(&input)
                    .map(|k| k.to_string())
                    .unwrap_or_else(|| "document".to_string());
                println!("invalid {}: {}", kind, e.user_friendly_message());
                std::process::exit(1);
            }
        },
        Command::Format { document: input } => println!("{}", document::format_document(&input)),
        Command::Cep { code } => {
            let lookup = config.build_lookup()?;
            match lookup.lookup(&code).await {
                Some(address) => println!("{}", serde_json::to_string_pretty(&address)?),
                None => {
                    println!("not found");
                    std::process::exit(1);
                }
            }
        }
        Command::Gate { path, cookie } => {
            let gate = config.build_gate();
            match gate.check(&path, cookie.as_deref()) {
                GateDecision::Pass => println!("pass"),
                GateDecision::Redirect { location } => println!("redirect {}", location),
            }
        }
        Command::Currency { input } => println!("{}", mask::mask_currency_input(&input)),
        Command::Phone { input } => println!("{}", mask::mask_phone(&input)),
    }

    Ok(())
}
