use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use citizen_core::{
    load_or_default, validate_config, CitizenConfig, ServiceKind, UNKNOWN_SERVICE_MESSAGE,
};
use citizen_server::state::AppState;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "citizen-ai", version, about = "Citizen AI government services assistant")]
struct Cli {
    #[arg(long, help = "YAML config file (defaults are used when omitted)")]
    config: Option<PathBuf>,

    #[arg(long, default_value = "logs", help = "Directory for the rolling log file")]
    log_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Start the HTTP API server and web UI")]
    Serve {
        #[arg(long, help = "Address to bind (overrides server.bind)")]
        bind: Option<String>,
        #[arg(long, help = "Port to listen on (overrides server.port)")]
        port: Option<u16>,
    },
    #[command(about = "Score the sentiment of a piece of feedback")]
    Score {
        #[arg(help = "Feedback text")]
        text: String,
    },
    #[command(about = "Ask the assistant a single question")]
    Chat {
        #[arg(help = "Question for Citizen AI")]
        message: String,
    },
    #[command(about = "List services, or show details for one")]
    Services {
        #[arg(help = "Service label or slug")]
        name: Option<String>,
    },
    #[command(about = "Validate configuration")]
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "citizen-ai.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .init();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let mut config = load_or_default(cli.config.as_deref())?;

    match command {
        Commands::Serve { bind, port } => {
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            validate_config(&config)?;
            let state = AppState::from_config(&config);
            citizen_server::serve(state, &config.server.addr()).await?;
        }
        Commands::Score { text } => {
            println!("{}", config.scorer().score(&text).render());
        }
        Commands::Chat { message } => {
            validate_config(&config)?;
            let reply = config.build_assistant().ask(&message).await;
            println!("{}", reply.text());
        }
        Commands::Services { name } => match name {
            Some(name) => match name.parse::<ServiceKind>() {
                Ok(kind) => println!("{}", kind.info()),
                Err(_) => println!("{UNKNOWN_SERVICE_MESSAGE}"),
            },
            None => print_service_list(),
        },
        Commands::Validate => {
            validate_config(&config)?;
            print_summary(&config);
        }
    }

    Ok(())
}

fn print_service_list() {
    println!("{:<20} {:<20}", "SLUG", "SERVICE");
    println!("{}", "-".repeat(40));
    for kind in ServiceKind::ALL {
        println!("{:<20} {:<20}", kind.slug(), kind.label());
    }
}

fn print_summary(config: &CitizenConfig) {
    let lexicon = config.lexicon();
    println!(
        "Config valid. {} on {}, model {} via {}.",
        config.app.name,
        config.server.addr(),
        config.assistant.model,
        config.assistant.api_base
    );
    println!(
        "History window {}, sessions expire after {}s idle.",
        config.history.limit, config.session.idle_ttl_secs
    );
    println!(
        "Lexicon: {} positive / {} negative entries.",
        lexicon.positive().len(),
        lexicon.negative().len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_serve_overrides() {
        let cli =
            Cli::try_parse_from(["citizen-ai", "serve", "--bind", "127.0.0.1", "--port", "8080"])
                .unwrap();
        match cli.command.unwrap() {
            Commands::Serve { bind, port } => {
                assert_eq!(bind.as_deref(), Some("127.0.0.1"));
                assert_eq!(port, Some(8080));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn parses_global_flags() {
        let cli = Cli::try_parse_from([
            "citizen-ai",
            "--config",
            "citizen.yaml",
            "--log-dir",
            "/tmp/citizen",
            "validate",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("citizen.yaml")));
        assert_eq!(cli.log_dir, PathBuf::from("/tmp/citizen"));
        assert!(matches!(cli.command.unwrap(), Commands::Validate));
    }

    #[test]
    fn parses_score_text() {
        let cli = Cli::try_parse_from(["citizen-ai", "score", "great service"]).unwrap();
        assert!(matches!(
            cli.command.unwrap(),
            Commands::Score { text } if text == "great service"
        ));
    }

    #[test]
    fn services_name_is_optional() {
        let cli = Cli::try_parse_from(["citizen-ai", "services"]).unwrap();
        assert!(matches!(cli.command.unwrap(), Commands::Services { name: None }));

        let cli = Cli::try_parse_from(["citizen-ai", "services", "voter-id"]).unwrap();
        assert!(matches!(
            cli.command.unwrap(),
            Commands::Services { name: Some(n) } if n == "voter-id"
        ));
    }

    #[test]
    fn chat_requires_message() {
        assert!(Cli::try_parse_from(["citizen-ai", "chat"]).is_err());
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["citizen-ai"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log_dir, PathBuf::from("logs"));
    }
}
