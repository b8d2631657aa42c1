//! tlsneg CLI binary.
//!
//! Inspect the ciphersuite and fault tables from the command line.
//!
//! # Commands
//!
//! - `suites` - List the ciphersuite registry
//! - `select` - Build a suite offer from cipher preferences
//! - `faults` - List injectable faults and their allowed alerts
//! - `verify` - Check an observed alert against a fault
//! - `plan` - Print the fault ids to inject for a handshake mode

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tlsneg::{
    config::{parse_cipher_list, Config},
    faults::{self, Fault, FaultCategory, HandshakeMode},
    suites::{self, CipherAlgorithm, CipherSuiteEntry, SuiteGroup},
    wire::AlertDescription,
    VERSION,
};

#[derive(Parser)]
#[command(name = "tlsneg")]
#[command(version = VERSION)]
#[command(about = "TLS negotiation tables - ciphersuites, faults and alerts", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the ciphersuite registry
    Suites {
        /// Restrict to a suite group (srp, srpCert, rsa, anon, srpAll, certAll)
        #[arg(short, long)]
        group: Option<String>,

        /// Restrict to a cipher (aes128, aes256, 3des, rc4)
        #[arg(short, long)]
        cipher: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build an ordered suite offer
    Select {
        /// Suite group (default: from config)
        #[arg(short, long)]
        group: Option<String>,

        /// Comma-separated cipher preferences (default: from config)
        #[arg(short, long)]
        ciphers: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List injectable faults
    Faults {
        /// Restrict to a category (client-srp, client-cert, client-noauth, server, generic)
        #[arg(short, long)]
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check an observed alert against an injected fault
    Verify {
        /// Fault id
        #[arg(short, long)]
        fault: u16,

        /// Observed alert (code or name)
        #[arg(short, long)]
        alert: String,
    },

    /// Print the fault plan for a handshake mode
    Plan {
        /// Handshake mode (srp, srp-cert, cert, mutual-cert)
        #[arg(short, long)]
        mode: String,
    },
}

#[derive(Serialize)]
struct FaultRow {
    id: u16,
    name: &'static str,
    category: FaultCategory,
    allowed_alerts: &'static [AlertDescription],
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Suites {
            group,
            cipher,
            json,
        } => cmd_suites(group, cipher, json),

        Commands::Select {
            group,
            ciphers,
            config,
            json,
        } => cmd_select(group, ciphers, config, json),

        Commands::Faults { category, json } => cmd_faults(category, json),

        Commands::Verify { fault, alert } => cmd_verify(fault, &alert),

        Commands::Plan { mode } => cmd_plan(&mode),
    }
}

fn cmd_suites(group: Option<String>, cipher: Option<String>, json: bool) -> anyhow::Result<()> {
    let group: Option<SuiteGroup> = group.map(|g| g.parse()).transpose()?;
    let cipher = match cipher {
        Some(c) => Some(
            CipherAlgorithm::from_token(&c)
                .ok_or_else(|| anyhow::anyhow!("Unknown cipher: {c}. Use: aes128, aes256, 3des, rc4"))?,
        ),
        None => None,
    };

    let rows: Vec<&CipherSuiteEntry> = suites::CIPHER_SUITES
        .iter()
        .filter(|e| group.map_or(true, |g| g.constituents().contains(&e.key_exchange)))
        .filter(|e| cipher.map_or(true, |c| e.cipher == c))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("Cipher Suites ({}):", rows.len());
    println!();
    println!("{:<8} {:<40} {:<10} {:<8}", "ID", "Name", "KeyEx", "Cipher");
    println!("{}", "-".repeat(68));
    for e in rows {
        println!(
            "0x{:04X}   {:<40} {:<10} {:<8}",
            e.id,
            e.name,
            e.key_exchange.name(),
            e.cipher.token()
        );
    }
    Ok(())
}

fn cmd_select(
    group: Option<String>,
    ciphers: Option<String>,
    config: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let mut config = match config {
        Some(path) => Config::from_file(path)?.merge(Config::from_env()?),
        None => Config::load()?,
    };
    if let Some(group) = group {
        config.handshake.suites = group;
    }
    if let Some(ciphers) = ciphers {
        config.handshake.cipher_names = parse_cipher_list(&ciphers);
    }

    let offer = config.handshake.proposal()?;
    tracing::debug!(
        "Selected {} suites for group {} from {:?}",
        offer.len(),
        config.handshake.suites,
        config.handshake.cipher_names
    );

    if json {
        println!("{}", serde_json::to_string(&offer)?);
        return Ok(());
    }

    if offer.is_empty() {
        println!("No suites match the given preferences");
    }
    for id in offer {
        let entry = suites::lookup(id)?;
        println!("0x{:04X}  {}", id, entry.name);
    }
    Ok(())
}

fn cmd_faults(category: Option<String>, json: bool) -> anyhow::Result<()> {
    let category: Option<FaultCategory> = category.map(|c| c.parse()).transpose()?;
    let rows: Vec<FaultRow> = Fault::all()
        .iter()
        .filter(|f| category.map_or(true, |c| f.category() == c))
        .map(|f| FaultRow {
            id: f.id(),
            name: f.name(),
            category: f.category(),
            allowed_alerts: faults::allowed_alerts(f.id()),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{:<6} {:<24} {:<14} Allowed alerts", "ID", "Name", "Category");
    println!("{}", "-".repeat(72));
    for row in rows {
        let alerts = if row.allowed_alerts.is_empty() {
            "(not observable)".to_string()
        } else {
            row.allowed_alerts
                .iter()
                .map(|a| a.name())
                .collect::<Vec<_>>()
                .join(", ")
        };
        println!(
            "{:<6} {:<24} {:<14} {}",
            row.id,
            row.name,
            row.category.token(),
            alerts
        );
    }
    Ok(())
}

fn cmd_verify(fault: u16, alert: &str) -> anyhow::Result<()> {
    let name = faults::name_of(fault)?;
    let observed: AlertDescription = alert.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    if !faults::is_observable(fault) {
        println!("Fault {fault} ({name}) has no observable response");
        std::process::exit(1);
    }

    if faults::verify(observed.code(), fault) {
        println!("Good fault {name}: {observed}");
        Ok(())
    } else {
        let allowed: Vec<&str> = faults::allowed_alerts(fault)
            .iter()
            .map(|a| a.name())
            .collect();
        println!(
            "BAD FAULT {name}: got {observed}, expected one of [{}]",
            allowed.join(", ")
        );
        std::process::exit(1);
    }
}

fn cmd_plan(mode: &str) -> anyhow::Result<()> {
    let mode: HandshakeMode = mode.parse()?;
    println!("Fault plan for {mode}:");
    for id in mode.fault_plan() {
        println!("  {:<4} {}", id, faults::name_of(id)?);
    }
    Ok(())
}
