use std::io::Read;
use std::path::PathBuf;

use airdrop_signer::config::AppConfig;
use airdrop_signer::service::{parse_claimer, ErrorResponse};
use airdrop_signer::signer::{format_address, parse_signature};
use airdrop_signer::{
    Attestation, AttestationSigner, ClaimRequest, SignerError, SigningRequest, SigningService,
    StaticProfileResolver,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "airdrop-signer", about = "Signs claim attestations for the signature airdrop")]
struct Args {
    #[arg(long, global = true, default_value = "crates/airdrop-signer/configs/devnet.toml")]
    config: PathBuf,
    #[command(subcommand)]
    command: Cli,
}

#[derive(Subcommand, Debug)]
enum Cli {
    /// Print the signer address to register with the airdrop.
    Address,
    /// Resolve an identity and sign a claim for a wallet.
    Sign {
        #[arg(long)]
        claimer: String,
        #[arg(long)]
        identity: String,
    },
    /// Handle a JSON signing request read from a file or stdin.
    Request {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Check a signature against the configured signer address.
    Verify {
        #[arg(long)]
        claimer: String,
        #[arg(long)]
        amount: u64,
        #[arg(long)]
        profile: String,
        #[arg(long)]
        sub_count: u64,
        #[arg(long)]
        signature: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let cfg = AppConfig::from_toml(&args.config)?;
    let signer = AttestationSigner::from_hex(&cfg.signer.private_key)?;

    match args.command {
        Cli::Address => {
            println!("{}", signer.signer_address_hex());
            Ok(())
        }
        Cli::Sign { claimer, identity } => {
            let request = SigningRequest {
                claimer_address: claimer,
                external_identity: identity,
            };
            run_request(&cfg, signer, &request)
        }
        Cli::Request { file } => {
            let body = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("failed reading request file: {}", path.display()))?,
                None => {
                    let mut body = String::new();
                    std::io::stdin()
                        .read_to_string(&mut body)
                        .context("failed reading request from stdin")?;
                    body
                }
            };
            let request: SigningRequest =
                serde_json::from_str(&body).context("failed parsing signing request json")?;
            run_request(&cfg, signer, &request)
        }
        Cli::Verify {
            claimer,
            amount,
            profile,
            sub_count,
            signature,
        } => {
            let attestation = Attestation {
                request: ClaimRequest {
                    claimer: report(parse_claimer(&claimer))?,
                    amount,
                    profile,
                    sub_count,
                },
                signature: report(parse_signature(&signature))?,
            };
            match attestation.recover_signer() {
                Some(address) if address == signer.signer_address() => {
                    println!("valid: signed by {}", format_address(&address));
                }
                Some(address) => {
                    warn!(expected = %signer.signer_address_hex(), "signature is from another key");
                    println!("invalid: signed by {}", format_address(&address));
                }
                None => println!("invalid: signature does not recover"),
            }
            Ok(())
        }
    }
}

fn run_request(cfg: &AppConfig, signer: AttestationSigner, request: &SigningRequest) -> Result<()> {
    let resolver = match &cfg.resolver.profiles_path {
        Some(path) => report(StaticProfileResolver::from_file(path))?,
        None => {
            warn!("resolver.profiles_path is not set; every lookup will fail");
            StaticProfileResolver::new()
        }
    };
    info!(
        signer = %signer.signer_address_hex(),
        profiles = resolver.len(),
        per_unit = cfg.amount.per_unit,
        "signing service ready"
    );

    let service = SigningService::new(signer, resolver, cfg.amount_policy());
    let response = report(service.handle(request))?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Prints the machine-readable error body before handing the error up.
fn report<T>(result: Result<T, SignerError>) -> Result<T> {
    result.map_err(|err| {
        if let Ok(body) = serde_json::to_string(&ErrorResponse::from(&err)) {
            println!("{body}");
        }
        err.into()
    })
}
