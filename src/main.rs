use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use serde::Serialize;
use tracing::info;

use blockfrost_client::app::{BlockfrostApi, collect_all_pages};
use blockfrost_client::domain::Pagination;
use blockfrost_client::infra::blockfrost::{ClientConfig, NETWORK_ENV};
use blockfrost_client::infra::observability::{LogFormat, init_metrics, init_tracing};

#[derive(Parser)]
#[command(name = "blockfrost")]
#[command(about = "Query the Blockfrost Cardano API", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        global = true,
        help = "Network to query (mainnet, preprod, preview, testnet); overrides BLOCKFROST_NETWORK"
    )]
    network: Option<String>,
    #[arg(long, global = true, help = "Print Prometheus request counters to stderr when done")]
    metrics: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a transaction
    Tx { hash: String },
    /// Show the inputs and outputs of a transaction
    Utxos { hash: String },
    /// Submit a CBOR-serialized transaction read from a file
    Submit { file: PathBuf },
    /// Show a block by hash or height, or the latest block
    Block { id: Option<String> },
    /// Show an address
    Address { address: String },
    /// Show a stake account
    Account { stake_address: String },
    /// Show a stake pool
    Pool { pool_id: String },
    /// List stake pool ids
    Pools {
        #[arg(long, help = "Walk every page instead of the first one")]
        all: bool,
    },
    /// Show an epoch, or the latest epoch
    Epoch { number: Option<u32> },
    /// Show supply and stake of the network
    Network,
    /// Show a native asset
    Asset { unit: String },
    /// Show the genesis parameters
    Genesis,
    /// Probe backend health and clock
    Status,
}

fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    init_tracing(LogFormat::from_env())
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))?;
    let metrics = if cli.metrics {
        Some(init_metrics().context("failed to install metrics recorder")?)
    } else {
        None
    };

    let network = cli.network.clone();
    let config = ClientConfig::from_lookup(|key| match (key, &network) {
        (NETWORK_ENV, Some(value)) => Some(value.clone()),
        _ => env::var(key).ok(),
    })
    .context("invalid Blockfrost configuration")?;
    info!(base_url = %config.base_url, "Using Blockfrost API");

    let api = BlockfrostApi::from_config(config)?;
    run(&api, cli.command)?;

    if let Some(handle) = metrics {
        eprintln!("{}", handle.render());
    }
    Ok(())
}

fn run(api: &BlockfrostApi, command: Commands) -> Result<()> {
    match command {
        Commands::Tx { hash } => print_json(&api.transactions.transaction(&hash)?),
        Commands::Utxos { hash } => print_json(&api.transactions.transaction_utxos(&hash)?),
        Commands::Submit { file } => {
            let cbor = std::fs::read(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let tx_id = api.transactions.submit_transaction(&cbor)?;
            print_json(&tx_id)
        }
        Commands::Block { id: Some(id) } => print_json(&api.blocks.block(&id)?),
        Commands::Block { id: None } => print_json(&api.blocks.latest_block()?),
        Commands::Address { address } => print_json(&api.addresses.address(&address)?),
        Commands::Account { stake_address } => print_json(&api.accounts.account(&stake_address)?),
        Commands::Pool { pool_id } => print_json(&api.pools.pool(&pool_id)?),
        Commands::Pools { all: true } => {
            print_json(&collect_all_pages(None, |page| api.pools.pools(&page))?)
        }
        Commands::Pools { all: false } => print_json(&api.pools.pools(&Pagination::default())?),
        Commands::Epoch { number: Some(n) } => print_json(&api.epochs.epoch(n)?),
        Commands::Epoch { number: None } => print_json(&api.epochs.latest_epoch()?),
        Commands::Network => print_json(&api.network.network()?),
        Commands::Asset { unit } => print_json(&api.assets.asset(&unit)?),
        Commands::Genesis => print_json(&api.ledger.genesis()?),
        Commands::Status => print_json(&api.status()?),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
