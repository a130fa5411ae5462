use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vpp_dashboard::{
    cli::commands::{Cli, Commands, OutputFormat},
    config::AppConfig,
    dashboard::{Dashboard, LoadOutcome, RegistrationOutcome},
    models::registration::RegistrationForm,
    providers::{CustomerBackend, memory::InMemoryBackend, supabase::SupabaseBackend},
    render,
};

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn build_backend(config: &AppConfig, offline: bool) -> Result<Box<dyn CustomerBackend>> {
    if offline {
        return Ok(Box::new(InMemoryBackend::unavailable("offline mode")));
    }
    if config.backend.is_placeholder() {
        tracing::warn!("no backend endpoint configured, requests will fall back to local data");
    }
    let backend = SupabaseBackend::new(&config.backend).context("failed to set up backend client")?;
    Ok(Box::new(backend))
}

fn report_load(outcome: &LoadOutcome) {
    if outcome.is_demo() {
        eprintln!("showing demo data");
    }
}

// Single cooperative context: every store mutation runs to completion before the next.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AppConfig::load(cli.config.as_deref())?;
    let backend = build_backend(&config, cli.offline)?;
    let mut dashboard = Dashboard::new(backend, config.dashboard);

    match cli.command {
        Commands::Stats { format } => {
            report_load(&dashboard.refresh().await);
            print_stats(&dashboard, format)?;
        }
        Commands::Chart => {
            report_load(&dashboard.refresh().await);
            println!("{}", render::to_json(dashboard.chart_series())?);
        }
        Commands::Customers { format } => {
            report_load(&dashboard.refresh().await);
            match format {
                OutputFormat::Table => print!("{}", render::customer_table(dashboard.customers())),
                OutputFormat::Json => println!(
                    "{}",
                    render::to_json(&render::masked_customers(dashboard.customers()))?
                ),
            }
        }
        Commands::Register(args) => {
            report_load(&dashboard.refresh().await);
            let format = args.format;
            let form = RegistrationForm::from(args);
            match dashboard.register(&form).await {
                RegistrationOutcome::Persisted { reload } => {
                    eprintln!("registered {}", form.company_name);
                    report_load(&reload);
                }
                RegistrationOutcome::LocalOnly { notice, .. } => eprintln!("{notice}"),
            }
            print_stats(&dashboard, format)?;
        }
    }

    Ok(())
}

fn print_stats<B: CustomerBackend>(dashboard: &Dashboard<B>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print!("{}", render::region_table(dashboard.region_stats())),
        OutputFormat::Json => println!("{}", render::to_json(dashboard.region_stats())?),
    }
    Ok(())
}
