use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing_subscriber::EnvFilter;

use kar::core::{Regime, compute_tax, validate_and_normalize};

#[derive(Parser, Debug)]
#[command(
    name = "kar",
    about = "Indian income tax calculator (new/old regime slabs, HRA, 80C, cess)"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the HTTP API
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Compute a single liability and print the result as JSON
    Calc(CalcArgs),
}

#[derive(Args, Debug)]
struct CalcArgs {
    #[arg(long)]
    income_from_salary: f64,
    #[arg(long, default_value_t = 0.0)]
    income_from_rent: f64,
    #[arg(long, default_value_t = 0.0)]
    hra_component: f64,
    #[arg(long, default_value_t = 0.0)]
    annual_rent: f64,
    #[arg(long, default_value_t = 0.0)]
    section_80c: f64,
    #[arg(long, value_enum, default_value_t = CliRegime::New)]
    regime: CliRegime,
    #[arg(long)]
    is_metro: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliRegime {
    New,
    Old,
}

impl From<CliRegime> for Regime {
    fn from(value: CliRegime) -> Self {
        match value {
            CliRegime::New => Regime::New,
            CliRegime::Old => Regime::Old,
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Cli::parse().command {
        Command::Serve { port } => {
            if let Err(e) = kar::api::run_http_server(port).await {
                eprintln!("Server error: {e}");
                std::process::exit(1);
            }
        }
        Command::Calc(args) => run_calc(args),
    }
}

fn run_calc(args: CalcArgs) {
    let raw = json!({
        "incomeFromSalary": args.income_from_salary,
        "incomeFromRent": args.income_from_rent,
        "hraComponent": args.hra_component,
        "annualRent": args.annual_rent,
        "section80C": args.section_80c,
        "regime": Regime::from(args.regime),
        "isMetro": args.is_metro,
    });

    match validate_and_normalize(&raw) {
        Ok(input) => {
            let result = compute_tax(&input);
            println!(
                "{}",
                serde_json::to_string_pretty(&result).expect("result serializes")
            );
        }
        Err(errors) => {
            for error in errors {
                eprintln!("error: {error}");
            }
            std::process::exit(2);
        }
    }
}
