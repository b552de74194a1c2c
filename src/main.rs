use clap::{Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use core_types::{CompoundInterestInput, MortgageInput, parse_or_default, parse_years_or_default};
use formatter::CurrencyFormatter;
use mortgage::MortgageEngine;
use projector::ProjectionEngine;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

/// The main entry point for the fincalc application.
fn main() -> anyhow::Result<()> {
    // Log to stderr so table and JSON output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let settings = configuration::load_config()?;
    let formatter = CurrencyFormatter::new(&settings.display);

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::CompoundInterest(args) => handle_compound_interest(args, &formatter),
        Commands::Mortgage(args) => handle_mortgage(args, &formatter),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Financial calculators: compound interest projection and mortgage payments.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Project savings growth year by year under compound interest.
    CompoundInterest(CompoundInterestArgs),

    /// Calculate the fixed monthly payment and total cost of a mortgage.
    Mortgage(MortgageArgs),
}

/// All numeric arguments arrive as free text, exactly as a form field would
/// deliver them; anything unparseable counts as zero.
#[derive(Parser)]
struct CompoundInterestArgs {
    /// The starting amount.
    #[arg(long, allow_hyphen_values = true, default_value = "10000")]
    initial_amount: String,

    /// The amount deposited every month.
    #[arg(long, allow_hyphen_values = true, default_value = "500")]
    monthly_contribution: String,

    /// The annual interest rate as a percentage (e.g., "7").
    #[arg(long, allow_hyphen_values = true, default_value = "7")]
    annual_rate: String,

    /// How many years to project.
    #[arg(long, allow_hyphen_values = true, default_value = "10")]
    years: String,

    /// Emit the result as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct MortgageArgs {
    /// The full property price.
    #[arg(long, allow_hyphen_values = true, default_value = "5000000")]
    property_price: String,

    /// The up-front payment.
    #[arg(long, allow_hyphen_values = true, default_value = "1000000")]
    down_payment: String,

    /// The annual interest rate as a percentage (e.g., "7.5").
    #[arg(long, allow_hyphen_values = true, default_value = "7.5")]
    annual_rate: String,

    /// The loan term in years.
    #[arg(long, allow_hyphen_values = true, default_value = "20")]
    term_years: String,

    /// Also show the year-by-year amortization breakdown.
    #[arg(long)]
    schedule: bool,

    /// Emit the result as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

// ==============================================================================
// Compound Interest Command Logic
// ==============================================================================

fn handle_compound_interest(
    args: CompoundInterestArgs,
    formatter: &CurrencyFormatter,
) -> anyhow::Result<()> {
    let input = CompoundInterestInput {
        initial_amount: parse_or_default(&args.initial_amount),
        monthly_contribution: parse_or_default(&args.monthly_contribution),
        annual_rate_percent: parse_or_default(&args.annual_rate),
        years: parse_years_or_default(&args.years),
    };

    let engine = ProjectionEngine::new();
    let ledger = engine.project(&input);
    let summary = engine.summarize(&ledger);

    if args.json {
        let payload = serde_json::json!({
            "summary": summary,
            "years": ledger,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if ledger.is_empty() {
        println!("Nothing to project: the number of years is zero.");
        return Ok(());
    }

    println!(
        "Final balance after {} years: {}",
        input.years,
        formatter.format(summary.final_balance)
    );
    println!(
        "Total contributions: {}",
        formatter.format(summary.total_contributions)
    );
    println!(
        "Interest earned: {}",
        formatter.format(summary.total_interest)
    );
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Year", "Contributions", "Interest", "Balance"]);

    for projection in &ledger {
        table.add_row(vec![
            Cell::new(projection.year),
            money_cell(formatter, projection.contributions),
            money_cell(formatter, projection.interest),
            money_cell(formatter, projection.balance),
        ]);
    }

    println!("{table}");
    Ok(())
}

// ==============================================================================
// Mortgage Command Logic
// ==============================================================================

fn handle_mortgage(args: MortgageArgs, formatter: &CurrencyFormatter) -> anyhow::Result<()> {
    let input = MortgageInput {
        property_price: parse_or_default(&args.property_price),
        down_payment: parse_or_default(&args.down_payment),
        annual_rate_percent: parse_or_default(&args.annual_rate),
        term_years: parse_or_default(&args.term_years),
    };

    if input.down_payment > input.property_price {
        tracing::warn!(
            down_payment = %input.down_payment,
            property_price = %input.property_price,
            "down payment exceeds the property price; the principal will be negative"
        );
    }

    let engine = MortgageEngine::new();
    let result = engine.calculate(&input)?;
    let yearly = if args.schedule {
        Some(engine.amortize(&input)?.yearly())
    } else {
        None
    };

    if args.json {
        let payload = match &yearly {
            Some(yearly) => serde_json::json!({ "result": result, "yearly_schedule": yearly }),
            None => serde_json::json!({ "result": result }),
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec![
        Cell::new("Loan principal"),
        money_cell(formatter, result.principal),
    ]);
    table.add_row(vec![
        Cell::new("Monthly payment"),
        money_cell(formatter, result.monthly_payment),
    ]);
    table.add_row(vec![
        Cell::new("Total payment"),
        money_cell(formatter, result.total_payment),
    ]);
    table.add_row(vec![
        Cell::new("Total interest"),
        money_cell(formatter, result.total_interest),
    ]);
    println!("{table}");

    if let Some(yearly) = yearly {
        println!();
        let mut schedule_table = Table::new();
        schedule_table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                "Year",
                "Principal paid",
                "Interest paid",
                "Total paid",
                "Remaining",
                "Repaid",
            ]);

        for year in &yearly {
            schedule_table.add_row(vec![
                Cell::new(year.year),
                money_cell(formatter, year.principal_paid),
                money_cell(formatter, year.interest_paid),
                money_cell(formatter, year.total_paid),
                money_cell(formatter, year.remaining_principal),
                Cell::new(format!("{}%", year.principal_repaid_pct.round_dp(1)))
                    .set_alignment(CellAlignment::Right),
            ]);
        }

        println!("{schedule_table}");
    }

    Ok(())
}

/// A right-aligned table cell holding a formatted amount.
fn money_cell(formatter: &CurrencyFormatter, amount: Decimal) -> Cell {
    Cell::new(formatter.format(amount)).set_alignment(CellAlignment::Right)
}
