use std::path::PathBuf;

use clap::{Parser, Subcommand};

use aq_chem::{
    Category, Severity, Substance, catalog_for_category, color_category, compute_mixture,
    describe_reaction, describe_status, filter_catalog,
};

mod error;
mod input;

use error::{CliError, CliResult};
use input::{MixtureInput, SubstanceSpec};

#[derive(Parser)]
#[command(name = "aq-cli")]
#[command(about = "Aquamix CLI - strong acid/base mixing pH calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the known species, grouped by acid/base character
    Species {
        /// Optional substring filter over ids, names, and aliases
        query: Option<String>,
    },
    /// Mix up to two solutions and report the resulting pH
    Mix {
        /// First solution as formula[:molarity[:volume]], e.g. HCl:0.1:0.1
        /// (molarity in mol/L, volume in liters)
        first: Option<String>,
        /// Second solution in the same form; omitted means none
        second: Option<String>,
        /// Read the mixture from a YAML file instead of positional specs
        #[arg(long, conflicts_with_all = ["first", "second"])]
        file: Option<PathBuf>,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Species { query } => cmd_species(query.as_deref()),
        Commands::Mix {
            first,
            second,
            file,
            json,
        } => cmd_mix(first.as_deref(), second.as_deref(), file.as_deref(), json),
    }
}

fn cmd_species(query: Option<&str>) -> CliResult<()> {
    if let Some(query) = query {
        let matches = filter_catalog(query);
        if matches.is_empty() {
            println!("No species match '{query}'");
            return Ok(());
        }
        for entry in matches {
            println!(
                "{:8} {:24} [{}]",
                entry.species.formula(),
                entry.display_name,
                entry.category().label()
            );
        }
        return Ok(());
    }

    let groups = [
        (Category::Acid, "Strong Acids"),
        (Category::Base, "Strong Bases"),
        (Category::Neutral, "Neutrals"),
    ];
    for (category, heading) in groups {
        println!("{heading}:");
        for entry in catalog_for_category(category) {
            println!("  {:8} {}", entry.species.formula(), entry.display_name);
        }
    }
    Ok(())
}

fn cmd_mix(
    first: Option<&str>,
    second: Option<&str>,
    file: Option<&std::path::Path>,
    json: bool,
) -> CliResult<()> {
    let (a, b) = match (file, first) {
        (Some(path), _) => MixtureInput::load(path)?.to_substances()?,
        (None, Some(first)) => {
            let a = SubstanceSpec::parse(first)?.to_substance()?;
            let b = match second {
                Some(spec) => SubstanceSpec::parse(spec)?.to_substance()?,
                None => Substance::none(),
            };
            (a, b)
        }
        (None, None) => {
            return Err(CliError::InvalidInput(
                "provide a substance spec or --file".to_string(),
            ));
        }
    };

    let report = compute_mixture(&a, &b);
    let status = describe_status(report.ph, &a, &b);
    let color = color_category(report.ph);
    let reaction = describe_reaction(&a, &b);

    tracing::debug!(
        ph = report.ph,
        protons = report.protons,
        hydroxide = report.hydroxide,
        total_volume_l = report.total_volume_liters(),
        "computed mixture"
    );

    if json {
        let severity = match status.severity {
            Severity::Info => "info",
            Severity::Warning => "warning",
        };
        let payload = serde_json::json!({
            "ph": report.ph,
            "ph_display": format!("{:.2}", report.ph),
            "protons_mol_per_l": report.protons,
            "hydroxide_mol_per_l": report.hydroxide,
            "total_volume_l": report.total_volume_liters(),
            "color": color.label(),
            "reaction": reaction.to_string(),
            "status": { "text": status.text, "severity": severity },
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("Mixing: {} + {}", describe_substance(&a), describe_substance(&b));
    println!("Total volume: {:.3} L", report.total_volume_liters());
    println!("[H+]  = {:.4e} mol/L", report.protons);
    println!("[OH-] = {:.4e} mol/L", report.hydroxide);
    println!("pH = {:.2}  [{}]", report.ph, color.label());
    println!("Reaction: {reaction}");
    match status.severity {
        Severity::Info => println!("Status: {}", status.text),
        Severity::Warning => println!("⚠ {}", status.text),
    }
    Ok(())
}

fn describe_substance(s: &Substance) -> String {
    if !s.is_present() {
        return s.species().formula().to_string();
    }
    format!(
        "{} ({} mol/L, {:.3} L)",
        s.species().formula(),
        s.molarity(),
        s.volume_liters()
    )
}
