use std::io;
use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use placement_dashboard::{
    report, CgpaRange, Dashboard, DashboardOptions, RecordStore, SamplePercent,
};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "placement-dashboard")]
#[command(about = "Chart data for the university placement dashboard", long_about = None)]
struct Cli {
    /// Placement CSV (falls back to PLACEMENT_CSV)
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every chart's data to stdout
    Summary {
        #[command(flatten)]
        filters: FilterArgs,
    },
    /// Generate a markdown report
    Report {
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Write every chart's data as JSON (`-` for stdout)
    Export {
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(long, default_value = "dashboard.json")]
        out: PathBuf,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Lower CGPA bound for the distribution chart
    #[arg(long, default_value_t = 4.0)]
    cgpa_min: f64,
    /// Upper CGPA bound for the distribution chart
    #[arg(long, default_value_t = 11.0)]
    cgpa_max: f64,
    /// Percentage of students shown on the scatter chart
    #[arg(long, default_value_t = 5.0)]
    sample_pct: f64,
    /// Lower CGPA bound highlighted on the scatter chart
    #[arg(long, default_value_t = 4.0)]
    focus_min: f64,
    /// Upper CGPA bound highlighted on the scatter chart
    #[arg(long, default_value_t = 11.0)]
    focus_max: f64,
    /// Number of colleges in the ranking
    #[arg(long, default_value_t = 10)]
    top: usize,
    /// Seed for the sampling keys; random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

impl FilterArgs {
    fn options(&self) -> anyhow::Result<DashboardOptions> {
        Ok(DashboardOptions {
            cgpa_range: CgpaRange::new(self.cgpa_min, self.cgpa_max)
                .context("invalid --cgpa-min/--cgpa-max")?,
            sample_percent: SamplePercent::new(self.sample_pct).context("invalid --sample-pct")?,
            focus_range: CgpaRange::new(self.focus_min, self.focus_max)
                .context("invalid --focus-min/--focus-max")?,
            top_colleges: self.top,
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let csv_path = match cli.csv {
        Some(path) => path,
        None => std::env::var("PLACEMENT_CSV")
            .map(PathBuf::from)
            .context("pass --csv or set PLACEMENT_CSV to the placement data file")?,
    };

    let filters = match &cli.command {
        Commands::Summary { filters }
        | Commands::Report { filters, .. }
        | Commands::Export { filters, .. } => filters,
    };
    let options = filters.options()?;
    let store = match filters.seed {
        Some(seed) => RecordStore::load(&csv_path, &mut Pcg64Mcg::seed_from_u64(seed)),
        None => RecordStore::load(&csv_path, &mut rand::rng()),
    }
    .with_context(|| format!("failed to load {}", csv_path.display()))?;
    let dashboard = Dashboard::new(store, options);

    match cli.command {
        Commands::Summary { .. } => print_summary(&dashboard),
        Commands::Report { out, .. } => {
            let report = report::build_report(&dashboard.snapshot(), Utc::now());
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            info!("Report written to {}", out.display());
        }
        Commands::Export { out, .. } => {
            let json = serde_json::to_string_pretty(&dashboard.snapshot())?;
            if out.as_os_str() == "-" {
                println!("{json}");
            } else {
                std::fs::write(&out, json)
                    .with_context(|| format!("failed to write {}", out.display()))?;
                info!("Chart data written to {}", out.display());
            }
        }
    }

    Ok(())
}

fn print_summary(dashboard: &Dashboard) {
    let stacked = dashboard.stacked_bar();
    println!(
        "CGPA distribution ({:.1} to {:.1}), {} students:",
        stacked.range.lo(),
        stacked.range.hi(),
        stacked.binned_total()
    );
    for bin in &stacked.bins {
        println!(
            "  {:>4}  placed {:>4}  not placed {:>4}",
            bin.label, bin.placed, bin.not_placed
        );
    }

    let scatter = dashboard.scatter();
    println!(
        "Scatter sample at {}%: {} of {} students ({} in focus)",
        scatter.percent.value(),
        scatter.points.len(),
        scatter.total_records,
        scatter.focused_count()
    );

    if dashboard.top_colleges().is_empty() {
        println!("No placed students.");
    } else {
        println!("Top colleges by placements:");
        for college in dashboard.top_colleges() {
            println!("- {} ({})", college.college_id, college.count);
        }
    }

    println!("Skill scores of placed students:");
    for entry in dashboard.skill_stats() {
        let stats = &entry.stats;
        println!(
            "- {}: median {:.2} (Q1 {:.2}, Q3 {:.2}, whiskers {:.2} to {:.2})",
            entry.category.label(),
            stats.median,
            stats.q1,
            stats.q3,
            stats.whisker_min,
            stats.whisker_max
        );
    }
}
