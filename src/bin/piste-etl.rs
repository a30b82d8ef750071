use std::path::PathBuf;

use clap::{Parser, Subcommand};
use piste::{
    etl::{
        self,
        extract::extract_relations,
        import::{import_resorts, ImportOptions},
        merge::{assign_members, filter_by_members, DEFAULT_MIN_MEMBERS, DEFAULT_RADIUS_KM},
        osm::{OverpassResponse, ResortRecord},
        overpass::{OverpassClient, DOWNHILL_QUERY},
        summary::{summarize_tags, DEFAULT_SAMPLE_SIZE, DEFAULT_TOP_KEYS},
    },
    server::{
        config::{overpass_url, required_var},
        error::Error,
        startup,
    },
};
use tracing_subscriber::EnvFilter;

/// OpenStreetMap ingest for the piste catalog
#[derive(Parser, Debug)]
#[command(name = "piste-etl", author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Download downhill pistes and aerialways from the Overpass API
    Fetch {
        #[arg(long, default_value = "skiresorts.json")]
        output: PathBuf,
    },
    /// Assign nodes and ways to the nearest listed resort
    Merge {
        #[arg(long, default_value = "ski-resorts.json")]
        resorts: PathBuf,
        #[arg(long, default_value = "skiresorts_clean.json")]
        elements: PathBuf,
        #[arg(long, default_value = "ski-resorts-with-members.json")]
        output: PathBuf,
        #[arg(long, default_value_t = DEFAULT_RADIUS_KM)]
        radius_km: f64,
    },
    /// Collect resorts described by downhill relations with their trails and lifts
    Extract {
        #[arg(long, default_value = "skiresorts.json")]
        input: PathBuf,
        #[arg(long, default_value = "resorts_trails_lifts.json")]
        output: PathBuf,
    },
    /// Print the most common tag keys of an Overpass dump
    Summarize {
        #[arg(long, default_value = "skiresorts.json")]
        input: PathBuf,
        #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
        sample: usize,
        #[arg(long, default_value_t = DEFAULT_TOP_KEYS)]
        top: usize,
    },
    /// Load merged resorts into the database
    Import {
        #[arg(long, default_value = "ski-resorts-with-members.json")]
        input: PathBuf,
        /// Keep existing resorts instead of clearing the catalog first
        #[arg(long)]
        no_clear: bool,
    },
    /// Keep only resorts with at least `min_members` members
    Filter {
        #[arg(long, default_value = "ski-resorts-with-members.json")]
        input: PathBuf,
        #[arg(long, default_value = "ski-resorts-filtered.json")]
        output: PathBuf,
        #[arg(long, default_value_t = DEFAULT_MIN_MEMBERS)]
        min_members: usize,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if let Err(e) = run(args.command).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(command: Command) -> Result<(), Error> {
    match command {
        Command::Fetch { output } => {
            let client = OverpassClient::new(overpass_url())?;
            let response = client.query(DOWNHILL_QUERY).await?;

            let counts = response.counts();
            etl::write_json(&output, &response).await?;

            println!("Downloaded {} elements to {}", response.elements.len(), output.display());
            println!("  nodes:     {}", counts.nodes);
            println!("  ways:      {}", counts.ways);
            println!("  relations: {}", counts.relations);
        }
        Command::Merge {
            resorts,
            elements,
            output,
            radius_km,
        } => {
            let mut listing: Vec<ResortRecord> = etl::read_json(&resorts).await?;
            let dump: OverpassResponse = etl::read_json(&elements).await?;

            let report = assign_members(&mut listing, &dump.elements, radius_km);
            if report.resorts_without_coordinates > 0 {
                tracing::warn!(
                    resorts = report.resorts_without_coordinates,
                    "Resorts without parsable coordinates received no members"
                );
            }

            etl::write_json(&output, &listing).await?;

            println!(
                "Merged {} of {} nodes/ways into {} resorts ({} beyond {} km). Output: {}",
                report.assigned,
                report.candidates,
                listing.len(),
                report.dropped,
                radius_km,
                output.display()
            );
        }
        Command::Extract { input, output } => {
            let dump: OverpassResponse = etl::read_json(&input).await?;

            let extraction = extract_relations(&dump.elements);
            etl::write_json(&output, &extraction.resorts).await?;

            println!(
                "Extracted {} resorts with trails and lifts to {}",
                extraction.resorts.len(),
                output.display()
            );
            println!("\nMember type:role combinations in resort relations:");
            for role in &extraction.member_roles {
                println!("{}", role);
            }
            println!("\nTotal member references: {}", extraction.total_members);
            println!("Missing member references: {}", extraction.missing_references);
        }
        Command::Summarize { input, sample, top } => {
            let dump: OverpassResponse = etl::read_json(&input).await?;

            let summary = summarize_tags(&dump.elements, sample);

            println!("Most common tag keys over {} elements (top {}):", summary.sampled, top);
            for (key, count) in summary.top(top) {
                println!("{}: {}", key, count);
            }
            println!("\nElements with an aerialway tag: {}", summary.aerialway_count);
        }
        Command::Import { input, no_clear } => {
            let listing: Vec<ResortRecord> = etl::read_json(&input).await?;
            tracing::info!(resorts = listing.len(), "Found resorts to import");

            let database_url = required_var("DATABASE_URL")?;
            let db = startup::connect_to_database(&database_url).await?;

            let summary =
                import_resorts(&db, &listing, ImportOptions { clear: !no_clear }).await?;

            println!("\n=== Import Summary ===");
            println!("Resorts imported: {}", summary.resorts);
            println!("Trails created:   {}", summary.trails);
            println!("Lifts created:    {}", summary.lifts);
            println!("Members skipped:  {}", summary.skipped_members);
            println!("Entries skipped:  {}", summary.skipped_resorts);
        }
        Command::Filter {
            input,
            output,
            min_members,
        } => {
            let listing: Vec<ResortRecord> = etl::read_json(&input).await?;
            let total = listing.len();

            let kept = filter_by_members(listing, min_members);
            etl::write_json(&output, &kept).await?;

            println!(
                "Kept {} of {} resorts with at least {} members. Output: {}",
                kept.len(),
                total,
                min_members,
                output.display()
            );
        }
    }

    Ok(())
}
