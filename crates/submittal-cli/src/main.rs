use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Args, CommandFactory, FromArgMatches, Parser, Subcommand, ValueEnum};
use pdf_cover::{CoverAssets, CoverLayout, PartyRole};
use pdf_package::{AssemblyOptions, Catalog, DocumentSource, PackageState};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "submittal", about = "Submittal package builder", version)]
struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render only the cover page
    Cover {
        #[command(flatten)]
        cover: CoverArgs,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Render the cover and merge it with spec sheets
    Build {
        #[command(flatten)]
        cover: CoverArgs,

        /// PDF file to include; repeat to add more
        #[arg(short, long)]
        input: Vec<PathBuf>,

        /// Catalog model to include; repeat to add more
        #[arg(short, long, requires = "catalog")]
        model: Vec<String>,

        /// Catalog CSV used to resolve --model
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Document title written to the output
        #[arg(long)]
        title: Option<String>,

        /// Timeout for remote downloads in seconds
        #[arg(long, default_value = "30")]
        timeout_secs: u64,
    },

    /// Browse a catalog CSV
    Catalog {
        /// Catalog CSV file
        #[arg(long)]
        catalog: PathBuf,

        /// List subcategories of this category
        #[arg(long)]
        category: Option<String>,

        /// List products of this subcategory (requires --category)
        #[arg(long, requires = "category")]
        subcategory: Option<String>,
    },
}

#[derive(Args)]
struct CoverArgs {
    /// Project name (first title line)
    #[arg(long, default_value = "")]
    project_name: String,

    /// Project location (second title line)
    #[arg(long, default_value = "")]
    project_location: String,

    /// Party the package is addressed to
    #[arg(long, value_enum)]
    role: Option<RoleArg>,

    /// Name of the receiving company
    #[arg(long, default_value = "")]
    company: String,

    /// Date prepared (YYYY-MM-DD)
    #[arg(long, conflicts_with = "date_prepared_unknown")]
    date_prepared: Option<NaiveDate>,

    /// Leave the date prepared blank
    #[arg(long)]
    date_prepared_unknown: bool,

    /// Bid date (YYYY-MM-DD)
    #[arg(long)]
    bid_date: Option<NaiveDate>,

    /// Mark the bid date as to be confirmed
    #[arg(long, conflicts_with = "bid_date_na")]
    bid_date_tbc: bool,

    /// Mark the bid date as not applicable
    #[arg(long)]
    bid_date_na: bool,

    /// Logo image (PNG or JPEG)
    #[arg(long)]
    logo: Option<PathBuf>,

    /// TrueType font for cover text
    #[arg(long)]
    font: Option<PathBuf>,

    /// Cover layout JSON file
    #[arg(long, conflicts_with = "legacy_layout")]
    layout: Option<PathBuf>,

    /// Use the left-aligned legacy layout
    #[arg(long)]
    legacy_layout: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum RoleArg {
    Contractor,
    Engineer,
    Distributor,
    Utility,
}

impl From<RoleArg> for PartyRole {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Contractor => Self::Contractor,
            RoleArg::Engineer => Self::Engineer,
            RoleArg::Distributor => Self::Distributor,
            RoleArg::Utility => Self::Utility,
        }
    }
}

impl CoverArgs {
    fn to_state(&self) -> PackageState {
        let mut state = PackageState::new();
        state.project_name = self.project_name.clone();
        state.project_location = self.project_location.clone();
        state.party_name = self.company.clone();
        state.date_prepared = self.date_prepared;
        state.bid_date = self.bid_date;
        if let Some(role) = self.role {
            state.select_role(role.into());
        }
        state.set_date_prepared_unknown(self.date_prepared_unknown);
        state.set_bid_date_tbc(self.bid_date_tbc);
        state.set_bid_date_na(self.bid_date_na);
        state
    }

    fn assets(&self) -> CoverAssets {
        CoverAssets {
            logo_path: self.logo.clone(),
            font_path: self.font.clone(),
        }
    }

    async fn layout(&self) -> Result<CoverLayout> {
        if self.legacy_layout {
            return Ok(CoverLayout::legacy());
        }
        match &self.layout {
            Some(path) => CoverLayout::load(path)
                .await
                .with_context(|| format!("loading layout {}", path.display())),
            None => Ok(CoverLayout::default()),
        }
    }
}

fn print_warnings(warnings: &[pdf_cover::CoverWarning]) {
    for warning in warnings {
        eprintln!("warning: {warning}");
    }
}

/// Sources from --input and --model, in the order they appeared on the command line
fn ordered_build_sources(
    matches: &clap::ArgMatches,
    inputs: &[PathBuf],
    models: &[String],
) -> Vec<(usize, BuildSource)> {
    let build = matches.subcommand_matches("build");
    let input_indices: Vec<usize> = build
        .and_then(|m| m.indices_of("input"))
        .map(|i| i.collect())
        .unwrap_or_default();
    let model_indices: Vec<usize> = build
        .and_then(|m| m.indices_of("model"))
        .map(|i| i.collect())
        .unwrap_or_default();

    let mut sources: Vec<(usize, BuildSource)> = inputs
        .iter()
        .enumerate()
        .map(|(n, path)| {
            let index = input_indices.get(n).copied().unwrap_or(n);
            (index, BuildSource::Input(path.clone()))
        })
        .chain(models.iter().enumerate().map(|(n, model)| {
            let index = model_indices.get(n).copied().unwrap_or(usize::MAX);
            (index, BuildSource::Model(model.clone()))
        }))
        .collect();
    sources.sort_by_key(|(index, _)| *index);
    sources
}

enum BuildSource {
    Input(PathBuf),
    Model(String),
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Cover { cover, output } => {
            let layout = cover.layout().await?;
            let inputs = cover.to_state().cover_inputs();
            let warnings = pdf_cover::generate_cover(&inputs, &cover.assets(), &layout, &output)
                .await
                .context("rendering cover")?;
            print_warnings(&warnings);
            println!("Cover → {}", output.display());
        }

        Commands::Build {
            cover,
            input,
            model,
            catalog,
            output,
            title,
            timeout_secs,
        } => {
            let layout = cover.layout().await?;
            let mut state = cover.to_state();

            let catalog = match &catalog {
                Some(path) => Some(
                    Catalog::load(path)
                        .await
                        .with_context(|| format!("loading catalog {}", path.display()))?,
                ),
                None => None,
            };

            for (_, source) in ordered_build_sources(&matches, &input, &model) {
                match source {
                    BuildSource::Input(path) => state.add_upload(DocumentSource::upload(path)),
                    BuildSource::Model(name) => {
                        let Some(entry) = catalog.as_ref().and_then(|c| c.find_model(&name))
                        else {
                            bail!("model {name} not found in catalog");
                        };
                        if !state.queue_entry(entry.clone()) {
                            log::warn!("Model {name} listed more than once; keeping the first");
                        }
                    }
                }
            }

            let options = AssemblyOptions {
                fetch_timeout: Duration::from_secs(timeout_secs),
                title,
            };
            let report =
                pdf_package::build_package(&state, &cover.assets(), &layout, &options)
                    .await
                    .context("building package")?;

            print_warnings(&report.cover_warnings);
            for skipped in &report.skipped {
                eprintln!("skipped {}: {}", skipped.name, skipped.reason);
            }

            let pages = report.page_count();
            let included = report.included.len();
            pdf_package::save_pdf(report.document, &output)
                .await
                .with_context(|| format!("writing {}", output.display()))?;
            println!(
                "Package: cover + {} documents, {} pages → {}",
                included,
                pages,
                output.display()
            );
        }

        Commands::Catalog {
            catalog,
            category,
            subcategory,
        } => {
            let catalog = Catalog::load(&catalog)
                .await
                .with_context(|| format!("loading catalog {}", catalog.display()))?;

            match (category.as_deref(), subcategory.as_deref()) {
                (None, _) => {
                    for category in catalog.categories() {
                        println!("{category}");
                    }
                }
                (Some(category), None) => {
                    for subcategory in catalog.subcategories(category) {
                        println!("{subcategory}");
                    }
                }
                (Some(category), Some(subcategory)) => {
                    for entry in catalog.products(category, subcategory) {
                        println!("{}\t{}\t{}", entry.model, entry.description, entry.url);
                    }
                }
            }
        }
    }

    Ok(())
}
