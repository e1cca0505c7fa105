//! Frame Catalog - terminal front end for the eyewear frame catalog

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use frame_catalog::domain::aggregates::{FilterState, FramePdFilter};
use frame_catalog::probe::FsImageProbe;
use frame_catalog::render::{write_detail, write_options, write_thumbnails, OutputFormat};
use frame_catalog::{load_catalog, CatalogConfig, CatalogView, DetailView};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Browse the eyewear frame catalog
#[derive(Parser, Debug)]
#[command(name = "frame-catalog")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog dataset (JSON array of SKU records)
    #[arg(long, env = "CATALOG_DATA_PATH")]
    data: Option<PathBuf>,

    /// Directory holding frame images
    #[arg(long, env = "CATALOG_IMAGE_DIR")]
    images: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the distinct values available for each filter
    Options,
    /// Show the thumbnail grid, optionally filtered
    List(ListArgs),
    /// Show one frame's variants, main image and SKU table
    Detail(DetailArgs),
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Case-insensitive search across name, color tags, sizes and material
    #[arg(short, long)]
    search: Option<String>,
    /// Color tag (repeatable; any tag matches)
    #[arg(long = "color-tag")]
    color_tags: Vec<String>,
    #[arg(long)]
    material: Option<String>,
    /// Single color; matches records tagged with it
    #[arg(long)]
    color: Option<String>,
    #[arg(long = "eye-size")]
    eye_sizes: Vec<i32>,
    #[arg(long = "b")]
    bridges: Vec<i32>,
    #[arg(long = "temple")]
    temples: Vec<i32>,
    /// Frame PD checkbox values (repeatable)
    #[arg(long = "pd", conflicts_with_all = ["pd_exact", "pd_min", "pd_max"])]
    pds: Vec<i32>,
    /// Exact Frame PD; takes precedence over --pd-min/--pd-max
    #[arg(long)]
    pd_exact: Option<String>,
    #[arg(long)]
    pd_min: Option<String>,
    #[arg(long)]
    pd_max: Option<String>,
}

impl ListArgs {
    fn into_state(self) -> FilterState {
        let frame_pd = if self.pds.is_empty() {
            FramePdFilter::from_inputs(self.pd_exact.as_deref(), self.pd_min.as_deref(), self.pd_max.as_deref())
        } else {
            FramePdFilter::OneOf { values: self.pds.into_iter().collect() }
        };
        let mut state = FilterState::new().with_frame_pd(frame_pd);
        if let Some(term) = &self.search { state.set_search(term); }
        if let Some(material) = self.material { state = state.with_material(material); }
        if let Some(color) = self.color { state = state.with_color(color); }
        state.color_tags.extend(self.color_tags);
        state.eye_sizes.extend(self.eye_sizes);
        state.bridges.extend(self.bridges);
        state.temples.extend(self.temples);
        state
    }
}

#[derive(Args, Debug)]
struct DetailArgs {
    /// Exact frame name
    #[arg(required_unless_present = "link")]
    frame: Option<String>,
    /// Detail link as produced by `list` (details.html?frame=...)
    #[arg(long, conflicts_with = "frame")]
    link: Option<String>,
    #[arg(long)]
    color: Option<String>,
    #[arg(long)]
    eye_size: Option<i32>,
    /// Gallery thumbnail to show as the main image
    #[arg(long)]
    view: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = CatalogConfig::from_env();
    if let Some(data) = cli.data { config.data_path = data; }
    if let Some(images) = cli.images { config.image_dir = images; }

    let catalog = load_catalog(&config.data_path).await?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Options => {
            let view = CatalogView::new(catalog, config.images());
            write_options(view.options(), cli.format, &mut stdout)?;
        }
        Command::List(args) => {
            let mut view = CatalogView::new(catalog, config.images());
            let cards = view.apply_filters(args.into_state());
            for event in view.take_events() { tracing::debug!(?event, "catalog event"); }
            write_thumbnails(&cards, cli.format, &mut stdout)?;
        }
        Command::Detail(args) => {
            let probe = FsImageProbe::new(config.images());
            let mut view = match (&args.link, &args.frame) {
                (Some(link), _) => DetailView::open_link(&catalog, link, config.images())?,
                (None, Some(frame)) => DetailView::open(&catalog, frame, config.images())?,
                (None, None) => anyhow::bail!("a frame name or --link is required"),
            };
            view.settle(&probe).await;
            if let Some(color) = &args.color { view.select_color(color)?; }
            if let Some(eye_size) = args.eye_size { view.select_eye_size(eye_size)?; }
            view.settle(&probe).await;
            if let Some(index) = args.view {
                view.select_thumb(index)?;
                view.settle(&probe).await;
            }
            for event in view.take_events() { tracing::debug!(?event, "detail event"); }
            write_detail(&view, cli.format, &mut stdout)?;
        }
    }
    Ok(())
}
