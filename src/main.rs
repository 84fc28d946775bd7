use clap::{Parser, Subcommand};
use folio_showcase::controller::ShowcaseController;
use folio_showcase::filter::TypeFilter;
use folio_showcase::state::ShowcaseEvent;
use folio_showcase::{catalog, config, output, render};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio-showcase")]
#[command(about = "Project showcase for portfolio sites")]
#[command(long_about = "\
Project showcase for portfolio sites

Renders an auto-advancing featured carousel, a category-filterable project
grid, a project detail modal and an image lightbox from a static catalog.

Content structure:

  content/
  ├── catalog.toml     # [[projects]] tables, in display order
  └── config.toml      # Optional settings (see 'folio-showcase gen-config')

Categories are derived from each project's type label:
  contains \"desktop\" → Desktop Application
  contains \"mobile\"  → Mobile Application
  anything else      → Web Development")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory for rendered snapshots
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the catalog and config and list the projects
    Check,
    /// Render the showcase for a given state to index.html
    Render(RenderArgs),
    /// Run the carousel timer and print each featured project
    Play(PlayArgs),
    /// Print a stock config.toml with all options documented
    GenConfig,
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Featured carousel position (0-based)
    #[arg(long, default_value_t = 0)]
    featured: usize,

    /// Grid filter: All, Web Development, Desktop Application, Mobile Application
    #[arg(long, default_value = "All")]
    filter: TypeFilter,

    /// Open the detail modal for this project id
    #[arg(long)]
    open: Option<u32>,

    /// Also open the lightbox on the detail's main image
    #[arg(long, requires = "open")]
    lightbox: bool,
}

#[derive(clap::Args)]
struct PlayArgs {
    /// Number of auto-advances to wait for
    #[arg(long, default_value_t = 3)]
    ticks: usize,

    /// Override carousel.auto_advance_ms
    #[arg(long)]
    interval_ms: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let catalog = catalog::load_catalog(&cli.source)?;
            output::print_catalog_output(&catalog);
            println!(
                "==> Content is valid (auto-advance every {} ms)",
                site_config.carousel.auto_advance_ms
            );
        }
        Command::Render(args) => {
            let site_config = config::load_config(&cli.source)?;
            let catalog = catalog::load_catalog(&cli.source)?;
            if args.featured >= catalog.len() {
                return Err(format!(
                    "--featured {} is out of range: the catalog has {} projects",
                    args.featured,
                    catalog.len()
                )
                .into());
            }

            let mut controller = ShowcaseController::new(catalog, site_config.carousel.clone());
            controller.jump(args.featured);
            controller.set_filter(args.filter);
            if let Some(id) = args.open {
                controller.open_detail(id);
                let main_image = controller
                    .view()
                    .detail
                    .and_then(|record| record.lightbox_targets().into_iter().next());
                if let (true, Some(image)) = (args.lightbox, main_image) {
                    controller.dispatch(ShowcaseEvent::OpenLightbox(image));
                }
            }

            let snapshot = render::write_snapshot(
                controller.catalog(),
                controller.state(),
                &site_config,
                &cli.output,
            )?;
            output::print_render_output(&controller.view(), &snapshot);
        }
        Command::Play(args) => {
            let mut site_config = config::load_config(&cli.source)?;
            if let Some(ms) = args.interval_ms {
                site_config.carousel.auto_advance_ms = ms.max(1);
            }
            let catalog = catalog::load_catalog(&cli.source)?;
            let interval = site_config.carousel.interval();

            let mut controller = ShowcaseController::new(catalog, site_config.carousel);
            println!("{}", output::format_featured_line(&controller.view()));
            controller.start();
            let mut advanced = 0;
            while advanced < args.ticks {
                if controller.wait_for_tick(interval * 2) {
                    advanced += 1;
                    println!("{}", output::format_featured_line(&controller.view()));
                }
            }
            controller.shutdown();
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
