//! fxmenu CLI - import an FX layer into an expression menu.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fxmenu::animator::{AnimationClip, AnimatorController};
use fxmenu::asset::{AssetStore, DirAssetStore, MemoryAssetStore};
use fxmenu::menu::JsonMenuRepository;
use fxmenu::{ImportOptions, ImportOutcome, Importer, Result};

const VERSION_INFO: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("FXMENU_BUILD_DATE"),
    " ",
    env!("FXMENU_BUILD_TIME"),
    ")"
);

/// Import animator FX layer transitions as expression menu branches
#[derive(Parser, Debug)]
#[command(name = "fxmenu", version = VERSION_INFO, about, long_about = None)]
struct Cli {
    /// Increase logging verbosity (-v: debug, -vv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbosity: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a mode built from the controller to the menu and save it
    #[command(visible_alias = "i")]
    Import {
        /// Animator controller (JSON)
        #[arg(value_name = "CONTROLLER")]
        controller: PathBuf,

        /// Menu document (JSON); created if missing
        #[arg(value_name = "MENU")]
        menu: PathBuf,

        #[command(flatten)]
        common: CommonArgs,

        /// Save the menu as a copy next to the original
        #[arg(long = "copy")]
        save_as_copy: bool,
    },
    /// Print the ordered branches as JSON without writing anything
    #[command(visible_alias = "p")]
    Preview {
        /// Animator controller (JSON)
        #[arg(value_name = "CONTROLLER")]
        controller: PathBuf,

        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Project directory clip asset paths are resolved against
    #[arg(short = 'a', long = "assets", value_name = "DIR", default_value = ".")]
    assets: PathBuf,

    /// Import options (JSON)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,
}

impl CommonArgs {
    fn options(&self) -> Result<ImportOptions> {
        match &self.config {
            Some(path) => ImportOptions::load(path),
            None => Ok(ImportOptions::default()),
        }
    }
}

/// Reads clips from the project directory and keeps created clips in memory.
struct PreviewStore {
    project: DirAssetStore,
    created: MemoryAssetStore,
}

impl PreviewStore {
    fn new(root: &Path) -> Self {
        Self { project: DirAssetStore::new(root), created: MemoryAssetStore::new() }
    }
}

impl AssetStore for PreviewStore {
    fn load_clip(&self, path: &str) -> Result<AnimationClip> {
        match self.created.get(path) {
            Some(clip) => Ok(clip.clone()),
            None => self.project.load_clip(path),
        }
    }

    fn create_clip(&mut self, path: &str, clip: &AnimationClip) -> Result<()> {
        self.created.create_clip(path, clip)
    }

    fn guid(&self, path: &str) -> Result<String> {
        self.project.guid(path)
    }
}

fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        "error"
    } else {
        match cli.verbosity {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_import(controller: &Path, menu: &Path, common: &CommonArgs, save_as_copy: bool) -> Result<()> {
    let mut options = common.options()?;
    options.save_as_copy |= save_as_copy;

    let controller = AnimatorController::open(controller)?;
    let mut assets = DirAssetStore::new(&common.assets);
    let mut repo = JsonMenuRepository::new(menu);

    match Importer::with_options(&mut assets, options).run(&controller, &mut repo)? {
        ImportOutcome::Imported { mode_id, branch_count } => {
            println!("Imported {} branches into mode {}", branch_count, mode_id);
        }
        ImportOutcome::NoBranches => println!("No branches found"),
    }
    Ok(())
}

fn cmd_preview(controller: &Path, common: &CommonArgs) -> Result<()> {
    let options = common.options()?;
    let controller = AnimatorController::open(controller)?;
    let mut assets = PreviewStore::new(&common.assets);

    let branches = Importer::with_options(&mut assets, options).collect_branches(&controller)?;
    println!("{}", serde_json::to_string_pretty(&branches)?);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    let result = match &cli.command {
        Command::Import { controller, menu, common, save_as_copy } => {
            cmd_import(controller, menu, common, *save_as_copy)
        }
        Command::Preview { controller, common } => cmd_preview(controller, common),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
