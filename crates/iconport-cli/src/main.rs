//! Iconport CLI — search and export icons from the Iconify directory

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use iconport::data::settings::{ExportFormat, ExportSettings, SettingsUpdate};
use iconport::data::types::IconId;
use iconport::data::{Favorites, RecentSearches};
use iconport::error::{AppError, Result};
use iconport::export::{ExportOptions, ExportService, SavePrompt};
use iconport::providers::{IconProvider, IconifyProvider, SearchOptions};

#[derive(Parser)]
#[command(name = "iconport", about = "Search and export icons from the Iconify directory", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the icon directory
    Search {
        /// Free-text query (e.g. "home")
        query: String,
        /// Restrict results to one collection prefix (e.g. "mdi")
        #[arg(long)]
        prefix: Option<String>,
        /// Maximum number of results
        #[arg(long, default_value_t = iconport::config::api::DEFAULT_SEARCH_LIMIT)]
        limit: usize,
        /// Result offset, for paging
        #[arg(long, default_value_t = 0)]
        start: usize,
    },

    /// Export one icon to SVG or PNG
    Export {
        /// Icon identifier (e.g. "mdi:home")
        icon: String,
        /// Output format: svg or png
        #[arg(long)]
        format: Option<String>,
        /// PNG size in pixels (64, 128, 256, 512 or 1024)
        #[arg(long)]
        size: Option<u32>,
        /// Fill color as a hex string (e.g. "#ff0000")
        #[arg(long)]
        color: Option<String>,
        /// File name without extension (defaults to "prefix-name")
        #[arg(long)]
        name: Option<String>,
    },

    /// Export several icons into the default folder
    Batch {
        /// Icon identifiers (e.g. "mdi:home lucide:user")
        #[arg(required = true)]
        icons: Vec<String>,
    },

    /// List the available icon collections
    Collections,

    /// Manage favorite icons
    #[command(subcommand)]
    Fav(FavCommand),

    /// Show recent search queries
    Recent,

    /// Show or change export settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
enum FavCommand {
    /// List favorites in the order they were added
    List,
    /// Add an icon to the favorites
    Add { icon: String },
    /// Remove an icon from the favorites
    Remove { icon: String },
    /// Toggle an icon's favorite status
    Toggle { icon: String },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the current export settings
    Show,
    /// Change export settings
    Set {
        /// Folder used for auto-save exports
        #[arg(long)]
        default_folder: Option<String>,
        /// Output format: svg or png
        #[arg(long)]
        format: Option<String>,
        /// PNG size in pixels
        #[arg(long)]
        size: Option<u32>,
        /// Fill color as a hex string
        #[arg(long)]
        color: Option<String>,
        /// Write to the default folder without prompting
        #[arg(long)]
        auto_save: Option<bool>,
    },
    /// Create and store the initial default export folder
    InitFolder,
}

/// Save prompt backed by stdin: empty input accepts the suggestion,
/// end-of-input cancels
struct StdinPrompt;

impl SavePrompt for StdinPrompt {
    fn pick_save_path(&self, suggested: &Path, extension: &str) -> Option<PathBuf> {
        eprint!("Save {} as [{}]: ", extension, suggested.display());
        let _ = io::stderr().flush();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    Some(suggested.to_path_buf())
                } else {
                    Some(PathBuf::from(line))
                }
            }
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => {}
        // A dismissed save prompt is a no-op, not an error
        Err(AppError::Cancelled) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Make sure first-run users have somewhere to export to; failure
    // here must not block the app
    match ExportSettings::default_path() {
        Ok(path) => {
            if let Err(e) = ExportSettings::initialize_default_folder(&path) {
                log::warn!("could not initialize default export folder: {}", e);
            }
        }
        Err(e) => log::warn!("could not resolve settings path: {}", e),
    }

    match cli.command {
        Command::Search {
            query,
            prefix,
            limit,
            start,
        } => {
            let provider = IconifyProvider::new()?;
            let mut options = SearchOptions::new(&query)
                .with_limit(limit)
                .with_start(start);
            if let Some(prefix) = prefix {
                options = options.with_prefix(prefix);
            }

            let results = provider.search(&options)?;
            RecentSearches::open()?.push(&query)?;

            for icon in &results.icons {
                println!("{}", icon);
            }
            eprintln!(
                "{} of {} matches (start {})",
                results.icons.len(),
                results.total,
                results.start
            );
        }

        Command::Export {
            icon,
            format,
            size,
            color,
            name,
        } => {
            let icon: IconId = icon.parse()?;
            let mut options = ExportOptions::new();
            if let Some(format) = format {
                options = options.format(format.parse::<ExportFormat>()?);
            }
            if let Some(size) = size {
                options = options.size(size);
            }
            if let Some(color) = color {
                options = options.color(color);
            }
            if let Some(name) = name {
                options = options.file_name(name);
            }

            let service = export_service()?;
            let path = service.export_icon(&icon, &options)?;
            println!("Exported {} to {}", icon, path.display());
        }

        Command::Batch { icons } => {
            let icons: Vec<IconId> = icons
                .iter()
                .map(|s| s.parse())
                .collect::<Result<Vec<_>>>()?;

            let service = export_service()?;
            let report = service.export_batch(&icons, |current, total| {
                eprintln!("[{}/{}]", current, total);
            })?;

            println!("Exported {} of {} icons", report.completed, icons.len());
            for error in &report.errors {
                eprintln!("failed: {}", error);
            }
        }

        Command::Collections => {
            let provider = IconifyProvider::new()?;
            let collections = provider.collections()?;

            let mut prefixes: Vec<_> = collections.keys().collect();
            prefixes.sort();
            for prefix in prefixes {
                let info = &collections[prefix];
                match &info.author {
                    Some(author) => {
                        println!("{:<20} {} ({} icons, by {})", prefix, info.name, info.total, author)
                    }
                    None => println!("{:<20} {} ({} icons)", prefix, info.name, info.total),
                }
            }
        }

        Command::Fav(action) => {
            let mut favorites = Favorites::open()?;
            match action {
                FavCommand::List => {
                    for icon in favorites.all() {
                        println!("{}", icon);
                    }
                }
                FavCommand::Add { icon } => {
                    let icon: IconId = icon.parse()?;
                    if favorites.add(&icon)? {
                        println!("Added {}", icon);
                    } else {
                        println!("{} is already a favorite", icon);
                    }
                }
                FavCommand::Remove { icon } => {
                    let icon: IconId = icon.parse()?;
                    if favorites.remove(&icon)? {
                        println!("Removed {}", icon);
                    } else {
                        println!("{} is not a favorite", icon);
                    }
                }
                FavCommand::Toggle { icon } => {
                    let icon: IconId = icon.parse()?;
                    if favorites.toggle(&icon)? {
                        println!("Added {}", icon);
                    } else {
                        println!("Removed {}", icon);
                    }
                }
            }
        }

        Command::Recent => {
            let recent = RecentSearches::open()?;
            for query in recent.all() {
                println!("{}", query);
            }
        }

        Command::Config(action) => {
            let path = ExportSettings::default_path()?;
            match action {
                ConfigCommand::Show => {
                    let settings = ExportSettings::load_from(&path)?;
                    println!("default-folder: {}", settings.default_folder);
                    println!("format:         {}", settings.format);
                    println!("size:           {}", settings.size);
                    println!("color:          {}", settings.color);
                    println!("auto-save:      {}", settings.auto_save);
                }
                ConfigCommand::Set {
                    default_folder,
                    format,
                    size,
                    color,
                    auto_save,
                } => {
                    let mut update = SettingsUpdate::new();
                    if let Some(folder) = default_folder {
                        update = update.default_folder(folder);
                    }
                    if let Some(format) = format {
                        update = update.format(format.parse::<ExportFormat>()?);
                    }
                    if let Some(size) = size {
                        update = update.size(size);
                    }
                    if let Some(color) = color {
                        update = update.color(color);
                    }
                    if let Some(auto_save) = auto_save {
                        update = update.auto_save(auto_save);
                    }

                    let mut settings = ExportSettings::load_from(&path)?;
                    update.apply_to(&mut settings)?;
                    settings.save_to(&path)?;
                    println!("Settings updated");
                }
                ConfigCommand::InitFolder => {
                    let folder = ExportSettings::initialize_default_folder(&path)?;
                    println!("Default export folder: {}", folder);
                }
            }
        }
    }

    Ok(())
}

fn export_service() -> Result<ExportService> {
    let provider = IconifyProvider::new()?;
    ExportService::new(Box::new(provider), Box::new(StdinPrompt))
}
