use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use pathport::commands::{self, Host};
use pathport::mapfile::Settings;
use pathport::resolve::{ResolutionMode, Resolver};
use pathport::window::{Caret, View, WindowContext, WindowId};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "A utility for resolving and remapping file paths"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ResolveArgs {
    /// Paths to resolve; like a sidebar selection, only the first is used
    paths: Vec<String>,

    /// Resolution mode
    #[arg(long, value_enum, default_value = "absolute")]
    kind: ResolutionMode,

    /// Project root folder, repeatable, most specific match wins
    #[arg(long = "folder")]
    folders: Vec<String>,

    /// Project-level map file path
    #[arg(long)]
    map_file: Option<String>,

    /// Global (user-level) map file path, used when no project-level one is set
    #[arg(long)]
    global_map_file: Option<String>,

    /// Pin the map file to this path, ignoring both settings
    #[arg(long)]
    override_map_file: Option<String>,

    /// Append this 1-based line number, as if copying from a text cursor
    #[arg(long)]
    line: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a path and print the string that would be copied
    Copy {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Report whether the copy action would be enabled for a path
    Check {
        #[command(flatten)]
        args: ResolveArgs,
    },
}

/// One-shot host: the "clipboard" is stdout, errors go to stderr, and
/// there is no interactive prompt.
struct StdoutHost;

impl Host for StdoutHost {
    fn set_clipboard(&mut self, text: &str) {
        println!("{text}");
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn prompt_input(&mut self, _label: &str) -> Option<String> {
        None
    }
}

fn main() -> Result<()> {
    // Initialize structured logging
    pathport::telemetry::init()?;
    let cli = Cli::parse();

    match cli.command {
        Commands::Copy { args } => {
            let (window, mut resolver) = build_session(&args);
            let mut host = StdoutHost;

            if let Some(path) = args.override_map_file.clone() {
                // user-initiated load: report failures, then carry on
                if let Err(err) = resolver.set_map_file_override(&window, Some(path)) {
                    host.show_error(&format!("Error setting map path: {err}"));
                }
            }

            let copied = match args.line {
                Some(_) => commands::copy_at_cursor(&mut resolver, &mut host, &window, args.kind),
                None => commands::copy_selected(
                    &mut resolver,
                    &mut host,
                    &window,
                    &args.paths,
                    args.kind,
                ),
            };

            if !copied {
                println!("Nothing to copy.");
                std::process::exit(1);
            }
        }

        Commands::Check { args } => {
            let (window, mut resolver) = build_session(&args);

            if let Some(path) = args.override_map_file.clone() {
                if let Err(err) = resolver.set_map_file_override(&window, Some(path)) {
                    eprintln!("Error setting map path: {err}");
                }
            }

            let enabled = match args.line {
                Some(_) => commands::copy_at_cursor_enabled(&mut resolver, &window, args.kind),
                None => commands::copy_selected_enabled(
                    &mut resolver,
                    &window,
                    &args.paths,
                    args.kind,
                ),
            };

            if enabled {
                println!("enabled");
            } else {
                println!("disabled");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Builds the window snapshot and resolver a host editor would hand over.
fn build_session(args: &ResolveArgs) -> (WindowContext, Resolver) {
    let mut window = WindowContext::new(WindowId(0));
    window.folders = args.folders.clone();
    window.map_file = args.map_file.clone();

    // With --line the first path acts as the active view under the cursor
    if let Some(line) = args.line {
        window.active = Some(View {
            file: args.paths.first().cloned(),
            caret: Some(Caret {
                // caret rows are 0-based
                row: line.max(1) - 1,
            }),
        });
    }

    let resolver = Resolver::new(Settings {
        map_file: args.global_map_file.clone(),
    });
    (window, resolver)
}
