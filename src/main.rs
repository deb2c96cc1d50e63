use clap::{Parser, Subcommand};
use pagewright::render::RenderContext;
use pagewright::{config, generate, output, scan};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagewright")]
#[command(about = "Static site generator for markdown content trees")]
#[command(long_about = "\
Static site generator for markdown content trees

Your filesystem is the data source. Directories with an index.md become
sections, every other markdown file becomes a page, and YAML front matter
supplies titles and dates.

Content structure:

  content/
  ├── config.toml          # Site config (optional)
  ├── index.md             # Home page → /
  ├── about.md             # Page → /about/ (top level = shown in nav)
  ├── blog/                # Section → /blog/ (shown in nav)
  │   ├── index.md         # Section page, lists its children newest first
  │   ├── post1.md         # Page → /blog/post1/
  │   └── series/          # Subsection, listed inside /blog/
  │       └── index.md
  └── _drafts/             # Excluded: never read or published

Front matter:

  ---
  title: First Post        # Default: file name (section: directory name)
  date: 2024-01-01         # Listing order; undated entries sort last
  ---

Static files under --static-dir are copied to <output>/static.

Run 'pagewright gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory (deleted and recreated on every build)
    #[arg(long, default_value = "build", global = true)]
    output: PathBuf,

    /// Static assets directory, copied to <output>/static
    #[arg(long, default_value = "static", global = true)]
    static_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every document into the output directory
    Build,
    /// Print navigation and section listings without writing anything
    Check,
    /// Print the derived site structure as JSON
    Scan,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.source)?;
            let ctx = RenderContext::from_config(&site_config);

            println!(
                "==> Building {} \u{2192} {}",
                cli.source.display(),
                cli.output.display()
            );
            let report = generate::build(
                &cli.source,
                &cli.output,
                &cli.static_dir,
                &site_config,
                &ctx,
            )?;
            output::print_diagnostics(&report.diagnostics);
            output::print_build_output(&report, &cli.output);
        }
        Command::Check => {
            let site_config = config::load_config(&cli.source)?;
            println!("==> Checking {}", cli.source.display());
            let tree = scan::scan(&cli.source, &site_config.exclusions())?;
            output::print_check_output(&generate::manifest(&tree));
            output::print_diagnostics(&tree.diagnostics);
            println!("==> {} pages, {} warnings", tree.page_count(), tree.diagnostics.len());
        }
        Command::Scan => {
            let site_config = config::load_config(&cli.source)?;
            let tree = scan::scan(&cli.source, &site_config.exclusions())?;
            let json = serde_json::to_string_pretty(&generate::manifest(&tree))?;
            println!("{}", json);
            output::print_diagnostics(&tree.diagnostics);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
