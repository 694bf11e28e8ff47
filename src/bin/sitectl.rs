use clap::{Parser, Subcommand};
use pogor_site_api::{giscus, og, Config};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sitectl", about = "CLI for the pogor.dev site API", version)]
struct Cli {
    /// Override OG_SOURCE (render, upstream or file)
    #[arg(global = true, long)]
    og_source: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open Graph image operations
    Og {
        #[command(subcommand)]
        cmd: OgCmd,
    },
    /// Comment widget settings
    Giscus {
        #[command(subcommand)]
        cmd: GiscusCmd,
    },
}

#[derive(Subcommand, Debug)]
enum OgCmd {
    /// Generate the preview image once and save it
    Render {
        /// Output path
        #[arg(long, value_name = "PATH", default_value = "og.png")]
        out: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum GiscusCmd {
    /// Print the widget settings
    Show {
        /// Output raw JSON instead of key: value lines
        #[arg(long)]
        json: bool,
    },
    /// Print the <script> embed tag
    Script,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // Load env and parse CLI
    Config::dotenv_load();
    let cli = Cli::parse();

    let mut conf = Config::new().expect("Failed to load config");
    if let Some(source) = cli.og_source {
        conf.og_source = source;
    }

    match cli.command {
        Commands::Og { cmd } => match cmd {
            OgCmd::Render { out } => {
                let generator = og::from_config(&conf)?;
                let bytes = generator.generate().await.map_err(|e| {
                    eprintln!("Error: {}", e);
                    e
                })?;
                if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                    tokio::fs::create_dir_all(parent).await?;
                }
                tokio::fs::write(&out, &bytes).await?;
                println!("Saved {} ({} bytes)", out.display(), bytes.len());
                Ok(())
            }
        },
        Commands::Giscus { cmd } => match cmd {
            GiscusCmd::Show { json } => {
                let cfg = giscus();
                if json {
                    println!("{}", serde_json::to_string_pretty(cfg)?);
                } else {
                    for (name, value) in cfg.data_attributes() {
                        println!("{}: {}", name.trim_start_matches("data-"), value);
                    }
                }
                Ok(())
            }
            GiscusCmd::Script => {
                println!("{}", giscus().script_tag());
                Ok(())
            }
        },
    }
}
