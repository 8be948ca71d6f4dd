// ABOUTME: CLI binary for clickgen.
// ABOUTME: Generates TypeScript click helpers for a page given a URL or file path.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use clickgen::Client;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "clickgen")]
#[command(about = "Generate TypeScript click helpers for a page's buttons and links")]
struct Args {
    /// HTML source: an http(s) URL or a local file path
    source: String,

    /// Output directory for the generated page.ts
    #[arg(short = 'o', long = "out-dir", default_value = "generated")]
    out_dir: PathBuf,

    /// Print the generated code to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Print the stub manifest as JSON to stdout instead of writing a file
    #[arg(long)]
    json: bool,

    /// Allow fetching from private/local networks
    #[arg(long = "allow-private-networks")]
    allow_private_networks: bool,

    /// Print elapsed time in ms to stderr
    #[arg(long)]
    timing: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let client = Client::builder()
        .allow_private_networks(args.allow_private_networks)
        .build();

    let start = Instant::now();
    let result = if args.stdout || args.json {
        client.generate_from(&args.source).await
    } else {
        client.run(&args.source, Some(&args.out_dir)).await
    };
    let elapsed = start.elapsed();

    let exit = match result {
        Ok(generated) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&generated).unwrap());
            } else if args.stdout {
                print!("{}", generated.code);
            } else if let Some(path) = &generated.written_to {
                eprintln!("wrote {} stubs to {}", generated.stub_count(), path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    };

    if args.timing {
        eprintln!("elapsed: {}ms", elapsed.as_millis());
    }

    exit
}
