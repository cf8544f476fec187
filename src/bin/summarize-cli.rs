use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use relay_sdk::RelayClient;

#[derive(Parser)]
#[command(name = "summarize-cli")]
#[command(about = "Summarize text through a running summarize-relay", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:4001")]
    url: String,

    /// Read the text from a file instead of the argument or stdin.
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Text to summarize. Read from stdin when neither this nor --file is given.
    text: Option<String>,
}

fn read_input(cli: &Cli) -> std::io::Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cli.file {
        return std::fs::read_to_string(path);
    }
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let text = match read_input(&cli) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let client = RelayClient::new(&cli.url);
    match client.summarize(&text).await {
        Ok(summary) => {
            for line in summary.lines() {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
