use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = yaml_source::cli::Cli::parse();
    if let Err(e) = yaml_source::cmd::dispatch(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
