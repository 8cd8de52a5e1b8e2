#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = related_files::cli::parse();
    let code = related_files::app::run_cli(cli).await;
    if code != 0 {
        std::process::exit(code);
    }
}
