use env_logger::Env;
use log::error;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = form_relay::start_server().await {
        error!("Server error: {e}");
        std::process::exit(1);
    }
}
