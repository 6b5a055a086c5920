mod backend;
mod config;
mod error;

use config::Settings;
use error::Error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(pid) => {
            log::info!("Ready to attach monitoring tools to PID {}", pid);
        }
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run() -> Result<i32, Error> {
    let settings = Settings::new()?;

    backend::ensure_shortcut(&settings.user_apps, &settings.system_apps)?;

    backend::launch(
        &settings,
        &backend::OpenCommand,
        &backend::Pgrep,
        std::thread::sleep,
    )
}
