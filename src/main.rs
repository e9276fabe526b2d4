use clap::Parser;
use dayview::args::{Cli, Command};
use dayview::config::Config;
use dayview::error::AppResult;
use dayview::logging;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("{e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = Config::load(cli.config.as_deref())?;
    logging::init(config.log_filter.as_deref())?;

    match cli.command {
        Some(Command::Print) => platform::print(&config, &cli),
        None => platform::menu_bar(&config, &cli),
    }
}

#[cfg(target_os = "macos")]
mod platform {
    use chrono::Local;
    use dayview::args::Cli;
    use dayview::calendar::SelectedDate;
    use dayview::config::Config;
    use dayview::error::{AppError, AppResult};
    use dayview::ffi::event_kit::EventKitStore;
    use dayview::{menu, print};
    use objc2_foundation::MainThreadMarker;

    fn main_thread() -> AppResult<MainThreadMarker> {
        MainThreadMarker::new().ok_or(AppError::NotMainThread)
    }

    pub fn print(config: &Config, cli: &Cli) -> AppResult<()> {
        let store = EventKitStore::new(main_thread()?);
        let date = cli
            .selected_date()
            .unwrap_or_else(|| SelectedDate::today(&Local));
        print::print_day(store, Local, date, config.view_options(), &mut std::io::stdout())
    }

    pub fn menu_bar(config: &Config, cli: &Cli) -> AppResult<()> {
        menu::run(main_thread()?, config, cli.selected_date())
    }
}

#[cfg(not(target_os = "macos"))]
mod platform {
    use dayview::args::Cli;
    use dayview::calendar::CalendarError;
    use dayview::config::Config;
    use dayview::error::AppResult;

    pub fn print(_config: &Config, _cli: &Cli) -> AppResult<()> {
        Err(CalendarError::StoreUnavailable.into())
    }

    pub fn menu_bar(_config: &Config, _cli: &Cli) -> AppResult<()> {
        Err(CalendarError::StoreUnavailable.into())
    }
}
