use log::error;
#[cfg(windows)]
use log::info;
use std::env;
use std::process;
#[cfg(windows)]
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(windows)]
use task_bar::Taskbar;

mod logging;
#[cfg(windows)]
mod message_loop;
mod system;
mod task_bar;
#[cfg(windows)]
mod util;

#[cfg(windows)]
static RESTORE_HOOK_REGISTERED: AtomicBool = AtomicBool::new(false);

fn main() {
    logging::setup().expect("Failed to initialize logger");

    let arg = env::args().nth(1);
    let show = match parse_show_flag(arg.as_deref()) {
        Some(show) => show,
        None => {
            error!("Expected a numeric flag. Usage: trayctl [0|1]");
            process::exit(1);
        }
    };

    run(show);
}

/// No flag means show. Any numeric scalar is accepted and coerced to a
/// boolean, nonzero meaning show.
fn parse_show_flag(arg: Option<&str>) -> Option<bool> {
    match arg {
        None => Some(true),
        Some(raw) => raw.parse::<f64>().ok().map(|value| value != 0.0),
    }
}

#[cfg(windows)]
fn run(show: bool) {
    register_restore_hook();

    let taskbar = Taskbar::new(system::NativeApi);
    if let Err(e) = taskbar.set_visibility(show) {
        error!("{}", e);
        return;
    }

    if !show {
        // The restore hook dies with the process, so stay alive for as long
        // as the taskbar is supposed to be hidden.
        info!("Taskbar hidden until this process exits (Ctrl+C restores it)");
        message_loop::start(|_| true);
    }
}

#[cfg(not(windows))]
fn run(_show: bool) {
    error!("The taskbar can only be controlled on Windows");
    process::exit(1);
}

/// `ctrlc` only accepts a single handler, so registration happens at most
/// once per process.
#[cfg(windows)]
fn register_restore_hook() {
    if RESTORE_HOOK_REGISTERED.swap(true, Ordering::SeqCst) {
        return;
    }

    ctrlc::set_handler(|| on_quit(&Taskbar::new(system::NativeApi)))
        .expect("Failed to register restore hook");
}

#[cfg(windows)]
fn on_quit<TApi: system::WindowApi>(taskbar: &Taskbar<TApi>) {
    if let Err(e) = taskbar.restore() {
        error!("{}", e);
    }

    process::exit(0);
}

#[cfg(test)]
mod tests {
    use super::parse_show_flag;

    #[test]
    fn no_flag_means_show() {
        assert_eq!(parse_show_flag(None), Some(true));
        assert_eq!(parse_show_flag(None), parse_show_flag(Some("1")));
    }

    #[test]
    fn nonzero_flags_mean_show() {
        assert_eq!(parse_show_flag(Some("1")), Some(true));
        assert_eq!(parse_show_flag(Some("2")), Some(true));
        assert_eq!(parse_show_flag(Some("-1")), Some(true));
        assert_eq!(parse_show_flag(Some("0.5")), Some(true));
    }

    #[test]
    fn zero_flags_mean_hide() {
        assert_eq!(parse_show_flag(Some("0")), Some(false));
        assert_eq!(parse_show_flag(Some("0.0")), Some(false));
    }

    #[test]
    fn text_flags_are_rejected() {
        assert_eq!(parse_show_flag(Some("taskbar")), None);
        assert_eq!(parse_show_flag(Some("")), None);
    }
}
