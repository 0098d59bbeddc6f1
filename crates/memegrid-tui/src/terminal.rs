use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};
use std::thread;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn init() -> Result<Tui> {
    install_panic_hook(leave_raw_mode);

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

pub fn restore(terminal: &mut Tui) -> Result<()> {
    leave_raw_mode()?;
    terminal.show_cursor()?;
    Ok(())
}

fn leave_raw_mode() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)
}

/// Run `cleanup` before the default panic report, but only for panics on the
/// installing thread. A panicking load task is reported through its channel
/// and the UI keeps running, so the terminal must stay in raw mode for it.
fn install_panic_hook(cleanup: fn() -> io::Result<()>) {
    let ui_thread = thread::current().id();
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        if thread::current().id() == ui_thread {
            let _ = cleanup();
        }
        default_hook(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static CLEANUPS: AtomicUsize = AtomicUsize::new(0);

    fn count_cleanup() -> io::Result<()> {
        CLEANUPS.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    #[test]
    fn panic_hook_cleans_up_only_on_ui_thread() {
        install_panic_hook(count_cleanup);

        let worker = thread::spawn(|| panic!("load task blew up"));
        assert!(worker.join().is_err());
        assert_eq!(CLEANUPS.load(Ordering::SeqCst), 0);

        let caught = std::panic::catch_unwind(|| panic!("render blew up"));
        assert!(caught.is_err());
        assert_eq!(CLEANUPS.load(Ordering::SeqCst), 1);

        // Back to the default hook for the rest of the test binary.
        let _ = std::panic::take_hook();
    }
}
