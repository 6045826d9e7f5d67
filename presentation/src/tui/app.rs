//! TUI application: main loop with Actor pattern
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)                 request task (tokio::spawn)
//!   ├─ crossterm EventStream              └─ gateway call
//!   ├─ completion_rx  <──── completion_tx ──┘
//!   └─ tick_interval
//! ```
//!
//! Only the loop touches [`TuiState`]; request tasks report back through
//! the completion channel.

use super::mode::KeyHandler;
use super::state::TuiState;
use super::widgets::{
    MainLayout, footer::FooterWidget, header::HeaderWidget, number_card::NumberCardWidget,
    quote_card::QuoteCardWidget,
};
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::future::BoxFuture;
use futures::stream::StreamExt;
use generator_application::{Completion, PageController};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::panic::PanicHookInfo;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

const DEFAULT_TICK_RATE: Duration = Duration::from_millis(250);

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Restores the terminal on drop and while it is alive, on panic.
///
/// Dropping the guard also puts the previous panic hook back.
struct TerminalGuard {
    previous_hook: Arc<PanicHook>,
    restore: fn(),
}

impl TerminalGuard {
    fn install(restore: fn()) -> Self {
        let previous_hook: Arc<PanicHook> = Arc::new(std::panic::take_hook());
        let hook = previous_hook.clone();
        std::panic::set_hook(Box::new(move |info| {
            restore();
            hook(info);
        }));
        Self {
            previous_hook,
            restore,
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        (self.restore)();
        // set_hook panics on a panicking thread
        if !std::thread::panicking() {
            let previous = self.previous_hook.clone();
            std::panic::set_hook(Box::new(move |info| previous(info)));
        }
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// TUI application
pub struct TuiApp {
    state: TuiState,
    completion_tx: mpsc::UnboundedSender<Completion>,
    completion_rx: mpsc::UnboundedReceiver<Completion>,
    tick_rate: Duration,
}

impl TuiApp {
    pub fn new(page: PageController, backend_url: impl Into<String>) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            state: TuiState::new(page, backend_url),
            completion_tx,
            completion_rx,
            tick_rate: DEFAULT_TICK_RATE,
        }
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Guard first: every setup step below can fail
        let guard = TerminalGuard::install(restore_terminal);

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        info!(backend = %self.state.backend_url, "TUI started");

        let result = self.event_loop(&mut terminal).await;

        drop(guard);
        info!("TUI stopped");
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(self.tick_rate);

        loop {
            // Render
            terminal.draw(|frame| render(frame, &self.state))?;

            if self.state.should_quit {
                break;
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                Some(term_event) = event_stream.next() => {
                    self.handle_terminal_event(term_event?);
                }

                // Completions from request tasks
                Some(completion) = self.completion_rx.recv() => {
                    self.state.page.finish(completion);
                }

                // Tick for spinner animation
                _ = tick.tick() => {
                    self.state.tick();
                }
            }
        }

        Ok(())
    }

    /// Handle a terminal (crossterm) event
    fn handle_terminal_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let action = KeyHandler::handle(self.state.focus, key);
                debug!(?action, focus = ?self.state.focus, "Key action");
                if let Some(request) = self.state.apply(action) {
                    self.spawn_request(request);
                }
            }
            Event::Resize(_, _) => {
                // Terminal auto-resizes on next draw
            }
            _ => {}
        }
    }

    /// Run a request off the loop and post its completion back
    fn spawn_request(&self, request: BoxFuture<'static, Completion>) {
        let tx = self.completion_tx.clone();
        tokio::spawn(async move {
            let completion = request.await;
            // Receiver gone means the loop has exited
            let _ = tx.send(completion);
        });
    }
}

/// Render all widgets
fn render(frame: &mut ratatui::Frame, state: &TuiState) {
    let layout = MainLayout::compute(frame.area());

    frame.render_widget(HeaderWidget, layout.header);
    frame.render_widget(NumberCardWidget::new(state), layout.number_card);
    frame.render_widget(QuoteCardWidget::new(state), layout.quote_card);
    frame.render_widget(FooterWidget::new(state), layout.footer);
}
