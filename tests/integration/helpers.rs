use chat_viewport::app::{
    App, FeedEvent, ViewportConfig, ViewportEvent, handle_feed_event, handle_terminal_event,
    handle_viewport_event,
};
use chat_viewport::transcript::{Message, MessagePart};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

const WIDTH: u16 = 80;
const HEIGHT: u16 = 24;

/// An `App` wired to a headless terminal. No TUI loop, no real terminal.
pub struct Harness {
    pub app: App,
    terminal: Terminal<TestBackend>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_app(App::test_default())
    }

    pub fn readonly() -> Self {
        Self::with_app(App::new(ViewportConfig::default(), true))
    }

    pub fn with_app(app: App) -> Self {
        let terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("test backend");
        Self { app, terminal }
    }

    /// Render one frame and return the screen, one string per row.
    pub fn draw(&mut self) -> Vec<String> {
        let app = &mut self.app;
        self.terminal.draw(|f| chat_viewport::ui::render(f, app)).expect("draw");
        let buffer = self.terminal.backend().buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right()).map(|x| buffer[(x, y)].symbol()).collect::<String>()
            })
            .collect()
    }

    /// Resize the headless terminal and deliver the resize event.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal.backend_mut().resize(width, height);
        handle_terminal_event(&mut self.app, Event::Resize(width, height));
    }

    pub fn feed(&mut self, event: FeedEvent) {
        handle_feed_event(&mut self.app, event);
    }

    pub fn key(&mut self, code: KeyCode) {
        handle_terminal_event(&mut self.app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    pub fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        let event = MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE };
        handle_terminal_event(&mut self.app, Event::Mouse(event));
    }

    /// Deliver queued viewport notifications to the app and return them.
    pub fn drain_viewport_events(&mut self) -> Vec<ViewportEvent> {
        let mut seen = Vec::new();
        while let Ok(event) = self.app.viewport_rx.try_recv() {
            handle_viewport_event(&mut self.app, event);
            seen.push(event);
        }
        seen
    }

    /// Run a smooth scroll to completion, one frame per tick.
    pub fn settle(&mut self) -> Vec<String> {
        let mut screen = self.draw();
        while self.app.viewport.tick() {
            screen = self.draw();
        }
        screen
    }

    pub fn max_scroll(&self) -> usize {
        self.app.viewport.anchor().geometry().max_scroll()
    }
}

pub fn screen_contains(screen: &[String], needle: &str) -> bool {
    screen.iter().any(|row| row.contains(needle))
}

pub fn user(id: &str, text: &str) -> Message {
    Message::user(id, text)
}

pub fn assistant(id: &str, text: &str) -> Message {
    Message::assistant(id, vec![MessagePart::text(text)])
}

/// `turns` question/answer pairs, enough to overflow the screen when large.
pub fn conversation(turns: usize) -> Vec<Message> {
    (0..turns)
        .flat_map(|i| {
            [
                user(&format!("u{i}"), &format!("question number {i}")),
                assistant(&format!("a{i}"), &format!("answer number {i}")),
            ]
        })
        .collect()
}
