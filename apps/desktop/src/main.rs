use echosummarize_core::{
    ClientConfig, PageOptions, RequestId, RevealConfig, SubmitLabel, SummaryClient, SummaryPage,
    SummaryResult,
    logging::init_tracing,
    render::{CURSOR_GLYPH, cursor_lit},
};
use iced::widget::{Column, button, column, container, row, scrollable, text, text_input};
use iced::time::{self, Instant};
use iced::{Element, Length, Subscription, Task};

fn main() -> iced::Result {
    init_tracing();
    iced::application(App::new, App::update, App::view)
        .title("EchoSummarize")
        .subscription(App::subscription)
        .run()
}

struct App {
    client: SummaryClient,
    page: SummaryPage,
    reveal_started: Instant,
    cursor_lit: bool,
}

#[derive(Debug, Clone)]
enum Message {
    UrlChanged(String),
    Submit,
    SummaryArrived(RequestId, SummaryResult),
    /// Reveal timer fired for the given typewriter generation.
    Tick(u64, Instant),
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let reveal = RevealConfig::from_env().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default reveal settings");
            RevealConfig::default()
        });

        let app = Self {
            client: SummaryClient::new(ClientConfig::from_env()),
            page: SummaryPage::new(PageOptions {
                reveal,
                ..PageOptions::default()
            }),
            reveal_started: Instant::now(),
            cursor_lit: true,
        };
        (app, Task::none())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::UrlChanged(url) => self.page.set_query(url),
            Message::Submit => {
                // Enter in the input still fires while the button is disabled.
                if self.page.is_busy() {
                    return Task::none();
                }
                let ticket = self.page.submit();
                let client = self.client.clone();
                return Task::perform(
                    async move {
                        let result = client.summarize(&ticket.url).await;
                        (ticket.id, result)
                    },
                    |(id, result)| Message::SummaryArrived(id, result),
                );
            }
            Message::SummaryArrived(id, result) => {
                if self.page.resolve(id, result) {
                    self.reveal_started = Instant::now();
                    self.cursor_lit = true;
                }
            }
            Message::Tick(generation, at) => {
                self.page.reveal_tick(generation);
                self.cursor_lit = cursor_lit(at.saturating_duration_since(self.reveal_started));
            }
        }
        Task::none()
    }

    /// One timer per reveal sequence. Keying it by generation means a new
    /// summary replaces the subscription, which drops the old timer.
    fn subscription(&self) -> Subscription<Message> {
        if !self.page.needs_ticks() {
            return Subscription::none();
        }

        time::every(self.page.options().reveal.speed)
            .with(self.page.typewriter().generation())
            .map(|(generation, at)| Message::Tick(generation, at))
    }

    fn view(&self) -> Element<'_, Message> {
        let submit_button = self.page.submit_button();
        let label = match submit_button.label {
            SubmitLabel::Send => text("➤"),
            SubmitLabel::Processing => text(SubmitLabel::Processing.as_str()),
        };

        let mut content = column![
            text("EchoSummarize").size(48),
            text("Distill YouTube videos into concise summaries with AI magic.").size(20),
            row![
                text_input("Paste your YouTube URL here...", self.page.query())
                    .on_input(Message::UrlChanged)
                    .on_submit(Message::Submit)
                    .padding(12),
                button(label)
                    .padding(12)
                    .on_press_maybe(submit_button.enabled.then_some(Message::Submit)),
            ]
            .spacing(8),
        ]
        .spacing(16)
        .padding(32)
        .max_width(768);

        if let Some(rendered) = self.page.summary_view() {
            let mut lines = Column::new().spacing(2);
            for line in rendered.lines {
                lines = lines.push(text(line));
            }
            if rendered.cursor {
                let glyph = if self.cursor_lit { CURSOR_GLYPH } else { ' ' };
                lines = lines.push(text(glyph.to_string()));
            }

            content = content.push(column![text("Summary:").size(24), scrollable(lines)].spacing(12));
        }

        container(content).center_x(Length::Fill).into()
    }
}
