// src/main.rs
use std::fmt;
use std::path::PathBuf;

use iced::alignment::Horizontal;
use iced::widget::{button, column, container, pick_list, row, scrollable, text, Column, Space};
use iced::{
    executor, theme, window, Alignment, Application, Background, Color, Command, Element, Length,
    Settings, Theme,
};
use rfd::FileDialog;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod csv_handler;
mod data_types;
mod error;
mod format;
mod remote_handler;
mod session;
mod ui;

use csv_handler::CsvHandler;
use data_types::RecordSet;
use error::LoadError;
use format::format_field;
use remote_handler::RemoteHandler;
use session::{SessionState, SourceAction};
use ui::{Styles, DARK_THEME, LIGHT_THEME};

const VERSION: &str = "0.1.0";

pub fn main() -> iced::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    RecordViewer::run(Settings {
        window: window::Settings {
            size: (1024, 768),
            resizable: true,
            ..Default::default()
        },
        ..Settings::default()
    })
}

struct RecordViewer {
    is_dark_mode: bool,
    session: SessionState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct SourceChoice {
    index: usize,
    label: String,
}

impl fmt::Display for SourceChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RowChoice(usize);

impl fmt::Display for RowChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {}", self.0 + 1)
    }
}

#[derive(Debug, Clone)]
enum Message {
    ToggleTheme,
    SourcePicked(SourceChoice),
    RowPicked(RowChoice),
    OpenLocalFile,
    FileSelected(Option<PathBuf>),
    FileLoaded(String, Result<RecordSet, LoadError>),
    SnapshotLoaded(String, Result<RecordSet, LoadError>),
}

// Activating a source clears the selection up front; for a remote source
// the actual data arrives later via SnapshotLoaded, and whichever load
// completes last wins.
fn activate_source(session: &mut SessionState, index: usize) -> Command<Message> {
    let label = match session.sources().get(index) {
        Some(source) => source.label.clone(),
        None => return Command::none(),
    };

    match session.select_source(index) {
        Some(SourceAction::Fetch(url)) => {
            info!("fetching snapshot {label} from {url}");
            Command::perform(
                async move { RemoteHandler::new().fetch_csv(&url).await },
                move |result| Message::SnapshotLoaded(label.clone(), result),
            )
        }
        Some(SourceAction::Load(data)) => {
            info!("installing retained data for {label} ({} rows)", data.len());
            session.load_records(data);
            Command::none()
        }
        None => Command::none(),
    }
}

impl Application for RecordViewer {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = ();

    fn new(_flags: ()) -> (Self, Command<Message>) {
        let config = config::load();
        let mut session = SessionState::new(config.source_options());

        // The default snapshot loads on startup; a failure only logs
        let command = activate_source(&mut session, 0);

        (
            RecordViewer {
                is_dark_mode: true,
                session,
            },
            command,
        )
    }

    fn title(&self) -> String {
        format!("Record Viewer v{VERSION}")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::ToggleTheme => {
                self.is_dark_mode = !self.is_dark_mode;
                Command::none()
            }

            Message::SourcePicked(choice) => activate_source(&mut self.session, choice.index),

            Message::RowPicked(choice) => {
                self.session.select_row(choice.0);
                Command::none()
            }

            Message::OpenLocalFile => Command::perform(
                async {
                    FileDialog::new()
                        .add_filter("CSV Files", &["csv"])
                        .pick_file()
                },
                Message::FileSelected,
            ),

            Message::FileSelected(None) => Command::none(),

            Message::FileSelected(Some(path)) => {
                let label = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());

                Command::perform(
                    async move { CsvHandler::new().read_file(path).await },
                    move |result| Message::FileLoaded(label.clone(), result),
                )
            }

            Message::FileLoaded(label, Ok(data)) => {
                info!("loaded {} rows from {label}", data.len());
                let index = self.session.add_loaded_source(label, data);
                activate_source(&mut self.session, index)
            }

            Message::FileLoaded(label, Err(err)) => {
                error!("upload of {label} failed: {err}");
                Command::none()
            }

            Message::SnapshotLoaded(label, Ok(data)) => {
                info!("snapshot {label} loaded with {} rows", data.len());
                self.session.load_records(data);
                Command::none()
            }

            Message::SnapshotLoaded(label, Err(err)) => {
                // Log only; the current record set stays as it was
                error!("snapshot {label} failed to load: {err}");
                Command::none()
            }
        }
    }

    fn theme(&self) -> Theme {
        if self.is_dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn view(&self) -> Element<Message> {
        let styles = self.styles();

        let layout = column![
            self.toolbar(styles),
            self.content(styles),
            self.footer(styles),
        ];

        container(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::Container::Custom(Box::new(ContainerStyle {
                bg: styles.bg,
            })))
            .into()
    }
}

impl RecordViewer {
    fn styles(&self) -> &'static Styles {
        if self.is_dark_mode {
            &DARK_THEME
        } else {
            &LIGHT_THEME
        }
    }

    fn toolbar(&self, styles: &Styles) -> Element<Message> {
        let sources: Vec<SourceChoice> = self
            .session
            .sources()
            .iter()
            .enumerate()
            .map(|(index, source)| SourceChoice {
                index,
                label: source.label.clone(),
            })
            .collect();
        let selected_source = self
            .session
            .active_source()
            .and_then(|index| sources.get(index).cloned());

        let mut controls = row![
            text("Source")
                .size(16)
                .style(theme::Text::Color(styles.fg)),
            pick_list(sources, selected_source, Message::SourcePicked),
        ]
        .spacing(10)
        .align_items(Alignment::Center);

        if !self.session.records().is_empty() {
            let rows: Vec<RowChoice> = (0..self.session.records().len()).map(RowChoice).collect();
            let selected_row = self.session.selection().map(RowChoice);

            controls = controls
                .push(
                    text("Record")
                        .size(16)
                        .style(theme::Text::Color(styles.fg)),
                )
                .push(pick_list(rows, selected_row, Message::RowPicked));
        }

        container(controls)
            .width(Length::Fill)
            .padding(10)
            .style(theme::Container::Custom(Box::new(ContainerStyle {
                bg: styles.header_bg,
            })))
            .into()
    }

    fn content(&self, styles: &Styles) -> Element<Message> {
        let body: Element<Message> = if let Some(fields) = self.session.selected_fields() {
            let header = row![
                table_cell("Field", styles.header_fg, styles.header_bg, Length::Fixed(220.0)),
                table_cell("Value", styles.header_fg, styles.header_bg, Length::Fill),
            ]
            .spacing(1);

            let detail_rows: Vec<Element<Message>> = fields
                .map(|(name, value)| {
                    row![
                        table_cell(name, styles.fg, styles.bg, Length::Fixed(220.0)),
                        table_cell(&format_field(value), styles.fg, styles.bg, Length::Fill),
                    ]
                    .spacing(1)
                    .into()
                })
                .collect();

            let table = column![header]
                .push(Column::with_children(detail_rows).spacing(1))
                .spacing(1);

            scrollable(table)
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        } else if self.session.records().is_empty() {
            placeholder(
                "No data loaded. Pick a snapshot or open a local CSV file.",
                styles,
            )
        } else {
            placeholder("Select a record to view its fields.", styles)
        };

        container(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(10)
            .style(theme::Container::Custom(Box::new(ContainerStyle {
                bg: styles.bg,
            })))
            .into()
    }

    fn footer(&self, styles: &Styles) -> Element<Message> {
        let bar = row![
            text(format!("Record Viewer v{VERSION}"))
                .size(14)
                .style(theme::Text::Color(styles.bar_fg)),
            Space::with_width(Length::Fill),
            footer_button("\u{1F4C1} Open CSV\u{2026}", Message::OpenLocalFile, styles),
            Space::with_width(Length::Fixed(10.0)),
            footer_button("\u{1F4A1} Theme", Message::ToggleTheme, styles),
        ]
        .spacing(5)
        .align_items(Alignment::Center);

        container(bar)
            .width(Length::Fill)
            .padding(10)
            .style(theme::Container::Custom(Box::new(ContainerStyle {
                bg: styles.bar_bg,
            })))
            .into()
    }
}

fn table_cell<'a>(content: &str, fg: Color, bg: Color, width: Length) -> Element<'a, Message> {
    container(text(content).size(18).style(theme::Text::Color(fg)))
        .width(width)
        .padding(5)
        .style(theme::Container::Custom(Box::new(ContainerStyle { bg })))
        .into()
}

fn placeholder<'a>(message: &str, styles: &Styles) -> Element<'a, Message> {
    container(
        text(message)
            .size(24)
            .style(theme::Text::Color(styles.fg))
            .horizontal_alignment(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x()
    .center_y()
    .into()
}

fn footer_button<'a>(label: &str, message: Message, styles: &Styles) -> Element<'a, Message> {
    button(
        text(label)
            .size(16)
            .style(theme::Text::Color(styles.bar_fg))
            .horizontal_alignment(Horizontal::Center),
    )
    .on_press(message)
    .style(theme::Button::Custom(Box::new(ButtonStyle {
        bg: styles.bar_bg,
        fg: styles.bar_fg,
        hover_bg: styles.accent,
    })))
    .into()
}

// Custom styles for containers and buttons
struct ContainerStyle {
    bg: Color,
}

impl container::StyleSheet for ContainerStyle {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: None,
            background: Some(Background::Color(self.bg)),
            border_radius: 0.0.into(),
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
        }
    }
}

struct ButtonStyle {
    bg: Color,
    fg: Color,
    hover_bg: Color,
}

impl button::StyleSheet for ButtonStyle {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(self.bg)),
            border_radius: 4.0.into(),
            text_color: self.fg,
            ..button::Appearance::default()
        }
    }

    fn hovered(&self, style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(self.hover_bg)),
            ..self.active(style)
        }
    }
}
