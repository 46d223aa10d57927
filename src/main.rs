use iced::{
    widget::{button, column, container, horizontal_space, image as img, row, scrollable, text},
    Element, Length, Task, Theme,
};

mod error;
mod loader;
mod nav;
mod renderer;
mod session;
mod store;
mod viewer;

use nav::BackTarget;
use store::{demo_catalog, MaterialRecord, Role, UserContext};
use viewer::{DocumentViewer, ViewerState};

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter("material_viewer=debug,info")
        .init();

    iced::application("Course Materials", App::update, App::view)
        .theme(|_| Theme::Dark)
        .run_with(App::new)
}

#[derive(Debug, Clone)]
enum Message {
    OpenRecord(usize),
    Back,
    PreviousPage,
    NextPage,
    ZoomIn,
    ZoomOut,
    ZoomReset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    TaughtMaterials,
    Catalog,
    StudentHome,
    Viewer,
}

struct App {
    user: UserContext,
    catalog: Vec<MaterialRecord>,
    viewer: DocumentViewer,
    screen: Screen,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        // The session context would come from the login flow; the demo
        // signs in a teacher.
        let user = UserContext {
            user_id: 1,
            role: Role::Teacher,
        };
        (
            Self {
                user,
                catalog: demo_catalog(),
                viewer: DocumentViewer::new(),
                screen: home_screen(user.role),
            },
            Task::none(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenRecord(index) => {
                if let Some(record) = self.catalog.get(index).cloned() {
                    self.viewer.open(record);
                    self.screen = Screen::Viewer;
                }
            }
            Message::Back => {
                let owns = self
                    .viewer
                    .record()
                    .map(|record| self.user.owns(record))
                    .unwrap_or(false);
                self.screen = match nav::back_target(self.user.role, owns) {
                    BackTarget::TaughtMaterials => Screen::TaughtMaterials,
                    BackTarget::Catalog => Screen::Catalog,
                    BackTarget::StudentHome => Screen::StudentHome,
                };
                self.viewer.close();
            }
            Message::PreviousPage => self.viewer.previous_page(),
            Message::NextPage => self.viewer.next_page(),
            Message::ZoomIn => self.viewer.zoom_in(),
            Message::ZoomOut => self.viewer.zoom_out(),
            Message::ZoomReset => self.viewer.reset_zoom(),
        }
        Task::none()
    }

    fn view(&self) -> Element<Message> {
        match self.screen {
            Screen::Viewer => self.viewer_view(),
            Screen::TaughtMaterials => self.list_view("My materials"),
            Screen::Catalog => self.list_view("Catalog"),
            Screen::StudentHome => self.list_view("My courses"),
        }
    }

    fn list_view<'a>(&'a self, heading: &'a str) -> Element<'a, Message> {
        let mut records = column![text(heading).size(28)].spacing(10);
        for (index, record) in self.catalog.iter().enumerate() {
            records = records.push(
                row![
                    text(record.title.as_str()).size(16),
                    text(record.kind.noun()).size(14),
                    horizontal_space(),
                    button("Open").on_press(Message::OpenRecord(index)),
                ]
                .spacing(10),
            );
        }

        container(records.padding(20))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn viewer_view(&self) -> Element<Message> {
        let title = self
            .viewer
            .record()
            .map(|record| record.title.as_str())
            .unwrap_or("Document");

        let header = row![
            button("Back").on_press(Message::Back),
            text(title).size(20),
            horizontal_space(),
        ]
        .spacing(10)
        .padding(10);

        let body: Element<Message> = if self.viewer.controls_visible() {
            let session = self.viewer.session();
            let zoom_percent = session.map(|s| (s.zoom() * 100.0) as i32).unwrap_or(100);
            let page_label = session.map(|s| s.page_label()).unwrap_or_default();

            let toolbar = row![
                button("−").on_press(Message::ZoomOut),
                text(format!("{zoom_percent}%")),
                button("+").on_press(Message::ZoomIn),
                button("Reset").on_press(Message::ZoomReset),
                horizontal_space(),
                text(page_label),
                button("◀").on_press_maybe(
                    session
                        .map(|s| s.has_previous_page())
                        .unwrap_or(false)
                        .then_some(Message::PreviousPage)
                ),
                button("▶").on_press_maybe(
                    session
                        .map(|s| s.has_next_page())
                        .unwrap_or(false)
                        .then_some(Message::NextPage)
                ),
            ]
            .spacing(10)
            .padding(10);

            let page_view: Element<Message> = if let Some(frame) = self.viewer.frame() {
                scrollable(container(img(frame).width(Length::Shrink)))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .into()
            } else {
                container(text("Rendering page..."))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .center_x(Length::Fill)
                    .center_y(Length::Fill)
                    .into()
            };

            let mut content = column![toolbar];
            if let Some(status) = self.viewer.status() {
                content = content.push(text(status.to_string()).size(14));
            }
            content.push(page_view).into()
        } else {
            // Error reporter surface: message area instead of controls.
            let message = match self.viewer.state() {
                ViewerState::Failed(message) => message.clone(),
                ViewerState::Loading => "Loading...".to_string(),
                _ => "No document loaded".to_string(),
            };
            container(text(message).size(16))
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into()
        };

        column![header, body].spacing(10).into()
    }
}

fn home_screen(role: Role) -> Screen {
    match role {
        Role::Teacher => Screen::TaughtMaterials,
        Role::Student => Screen::StudentHome,
    }
}
