use seed::{prelude::*, *};
use shared::{
    api,
    render::{self, Card, SelectOption},
    unregister::Outcome,
    ApiError, Directory, Removal, Settings, Unregister,
};

use crate::request;

/// Notified by other components when the directory should be fetched again.
#[derive(Debug, Clone, Copy)]
pub struct ReloadRequested;

pub enum ListState {
    Loading,
    Ready,
    Failed,
}

impl Default for ListState {
    fn default() -> Self {
        ListState::Loading
    }
}

#[derive(Default)]
pub struct Model {
    pub state: ListState,
    /// Last directory that loaded successfully.
    pub directory: Option<Directory>,
    pub unregister: Unregister,
}

impl Model {
    pub fn new(settings: &Settings) -> Self {
        Model {
            unregister: Unregister::new(settings.unregister_enabled),
            ..Model::default()
        }
    }

    pub fn options(&self) -> Vec<SelectOption> {
        match &self.directory {
            Some(directory) => render::select_options(directory),
            None => render::select_options(&Directory::new()),
        }
    }
}

pub enum Msg {
    Load,
    Loaded(Result<Directory, ApiError>),
    UnregisterClicked(Removal),
    Unregistered(Removal, Result<String, ApiError>),
}

pub fn update(msg: Msg, model: &mut Model, settings: &Settings, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::Load => {
            orders
                .skip()
                .perform_cmd(activities_request(api::activities_url(&settings.api_base)));
        }

        Msg::Loaded(Ok(directory)) => {
            model.directory = Some(directory);
            model.state = ListState::Ready;
        }

        Msg::Loaded(Err(err)) => {
            error!("Error fetching activities:", err);
            model.state = ListState::Failed;
        }

        Msg::UnregisterClicked(removal) => {
            if !model.unregister.begin(&removal) {
                orders.skip();
                return;
            }
            let url = api::unregister_url(&settings.api_base, &removal.activity, &removal.email);
            orders.perform_cmd(unregister_request(removal, url));
        }

        Msg::Unregistered(removal, result) => {
            match &result {
                Ok(message) => {
                    log!(message);
                }
                Err(err) => {
                    error!("Error unregistering participant:", removal, err);
                }
            }
            match model.unregister.finish(&removal, &result) {
                Outcome::Reload => {
                    orders.send_msg(Msg::Load);
                }
                Outcome::Alert(text) => {
                    if let Err(e) = window().alert_with_message(&text) {
                        error!(e);
                    }
                }
            }
        }
    }
}

async fn activities_request(url: String) -> Msg {
    let result = match request::send(Request::new(url).method(Method::Get)).await {
        Ok((status, body)) => api::read_directory(status, &body),
        Err(err) => Err(err),
    };
    Msg::Loaded(result)
}

async fn unregister_request(removal: Removal, url: String) -> Msg {
    let result = match request::send(Request::new(url).method(Method::Delete)).await {
        Ok((status, body)) => api::read_reply(status, &body),
        Err(err) => Err(err),
    };
    Msg::Unregistered(removal, result)
}

/// Delegated handler for the whole list: finds the removal button the click
/// landed in, if any.
fn removal_target(event: web_sys::Event) -> Option<Msg> {
    let target = event.target()?.dyn_into::<web_sys::Element>().ok()?;
    let selector = format!("[data-action=\"{}\"]", render::UNREGISTER_ACTION);
    let button = target.closest(&selector).ok()??;
    Removal::from_data(|name| button.get_attribute(name)).map(Msg::UnregisterClicked)
}

pub fn view(model: &Model) -> Node<Msg> {
    let content = match (&model.state, &model.directory) {
        (ListState::Ready, Some(directory)) => render::cards(directory)
            .iter()
            .map(|card| card_view(card, &model.unregister))
            .collect(),
        (ListState::Failed, _) => vec![p![render::LOAD_FAILED]],
        _ => vec![p![render::LOADING]],
    };

    div![
        id!("activities-list"),
        IF!(model.unregister.is_enabled() => ev(Ev::Click, removal_target)),
        content,
    ]
}

fn card_view(card: &Card, unregister: &Unregister) -> Node<Msg> {
    div![
        C!["activity-card"],
        h4![card.name],
        p![card.description],
        p![strong!["Schedule:"], " ", card.schedule],
        p![strong!["Availability:"], " ", card.availability()],
        div![
            C!["participants-section"],
            h5![card.roster_heading()],
            if card.participants.is_empty() {
                p![C!["no-participants"], render::NO_PARTICIPANTS]
            } else {
                ul![
                    C!["participants-list"],
                    card.participants
                        .iter()
                        .map(|email| participant_view(card.name, email, unregister)),
                ]
            },
        ],
    ]
}

fn participant_view(activity: &str, email: &str, unregister: &Unregister) -> Node<Msg> {
    li![
        span![C!["participant-name"], email],
        IF!(unregister.is_enabled() => button![
            C!["participant-delete"],
            attrs! {
                At::Type => "button",
                At::Title => format!("Unregister {}", email),
                At::from("aria-label") => format!("Unregister {}", email),
                At::from("data-action") => render::UNREGISTER_ACTION,
                At::from("data-activity") => activity,
                At::from("data-email") => email,
                At::Disabled => unregister.is_pending(activity, email).as_at_value(),
            },
            svg![
                attrs! {
                    At::Width => "14",
                    At::Height => "14",
                    At::ViewBox => "0 0 24 24",
                    At::from("aria-hidden") => "true",
                    At::from("focusable") => "false",
                },
                path![attrs! {
                    At::Fill => "currentColor",
                    At::D => "M3 6h18v2H3V6zm2 3h14l-1 11H6L5 9zm5-7h4v2h-4V2z",
                }],
            ],
        ]),
    ]
}
