use seed::{prelude::*, *};
use shared::{api, render::SelectOption, ApiError, Settings, SignupForm};

use crate::{activities::ReloadRequested, request};

#[derive(Default)]
pub struct Model {
    pub form: SignupForm,
    // dropping the handle aborts the pending hide
    hide_notice: Option<CmdHandle>,
}

pub enum Msg {
    EmailChanged(String),
    ActivityChanged(String),
    Submitted,
    Replied(Result<String, ApiError>),
    HideNotice(u64),
}

pub fn update(msg: Msg, model: &mut Model, settings: &Settings, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::EmailChanged(email) => {
            model.form.email = email;
        }

        Msg::ActivityChanged(activity) => {
            model.form.activity = activity;
        }

        Msg::Submitted => {
            orders.skip();
            if !model.form.is_complete() {
                return;
            }
            let url = api::signup_url(&settings.api_base, &model.form.activity, &model.form.email);
            orders.perform_cmd(signup_request(url));
        }

        Msg::Replied(result) => {
            if let Err(err) = &result {
                error!("Error signing up:", err);
            }
            let effect = model.form.apply_reply(&result);
            if effect.reload {
                orders.notify(ReloadRequested);
            }
            let generation = effect.generation;
            model.hide_notice = Some(orders.perform_cmd_with_handle(cmds::timeout(
                settings.notice_timeout_ms,
                move || Msg::HideNotice(generation),
            )));
        }

        Msg::HideNotice(generation) => {
            if model.form.hide(generation) {
                model.hide_notice = None;
            } else {
                orders.skip();
            }
        }
    }
}

async fn signup_request(url: String) -> Msg {
    let result = match request::send(Request::new(url).method(Method::Post)).await {
        Ok((status, body)) => api::read_reply(status, &body),
        Err(err) => Err(err),
    };
    Msg::Replied(result)
}

pub fn view(model: &Model, options: Vec<SelectOption>) -> Vec<Node<Msg>> {
    let form = &model.form;
    nodes![
        form![
            id!("signup-form"),
            ev(Ev::Submit, |event| {
                event.prevent_default();
                Msg::Submitted
            }),
            div![
                C!["form-group"],
                label![attrs! {At::For => "email"}, "Student Email:"],
                input![
                    id!("email"),
                    attrs! {
                        At::Type => "email",
                        At::Required => AtValue::None,
                        At::Placeholder => "your-email@mergington.edu",
                        At::Value => form.email,
                    },
                    input_ev(Ev::Input, Msg::EmailChanged),
                ],
            ],
            div![
                C!["form-group"],
                label![attrs! {At::For => "activity"}, "Select Activity:"],
                select![
                    id!("activity"),
                    attrs! {
                        At::Required => AtValue::None,
                        At::Value => form.activity,
                    },
                    input_ev(Ev::Change, Msg::ActivityChanged),
                    options.into_iter().map(|o| {
                        let selected = o.value == form.activity;
                        option![
                            attrs! {
                                At::Value => o.value,
                                At::Selected => selected.as_at_value(),
                            },
                            o.label
                        ]
                    }),
                ],
            ],
            button![attrs! {At::Type => "submit"}, "Sign Up"],
        ],
        notice_view(form),
    ]
}

fn notice_view(form: &SignupForm) -> Node<Msg> {
    match &form.notice {
        Some(notice) => div![
            id!("message"),
            C![notice.kind.class(), IF!(!form.notice_visible => "hidden")],
            notice.text.as_str(),
        ],
        None => div![id!("message"), C!["hidden"]],
    }
}
