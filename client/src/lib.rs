use seed::{prelude::*, *};
use shared::{config, Settings};

mod activities;
mod request;
mod signup;

// ------ ------
//     Init
// ------ ------

fn init(_: Url, orders: &mut impl Orders<Msg>) -> Model {
    let settings = settings_from_mount();
    let model = Model {
        activities: activities::Model::new(&settings),
        signup: signup::Model::default(),
        settings,
    };
    orders
        .subscribe(|_: activities::ReloadRequested| Msg::Activities(activities::Msg::Load))
        .proxy(Msg::Activities)
        .send_msg(activities::Msg::Load);
    model
}

/// Optional `data-api-base` and `data-unregister` on the mount element.
fn settings_from_mount() -> Settings {
    let mount = document().get_element_by_id(config::MOUNT_ID);
    let attr = |name: &str| mount.as_ref().and_then(|el| el.get_attribute(name));
    Settings::default().with_overrides(attr("data-api-base"), attr("data-unregister"))
}

// ------ ------
//     Model
// ------ ------

struct Model {
    settings: Settings,
    activities: activities::Model,
    signup: signup::Model,
}

// ------ ------
//    Update
// ------ ------

enum Msg {
    Activities(activities::Msg),
    Signup(signup::Msg),
}

fn update(msg: Msg, model: &mut Model, orders: &mut impl Orders<Msg>) {
    match msg {
        Msg::Activities(msg) => {
            activities::update(
                msg,
                &mut model.activities,
                &model.settings,
                &mut orders.proxy(Msg::Activities),
            );
        }
        Msg::Signup(msg) => {
            signup::update(
                msg,
                &mut model.signup,
                &model.settings,
                &mut orders.proxy(Msg::Signup),
            );
        }
    }
}

// ------ ------
//     View
// ------ ------

fn view(model: &Model) -> impl IntoNodes<Msg> {
    div![
        C!["container"],
        section![
            id!("activities-container"),
            h3!["Available Activities"],
            activities::view(&model.activities).map_msg(Msg::Activities),
        ],
        section![
            id!("signup-container"),
            h3!["Sign Up for an Activity"],
            signup::view(&model.signup, model.activities.options()).map_msg(Msg::Signup),
        ],
    ]
}

// ------ ------
//     Start
// ------ ------

#[wasm_bindgen(start)]
pub fn start() {
    App::start(config::MOUNT_ID, init, update, view);
}
