pub mod api;
pub mod config;
pub mod form;
pub mod model;
pub mod notice;
pub mod render;
pub mod unregister;

pub use api::ApiError;
pub use config::Settings;
pub use form::SignupForm;
pub use model::{Activity, Directory};
pub use notice::{Notice, NoticeKind};
pub use unregister::{Removal, Unregister};
