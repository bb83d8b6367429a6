use crate::{api::ApiError, notice, render::UNREGISTER_ACTION};

/// A participant the user asked to remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub activity: String,
    pub email: String,
}

impl Removal {
    /// Reads a removal from the `data-*` attributes of a clicked element.
    /// `attr` gets the attribute name, e.g. `data-email`.
    pub fn from_data<F>(attr: F) -> Option<Removal>
    where
        F: Fn(&str) -> Option<String>,
    {
        if attr("data-action")? != UNREGISTER_ACTION {
            return None;
        }
        Some(Removal {
            activity: attr("data-activity")?,
            email: attr("data-email")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Reload,
    Alert(String),
}

/// Per-participant removal state: idle, or pending until the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unregister {
    enabled: bool,
    pending: Vec<Removal>,
}

impl Default for Unregister {
    fn default() -> Self {
        Unregister::new(true)
    }
}

impl Unregister {
    pub fn new(enabled: bool) -> Self {
        Unregister {
            enabled,
            pending: vec![],
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Marks the removal pending. `false` when the capability is off or the
    /// row is already pending; nothing should be sent then.
    pub fn begin(&mut self, removal: &Removal) -> bool {
        if !self.enabled || self.is_pending(&removal.activity, &removal.email) {
            return false;
        }
        self.pending.push(removal.clone());
        true
    }

    pub fn is_pending(&self, activity: &str, email: &str) -> bool {
        self.pending
            .iter()
            .any(|r| r.activity == activity && r.email == email)
    }

    pub fn finish(&mut self, removal: &Removal, result: &Result<String, ApiError>) -> Outcome {
        self.pending.retain(|r| r != removal);
        match result {
            Ok(_) => Outcome::Reload,
            Err(err) => Outcome::Alert(notice::unregister_alert(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::read_reply;
    use std::collections::HashMap;

    fn removal(email: &str) -> Removal {
        Removal {
            activity: "Chess Club".to_string(),
            email: email.to_string(),
        }
    }

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn reads_removal_from_button_data() {
        let attr = lookup(&[
            ("data-action", "unregister"),
            ("data-activity", "Chess Club"),
            ("data-email", "a@x.com"),
        ]);
        assert_eq!(Removal::from_data(attr), Some(removal("a@x.com")));
    }

    #[test]
    fn ignores_other_elements() {
        assert_eq!(Removal::from_data(lookup(&[])), None);
        let attr = lookup(&[
            ("data-action", "edit"),
            ("data-activity", "Chess Club"),
            ("data-email", "a@x.com"),
        ]);
        assert_eq!(Removal::from_data(attr), None);
        let attr = lookup(&[("data-action", "unregister"), ("data-email", "a@x.com")]);
        assert_eq!(Removal::from_data(attr), None);
    }

    #[test]
    fn success_reloads_and_clears_pending() {
        let mut state = Unregister::default();
        let a = removal("a@x.com");
        assert!(state.begin(&a));
        assert!(state.is_pending("Chess Club", "a@x.com"));
        assert!(!state.is_pending("Chess Club", "b@x.com"));

        let outcome = state.finish(&a, &read_reply(200, r#"{"message":"Unregistered a@x.com"}"#));
        assert_eq!(outcome, Outcome::Reload);
        assert!(!state.is_pending("Chess Club", "a@x.com"));
    }

    #[test]
    fn failure_alerts_and_returns_to_idle() {
        let mut state = Unregister::default();
        let a = removal("a@x.com");
        state.begin(&a);

        let outcome = state.finish(&a, &read_reply(404, r#"{"detail":"Participant not found"}"#));
        assert_eq!(outcome, Outcome::Alert("Participant not found".to_string()));
        assert!(!state.is_pending("Chess Club", "a@x.com"));

        state.begin(&a);
        let outcome = state.finish(&a, &Err(ApiError::Transport("offline".to_string())));
        assert_eq!(outcome, Outcome::Alert(notice::UNREGISTER_FAILED.to_string()));
    }

    #[test]
    fn same_row_is_not_sent_twice_while_pending() {
        let mut state = Unregister::default();
        let a = removal("a@x.com");
        let b = removal("b@x.com");
        assert!(state.begin(&a));
        assert!(!state.begin(&a));
        assert!(state.begin(&b));

        state.finish(&a, &read_reply(200, "{}"));
        assert!(state.is_pending("Chess Club", "b@x.com"));
    }

    #[test]
    fn disabled_capability_never_goes_pending() {
        let mut state = Unregister::new(false);
        assert!(!state.is_enabled());
        assert!(!state.begin(&removal("a@x.com")));
        assert!(!state.is_pending("Chess Club", "a@x.com"));
        assert!(Unregister::default().is_enabled());
    }
}
