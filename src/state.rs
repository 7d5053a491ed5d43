use std::rc::Rc;

use serde::Serialize;
use yew::prelude::*;

/// How long the hero badge bounces after mount.
pub const BOUNCE_STOP_MS: u32 = 3_000;
/// How long the "message sent" confirmation stays up.
pub const SUBMITTED_RESET_MS: u32 = 5_000;
/// Background layer moves at half the scroll distance.
pub const PARALLAX_FACTOR: f64 = 0.5;

#[derive(Clone, Copy, PartialEq, Default)]
pub struct CursorPosition {
    pub x: i32,
    pub y: i32,
}

/// Landmark ids that have entered the viewport at least once.
///
/// Append-only for the lifetime of the page: a section that scrolls back
/// out of view keeps its entrance animation.
#[derive(Clone, PartialEq, Default)]
pub struct VisibleSections(Vec<String>);

impl VisibleSections {
    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|s| s == id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Reducible for VisibleSections {
    type Action = String;

    fn reduce(self: Rc<Self>, id: String) -> Rc<Self> {
        if self.contains(&id) {
            // Already seen; returning the same Rc skips the re-render.
            self
        } else {
            let mut ids = self.0.clone();
            ids.push(id);
            Rc::new(VisibleSections(ids))
        }
    }
}

/// Mobile drawer state. Any navigation action collapses the drawer,
/// whether or not the target landmark existed.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct MenuFlag {
    open: bool,
}

impl MenuFlag {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }
}

/// In-progress contact form contents. Serialized as-is for the POST body.
#[derive(Clone, PartialEq, Default, Serialize)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitted,
}

/// Contact form controller state: the draft plus where the last
/// submission got to.
#[derive(Clone, PartialEq, Default)]
pub struct ContactForm {
    pub draft: ContactDraft,
    pub submission: SubmissionState,
}

pub enum ContactAction {
    SetName(String),
    SetEmail(String),
    SetMessage(String),
    /// Backend accepted the message (2xx).
    Accepted,
    /// Transport error or non-2xx status. Draft stays as typed so the
    /// user can resubmit.
    Failed,
    /// Confirmation timer lapsed; back to the editable form.
    Expired,
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: ContactAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::SetName(name) => next.draft.name = name,
            ContactAction::SetEmail(email) => next.draft.email = email,
            ContactAction::SetMessage(message) => next.draft.message = message,
            ContactAction::Accepted => {
                next.submission = SubmissionState::Submitted;
                next.draft.clear();
            }
            ContactAction::Failed => {}
            ContactAction::Expired => next.submission = SubmissionState::Idle,
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(sections: Rc<VisibleSections>, id: &str) -> Rc<VisibleSections> {
        sections.reduce(id.to_string())
    }

    #[test]
    fn visible_sections_grow_monotonically_without_duplicates() {
        let mut sections = Rc::new(VisibleSections::default());
        for id in ["home", "services", "home", "contact", "services"] {
            let before = sections.len();
            sections = seen(sections, id);
            assert!(sections.len() >= before);
        }
        assert_eq!(sections.len(), 3);
        for id in ["home", "services", "contact"] {
            assert!(sections.contains(id));
        }
    }

    #[test]
    fn repeated_intersection_returns_the_same_allocation() {
        let sections = seen(Rc::new(VisibleSections::default()), "home");
        let again = seen(sections.clone(), "home");
        assert!(Rc::ptr_eq(&sections, &again));
    }

    #[test]
    fn sections_are_never_removed() {
        let mut sections = Rc::new(VisibleSections::default());
        sections = seen(sections, "home");
        // A section leaving the viewport produces no action at all; the
        // only defined transition keeps it present.
        sections = seen(sections, "home");
        assert!(sections.contains("home"));
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn menu_double_toggle_is_identity() {
        let flag = MenuFlag::default();
        assert!(!flag.is_open());
        assert!(flag.toggled().is_open());
        assert_eq!(flag.toggled().toggled().is_open(), flag.is_open());
    }

    #[test]
    fn menu_closes_from_either_state() {
        assert!(!MenuFlag::default().closed().is_open());
        assert!(!MenuFlag::default().toggled().closed().is_open());
    }

    fn typed_form() -> Rc<ContactForm> {
        let form = Rc::new(ContactForm::default());
        let form = form.reduce(ContactAction::SetName("Jane".into()));
        let form = form.reduce(ContactAction::SetEmail("jane@x.com".into()));
        form.reduce(ContactAction::SetMessage("Hello".into()))
    }

    #[test]
    fn edits_touch_only_their_field() {
        let form = typed_form();
        assert_eq!(form.draft.name, "Jane");
        assert_eq!(form.draft.email, "jane@x.com");
        assert_eq!(form.draft.message, "Hello");
        assert_eq!(form.submission, SubmissionState::Idle);
    }

    #[test]
    fn accepted_submission_confirms_and_clears_the_draft() {
        let form = typed_form().reduce(ContactAction::Accepted);
        assert_eq!(form.submission, SubmissionState::Submitted);
        assert_eq!(form.draft.name, "");
        assert_eq!(form.draft.email, "");
        assert_eq!(form.draft.message, "");
    }

    #[test]
    fn failed_submission_preserves_the_draft() {
        let form = typed_form().reduce(ContactAction::Failed);
        assert_eq!(form.submission, SubmissionState::Idle);
        assert_eq!(form.draft.name, "Jane");
        assert_eq!(form.draft.email, "jane@x.com");
        assert_eq!(form.draft.message, "Hello");
    }

    #[test]
    fn confirmation_expires_back_to_idle() {
        let form = typed_form()
            .reduce(ContactAction::Accepted)
            .reduce(ContactAction::Expired);
        assert_eq!(form.submission, SubmissionState::Idle);
        assert_eq!(form.draft.name, "");
    }

    #[test]
    fn double_submit_is_a_harmless_reclear() {
        // There is no reentrancy lock; a second accepted response just
        // re-clears an already-empty draft.
        let form = typed_form()
            .reduce(ContactAction::Accepted)
            .reduce(ContactAction::Accepted);
        assert_eq!(form.submission, SubmissionState::Submitted);
        assert_eq!(form.draft.message, "");
    }

    #[test]
    fn draft_serializes_with_the_wire_keys() {
        let form = typed_form();
        let value = serde_json::to_value(&form.draft).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["name"], "Jane");
        assert_eq!(object["email"], "jane@x.com");
        assert_eq!(object["message"], "Hello");
    }
}
