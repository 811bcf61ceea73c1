/// Outcome of a newsletter form submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty field: nothing happens.
    Ignored,
    /// Accepted locally; there is no backend.
    Subscribed { email: String },
}

/// Footer newsletter form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Newsletter {
    email: String,
}

impl Newsletter {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    /// Any non-empty value subscribes and clears the field.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.email.is_empty() {
            return SubmitOutcome::Ignored;
        }
        let email = std::mem::take(&mut self.email);
        log::info!("[newsletter] subscription accepted");
        SubmitOutcome::Subscribed { email }
    }
}
