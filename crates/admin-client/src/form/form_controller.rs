//! Add/edit form for one record type.
//!
//! `init` decides the mode from the route parameter, `set_field` binds form
//! input into the draft and `submit` sends the normalized draft to the
//! gateway. State changes are published on a watch channel.

use crate::{
    ClientError, ClientResult, FormMode, FormState, Gateway, Navigator, Notifier, Resource,
    Route, SubmitOutcome,
};

use admin_core::{Draft, RecordId, ValidationErrors};

use std::str::FromStr;

use log::debug;
use tokio::sync::watch;

pub struct FormController<R: Resource> {
    gateway: Gateway<R>,
    navigator: Navigator,
    notifier: Notifier,
    mode: FormMode,
    draft: R::Draft,
    state_tx: watch::Sender<FormState>,
    last_error: Option<String>,
}

impl<R: Resource> FormController<R> {
    pub fn new(gateway: Gateway<R>, navigator: Navigator, notifier: Notifier) -> Self {
        let (state_tx, _) = watch::channel(FormState::Initial);
        Self {
            gateway,
            navigator,
            notifier,
            mode: FormMode::Create,
            draft: Default::default(),
            state_tx,
            last_error: None,
        }
    }

    /// Enter create mode when `route_param` is absent, otherwise load the
    /// record it names and enter edit mode.
    ///
    /// A bad parameter or failed fetch reports the error and navigates back
    /// to the list.
    pub async fn init(&mut self, route_param: Option<&str>) -> ClientResult<()> {
        let param = route_param.map(str::trim).filter(|p| !p.is_empty());

        let Some(param) = param else {
            self.mode = FormMode::Create;
            self.draft = Default::default();
            self.set_state(FormState::Editing);
            return Ok(());
        };

        let id = match Self::parse_route_id(param) {
            Ok(id) => id,
            Err(e) => return Err(self.fail_load(e)),
        };

        self.set_state(FormState::LoadingExisting);
        match self.gateway.get(id).await {
            Ok(record) => {
                self.draft = record.to_draft();
                self.mode = FormMode::Edit(id);
                self.set_state(FormState::Editing);
                Ok(())
            }
            Err(e) => Err(self.fail_load(e)),
        }
    }

    #[track_caller]
    fn parse_route_id(param: &str) -> ClientResult<RecordId> {
        let id = RecordId::from_str(param)?;
        if id.is_placeholder() {
            return Err(ClientError::validation(format!(
                "Cannot edit {} with temporary ID",
                R::KIND.label().to_lowercase()
            )));
        }
        Ok(id)
    }

    fn fail_load(&mut self, err: ClientError) -> ClientError {
        let message = err.user_message();
        self.last_error = Some(message.clone());
        self.notifier.failure(
            &format!("Error loading {} data.", R::KIND.label().to_lowercase()),
            &err,
        );
        self.set_state(FormState::Error(message));
        self.navigator.navigate(Route::List(R::KIND));
        err
    }

    pub fn draft(&self) -> &R::Draft {
        &self.draft
    }

    /// Update one field from its form value.
    pub fn set_field(&mut self, field: &str, value: &str) -> ClientResult<()> {
        self.draft.set_field(field, value)?;
        Ok(())
    }

    pub fn validate(&self) -> ValidationErrors {
        self.draft.validate()
    }

    /// Send the draft.
    ///
    /// Only a valid draft in `Editing` is sent. A backend failure is reported
    /// as a notice and leaves the form editable.
    pub async fn submit(&mut self) -> ClientResult<SubmitOutcome> {
        let state = self.state();
        if state != FormState::Editing {
            debug!("Ignoring submit in state {:?}", state);
            return Ok(SubmitOutcome::Ignored);
        }

        let errors = self.validate();
        if !errors.is_empty() {
            return Ok(SubmitOutcome::Invalid(errors));
        }

        self.set_state(FormState::Submitting);
        let label = R::KIND.label();
        let (result, verb) = match self.mode {
            FormMode::Create => (self.gateway.create(&self.draft).await.map(|_| ()), "created"),
            FormMode::Edit(id) => (
                self.gateway.update(id, &self.draft).await.map(|_| ()),
                "updated",
            ),
        };

        match result {
            Ok(()) => {
                self.last_error = None;
                self.set_state(FormState::Submitted);
                self.notifier.success(format!("{label} {verb} successfully!"));
                self.navigator.navigate(Route::List(R::KIND));
                Ok(SubmitOutcome::Saved)
            }
            Err(e) => {
                let action = if self.mode.is_edit() { "updating" } else { "creating" };
                let message = e.user_message();
                self.last_error = Some(message.clone());
                self.set_state(FormState::Error(message));
                self.notifier
                    .failure(&format!("Error {} {}.", action, label.to_lowercase()), &e);
                self.set_state(FormState::Editing);
                Err(e)
            }
        }
    }

    /// Leave the form without saving.
    pub fn cancel(&self) {
        self.navigator.navigate(Route::List(R::KIND));
    }

    pub fn state(&self) -> FormState {
        self.state_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state_tx.subscribe()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            *self.state_tx.borrow(),
            FormState::LoadingExisting | FormState::Submitting
        )
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn set_state(&self, state: FormState) {
        debug!("{} form: {:?}", R::KIND.label(), state);
        self.state_tx.send_replace(state);
    }
}
