//! Wires configuration, the session and the controllers together and runs
//! one command against them.

use crate::commands::{Commands, ListArgs};
use crate::course_commands::CourseCommands;
use crate::professor_commands::ProfessorCommands;
use crate::prompt::TerminalConfirm;
use crate::student_commands::StudentCommands;
use crate::{Cli, CliError, CliErrorResult};

use admin_client::{
    AutoConfirm, Client, ClientError, ConfirmDialog, DeleteOutcome, FileStorage, FormController,
    Gateway, ListController, Navigator, Notifier, Resource, Route, RouteGuard, SessionStorage,
    SessionStore, SortDirection, SubmitOutcome,
};
use admin_config::Config;
use admin_core::{Course, Credentials, Professor, RecordId, Student};

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use serde::Serialize;
use serde_json::{Value, json};

/// A resource subcommand with the resource type erased.
pub(crate) enum ResourceAction<'a> {
    List(&'a ListArgs),
    Get(RecordId),
    Add(Vec<(&'static str, String)>),
    Edit(RecordId, Vec<(&'static str, String)>),
    Delete(RecordId),
}

impl StudentCommands {
    pub(crate) fn action(&self) -> ResourceAction<'_> {
        match self {
            StudentCommands::List { args } => ResourceAction::List(args),
            StudentCommands::Get { id } => ResourceAction::Get(*id),
            StudentCommands::Add { .. } => ResourceAction::Add(self.fields()),
            StudentCommands::Edit { id, .. } => ResourceAction::Edit(*id, self.fields()),
            StudentCommands::Delete { id } => ResourceAction::Delete(*id),
        }
    }
}

impl ProfessorCommands {
    pub(crate) fn action(&self) -> ResourceAction<'_> {
        match self {
            ProfessorCommands::List { args } => ResourceAction::List(args),
            ProfessorCommands::Get { id } => ResourceAction::Get(*id),
            ProfessorCommands::Add { .. } => ResourceAction::Add(self.fields()),
            ProfessorCommands::Edit { id, .. } => ResourceAction::Edit(*id, self.fields()),
            ProfessorCommands::Delete { id } => ResourceAction::Delete(*id),
        }
    }
}

impl CourseCommands {
    pub(crate) fn action(&self) -> ResourceAction<'_> {
        match self {
            CourseCommands::List { args } => ResourceAction::List(args),
            CourseCommands::Get { id } => ResourceAction::Get(*id),
            CourseCommands::Add { .. } => ResourceAction::Add(self.fields()),
            CourseCommands::Edit { id, .. } => ResourceAction::Edit(*id, self.fields()),
            CourseCommands::Delete { id } => ResourceAction::Delete(*id),
        }
    }
}

pub struct App {
    config: Config,
    client: Client,
    navigator: Navigator,
    notifier: Notifier,
    session: SessionStore,
    guard: RouteGuard,
}

impl App {
    /// Build the app with the session file for the configured backend
    /// origin, then restore any stored session.
    pub fn new(config: Config) -> CliErrorResult<Self> {
        let client = Client::with_timeout(
            &config.api.base_url,
            Duration::from_secs(config.api.timeout_secs),
        )?;
        let storage = FileStorage::for_origin(&config.session_dir()?, config.api.origin());
        debug!("Session file: {}", storage.path().display());
        Ok(Self::with_storage(config, client, Arc::new(storage)))
    }

    pub fn with_storage(config: Config, client: Client, storage: Arc<dyn SessionStorage>) -> Self {
        let navigator = Navigator::default();
        let notifier = Notifier::new(config.notice.clone());
        let session = SessionStore::new(client.clone(), storage, navigator.clone());
        session.restore_session();
        let guard = RouteGuard::new(session.authenticated());

        Self {
            config,
            client,
            navigator,
            notifier,
            session,
            guard,
        }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub async fn run(&self, cli: &Cli) -> CliErrorResult<Value> {
        match &cli.command {
            Commands::Login { email, password } => {
                let user = self
                    .session
                    .login(&Credentials::new(email.as_str(), password.as_str()))
                    .await?;
                Ok(json!({ "message": "Login successful", "user": user }))
            }
            Commands::Logout => {
                self.session.logout();
                Ok(json!({ "message": "Logged out" }))
            }
            Commands::Whoami => Ok(json!({
                "authenticated": self.session.is_authenticated(),
                "user": self.session.user(),
            })),
            Commands::ValidateToken { token } => {
                let token = token
                    .clone()
                    .or_else(|| self.session.token())
                    .ok_or_else(CliError::not_authenticated)?;
                let valid = self.session.validate_token(&token).await;
                Ok(json!({ "valid": valid }))
            }
            Commands::Student { action } => {
                self.resource::<Student>(action.action(), cli.yes).await
            }
            Commands::Professor { action } => {
                self.resource::<Professor>(action.action(), cli.yes).await
            }
            Commands::Course { action } => self.resource::<Course>(action.action(), cli.yes).await,
        }
    }

    async fn resource<R: Resource>(
        &self,
        action: ResourceAction<'_>,
        yes: bool,
    ) -> CliErrorResult<Value> {
        self.require(Route::List(R::KIND))?;

        match action {
            ResourceAction::List(args) => self.list::<R>(args).await,
            ResourceAction::Get(id) => {
                let record = self.gateway::<R>().get(id).await?;
                to_json(&record)
            }
            ResourceAction::Add(fields) => {
                self.submit_form::<R>(None, &fields).await?;
                Ok(json!({ "saved": true }))
            }
            ResourceAction::Edit(id, fields) => {
                let id = if id.is_placeholder() {
                    let mut list = self.list_controller::<R>(self.config.list.page_size);
                    list.load().await?;
                    list.edit(id).await?
                } else {
                    id
                };
                self.submit_form::<R>(Some(id), &fields).await?;
                Ok(json!({ "saved": true, "id": id }))
            }
            ResourceAction::Delete(id) => {
                let mut list = self.list_controller::<R>(self.config.list.page_size);
                list.load().await?;

                let confirm: Box<dyn ConfirmDialog> = if yes {
                    Box::new(AutoConfirm(true))
                } else {
                    Box::new(TerminalConfirm)
                };
                let outcome = list.delete(id, confirm.as_ref()).await?;
                let outcome = match outcome {
                    DeleteOutcome::Cancelled => "cancelled",
                    DeleteOutcome::RemovedLocally => "removed_locally",
                    DeleteOutcome::Deleted => "deleted",
                };
                Ok(json!({ "id": id, "outcome": outcome }))
            }
        }
    }

    async fn list<R: Resource>(&self, args: &ListArgs) -> CliErrorResult<Value> {
        let page_size = args.page_size.unwrap_or(self.config.list.page_size);
        let mut list = self.list_controller::<R>(page_size);
        list.load().await?;

        if let Some(filter) = &args.filter {
            list.apply_filter(filter);
        }
        if let Some(column) = &args.sort {
            let direction = if args.desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            list.sort_by(column, direction)?;
        }
        list.set_page(args.page.saturating_sub(1));

        Ok(json!({
            "kind": R::KIND.as_str(),
            "total": list.visible().len(),
            "page": list.page_index() + 1,
            "page_count": list.page_count(),
            "rows": to_json(&list.page())?,
        }))
    }

    async fn submit_form<R: Resource>(
        &self,
        id: Option<RecordId>,
        fields: &[(&'static str, String)],
    ) -> CliErrorResult<()> {
        let mut form = FormController::<R>::new(
            self.gateway::<R>(),
            self.navigator.clone(),
            self.notifier.clone(),
        );

        let param = id.map(|id| id.to_string());
        form.init(param.as_deref()).await?;

        for (field, value) in fields {
            form.set_field(field, value)?;
        }

        match form.submit().await? {
            SubmitOutcome::Saved => Ok(()),
            SubmitOutcome::Invalid(errors) => Err(CliError::invalid(errors.to_string())),
            SubmitOutcome::Ignored => Err(CliError::invalid(format!(
                "{} form is not ready (state: {:?})",
                R::KIND.label(),
                form.state()
            ))),
        }
    }

    fn gateway<R: Resource>(&self) -> Gateway<R> {
        Gateway::new(self.client.clone())
    }

    fn list_controller<R: Resource>(&self, page_size: usize) -> ListController<R> {
        ListController::new(
            self.gateway::<R>(),
            self.navigator.clone(),
            self.notifier.clone(),
            page_size,
        )
    }

    /// Fail unless the guard lets the session reach `route`.
    fn require(&self, route: Route) -> CliErrorResult<()> {
        if self.guard.resolve(route) == Route::Login {
            return Err(CliError::not_authenticated());
        }
        self.navigator.navigate(route);
        Ok(())
    }
}

fn to_json<T: Serialize>(value: &T) -> CliErrorResult<Value> {
    serde_json::to_value(value).map_err(|e| CliError::from(ClientError::from(e)))
}
