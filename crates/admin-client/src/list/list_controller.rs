//! Table state for one record collection: the fetched snapshot plus the
//! filter, sort and page applied to it.

use crate::{
    ClientError, ClientResult, ConfirmDialog, ConfirmPrompt, Gateway, Navigator, Notifier,
    Resource, Route, SortDirection, SortState, assign_placeholder_ids,
};

use admin_core::RecordId;

use log::{debug, info, warn};

/// What [`ListController::delete`] ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The operator declined the confirmation
    Cancelled,
    /// A placeholder row was dropped without contacting the backend
    RemovedLocally,
    /// The backend deleted the record and the list was reloaded
    Deleted,
}

pub struct ListController<R: Resource> {
    gateway: Gateway<R>,
    navigator: Navigator,
    notifier: Notifier,
    entries: Vec<R>,
    filter: String,
    sort: Option<SortState>,
    page_index: usize,
    page_size: usize,
    loading: bool,
}

impl<R: Resource> ListController<R> {
    pub fn new(
        gateway: Gateway<R>,
        navigator: Navigator,
        notifier: Notifier,
        page_size: usize,
    ) -> Self {
        Self {
            gateway,
            navigator,
            notifier,
            entries: Vec::new(),
            filter: String::new(),
            sort: None,
            page_index: 0,
            page_size: page_size.max(1),
            loading: false,
        }
    }

    /// Fetch the collection and replace the current snapshot.
    pub async fn load(&mut self) -> ClientResult<()> {
        self.loading = true;
        let result = self.gateway.list().await;
        self.loading = false;

        match result {
            Ok(records) => {
                self.replace_records(records);
                Ok(())
            }
            Err(e) => {
                self.notifier
                    .failure(&format!("Error loading {}.", R::KIND), &e);
                Err(e)
            }
        }
    }

    /// Swap in a new snapshot, synthesizing ids for rows that have none.
    pub fn replace_records(&mut self, mut records: Vec<R>) {
        let assigned = assign_placeholder_ids(&mut records);
        if assigned > 0 {
            debug!("Assigned {} placeholder ids to {}", assigned, R::KIND);
        }
        self.entries = records;
        self.clamp_page();
    }

    /// The full snapshot, unfiltered and unsorted.
    pub fn records(&self) -> &[R] {
        &self.entries
    }

    pub fn get(&self, id: RecordId) -> Option<&R> {
        self.entries.iter().find(|r| r.id() == Some(id))
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Show only rows where some displayed column contains `text`,
    /// case-insensitively. An empty filter shows everything.
    pub fn apply_filter(&mut self, text: &str) {
        self.filter = text.trim().to_lowercase();
        self.page_index = 0;
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    pub fn sort_by(&mut self, column: &str, direction: SortDirection) -> ClientResult<()> {
        let Some(column) = R::COLUMNS.iter().copied().find(|c| *c == column) else {
            return Err(ClientError::validation(format!(
                "Unknown {} column '{}'",
                R::KIND.label().to_lowercase(),
                column
            )));
        };
        self.sort = Some(SortState { column, direction });
        Ok(())
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Filtered and sorted rows, across all pages.
    pub fn visible(&self) -> Vec<&R> {
        let mut rows: Vec<&R> = self
            .entries
            .iter()
            .filter(|r| self.matches(r))
            .collect();

        if let Some(sort) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = match (a.column(sort.column), b.column(sort.column)) {
                    (Some(a), Some(b)) => a.compare(&b),
                    _ => std::cmp::Ordering::Equal,
                };
                match sort.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        rows
    }

    fn matches(&self, record: &R) -> bool {
        if self.filter.is_empty() {
            return true;
        }
        R::COLUMNS.iter().any(|column| {
            record
                .column(column)
                .is_some_and(|value| value.search_text().contains(&self.filter))
        })
    }

    /// Rows of the current page.
    pub fn page(&self) -> Vec<&R> {
        let index = self.page_index.min(self.page_count() - 1);
        self.visible()
            .into_iter()
            .skip(index * self.page_size)
            .take(self.page_size)
            .collect()
    }

    /// Number of pages of visible rows; never zero.
    pub fn page_count(&self) -> usize {
        let visible = self.visible().len();
        visible.div_ceil(self.page_size).max(1)
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Jump to page `index`, clamped to the last page.
    pub fn set_page(&mut self, index: usize) {
        self.page_index = index;
        self.clamp_page();
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page_index = 0;
    }

    fn clamp_page(&mut self) {
        self.page_index = self.page_index.min(self.page_count() - 1);
    }

    fn position(&self, id: RecordId) -> ClientResult<usize> {
        self.entries
            .iter()
            .position(|r| r.id() == Some(id))
            .ok_or_else(|| {
                ClientError::validation(format!("{} {} is not in the list", R::KIND.label(), id))
            })
    }

    /// Open the edit view for `id`.
    ///
    /// A placeholder row is first created on the backend so the edit view
    /// works against a real id. Returns the id that was navigated to.
    pub async fn edit(&mut self, id: RecordId) -> ClientResult<RecordId> {
        let position = self.position(id)?;

        let target = if id.is_placeholder() {
            self.persist_placeholder(position).await?
        } else {
            id
        };

        self.navigator.navigate(Route::Edit(R::KIND, target));
        Ok(target)
    }

    async fn persist_placeholder(&mut self, position: usize) -> ClientResult<RecordId> {
        let label = R::KIND.label().to_lowercase();
        let draft = self.entries[position].to_draft();

        let created = match self.gateway.create(&draft).await {
            Ok(created) => created.and_then(|r| r.id()).ok_or_else(|| {
                ClientError::invalid_response(format!(
                    "Server did not return an ID for the new {label}"
                ))
            }),
            Err(e) => Err(e),
        };

        match created {
            Ok(new_id) => {
                info!("Replaced placeholder {} {}", label, new_id);
                self.entries[position].set_id(new_id);
                Ok(new_id)
            }
            Err(e) => {
                self.notifier
                    .failure(&format!("Error creating {label}."), &e);
                Err(e)
            }
        }
    }

    /// Delete `id` after the operator confirms.
    pub async fn delete(
        &mut self,
        id: RecordId,
        confirm: &dyn ConfirmDialog,
    ) -> ClientResult<DeleteOutcome> {
        let position = self.position(id)?;
        let label = R::KIND.label();

        let prompt = ConfirmPrompt::delete(label, &self.entries[position].display_name());
        if !confirm.confirm(&prompt).await {
            debug!("Delete of {} {} cancelled", label, id);
            return Ok(DeleteOutcome::Cancelled);
        }

        if id.is_placeholder() {
            self.entries.remove(position);
            self.clamp_page();
            self.notifier.success(format!("{label} removed from list"));
            return Ok(DeleteOutcome::RemovedLocally);
        }

        if let Err(e) = self.gateway.delete(id).await {
            self.notifier
                .failure(&format!("Error deleting {}.", label.to_lowercase()), &e);
            return Err(e);
        }

        self.notifier.success(format!("{label} deleted successfully!"));
        if let Err(e) = self.load().await {
            warn!("Reload after deleting {} {} failed: {}", label, id, e);
        }
        Ok(DeleteOutcome::Deleted)
    }

    pub fn navigate_to_add(&self) {
        self.navigator.navigate(Route::Add(R::KIND));
    }
}
