//! Staged inserts and updates for a single upload request.
//!
//! Nothing touches the database while rows are being staged; the whole
//! batch is applied by [`crate::UserRepository::commit`] in one
//! transaction. This keeps the atomicity boundary explicit instead of
//! hiding it behind tracked-entity state.

use uinfo_core::User;

/// Pending changes for one CSV upload: records to insert and existing
/// records whose fields are to be overwritten.
#[derive(Debug, Default)]
pub struct StagedUserChanges {
    inserts: Vec<User>,
    updates: Vec<User>,
}

impl StagedUserChanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a new record for insertion.
    ///
    /// If a record with the same identifier was already staged (the file
    /// mentioned the identifier twice), the later line wins. This keeps
    /// the at-most-one-row-per-identifier invariant inside a single file.
    pub fn stage_insert(&mut self, user: User) {
        Self::replace_or_push(&mut self.inserts, user);
    }

    /// Stage a full-field overwrite of an existing record.
    /// Later lines for the same identifier replace earlier ones.
    pub fn stage_update(&mut self, user: User) {
        Self::replace_or_push(&mut self.updates, user);
    }

    fn replace_or_push(staged: &mut Vec<User>, user: User) {
        match staged.iter_mut().find(|u| u.user_id == user.user_id) {
            Some(existing) => *existing = user,
            None => staged.push(user),
        }
    }

    pub fn inserts(&self) -> &[User] {
        &self.inserts
    }

    pub fn updates(&self) -> &[User] {
        &self.updates
    }

    pub fn insert_count(&self) -> usize {
        self.inserts.len()
    }

    pub fn update_count(&self) -> usize {
        self.updates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inserts.is_empty() && self.updates.is_empty()
    }
}
