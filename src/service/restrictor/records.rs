//! In-memory member records of the restrictor.

use serenity::all::{Member, RoleId};
use std::collections::HashMap;
use tokio::sync::Mutex;

use crate::model::member::MemberRecord;

/// The parts of a guild member the restrictor looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSnapshot {
    pub user_id: u64,
    pub display_name: String,
    pub nickname: Option<String>,
    /// The member holds the restrict role.
    pub restricted: bool,
    /// The member holds a role other than the restrict role.
    pub has_other_roles: bool,
    /// The member holds no role except the restrict role.
    pub first_time_user: bool,
}

impl MemberSnapshot {
    /// Captures the member.
    ///
    /// # Arguments
    /// - `member` - The guild member; its roles don't include `@everyone`
    /// - `restrict_role` - The restrict role, `None` when the guild doesn't have it
    pub fn from_member(member: &Member, restrict_role: Option<RoleId>) -> Self {
        let restricted = restrict_role.is_some_and(|role| member.roles.contains(&role));
        let has_other_roles = member
            .roles
            .iter()
            .any(|role| Some(*role) != restrict_role);

        Self {
            user_id: member.user.id.get(),
            display_name: member.display_name().to_string(),
            nickname: member.nick.clone(),
            restricted,
            has_other_roles,
            first_time_user: !has_other_roles,
        }
    }

    /// The record of a member the restrictor didn't know yet.
    ///
    /// Members that aren't restricted or hold another role have been around
    /// before, so they are assumed to have accepted the Code of Conduct.
    pub fn initial_record(&self) -> MemberRecord {
        MemberRecord {
            nickname: self.nickname.clone(),
            coc: !self.restricted || self.has_other_roles,
            restricted: self.restricted,
        }
    }
}

/// A change of a member record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordChange {
    /// `None` when the record was created.
    pub old: Option<MemberRecord>,
    pub new: MemberRecord,
}

/// Member records by Discord user ID.
///
/// Every operation returns the changes it made, in order, so the caller can act
/// on them. Setting a record to its current value isn't a change.
#[derive(Debug, Default)]
pub struct MemberRecords {
    records: Mutex<HashMap<u64, MemberRecord>>,
}

impl MemberRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, user_id: u64) -> Option<MemberRecord> {
        self.records.lock().await.get(&user_id).cloned()
    }

    /// Creates the record of a member who joined, replacing any previous one.
    pub async fn join(&self, member: &MemberSnapshot) -> Vec<RecordChange> {
        let mut records = self.records.lock().await;
        let new = member.initial_record();
        let old = records.insert(member.user_id, new.clone());

        if old.as_ref() == Some(&new) {
            Vec::new()
        } else {
            vec![RecordChange { old, new }]
        }
    }

    /// Refreshes nickname and restriction from the member's profile.
    pub async fn update(&self, member: &MemberSnapshot) -> Vec<RecordChange> {
        self.modify(member, |record| {
            record.nickname = member.nickname.clone();
            record.restricted = member.restricted;
        })
        .await
    }

    /// Records that the member accepted the Code of Conduct.
    pub async fn accept(&self, member: &MemberSnapshot) -> Vec<RecordChange> {
        self.modify(member, |record| record.coc = true).await
    }

    /// Modifies the record of the member, creating it first if needed.
    async fn modify(
        &self,
        member: &MemberSnapshot,
        modify: impl FnOnce(&mut MemberRecord),
    ) -> Vec<RecordChange> {
        let mut records = self.records.lock().await;
        let mut changes = Vec::new();

        let current = match records.get(&member.user_id) {
            Some(record) => record.clone(),
            None => {
                let created = member.initial_record();
                records.insert(member.user_id, created.clone());
                changes.push(RecordChange {
                    old: None,
                    new: created.clone(),
                });
                created
            }
        };

        let mut updated = current.clone();
        modify(&mut updated);

        if updated != current {
            records.insert(member.user_id, updated.clone());
            changes.push(RecordChange {
                old: Some(current),
                new: updated,
            });
        }

        changes
    }
}
