//! Member record tracked by the restrictor.

use crate::util::parse::DISPLAY_NAME_PREFIX;

/// What the bot knows about a guild member's compliance with the server rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRecord {
    /// Guild nickname, `None` when the member hasn't set one.
    pub nickname: Option<String>,
    /// Whether the member accepted the Code of Conduct.
    pub coc: bool,
    /// Whether the member currently holds the restrict role.
    pub restricted: bool,
}

impl Default for MemberRecord {
    fn default() -> Self {
        Self {
            nickname: None,
            coc: false,
            restricted: true,
        }
    }
}

impl MemberRecord {
    /// The member accepted the Code of Conduct and has a correct nickname.
    pub fn compliant(&self) -> bool {
        self.coc && self.correct_nickname()
    }

    /// Neither a nickname nor a Code of Conduct acceptance is known yet.
    pub fn new_user(&self) -> bool {
        !self.coc && self.nickname.is_none()
    }

    /// The nickname follows the `/u/<username>` convention.
    pub fn correct_nickname(&self) -> bool {
        self.nickname
            .as_deref()
            .is_some_and(|nick| nick.starts_with(DISPLAY_NAME_PREFIX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(nickname: Option<&str>, coc: bool) -> MemberRecord {
        MemberRecord {
            nickname: nickname.map(str::to_string),
            coc,
            restricted: true,
        }
    }

    #[test]
    fn compliance_needs_coc_and_nickname() {
        assert!(record(Some("/u/user"), true).compliant());
        assert!(!record(Some("/u/user"), false).compliant());
        assert!(!record(Some("u/user"), true).compliant());
        assert!(!record(None, true).compliant());
    }

    #[test]
    fn new_user_has_nothing_set() {
        assert!(MemberRecord::default().new_user());
        assert!(!record(Some("nick"), false).new_user());
        assert!(!record(None, true).new_user());
    }
}
