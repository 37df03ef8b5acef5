//! Member directory: member records and the president seat.

use serde::{Deserialize, Serialize};

use super::error::{RegistryError, RegistryResult};
use crate::api::MemberId;
use crate::models::{Member, PersonalInfo};

/// The association's member records.
///
/// Members are identified internally by [`MemberId`]; the case-insensitive
/// (last name, first name) pair is enforced as a uniqueness rule when a
/// member is admitted, not as the structural identity of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDirectory {
    members: Vec<Member>,
    president: Option<MemberId>,
    next_id: i64,
}

impl Default for MemberDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemberDirectory {
    /// Create a directory with no members and no president.
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            president: None,
            next_id: 1,
        }
    }

    /// All members, in admission order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Look up a member by id.
    pub fn get(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: MemberId) -> Option<&mut Member> {
        self.members.iter_mut().find(|m| m.id() == id)
    }

    /// Look up a member by name pair, case-insensitively.
    pub fn find_by_name(&self, last_name: &str, first_name: &str) -> Option<&Member> {
        let wanted = (last_name.to_lowercase(), first_name.to_lowercase());
        self.members
            .iter()
            .find(|m| m.info().identity_key() == wanted)
    }

    /// Admit a new member.
    ///
    /// Rejects the admission without mutation when another member already
    /// carries the same case-insensitive name pair.
    pub fn add_member(&mut self, info: PersonalInfo) -> RegistryResult<MemberId> {
        if self
            .find_by_name(info.last_name(), info.first_name())
            .is_some()
        {
            return Err(RegistryError::DuplicateMember {
                last_name: info.last_name().to_string(),
                first_name: info.first_name().to_string(),
            });
        }

        let id = MemberId::new(self.next_id);
        self.members.push(Member::new(id, info));
        self.next_id += 1;
        Ok(id)
    }

    /// Remove a member record. Clears the president seat if it was theirs.
    ///
    /// The caller (the association facade) is responsible for withdrawing the
    /// member from events first; this only drops the record.
    pub(crate) fn remove(&mut self, id: MemberId) -> Option<Member> {
        let index = self.members.iter().position(|m| m.id() == id)?;
        if self.president == Some(id) {
            self.president = None;
        }
        Some(self.members.remove(index))
    }

    /// Designate the association's president, or clear the seat with `None`.
    ///
    /// Returns `false` (leaving the seat unchanged) when the candidate is not
    /// a current member.
    pub fn designate_president(&mut self, member: Option<MemberId>) -> bool {
        match member {
            None => {
                self.president = None;
                true
            }
            Some(id) if self.get(id).is_some() => {
                self.president = Some(id);
                true
            }
            Some(_) => false,
        }
    }

    pub fn president(&self) -> Option<&Member> {
        self.president.and_then(|id| self.get(id))
    }
}
