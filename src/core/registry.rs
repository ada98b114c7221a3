use std::fmt;

use hashbrown::HashMap;

use crate::{
    member::Member,
    types::{FIRST_MEMBER_ID, MemberId},
};

/// Rejected member registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// The counter cannot advance past its current value.
    IdsExhausted(MemberId),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdsExhausted(next) => write!(f, "member identifiers exhausted at {next}"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Members keyed by identifier, listed in insertion order.
///
/// Identifiers come from a counter that only ever moves forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    members: HashMap<MemberId, Member>,
    order: Vec<MemberId>,
    next_member_id: MemberId,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            members: HashMap::new(),
            order: Vec::new(),
            next_member_id: FIRST_MEMBER_ID,
        }
    }
}

impl Registry {
    /// Creates an empty registry starting at [`FIRST_MEMBER_ID`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` under the next identifier and returns it.
    ///
    /// Names are not deduplicated. The registry is unchanged on error.
    pub fn add(&mut self, name: impl Into<String>) -> Result<MemberId, RegistryError> {
        let id = self.next_member_id;
        self.next_member_id = id
            .checked_add(1)
            .ok_or(RegistryError::IdsExhausted(id))?;
        self.order.push(id);
        self.members.insert(id, Member::new(id, name.into()));
        Ok(id)
    }

    /// Looks up a member by identifier.
    pub fn find(&self, id: MemberId) -> Option<&Member> {
        self.members.get(&id)
    }

    /// Members in insertion order. The iterator can be cloned to restart.
    pub fn all(&self) -> impl Iterator<Item = &Member> + Clone {
        self.order.iter().filter_map(move |id| self.members.get(id))
    }

    /// Identifier the next [`Registry::add`] will assign.
    pub fn next_member_id(&self) -> MemberId {
        self.next_member_id
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when nobody has been registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub(crate) fn get_mut(&mut self, id: MemberId) -> Option<&mut Member> {
        self.members.get_mut(&id)
    }

    /// Rebuilds a registry from restored members. Callers validate ids first.
    pub(crate) fn restore(members: Vec<Member>, next_member_id: MemberId) -> Self {
        let order = members.iter().map(|m| m.id).collect();
        let members = members.into_iter().map(|m| (m.id, m)).collect();
        Self {
            members,
            order,
            next_member_id,
        }
    }
}
