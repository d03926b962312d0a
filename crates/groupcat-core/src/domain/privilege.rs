// ============================================================================
// Groupcat Core - Privilege Planning
// File: crates/groupcat-core/src/domain/privilege.rs
// ============================================================================
//! Derives join/leave operations for a mirrored category from the host's
//! ordered privilege list. Never persisted; recomputed every pass.

use super::category::CategoryId;
use super::group::GroupRecord;

/// Visitors (anonymous) always get exactly the lowest privileges below this
/// position.
pub const VISITOR_CUTOFF: usize = 2;

/// Mirrored group members get every privilege below this position,
/// independent of privacy.
pub const GROUP_CUTOFF: usize = 10;

/// A privilege-bearing actor on the host side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    /// Anonymous visitors pseudo-group.
    Visitors,
    /// Registered members pseudo-group.
    Registered,
    /// The mirrored group itself.
    Group(String),
}

impl Actor {
    /// Host-side member name for this actor.
    pub fn member_name(&self) -> &str {
        match self {
            Actor::Visitors => "guests",
            Actor::Registered => "registered-users",
            Actor::Group(name) => name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipChange {
    Join,
    Leave,
}

/// One join/leave call against a category privilege group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivilegeOp {
    pub privilege_group: String,
    pub actor: Actor,
    pub change: MembershipChange,
}

fn privilege_group_name(cid: CategoryId, privilege: &str) -> String {
    format!("cid:{}:privileges:groups:{}", cid, privilege)
}

/// Plans the full privilege assignment for one category: exactly three
/// operations per privilege, one per actor. Membership is decided by the
/// privilege's position in the host's ordered list, not its name.
///
/// Registered members get one extra privilege level when the group is
/// public.
pub fn plan_privileges(
    cid: CategoryId,
    group: &GroupRecord,
    privileges: &[String],
) -> Vec<PrivilegeOp> {
    let registered_cutoff = if group.private {
        VISITOR_CUTOFF
    } else {
        VISITOR_CUTOFF + 1
    };

    let mut ops = Vec::with_capacity(privileges.len() * 3);
    for (pos, privilege) in privileges.iter().enumerate() {
        let actors = [
            (Actor::Visitors, pos < VISITOR_CUTOFF),
            (Actor::Registered, pos < registered_cutoff),
            (Actor::Group(group.name.clone()), pos < GROUP_CUTOFF),
        ];
        for (actor, joined) in actors {
            ops.push(PrivilegeOp {
                privilege_group: privilege_group_name(cid, privilege),
                actor,
                change: if joined { MembershipChange::Join } else { MembershipChange::Leave },
            });
        }
    }
    ops
}
