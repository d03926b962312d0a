// ============================================================================
// Groupcat Core - Sync Service
// File: crates/groupcat-core/src/services/sync_service.rs
// ============================================================================
//! The reconciler: brings one mirrored category into agreement with its
//! group, and fans that out across every known group on a full resync.
//!
//! Each pass is observe → plan → execute. Observation reads the mapping
//! store and the live category; planning is a pure function from (group,
//! observation) to a step list; execution issues the host calls in order:
//! mapping lookup before create/update, create/update before privilege
//! propagation.

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::domain::{
    plan_privileges, CategoryFields, CategoryId, CategoryObservation, CategoryPatch,
    GroupRecord, MembershipChange, ReconcileAction, ReconcileOutcome, ResyncReport, SyncConfig,
};
use crate::error::SyncError;
use crate::repositories::{CategoryHost, GroupHost, MappingStore};

/// Best-effort propagation result: how many join/leave calls were issued
/// and how many of them failed. Partial failure is never rolled back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrivilegeReport {
    pub issued: usize,
    pub failed: usize,
}

/// One host call the executor has to make. Produced by [`plan`].
#[derive(Debug, Clone)]
enum SyncStep {
    /// Remove a mapping whose category vanished on the host.
    DropStaleMapping,
    /// Create the category (slug included), store the mapping, propagate.
    Create { fields: CategoryFields, slug: String },
    /// Rewrite every owned field and clear the tag whitelist.
    Update { cid: CategoryId, patch: CategoryPatch },
    /// Re-derive privilege membership for the category.
    Propagate { cid: CategoryId },
}

/// Pure reconciliation decision for one group.
fn plan(
    group: &GroupRecord,
    observation: &CategoryObservation,
    action: ReconcileAction,
    parent_cid: CategoryId,
) -> Vec<SyncStep> {
    let expected = CategoryFields::expected(group, parent_cid, action);

    match observation {
        CategoryObservation::Unmapped => vec![SyncStep::Create {
            fields: expected,
            slug: group.slug.clone(),
        }],
        CategoryObservation::Orphaned(_) => vec![
            SyncStep::DropStaleMapping,
            SyncStep::Create { fields: expected, slug: group.slug.clone() },
        ],
        // Retired categories are frozen: no update, no privilege calls.
        CategoryObservation::Retired(_) => Vec::new(),
        CategoryObservation::Live(category) => {
            let mut steps = Vec::new();
            if expected != category.fields {
                steps.push(SyncStep::Update {
                    cid: category.cid,
                    patch: CategoryPatch::replace(expected),
                });
            }
            steps.push(SyncStep::Propagate { cid: category.cid });
            steps
        }
    }
}

/// Keeps mirrored categories synchronized with their groups.
pub struct SyncService<M, G, C>
where
    M: MappingStore,
    G: GroupHost,
    C: CategoryHost,
{
    mapping: Arc<M>,
    groups: Arc<G>,
    categories: Arc<C>,
    config: RwLock<Option<SyncConfig>>,
}

impl<M, G, C> SyncService<M, G, C>
where
    M: MappingStore,
    G: GroupHost,
    C: CategoryHost,
{
    pub fn new(
        mapping: Arc<M>,
        groups: Arc<G>,
        categories: Arc<C>,
        config: Option<SyncConfig>,
    ) -> Self {
        Self {
            mapping,
            groups,
            categories,
            config: RwLock::new(config),
        }
    }

    /// Replaces the runtime configuration (admin saved new settings).
    pub async fn configure(&self, config: SyncConfig) {
        info!("Reconfigured: parent category {}", config.parent_category);
        *self.config.write().await = Some(config);
    }

    pub async fn is_configured(&self) -> bool {
        self.config.read().await.is_some()
    }

    async fn parent_category(&self) -> Result<CategoryId, SyncError> {
        self.config
            .read()
            .await
            .map(|c| c.parent_category)
            .ok_or(SyncError::NotConfigured)
    }

    /// Enumerates every group known to the host: names first, then one
    /// batched resolution to full records.
    pub async fn list_groups(&self) -> Result<Vec<GroupRecord>, SyncError> {
        let names = self.groups.list_group_names().await?;
        self.groups.get_groups_data(&names).await
    }

    /// Reconciles every known group. Groups are dispatched concurrently and
    /// independently; one group's failure never aborts the others.
    pub async fn full_resync(&self) -> Result<ResyncReport, SyncError> {
        self.parent_category().await?;

        let groups = self.list_groups().await?;
        info!("Full resync over {} groups", groups.len());

        let results = join_all(
            groups
                .iter()
                .map(|group| self.reconcile(group, ReconcileAction::Sync)),
        )
        .await;

        let mut report = ResyncReport::default();
        for (group, result) in groups.iter().zip(results.iter()) {
            if let Err(e) = result {
                warn!("Reconciliation failed for group {}: {}", group.name, e);
            }
            report.record(&group.name, result);
        }
        info!(
            "Resync done: {} created, {} updated, {} unchanged, {} retired, {} failed",
            report.created,
            report.updated,
            report.unchanged,
            report.retired,
            report.failed.len()
        );
        Ok(report)
    }

    /// Looks up what currently backs a group: its mapping entry and, when
    /// mapped, the live category behind it.
    async fn observe(&self, group_name: &str) -> Result<CategoryObservation, SyncError> {
        let Some(cid) = self.mapping.get(group_name).await? else {
            return Ok(CategoryObservation::Unmapped);
        };
        match self.categories.get_by_id(cid).await? {
            None => Ok(CategoryObservation::Orphaned(cid)),
            Some(category) if category.fields.disabled => Ok(CategoryObservation::Retired(cid)),
            Some(category) => Ok(CategoryObservation::Live(category)),
        }
    }

    /// Reconciles one group: create the category if it is missing, rewrite
    /// it if it drifted, recover an orphaned mapping, leave a retired one
    /// alone. Privilege membership is re-derived on every pass that touches
    /// a live category.
    pub async fn reconcile(
        &self,
        group: &GroupRecord,
        action: ReconcileAction,
    ) -> Result<ReconcileOutcome, SyncError> {
        let parent_cid = self.parent_category().await?;
        let observation = self.observe(&group.name).await?;
        debug!("Observed {:?} for group {}", observation, group.name);

        let mut outcome = match &observation {
            CategoryObservation::Retired(cid) => ReconcileOutcome::Retired(*cid),
            CategoryObservation::Live(category) => ReconcileOutcome::Unchanged(category.cid),
            // Overwritten by the Create step below.
            _ => ReconcileOutcome::Unchanged(0),
        };

        for step in plan(group, &observation, action, parent_cid) {
            match step {
                SyncStep::DropStaleMapping => {
                    warn!("Mapping for group {} points at a missing category; recreating", group.name);
                    self.mapping.delete(&group.name).await?;
                }
                SyncStep::Create { fields, slug } => {
                    let cid = self.categories.create(&fields, &slug).await?;
                    self.mapping.set(&group.name, cid).await?;
                    info!("Created category {} for group {}", cid, group.name);
                    self.propagate_privileges(cid, group).await?;
                    outcome = ReconcileOutcome::Created(cid);
                }
                SyncStep::Update { cid, patch } => {
                    self.categories.update(&[(cid, patch)]).await?;
                    info!("Updated category {} for group {}", cid, group.name);
                    outcome = ReconcileOutcome::Updated(cid);
                }
                SyncStep::Propagate { cid } => {
                    self.propagate_privileges(cid, group).await?;
                }
            }
        }

        Ok(outcome)
    }

    /// Re-derives privilege membership for a category: three join/leave
    /// calls per privilege in the host's ordered list, issued concurrently
    /// and best-effort. Individual failures are logged and counted, never
    /// retried or rolled back.
    pub async fn propagate_privileges(
        &self,
        cid: CategoryId,
        group: &GroupRecord,
    ) -> Result<PrivilegeReport, SyncError> {
        let privileges = self.groups.privilege_list().await?;
        let ops = plan_privileges(cid, group, &privileges);

        let calls = ops.iter().map(|op| async {
            let member = op.actor.member_name();
            let result = match op.change {
                MembershipChange::Join => self.groups.join(&op.privilege_group, member).await,
                MembershipChange::Leave => self.groups.leave(&op.privilege_group, member).await,
            };
            if let Err(e) = result {
                warn!("Privilege call failed for {} / {}: {}", op.privilege_group, member, e);
                return false;
            }
            true
        });

        let results = join_all(calls).await;
        let report = PrivilegeReport {
            issued: results.len(),
            failed: results.iter().filter(|ok| !**ok).count(),
        };
        if report.failed > 0 {
            warn!(
                "{}/{} privilege calls failed for category {}",
                report.failed, report.issued, cid
            );
        }
        Ok(report)
    }

    /// Group created: unless the group is a system or hidden one, resync
    /// everything. Cheap correctness over precision.
    pub async fn handle_group_created(
        &self,
        group: &GroupRecord,
    ) -> Result<Option<ResyncReport>, SyncError> {
        if !group.is_syncable() {
            debug!("Ignoring system/hidden group {}", group.name);
            return Ok(None);
        }
        self.full_resync().await.map(Some)
    }

    /// Group edited: same as created.
    pub async fn handle_group_edited(
        &self,
        group: &GroupRecord,
    ) -> Result<Option<ResyncReport>, SyncError> {
        self.handle_group_created(group).await
    }

    /// Group renamed: move the mapping entry to the new name, keeping the
    /// category id. The category's own name catches up on the next pass.
    /// Returns whether a mapping was moved.
    pub async fn handle_group_renamed(
        &self,
        old_name: &str,
        new_name: &str,
    ) -> Result<bool, SyncError> {
        let Some(cid) = self.mapping.get(old_name).await? else {
            return Ok(false);
        };
        self.mapping.delete(old_name).await?;
        self.mapping.set(new_name, cid).await?;
        info!("Moved mapping {} -> {} (category {})", old_name, new_name, cid);
        Ok(true)
    }

    /// Group deleted: retire the mapped category with a single batched
    /// patch. Terminal; a second delete is a no-op. Returns the retired
    /// category id, if any.
    pub async fn handle_group_deleted(
        &self,
        group_name: &str,
    ) -> Result<Option<CategoryId>, SyncError> {
        let Some(cid) = self.mapping.get(group_name).await? else {
            return Ok(None);
        };
        match self.categories.get_by_id(cid).await? {
            Some(category) if category.fields.disabled => Ok(Some(cid)),
            _ => {
                self.categories.update(&[(cid, CategoryPatch::disable())]).await?;
                info!("Retired category {} for deleted group {}", cid, group_name);
                Ok(Some(cid))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::{Category, ImageClass};
    use crate::repositories::category_host::MockCategoryHost;
    use crate::repositories::group_host::MockGroupHost;
    use crate::repositories::mapping_store::MockMappingStore;

    const PARENT: CategoryId = 7;

    fn vips() -> GroupRecord {
        GroupRecord {
            name: "vips".to_string(),
            description: "very important".to_string(),
            slug: "vips".to_string(),
            icon: "fa-star".to_string(),
            label_color: "#aa0000".to_string(),
            private: true,
            ..Default::default()
        }
    }

    fn live_category(cid: CategoryId, group: &GroupRecord) -> Category {
        Category {
            cid,
            slug: group.slug.clone(),
            fields: CategoryFields::expected(group, PARENT, ReconcileAction::Sync),
            tag_whitelist: Vec::new(),
        }
    }

    fn privileges(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("priv{}", i)).collect()
    }

    fn service(
        mapping: MockMappingStore,
        groups: MockGroupHost,
        categories: MockCategoryHost,
    ) -> SyncService<MockMappingStore, MockGroupHost, MockCategoryHost> {
        SyncService::new(
            Arc::new(mapping),
            Arc::new(groups),
            Arc::new(categories),
            Some(SyncConfig { parent_category: PARENT }),
        )
    }

    /// Shared log of membership calls, recorded as
    /// (privilege_group, member, joined).
    type MembershipLog = Arc<Mutex<Vec<(String, String, bool)>>>;

    fn expect_membership(groups: &mut MockGroupHost, privilege_count: usize) -> MembershipLog {
        let log: MembershipLog = Arc::new(Mutex::new(Vec::new()));
        groups
            .expect_privilege_list()
            .returning(move || Ok(privileges(privilege_count)));
        let joins = log.clone();
        groups.expect_join().returning(move |pg, member| {
            joins.lock().unwrap().push((pg.to_string(), member.to_string(), true));
            Ok(())
        });
        let leaves = log.clone();
        groups.expect_leave().returning(move |pg, member| {
            leaves.lock().unwrap().push((pg.to_string(), member.to_string(), false));
            Ok(())
        });
        log
    }

    fn joined(log: &MembershipLog, member: &str, cid: CategoryId, privilege: &str) -> bool {
        let key = format!("cid:{}:privileges:groups:{}", cid, privilege);
        log.lock()
            .unwrap()
            .iter()
            .any(|(pg, m, join)| *pg == key && m == member && *join)
    }

    #[tokio::test]
    async fn test_unmapped_group_creates_category_and_mapping() {
        let group = vips();
        let mut mapping = MockMappingStore::new();
        let mut groups = MockGroupHost::new();
        let mut categories = MockCategoryHost::new();

        mapping.expect_get().returning(|_| Ok(None));
        categories
            .expect_create()
            .withf(|fields, slug| {
                fields.name == "vips"
                    && fields.parent_cid == PARENT
                    && fields.color == "#FFFFFF"
                    && fields.image.is_empty()
                    && fields.image_class == ImageClass::Cover
                    && slug == "vips"
            })
            .times(1)
            .returning(|_, _| Ok(42));
        mapping
            .expect_set()
            .withf(|name, cid| name == "vips" && *cid == 42)
            .times(1)
            .returning(|_, _| Ok(()));
        let log = expect_membership(&mut groups, 5);

        let svc = service(mapping, groups, categories);
        let outcome = svc.reconcile(&group, ReconcileAction::Sync).await.unwrap();

        assert_eq!(outcome, ReconcileOutcome::Created(42));
        // vips scenario: visitors and members joined to the lowest two,
        // the group itself to all five.
        assert_eq!(log.lock().unwrap().len(), 15);
        for pos in 0..5 {
            let privilege = format!("priv{}", pos);
            assert_eq!(joined(&log, "guests", 42, &privilege), pos < 2);
            assert_eq!(joined(&log, "registered-users", 42, &privilege), pos < 2);
            assert!(joined(&log, "vips", 42, &privilege));
        }
    }

    #[tokio::test]
    async fn test_public_group_extends_registered_members_one_level() {
        let mut group = vips();
        group.private = false;
        let mut mapping = MockMappingStore::new();
        let mut groups = MockGroupHost::new();
        let mut categories = MockCategoryHost::new();

        let live = live_category(42, &group);
        mapping.expect_get().returning(|_| Ok(Some(42)));
        categories.expect_get_by_id().returning(move |_| Ok(Some(live.clone())));
        categories.expect_update().times(0);
        let log = expect_membership(&mut groups, 12);

        let svc = service(mapping, groups, categories);
        svc.reconcile(&group, ReconcileAction::Sync).await.unwrap();

        assert_eq!(log.lock().unwrap().len(), 36);
        for pos in 0..12 {
            let privilege = format!("priv{}", pos);
            assert_eq!(joined(&log, "guests", 42, &privilege), pos < 2);
            assert_eq!(joined(&log, "registered-users", 42, &privilege), pos < 3);
            assert_eq!(joined(&log, "vips", 42, &privilege), pos < 10);
        }
    }

    #[tokio::test]
    async fn test_unchanged_group_issues_no_update() {
        let group = vips();
        let mut mapping = MockMappingStore::new();
        let mut groups = MockGroupHost::new();
        let mut categories = MockCategoryHost::new();

        let live = live_category(9, &group);
        mapping.expect_get().returning(|_| Ok(Some(9)));
        categories.expect_get_by_id().returning(move |_| Ok(Some(live.clone())));
        categories.expect_update().times(0);
        expect_membership(&mut groups, 3);

        let svc = service(mapping, groups, categories);
        let outcome = svc.reconcile(&group, ReconcileAction::Sync).await.unwrap();
        assert_eq!(outcome, ReconcileOutcome::Unchanged(9));
    }

    #[tokio::test]
    async fn test_drifted_category_is_rewritten_in_one_batched_write() {
        let group = vips();
        let mut mapping = MockMappingStore::new();
        let mut groups = MockGroupHost::new();
        let mut categories = MockCategoryHost::new();

        let mut live = live_category(9, &group);
        live.fields.bg_color = "#000000".to_string();
        live.tag_whitelist = vec!["old-tag".to_string()];
        mapping.expect_get().returning(|_| Ok(Some(9)));
        categories.expect_get_by_id().returning(move |_| Ok(Some(live.clone())));
        let expected = CategoryFields::expected(&group, PARENT, ReconcileAction::Sync);
        categories
            .expect_update()
            .withf(move |updates| {
                updates.len() == 1
                    && updates[0].0 == 9
                    && updates[0].1.fields.as_ref() == Some(&expected)
                    && updates[0].1.tag_whitelist.as_ref().is_some_and(|tags| tags.is_empty())
            })
            .times(1)
            .returning(|_| Ok(()));
        expect_membership(&mut groups, 3);

        let svc = service(mapping, groups, categories);
        let outcome = svc.reconcile(&group, ReconcileAction::Sync).await.unwrap();
        assert_eq!(outcome, ReconcileOutcome::Updated(9));
    }

    #[tokio::test]
    async fn test_retired_category_is_frozen() {
        let group = vips();
        let mut mapping = MockMappingStore::new();
        let mut groups = MockGroupHost::new();
        let mut categories = MockCategoryHost::new();

        let mut live = live_category(9, &group);
        live.fields.disabled = true;
        mapping.expect_get().returning(|_| Ok(Some(9)));
        categories.expect_get_by_id().returning(move |_| Ok(Some(live.clone())));
        categories.expect_update().times(0);
        groups.expect_privilege_list().times(0);

        let svc = service(mapping, groups, categories);
        let outcome = svc.reconcile(&group, ReconcileAction::Sync).await.unwrap();
        assert_eq!(outcome, ReconcileOutcome::Retired(9));
    }

    #[tokio::test]
    async fn test_orphaned_mapping_is_dropped_and_category_recreated() {
        let group = vips();
        let mut mapping = MockMappingStore::new();
        let mut groups = MockGroupHost::new();
        let mut categories = MockCategoryHost::new();

        mapping.expect_get().returning(|_| Ok(Some(9)));
        categories.expect_get_by_id().with(mockall::predicate::eq(9u64)).returning(|_| Ok(None));
        mapping
            .expect_delete()
            .withf(|name| name == "vips")
            .times(1)
            .returning(|_| Ok(()));
        categories.expect_create().times(1).returning(|_, _| Ok(10));
        mapping
            .expect_set()
            .withf(|name, cid| name == "vips" && *cid == 10)
            .times(1)
            .returning(|_, _| Ok(()));
        expect_membership(&mut groups, 3);

        let svc = service(mapping, groups, categories);
        let outcome = svc.reconcile(&group, ReconcileAction::Sync).await.unwrap();
        assert_eq!(outcome, ReconcileOutcome::Created(10));
    }

    #[tokio::test]
    async fn test_rename_moves_mapping_and_keeps_category_id() {
        let mut mapping = MockMappingStore::new();
        mapping
            .expect_get()
            .withf(|name| name == "old-guard")
            .returning(|_| Ok(Some(5)));
        mapping
            .expect_delete()
            .withf(|name| name == "old-guard")
            .times(1)
            .returning(|_| Ok(()));
        mapping
            .expect_set()
            .withf(|name, cid| name == "new-guard" && *cid == 5)
            .times(1)
            .returning(|_, _| Ok(()));

        let svc = service(mapping, MockGroupHost::new(), MockCategoryHost::new());
        assert!(svc.handle_group_renamed("old-guard", "new-guard").await.unwrap());
    }

    #[tokio::test]
    async fn test_rename_without_mapping_is_a_noop() {
        let mut mapping = MockMappingStore::new();
        mapping.expect_get().returning(|_| Ok(None));
        mapping.expect_delete().times(0);
        mapping.expect_set().times(0);

        let svc = service(mapping, MockGroupHost::new(), MockCategoryHost::new());
        assert!(!svc.handle_group_renamed("ghost", "spirit").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_retires_mapped_category() {
        let group = vips();
        let mut mapping = MockMappingStore::new();
        let mut categories = MockCategoryHost::new();

        let live = live_category(5, &group);
        mapping.expect_get().returning(|_| Ok(Some(5)));
        categories.expect_get_by_id().returning(move |_| Ok(Some(live.clone())));
        categories
            .expect_update()
            .withf(|updates| {
                updates.len() == 1 && updates[0].0 == 5 && updates[0].1.disabled == Some(true)
            })
            .times(1)
            .returning(|_| Ok(()));

        let svc = service(mapping, MockGroupHost::new(), categories);
        assert_eq!(svc.handle_group_deleted("vips").await.unwrap(), Some(5));
    }

    #[tokio::test]
    async fn test_second_delete_is_a_noop() {
        let group = vips();
        let mut mapping = MockMappingStore::new();
        let mut categories = MockCategoryHost::new();

        let mut live = live_category(5, &group);
        live.fields.disabled = true;
        mapping.expect_get().returning(|_| Ok(Some(5)));
        categories.expect_get_by_id().returning(move |_| Ok(Some(live.clone())));
        categories.expect_update().times(0);

        let svc = service(mapping, MockGroupHost::new(), categories);
        assert_eq!(svc.handle_group_deleted("vips").await.unwrap(), Some(5));
    }

    #[tokio::test]
    async fn test_delete_without_mapping_is_a_noop() {
        let mut mapping = MockMappingStore::new();
        mapping.expect_get().returning(|_| Ok(None));
        let mut categories = MockCategoryHost::new();
        categories.expect_update().times(0);

        let svc = service(mapping, MockGroupHost::new(), categories);
        assert_eq!(svc.handle_group_deleted("ghost").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_resync_refused_until_configured() {
        let mut groups = MockGroupHost::new();
        groups.expect_list_group_names().times(0);
        let svc = SyncService::new(
            Arc::new(MockMappingStore::new()),
            Arc::new(groups),
            Arc::new(MockCategoryHost::new()),
            None,
        );
        assert!(matches!(svc.full_resync().await, Err(SyncError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_full_resync_aggregates_and_tolerates_failures() {
        let vips = vips();
        let mut staff = vips.clone();
        staff.name = "staff".to_string();
        staff.slug = "staff".to_string();
        let mut broken = vips.clone();
        broken.name = "broken".to_string();

        let mut mapping = MockMappingStore::new();
        let mut groups = MockGroupHost::new();
        let mut categories = MockCategoryHost::new();

        let all = vec![vips.clone(), staff.clone(), broken.clone()];
        groups
            .expect_list_group_names()
            .returning(|| Ok(vec!["vips".into(), "staff".into(), "broken".into()]));
        groups
            .expect_get_groups_data()
            .returning(move |_| Ok(all.clone()));

        // vips: unmapped -> created. staff: mapped, unchanged. broken: the
        // mapping lookup blows up, which must not take the others down.
        mapping.expect_get().withf(|n| n == "vips").returning(|_| Ok(None));
        mapping.expect_get().withf(|n| n == "staff").returning(|_| Ok(Some(8)));
        mapping
            .expect_get()
            .withf(|n| n == "broken")
            .returning(|_| Err(SyncError::MappingStore("hash read failed".into())));

        categories.expect_create().returning(|_, _| Ok(20));
        mapping.expect_set().returning(|_, _| Ok(()));
        let staff_live = live_category(8, &staff);
        categories
            .expect_get_by_id()
            .returning(move |_| Ok(Some(staff_live.clone())));
        categories.expect_update().times(0);
        expect_membership(&mut groups, 3);

        let svc = service(mapping, groups, categories);
        let report = svc.full_resync().await.unwrap();
        assert_eq!(report.created, 1);
        assert_eq!(report.unchanged, 1);
        assert_eq!(report.failed, vec!["broken".to_string()]);
        assert_eq!(report.groups_seen(), 3);
    }

    #[tokio::test]
    async fn test_idempotence_second_pass_issues_no_update() {
        let group = vips();
        let mut mapping = MockMappingStore::new();
        let mut groups = MockGroupHost::new();
        let mut categories = MockCategoryHost::new();

        // First pass creates; second pass sees the created category as live
        // and matching, so no update call is ever made.
        let created = Arc::new(Mutex::new(false));
        let created_get = created.clone();
        mapping.expect_get().returning(move |_| {
            Ok(if *created_get.lock().unwrap() { Some(42) } else { None })
        });
        categories.expect_create().times(1).returning(|_, _| Ok(42));
        let created_set = created.clone();
        mapping.expect_set().returning(move |_, _| {
            *created_set.lock().unwrap() = true;
            Ok(())
        });
        let expected = live_category(42, &group);
        categories
            .expect_get_by_id()
            .returning(move |_| Ok(Some(expected.clone())));
        categories.expect_update().times(0);
        expect_membership(&mut groups, 3);

        let svc = service(mapping, groups, categories);
        let first = svc.reconcile(&group, ReconcileAction::Sync).await.unwrap();
        let second = svc.reconcile(&group, ReconcileAction::Sync).await.unwrap();
        assert_eq!(first, ReconcileOutcome::Created(42));
        assert_eq!(second, ReconcileOutcome::Unchanged(42));
    }

    #[tokio::test]
    async fn test_system_and_hidden_groups_skip_resync() {
        let mut groups = MockGroupHost::new();
        groups.expect_list_group_names().times(0);

        let svc = service(MockMappingStore::new(), groups, MockCategoryHost::new());
        let mut system = vips();
        system.system = true;
        assert!(svc.handle_group_created(&system).await.unwrap().is_none());
        let mut hidden = vips();
        hidden.hidden = true;
        assert!(svc.handle_group_created(&hidden).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_privilege_failures_are_counted_not_fatal() {
        let group = vips();
        let mut groups = MockGroupHost::new();
        groups.expect_privilege_list().returning(|| Ok(privileges(2)));
        groups
            .expect_join()
            .returning(|_, _| Err(SyncError::GroupHost("join refused".into())));
        groups.expect_leave().returning(|_, _| Ok(()));

        let svc = service(MockMappingStore::new(), groups, MockCategoryHost::new());
        let report = svc.propagate_privileges(3, &group).await.unwrap();
        assert_eq!(report.issued, 6);
        // Private group, 2 privileges: guests join 2, registered join 2,
        // group joins 2 -> all six are joins and all fail.
        assert_eq!(report.failed, 6);
    }
}
