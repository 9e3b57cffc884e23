use super::*;

fn no_cancel() -> AtomicBool {
    AtomicBool::new(false)
}

/// Tests a sweep before any record is due.
///
/// Expected: nothing released, record still tracked, no revoke call
#[tokio::test]
async fn leaves_future_mutes_alone() {
    let gateway = guild_with_muted_member();
    let registrar = MuteRegistrar::new();
    let service = MuteService::new(&registrar, &gateway);
    let t0 = base_time();

    registrar
        .register(MEMBER, GUILD, t0 + Duration::minutes(10))
        .await;
    let released = service
        .sweep("Muted", t0 + Duration::minutes(5), &no_cancel())
        .await;

    assert_eq!(released, 0);
    assert!(gateway.revokes().is_empty());
    assert_eq!(registrar.due(t0 + Duration::minutes(10)).await.len(), 1);
}

/// Tests releasing a mute whose expiry has passed.
///
/// Verifies the ten-minute scenario: a sweep at T0+5min changes nothing, a
/// sweep at T0+11min revokes exactly once and empties the table.
///
/// Expected: one revoke, registrar empty afterwards
#[tokio::test]
async fn releases_due_mute_exactly_once() {
    let gateway = guild_with_muted_member();
    let registrar = MuteRegistrar::new();
    let service = MuteService::new(&registrar, &gateway);
    let t0 = base_time();

    registrar
        .register(MEMBER, GUILD, t0 + Duration::minutes(10))
        .await;

    assert_eq!(
        service
            .sweep("Muted", t0 + Duration::minutes(5), &no_cancel())
            .await,
        0
    );
    assert_eq!(
        service
            .sweep("Muted", t0 + Duration::minutes(11), &no_cancel())
            .await,
        1
    );

    assert_eq!(gateway.revokes(), vec![(GUILD, MEMBER, MUTE_ROLE)]);
    assert!(registrar.due(t0 + Duration::days(1)).await.is_empty());
}

/// Tests a sweep over an empty registrar.
///
/// Expected: no-op, zero released
#[tokio::test]
async fn empty_sweep_is_noop() {
    let gateway = guild_with_muted_member();
    let registrar = MuteRegistrar::new();
    let service = MuteService::new(&registrar, &gateway);

    assert_eq!(service.sweep("Muted", base_time(), &no_cancel()).await, 0);
    assert!(gateway.revokes().is_empty());
}

/// Tests a due record for a member who already lost the mute role.
///
/// Verifies the redundant-call guard: no revoke is issued, the record is
/// still removed.
///
/// Expected: record removed with zero revoke calls
#[tokio::test]
async fn skips_member_without_mute_role() {
    let gateway = RecordingGateway::new()
        .with_role(GUILD, "Muted", MUTE_ROLE)
        .with_member(GUILD, MEMBER, &[]);
    let registrar = MuteRegistrar::new();
    let service = MuteService::new(&registrar, &gateway);
    let t0 = base_time();

    registrar.register(MEMBER, GUILD, t0).await;
    let released = service
        .sweep("Muted", t0 + Duration::seconds(1), &no_cancel())
        .await;

    assert_eq!(released, 1);
    assert!(gateway.revokes().is_empty());
    assert!(!registrar.is_registered(MEMBER).await);
}

/// Tests a due record for a member who has left the guild.
///
/// Expected: silent skip, record removed, no revoke call
#[tokio::test]
async fn skips_departed_member() {
    let gateway = RecordingGateway::new().with_role(GUILD, "Muted", MUTE_ROLE);
    let registrar = MuteRegistrar::new();
    let service = MuteService::new(&registrar, &gateway);
    let t0 = base_time();

    registrar.register(MEMBER, GUILD, t0).await;
    let released = service
        .sweep("Muted", t0 + Duration::seconds(1), &no_cancel())
        .await;

    assert_eq!(released, 1);
    assert!(gateway.revokes().is_empty());
    assert!(!registrar.is_registered(MEMBER).await);
}

/// Tests that one failing revoke does not poison the sweep.
///
/// Verifies per-entry containment: the failing user's record is removed
/// anyway, and the other due user is still released.
///
/// Expected: both records removed, the healthy user revoked
#[tokio::test]
async fn revoke_failure_does_not_abort_sweep() {
    let other = UserId::new(78);
    let gateway = RecordingGateway::new()
        .with_role(GUILD, "Muted", MUTE_ROLE)
        .with_member(GUILD, MEMBER, &[MUTE_ROLE])
        .with_member(GUILD, other, &[MUTE_ROLE])
        .with_failing_revoke(MEMBER);
    let registrar = MuteRegistrar::new();
    let service = MuteService::new(&registrar, &gateway);
    let t0 = base_time();

    registrar.register(MEMBER, GUILD, t0).await;
    registrar.register(other, GUILD, t0).await;

    let released = service
        .sweep("Muted", t0 + Duration::seconds(1), &no_cancel())
        .await;

    assert_eq!(released, 2);
    assert_eq!(gateway.revokes(), vec![(GUILD, other, MUTE_ROLE)]);
    assert!(!registrar.is_registered(MEMBER).await);
    assert!(!registrar.is_registered(other).await);
}

/// Tests a due record in a guild whose mute role was deleted.
///
/// Expected: skip without revoke, record removed
#[tokio::test]
async fn skips_when_mute_role_deleted() {
    let gateway = RecordingGateway::new().with_member(GUILD, MEMBER, &[MUTE_ROLE]);
    let registrar = MuteRegistrar::new();
    let service = MuteService::new(&registrar, &gateway);
    let t0 = base_time();

    registrar.register(MEMBER, GUILD, t0).await;
    let released = service
        .sweep("Muted", t0 + Duration::seconds(1), &no_cancel())
        .await;

    assert_eq!(released, 1);
    assert!(gateway.revokes().is_empty());
}

/// Tests the cancellation point.
///
/// A sweep entered with the shutdown flag already set must stop before
/// touching any entry.
///
/// Expected: no revokes, records untouched
#[tokio::test]
async fn cancelled_sweep_releases_nothing() {
    let gateway = guild_with_muted_member();
    let registrar = MuteRegistrar::new();
    let service = MuteService::new(&registrar, &gateway);
    let t0 = base_time();

    registrar.register(MEMBER, GUILD, t0).await;

    let cancel = AtomicBool::new(false);
    cancel.store(true, Ordering::Relaxed);
    let released = service
        .sweep("Muted", t0 + Duration::seconds(1), &cancel)
        .await;

    assert_eq!(released, 0);
    assert!(gateway.revokes().is_empty());
    assert!(registrar.is_registered(MEMBER).await);
}
