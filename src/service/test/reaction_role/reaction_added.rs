use super::*;

/// Tests the grant path for a bound reaction.
///
/// Verifies that a user adding the bound emoji receives the role exactly
/// once.
///
/// Expected: Ok with a single grant of the bound role
#[tokio::test]
async fn grants_bound_role_exactly_once() {
    let gateway = RecordingGateway::new()
        .with_role(GUILD, "Helper", RoleId::new(10))
        .with_message(CHANNEL, MESSAGE)
        .with_member(GUILD, MEMBER, &[]);
    let table = ReactionRoleTable::new();
    let service = ReactionRoleService::new(&table, &gateway);

    service
        .bind(GUILD, CHANNEL, MESSAGE, thumbs_up(), "Helper")
        .await
        .unwrap();
    service
        .reaction_added(BOT, GUILD, MESSAGE, &thumbs_up(), MEMBER)
        .await
        .unwrap();

    assert_eq!(gateway.grants(), vec![(GUILD, MEMBER, RoleId::new(10))]);
}

/// Tests a reaction on a message that has no bindings.
///
/// Expected: Ok as a silent no-op, no grant call issued
#[tokio::test]
async fn ignores_unbound_message() {
    let gateway = RecordingGateway::new();
    let table = ReactionRoleTable::new();
    let service = ReactionRoleService::new(&table, &gateway);

    service
        .reaction_added(BOT, GUILD, MESSAGE, &thumbs_up(), MEMBER)
        .await
        .unwrap();

    assert!(gateway.grants().is_empty());
}

/// Tests a reaction with an emoji that is not bound on a tracked message.
///
/// Expected: Ok as a silent no-op, no grant call issued
#[tokio::test]
async fn ignores_unbound_emoji() {
    let gateway = RecordingGateway::new()
        .with_role(GUILD, "Helper", RoleId::new(10))
        .with_message(CHANNEL, MESSAGE);
    let table = ReactionRoleTable::new();
    let service = ReactionRoleService::new(&table, &gateway);

    service
        .bind(GUILD, CHANNEL, MESSAGE, thumbs_up(), "Helper")
        .await
        .unwrap();
    service
        .reaction_added(
            BOT,
            GUILD,
            MESSAGE,
            &ReactionType::Unicode("🎉".to_string()),
            MEMBER,
        )
        .await
        .unwrap();

    assert!(gateway.grants().is_empty());
}

/// Tests the self-feedback guard.
///
/// The bot seeds the first reaction on every bound message; its own reaction
/// events must never trigger a grant.
///
/// Expected: Ok with no grant call issued
#[tokio::test]
async fn ignores_own_reaction() {
    let gateway = RecordingGateway::new()
        .with_role(GUILD, "Helper", RoleId::new(10))
        .with_message(CHANNEL, MESSAGE);
    let table = ReactionRoleTable::new();
    let service = ReactionRoleService::new(&table, &gateway);

    service
        .bind(GUILD, CHANNEL, MESSAGE, thumbs_up(), "Helper")
        .await
        .unwrap();
    service
        .reaction_added(BOT, GUILD, MESSAGE, &thumbs_up(), BOT)
        .await
        .unwrap();

    assert!(gateway.grants().is_empty());
}

/// Tests that after rebinding, only the newest role is granted.
///
/// Expected: Ok with a single grant of the replacement role
#[tokio::test]
async fn grants_latest_binding_only() {
    let gateway = RecordingGateway::new()
        .with_role(GUILD, "Helper", RoleId::new(10))
        .with_role(GUILD, "Veteran", RoleId::new(11))
        .with_message(CHANNEL, MESSAGE)
        .with_member(GUILD, MEMBER, &[]);
    let table = ReactionRoleTable::new();
    let service = ReactionRoleService::new(&table, &gateway);

    service
        .bind(GUILD, CHANNEL, MESSAGE, thumbs_up(), "Helper")
        .await
        .unwrap();
    service
        .bind(GUILD, CHANNEL, MESSAGE, thumbs_up(), "Veteran")
        .await
        .unwrap();
    service
        .reaction_added(BOT, GUILD, MESSAGE, &thumbs_up(), MEMBER)
        .await
        .unwrap();

    assert_eq!(gateway.grants(), vec![(GUILD, MEMBER, RoleId::new(11))]);
}

/// Tests a reaction whose bound role was deleted after binding.
///
/// Verifies that the failure is surfaced while the binding itself survives
/// for future events.
///
/// Expected: Err(RoleNotFound) with the binding still in the table
#[tokio::test]
async fn reports_deleted_role_and_keeps_binding() {
    let gateway = RecordingGateway::new()
        .with_role(GUILD, "Helper", RoleId::new(10))
        .with_message(CHANNEL, MESSAGE);
    let table = ReactionRoleTable::new();
    let service = ReactionRoleService::new(&table, &gateway);

    service
        .bind(GUILD, CHANNEL, MESSAGE, thumbs_up(), "Helper")
        .await
        .unwrap();
    gateway.delete_role(GUILD, "Helper");

    let result = service
        .reaction_added(BOT, GUILD, MESSAGE, &thumbs_up(), MEMBER)
        .await;

    assert!(matches!(
        result,
        Err(AppError::CommandErr(CommandError::RoleNotFound(_)))
    ));
    assert!(gateway.grants().is_empty());
    assert_eq!(
        table.role_for(MESSAGE, "👍").await,
        Some("Helper".to_string())
    );
}
