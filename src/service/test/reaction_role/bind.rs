use super::*;

/// Tests binding an emoji to an existing role on an accessible message.
///
/// Verifies that the service attaches the seed reaction and records the
/// association.
///
/// Expected: Ok with reaction attached and binding stored
#[tokio::test]
async fn binds_and_attaches_reaction() {
    let gateway = RecordingGateway::new()
        .with_role(GUILD, "Helper", RoleId::new(10))
        .with_message(CHANNEL, MESSAGE);
    let table = ReactionRoleTable::new();
    let service = ReactionRoleService::new(&table, &gateway);

    let result = service
        .bind(GUILD, CHANNEL, MESSAGE, thumbs_up(), "Helper")
        .await;

    assert!(result.is_ok());
    assert_eq!(
        gateway.reactions(),
        vec![(CHANNEL, MESSAGE, "👍".to_string())]
    );
    assert_eq!(
        table.role_for(MESSAGE, "👍").await,
        Some("Helper".to_string())
    );
}

/// Tests binding against a role name that does not exist in the guild.
///
/// Verifies that the failure surfaces immediately and nothing is mutated.
///
/// Expected: Err(RoleNotFound) with no reaction and no binding
#[tokio::test]
async fn fails_when_role_is_missing() {
    let gateway = RecordingGateway::new().with_message(CHANNEL, MESSAGE);
    let table = ReactionRoleTable::new();
    let service = ReactionRoleService::new(&table, &gateway);

    let result = service
        .bind(GUILD, CHANNEL, MESSAGE, thumbs_up(), "Helper")
        .await;

    assert!(matches!(
        result,
        Err(AppError::CommandErr(CommandError::RoleNotFound(_)))
    ));
    assert!(gateway.reactions().is_empty());
    assert_eq!(table.role_for(MESSAGE, "👍").await, None);
}

/// Tests binding against a message the bot cannot see.
///
/// Verifies the explicit missing-message failure, distinguished from other
/// failure kinds.
///
/// Expected: Err(MessageNotFound) with no reaction and no binding
#[tokio::test]
async fn fails_when_message_is_missing() {
    let gateway = RecordingGateway::new().with_role(GUILD, "Helper", RoleId::new(10));
    let table = ReactionRoleTable::new();
    let service = ReactionRoleService::new(&table, &gateway);

    let result = service
        .bind(GUILD, CHANNEL, MESSAGE, thumbs_up(), "Helper")
        .await;

    assert!(matches!(
        result,
        Err(AppError::CommandErr(CommandError::MessageNotFound(_)))
    ));
    assert!(gateway.reactions().is_empty());
    assert_eq!(table.role_for(MESSAGE, "👍").await, None);
}

/// Tests that rebinding the same emoji replaces the role association.
///
/// Expected: Ok with the later role name stored
#[tokio::test]
async fn rebinding_replaces_role() {
    let gateway = RecordingGateway::new()
        .with_role(GUILD, "Helper", RoleId::new(10))
        .with_role(GUILD, "Veteran", RoleId::new(11))
        .with_message(CHANNEL, MESSAGE);
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

    assert_eq!(
        table.role_for(MESSAGE, "👍").await,
        Some("Veteran".to_string())
    );
}
