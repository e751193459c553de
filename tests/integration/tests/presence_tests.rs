//! Presence plugin integration tests
//!
//! Drives the plugin end-to-end: scripted channel events in, recorded
//! transport actions out.
//!
//! Run with: cargo test -p integration-tests --test presence_tests

use integration_tests::{
    directed, drive, joined, message, names_end, names_reply, setup, user_joined, user_left,
    user_quit, Action,
};

// ============================================================================
// Membership Flow Tests
// ============================================================================

#[tokio::test]
async fn test_joining_a_channel_requests_the_membership_list() {
    let (state, transport) = setup("seenbot");

    drive(&state, vec![joined("#general")]).await.unwrap();

    assert_eq!(
        transport.actions(),
        vec![Action::Names {
            channel: "#general".to_string()
        }]
    );
}

#[tokio::test]
async fn test_membership_reply_seeds_users_with_markers_stripped() {
    let (state, transport) = setup("seenbot");

    drive(
        &state,
        vec![
            joined("#general"),
            names_reply("#general", &["@alice", "bob"]),
            names_end("#general"),
        ],
    )
    .await
    .unwrap();

    assert_eq!(state.registry().known_nicks(), vec!["alice", "bob"]);
    // seeded users have no activity yet
    assert!(!state.registry().lookup("alice").unwrap().has_activity());
    // names_end produces no extra traffic
    assert_eq!(transport.names_requests(), 1);
}

#[tokio::test]
async fn test_chat_activity_upgrades_a_seeded_user() {
    let (state, transport) = setup("seenbot");

    drive(
        &state,
        vec![
            names_reply("#general", &["@alice"]),
            message("alice", "#general", "morning all"),
            directed("bob", "#general", "seen alice"),
        ],
    )
    .await
    .unwrap();

    assert_eq!(transport.replies(), vec!["alice last seen 0 seconds ago"]);
}

#[tokio::test]
async fn test_departed_users_remain_queryable() {
    let (state, transport) = setup("seenbot");

    drive(
        &state,
        vec![
            user_joined("alice", "#general"),
            user_left("alice", "#general"),
            user_quit("bob", "timed out"),
            directed("carol", "#general", "seen alice"),
            directed("carol", "#general", "seen bob"),
        ],
    )
    .await
    .unwrap();

    assert_eq!(
        transport.replies(),
        vec![
            "alice last seen 0 seconds ago",
            "bob last seen 0 seconds ago"
        ]
    );
}

// ============================================================================
// Self-Tracking Tests
// ============================================================================

#[tokio::test]
async fn test_bot_never_tracks_itself() {
    let (state, _transport) = setup("seenbot");

    drive(
        &state,
        vec![
            user_joined("SeenBot", "#general"),
            user_left("seenbot", "#general"),
            user_quit("seenbot", "restart"),
            names_reply("#general", &["@seenbot", "alice"]),
        ],
    )
    .await
    .unwrap();

    assert_eq!(state.registry().known_nicks(), vec!["alice"]);
    assert!(state.registry().lookup("seenbot").is_none());
}

#[tokio::test]
async fn test_seen_query_for_the_bot_itself() {
    let (state, transport) = setup("seenbot");

    drive(&state, vec![directed("alice", "#general", "seen SeenBot")])
        .await
        .unwrap();

    assert_eq!(transport.replies(), vec!["I am always here!"]);
}

// ============================================================================
// Seen Query Tests
// ============================================================================

#[tokio::test]
async fn test_seen_query_for_unknown_user() {
    let (state, transport) = setup("seenbot");

    drive(&state, vec![directed("alice", "#general", "seen casper")])
        .await
        .unwrap();

    assert_eq!(transport.replies(), vec!["I have not seen casper"]);
}

#[tokio::test]
async fn test_seen_query_for_seeded_but_quiet_user() {
    let (state, transport) = setup("seenbot");

    drive(
        &state,
        vec![
            names_reply("#general", &["lurker"]),
            directed("alice", "#general", "seen lurker"),
        ],
    )
    .await
    .unwrap();

    assert_eq!(transport.replies(), vec!["I have not seen lurker"]);
}

#[tokio::test]
async fn test_seen_query_with_blank_argument_is_silent() {
    let (state, transport) = setup("seenbot");

    drive(&state, vec![directed("alice", "#general", "seen   ")])
        .await
        .unwrap();

    assert!(transport.replies().is_empty());
}

#[tokio::test]
async fn test_asking_about_a_user_counts_as_activity_for_the_asker() {
    let (state, _transport) = setup("seenbot");

    drive(&state, vec![directed("alice", "#general", "seen bob")])
        .await
        .unwrap();

    assert!(state.registry().lookup("alice").unwrap().has_activity());
}

// ============================================================================
// Names Query Tests
// ============================================================================

#[tokio::test]
async fn test_names_query_lists_users_in_first_observed_order() {
    let (state, transport) = setup("seenbot");

    drive(
        &state,
        vec![
            user_joined("Carol", "#general"),
            names_reply("#general", &["@alice", "bob"]),
            directed("Carol", "#general", "names"),
        ],
    )
    .await
    .unwrap();

    assert_eq!(transport.replies(), vec!["names list: Carol, alice, bob."]);
}

#[tokio::test]
async fn test_names_query_on_empty_registry_triggers_exactly_one_refresh() {
    let (state, transport) = setup("seenbot");

    // the only prior signal is the bot's own join, which is never tracked
    drive(
        &state,
        vec![
            user_joined("seenbot", "#general"),
            directed("seenbot", "#general", "names"),
        ],
    )
    .await
    .unwrap();

    assert_eq!(transport.names_requests(), 1);
    assert_eq!(
        transport.replies(),
        vec!["No users tracked yet; refreshing the list."]
    );
}

// ============================================================================
// Channel Command Tests
// ============================================================================

#[tokio::test]
async fn test_join_command_normalizes_the_channel_name() {
    let (state, transport) = setup("seenbot");

    drive(&state, vec![directed("alice", "#general", "join dev")])
        .await
        .unwrap();

    assert_eq!(
        transport.actions(),
        vec![
            Action::Join {
                channel: "#dev".to_string()
            },
            Action::Reply {
                channel: "#general".to_string(),
                text: "OK, alice.".to_string()
            },
        ]
    );
}

#[tokio::test]
async fn test_leave_command_without_argument_leaves_current_channel() {
    let (state, transport) = setup("seenbot");

    drive(&state, vec![directed("alice", "#general", "leave")])
        .await
        .unwrap();

    assert_eq!(
        transport.actions(),
        vec![
            Action::Reply {
                channel: "#general".to_string(),
                text: "Bye!".to_string()
            },
            Action::Leave {
                channel: "#general".to_string()
            },
        ]
    );
}

#[tokio::test]
async fn test_leave_command_with_argument_targets_the_named_channel() {
    let (state, transport) = setup("seenbot");

    drive(&state, vec![directed("alice", "#general", "leave dev")])
        .await
        .unwrap();

    assert_eq!(
        transport.actions(),
        vec![
            Action::Reply {
                channel: "#dev".to_string(),
                text: "Bye!".to_string()
            },
            Action::Leave {
                channel: "#dev".to_string()
            },
        ]
    );
}
