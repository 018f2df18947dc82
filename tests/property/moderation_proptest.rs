//! Property-based tests for the feed and moderation

use proptest::prelude::*;
use std::collections::HashSet;
use zcode::backend::auth::Principal;
use zcode::backend::server::{config::ServerConfig, AppState};
use zcode::backend::tales::NewTale;

fn image(caption: String) -> NewTale {
    NewTale {
        media_payload: Some("data:image/png;base64,AAAA".to_string()),
        media_kind: Some("image".to_string()),
        caption: Some(caption),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn test_feed_holds_exactly_the_approved(approvals in prop::collection::vec(any::<bool>(), 1..12)) {
        tokio_test::block_on(async {
            let state = AppState::new(ServerConfig::default());
            let owner = state.identities.register(Some("alice"), None, None).await.unwrap();

            let mut approved = HashSet::new();
            for (i, approve) in approvals.iter().enumerate() {
                let tale = state.tales.submit(owner.id, image(format!("tale {}", i))).await.unwrap();
                if *approve {
                    state.moderation.approve(Principal::Admin, tale.id).await.unwrap();
                    approved.insert(tale.id);
                }
            }

            let feed = state.tales.feed().await;
            let feed_ids: HashSet<_> = feed.iter().map(|t| t.id).collect();
            prop_assert_eq!(feed_ids, approved.clone());
            prop_assert!(feed.iter().all(|t| t.is_approved()));
            prop_assert_eq!(
                state.tales.pending().await.len(),
                approvals.len() - approved.len()
            );

            // submission reward per tale plus approval reward per approved tale
            let points = state.identities.require(owner.id).await.unwrap().points;
            prop_assert_eq!(points, 10 * approvals.len() as u64 + approved.len() as u64);
            Ok(())
        })?;
    }

    #[test]
    fn test_repeated_approval_rewards_once(repeats in 1usize..6) {
        tokio_test::block_on(async {
            let state = AppState::new(ServerConfig::default());
            let owner = state.identities.register(Some("alice"), None, None).await.unwrap();
            let tale = state.tales.submit(owner.id, image("once".to_string())).await.unwrap();

            for _ in 0..repeats {
                let approved = state.moderation.approve(Principal::Admin, tale.id).await.unwrap();
                prop_assert!(approved.is_approved());
            }

            let points = state.identities.require(owner.id).await.unwrap().points;
            prop_assert_eq!(points, 11);
            Ok(())
        })?;
    }

    #[test]
    fn test_repost_count_matches_reposts(reposts in 0u64..20) {
        tokio_test::block_on(async {
            let state = AppState::new(ServerConfig::default());
            let owner = state.identities.register(Some("alice"), None, None).await.unwrap();
            let tale = state.tales.submit(owner.id, image("share me".to_string())).await.unwrap();
            state.moderation.approve(Principal::Admin, tale.id).await.unwrap();

            for _ in 0..reposts {
                state.tales.repost(tale.id).await.unwrap();
            }

            let stored = state.tales.get(tale.id).await.unwrap();
            prop_assert_eq!(stored.repost_count, reposts);
            Ok(())
        })?;
    }
}
