//! Property-based tests for conversation keys and history

use proptest::prelude::*;
use uuid::Uuid;
use zcode::backend::chat::{ConversationKey, ConversationLog};
use zcode::shared::ChatMessage;

fn uuid() -> impl Strategy<Value = Uuid> {
    any::<u128>().prop_map(Uuid::from_u128)
}

proptest! {
    #[test]
    fn test_key_ignores_order(a in uuid(), b in uuid()) {
        prop_assert_eq!(ConversationKey::new(a, b), ConversationKey::new(b, a));
        let (first, second) = ConversationKey::new(a, b).participants();
        prop_assert!(first <= second);
    }

    #[test]
    fn test_history_is_symmetric_and_ordered(directions in prop::collection::vec(any::<bool>(), 0..16)) {
        tokio_test::block_on(async {
            let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());
            let log = ConversationLog::new();

            for (i, from_alice) in directions.iter().enumerate() {
                let (from, to) = if *from_alice { (alice, bob) } else { (bob, alice) };
                log.append(ChatMessage::new(from, to, i.to_string())).await;
            }

            let seen_by_alice = log.history(alice, bob).await;
            let seen_by_bob = log.history(bob, alice).await;
            prop_assert_eq!(&seen_by_alice, &seen_by_bob);

            let texts: Vec<String> = seen_by_alice.into_iter().map(|m| m.text).collect();
            let expected: Vec<String> = (0..directions.len()).map(|i| i.to_string()).collect();
            prop_assert_eq!(texts, expected);
            Ok(())
        })?;
    }
}
