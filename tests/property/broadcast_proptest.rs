//! Property-based tests for collaboration fan-out

use proptest::prelude::*;
use translation_hub::backend::realtime::CollabBroadcaster;
use translation_hub::shared::CollabEvent;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to build runtime")
}

proptest! {
    #[test]
    fn test_each_subscriber_sees_every_event_in_order(
        contents in prop::collection::vec(".*", 0..20),
        subscribers in 1usize..5,
    ) {
        let broadcaster = CollabBroadcaster::new();
        let mut subscriptions: Vec<_> = (0..subscribers).map(|_| broadcaster.subscribe()).collect();

        for content in &contents {
            let delivered = broadcaster
                .publish(&CollabEvent::new("c1", "alice", content.as_str()))
                .expect("Event should serialize");
            prop_assert_eq!(delivered, subscribers);
        }
        broadcaster.close();

        let rt = runtime();
        for subscription in subscriptions.iter_mut() {
            let received: Vec<String> = rt.block_on(async {
                let mut received = Vec::new();
                while let Some(message) = subscription.recv().await {
                    let event: CollabEvent = serde_json::from_str(&message)
                        .expect("Event should be JSON");
                    received.push(event.content);
                }
                received
            });
            prop_assert_eq!(&received, &contents);
        }
    }

    #[test]
    fn test_late_subscriber_sees_no_history(
        before in prop::collection::vec("[a-z]{1,8}", 1..10),
    ) {
        let broadcaster = CollabBroadcaster::new();
        let _early = broadcaster.subscribe();
        for content in &before {
            broadcaster
                .publish(&CollabEvent::new("c1", "bob", content.as_str()))
                .expect("Event should serialize");
        }

        let mut late = broadcaster.subscribe();
        broadcaster
            .publish(&CollabEvent::new("c1", "bob", "after"))
            .expect("Event should serialize");
        broadcaster.close();

        let rt = runtime();
        let first = rt.block_on(late.recv()).expect("late subscriber missed live event");
        let event: CollabEvent = serde_json::from_str(&first).expect("Event should be JSON");
        prop_assert_eq!(event.content, "after");
        prop_assert!(rt.block_on(late.recv()).is_none());
    }
}
