//! Unit tests for the identifier newtypes
//!
//! Tests cover creation, parsing, conversion, and display formatting.

use core_kernel::{StudentId, TemplateId, TransactionId};
use uuid::Uuid;

mod creation {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        assert_ne!(StudentId::new(), StudentId::new());
        assert_ne!(TemplateId::new(), TemplateId::new());
    }

    #[test]
    fn test_new_v7_generates_time_ordered_ids() {
        let a = TransactionId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(1));
        let b = TransactionId::new_v7();
        assert!(a.as_uuid() < b.as_uuid());
    }
}

mod display_and_parsing {
    use super::*;

    #[test]
    fn test_display_uses_prefix() {
        assert!(TemplateId::new().to_string().starts_with("FST-"));
        assert!(StudentId::new().to_string().starts_with("STU-"));
        assert!(TransactionId::new().to_string().starts_with("TXN-"));
    }

    #[test]
    fn test_parse_round_trips_display_form() {
        let id = StudentId::new();
        let parsed: StudentId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_accepts_bare_uuid() {
        let uuid = Uuid::new_v4();
        let parsed: TemplateId = uuid.to_string().parse().unwrap();
        assert_eq!(parsed, TemplateId::from(uuid));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("not-a-uuid".parse::<StudentId>().is_err());
    }
}

mod conversion {
    use super::*;

    #[test]
    fn test_uuid_round_trip() {
        let uuid = Uuid::new_v4();
        let id = TransactionId::from(uuid);
        let back: Uuid = id.into();
        assert_eq!(back, uuid);
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = StudentId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
    }
}
