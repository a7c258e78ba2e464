//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod draft_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = DraftError::from(json_error);

        match error {
            DraftError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = DraftError::from(io_error);

        match error {
            DraftError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u64>().unwrap_err();
        let error = DraftError::from(parse_error);

        match error {
            DraftError::InvalidNumber(_) => (),
            _ => panic!("Expected InvalidNumber error variant"),
        }
    }

    #[test]
    fn test_missing_field_names_the_field() {
        let error = DraftError::missing("turnovers");
        assert_eq!(error.to_string(), "Missing required field: turnovers");
    }

    #[test]
    fn test_at_line_wraps_source() {
        let error = DraftError::missing("uid").at_line(7);
        let message = error.to_string();
        assert!(message.starts_with("Line 7:"));
        assert!(message.contains("uid"));

        let source = std::error::Error::source(&error).unwrap();
        assert_eq!(source.to_string(), "Missing required field: uid");
    }

    #[test]
    fn test_uid_mismatch_reports_both_ids() {
        let error = DraftError::UidMismatch {
            index: 0,
            gold: Uid::new("g1"),
            pred: Uid::new("g2"),
        };
        let message = error.to_string();
        assert!(message.contains("index 0"));
        assert!(message.contains("gold_uid=g1"));
        assert!(message.contains("pred_uid=g2"));
    }

    #[test]
    fn test_invalid_pick_message() {
        let error = DraftError::InvalidPick {
            uid: Uid::new("2020"),
            strategy: "RandomDynamicBaseline_1".to_string(),
            player: PlayerId::new(5),
        };
        let message = error.to_string();
        assert!(message.contains("RandomDynamicBaseline_1"));
        assert!(message.contains("player 5"));
        assert!(message.contains("2020"));
    }

    #[test]
    fn test_length_mismatch_message() {
        let error = DraftError::LengthMismatch { gold: 3, pred: 2 };
        assert_eq!(
            error.to_string(),
            "Gold and predicted files differ in length: gold=3, pred=2"
        );
    }

    #[test]
    fn test_error_debug_format() {
        let error = DraftError::NoModels;
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("NoModels"));
    }
}
