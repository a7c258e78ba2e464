//! Unit tests for command handlers

use super::*;
use crate::{
    cli::types::ModelKind,
    draft::DraftMode,
    error::DraftError,
    stats::CATEGORIES,
    storage::read_instances,
};
use serde_json::json;
use std::{fs, path::Path};
use tempfile::TempDir;

fn season_table(players: &[u64]) -> String {
    let rows: Vec<serde_json::Value> = players
        .iter()
        .map(|pid| {
            let mut row = serde_json::Map::new();
            row.insert("personId".into(), json!(pid));
            row.insert("gameId".into(), json!("g1"));
            for cat in CATEGORIES.iter() {
                row.insert(cat.name.into(), json!(1));
            }
            serde_json::Value::Object(row)
        })
        .collect();
    serde_json::to_string(&rows).unwrap()
}

fn write_input(dir: &Path, uids: &[&str], class: &[u64]) -> std::path::PathBuf {
    let path = dir.join("input.jsonl");
    let lines: Vec<String> = uids
        .iter()
        .map(|uid| {
            json!({
                "input": {
                    "uid": uid,
                    "draft class": class,
                    "last season": season_table(class),
                }
            })
            .to_string()
        })
        .collect();
    fs::write(&path, lines.join("\n")).unwrap();
    path
}

#[cfg(test)]
mod seed_tests {
    use super::*;

    #[test]
    fn test_resolve_seed_explicit_value_wins() {
        assert_eq!(resolve_seed(Some(17)).unwrap(), 17);
    }
}

#[cfg(test)]
mod draft_command_tests {
    use super::*;
    use crate::commands::draft::{handle_draft, DraftParams};

    #[test]
    fn test_dynamic_draft_writes_one_file_per_model() {
        let temp_dir = TempDir::new().unwrap();
        let class: Vec<u64> = (1..=25).collect();
        let input = write_input(temp_dir.path(), &["a", "b"], &class);
        let out = temp_dir.path().join("out");

        let summary = handle_draft(DraftParams {
            input,
            out: out.clone(),
            seed: Some(5),
            models: vec![ModelKind::Random, ModelKind::Random],
            mode: DraftMode::Dynamic,
        })
        .unwrap();

        assert_eq!(summary.instances, 2);
        assert_eq!(
            summary.outputs,
            vec![
                out.join("RandomDynamicBaseline_1.jsonl"),
                out.join("RandomDynamicBaseline_2.jsonl"),
            ]
        );

        let first = read_instances(&summary.outputs[0]).unwrap();
        let second = read_instances(&summary.outputs[1]).unwrap();
        assert_eq!(first.len(), 2);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.uid(), b.uid());
            let a_out = a.output.as_ref().unwrap();
            let b_out = b.output.as_ref().unwrap();
            assert_eq!(a_out.len(), 10);
            assert_eq!(b_out.len(), 10);
            assert!(a_out.iter().all(|p| !b_out.contains(p)));
            // the recorded input keeps the full draft class
            assert_eq!(a.input.draft_class.len(), 25);
        }
        assert!(!out.join("RandomDynamicBaseline_1.jsonl.partial").exists());
    }

    #[test]
    fn test_static_draft_names_output_after_model() {
        let temp_dir = TempDir::new().unwrap();
        let class: Vec<u64> = (1..=12).collect();
        let input = write_input(temp_dir.path(), &["only"], &class);

        let summary = handle_draft(DraftParams {
            input,
            out: temp_dir.path().to_path_buf(),
            seed: Some(1),
            models: vec![ModelKind::Random],
            mode: DraftMode::Static,
        })
        .unwrap();

        let path = temp_dir.path().join("RandomStaticBaseline_1.jsonl");
        assert_eq!(summary.outputs, vec![path.clone()]);
        let drafted = read_instances(&path).unwrap();
        assert_eq!(drafted[0].output.as_ref().unwrap().len(), 10);
    }

    #[test]
    fn test_static_draft_keeps_whole_line_dynamic_keeps_input() {
        let temp_dir = TempDir::new().unwrap();
        let class: Vec<u64> = (1..=12).collect();
        let input = temp_dir.path().join("gold.jsonl");
        let line = json!({
            "input": {
                "uid": "g",
                "draft class": class,
                "last season": season_table(&class),
            },
            "next season": season_table(&class),
            "split": "test"
        });
        fs::write(&input, line.to_string()).unwrap();

        for (mode, out, keeps_line) in [
            (DraftMode::Static, "static", true),
            (DraftMode::Dynamic, "dynamic", false),
        ] {
            let summary = handle_draft(DraftParams {
                input: input.clone(),
                out: temp_dir.path().join(out),
                seed: Some(2),
                models: vec![ModelKind::Random],
                mode,
            })
            .unwrap();

            let text = fs::read_to_string(&summary.outputs[0]).unwrap();
            let written: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
            assert_eq!(written["input"], line["input"]);
            assert_eq!(written.get("next season").is_some(), keeps_line);
            assert_eq!(written.get("split").is_some(), keeps_line);
            assert_eq!(written["output"].as_array().unwrap().len(), 10);
        }
    }

    #[test]
    fn test_no_models_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = handle_draft(DraftParams {
            input: temp_dir.path().join("missing.jsonl"),
            out: temp_dir.path().to_path_buf(),
            seed: Some(0),
            models: vec![],
            mode: DraftMode::Dynamic,
        })
        .unwrap_err();
        assert!(matches!(err, DraftError::NoModels));
    }

    #[test]
    fn test_failed_draft_leaves_no_output() {
        let temp_dir = TempDir::new().unwrap();
        let class: Vec<u64> = (1..=12).collect();
        let input = write_input(temp_dir.path(), &["ok"], &class);
        let mut text = fs::read_to_string(&input).unwrap();
        text.push_str("\n{\"input\": {\"uid\": \"broken\"}}\n");
        fs::write(&input, text).unwrap();
        let out = temp_dir.path().join("out");

        let err = handle_draft(DraftParams {
            input,
            out: out.clone(),
            seed: Some(0),
            models: vec![ModelKind::Random],
            mode: DraftMode::Dynamic,
        })
        .unwrap_err();

        assert!(matches!(err, DraftError::InvalidLine { line: 2, .. }));
        assert!(!out.join("RandomDynamicBaseline_1.jsonl").exists());
        assert!(!out.join("RandomDynamicBaseline_1.jsonl.partial").exists());
    }
}

#[cfg(test)]
mod evaluate_command_tests {
    use super::*;
    use crate::commands::evaluate::handle_evaluate;

    #[test]
    fn test_evaluate_scores_drafted_output() {
        let temp_dir = TempDir::new().unwrap();
        let class = [1u64, 2, 3];
        let gold = temp_dir.path().join("gold.jsonl");
        let pred = temp_dir.path().join("pred.jsonl");
        let gold_line = json!({
            "input": {"uid": "s1", "draft class": class, "last season": season_table(&class)},
            "next season": season_table(&[1, 2])
        });
        let pred_line = json!({
            "input": {"uid": "s1", "draft class": class, "last season": season_table(&class)},
            "output": [1, 3]
        });
        fs::write(&gold, gold_line.to_string()).unwrap();
        fs::write(&pred, pred_line.to_string()).unwrap();

        let result = handle_evaluate(&gold, &pred, false).unwrap();

        // player 1: one game with every column at 1, so the weights sum plus one appearance
        let weight_sum: f64 = CATEGORIES.iter().map(|c| c.weight).sum();
        assert_eq!(result.scores.len(), 1);
        assert!((result.combined - (weight_sum + 1.0)).abs() < 1e-9);
    }
}
