//! Folds, ensembling and scoring wired together through the config

use approx::assert_abs_diff_eq;
use moderar::data::{balanced_sample, clean_whitespace, Language};
use moderar::ensemble::{ensemble, EnsembleError, EnsembleStrategy, Predictions};
use moderar::eval::score_roc_auc;
use moderar::{Error, ModerarConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn ids(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{i:04}")).collect()
}

#[test]
fn test_folds_cover_every_row_once() {
    let config = ModerarConfig::from_yaml_str("folds: {n_splits: 4, seed: 1337}").unwrap();
    let folds = config.folds.kfold().split(10).unwrap();
    assert_eq!(folds.len(), 4);

    let mut seen: Vec<usize> = folds.iter().flat_map(|(_, val)| val.clone()).collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..10).collect::<Vec<_>>());
    for (train, val) in &folds {
        assert_eq!(train.len() + val.len(), 10);
    }
}

#[test]
fn test_rank_ensemble_scored_against_targets() {
    let labels = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
    let targets = Predictions::new(ids(6), labels.to_vec()).unwrap();

    // Squeezed scale orders better than the wide one
    let calm = Predictions::new(ids(6), vec![0.10, 0.11, 0.13, 0.12, 0.14, 0.15]).unwrap();
    let loud = Predictions::new(ids(6), vec![0.0, 0.2, 0.9, 0.7, 0.8, 1.0]).unwrap();

    let loud_auc = score_roc_auc(&targets, &loud).unwrap();
    let ranked = ensemble(&[calm, loud], &EnsembleStrategy::Rank).unwrap();
    let ranked_auc = score_roc_auc(&targets, &ranked).unwrap();
    assert!(ranked_auc >= loud_auc);
    assert_abs_diff_eq!(ranked_auc, 7.0 / 9.0, epsilon = 1e-12);
}

#[test]
fn test_strategy_from_config() {
    let config = ModerarConfig::from_yaml_str("ensemble: {kind: power, power: 2.0}").unwrap();
    let a = Predictions::new(ids(2), vec![0.2, 1.0]).unwrap();
    let out = ensemble(&[a], &config.ensemble).unwrap();
    assert_abs_diff_eq!(out.scores()[0], 0.04, epsilon = 1e-12);
    assert_abs_diff_eq!(out.scores()[1], 1.0, epsilon = 1e-12);
}

#[test]
fn test_errors_convert_to_crate_error() {
    fn run() -> moderar::Result<Predictions> {
        let a = Predictions::new(vec!["a"], vec![0.1])?;
        let b = Predictions::new(vec!["b"], vec![0.1])?;
        Ok(ensemble(&[a, b], &EnsembleStrategy::Mean)?)
    }
    assert!(matches!(
        run(),
        Err(Error::Ensemble(EnsembleError::IdMismatch { index: 1 }))
    ));
}

#[test]
fn test_balanced_sample_and_features() {
    let labels: Vec<bool> = (0..100).map(|i| i % 10 == 0).collect();
    let mut rng = StdRng::seed_from_u64(5);
    let sample = balanced_sample(&labels, 40, &mut rng).unwrap();
    let toxic = sample.iter().filter(|&&i| labels[i]).count();
    assert_eq!(sample.len(), 40);
    assert_eq!(toxic, 20);

    let lang: Language = "tr".parse().unwrap();
    assert_eq!(lang.one_hot()[1], 1.0);
    assert_eq!(clean_whitespace(" sen  bir\naptalsın "), "sen bir aptalsın");
}
