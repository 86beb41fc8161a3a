use std::fs;

use approx::assert_relative_eq;
use perceptron::{
    CsvSink, DecisionLine, Label, Point, TrainingConfig, TrainingSession, TrueBoundary, Weights,
    training::Trainer,
};
use rand::{SeedableRng, rngs::StdRng};

fn seeded(n: usize, iterations: usize, seed: u64) -> TrainingSession {
    TrainingSession::new(TrainingConfig::new(n, 0.1, iterations).with_seed(seed)).unwrap()
}

#[test]
fn generated_labels_follow_the_true_boundary() {
    for seed in 0..10 {
        let session = seeded(200, 1, seed);
        let boundary = session.boundary();

        for p in session.points() {
            let above = p.y - (boundary.a() * p.x + boundary.b()) >= 0.0;
            assert_eq!(p.label == Label::Positive, above);
        }
    }
}

#[test]
fn train_accuracy_matches_an_independent_count() {
    let mut session = seeded(120, 20, 3);

    for _ in 0..20 {
        let state = session.step();
        let weights = session.weights();
        let correct = session
            .points()
            .iter()
            .filter(|p| weights.predict(p.x, p.y) == p.label)
            .count();

        assert_relative_eq!(state.train_accuracy, correct as f64 / 120.);
    }
}

#[test]
fn budget_exhaustion_is_terminal() {
    let mut session = seeded(50, 7, 11);

    let state = session.run_to_completion();
    assert_eq!(state.epoch, 7);
    assert!(state.done);
    assert_eq!(session.metrics().len(), 7);

    let line = session.decision_line();
    for extra in 1..=3 {
        assert_eq!(session.step(), state);
        assert_eq!(session.decision_line(), line);
        assert_eq!(session.metrics().len(), 7 + extra);
    }

    let snapshots = session.metrics().snapshots();
    assert!(snapshots[6..].iter().all(|s| *s == snapshots[6]));
}

#[test]
fn same_seed_same_run() {
    let mut a = seeded(80, 15, 99);
    let mut b = seeded(80, 15, 99);

    let sa = a.run_to_completion();
    let sb = b.run_to_completion();

    assert_eq!(sa, sb);
    assert_eq!(a.metrics().snapshots(), b.metrics().snapshots());
    assert_eq!(a.points(), b.points());
}

#[test]
fn decision_line_agrees_with_predictions() {
    let mut session = seeded(200, 30, 5);
    session.run_to_completion();

    let weights = *session.weights();
    let DecisionLine::Sloped { a, b } = session.decision_line() else {
        panic!("expected a sloped line for w2 = {}", weights.w2);
    };

    // The positive half-plane lies above the line when w2 > 0 and below it otherwise.
    for p in session.points() {
        let line_y = a * p.x + b;
        if (p.y - line_y).abs() < 1e-9 {
            continue;
        }

        let positive_side = (p.y > line_y) == (weights.w2 > 0.0);
        let expected = if positive_side {
            Label::Positive
        } else {
            Label::Negative
        };
        assert_eq!(weights.predict(p.x, p.y), expected);
    }
}

#[test]
fn metrics_file_is_written_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metrics.csv");
    let mut session = seeded(30, 4, 21).with_sink(CsvSink::new(&path));

    session.run_to_completion();
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written.lines().count(), 1 + 3);
    assert_eq!(written.lines().next(), Some("epoch,train_accuracy,w0,w1,w2"));

    fs::remove_file(&path).unwrap();
    session.step();
    session.step();
    assert!(!path.exists(), "steps after completion must not export again");
}

#[test]
fn export_rows_match_the_series() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metrics.csv");
    let mut session = seeded(30, 3, 4).with_sink(CsvSink::new(&path));
    session.run_to_completion();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let rows: Vec<Vec<f64>> = reader
        .records()
        .map(|r| r.unwrap().iter().map(|v| v.parse().unwrap()).collect())
        .collect();

    assert_eq!(rows.len(), 2);
    assert_eq!(session.metrics().len(), 3);
    for (row, snapshot) in rows.iter().zip(session.metrics().iter()) {
        assert_eq!(row[0], snapshot.epoch as f64);
        assert_eq!(row[1], snapshot.train_accuracy);
        assert_eq!(row[2..], [snapshot.w0, snapshot.w1, snapshot.w2]);
    }
}

#[test]
fn final_epoch_is_recorded_after_the_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metrics.csv");
    let mut session = seeded(30, 3, 8).with_sink(CsvSink::new(&path));
    session.run_to_completion();

    let epochs: Vec<usize> = csv::Reader::from_path(&path)
        .unwrap()
        .records()
        .map(|r| r.unwrap()[0].parse().unwrap())
        .collect();

    assert_eq!(epochs, [1, 2]);
    assert_eq!(session.metrics().last().map(|s| s.epoch), Some(3));
}

#[test]
fn unwritable_metrics_path_does_not_abort_training() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no").join("such").join("metrics.csv");
    let mut session = seeded(30, 2, 4).with_sink(CsvSink::new(&path));

    let state = session.run_to_completion();

    assert!(state.done);
    assert!(state.test_accuracy.is_some());
    assert!(!path.exists());
}

#[test]
fn scenario_single_point_is_correct() {
    let boundary = TrueBoundary::new(1.0, 0.0);
    let point = Point::new(0.5, 0.9, boundary.label(0.5, 0.9));
    let weights = Weights::new(0.0, 0.0, 1.0);

    assert_eq!(point.label, Label::Positive);
    assert_relative_eq!(weights.raw(0.5, 0.9), 0.9);
    assert_eq!(weights.predict(0.5, 0.9), Label::Positive);

    let session = TrainingSession::from_parts(
        TrainingConfig::default(),
        boundary,
        weights,
        vec![point],
        StdRng::seed_from_u64(0),
    )
    .unwrap();
    assert!(session.points()[0].correct);
}

#[test]
fn scenario_degenerate_and_horizontal_lines() {
    assert_eq!(Weights::new(1.0, 0.0, 0.0).decision_line(), DecisionLine::Undefined);
    assert_eq!(
        Weights::new(-2.0, 0.0, 4.0).decision_line(),
        DecisionLine::Sloped { a: 0.0, b: 0.5 }
    );
}

#[test]
fn scenario_single_correction() {
    let mut weights = Weights::default();
    Trainer::new(0.1).correct(&mut weights, &Point::new(0.5, 0.5, Label::Positive));

    assert_relative_eq!(weights.w0, 0.1);
    assert_relative_eq!(weights.w1, 0.05);
    assert_relative_eq!(weights.w2, 0.05);
}

#[test]
fn view_reflects_the_session() {
    let mut session = seeded(25, 2, 8);
    session.run_to_completion();

    let view = session.view();
    assert_eq!(view.points.len(), 25);
    assert_eq!(view.epoch, 2);
    assert!(view.done);
    assert_eq!(view.test_accuracy, session.test_accuracy());
    assert_eq!(view.line, session.decision_line());
    assert!(view.to_string().starts_with("epoch 2/2 | train acc "));
}
