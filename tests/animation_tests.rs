// tests/animation_tests.rs

// Import necessary types from the groviz crate
use groviz::{
    AnimationController, GrovizError, ProbabilityTrace, SearchSimulator, basis_labels, frame_at,
    total_frames,
};

const TEST_TOLERANCE: f64 = 1e-9;

// Helper to compare a frame against expected bar heights
fn assert_heights(frame: &groviz::AnimationFrame, expected: &[f64], context: &str) {
    assert_eq!(frame.dim(), expected.len(), "dimension mismatch - {}", context);
    for (i, (actual, want)) in frame.heights().iter().zip(expected).enumerate() {
        assert!(
            (actual - want).abs() < TEST_TOLERANCE,
            "bar {} - actual {}, expected {} - {}",
            i,
            actual,
            want,
            context
        );
    }
}

fn two_snapshot_trace() -> ProbabilityTrace {
    ProbabilityTrace::from_distributions([vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap()
}

#[test]
fn test_interpolation_scenario_from_two_snapshots() -> Result<(), GrovizError> {
    // Trace [[1,0],[0,1]], F=100: the final snapshot is duplicated once, so
    // playback has 200 frames and the last 100 hold [0,1] steady.
    let trace = two_snapshot_trace();
    assert_eq!(total_frames(&trace, 100), 200);

    assert_heights(&frame_at(&trace, 100, 0)?, &[1.0, 0.0], "frame 0");
    assert_heights(&frame_at(&trace, 100, 50)?, &[0.5, 0.5], "frame 50");
    for g in 100..200 {
        assert_heights(&frame_at(&trace, 100, g)?, &[0.0, 1.0], "held final frame");
    }
    Ok(())
}

#[test]
fn test_frame_zero_of_each_pair_equals_earlier_snapshot() -> Result<(), GrovizError> {
    let trace = ProbabilityTrace::from_distributions([
        vec![0.7, 0.3],
        vec![0.2, 0.8],
        vec![0.9, 0.1],
    ])?;
    assert_heights(&frame_at(&trace, 50, 0)?, &[0.7, 0.3], "pair 0 start");
    assert_heights(&frame_at(&trace, 50, 50)?, &[0.2, 0.8], "pair 1 start");
    assert_heights(&frame_at(&trace, 50, 100)?, &[0.9, 0.1], "pair 2 start");
    // Last frame of a pair stops one sub-step short of the later snapshot.
    let last_of_pair_0 = frame_at(&trace, 50, 49)?;
    assert!((last_of_pair_0.heights()[0] - (0.7 - 0.5 * 49.0 / 50.0)).abs() < TEST_TOLERANCE);
    Ok(())
}

#[test]
fn test_degenerate_trace_rejected() {
    let single = ProbabilityTrace::from_distributions([vec![1.0, 0.0]]).unwrap();
    assert!(matches!(
        frame_at(&single, 100, 0),
        Err(GrovizError::DegenerateTrace { .. })
    ));
    assert!(matches!(
        AnimationController::new(single, 100),
        Err(GrovizError::DegenerateTrace { .. })
    ));
}

#[test]
fn test_mismatched_snapshot_dimensions_rejected() {
    // A snapshot covers all N basis states; a hand-built trace with ragged
    // distributions must be refused rather than silently truncating bars.
    assert!(matches!(
        ProbabilityTrace::from_distributions([vec![1.0, 0.0], vec![0.0, 0.5, 0.5]]),
        Err(GrovizError::InvalidParameter { .. })
    ));
}

#[test]
fn test_zero_subframes_rejected() {
    let trace = two_snapshot_trace();
    assert!(matches!(
        frame_at(&trace, 0, 0),
        Err(GrovizError::InvalidParameter { .. })
    ));
    assert!(matches!(
        AnimationController::new(trace, 0),
        Err(GrovizError::InvalidParameter { .. })
    ));
}

#[test]
fn test_out_of_range_frame_index_rejected() {
    let trace = two_snapshot_trace();
    assert!(matches!(
        frame_at(&trace, 100, 200),
        Err(GrovizError::InvalidParameter { .. })
    ));
}

#[test]
fn test_controller_cursor_is_monotone_and_finite() -> Result<(), GrovizError> {
    let mut controller = AnimationController::new(two_snapshot_trace(), 10)?;
    assert_eq!(controller.total_frames(), 20);

    let mut produced = 0;
    while let Some(frame) = controller.next() {
        assert_eq!(frame.dim(), 2);
        produced += 1;
    }
    assert_eq!(produced, 20);
    // Exhausted playback stays exhausted without an explicit restart.
    assert!(controller.next().is_none());
    Ok(())
}

#[test]
fn test_controller_seek_and_restart() -> Result<(), GrovizError> {
    let mut controller = AnimationController::new(two_snapshot_trace(), 100)?;

    controller.seek(50)?;
    let frame = controller.next().unwrap();
    assert_heights(&frame, &[0.5, 0.5], "after seek to 50");
    assert_eq!(controller.position(), 51);

    controller.restart();
    let frame = controller.next().unwrap();
    assert_heights(&frame, &[1.0, 0.0], "after restart");

    assert!(matches!(
        controller.seek(10_000),
        Err(GrovizError::InvalidParameter { .. })
    ));
    Ok(())
}

#[test]
fn test_playback_of_simulated_trace() -> Result<(), GrovizError> {
    // End-to-end: simulate, then check playback starts at the uniform
    // distribution and ends holding the amplified one.
    let trace = SearchSimulator::from_bitstrings(3, &["101"])?.run()?;
    let final_distribution = trace.final_snapshot().unwrap().probabilities().to_vec();

    let controller = AnimationController::with_default_subframes(trace)?;
    let frames: Vec<_> = controller.collect();
    assert_eq!(frames.len(), 300); // 3 snapshots · 100 sub-frames

    assert_heights(&frames[0], &[0.125; 8], "first frame is uniform");
    assert_heights(
        frames.last().unwrap(),
        &final_distribution,
        "last frame holds the final distribution",
    );
    Ok(())
}

#[test]
fn test_basis_labels_for_renderer() {
    let labels = basis_labels(2);
    assert_eq!(labels, ["|00⟩", "|01⟩", "|10⟩", "|11⟩"]);
}
