use std::time::Duration;

use stepbar::{IconBatch, IconDescriptor, partition};
use stepbar_tui::{Animator, BatchTransitions, Phase, SpringAnimator, SpringConfig};

const FRAME: Duration = Duration::from_millis(16);

fn batches(count: usize) -> Vec<IconBatch> {
    let icons: Vec<IconDescriptor> = (0..count)
        .map(|i| IconDescriptor::new("MdStar", format!("a{i}")))
        .collect();
    partition(Some(icons.as_slice()), 3)
}

fn widths(transitions: &BatchTransitions, animator: &SpringAnimator) -> Vec<f32> {
    transitions.frames(animator).map(|f| f.width).collect()
}

fn keys(transitions: &BatchTransitions, animator: &SpringAnimator) -> Vec<String> {
    transitions
        .frames(animator)
        .map(|f| f.batch.key().to_string())
        .collect()
}

fn phases(transitions: &BatchTransitions, animator: &SpringAnimator) -> Vec<Phase> {
    transitions.frames(animator).map(|f| f.phase).collect()
}

fn step(transitions: &mut BatchTransitions, animator: &mut SpringAnimator) {
    animator.advance(FRAME);
    transitions.settle(animator);
}

fn run_until_idle(transitions: &mut BatchTransitions, animator: &mut SpringAnimator) {
    for _ in 0..1000 {
        if !transitions.is_animating(animator) {
            return;
        }
        step(transitions, animator);
    }
    panic!("transitions never settled");
}

// =============================================================================
// Enter Tests
// =============================================================================

#[test]
fn test_first_sync_does_not_animate() {
    let all = batches(7);
    let mut animator = SpringAnimator::new();
    let mut transitions = BatchTransitions::new(35, SpringConfig::DEFAULT);

    transitions.sync(&all[..1], &mut animator);

    assert_eq!(widths(&transitions, &animator), vec![105.0]);
    assert!(!transitions.is_animating(&animator));
}

#[test]
fn test_new_batch_opens_from_zero() {
    let all = batches(7);
    let mut animator = SpringAnimator::new();
    let mut transitions = BatchTransitions::new(35, SpringConfig::DEFAULT);
    transitions.sync(&all[..1], &mut animator);

    transitions.sync(&all[..2], &mut animator);
    assert_eq!(widths(&transitions, &animator), vec![105.0, 0.0]);
    assert!(transitions.is_animating(&animator));

    step(&mut transitions, &mut animator);
    let opening = widths(&transitions, &animator)[1];
    assert!(opening > 0.0 && opening < 105.0);

    run_until_idle(&mut transitions, &mut animator);
    assert_eq!(widths(&transitions, &animator), vec![105.0, 105.0]);
}

#[test]
fn test_partial_batch_opens_to_its_own_width() {
    let all = batches(7);
    let mut animator = SpringAnimator::new();
    let mut transitions = BatchTransitions::new(35, SpringConfig::DEFAULT);
    transitions.sync(&all[..1], &mut animator);
    transitions.sync(&all[..3], &mut animator);

    run_until_idle(&mut transitions, &mut animator);
    assert_eq!(widths(&transitions, &animator), vec![105.0, 105.0, 35.0]);
    assert_eq!(transitions.target_width(&all[2]), 35.0);
}

#[test]
fn test_empty_batch_has_zero_width() {
    let empty = batches(0);
    assert!(empty.is_empty());

    let mut animator = SpringAnimator::new();
    let mut transitions = BatchTransitions::new(35, SpringConfig::DEFAULT);
    transitions.sync(&[IconBatch::default()], &mut animator);

    assert_eq!(transitions.len(), 1);
    assert_eq!(widths(&transitions, &animator), vec![0.0]);
}

// =============================================================================
// Leave Tests
// =============================================================================

#[test]
fn test_leaving_batches_stay_until_exit_completes() {
    let all = batches(9);
    let mut animator = SpringAnimator::new();
    let mut transitions = BatchTransitions::new(35, SpringConfig::DEFAULT);
    transitions.sync(&all[..1], &mut animator);
    transitions.sync(&all, &mut animator);
    run_until_idle(&mut transitions, &mut animator);

    transitions.sync(&all[..1], &mut animator);
    assert_eq!(transitions.len(), 3);
    assert_eq!(
        phases(&transitions, &animator),
        vec![Phase::Enter, Phase::Leave, Phase::Leave]
    );
    assert_eq!(keys(&transitions, &animator), vec!["a0a1a2", "a3a4a5", "a6a7a8"]);

    run_until_idle(&mut transitions, &mut animator);
    assert_eq!(transitions.len(), 1);
    assert_eq!(keys(&transitions, &animator), vec!["a0a1a2"]);
    // Only the remaining batch's width and opacity are still held.
    assert_eq!(animator.len(), 2);
}

#[test]
fn test_exit_closes_before_fading() {
    let all = batches(6);
    let mut animator = SpringAnimator::new();
    let mut transitions = BatchTransitions::new(35, SpringConfig::DEFAULT);
    transitions.sync(&all[..1], &mut animator);
    transitions.sync(&all, &mut animator);
    run_until_idle(&mut transitions, &mut animator);

    transitions.sync(&all[..1], &mut animator);

    let mut saw_fade = false;
    for _ in 0..1000 {
        if transitions.len() == 1 {
            break;
        }
        let frame = transitions.frames(&animator).nth(1).unwrap();
        match frame.phase {
            Phase::Leave => assert_eq!(frame.opacity, 1.0),
            Phase::Fade => {
                assert_eq!(frame.width, 0.0);
                saw_fade = true;
            }
            Phase::Enter => panic!("batch should be leaving"),
        }
        step(&mut transitions, &mut animator);
    }
    assert!(saw_fade);
    assert_eq!(transitions.len(), 1);
}

#[test]
fn test_returning_batch_is_redirected() {
    let all = batches(6);
    let mut animator = SpringAnimator::new();
    let mut transitions = BatchTransitions::new(35, SpringConfig::DEFAULT);
    transitions.sync(&all[..1], &mut animator);
    transitions.sync(&all, &mut animator);
    run_until_idle(&mut transitions, &mut animator);

    transitions.sync(&all[..1], &mut animator);
    for _ in 0..3 {
        step(&mut transitions, &mut animator);
    }
    let closing = widths(&transitions, &animator)[1];
    assert!(closing < 105.0);

    transitions.sync(&all, &mut animator);
    assert_eq!(transitions.len(), 2);
    assert_eq!(phases(&transitions, &animator), vec![Phase::Enter, Phase::Enter]);
    assert_eq!(widths(&transitions, &animator)[1], closing);

    run_until_idle(&mut transitions, &mut animator);
    assert_eq!(widths(&transitions, &animator), vec![105.0, 105.0]);
}

#[test]
fn test_new_batch_enters_before_leaving_ones() {
    let all = batches(9);
    let mut animator = SpringAnimator::new();
    let mut transitions = BatchTransitions::new(35, SpringConfig::DEFAULT);
    transitions.sync(&[all[0].clone(), all[2].clone()], &mut animator);
    transitions.sync(&all[..1], &mut animator);

    transitions.sync(&all[..2], &mut animator);

    assert_eq!(keys(&transitions, &animator), vec!["a0a1a2", "a3a4a5", "a6a7a8"]);
    assert_eq!(
        phases(&transitions, &animator),
        vec![Phase::Enter, Phase::Enter, Phase::Leave]
    );
}

// =============================================================================
// Reduced Motion / Unmount Tests
// =============================================================================

#[test]
fn test_reduced_motion_exit_is_immediate() {
    let all = batches(6);
    let mut animator = SpringAnimator::new();
    animator.set_reduced_motion(true);
    let mut transitions = BatchTransitions::new(35, SpringConfig::DEFAULT);
    transitions.sync(&all[..1], &mut animator);

    transitions.sync(&all, &mut animator);
    assert_eq!(widths(&transitions, &animator), vec![105.0, 105.0]);

    transitions.sync(&all[..1], &mut animator);
    assert_eq!(transitions.settle(&mut animator), 1);
    assert_eq!(transitions.len(), 1);
}

#[test]
fn test_unmount_releases_everything() {
    let all = batches(9);
    let mut animator = SpringAnimator::new();
    let mut transitions = BatchTransitions::new(35, SpringConfig::DEFAULT);
    transitions.sync(&all[..1], &mut animator);
    transitions.sync(&all, &mut animator);
    transitions.sync(&all[..1], &mut animator);

    transitions.unmount(&mut animator);
    assert!(transitions.is_empty());
    assert!(animator.is_empty());
    assert!(!animator.has_active());
}
