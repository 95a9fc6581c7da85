use super::*;

#[test]
fn nothing_to_schedule_without_request() {
    let gate = FrameGate::new();
    assert!(!gate.try_schedule());
    assert!(!gate.is_pending());
}

#[test]
fn request_schedules_one_frame() {
    let gate = FrameGate::new();
    gate.request();
    assert!(gate.try_schedule());
    assert!(gate.is_pending());
}

#[test]
fn requests_while_pending_do_not_start_a_second_frame() {
    let gate = FrameGate::new();
    gate.request();
    assert!(gate.try_schedule());

    // A visibility batch and the typing timeout both land before the frame.
    gate.request();
    assert!(!gate.try_schedule());
    gate.request();
    assert!(!gate.try_schedule());
    assert!(gate.is_pending());
}

#[test]
fn frame_delivery_reopens_the_gate() {
    let gate = FrameGate::new();
    gate.request();
    assert!(gate.try_schedule());

    gate.delivered();
    assert!(!gate.is_pending());
    gate.request();
    assert!(gate.try_schedule());
}

#[test]
fn delivery_drops_requests_made_before_the_frame_ran() {
    let gate = FrameGate::new();
    gate.request();
    assert!(gate.try_schedule());
    gate.request();

    gate.delivered();
    assert!(!gate.try_schedule());
}

#[test]
fn one_chain_per_frame_across_many_frames() {
    let gate = FrameGate::new();
    let mut scheduled = 0;

    gate.request();
    for _ in 0..5 {
        // Extra requests from outside the frame loop.
        gate.request();
        if gate.try_schedule() {
            scheduled += 1;
        }
        gate.request();
        if gate.try_schedule() {
            scheduled += 1;
        }
        // The frame runs: it clears the gate, the still-active run requests again.
        gate.delivered();
        gate.request();
    }
    assert_eq!(scheduled, 5);
}
