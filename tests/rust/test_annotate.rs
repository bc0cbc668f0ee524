use super::*;

fn path() -> Vec<Cell> {
    vec![
        Cell::new(0, 0),
        Cell::new(0, 1),
        Cell::new(0, 2),
        Cell::new(1, 2),
        Cell::new(2, 2),
        Cell::new(2, 3),
    ]
}

#[test]
fn test_first_cell_is_start_label() {
    let steps = annotate(&path(), &[Cell::new(0, 2)], Cell::new(2, 2));
    assert_eq!(steps[0].cell, Cell::new(0, 0));
    assert_eq!(steps[0].label, StepLabel::Start);
}

#[test]
fn test_gate_and_last_gate_labels() {
    let steps = annotate(&path(), &[Cell::new(0, 2)], Cell::new(2, 2));
    assert_eq!(steps[2].label, StepLabel::GateZone);
    assert_eq!(steps[4].label, StepLabel::LastGateZone);
}

#[test]
fn test_movement_labels() {
    let steps = annotate(&path(), &[Cell::new(0, 2)], Cell::new(2, 2));
    assert_eq!(steps[1].label, StepLabel::Move(Direction::Right));
    assert_eq!(steps[3].label, StepLabel::Move(Direction::Down));
    assert_eq!(steps[5].label, StepLabel::Move(Direction::Right));
}

#[test]
fn test_last_gate_takes_precedence_over_gate() {
    // The same cell is both a gate and the last gate.
    let shared = Cell::new(2, 2);
    let steps = annotate(&path(), &[shared], shared);
    assert_eq!(steps[4].label, StepLabel::LastGateZone);
    assert!(steps.iter().all(|s| s.label != StepLabel::GateZone));
}

#[test]
fn test_single_cell_path() {
    let steps = annotate(&[Cell::new(3, 3)], &[Cell::new(0, 0)], Cell::new(1, 1));
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].label, StepLabel::Start);
}

#[test]
fn test_label_display_strings() {
    assert_eq!(StepLabel::Start.to_string(), "Enter Contest Zone");
    assert_eq!(StepLabel::GateZone.to_string(), "Enter Gate Zone");
    assert_eq!(StepLabel::LastGateZone.to_string(), "Enter Last Gate Zone");
    assert_eq!(StepLabel::Move(Direction::Up).to_string(), "up");
}

#[test]
fn test_label_json_shape() {
    let start = serde_json::to_value(StepLabel::Start).unwrap();
    assert_eq!(start, serde_json::json!("start"));
    let mv = serde_json::to_value(StepLabel::Move(Direction::Left)).unwrap();
    assert_eq!(mv, serde_json::json!({ "move": "left" }));
}
