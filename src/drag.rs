/// Drag-reorder state machine, decoupled from the gesture source

/// Pointer travel (px) before a press becomes a drag. Keeps plain clicks
/// from turning into zero-distance reorders.
pub const DRAG_ACTIVATION_DISTANCE: f64 = 4.0;

/// A candidate drop position: a rendered tab and its geometric center
#[derive(Debug, Clone, PartialEq)]
pub struct DropTarget {
    pub id: String,
    pub center_x: f64,
    pub center_y: f64,
}

/// Reorder request produced by a committed drag
#[derive(Debug, Clone, PartialEq)]
pub struct Reorder {
    pub from_id: String,
    pub to_id: String,
}

/// Two-state drag machine: Idle or Dragging one tab.
///
/// A pointer-down only arms a candidate; the machine enters Dragging once
/// the pointer travels past the activation distance. Release resolves the
/// drop target by closest center and yields at most one `Reorder`.
#[derive(Debug, Default)]
pub struct DragController {
    pressed: Option<Pressed>,
    active_id: Option<String>,
}

#[derive(Debug)]
struct Pressed {
    id: String,
    x: f64,
    y: f64,
}

impl DragController {
    pub fn new() -> DragController {
        DragController::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.active_id.is_some()
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// Arm a drag candidate. Ignored while another drag is in flight
    /// (gesture start is exclusive to a single pointer).
    pub fn pointer_down(&mut self, id: &str, x: f64, y: f64) {
        if self.active_id.is_some() {
            return;
        }
        self.pressed = Some(Pressed {
            id: id.to_string(),
            x,
            y,
        });
    }

    /// Track pointer movement. Returns the tab id when the gesture just
    /// crossed the activation distance and became a drag.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<String> {
        if self.active_id.is_some() {
            return None;
        }
        let pressed = self.pressed.as_ref()?;
        let (dx, dy) = (x - pressed.x, y - pressed.y);
        if dx * dx + dy * dy < DRAG_ACTIVATION_DISTANCE * DRAG_ACTIVATION_DISTANCE {
            return None;
        }
        let id = pressed.id.clone();
        self.active_id = Some(id.clone());
        Some(id)
    }

    /// Commit the gesture. Yields a reorder when a drag was active and the
    /// closest-center drop target differs from the dragged tab. A press
    /// that never became a drag is a plain click and yields nothing.
    pub fn release(&mut self, x: f64, y: f64, targets: &[DropTarget]) -> Option<Reorder> {
        self.pressed = None;
        let from_id = self.active_id.take()?;
        let over = closest_center(x, y, targets)?;
        if over.id == from_id {
            return None;
        }
        Some(Reorder {
            from_id,
            to_id: over.id.clone(),
        })
    }

    /// Abort the gesture with no mutation
    pub fn cancel(&mut self) {
        self.pressed = None;
        self.active_id = None;
    }
}

/// Target whose center is nearest the release point; first wins on ties
pub fn closest_center(x: f64, y: f64, targets: &[DropTarget]) -> Option<&DropTarget> {
    targets.iter().min_by(|a, b| {
        distance_sq(x, y, a)
            .partial_cmp(&distance_sq(x, y, b))
            .unwrap_or(std::cmp::Ordering::Equal)
    })
}

fn distance_sq(x: f64, y: f64, target: &DropTarget) -> f64 {
    let (dx, dy) = (x - target.center_x, y - target.center_y);
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets() -> Vec<DropTarget> {
        vec![
            DropTarget {
                id: "a".to_string(),
                center_x: 25.0,
                center_y: 10.0,
            },
            DropTarget {
                id: "b".to_string(),
                center_x: 75.0,
                center_y: 10.0,
            },
            DropTarget {
                id: "c".to_string(),
                center_x: 125.0,
                center_y: 10.0,
            },
        ]
    }

    #[test]
    fn test_press_without_movement_is_a_click() {
        let mut drag = DragController::new();
        drag.pointer_down("a", 20.0, 10.0);

        assert!(!drag.is_dragging());
        assert_eq!(drag.pointer_move(21.0, 10.0), None);
        assert!(!drag.is_dragging());

        assert_eq!(drag.release(21.0, 10.0, &targets()), None);
    }

    #[test]
    fn test_movement_past_threshold_activates_drag() {
        let mut drag = DragController::new();
        drag.pointer_down("a", 20.0, 10.0);

        assert_eq!(drag.pointer_move(30.0, 10.0), Some("a".to_string()));
        assert!(drag.is_dragging());
        assert_eq!(drag.active_id(), Some("a"));

        // already dragging: no second activation
        assert_eq!(drag.pointer_move(40.0, 10.0), None);
    }

    #[test]
    fn test_release_over_closest_center_reorders() {
        let mut drag = DragController::new();
        drag.pointer_down("a", 20.0, 10.0);
        drag.pointer_move(30.0, 10.0);

        let reorder = drag.release(120.0, 12.0, &targets());

        assert_eq!(
            reorder,
            Some(Reorder {
                from_id: "a".to_string(),
                to_id: "c".to_string(),
            })
        );
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_release_over_own_tab_is_noop() {
        let mut drag = DragController::new();
        drag.pointer_down("a", 20.0, 10.0);
        drag.pointer_move(30.0, 10.0);

        assert_eq!(drag.release(30.0, 10.0, &targets()), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_release_with_no_targets_is_noop() {
        let mut drag = DragController::new();
        drag.pointer_down("a", 20.0, 10.0);
        drag.pointer_move(30.0, 10.0);

        assert_eq!(drag.release(30.0, 10.0, &[]), None);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_cancel_discards_gesture() {
        let mut drag = DragController::new();
        drag.pointer_down("a", 20.0, 10.0);
        drag.pointer_move(30.0, 10.0);

        drag.cancel();

        assert!(!drag.is_dragging());
        assert_eq!(drag.release(120.0, 10.0, &targets()), None);
    }

    #[test]
    fn test_second_pointer_down_ignored_while_dragging() {
        let mut drag = DragController::new();
        drag.pointer_down("a", 20.0, 10.0);
        drag.pointer_move(30.0, 10.0);

        drag.pointer_down("b", 75.0, 10.0);

        assert_eq!(drag.active_id(), Some("a"));
    }

    #[test]
    fn test_closest_center_picks_nearest() {
        let targets = targets();

        assert_eq!(closest_center(70.0, 0.0, &targets).map(|t| t.id.as_str()), Some("b"));
        assert_eq!(closest_center(0.0, 0.0, &targets).map(|t| t.id.as_str()), Some("a"));
        assert_eq!(closest_center(500.0, 0.0, &targets).map(|t| t.id.as_str()), Some("c"));
        assert_eq!(closest_center(0.0, 0.0, &[]), None);
    }

    #[test]
    fn test_closest_center_tie_takes_first() {
        let targets = targets();

        // equidistant between a (25) and b (75)
        assert_eq!(closest_center(50.0, 10.0, &targets).map(|t| t.id.as_str()), Some("a"));
    }
}
