//! Stage slide poses mapped onto terminal cells.

use ratatui::layout::Rect;

use folio_types::ui::{SLIDE_DISTANCE, SlidePose};

/// Where a slide in `pose` lands inside `stage`, clipped to the stage.
///
/// `x` is scaled so `SLIDE_DISTANCE` is one full stage width. Rotation
/// around the vertical axis narrows the slide by `cos(rotate_y)`.
/// Returns `None` when nothing of the slide is visible.
#[must_use]
pub fn apply_slide_pose(pose: SlidePose, stage: Rect) -> Option<Rect> {
    let turn = pose.rotate_y.to_radians().cos().abs();
    let scaled = scale_rect(stage, pose.scale.min(1.0), pose.scale.min(1.0) * turn);

    let shift = (pose.x / SLIDE_DISTANCE * f32::from(stage.width)).round() as i32;
    let left = i32::from(scaled.x) + shift;
    let right = left + i32::from(scaled.width);
    let stage_left = i32::from(stage.x);
    let stage_right = stage_left + i32::from(stage.width);

    let x = left.max(stage_left);
    let end = right.min(stage_right);
    if end <= x || scaled.height == 0 {
        return None;
    }
    Some(Rect {
        x: x as u16,
        y: scaled.y,
        width: (end - x) as u16,
        height: scaled.height,
    })
}

fn scale_rect(base: Rect, scale_y: f32, scale_x: f32) -> Rect {
    let width = (f32::from(base.width) * scale_x).round() as u16;
    let height = (f32::from(base.height) * scale_y).round() as u16;
    let width = width.max(1).min(base.width);
    let height = height.max(1).min(base.height);
    let x = base.x + (base.width.saturating_sub(width) / 2);
    let y = base.y + (base.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}
