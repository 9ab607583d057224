// SPDX-License-Identifier: MPL-2.0
//! Timestamp formatting for the player's time readouts.

/// Formats a time as `MM:SS.FF`, or `HH:MM:SS.FF` from one hour on.
///
/// `FF` is the frame number within the second at `fps`. Negative and
/// non-finite inputs render as zero, and an `fps` of zero leaves the frame
/// field at `00`. The output never depends on locale.
///
/// # Examples
///
/// ```
/// use player_sync::ui::time_display::format_time;
///
/// assert_eq!(format_time(65.0, 30), "01:05.00");
/// assert_eq!(format_time(65.5, 30), "01:05.15");
/// assert_eq!(format_time(3725.0, 24), "01:02:05.00");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_time(seconds: f64, fps: u32) -> String {
    let seconds = if seconds.is_finite() {
        seconds.max(0.0)
    } else {
        0.0
    };
    let fps_u64 = u64::from(fps);

    let (total_secs, frames) = if fps_u64 == 0 {
        (seconds.floor() as u64, 0)
    } else {
        // Small epsilon so values like 65.1 at 30 fps land on frame 3, not 2.
        let total_frames = (seconds * f64::from(fps) + 1e-6).floor() as u64;
        (total_frames / fps_u64, total_frames % fps_u64)
    };

    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}.{frames:02}")
    } else {
        format!("{minutes:02}:{secs:02}.{frames:02}")
    }
}
