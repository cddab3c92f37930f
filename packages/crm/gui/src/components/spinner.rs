use iced::widget::{container, text};
use iced::{Element, Length};
use std::time::{Duration, Instant};

use crate::theme;

/// Braille spinner. Frames advance with wall-clock time; the app's tick
/// subscription only has to trigger a redraw.
#[derive(Debug, Clone)]
pub struct Spinner {
    start_time: Instant,
    frames: &'static [&'static str],
    frame_duration: Duration,
}

impl Default for Spinner {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            frames: &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
            frame_duration: Duration::from_millis(80),
        }
    }
}

impl Spinner {
    pub fn current_frame(&self) -> &'static str {
        self.frame_at(self.start_time.elapsed())
    }

    fn frame_at(&self, elapsed: Duration) -> &'static str {
        let index = (elapsed.as_millis() / self.frame_duration.as_millis()) as usize;
        self.frames[index % self.frames.len()]
    }

    pub fn view<'a, Message: 'a>(&self) -> Element<'a, Message> {
        container(
            text(self.current_frame())
                .size(14)
                .color(theme::Colors::SPINNER),
        )
        .width(Length::Shrink)
        .into()
    }

    /// Spinner followed by a dim caption.
    pub fn with_label<'a, Message: 'a>(&self, label: &'a str) -> Element<'a, Message> {
        iced::widget::row![
            self.view(),
            text(label).size(14).color(theme::Colors::TEXT_DIM)
        ]
        .spacing(8)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_advance_and_wrap() {
        let spinner = Spinner::default();

        assert_eq!(spinner.frame_at(Duration::ZERO), "⠋");
        assert_eq!(spinner.frame_at(Duration::from_millis(85)), "⠙");
        assert_eq!(spinner.frame_at(Duration::from_millis(800)), "⠋");
    }
}
