use serde::Serialize;

/// On-screen notice of the latest card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardBanner {
    pub visible: bool,
    pub text: String,
    pub remaining_ticks: u32,
}

impl CardBanner {
    pub fn show(&mut self, text: String, ticks: u32) {
        self.text = text;
        self.remaining_ticks = ticks;
        self.visible = ticks > 0;
    }

    pub fn tick(&mut self) {
        if self.remaining_ticks == 0 {
            return;
        }

        self.remaining_ticks -= 1;

        if self.remaining_ticks == 0 {
            self.visible = false;
        }
    }

    pub fn hide(&mut self) {
        self.visible = false;
        self.remaining_ticks = 0;
    }
}
