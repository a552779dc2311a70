//! Remote-control input codes understood by the guide.

pub const KEY_LEFT: u32 = 37;
pub const KEY_UP: u32 = 38;
pub const KEY_RIGHT: u32 = 39;
pub const KEY_DOWN: u32 = 40;
pub const KEY_ENTER: u32 = 13;
pub const KEY_RED: u32 = 403;
pub const KEY_BLUE: u32 = 406;
pub const KEY_BACK: u32 = 461;
pub const KEY_B: u32 = 66;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideInput {
    NextEvent,
    PreviousEvent,
    ChannelDown,
    ChannelUp,
    ToggleRecording,
    Activate,
    Dismiss,
}

impl GuideInput {
    /// Map a device key code. Unknown codes yield `None`.
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            KEY_RIGHT => Some(GuideInput::NextEvent),
            KEY_LEFT => Some(GuideInput::PreviousEvent),
            KEY_DOWN => Some(GuideInput::ChannelDown),
            KEY_UP => Some(GuideInput::ChannelUp),
            KEY_RED => Some(GuideInput::ToggleRecording),
            KEY_ENTER => Some(GuideInput::Activate),
            KEY_BACK | KEY_BLUE | KEY_B => Some(GuideInput::Dismiss),
            _ => None,
        }
    }
}
